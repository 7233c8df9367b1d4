//! Typing-notification debounce for the message composer.
//!
//! DESIGN
//! ======
//! The composer emits `typing` on the first keystroke and `stop-typing`
//! either when the input is cleared or after `TYPING_IDLE_MS` of silence.
//! Each keystroke bumps an epoch counter and arms a fresh deadline; a
//! deadline only fires if its epoch is still current, so stale timers from
//! earlier keystrokes are no-ops. The struct itself is pure state — the
//! caller owns the actual timers and the event emission.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Idle time after the last keystroke before `stop-typing` is sent.
pub const TYPING_IDLE_MS: u64 = 3000;

/// What the caller should emit after feeding the debounce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingSignal {
    /// Emit `typing` and arm a deadline for the current epoch.
    Start,
    /// Emit `stop-typing`.
    Stop,
    /// Emit nothing.
    None,
}

/// Debounce state for the local typing indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypingDebounce {
    /// Bumped on every input edit; stale deadlines compare unequal.
    epoch: u64,
    /// Whether a `typing` notification is currently outstanding.
    typing: bool,
}

impl TypingDebounce {
    /// Record one composer edit with the new input value.
    ///
    /// Non-empty input keeps (or starts) the typing state; emptied input
    /// stops it immediately rather than waiting for the idle deadline.
    pub fn on_input(&mut self, value: &str) -> TypingSignal {
        self.epoch += 1;
        if value.trim().is_empty() {
            if self.typing {
                self.typing = false;
                return TypingSignal::Stop;
            }
            return TypingSignal::None;
        }

        if self.typing {
            // Already announced; the bumped epoch re-arms the deadline.
            TypingSignal::None
        } else {
            self.typing = true;
            TypingSignal::Start
        }
    }

    /// An armed idle deadline fired. Stops typing only if no edit happened
    /// since the deadline was armed.
    pub fn on_deadline(&mut self, epoch: u64) -> TypingSignal {
        if self.typing && epoch == self.epoch {
            self.typing = false;
            TypingSignal::Stop
        } else {
            TypingSignal::None
        }
    }

    /// Drop the typing state without emitting, invalidating armed deadlines.
    pub fn cancel(&mut self) {
        self.epoch += 1;
        self.typing = false;
    }

    /// Current epoch, captured when arming a deadline.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.typing
    }
}
