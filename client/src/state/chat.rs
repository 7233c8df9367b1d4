//! Chat-session state for the active conversation.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model stores the local projection of one chat session: the message
//! list, the participant roster with presence flags, and the peer-typing
//! indicator. It is populated by the socket dispatcher and by the chat
//! screen's optimistic updates, and reset when the screen is torn down.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{Identity, MessagePayload, ReactionPayload};
use crate::state::reactions::{Reaction, apply_reaction};
use crate::state::roster::Roster;

/// A single chat message, local or remote.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Message identifier. Locally generated for own messages, carried on
    /// the wire for remote ones.
    pub id: String,
    /// Message body text.
    pub body: String,
    /// Sending identity; `unknown` when the payload omitted it.
    pub sender: Identity,
    /// Display timestamp in milliseconds since the Unix epoch.
    pub timestamp: f64,
    /// Reactions attached to this message, at most one per identity.
    pub reactions: Vec<Reaction>,
}

/// Socket connection status, as observed by the client task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; socket is closed or not yet opened.
    #[default]
    Disconnected,
    /// WebSocket handshake is in progress.
    Connecting,
    /// WebSocket is open and forwarding events.
    Connected,
}

impl ConnectionStatus {
    /// Short human-readable label for status lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
        }
    }
}

/// Chat-screen state: messages, presence, and the peer-typing flag.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Messages in local append order (send-or-receive order, not any
    /// server-side total order).
    pub messages: Vec<ChatMessage>,
    /// Closed participant set with online flags.
    pub roster: Roster,
    /// True while the other participant is typing.
    pub peer_typing: bool,
    /// Current socket lifecycle state.
    pub connection_status: ConnectionStatus,
    /// True while the chat screen is mounted; inbound dispatch is ignored
    /// otherwise (the single-dispatcher equivalent of unsubscribing).
    pub session_active: bool,
}

impl ChatState {
    /// Append an optimistic local echo of an outbound message.
    pub fn push_local_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Ingest an inbound `receive-message` payload.
    ///
    /// If a message with the same id already exists (the relay echoed our
    /// own send back), the canonical timestamp is adopted in place instead
    /// of appending a duplicate. Otherwise the message is appended with the
    /// payload timestamp when present, else the local receipt time.
    pub fn ingest_remote_message(&mut self, payload: &MessagePayload, received_at_ms: f64) {
        let timestamp = payload.timestamp.unwrap_or(received_at_ms);
        if let Some(existing) = self.messages.iter_mut().find(|msg| msg.id == payload.id) {
            existing.timestamp = timestamp;
            return;
        }

        let sender = payload.sender_id.clone().unwrap_or_else(Identity::unknown);
        self.messages.push(ChatMessage {
            id: payload.id.clone(),
            body: payload.message.clone(),
            sender,
            timestamp,
            reactions: Vec::new(),
        });
    }

    /// Apply a reaction transition to the targeted message.
    ///
    /// Used verbatim by the optimistic local path and the `message-reacted`
    /// broadcast path. A payload naming an unknown message id is dropped
    /// silently.
    pub fn apply_reaction_event(&mut self, payload: &ReactionPayload) {
        let Some(message) = self.messages.iter_mut().find(|msg| msg.id == payload.message_id)
        else {
            return;
        };
        apply_reaction(&mut message.reactions, &payload.sender_id, payload.reaction);
    }

    /// Discard all session-scoped state on screen teardown.
    ///
    /// The physical socket outlives the chat screen, so its status is the
    /// one field that survives.
    pub fn reset(&mut self) {
        let connection_status = self.connection_status;
        *self = Self::default();
        self.connection_status = connection_status;
    }
}
