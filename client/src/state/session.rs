//! Session state for the locally selected identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Set by the identity selector, read by the chat screen's route guard and
//! by every outbound event builder. The chat controller receives this state
//! explicitly rather than reaching into ambient globals; "no identity
//! selected" is the terminal no-session state and redirects to the selector.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Identity;
use crate::state::roster::Roster;

/// The two participants of the demo deployment.
///
/// The rest of the client is written against [`Roster`] and the generic
/// [`Identity`] type; this constant is the only place the two-user
/// configuration is spelled out.
pub const DEMO_PARTICIPANTS: [&str; 2] = ["user1", "user2"];

/// Cross-screen session state: which identity the user picked.
///
/// Cleared never — navigating back to the selector keeps the previous
/// choice, and re-entering the chat screen reuses it.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub identity: Option<Identity>,
}

/// Build the closed participant set for the demo deployment.
#[must_use]
pub fn demo_roster() -> Roster {
    Roster::new(DEMO_PARTICIPANTS.iter().map(|token| Identity::from(*token)))
}
