//! Inbound event application extracted from `socket_client`.
//!
//! DESIGN
//! ======
//! These functions mutate a plain `&mut ChatState`, keeping every inbound
//! state transition testable on the host. The socket dispatcher is a thin
//! wrapper that feeds them from the live signal.

#[cfg(test)]
#[path = "socket_client_apply_test.rs"]
mod socket_client_apply_test;

#[cfg(any(test, feature = "csr"))]
use crate::net::types::{ChatEvent, Identity};
#[cfg(any(test, feature = "csr"))]
use crate::state::chat::ChatState;

/// Apply one inbound event to chat state.
///
/// `local` is the session's own identity; typing events echoing it are
/// ignored (the relay may broadcast events back to their originator).
/// Returns `false` for event kinds the relay should never send to a client.
#[cfg(any(test, feature = "csr"))]
pub(super) fn apply_event(
    event: &ChatEvent,
    chat: &mut ChatState,
    local: &Identity,
    received_at_ms: f64,
) -> bool {
    match event {
        ChatEvent::UsersStatus(online) => {
            chat.roster.apply_status(online);
            true
        }
        ChatEvent::UserTyping(identity) => {
            if identity != local {
                chat.peer_typing = true;
            }
            true
        }
        ChatEvent::UserStoppedTyping(identity) => {
            if identity != local {
                chat.peer_typing = false;
            }
            true
        }
        ChatEvent::ReceiveMessage(payload) => {
            chat.ingest_remote_message(payload, received_at_ms);
            true
        }
        ChatEvent::MessageReacted(payload) => {
            chat.apply_reaction_event(payload);
            true
        }
        // Client-to-relay events; a relay echoing these raw is misbehaving.
        ChatEvent::UserConnected(_)
        | ChatEvent::UserDisconnected(_)
        | ChatEvent::Typing(_)
        | ChatEvent::StopTyping(_)
        | ChatEvent::SendMessage(_)
        | ChatEvent::ReactToMessage(_) => false,
    }
}
