//! Shared outbound event emission helpers.
//!
//! Every action the chat screen performs maps to one named event on the
//! wire. The builders here produce the event values; the `send_*` wrappers
//! push them through the shared sender signal so call sites never touch the
//! socket channel directly. A send while disconnected is dropped, matching
//! the fire-and-forget contract of the relay protocol.

#[cfg(test)]
#[path = "event_emit_test.rs"]
mod event_emit_test;

use leptos::prelude::{GetUntracked, RwSignal};

use crate::app::EventSender;
use crate::net::types::{ChatEvent, Identity, MessagePayload, ReactionKind, ReactionPayload};

/// Build a `user-connected` presence announcement.
fn presence_connected_event(identity: &Identity) -> ChatEvent {
    ChatEvent::UserConnected(identity.clone())
}

/// Build a `user-disconnected` presence announcement.
fn presence_disconnected_event(identity: &Identity) -> ChatEvent {
    ChatEvent::UserDisconnected(identity.clone())
}

/// Build a `typing` notification.
fn typing_started_event(identity: &Identity) -> ChatEvent {
    ChatEvent::Typing(identity.clone())
}

/// Build a `stop-typing` notification.
fn typing_stopped_event(identity: &Identity) -> ChatEvent {
    ChatEvent::StopTyping(identity.clone())
}

/// Build a `send-message` event carrying a locally generated id so the
/// relay's echo can be reconciled against the optimistic copy.
fn chat_message_event(id: &str, body: &str, sender: &Identity) -> ChatEvent {
    ChatEvent::SendMessage(MessagePayload {
        id: id.to_owned(),
        message: body.to_owned(),
        sender_id: Some(sender.clone()),
        timestamp: None,
    })
}

/// Build a `react-to-message` event.
fn reaction_event(message_id: &str, reaction: ReactionKind, sender: &Identity) -> ChatEvent {
    ChatEvent::ReactToMessage(ReactionPayload {
        message_id: message_id.to_owned(),
        reaction,
        sender_id: sender.clone(),
    })
}

/// Announce the local identity as online.
pub fn send_presence_connected(sender: RwSignal<EventSender>, identity: &Identity) {
    let _ = sender.get_untracked().send(&presence_connected_event(identity));
}

/// Announce the local identity as offline. Emitted once on screen teardown.
pub fn send_presence_disconnected(sender: RwSignal<EventSender>, identity: &Identity) {
    let _ = sender.get_untracked().send(&presence_disconnected_event(identity));
}

/// Tell the peer the local identity started typing.
pub fn send_typing_started(sender: RwSignal<EventSender>, identity: &Identity) {
    let _ = sender.get_untracked().send(&typing_started_event(identity));
}

/// Tell the peer the local identity stopped typing.
pub fn send_typing_stopped(sender: RwSignal<EventSender>, identity: &Identity) {
    let _ = sender.get_untracked().send(&typing_stopped_event(identity));
}

/// Send a chat message. Call sites append the optimistic local echo with the
/// same `id` themselves.
pub fn send_chat_message(sender: RwSignal<EventSender>, id: &str, body: &str, local: &Identity) {
    let _ = sender.get_untracked().send(&chat_message_event(id, body, local));
}

/// Send a reaction to an existing message.
pub fn send_reaction(
    sender: RwSignal<EventSender>,
    message_id: &str,
    reaction: ReactionKind,
    local: &Identity,
) {
    let _ = sender.get_untracked().send(&reaction_event(message_id, reaction, local));
}
