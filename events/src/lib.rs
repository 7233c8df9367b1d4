//! Shared event model and JSON codec for the realtime chat transport.
//!
//! This crate owns the wire representation used by the chat client and any
//! counterpart relay process. Events are named JSON text frames of the form
//! `{"event": "send-message", "data": {...}}` — there is no versioning or
//! schema negotiation on this contract.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned by [`decode_event`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw text could not be decoded as a known chat event.
    #[error("failed to decode event frame: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A participant identity token.
///
/// Identities are opaque strings; the demo deployment uses `"user1"` and
/// `"user2"`, but nothing on the wire restricts the set — membership is
/// enforced by the client's roster, not by this type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Fallback label used when an inbound payload omits the sender.
    #[must_use]
    pub fn unknown() -> Self {
        Self("unknown".to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The closed set of reaction kinds a message can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Laugh,
    Wow,
    Sad,
    Angry,
    Sob,
    Vomit,
}

impl ReactionKind {
    /// Every kind, in picker display order.
    pub const ALL: [Self; 7] = [
        Self::Like,
        Self::Laugh,
        Self::Wow,
        Self::Sad,
        Self::Angry,
        Self::Sob,
        Self::Vomit,
    ];

    /// Wire name of the kind, matching its serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Laugh => "laugh",
            Self::Wow => "wow",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Sob => "sob",
            Self::Vomit => "vomit",
        }
    }
}

/// Payload of `send-message` (outbound) and `receive-message` (inbound).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    /// Message identifier. Generated by the sending client; the relay keeps
    /// it stable so the sender can reconcile an echoed copy.
    pub id: String,
    /// Message body text.
    pub message: String,
    /// Sending identity. Absent senders degrade to an "unknown" label on
    /// the receiving side rather than failing decode.
    #[serde(default)]
    pub sender_id: Option<Identity>,
    /// Canonical send time in milliseconds since the Unix epoch, if the
    /// relay assigned one. Receivers fall back to local receipt time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

/// Payload of `react-to-message` (outbound) and `message-reacted` (inbound).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionPayload {
    /// Target message identifier.
    pub message_id: String,
    /// Submitted reaction kind; repeated submission toggles it off.
    pub reaction: ReactionKind,
    /// Identity performing the reaction.
    pub sender_id: Identity,
}

/// A single named event on the chat wire protocol.
///
/// Variant names map to the wire event names via kebab-case, so the enum is
/// the single source of truth for the socket contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ChatEvent {
    /// Announce presence (outbound).
    UserConnected(Identity),
    /// Announce departure (outbound).
    UserDisconnected(Identity),
    /// Local identity started typing (outbound).
    Typing(Identity),
    /// Local identity went idle or cleared the compose field (outbound).
    StopTyping(Identity),
    /// New chat message (outbound).
    SendMessage(MessagePayload),
    /// Reaction toggle/replace/add (outbound).
    ReactToMessage(ReactionPayload),
    /// Authoritative full snapshot of online identities (inbound).
    UsersStatus(Vec<Identity>),
    /// A participant started typing (inbound; may echo the local identity).
    UserTyping(Identity),
    /// A participant stopped typing (inbound; may echo the local identity).
    UserStoppedTyping(Identity),
    /// Inbound chat message.
    ReceiveMessage(MessagePayload),
    /// Inbound reaction change.
    MessageReacted(ReactionPayload),
}

impl ChatEvent {
    /// Wire name of the event, for logging and diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserConnected(_) => "user-connected",
            Self::UserDisconnected(_) => "user-disconnected",
            Self::Typing(_) => "typing",
            Self::StopTyping(_) => "stop-typing",
            Self::SendMessage(_) => "send-message",
            Self::ReactToMessage(_) => "react-to-message",
            Self::UsersStatus(_) => "users-status",
            Self::UserTyping(_) => "user-typing",
            Self::UserStoppedTyping(_) => "user-stopped-typing",
            Self::ReceiveMessage(_) => "receive-message",
            Self::MessageReacted(_) => "message-reacted",
        }
    }
}

/// Encode an event into a JSON text frame.
#[must_use]
pub fn encode_event(event: &ChatEvent) -> String {
    // Serializing these types cannot fail: no non-string map keys and no
    // fallible Serialize impls are involved.
    serde_json::to_string(event).unwrap_or_default()
}

/// Decode a JSON text frame into an event.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed JSON, unknown event names,
/// or payloads that do not match the event's schema.
pub fn decode_event(text: &str) -> Result<ChatEvent, CodecError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
