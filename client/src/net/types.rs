//! Shared wire-protocol types for the client/relay boundary.
//!
//! DESIGN
//! ======
//! The `events` crate owns the wire representation; this module is the
//! single import point so client code never reaches into the codec crate
//! directly.

pub use events::{ChatEvent, Identity, MessagePayload, ReactionKind, ReactionPayload};
