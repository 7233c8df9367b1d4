//! Networking modules for the websocket event protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `socket_client` manages the websocket lifecycle and inbound dispatch;
//! `types` re-exports the shared wire schema from the `events` crate.

pub mod socket_client;
pub mod types;
