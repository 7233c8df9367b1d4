//! Utility modules shared across pages and components.

pub mod event_emit;
pub mod time;
pub mod typing;
