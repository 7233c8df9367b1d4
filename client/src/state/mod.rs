//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`, `roster`, `reactions`) so
//! individual components can depend on small focused models, and so the
//! state transitions the socket dispatcher performs stay testable on the
//! host without a browser environment.

pub mod chat;
pub mod reactions;
pub mod roster;
pub mod session;
