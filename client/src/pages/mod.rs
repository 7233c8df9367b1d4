//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` selects the demo identity; `chat` owns the live session: socket
//! spawn, presence announcements, typing debounce, and teardown.

pub mod chat;
pub mod home;
