//! # client
//!
//! Leptos + WASM frontend for the two-user realtime chat demo.
//!
//! This crate contains pages, components, application state, and the
//! WebSocket event client. The chat wire contract (named JSON events) lives
//! in the sibling `events` crate; the server side is an external relay
//! process reachable only through that contract.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
