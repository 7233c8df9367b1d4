//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surface while reading shared state from Leptos
//! context providers; all protocol side effects stay in the pages.

pub mod message_list;
pub mod presence_panel;
pub mod reaction_picker;
pub mod typing_indicator;
