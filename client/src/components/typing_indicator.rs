//! Peer-typing indicator shown above the composer.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Shows a hint while the other participant is typing; renders nothing
/// otherwise so the layout stays stable via CSS min-height.
#[component]
pub fn TypingIndicator(chat: RwSignal<ChatState>) -> impl IntoView {
    view! {
        <div class="typing-indicator">
            <Show when=move || chat.get().peer_typing>
                <span class="typing-indicator__text">"The other user is typing..."</span>
            </Show>
        </div>
    }
}
