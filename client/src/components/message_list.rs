//! Scrollable message history with per-message reactions.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::reaction_picker::{ReactionPicker, reaction_emoji};
use crate::net::types::ReactionKind;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;
use crate::util::time::format_clock;

/// Message history. Emits `(message_id, kind)` on `on_react` when a reaction
/// button is picked; sticks to the bottom as messages arrive.
#[component]
pub fn MessageList(
    chat: RwSignal<ChatState>,
    on_react: Callback<(String, ReactionKind)>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let scroll_ref = NodeRef::<Div>::new();

    // Pin the viewport to the newest message.
    #[cfg(feature = "csr")]
    Effect::new(move || {
        let count = chat.get().messages.len();
        if count == 0 {
            return;
        }
        if let Some(el) = scroll_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let rows = move || {
        let local = session.get().identity;
        chat.get()
            .messages
            .into_iter()
            .map(|message| {
                let is_own = local.as_ref() == Some(&message.sender);
                let sender = message.sender.as_str().to_owned();
                let time = format_clock(message.timestamp);
                let chips = message
                    .reactions
                    .iter()
                    .map(|reaction| {
                        view! {
                            <span class="message__reaction" title=reaction.by.as_str().to_owned()>
                                {reaction_emoji(reaction.kind)}
                            </span>
                        }
                    })
                    .collect::<Vec<_>>();
                let message_id = message.id.clone();
                let pick = Callback::new(move |kind: ReactionKind| {
                    on_react.run((message_id.clone(), kind));
                });
                view! {
                    <div class="message" class:message--own=is_own>
                        <div class="message__meta">
                            <span class="message__sender">{sender}</span>
                            <span class="message__time">{time}</span>
                        </div>
                        <div class="message__body">{message.body}</div>
                        <div class="message__reactions">{chips}</div>
                        <ReactionPicker on_pick=pick />
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="message-list" node_ref=scroll_ref>
            <Show
                when=move || !chat.get().messages.is_empty()
                fallback=move || view! { <div class="message-list__empty">"No messages yet."</div> }
            >
                {rows}
            </Show>
        </div>
    }
}
