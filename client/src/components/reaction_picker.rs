//! Emoji reaction picker rendered under each message.

use leptos::prelude::*;

use crate::net::types::ReactionKind;

/// Emoji glyph for a reaction kind.
#[must_use]
pub fn reaction_emoji(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Like => "\u{1F44D}",
        ReactionKind::Laugh => "\u{1F602}",
        ReactionKind::Wow => "\u{1F62E}",
        ReactionKind::Sad => "\u{1F622}",
        ReactionKind::Angry => "\u{1F620}",
        ReactionKind::Sob => "\u{1F62D}",
        ReactionKind::Vomit => "\u{1F92E}",
    }
}

/// Row of reaction buttons. Picking the kind already set by this identity
/// toggles it off; the transition itself lives in chat state.
#[component]
pub fn ReactionPicker(on_pick: Callback<ReactionKind>) -> impl IntoView {
    view! {
        <div class="reaction-picker">
            {ReactionKind::ALL
                .into_iter()
                .map(|kind| {
                    view! {
                        <button
                            class="reaction-picker__option"
                            title=kind.as_str()
                            on:click=move |_| on_pick.run(kind)
                        >
                            {reaction_emoji(kind)}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
