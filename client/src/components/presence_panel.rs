//! Participant presence strip for the chat header.
//!
//! Renders roster presence state populated by `users-status` snapshots,
//! plus the socket connection status.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// One status dot per participant, with a connection-status summary.
#[component]
pub fn PresencePanel(chat: RwSignal<ChatState>) -> impl IntoView {
    let rows = move || chat.get().roster.statuses();

    view! {
        <div class="presence-panel">
            <div class="presence-panel__members">
                {move || {
                    rows()
                        .into_iter()
                        .map(|(identity, online)| {
                            view! {
                                <span class="presence-panel__member" class:presence-panel__member--online=online>
                                    <span class="presence-panel__dot"></span>
                                    {identity.as_str().to_owned()}
                                    {if online { " (online)" } else { " (offline)" }}
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <span class="presence-panel__connection">
                {move || chat.get().connection_status.label()}
            </span>
        </div>
    }
}
