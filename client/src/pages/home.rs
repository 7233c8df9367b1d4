//! Identity selection page for the two-user demo.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Identity;
use crate::state::session::{DEMO_PARTICIPANTS, SessionState};

/// Display label for a demo participant id, e.g. `user1` becomes `User 1`.
/// Ids outside the `user<N>` shape are shown as-is.
fn participant_label(id: &str) -> String {
    id.strip_prefix("user")
        .filter(|suffix| !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()))
        .map_or_else(|| id.to_owned(), |suffix| format!("User {suffix}"))
}

/// Landing page — pick which demo participant this browser tab plays.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let select = move |id: &'static str| {
        session.update(|s| s.identity = Some(Identity::from(id)));
        navigate("/chat", NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <div class="home-card">
                <h1>"Pairchat"</h1>
                <p class="home-card__subtitle">"Choose your user"</p>
                <div class="home-card__choices">
                    {DEMO_PARTICIPANTS
                        .into_iter()
                        .map(|id| {
                            let select = select.clone();
                            view! {
                                <button class="btn home-card__choice" on:click=move |_| select(id)>
                                    {participant_label(id)}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
