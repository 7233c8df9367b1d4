//! Chat page owning the live session lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page activates the session on mount: it spawns the socket client if
//! none is running, marks chat state active, announces presence, and seeds
//! the roster. On teardown it announces the disconnect exactly once and
//! resets session state so a later visit starts clean.
//!
//! The composer drives the typing debounce: `typing` goes out on the first
//! keystroke, `stop-typing` when the input empties or the idle deadline
//! fires with no edit since it was armed.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::EventSender;
use crate::components::message_list::MessageList;
use crate::components::presence_panel::PresencePanel;
use crate::components::typing_indicator::TypingIndicator;
use crate::net::types::{Identity, ReactionKind, ReactionPayload};
use crate::state::chat::{ChatMessage, ChatState};
use crate::state::session::{SessionState, demo_roster};
use crate::util::event_emit;
use crate::util::typing::{TypingDebounce, TypingSignal};

/// Normalize composer text for sending. Empty and whitespace-only bodies
/// are not sendable.
fn outbound_body(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Build the optimistic local copy of an outbound message.
fn local_echo(id: String, body: String, sender: Identity, sent_at_ms: f64) -> ChatMessage {
    ChatMessage { id, body, sender, timestamp: sent_at_ms, reactions: Vec::new() }
}

/// Take the composer content for sending.
///
/// Returns the trimmed body plus the debounce signal produced by the field
/// clearing, or `None` for an unsendable body (debounce untouched).
fn take_compose(raw: &str, debounce: &mut TypingDebounce) -> Option<(String, TypingSignal)> {
    let body = outbound_body(raw)?;
    Some((body, debounce.on_input("")))
}

/// Chat page — message list, presence, typing indicator, and composer.
/// Redirects to `/` if no identity has been selected.
#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<RwSignal<EventSender>>();
    let navigate = use_navigate();

    // Redirect home if the session has no identity (deep link or reload).
    let navigate_guard = navigate.clone();
    Effect::new(move || {
        if session.get().identity.is_none() {
            navigate_guard("/", NavigateOptions::default());
        }
    });

    let on_leave = move |_| navigate("/", NavigateOptions::default());

    let compose = RwSignal::new(String::new());
    let debounce = RwSignal::new(TypingDebounce::default());
    let activated = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let page_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));

    // One-shot session activation once an identity is available.
    Effect::new(move || {
        if activated.get() {
            return;
        }
        let Some(identity) = session.get().identity else {
            return;
        };
        activated.set(true);

        #[cfg(feature = "csr")]
        if !sender.get_untracked().is_connected() {
            let tx = crate::net::socket_client::spawn_socket_client(session, chat);
            sender.set(EventSender::connected(tx));
        }

        chat.update(|c| {
            c.session_active = true;
            if c.roster.is_empty() {
                c.roster = demo_roster();
            }
            // Optimistic until the next users-status snapshot.
            c.roster.set_online(&identity, true);
        });
        event_emit::send_presence_connected(sender, &identity);
    });

    // Arm the idle deadline for the debounce's current epoch.
    #[cfg(feature = "csr")]
    let arm_deadline = {
        let page_alive = page_alive.clone();
        move |epoch: u64| {
            let page_alive = page_alive.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    crate::util::typing::TYPING_IDLE_MS,
                ))
                .await;
                if !page_alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                let mut signal = TypingSignal::None;
                debounce.update(|d| signal = d.on_deadline(epoch));
                if signal == TypingSignal::Stop
                    && let Some(identity) = session.get_untracked().identity
                {
                    event_emit::send_typing_stopped(sender, &identity);
                }
            });
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        compose.set(value.clone());

        let Some(identity) = session.get_untracked().identity else {
            return;
        };
        let mut signal = TypingSignal::None;
        debounce.update(|d| signal = d.on_input(&value));
        match signal {
            TypingSignal::Start => event_emit::send_typing_started(sender, &identity),
            TypingSignal::Stop => event_emit::send_typing_stopped(sender, &identity),
            TypingSignal::None => {}
        }

        // Every edit while typing re-arms the deadline at the new epoch.
        #[cfg(feature = "csr")]
        if debounce.get_untracked().is_typing() {
            arm_deadline(debounce.get_untracked().epoch());
        }
    };

    let do_send = move || {
        let Some(identity) = session.get_untracked().identity else {
            return;
        };
        let mut taken = None;
        debounce.update(|d| taken = take_compose(&compose.get_untracked(), d));
        let Some((body, stop_signal)) = taken else {
            return;
        };

        let id = uuid::Uuid::new_v4().to_string();
        event_emit::send_chat_message(sender, &id, &body, &identity);
        chat.update(|c| {
            c.push_local_message(local_echo(id, body, identity.clone(), crate::util::time::now_ms()));
        });

        compose.set(String::new());
        if stop_signal == TypingSignal::Stop {
            event_emit::send_typing_stopped(sender, &identity);
        }
    };

    let on_send_click = move |_| do_send();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    // Optimistic local apply; the relay broadcast is idempotent for the
    // originator because the same transition is applied by id.
    let on_react = Callback::new(move |(message_id, reaction): (String, ReactionKind)| {
        let Some(identity) = session.get_untracked().identity else {
            return;
        };
        event_emit::send_reaction(sender, &message_id, reaction, &identity);
        chat.update(|c| {
            c.apply_reaction_event(&ReactionPayload {
                message_id,
                reaction,
                sender_id: identity.clone(),
            });
        });
    });

    on_cleanup(move || {
        #[cfg(feature = "csr")]
        page_alive.store(false, std::sync::atomic::Ordering::Relaxed);

        if activated.get_untracked()
            && let Some(identity) = session.get_untracked().identity
        {
            event_emit::send_presence_disconnected(sender, &identity);
        }
        chat.update(|c| c.reset());
    });

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <button class="btn chat-page__leave" on:click=on_leave>
                    "Back"
                </button>
                <h1>"Pairchat"</h1>
                <span class="chat-page__self">
                    {move || {
                        session.get().identity.map(|i| i.as_str().to_owned()).unwrap_or_default()
                    }}
                </span>
            </header>
            <PresencePanel chat=chat />
            <MessageList chat=chat on_react=on_react />
            <TypingIndicator chat=chat />
            <div class="chat-page__composer">
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Type your message here..."
                    prop:value=move || compose.get()
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <button class="btn chat-page__send" on:click=on_send_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}
