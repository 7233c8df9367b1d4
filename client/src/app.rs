//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{chat::ChatPage, home::HomePage};
use crate::state::chat::ChatState;
use crate::state::session::SessionState;

/// Handle for emitting chat events over the active socket connection.
///
/// Wraps the outbound channel drained by the socket client task. The default
/// value is unconnected: sends are dropped and `is_connected` reports false,
/// which is what lets the chat screen decide when to (re)spawn the client.
#[derive(Clone, Default)]
pub struct EventSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl EventSender {
    /// Wrap the outbound channel of a freshly spawned socket client.
    #[cfg(feature = "csr")]
    pub fn connected(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// True while the socket client task is alive and draining the channel.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            self.tx.as_ref().is_some_and(|tx| !tx.is_closed())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }

    /// Encode and queue one event for the relay.
    ///
    /// Returns `false` when there is no live connection; emission is
    /// fire-and-forget either way.
    pub fn send(&self, event: &events::ChatEvent) -> bool {
        #[cfg(feature = "csr")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| tx.unbounded_send(events::encode_event(event)).is_ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = event;
            false
        }
    }
}

/// Root application component.
///
/// Provides the shared session, chat, and sender contexts and sets up
/// client-side routing: the identity selector at `/`, the chat screen at
/// `/chat`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let chat = RwSignal::new(ChatState::default());
    let sender = RwSignal::new(EventSender::default());

    provide_context(session);
    provide_context(chat);
    provide_context(sender);

    view! {
        <Title text="Pairchat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
            </Routes>
        </Router>
    }
}
