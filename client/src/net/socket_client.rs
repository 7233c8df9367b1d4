//! WebSocket event client for real-time communication with the relay.
//!
//! The socket client owns the WebSocket lifecycle: connection, outbound
//! event forwarding, inbound decode + dispatch, and connection-status
//! updates. It is the bridge between the relay's named-event protocol and
//! the Leptos UI state.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "csr")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! A transport failure is logged and surfaces only as a `Disconnected`
//! status — no retry, no user-visible error state. The chat screen respawns
//! the client on its next activation. Inbound frames that fail to decode
//! are discarded without touching state.

#[path = "socket_client_apply.rs"]
mod socket_client_apply;

#[cfg(feature = "csr")]
use self::socket_client_apply::apply_event;
#[cfg(feature = "csr")]
use crate::net::types::ChatEvent;
#[cfg(feature = "csr")]
use crate::state::chat::{ChatState, ConnectionStatus};
#[cfg(feature = "csr")]
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use leptos::prelude::{GetUntracked, RwSignal, Update};

/// Relay address used when the page URL does not carry an override.
#[cfg(feature = "csr")]
const DEFAULT_RELAY_AUTHORITY: &str = "127.0.0.1:3001";

/// Spawn the WebSocket client lifecycle as a local async task.
///
/// Returns the outbound channel; encoded events queued on it are flushed to
/// the relay once the connection opens. The task runs until the connection
/// closes or fails — there is no reconnect loop.
#[cfg(feature = "csr")]
pub fn spawn_socket_client(
    session: RwSignal<SessionState>,
    chat: RwSignal<ChatState>,
) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();

    leptos::task::spawn_local(socket_client_loop(session, chat, rx));

    tx
}

/// One connection lifecycle: connect, run until the socket closes, report.
#[cfg(feature = "csr")]
async fn socket_client_loop(
    session: RwSignal<SessionState>,
    chat: RwSignal<ChatState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    chat.update(|c| c.connection_status = ConnectionStatus::Connecting);

    let url = socket_url();
    match connect_and_run(&url, session, chat, rx).await {
        Ok(()) => leptos::logging::log!("socket closed cleanly"),
        Err(e) => leptos::logging::warn!("socket error: {e}"),
    }

    chat.update(|c| c.connection_status = ConnectionStatus::Disconnected);
}

/// Resolve the relay WebSocket URL.
///
/// A `?relay=host:port` query parameter on the page URL overrides the
/// default, so two demo clients can point at a shared relay.
#[cfg(feature = "csr")]
fn socket_url() -> String {
    let authority = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| relay_override(&search))
        .unwrap_or_else(|| DEFAULT_RELAY_AUTHORITY.to_owned());
    format!("ws://{authority}/ws")
}

/// Extract `relay=...` from a location query string.
#[cfg(any(test, feature = "csr"))]
fn relay_override(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("relay="))
        .filter(|authority| !authority.is_empty())
        .map(str::to_owned)
}

/// Connect to the relay and process messages until disconnect.
#[cfg(feature = "csr")]
async fn connect_and_run(
    url: &str,
    session: RwSignal<SessionState>,
    chat: RwSignal<ChatState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    chat.update(|c| c.connection_status = ConnectionStatus::Connected);

    // Forward outgoing events from the shared channel to the socket.
    let send_task = async {
        use futures::SinkExt;
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and dispatch inbound events.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Ok(event) = events::decode_event(&text) {
                        dispatch_event(&event, session, chat);
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("socket recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run send/recv loops; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Dispatch one inbound event into chat state.
///
/// Events arriving with no identity selected, or while the chat screen is
/// not mounted, are dropped — the equivalent of unsubscribed handlers.
#[cfg(feature = "csr")]
fn dispatch_event(event: &ChatEvent, session: RwSignal<SessionState>, chat: RwSignal<ChatState>) {
    let Some(local) = session.get_untracked().identity else {
        return;
    };
    if !chat.get_untracked().session_active {
        return;
    }

    let received_at = crate::util::time::now_ms();
    chat.update(|c| {
        if !apply_event(event, c, &local, received_at) {
            leptos::logging::log!("ignoring unexpected inbound event: {}", event.name());
        }
    });
}

#[cfg(test)]
#[path = "socket_client_test.rs"]
mod socket_client_test;
