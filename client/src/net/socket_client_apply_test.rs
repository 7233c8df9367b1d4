use super::*;
use crate::net::types::{MessagePayload, ReactionKind, ReactionPayload};
use crate::state::session::demo_roster;

fn active_state() -> ChatState {
    let mut state = ChatState::default();
    state.roster = demo_roster();
    state.session_active = true;
    state
}

fn message_payload(id: &str, body: &str, sender: &str) -> MessagePayload {
    MessagePayload {
        id: id.to_owned(),
        message: body.to_owned(),
        sender_id: Some(Identity::from(sender)),
        timestamp: None,
    }
}

fn reaction_payload(message_id: &str, kind: ReactionKind, sender: &str) -> ReactionPayload {
    ReactionPayload {
        message_id: message_id.to_owned(),
        reaction: kind,
        sender_id: Identity::from(sender),
    }
}

// =============================================================
// Presence snapshots
// =============================================================

#[test]
fn users_status_rebuilds_the_full_mapping() {
    let mut state = active_state();
    state.roster.set_online(&Identity::from("user2"), true);

    let handled = apply_event(
        &ChatEvent::UsersStatus(vec![Identity::from("user1")]),
        &mut state,
        &Identity::from("user1"),
        0.0,
    );

    assert!(handled);
    assert!(state.roster.is_online(&Identity::from("user1")));
    assert!(!state.roster.is_online(&Identity::from("user2")));
}

// =============================================================
// Typing indicator
// =============================================================

#[test]
fn peer_typing_follows_remote_typing_events() {
    let mut state = active_state();
    let local = Identity::from("user1");

    apply_event(&ChatEvent::UserTyping(Identity::from("user2")), &mut state, &local, 0.0);
    assert!(state.peer_typing);

    apply_event(&ChatEvent::UserStoppedTyping(Identity::from("user2")), &mut state, &local, 0.0);
    assert!(!state.peer_typing);
}

#[test]
fn typing_events_echoing_the_local_identity_are_ignored() {
    let mut state = active_state();
    let local = Identity::from("user1");

    apply_event(&ChatEvent::UserTyping(local.clone()), &mut state, &local, 0.0);
    assert!(!state.peer_typing);

    state.peer_typing = true;
    apply_event(&ChatEvent::UserStoppedTyping(local.clone()), &mut state, &local, 0.0);
    assert!(state.peer_typing);
}

// =============================================================
// Messages and reactions
// =============================================================

#[test]
fn receive_message_appends_with_receipt_time() {
    let mut state = active_state();
    apply_event(
        &ChatEvent::ReceiveMessage(message_payload("m-1", "hello", "user2")),
        &mut state,
        &Identity::from("user1"),
        123.0,
    );
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].timestamp, 123.0);
}

#[test]
fn outbound_event_kinds_are_rejected_by_the_dispatcher() {
    let mut state = active_state();
    let local = Identity::from("user1");
    let handled = apply_event(
        &ChatEvent::SendMessage(message_payload("m-1", "hello", "user1")),
        &mut state,
        &local,
        0.0,
    );
    assert!(!handled);
    assert!(state.messages.is_empty());
}

// =============================================================
// End-to-end exchanges between two simulated clients
// =============================================================

#[test]
fn a_sent_message_shows_up_identically_on_both_sides() {
    let user_a = Identity::from("user1");
    let user_b = Identity::from("user2");

    let mut side_a = active_state();
    let mut side_b = active_state();

    // B already said something locally.
    side_b.push_local_message(crate::state::chat::ChatMessage {
        id: "b-1".to_owned(),
        body: "earlier".to_owned(),
        sender: user_b.clone(),
        timestamp: 1.0,
        reactions: Vec::new(),
    });

    // A sends "hello": optimistic local echo, then the relay forwards the
    // same payload to B as receive-message.
    let outbound = message_payload("a-1", "hello", "user1");
    side_a.push_local_message(crate::state::chat::ChatMessage {
        id: outbound.id.clone(),
        body: outbound.message.clone(),
        sender: user_a.clone(),
        timestamp: 2.0,
        reactions: Vec::new(),
    });
    apply_event(&ChatEvent::ReceiveMessage(outbound), &mut side_b, &user_b, 3.0);

    assert_eq!(side_a.messages.len(), 1);
    assert_eq!(side_a.messages[0].sender, user_a);
    assert_eq!(side_a.messages[0].body, "hello");

    assert_eq!(side_b.messages.len(), 2);
    assert_eq!(side_b.messages[0].body, "earlier");
    assert_eq!(side_b.messages[1].sender, user_a);
    assert_eq!(side_b.messages[1].body, "hello");
}

#[test]
fn reaction_sequences_converge_on_both_sides() {
    let user_a = Identity::from("user1");
    let user_b = Identity::from("user2");

    let mut side_a = active_state();
    let mut side_b = active_state();
    for side in [&mut side_a, &mut side_b] {
        side.push_local_message(crate::state::chat::ChatMessage {
            id: "m-1".to_owned(),
            body: "hello".to_owned(),
            sender: user_a.clone(),
            timestamp: 1.0,
            reactions: Vec::new(),
        });
    }

    // A reacts LIKE twice: optimistic apply on A, broadcast apply on B.
    for _ in 0..2 {
        let payload = reaction_payload("m-1", ReactionKind::Like, "user1");
        side_a.apply_reaction_event(&payload);
        apply_event(&ChatEvent::MessageReacted(payload), &mut side_b, &user_b, 0.0);
    }
    assert!(side_a.messages[0].reactions.is_empty());
    assert!(side_b.messages[0].reactions.is_empty());

    // A reacts LIKE then WOW: exactly one reaction remains, kind WOW.
    for kind in [ReactionKind::Like, ReactionKind::Wow] {
        let payload = reaction_payload("m-1", kind, "user1");
        side_a.apply_reaction_event(&payload);
        apply_event(&ChatEvent::MessageReacted(payload), &mut side_b, &user_b, 0.0);
    }
    for side in [&side_a, &side_b] {
        assert_eq!(side.messages[0].reactions.len(), 1);
        assert_eq!(side.messages[0].reactions[0].kind, ReactionKind::Wow);
        assert_eq!(side.messages[0].reactions[0].by, user_a);
    }
}
