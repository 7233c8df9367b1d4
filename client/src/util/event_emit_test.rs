use super::*;

#[test]
fn presence_events_carry_the_identity() {
    let identity = Identity::from("user1");
    assert_eq!(presence_connected_event(&identity), ChatEvent::UserConnected(identity.clone()));
    assert_eq!(presence_disconnected_event(&identity), ChatEvent::UserDisconnected(identity));
}

#[test]
fn typing_events_carry_the_identity() {
    let identity = Identity::from("user2");
    assert_eq!(typing_started_event(&identity), ChatEvent::Typing(identity.clone()));
    assert_eq!(typing_stopped_event(&identity), ChatEvent::StopTyping(identity));
}

#[test]
fn chat_message_event_builds_expected_payload() {
    let sender = Identity::from("user1");
    let ChatEvent::SendMessage(payload) = chat_message_event("m-1", "hello", &sender) else {
        panic!("expected send-message");
    };
    assert_eq!(payload.id, "m-1");
    assert_eq!(payload.message, "hello");
    assert_eq!(payload.sender_id, Some(sender));
    assert_eq!(payload.timestamp, None);
}

#[test]
fn reaction_event_builds_expected_payload() {
    let sender = Identity::from("user2");
    let ChatEvent::ReactToMessage(payload) = reaction_event("m-9", ReactionKind::Sob, &sender)
    else {
        panic!("expected react-to-message");
    };
    assert_eq!(payload.message_id, "m-9");
    assert_eq!(payload.reaction, ReactionKind::Sob);
    assert_eq!(payload.sender_id, sender);
}

#[test]
fn chat_message_event_serializes_with_wire_names() {
    let event = chat_message_event("m-1", "hi", &Identity::from("user1"));
    let encoded = events::encode_event(&event);
    assert_eq!(
        encoded,
        r#"{"event":"send-message","data":{"id":"m-1","message":"hi","senderId":"user1"}}"#
    );
}
