use super::participant_label;
use crate::state::session::DEMO_PARTICIPANTS;

#[test]
fn demo_participants_get_numbered_labels() {
    assert_eq!(participant_label("user1"), "User 1");
    assert_eq!(participant_label("user2"), "User 2");
}

#[test]
fn unrecognized_ids_are_shown_verbatim() {
    assert_eq!(participant_label("alice"), "alice");
    assert_eq!(participant_label("user"), "user");
    assert_eq!(participant_label("userx"), "userx");
}

#[test]
fn every_demo_participant_has_a_label() {
    for id in DEMO_PARTICIPANTS {
        assert!(!participant_label(id).is_empty());
    }
}
