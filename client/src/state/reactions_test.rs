use super::*;

fn user(token: &str) -> Identity {
    Identity::from(token)
}

fn kinds_by(reactions: &[Reaction], actor: &Identity) -> Vec<ReactionKind> {
    reactions
        .iter()
        .filter(|reaction| &reaction.by == actor)
        .map(|reaction| reaction.kind)
        .collect()
}

#[test]
fn first_reaction_from_an_actor_is_appended() {
    let mut reactions = Vec::new();
    apply_reaction(&mut reactions, &user("user1"), ReactionKind::Like);
    assert_eq!(reactions, vec![Reaction { kind: ReactionKind::Like, by: user("user1") }]);
}

#[test]
fn resubmitting_the_same_kind_toggles_it_off() {
    let mut reactions = Vec::new();
    apply_reaction(&mut reactions, &user("user1"), ReactionKind::Like);
    apply_reaction(&mut reactions, &user("user1"), ReactionKind::Like);
    assert!(reactions.is_empty());
}

#[test]
fn a_different_kind_replaces_in_place() {
    let mut reactions = Vec::new();
    apply_reaction(&mut reactions, &user("user1"), ReactionKind::Like);
    apply_reaction(&mut reactions, &user("user2"), ReactionKind::Sad);
    apply_reaction(&mut reactions, &user("user1"), ReactionKind::Wow);

    // user1's entry keeps its original position.
    assert_eq!(
        reactions,
        vec![
            Reaction { kind: ReactionKind::Wow, by: user("user1") },
            Reaction { kind: ReactionKind::Sad, by: user("user2") },
        ]
    );
}

#[test]
fn actors_never_disturb_each_others_reactions() {
    let mut reactions = Vec::new();
    apply_reaction(&mut reactions, &user("user1"), ReactionKind::Laugh);
    apply_reaction(&mut reactions, &user("user2"), ReactionKind::Laugh);
    apply_reaction(&mut reactions, &user("user1"), ReactionKind::Laugh);

    assert_eq!(kinds_by(&reactions, &user("user1")), Vec::<ReactionKind>::new());
    assert_eq!(kinds_by(&reactions, &user("user2")), vec![ReactionKind::Laugh]);
}

#[test]
fn arbitrary_sequences_leave_at_most_one_reaction_per_actor() {
    let actor = user("user1");
    // (submissions, expected survivor)
    let cases: Vec<(Vec<ReactionKind>, Option<ReactionKind>)> = vec![
        // Replace then toggle off.
        (vec![ReactionKind::Like, ReactionKind::Wow, ReactionKind::Wow], None),
        (vec![ReactionKind::Sob, ReactionKind::Sob], None),
        // Toggle off then back on.
        (vec![ReactionKind::Sob, ReactionKind::Sob, ReactionKind::Sob], Some(ReactionKind::Sob)),
        (
            vec![
                ReactionKind::Angry,
                ReactionKind::Vomit,
                ReactionKind::Sad,
                ReactionKind::Sad,
                ReactionKind::Laugh,
            ],
            Some(ReactionKind::Laugh),
        ),
    ];

    for (sequence, expected) in cases {
        let mut reactions = Vec::new();
        for kind in &sequence {
            apply_reaction(&mut reactions, &actor, *kind);
        }
        let remaining = kinds_by(&reactions, &actor);
        assert!(remaining.len() <= 1, "sequence {sequence:?} left {remaining:?}");
        assert_eq!(remaining.first().copied(), expected, "sequence {sequence:?}");
    }
}
