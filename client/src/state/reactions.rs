//! Reaction list transitions.
//!
//! DESIGN
//! ======
//! One pure transition function implements the add/toggle/replace rules.
//! Both the optimistic local path (user clicks a reaction) and the
//! authoritative remote path (`message-reacted` broadcast) funnel through
//! it, so the two copies converge given the same event order.

#[cfg(test)]
#[path = "reactions_test.rs"]
mod reactions_test;

use crate::net::types::{Identity, ReactionKind};

/// One reaction attached to a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reaction {
    /// Which reaction was left.
    pub kind: ReactionKind,
    /// Who left it.
    pub by: Identity,
}

/// Apply one submitted reaction to a message's reaction list.
///
/// Invariant on exit: at most one reaction per actor.
/// - No reaction from `actor` yet: append `{kind, actor}`.
/// - Existing reaction from `actor` of the same `kind`: remove it (toggle).
/// - Existing reaction from `actor` of a different kind: replace in place.
pub fn apply_reaction(reactions: &mut Vec<Reaction>, actor: &Identity, kind: ReactionKind) {
    match reactions.iter().position(|reaction| &reaction.by == actor) {
        None => reactions.push(Reaction { kind, by: actor.clone() }),
        Some(index) if reactions[index].kind == kind => {
            reactions.remove(index);
        }
        Some(index) => reactions[index].kind = kind,
    }
}
