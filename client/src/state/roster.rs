//! Closed participant set with per-member online status.
//!
//! DESIGN
//! ======
//! Presence is authoritative only via full `users-status` snapshots, so the
//! roster rebuilds the whole online set on every broadcast by testing each
//! member against the received list — no merging, no partial updates.
//! Identities outside the member set are ignored; the set is fixed at
//! construction.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use std::collections::HashSet;

use crate::net::types::Identity;

/// A capacity-bounded set of chat participants and their online flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    /// Participant set in display order. Closed after construction.
    members: Vec<Identity>,
    /// Members currently reported online.
    online: HashSet<Identity>,
}

impl Roster {
    /// Build a roster from the participant set, preserving order and
    /// dropping duplicates. Everyone starts offline.
    pub fn new(members: impl IntoIterator<Item = Identity>) -> Self {
        let mut seen = HashSet::new();
        let members = members
            .into_iter()
            .filter(|member| seen.insert(member.clone()))
            .collect();
        Self { members, online: HashSet::new() }
    }

    #[must_use]
    pub fn members(&self) -> &[Identity] {
        &self.members
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn contains(&self, identity: &Identity) -> bool {
        self.members.contains(identity)
    }

    #[must_use]
    pub fn is_online(&self, identity: &Identity) -> bool {
        self.online.contains(identity)
    }

    /// Flip one member's online flag. Non-members are ignored — the set is
    /// closed, so presence for strangers has nowhere to live.
    pub fn set_online(&mut self, identity: &Identity, online: bool) {
        if !self.contains(identity) {
            return;
        }
        if online {
            self.online.insert(identity.clone());
        } else {
            self.online.remove(identity);
        }
    }

    /// Replace the entire online set from an authoritative snapshot.
    ///
    /// Each member's flag becomes a membership test against the received
    /// list; prior state does not survive. Idempotent.
    pub fn apply_status(&mut self, online: &[Identity]) {
        self.online = self
            .members
            .iter()
            .filter(|member| online.contains(member))
            .cloned()
            .collect();
    }

    /// Members with their online flags, in display order.
    #[must_use]
    pub fn statuses(&self) -> Vec<(Identity, bool)> {
        self.members
            .iter()
            .map(|member| (member.clone(), self.online.contains(member)))
            .collect()
    }

    /// Number of members currently online.
    #[must_use]
    pub fn online_count(&self) -> usize {
        self.online.len()
    }
}
