//! # Like ledger
//!
//! Page-local like counts keyed by `(ItemKind, id)`. A toggle is applied to the
//! ledger before the request goes out ([`LikeLedger::begin_toggle`]), then
//! either reconciled with what the server reports ([`LikeLedger::settle`]) or
//! undone ([`LikeLedger::rollback`]) so a failed request leaves the count the
//! user saw before clicking.

use std::collections::HashMap;

use crate::models::ItemKind;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LikeKey {
    pub kind: ItemKind,
    pub id: String,
}

impl LikeKey {
    pub fn new(kind: ItemKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }
}

/// Displayed count plus whether the viewer is believed to like the item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LikeState {
    pub count: u64,
    pub liked: bool,
}

/// An optimistic toggle that has not been confirmed yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingToggle {
    pub key: LikeKey,
    previous: LikeState,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LikeLedger {
    entries: HashMap<LikeKey, LikeState>,
}

impl LikeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, kind: ItemKind, id: &str) -> LikeState {
        self.entries
            .get(&LikeKey::new(kind, id))
            .copied()
            .unwrap_or_default()
    }

    /// Known count, 0 for items never fetched.
    pub fn count(&self, kind: ItemKind, id: &str) -> u64 {
        self.state(kind, id).count
    }

    pub fn is_liked(&self, kind: ItemKind, id: &str) -> bool {
        self.state(kind, id).liked
    }

    pub fn set_count(&mut self, kind: ItemKind, id: &str, count: u64) {
        self.entries.entry(LikeKey::new(kind, id)).or_default().count = count;
    }

    pub fn mark_liked(&mut self, kind: ItemKind, id: &str, liked: bool) {
        self.entries.entry(LikeKey::new(kind, id)).or_default().liked = liked;
    }

    pub fn remove(&mut self, kind: ItemKind, id: &str) {
        self.entries.remove(&LikeKey::new(kind, id));
    }

    /// Flip the item locally and remember how it looked before.
    pub fn begin_toggle(&mut self, kind: ItemKind, id: &str) -> PendingToggle {
        let key = LikeKey::new(kind, id);
        let entry = self.entries.entry(key.clone()).or_default();
        let previous = *entry;
        if entry.liked {
            entry.count = entry.count.saturating_sub(1);
        } else {
            entry.count += 1;
        }
        entry.liked = !entry.liked;
        PendingToggle { key, previous }
    }

    /// Adopt whatever the server reported; unknown fields keep the optimistic value.
    pub fn settle(&mut self, pending: &PendingToggle, count: Option<u64>, liked: Option<bool>) {
        let entry = self.entries.entry(pending.key.clone()).or_default();
        if let Some(count) = count {
            entry.count = count;
        }
        if let Some(liked) = liked {
            entry.liked = liked;
        }
    }

    pub fn rollback(&mut self, pending: PendingToggle) {
        self.entries.insert(pending.key, pending.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_items_count_zero() {
        let ledger = LikeLedger::new();
        assert_eq!(ledger.count(ItemKind::Note, "n1"), 0);
        assert!(!ledger.is_liked(ItemKind::Note, "n1"));
    }

    #[test]
    fn test_toggle_flips_displayed_count() {
        let mut ledger = LikeLedger::new();
        ledger.set_count(ItemKind::Note, "n1", 4);

        let pending = ledger.begin_toggle(ItemKind::Note, "n1");
        assert_eq!(ledger.count(ItemKind::Note, "n1"), 5);
        assert!(ledger.is_liked(ItemKind::Note, "n1"));

        ledger.settle(&pending, Some(5), Some(true));
        assert_eq!(ledger.count(ItemKind::Note, "n1"), 5);

        // Toggling again takes the like back
        let pending = ledger.begin_toggle(ItemKind::Note, "n1");
        assert_eq!(ledger.count(ItemKind::Note, "n1"), 4);
        assert!(!ledger.is_liked(ItemKind::Note, "n1"));
        ledger.settle(&pending, None, None);
        assert_eq!(ledger.count(ItemKind::Note, "n1"), 4);
    }

    #[test]
    fn test_failed_toggle_restores_previous_state() {
        let mut ledger = LikeLedger::new();
        ledger.set_count(ItemKind::Comment, "c1", 2);

        let pending = ledger.begin_toggle(ItemKind::Comment, "c1");
        assert_eq!(ledger.count(ItemKind::Comment, "c1"), 3);

        ledger.rollback(pending);
        assert_eq!(ledger.state(ItemKind::Comment, "c1"), LikeState { count: 2, liked: false });
    }

    #[test]
    fn test_server_count_wins_over_optimistic_guess() {
        let mut ledger = LikeLedger::new();
        ledger.set_count(ItemKind::Feedback, "f1", 10);

        // We did not know the viewer already liked it: local guess says 11
        let pending = ledger.begin_toggle(ItemKind::Feedback, "f1");
        assert_eq!(ledger.count(ItemKind::Feedback, "f1"), 11);

        ledger.settle(&pending, Some(9), Some(false));
        assert_eq!(ledger.state(ItemKind::Feedback, "f1"), LikeState { count: 9, liked: false });
    }

    #[test]
    fn test_unlike_never_goes_negative() {
        let mut ledger = LikeLedger::new();
        ledger.mark_liked(ItemKind::Note, "n1", true);
        ledger.begin_toggle(ItemKind::Note, "n1");
        assert_eq!(ledger.count(ItemKind::Note, "n1"), 0);
    }

    #[test]
    fn test_kinds_are_tracked_separately() {
        let mut ledger = LikeLedger::new();
        ledger.set_count(ItemKind::Note, "x", 1);
        ledger.set_count(ItemKind::Comment, "x", 7);
        assert_eq!(ledger.count(ItemKind::Note, "x"), 1);
        assert_eq!(ledger.count(ItemKind::Comment, "x"), 7);

        ledger.remove(ItemKind::Comment, "x");
        assert_eq!(ledger.count(ItemKind::Comment, "x"), 0);
    }
}
