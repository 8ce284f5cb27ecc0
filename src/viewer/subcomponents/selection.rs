// SPDX-License-Identifier: MPL-2.0
//! Selection ledger: the mutable set of selected item identifiers for one
//! viewing session.
//!
//! Insertion order is preserved so the confirm button count and the bottom
//! filmstrip render in the order items were picked. The ledger enforces
//! the caller-supplied maximum; membership in the asset sequence is the
//! coordinator's responsibility.

use crate::domain::media::MediaId;
use crate::domain::ui::SelectionLimit;
use crate::notify::{Observable, Subscription};

/// Result of a toggle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The item was added to the selection.
    Added,
    /// The item was removed from the selection.
    Removed,
    /// The selection is at its maximum; nothing changed.
    ///
    /// An expected user-facing condition, surfaced inline, not an error.
    LimitReached,
}

/// Bounded, insertion-ordered selection set with change notification.
#[derive(Debug)]
pub struct SelectionLedger {
    items: Vec<MediaId>,
    limit: SelectionLimit,
    changes: Observable<Vec<MediaId>>,
}

impl SelectionLedger {
    /// Creates a ledger seeded with `initial` (assumed validated: duplicate
    /// free and within `limit`).
    #[must_use]
    pub fn new(initial: Vec<MediaId>, limit: SelectionLimit) -> Self {
        let changes = Observable::new(initial.clone());
        Self {
            items: initial,
            limit,
            changes,
        }
    }

    /// Toggles membership of `id`.
    ///
    /// Removal always succeeds. Addition succeeds only below the limit;
    /// at the limit the set is left unchanged and [`ToggleOutcome::LimitReached`]
    /// is returned. Every successful mutation emits the new snapshot.
    pub fn toggle(&mut self, id: &MediaId) -> ToggleOutcome {
        if let Some(position) = self.items.iter().position(|member| member == id) {
            self.items.remove(position);
            self.changes.set(self.items.clone());
            return ToggleOutcome::Removed;
        }

        if self.items.len() >= self.limit.value() {
            return ToggleOutcome::LimitReached;
        }

        self.items.push(id.clone());
        self.changes.set(self.items.clone());
        ToggleOutcome::Added
    }

    /// Returns the selected identifiers in the order they were added.
    #[must_use]
    pub fn snapshot(&self) -> Vec<MediaId> {
        self.items.clone()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of selected items. Never exceeds the limit.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether `id` is currently selected.
    #[must_use]
    pub fn contains(&self, id: &MediaId) -> bool {
        self.items.iter().any(|member| member == id)
    }

    /// The maximum selection count.
    #[must_use]
    pub fn limit(&self) -> SelectionLimit {
        self.limit
    }

    /// Subscribes to selection snapshots. The current snapshot is replayed
    /// immediately; reads never emit.
    pub fn subscribe(
        &self,
        listener: impl FnMut(&Vec<MediaId>) + 'static,
    ) -> Subscription<Vec<MediaId>> {
        self.changes.subscribe(listener)
    }

    /// Detaches all subscribers. Called at terminal session transitions.
    pub fn close(&self) {
        self.changes.close();
    }
}
