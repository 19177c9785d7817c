//! Bounded ordered item feed.
//!
//! The client-side cache of clipboard history. Items are kept front-to-back
//! in most-recently-upserted order. The capacity bounds the number of
//! unpinned items only; pinned items are never evicted by the capacity
//! policy and never count against it.
//!
//! The feed does no I/O and never fails. It is mutated by one owner at a
//! time (see `cf_app::runtime::FeedRuntime`).

use super::item::ClipItem;
use crate::ids::ClipId;

/// Capacity used when nothing else is configured. Mirrors the backend's
/// default reload limit.
pub const DEFAULT_CAPACITY: usize = 100;

/// Pin flag and rank of an item, as captured before a local pin change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinState {
    pub is_pinned: bool,
    pub pin_order: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct ClipFeed {
    items: Vec<ClipItem>,
    capacity: usize,
    query: String,
}

impl Default for ClipFeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ClipFeed {
    /// Creates an empty feed. A capacity of zero is clamped to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity: capacity.max(1),
            query: String::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the capacity and trims the oldest unpinned items if the feed
    /// is now over it. Returns the evicted ids, oldest first.
    pub fn set_capacity(&mut self, capacity: usize) -> Vec<ClipId> {
        self.capacity = capacity.max(1);
        self.trim_unpinned()
    }

    pub fn items(&self) -> &[ClipItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ClipId) -> Option<&ClipItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ClipId) -> bool {
        self.position(id).is_some()
    }

    pub fn unpinned_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_pinned).count()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Adopts `items` verbatim, discarding the previous contents.
    ///
    /// No validation and no trimming: this is the reconciliation step after
    /// a reload, whose order and bounds are computed by the backend.
    pub fn replace_all(&mut self, items: Vec<ClipItem>) {
        self.items = items;
    }

    /// Inserts `item` at the front, replacing any entry with the same id,
    /// then evicts the oldest unpinned items until the unpinned count is
    /// back within capacity. Returns the evicted ids.
    pub fn apply_upsert(&mut self, item: ClipItem) -> Vec<ClipId> {
        if let Some(pos) = self.position(&item.id) {
            self.items.remove(pos);
        }
        self.items.insert(0, item);
        self.trim_unpinned()
    }

    /// Removes the item with `id`. Returns `false` when it was not present.
    pub fn apply_delete(&mut self, id: &ClipId) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Items visible under the current query, in feed order.
    ///
    /// Recomputed on every call. An empty query shows everything; otherwise
    /// only text items whose content contains the query (ignoring case) are
    /// shown.
    pub fn view(&self) -> Vec<&ClipItem> {
        if self.query.is_empty() {
            return self.items.iter().collect();
        }

        let needle = self.query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches_query(&needle))
            .collect()
    }

    /// Pinned items ordered by rank; equal ranks keep feed order. A pinned
    /// item without a rank sorts as rank 0.
    pub fn pinned_view(&self) -> Vec<&ClipItem> {
        let mut pinned: Vec<&ClipItem> = self.items.iter().filter(|item| item.is_pinned).collect();
        pinned.sort_by_key(|item| item.pin_order.unwrap_or(0));
        pinned
    }

    /// Flips the pin flag of an existing item ahead of the backend ack.
    ///
    /// Pinning assigns the next rank after the highest pinned rank, which is
    /// how the backend ranks a new pin. Unpinning clears the rank and re-applies
    /// the capacity trim. Returns the previous pin state, or `None` when the
    /// item is not in the feed.
    pub fn set_pinned_local(&mut self, id: &ClipId, pinned: bool) -> Option<PinState> {
        let pos = self.position(id)?;
        let previous = PinState {
            is_pinned: self.items[pos].is_pinned,
            pin_order: self.items[pos].pin_order,
        };

        if pinned {
            let next_rank = self
                .items
                .iter()
                .filter(|item| item.is_pinned && &item.id != id)
                .filter_map(|item| item.pin_order)
                .max()
                .unwrap_or(0)
                + 1;
            let item = &mut self.items[pos];
            item.is_pinned = true;
            item.pin_order = Some(next_rank);
        } else {
            let item = &mut self.items[pos];
            item.is_pinned = false;
            item.pin_order = None;
            self.trim_unpinned();
        }

        Some(previous)
    }

    /// Flips the pin flag of `id` via [`set_pinned_local`](Self::set_pinned_local).
    /// Returns the state before the flip.
    pub fn toggle_pinned_local(&mut self, id: &ClipId) -> Option<PinState> {
        let pinned = !self.get(id)?.is_pinned;
        self.set_pinned_local(id, pinned)
    }

    /// Drops every unpinned item. Returns how many were removed.
    pub fn clear_unpinned(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.is_pinned);
        before - self.items.len()
    }

    fn position(&self, id: &ClipId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    fn trim_unpinned(&mut self) -> Vec<ClipId> {
        let mut excess = self.unpinned_count().saturating_sub(self.capacity);
        let mut evicted = Vec::new();
        let mut idx = self.items.len();

        while excess > 0 && idx > 0 {
            idx -= 1;
            if !self.items[idx].is_pinned {
                evicted.push(self.items.remove(idx).id);
                excess -= 1;
            }
        }

        #[cfg(feature = "tracing")]
        if !evicted.is_empty() {
            tracing::debug!(
                evicted = evicted.len(),
                capacity = self.capacity,
                "Trimmed unpinned clips over capacity"
            );
        }

        evicted
    }
}
