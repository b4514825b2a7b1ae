//! Bounded most-recent-first log of generated ideas

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::idea::Idea;

/// Maximum entries kept in the log
pub const HISTORY_CAPACITY: usize = 20;
/// Entries shown in the activity feed
pub const FEED_LEN: usize = 10;

/// Serialized as a plain JSON array, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: VecDeque<Idea>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front, dropping from the tail past capacity
    pub fn append(&mut self, idea: Idea) {
        self.entries.push_front(idea);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// First `n` entries, newest first. Non-destructive.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Idea> {
        self.entries.iter().take(n)
    }

    /// Entries for the activity feed
    pub fn feed(&self) -> Vec<Idea> {
        self.recent(FEED_LEN).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_id(&self) -> Option<u64> {
        self.entries.iter().map(|i| i.id).max()
    }

    /// Blobs written by other builds may exceed the cap
    pub(crate) fn enforce_capacity(&mut self) {
        self.entries.truncate(HISTORY_CAPACITY);
    }
}
