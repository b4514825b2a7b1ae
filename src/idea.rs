//! Generated idea records and id allocation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// A single generated suggestion. Immutable once created.
///
/// Field names are camelCase so persisted blobs stay readable by the
/// browser build of the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: u64,
    pub text: String,
    pub category: Category,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub ai_enhanced: bool,
    #[serde(default)]
    pub shared: bool,
    #[serde(default)]
    pub rating: i32,
}

impl Idea {
    pub fn new(
        id: u64,
        text: impl Into<String>,
        category: Category,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            category,
            timestamp,
            ai_enhanced: false,
            shared: false,
            rating: 0,
        }
    }
}

/// Millisecond-timestamp ids, bumped by one on collision
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never hand out anything at or below `id` again
    pub fn resume_after(&mut self, id: u64) {
        self.last = self.last.max(id);
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> u64 {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = if millis > self.last { millis } else { self.last + 1 };
        self.last = id;
        id
    }
}
