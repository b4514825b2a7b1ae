//! Favorited ideas, deduplicated by text

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Category;
use crate::error::{Result, SparkError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    pub id: u64,
    pub text: String,
    pub category: Category,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub ai_enhanced: bool,
}

/// Insertion-ordered; no two records share the same `text`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesStore {
    records: Vec<FavoriteRecord>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.records.iter().any(|r| r.text == text)
    }

    /// Append a favorite. Identical text already stored -> `AlreadyFavorited`, no mutation.
    pub fn add(
        &mut self,
        id: u64,
        text: &str,
        category: Category,
        ai_enhanced: bool,
        timestamp: DateTime<Utc>,
    ) -> Result<&FavoriteRecord> {
        if self.contains(text) {
            return Err(SparkError::AlreadyFavorited);
        }
        self.records.push(FavoriteRecord {
            id,
            text: text.to_string(),
            category,
            timestamp,
            ai_enhanced,
        });
        debug!(id, %category, count = self.records.len(), "favorite added");
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteRecord> {
        self.records.iter()
    }

    pub fn max_id(&self) -> Option<u64> {
        self.records.iter().map(|r| r.id).max()
    }

    /// Drop later duplicates from blobs that predate the dedup rule
    pub(crate) fn dedup(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.records.retain(|r| seen.insert(r.text.clone()));
    }
}
