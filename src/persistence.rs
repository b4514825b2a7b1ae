//! Save/load of history, favorites and stats through a `KeyValueStore`
//!
//! Reads never fail: an absent or malformed slot becomes the empty value
//! and a warning is logged. Writes report `PersistenceWrite`; the caller
//! decides whether to care (the controller just logs).

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, SparkError};
use crate::favorites::FavoritesStore;
use crate::history::HistoryLog;
use crate::stats::Stats;
use crate::storage::KeyValueStore;

pub const HISTORY_KEY: &str = "ideaHistory";
pub const FAVORITES_KEY: &str = "favorites";
pub const STATS_KEY: &str = "stats";

pub struct PersistenceAdapter<S> {
    store: S,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Write all three slots. Every slot is attempted; the first failure is returned.
    pub fn save(
        &mut self,
        history: &HistoryLog,
        favorites: &FavoritesStore,
        stats: &Stats,
    ) -> Result<()> {
        let results = [
            self.write_slot(HISTORY_KEY, history),
            self.write_slot(FAVORITES_KEY, favorites),
            self.write_slot(STATS_KEY, stats),
        ];
        results.into_iter().collect()
    }

    pub fn load(&self) -> (HistoryLog, FavoritesStore, Stats) {
        let mut history: HistoryLog = self.read_or_default(HISTORY_KEY);
        history.enforce_capacity();
        let mut favorites: FavoritesStore = self.read_or_default(FAVORITES_KEY);
        favorites.dedup();
        let stats: Stats = self.read_or_default(STATS_KEY);
        (history, favorites, stats)
    }

    fn write_slot<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).map_err(|err| SparkError::PersistenceWrite {
            key: key.to_string(),
            source: crate::error::StorageError::Unavailable(err.to_string()),
        })?;
        self.store.set(key, &json).map_err(|source| SparkError::PersistenceWrite {
            key: key.to_string(),
            source,
        })
    }

    fn read_slot<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let raw = self.store.get(key).map_err(|err| SparkError::PersistenceRead {
            key: key.to_string(),
            reason: err.to_string(),
        })?;
        match raw {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|err| SparkError::PersistenceRead {
                    key: key.to_string(),
                    reason: err.to_string(),
                }),
        }
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.read_slot(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!(key, "slot empty, using default");
                T::default()
            }
            Err(err) => {
                warn!(key, error = %err, "discarding unreadable slot");
                T::default()
            }
        }
    }
}
