//! Engagement counters and the daily streak
//!
//! Streak rule (per calendar day in the caller's offset):
//! - first visit ever            -> 1
//! - last visit was yesterday    -> +1
//! - last visit earlier than that -> reset to 1
//! - last visit today            -> unchanged
//! `lastVisit` is always moved to `now` afterwards.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Persisted counters. camelCase to match the browser blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub ideas_generated: u64,
    pub favorites_count: u64,
    pub streak_count: u32,
    pub last_visit: Option<DateTime<Utc>>,
    pub ai_suggestions: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsTracker {
    stats: Stats,
}

impl StatsTracker {
    pub fn new(stats: Stats) -> Self {
        Self { stats }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn record_generation(&mut self) {
        self.stats.ideas_generated = self.stats.ideas_generated.saturating_add(1);
    }

    pub fn record_favorite(&mut self) {
        self.stats.favorites_count = self.stats.favorites_count.saturating_add(1);
    }

    /// Align the counter with the favorites actually stored
    pub fn sync_favorites(&mut self, count: usize) {
        self.stats.favorites_count = count as u64;
    }

    pub fn record_ai_suggestion(&mut self, n: u64) {
        self.stats.ai_suggestions = self.stats.ai_suggestions.saturating_add(n);
    }

    pub fn evaluate_streak(&mut self, now: DateTime<FixedOffset>) {
        let today = now.date_naive();

        self.stats.streak_count = match self.stats.last_visit {
            None => 1,
            Some(last) => {
                let last_day = last.with_timezone(now.offset()).date_naive();
                if Some(last_day) == today.pred_opt() {
                    self.stats.streak_count.saturating_add(1)
                } else if last_day != today {
                    1
                } else {
                    // a stored 0 still counts today's visit
                    self.stats.streak_count.max(1)
                }
            }
        };

        self.stats.last_visit = Some(now.with_timezone(&Utc));
        debug!(streak = self.stats.streak_count, "streak evaluated");
    }
}

// ═══════════════════════════════════════════════════════════════
// PROGRESS
// ═══════════════════════════════════════════════════════════════

const MAX_IDEAS: f64 = 100.0;
const MAX_FAVORITES: f64 = 50.0;
const MAX_STREAK: f64 = 30.0;
const MAX_AI: f64 = 200.0;

/// Goal completion ratios in `0.0..=1.0`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Progress {
    pub ideas: f64,
    pub favorites: f64,
    pub streak: f64,
    pub ai: f64,
}

impl Progress {
    pub fn compute(stats: &Stats, favorites: usize) -> Self {
        let ratio = |value: f64, max: f64| (value / max).clamp(0.0, 1.0);
        Self {
            ideas: ratio(stats.ideas_generated as f64, MAX_IDEAS),
            favorites: ratio(favorites as f64, MAX_FAVORITES),
            streak: ratio(stats.streak_count as f64, MAX_STREAK),
            ai: ratio(stats.ai_suggestions as f64, MAX_AI),
        }
    }
}
