//! Periodic background tasks driven by an explicit clock
//!
//! Nothing here sleeps. Whoever owns the event loop calls `Scheduler::due`
//! with the current instant and runs whatever comes back, so tests can
//! step time by hand.

use chrono::{DateTime, Duration, Utc};

use crate::config::{Config, MAX_INTERVAL_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Re-render stats; never mutates state
    RefreshStats,
    /// Maybe bump `aiSuggestions` and persist
    SimulateAiActivity,
}

#[derive(Debug, Clone)]
pub struct PeriodicTask {
    pub task: Task,
    every: Duration,
    next_due: Option<DateTime<Utc>>,
}

impl PeriodicTask {
    pub fn new(task: Task, every: Duration) -> Self {
        Self {
            task,
            every,
            next_due: None,
        }
    }

    /// First poll arms the task. Fires at most once per poll, then re-arms from `now`.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        match self.next_due {
            None => {
                self.next_due = Some(now + self.every);
                false
            }
            Some(due) if now >= due => {
                self.next_due = Some(now + self.every);
                true
            }
            Some(_) => false,
        }
    }

    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.next_due
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    tasks: Vec<PeriodicTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intervals outside 1..=MAX_INTERVAL_SECS are clamped
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .every(Task::RefreshStats, interval(config.stats_refresh_secs))
            .every(Task::SimulateAiActivity, interval(config.ai_activity_secs))
    }

    pub fn every(mut self, task: Task, interval: Duration) -> Self {
        self.tasks.push(PeriodicTask::new(task, interval));
        self
    }

    pub fn due(&mut self, now: DateTime<Utc>) -> Vec<Task> {
        self.tasks
            .iter_mut()
            .filter_map(|t| t.poll(now).then_some(t.task))
            .collect()
    }
}

fn interval(secs: u64) -> Duration {
    let secs = secs.clamp(1, MAX_INTERVAL_SECS);
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or_else(|| Duration::seconds(1))
}
