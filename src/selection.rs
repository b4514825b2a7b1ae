//! Uniform idea draws from the catalog
//!
//! The random source is injected so a seeded `StdRng` gives reproducible
//! sessions. The engine also serves the other coin flips the session
//! makes (enhancement hints, simulated AI activity) so there is one seed
//! to control.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::catalog::{Category, IdeaCatalog};
use crate::error::{Result, SparkError};
use crate::idea::{Idea, IdGenerator};

pub struct SelectionEngine<R> {
    catalog: IdeaCatalog,
    rng: R,
    ids: IdGenerator,
}

impl<R: Rng> SelectionEngine<R> {
    pub fn new(catalog: IdeaCatalog, rng: R) -> Self {
        Self {
            catalog,
            rng,
            ids: IdGenerator::new(),
        }
    }

    pub fn catalog(&self) -> &IdeaCatalog {
        &self.catalog
    }

    pub fn resume_ids_after(&mut self, id: u64) {
        self.ids.resume_after(id);
    }

    /// Fresh id for records created outside `draw` (favorites)
    pub fn next_id(&mut self, now: DateTime<Utc>) -> u64 {
        self.ids.next(now)
    }

    /// Pick one idea uniformly from `category`. No side effects beyond the
    /// rng and id counter; the caller logs and persists.
    pub fn draw(&mut self, category: Category, now: DateTime<Utc>) -> Result<Idea> {
        let text = self
            .catalog
            .get(category)
            .choose(&mut self.rng)
            .ok_or(SparkError::EmptyCategory(category))?;
        let id = self.ids.next(now);
        debug!(id, %category, "drew idea");
        Ok(Idea::new(id, *text, category, now))
    }

    /// True with the given probability (clamped to 0..=1)
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Uniform integer in `1..=max`
    pub fn burst(&mut self, max: u64) -> u64 {
        self.rng.gen_range(1..=max.max(1))
    }
}
