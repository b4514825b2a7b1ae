//! Session controller
//!
//! `Spark` owns the whole `AppState` and turns discrete UI events into a
//! `View` the renderer can draw. Every mutation is followed by a save.
//! Animation and timing belong to the renderer; nothing here waits.

use chrono::Utc;
use rand::Rng;
use std::fmt;
use tracing::{debug, info, warn};

use crate::catalog::{Category, IdeaCatalog};
use crate::clock::Clock;
use crate::config::Config;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::history::HistoryLog;
use crate::idea::Idea;
use crate::persistence::PersistenceAdapter;
use crate::schedule::Task;
use crate::selection::SelectionEngine;
use crate::session::SessionState;
use crate::stats::{Progress, Stats, StatsTracker};
use crate::storage::KeyValueStore;

const SHARE_TITLE: &str = "Creative Idea from MindSpark";
const MAX_AI_BURST: u64 = 3;

// ═══════════════════════════════════════════════════════════════
// EVENTS & OUTPUT
// ═══════════════════════════════════════════════════════════════

/// Discrete input from whatever UI drives the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    GenerateRequested,
    CategorySelected(String),
    FavoriteRequested,
    ShareRequested,
}

/// Informational message for the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SwitchedCategory(Category),
    AddedToFavorites,
    GenerateFirst,
    EnhancementAvailable,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::SwitchedCategory(c) => write!(f, "Switched to {}", c.context()),
            Notice::AddedToFavorites => f.write_str("Added to favorites!"),
            Notice::GenerateFirst => f.write_str("Generate an idea first!"),
            Notice::EnhancementAvailable => f.write_str("AI enhancement available for this idea!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// Plain-text form for clipboard fallback
    pub fn fallback_text(&self) -> String {
        format!("{}\n\nGenerated by MindSpark - {}", self.text, self.url)
    }
}

/// Everything the renderer needs after an event
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub category: Category,
    pub idea: Option<String>,
    pub ai_enhanced: bool,
    pub stats: Stats,
    pub favorites: usize,
    pub progress: Progress,
    pub feed: Vec<Idea>,
    pub notice: Option<Notice>,
    pub share: Option<SharePayload>,
}

impl View {
    pub fn category_label(&self) -> &'static str {
        self.category.context()
    }
}

// ═══════════════════════════════════════════════════════════════
// STATE
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub session: SessionState,
    pub history: HistoryLog,
    pub favorites: FavoritesStore,
    pub stats: StatsTracker,
}

/// Tunables taken from `Config`
#[derive(Debug, Clone)]
pub struct Options {
    pub default_category: Category,
    pub ai_activity_chance: f64,
    pub enhancement_hint_chance: f64,
    pub share_url: String,
}

impl Default for Options {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Options {
    fn from(config: &Config) -> Self {
        Self {
            default_category: config.default_category,
            ai_activity_chance: config.ai_activity_chance,
            enhancement_hint_chance: config.enhancement_hint_chance,
            share_url: config.share_url.clone(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// CONTROLLER
// ═══════════════════════════════════════════════════════════════

pub struct Spark<S, C, R> {
    state: AppState,
    engine: SelectionEngine<R>,
    persistence: PersistenceAdapter<S>,
    clock: C,
    options: Options,
}

impl<S: KeyValueStore, C: Clock, R: Rng> Spark<S, C, R> {
    /// Load persisted state, evaluate the daily streak once, save.
    pub fn start(store: S, clock: C, rng: R, options: Options) -> Self {
        let persistence = PersistenceAdapter::new(store);
        let (history, favorites, stats) = persistence.load();

        let mut engine = SelectionEngine::new(IdeaCatalog::builtin(), rng);
        if let Some(id) = history.max_id().max(favorites.max_id()) {
            engine.resume_ids_after(id);
        }

        let mut stats = StatsTracker::new(stats);
        if stats.stats().favorites_count != favorites.count() as u64 {
            debug!(
                stored = stats.stats().favorites_count,
                actual = favorites.count(),
                "favorites count out of sync"
            );
            stats.sync_favorites(favorites.count());
        }
        stats.evaluate_streak(clock.now());

        let mut spark = Self {
            state: AppState {
                session: SessionState::new(options.default_category),
                history,
                favorites,
                stats,
            },
            engine,
            persistence,
            clock,
            options,
        };
        spark.persist();

        let stats = spark.state.stats.stats();
        info!(
            streak = stats.streak_count,
            ideas = stats.ideas_generated,
            history = spark.state.history.len(),
            "session started"
        );
        spark
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn catalog(&self) -> &IdeaCatalog {
        self.engine.catalog()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    pub fn into_store(self) -> S {
        self.persistence.into_inner()
    }

    /// Enhancement hints for the current category
    pub fn enhancements(&self) -> &'static [&'static str] {
        self.catalog().enhancements(self.state.session.current_category)
    }

    pub fn handle(&mut self, event: UiEvent) -> Result<View> {
        match event {
            UiEvent::GenerateRequested => self.generate(),
            UiEvent::CategorySelected(name) => self.select_category(&name),
            UiEvent::FavoriteRequested => self.favorite_current(),
            UiEvent::ShareRequested => Ok(self.share_current()),
        }
    }

    pub fn generate(&mut self) -> Result<View> {
        let now = self.clock.now().with_timezone(&Utc);
        let idea = self.engine.draw(self.state.session.current_category, now)?;

        self.state.session.record_generated_idea(&idea);
        self.state.history.append(idea);
        self.state.stats.record_generation();
        self.persist();

        let mut view = self.view();
        if self.engine.chance(self.options.enhancement_hint_chance) {
            view.notice = Some(Notice::EnhancementAvailable);
        }
        Ok(view)
    }

    pub fn select_category(&mut self, name: &str) -> Result<View> {
        let had_idea = self.state.session.has_idea();
        let category = self.state.session.select_category(name)?;

        let mut view = self.view();
        if had_idea {
            view.notice = Some(Notice::SwitchedCategory(category));
        }
        Ok(view)
    }

    /// Favorite the idea on screen. No idea yet -> silent no-op.
    pub fn favorite_current(&mut self) -> Result<View> {
        if !self.state.session.has_idea() {
            return Ok(self.view());
        }

        let now = self.clock.now().with_timezone(&Utc);
        let id = self.engine.next_id(now);
        let session = &self.state.session;
        self.state.favorites.add(
            id,
            &session.current_idea,
            session.current_category,
            session.is_ai_enhanced,
            now,
        )?;
        self.state.stats.record_favorite();
        self.persist();

        let mut view = self.view();
        view.notice = Some(Notice::AddedToFavorites);
        Ok(view)
    }

    /// Builds the share payload. Delivery is up to the renderer, which
    /// reports it back through `share_delivered`.
    pub fn share_current(&mut self) -> View {
        let mut view = self.view();
        if !self.state.session.has_idea() {
            view.notice = Some(Notice::GenerateFirst);
            return view;
        }

        debug!(
            category = %self.state.session.current_category,
            "share payload prepared"
        );
        view.share = Some(SharePayload {
            title: SHARE_TITLE.to_string(),
            text: self.state.session.current_idea.clone(),
            url: self.options.share_url.clone(),
        });
        view
    }

    /// Called once the payload actually reached the user
    pub fn share_delivered(&self, payload: &SharePayload) {
        info!(chars = payload.text.chars().count(), "share tracked");
    }

    pub fn run_task(&mut self, task: Task) -> View {
        match task {
            Task::RefreshStats => {}
            Task::SimulateAiActivity => {
                if self.engine.chance(self.options.ai_activity_chance) {
                    let n = self.engine.burst(MAX_AI_BURST);
                    self.state.stats.record_ai_suggestion(n);
                    debug!(added = n, "simulated ai suggestions");
                    self.persist();
                }
            }
        }
        self.view()
    }

    pub fn view(&self) -> View {
        let stats = self.state.stats.stats().clone();
        let favorites = self.state.favorites.count();
        let session = &self.state.session;
        View {
            category: session.current_category,
            idea: session.has_idea().then(|| session.current_idea.clone()),
            ai_enhanced: session.is_ai_enhanced,
            progress: Progress::compute(&stats, favorites),
            stats,
            favorites,
            feed: self.state.history.feed(),
            notice: None,
            share: None,
        }
    }

    fn persist(&mut self) {
        let state = &self.state;
        if let Err(err) = self
            .persistence
            .save(&state.history, &state.favorites, state.stats.stats())
        {
            warn!(error = %err, "save failed, keeping in-memory state");
        }
    }
}
