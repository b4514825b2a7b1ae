//! User Story Integration Tests
//!
//! These tests trace complete user workflows with logging to verify
//! the system behaves correctly from the user's perspective.
//!
//! Each test represents a real user story:
//! - "As a user, I want to..."
//! - Tests verify the expected output/behavior
//! - Logs are captured for debugging

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mindspark::persistence::{FAVORITES_KEY, HISTORY_KEY, STATS_KEY};
use mindspark::{
    Category, FileStore, IdeaCatalog, KeyValueStore, ManualClock, MemoryStore, Notice, Options,
    Scheduler, Spark, SparkError, Task, UiEvent,
};

/// Test helper to capture and display trace logs
struct TestTracer {
    name: String,
    logs: Vec<String>,
}

impl TestTracer {
    fn new(name: &str) -> Self {
        eprintln!("\n╔═══════════════════════════════════════════════════════════════");
        eprintln!("║ USER STORY: {}", name);
        eprintln!("╚═══════════════════════════════════════════════════════════════\n");
        Self {
            name: name.to_string(),
            logs: vec![],
        }
    }

    fn step(&mut self, description: &str) {
        let msg = format!("  → {}", description);
        eprintln!("{}", msg);
        self.logs.push(msg);
    }

    fn expect(&mut self, condition: bool, description: &str) {
        let status = if condition { "✓" } else { "✗" };
        let msg = format!("    {} {}", status, description);
        eprintln!("{}", msg);
        self.logs.push(msg);
        assert!(condition, "FAILED: {}", description);
    }

    fn done(&self) {
        eprintln!("\n  ══════════════════════════════════════════════════════");
        eprintln!("  ✓ Story completed: {} ({} checks)", self.name, self.logs.len());
        eprintln!();
    }
}

fn day(d: u32, h: u32) -> DateTime<FixedOffset> {
    FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 9, d, h, 0, 0)
        .unwrap()
}

fn quiet() -> Options {
    Options {
        ai_activity_chance: 0.0,
        enhancement_hint_chance: 0.0,
        ..Options::default()
    }
}

// ═══════════════════════════════════════════════════════════════
// STORY: User sparks ideas
// ═══════════════════════════════════════════════════════════════

#[test]
fn story_first_visit_and_burst_of_ideas() {
    let mut t = TestTracer::new("First visit, then 25 ideas in a row");

    t.step("Given an empty store on first launch");
    let clock = ManualClock::new(day(2, 10));
    let mut spark = Spark::start(MemoryStore::new(), &clock, StdRng::seed_from_u64(1), quiet());
    let view = spark.view();
    t.expect(view.idea.is_none(), "No idea shown yet");
    t.expect(view.stats.streak_count == 1, "Streak starts at 1");
    t.expect(view.feed.is_empty(), "Feed is empty");

    t.step("When the user presses generate 25 times");
    let mut texts = Vec::new();
    for _ in 0..25 {
        clock.advance(Duration::seconds(3));
        let view = spark.handle(UiEvent::GenerateRequested).unwrap();
        texts.push(view.idea.unwrap());
    }

    let view = spark.view();
    t.expect(view.stats.ideas_generated == 25, "25 ideas counted");
    t.expect(spark.state().history.len() == 20, "History capped at 20");
    t.expect(view.feed.len() == 10, "Feed shows 10");

    let newest_first: Vec<String> = texts.iter().rev().take(20).cloned().collect();
    let logged: Vec<String> = spark.state().history.recent(20).map(|i| i.text.clone()).collect();
    t.expect(logged == newest_first, "History holds the 20 newest, newest first");

    let ts: Vec<_> = spark.state().history.recent(20).map(|i| i.timestamp).collect();
    t.expect(ts.windows(2).all(|w| w[0] > w[1]), "Timestamps descend");

    t.done();
}

#[test]
fn story_every_draw_belongs_to_its_category() {
    let mut t = TestTracer::new("Draws stay inside the selected category");

    let clock = ManualClock::new(day(3, 9));
    let mut spark = Spark::start(MemoryStore::new(), &clock, StdRng::seed_from_u64(77), quiet());
    let catalog = IdeaCatalog::builtin();

    for category in Category::ALL {
        t.step(&format!("Select {} and draw 30 ideas", category));
        spark.handle(UiEvent::CategorySelected(category.to_string())).unwrap();
        let all_inside = (0..30).all(|_| {
            let text = spark.generate().unwrap().idea.unwrap();
            catalog.contains(category, &text)
        });
        t.expect(all_inside, "Every idea comes from the category's list");
    }

    t.step("Select an unsupported category");
    let before = spark.state().clone();
    let result = spark.handle(UiEvent::CategorySelected("poetry".into()));
    t.expect(
        matches!(result, Err(SparkError::UnknownCategory(_))),
        "Rejected with UnknownCategory",
    );
    t.expect(spark.state() == &before, "State untouched");

    t.done();
}

// ═══════════════════════════════════════════════════════════════
// STORY: User keeps favorites
// ═══════════════════════════════════════════════════════════════

#[test]
fn story_favorite_once_only() {
    let mut t = TestTracer::new("Favoriting the same idea twice");

    let clock = ManualClock::new(day(4, 12));
    let mut spark = Spark::start(MemoryStore::new(), &clock, StdRng::seed_from_u64(5), quiet());

    t.step("Given a freshly generated idea");
    spark.generate().unwrap();

    t.step("When the user favorites it");
    let view = spark.handle(UiEvent::FavoriteRequested).unwrap();
    t.expect(view.notice == Some(Notice::AddedToFavorites), "Confirmation shown");
    t.expect(view.favorites == 1, "One favorite");

    t.step("When the user favorites it again");
    let err = spark.handle(UiEvent::FavoriteRequested).unwrap_err();
    t.expect(matches!(err, SparkError::AlreadyFavorited), "Rejected as duplicate");
    t.expect(err.to_string() == "Idea already in favorites!", "Friendly message");
    t.expect(spark.state().favorites.count() == 1, "Still one favorite");
    t.expect(spark.view().stats.favorites_count == 1, "Counter in sync");

    t.step("Favorites survive history truncation");
    for _ in 0..30 {
        spark.generate().unwrap();
    }
    let store = spark.into_store();
    let reopened = Spark::start(store, &clock, StdRng::seed_from_u64(6), quiet());
    t.expect(reopened.state().favorites.count() == 1, "Favorite persisted");

    t.done();
}

// ═══════════════════════════════════════════════════════════════
// STORY: Daily streak
// ═══════════════════════════════════════════════════════════════

#[test]
fn story_streak_across_days() {
    let mut t = TestTracer::new("Streak grows, holds, and resets");

    let mut store = MemoryStore::new();
    let clock = ManualClock::new(day(10, 8));
    let visit = |when: DateTime<FixedOffset>, store: MemoryStore| {
        clock.set(when);
        let spark = Spark::start(store, &clock, StdRng::seed_from_u64(0), quiet());
        let streak = spark.state().stats.stats().streak_count;
        (streak, spark.into_store())
    };

    t.step("Day 1 morning: first visit");
    let (streak, s) = visit(day(10, 8), store);
    store = s;
    t.expect(streak == 1, "Streak 1");

    t.step("Day 1 evening: second visit same day");
    let (streak, s) = visit(day(10, 21), store);
    store = s;
    t.expect(streak == 1, "Unchanged on same day");

    t.step("Day 2: consecutive visit");
    let (streak, s) = visit(day(11, 7), store);
    store = s;
    t.expect(streak == 2, "Incremented by one");

    t.step("Day 3 late night");
    let (streak, s) = visit(day(12, 23), store);
    store = s;
    t.expect(streak == 3, "Incremented again");

    t.step("Day 5: skipped a day");
    let (streak, s) = visit(day(14, 9), store);
    store = s;
    t.expect(streak == 1, "Reset to 1");

    let raw = store.get(STATS_KEY).unwrap().unwrap();
    t.expect(raw.contains("\"lastVisit\""), "lastVisit persisted");

    t.step("Stored blob from earlier today with no streak count");
    store
        .set(STATS_KEY, r#"{"lastVisit":"2024-09-14T13:00:00.000Z"}"#)
        .unwrap();
    let (streak, _) = visit(day(14, 18), store);
    t.expect(streak == 1, "Today's visit counts even when stored streak is 0");

    t.done();
}

// ═══════════════════════════════════════════════════════════════
// STORY: Data on disk
// ═══════════════════════════════════════════════════════════════

#[test]
fn story_file_store_survives_restart_and_corruption() {
    let mut t = TestTracer::new("File-backed persistence");

    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::new(day(20, 15));

    t.step("Generate three ideas with a file store");
    let store = FileStore::open(dir.path()).unwrap();
    let mut spark = Spark::start(store, &clock, StdRng::seed_from_u64(3), quiet());
    for _ in 0..3 {
        spark.generate().unwrap();
    }
    drop(spark);

    for key in [HISTORY_KEY, FAVORITES_KEY, STATS_KEY] {
        t.expect(dir.path().join(format!("{key}.json")).exists(), &format!("{key}.json written"));
    }

    t.step("Restart and read back");
    let store = FileStore::open(dir.path()).unwrap();
    let spark = Spark::start(store, &clock, StdRng::seed_from_u64(3), quiet());
    t.expect(spark.state().history.len() == 3, "Three ideas restored");
    t.expect(spark.view().stats.ideas_generated == 3, "Counter restored");
    drop(spark);

    t.step("Corrupt the history file");
    std::fs::write(dir.path().join("ideaHistory.json"), "{{{ not json").unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let spark = Spark::start(store, &clock, StdRng::seed_from_u64(3), quiet());
    t.expect(spark.state().history.is_empty(), "History falls back to empty");
    t.expect(spark.view().stats.ideas_generated == 3, "Stats slot unaffected");

    t.done();
}

#[test]
fn story_reads_browser_local_storage_blobs() {
    let mut t = TestTracer::new("Import data written by the browser widget");

    t.step("Given slots in the browser's JSON shape");
    let mut store = MemoryStore::new();
    store
        .set(
            HISTORY_KEY,
            r#"[{"id":1725800000000,"text":"Design an interactive experience for a museum exhibition","category":"design","timestamp":"2024-09-08T12:53:20.000Z","aiEnhanced":false,"shared":false,"rating":0}]"#,
        )
        .unwrap();
    store
        .set(
            STATS_KEY,
            r#"{"ideasGenerated":1,"favoritesCount":0,"streakCount":4,"lastVisit":"2024-09-08T13:00:00.000Z","aiSuggestions":2}"#,
        )
        .unwrap();

    t.step("When the next local day starts a session");
    let clock = ManualClock::new(day(9, 10));
    let spark = Spark::start(store, clock, StdRng::seed_from_u64(0), quiet());
    let stats = spark.state().stats.stats().clone();

    t.expect(spark.state().history.len() == 1, "History entry imported");
    t.expect(stats.ai_suggestions == 2, "AI counter imported");
    t.expect(stats.streak_count == 5, "Consecutive day extends imported streak");

    t.done();
}

// ═══════════════════════════════════════════════════════════════
// STORY: Background activity
// ═══════════════════════════════════════════════════════════════

#[test]
fn story_scheduled_ai_activity() {
    let mut t = TestTracer::new("Timers fire on the injected clock");

    let clock = ManualClock::new(day(21, 9));
    let options = Options {
        ai_activity_chance: 1.0,
        ..quiet()
    };
    let mut spark = Spark::start(MemoryStore::new(), &clock, StdRng::seed_from_u64(8), options);
    let mut scheduler = Scheduler::new()
        .every(Task::RefreshStats, Duration::seconds(30))
        .every(Task::SimulateAiActivity, Duration::seconds(45));

    let now = |c: &ManualClock| mindspark::Clock::now(c).with_timezone(&Utc);

    t.step("Arm timers");
    t.expect(scheduler.due(now(&clock)).is_empty(), "Nothing fires on arming");

    t.step("Advance 30s: stats refresh only");
    clock.advance(Duration::seconds(30));
    let due = scheduler.due(now(&clock));
    t.expect(due == vec![Task::RefreshStats], "Refresh due");
    let before = spark.state().clone();
    for task in due {
        spark.run_task(task);
    }
    t.expect(spark.state() == &before, "Refresh does not mutate");

    t.step("Advance to 45s: simulated AI activity");
    clock.advance(Duration::seconds(15));
    let due = scheduler.due(now(&clock));
    t.expect(due == vec![Task::SimulateAiActivity], "AI task due");
    let mut added = 0;
    for task in due {
        added = spark.run_task(task).stats.ai_suggestions;
    }
    t.expect((1..=3).contains(&added), "Added between 1 and 3 suggestions");

    let saved = spark.store().get(STATS_KEY).unwrap().unwrap();
    t.expect(
        saved.contains(&format!("\"aiSuggestions\":{added}")),
        "Change persisted",
    );

    t.done();
}

#[test]
fn story_share_an_idea() {
    let mut t = TestTracer::new("Share payload for the current idea");

    let clock = ManualClock::new(day(22, 18));
    let mut spark = Spark::start(MemoryStore::new(), &clock, StdRng::seed_from_u64(4), quiet());

    t.step("Share before generating");
    let view = spark.handle(UiEvent::ShareRequested).unwrap();
    t.expect(view.notice == Some(Notice::GenerateFirst), "Asked to generate first");

    t.step("Generate, then share");
    spark.handle(UiEvent::CategorySelected("startup".into())).unwrap();
    let idea = spark.generate().unwrap().idea.unwrap();
    let share = spark.handle(UiEvent::ShareRequested).unwrap().share.unwrap();
    t.expect(share.text == idea, "Share carries the idea");
    t.expect(
        share.fallback_text().ends_with("Generated by MindSpark - https://mindspark.app"),
        "Fallback text has attribution",
    );

    t.done();
}
