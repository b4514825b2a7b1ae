//! mindspark - creative idea sparker
//!
//! USAGE:
//!   mindspark                        # interactive loop
//!   mindspark spark [--category c]   # one idea, then exit
//!   mindspark stats                  # counters and streak
//!   mindspark history [N]            # recent ideas
//!   mindspark favorites              # saved ideas
//!   mindspark enhance [category]     # AI enhancement hints
//!   mindspark config set key <value> # non-interactive config

use anyhow::{bail, Context, Result};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use mindspark::config::{self, Config};
use mindspark::persistence::PersistenceAdapter;
use mindspark::stats::Progress;
use mindspark::{
    ui, Category, Clock, FileStore, Options, Scheduler, Spark, SystemClock, Task, UiEvent,
};

const SCREEN_WIDTH: usize = 80;

type App = Spark<FileStore, SystemClock, StdRng>;

// ═══════════════════════════════════════════════════════════════
// CLI
// ═══════════════════════════════════════════════════════════════

#[derive(Debug)]
enum Command {
    Interactive,
    Spark { category: Option<String> },
    Stats,
    History { limit: usize },
    Favorites,
    Enhance { category: Option<String> },
    ConfigSet { key: String, value: String },
    Help,
}

#[derive(Debug)]
struct Cli {
    command: Command,
    seed: Option<u64>,
}

fn parse_args() -> Result<Cli> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let mut seed = None;
    if let Some(pos) = args.iter().position(|a| a == "--seed") {
        let value = args.get(pos + 1).context("--seed needs a value")?;
        seed = Some(value.parse().with_context(|| format!("Invalid seed: {value}"))?);
        args.drain(pos..=pos + 1);
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        return Ok(Cli { command: Command::Help, seed });
    }

    let command = match args.first().map(|s| s.as_str()) {
        None => Command::Interactive,
        Some("spark") => {
            let category = args
                .iter()
                .position(|a| a == "--category" || a == "-c")
                .and_then(|i| args.get(i + 1).cloned());
            Command::Spark { category }
        }
        Some("stats") => Command::Stats,
        Some("history") => Command::History {
            limit: match args.get(1) {
                Some(n) => n.parse().with_context(|| format!("Invalid count: {n}"))?,
                None => 10,
            },
        },
        Some("favorites") => Command::Favorites,
        Some("enhance") => Command::Enhance {
            category: args.get(1).cloned(),
        },
        Some("config") if args.get(1).map(|s| s.as_str()) == Some("set") => Command::ConfigSet {
            key: args.get(2).cloned().unwrap_or_default(),
            value: args.get(3).cloned().unwrap_or_default(),
        },
        Some(other) => bail!("Unknown command: {other} (try --help)"),
    };

    Ok(Cli { command, seed })
}

fn print_help() {
    println!(r#"mindspark - creative idea sparker

USAGE:
    mindspark                        # interactive loop
    mindspark spark [--category c]   # one idea, then exit
    mindspark stats                  # counters and streak
    mindspark history [N]            # recent ideas (default 10)
    mindspark favorites              # saved ideas
    mindspark enhance [category]     # AI enhancement hints
    mindspark config set <key> <v>   # set config value

FLAGS:
    -c, --category <name>   art, startup or design
        --seed <n>          Reproducible draws
    -h, --help              Show this help

CONFIG:
    ~/.config/mindspark/config.json    Preferences
    ~/.local/state/mindspark/          History, favorites, stats

ENVIRONMENT:
    MINDSPARK_DATA_DIR      Override data directory
    MINDSPARK_LOG           Log filter (default: warn)
"#);
    print_controls();
}

fn print_controls() {
    println!(r#"CONTROLS (interactive mode):
    g, Enter        Generate an idea
    c <category>    Switch category (or just type art/startup/design)
    f               Favorite current idea
    s               Share current idea
    e               AI enhancement hints
    h               History
    q               Quit
"#);
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("MINDSPARK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ═══════════════════════════════════════════════════════════════
// MAIN
// ═══════════════════════════════════════════════════════════════

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();
    let cli = parse_args()?;

    match cli.command {
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::ConfigSet { key, value } => run_config_set(&key, &value),
        Command::Stats => run_stats(&Config::load()?),
        Command::History { limit } => run_history(&Config::load()?, limit),
        Command::Favorites => run_favorites(&Config::load()?),
        Command::Enhance { category } => run_enhance(&Config::load()?, category.as_deref()),
        Command::Spark { category } => run_spark(&Config::load()?, cli.seed, category.as_deref()),
        Command::Interactive => run_interactive(&Config::load()?, cli.seed).await,
    }
}

// ═══════════════════════════════════════════════════════════════
// COMMANDS
// ═══════════════════════════════════════════════════════════════

fn open_store(cfg: &Config) -> Result<FileStore> {
    let dir = cfg.data_dir()?;
    FileStore::open(dir.clone())
        .with_context(|| format!("Failed to open data dir {}", dir.display()))
}

/// Starting a session counts as a visit for the streak
fn open_app(cfg: &Config, seed: Option<u64>) -> Result<App> {
    let store = open_store(cfg)?;
    let rng = match seed.or(cfg.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(Spark::start(store, SystemClock, rng, Options::from(cfg)))
}

fn run_config_set(key: &str, value: &str) -> Result<()> {
    if key.is_empty() {
        bail!("Usage: mindspark config set <key> <value>");
    }
    let mut cfg = Config::load()?;
    cfg.set(key, value)?;
    cfg.save()?;
    println!("✓ {} = {} ({})", key, value, config::config_path()?.display());
    Ok(())
}

fn run_stats(cfg: &Config) -> Result<()> {
    let (_, favorites, stats) = PersistenceAdapter::new(open_store(cfg)?).load();
    let progress = Progress::compute(&stats, favorites.count());
    for line in ui::render_stats(&stats, favorites.count(), &progress) {
        println!("{line}");
    }
    if let Some(last) = stats.last_visit {
        println!("\n  Last visit: {}", ui::format_time_ago(last, SystemClock.now()));
    }
    Ok(())
}

fn run_history(cfg: &Config, limit: usize) -> Result<()> {
    let (history, _, _) = PersistenceAdapter::new(open_store(cfg)?).load();
    let recent: Vec<_> = history.recent(limit).cloned().collect();
    for line in ui::render_feed(&recent, SystemClock.now(), SCREEN_WIDTH) {
        println!("{line}");
    }
    Ok(())
}

fn run_favorites(cfg: &Config) -> Result<()> {
    let (_, favorites, _) = PersistenceAdapter::new(open_store(cfg)?).load();
    if favorites.count() == 0 {
        println!("No favorites yet. Press f after generating an idea.");
    }
    for record in favorites.iter() {
        println!("{}", ui::render_favorite(record, SCREEN_WIDTH));
    }
    Ok(())
}

fn run_enhance(cfg: &Config, category: Option<&str>) -> Result<()> {
    let category: Category = match category {
        Some(name) => name.parse()?,
        None => cfg.default_category,
    };
    print_enhancements(category, mindspark::IdeaCatalog::builtin().enhancements(category));
    Ok(())
}

fn print_enhancements(category: Category, hints: &[&str]) {
    println!("AI enhancements for {}:", category.context());
    for hint in hints {
        println!("  • {hint}");
    }
}

fn run_spark(cfg: &Config, seed: Option<u64>, category: Option<&str>) -> Result<()> {
    let mut app = open_app(cfg, seed)?;
    if let Some(name) = category {
        app.select_category(name)?;
    }
    let view = app.generate()?;
    println!("{}", ui::render_view(&view, app.clock().now(), SCREEN_WIDTH));
    Ok(())
}

// ═══════════════════════════════════════════════════════════════
// INTERACTIVE
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, PartialEq)]
enum Input {
    Event(UiEvent),
    Enhance,
    History,
    Help,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "" | "g" | "generate" => Input::Event(UiEvent::GenerateRequested),
        "f" | "fav" | "favorite" => Input::Event(UiEvent::FavoriteRequested),
        "s" | "share" => Input::Event(UiEvent::ShareRequested),
        "c" | "category" => Input::Event(UiEvent::CategorySelected(rest.to_string())),
        "e" | "enhance" => Input::Enhance,
        "h" | "history" => Input::History,
        "?" | "help" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        name if name.parse::<Category>().is_ok() => {
            Input::Event(UiEvent::CategorySelected(name.to_string()))
        }
        _ => Input::Unknown(line.to_string()),
    }
}

fn prompt() {
    use std::io::Write;
    print!("spark> ");
    let _ = std::io::stdout().flush();
}

async fn run_interactive(cfg: &Config, seed: Option<u64>) -> Result<()> {
    let mut app = open_app(cfg, seed)?;
    let mut scheduler = Scheduler::from_config(cfg);

    println!("{}", ui::render_view(&app.view(), app.clock().now(), SCREEN_WIDTH));
    println!("(? for controls)");
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut heartbeat = tokio::time::interval(Duration::from_secs(1));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_input(&line) {
                    Input::Quit => break,
                    Input::Help => print_controls(),
                    Input::Enhance => {
                        let category = app.state().session.current_category;
                        print_enhancements(category, app.enhancements());
                    }
                    Input::History => {
                        let recent: Vec<_> =
                            app.state().history.recent(usize::MAX).cloned().collect();
                        for line in ui::render_feed(&recent, app.clock().now(), SCREEN_WIDTH) {
                            println!("{line}");
                        }
                    }
                    Input::Event(event) => match app.handle(event) {
                        Ok(view) => {
                            let now = app.clock().now();
                            println!("{}", ui::render_view(&view, now, SCREEN_WIDTH));
                            if let Some(share) = &view.share {
                                app.share_delivered(share);
                            }
                        }
                        Err(err) => println!("  » {err}"),
                    },
                    Input::Unknown(input) => println!("Unknown command: {input} (? for controls)"),
                }
                prompt();
            }
            _ = heartbeat.tick() => {
                let now = app.clock().now().with_timezone(&Utc);
                for task in scheduler.due(now) {
                    let before = app.state().stats.stats().ai_suggestions;
                    let view = app.run_task(task);
                    let changed = view.stats.ai_suggestions != before;
                    if task == Task::RefreshStats || changed {
                        println!("\n  [{}]", ui::render_status(&view));
                        prompt();
                    }
                }
            }
            _ = &mut ctrl_c => break,
        }
    }

    println!("\nKeep sparking!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input(""), Input::Event(UiEvent::GenerateRequested));
        assert_eq!(parse_input(" f "), Input::Event(UiEvent::FavoriteRequested));
        assert_eq!(
            parse_input("c startup"),
            Input::Event(UiEvent::CategorySelected("startup".into()))
        );
        assert_eq!(
            parse_input("design"),
            Input::Event(UiEvent::CategorySelected("design".into()))
        );
        assert_eq!(parse_input("q"), Input::Quit);
        assert_eq!(parse_input("dance"), Input::Unknown("dance".into()));
    }
}
