//! Configuration management with XDG paths
//!
//! ~/.config/mindspark/config.json - preferences
//! ~/.local/state/mindspark/       - persisted history, favorites, stats

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::catalog::Category;

const APP_NAME: &str = "mindspark";

/// Longest accepted task interval (one year)
pub const MAX_INTERVAL_SECS: u64 = 365 * 24 * 60 * 60;

/// Get config directory (~/.config/mindspark/)
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get state directory (~/.local/state/mindspark/)
pub fn state_dir() -> Result<PathBuf> {
    let base = dirs::state_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".local/state")))
        .context("Could not determine state directory")?;
    Ok(base.join(APP_NAME))
}

/// Get config file path
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where the three data slots live
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Category active at startup
    #[serde(default)]
    pub default_category: Category,

    /// Stats re-render interval (seconds)
    #[serde(default = "default_stats_refresh")]
    pub stats_refresh_secs: u64,

    /// Simulated AI activity interval (seconds)
    #[serde(default = "default_ai_activity")]
    pub ai_activity_secs: u64,

    /// Probability a simulated AI tick adds suggestions
    #[serde(default = "default_ai_chance")]
    pub ai_activity_chance: f64,

    /// Probability a fresh idea gets the enhancement hint
    #[serde(default = "default_hint_chance")]
    pub enhancement_hint_chance: f64,

    /// Link appended to shared ideas
    #[serde(default = "default_share_url")]
    pub share_url: String,

    /// Fixed rng seed for reproducible sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_stats_refresh() -> u64 { 30 }
fn default_ai_activity() -> u64 { 45 }
fn default_ai_chance() -> f64 { 0.2 }
fn default_hint_chance() -> f64 { 0.3 }
fn default_share_url() -> String { "https://mindspark.app".to_string() }

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_category: Category::default(),
            stats_refresh_secs: default_stats_refresh(),
            ai_activity_secs: default_ai_activity(),
            ai_activity_chance: default_ai_chance(),
            enhancement_hint_chance: default_hint_chance(),
            share_url: default_share_url(),
            seed: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Reject values that `config set` would also refuse
    pub fn validate(&self) -> Result<()> {
        check_interval("stats_refresh_secs", self.stats_refresh_secs)?;
        check_interval("ai_activity_secs", self.ai_activity_secs)?;
        check_probability("ai_activity_chance", self.ai_activity_chance)?;
        check_probability("enhancement_hint_chance", self.enhancement_hint_chance)?;
        Ok(())
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, &content).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Apply a `config set <key> <value>` edit
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data_dir" | "data-dir" => self.data_dir = Some(PathBuf::from(value)),
            "category" | "default_category" => {
                self.default_category = value.parse().map_err(anyhow::Error::new)?
            }
            "stats_refresh_secs" => self.stats_refresh_secs = parse_positive(key, value)?,
            "ai_activity_secs" => self.ai_activity_secs = parse_positive(key, value)?,
            "ai_activity_chance" => self.ai_activity_chance = parse_probability(key, value)?,
            "enhancement_hint_chance" => {
                self.enhancement_hint_chance = parse_probability(key, value)?
            }
            "share_url" => self.share_url = value.to_string(),
            "seed" => {
                self.seed = if value.is_empty() || value == "none" {
                    None
                } else {
                    Some(value.parse().with_context(|| format!("Invalid seed: {value}"))?)
                }
            }
            _ => bail!("Unknown config key: {key}"),
        }
        Ok(())
    }

    /// Data directory: env var, then config, then XDG state dir
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("MINDSPARK_DATA_DIR") {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => state_dir(),
        }
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u64> {
    let n: u64 = value.parse().with_context(|| format!("Invalid {key}: {value}"))?;
    check_interval(key, n)?;
    Ok(n)
}

fn parse_probability(key: &str, value: &str) -> Result<f64> {
    let p: f64 = value.parse().with_context(|| format!("Invalid {key}: {value}"))?;
    check_probability(key, p)?;
    Ok(p)
}

fn check_interval(key: &str, secs: u64) -> Result<()> {
    if !(1..=MAX_INTERVAL_SECS).contains(&secs) {
        bail!("{key} must be between 1 and {MAX_INTERVAL_SECS} seconds");
    }
    Ok(())
}

fn check_probability(key: &str, p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        bail!("{key} must be between 0 and 1");
    }
    Ok(())
}
