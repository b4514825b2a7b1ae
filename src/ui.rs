//! Plain terminal rendering
//!
//! Turns a `View` into lines of text. No state is read back from here.

use chrono::{DateTime, FixedOffset, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::View;
use crate::catalog::Category;
use crate::favorites::FavoriteRecord;
use crate::idea::Idea;
use crate::stats::{Progress, Stats};

const BAR_WIDTH: usize = 20;
const RESET: &str = "\x1b[0m";

/// ANSI colour for a category marker
fn ansi(category: Category) -> &'static str {
    match category.color() {
        "pink" => "\x1b[95m",
        "green" => "\x1b[92m",
        "yellow" => "\x1b[93m",
        _ => "\x1b[90m",
    }
}

/// "Just now", "5m ago", "3h ago", else the local date
pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<FixedOffset>) -> String {
    let minutes = (now.with_timezone(&Utc) - timestamp).num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        timestamp.with_timezone(now.offset()).format("%Y-%m-%d").to_string()
    }
}

/// Cut to `max` display columns, adding an ellipsis when shortened
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn render_stats(stats: &Stats, favorites: usize, progress: &Progress) -> Vec<String> {
    vec![
        stat_row("Ideas", stats.ideas_generated, progress.ideas),
        stat_row("Favorites", favorites as u64, progress.favorites),
        stat_row("Streak", stats.streak_count.into(), progress.streak),
        stat_row("AI assists", stats.ai_suggestions, progress.ai),
    ]
}

fn stat_row(label: &str, value: u64, ratio: f64) -> String {
    format!("  {label:<10} {value:>4}  {}", progress_bar(ratio, BAR_WIDTH))
}

pub fn render_idea_line(idea: &Idea, now: DateTime<FixedOffset>, width: usize) -> String {
    let prefix = format!("{:<8}", idea.category.as_str().to_uppercase());
    let age = format_time_ago(idea.timestamp, now);
    let room = width.saturating_sub(prefix.width() + age.width() + 6);
    format!(
        "{}●{} {} {}  {}",
        ansi(idea.category),
        RESET,
        prefix,
        truncate_to_width(&idea.text, room),
        age
    )
}

pub fn render_feed(feed: &[Idea], now: DateTime<FixedOffset>, width: usize) -> Vec<String> {
    if feed.is_empty() {
        return vec!["  No ideas generated yet. Press g to get started!".to_string()];
    }
    feed.iter().map(|idea| render_idea_line(idea, now, width)).collect()
}

pub fn render_favorite(record: &FavoriteRecord, width: usize) -> String {
    let mark = if record.ai_enhanced { "✦" } else { "♥" };
    format!(
        "{}{}{} {}",
        ansi(record.category),
        mark,
        RESET,
        truncate_to_width(&record.text, width.saturating_sub(2))
    )
}

/// One-line summary for periodic refreshes
pub fn render_status(view: &View) -> String {
    format!(
        "ideas {} · favorites {} · streak {} · ai {}",
        view.stats.ideas_generated,
        view.favorites,
        view.stats.streak_count,
        view.stats.ai_suggestions
    )
}

/// Full screen for one view
pub fn render_view(view: &View, now: DateTime<FixedOffset>, width: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("── {} ──", view.category_label()));
    match &view.idea {
        Some(idea) => {
            let tag = if view.ai_enhanced { " ✦" } else { "" };
            lines.push(format!("\n  ✨ {idea}{tag}\n"));
        }
        None => lines.push("\n  Press g to generate your first creative idea!\n".to_string()),
    }

    if let Some(notice) = &view.notice {
        lines.push(format!("  » {notice}"));
    }
    if let Some(share) = &view.share {
        lines.push(format!("  {}\n", share.title));
        lines.push(share.fallback_text());
        lines.push(String::new());
    }

    lines.extend(render_stats(&view.stats, view.favorites, &view.progress));
    lines.push(String::new());
    lines.push("Recent".to_string());
    lines.extend(render_feed(&view.feed, now, width));

    lines.join("\n")
}
