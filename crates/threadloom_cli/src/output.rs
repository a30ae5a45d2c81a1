//! Terminal output helpers: styled text for humans, JSON lines for scripts.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for tweet listings
//! - `indicatif` for the spinner while a completion is in flight

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    JSON_MODE.store(format == OutputFormat::Json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn json_line(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    serde_json::to_string(&Msg {
        level,
        message,
        data,
    })
    .unwrap_or_else(|_| format!("{{\"level\":\"{level}\"}}"))
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if !is_json() {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", json_line("error", text, None));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

/// Warnings go to stderr in both modes so stdout stays parseable.
pub fn warning(text: &str) {
    if is_json() {
        eprintln!("{}", json_line("warning", text, None));
    } else {
        eprintln!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if !is_json() {
        println!("{}", style(text).dim());
    }
}

/// Print a key-value pair with styled key.
pub fn kv(key: &str, value: &str) {
    if !is_json() {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

/// Emit a result value. JSON mode prints one `{"level":"data",...}` line;
/// text mode prints `text` as is.
pub fn result<T: Serialize>(label: &str, value: &T, text: &str) {
    if is_json() {
        let value = serde_json::to_value(value).unwrap_or(JsonValue::Null);
        println!("{}", json_line("data", label, Some(&value)));
    } else {
        println!("{text}");
    }
}

// ── Tables ─────────────────────────────────────────────────────────

/// Numbered listing of tweets with their character counts.
pub fn tweet_table(tweets: &[String]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        ["#", "Tweet", "Chars"]
            .into_iter()
            .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(Attribute::Bold)),
    );
    for (i, tweet) in tweets.iter().enumerate() {
        let chars = tweet.chars().count();
        let count = Cell::new(chars);
        let count = if chars > threadloom_constant::generation::TWEET_CHAR_LIMIT {
            count.fg(Color::Yellow)
        } else {
            count
        };
        table.add_row(vec![Cell::new(i + 1).fg(Color::Green), Cell::new(tweet), count]);
    }
    table
}

// ── Spinners ───────────────────────────────────────────────────────

/// Spinner for the provider round trip; hidden in JSON mode.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
