//! Diagnostics written to stderr.
//!
//! Standard output is reserved for rendered HTML (or search hits), so everything meant for the
//! person running the tool goes through here.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

fn colour() -> bool {
    std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
}

pub fn info(msg: impl AsRef<str>) {
    let msg = msg.as_ref();
    if colour() {
        eprintln!("{}", msg.green());
    } else {
        eprintln!("{msg}");
    }
}

pub fn warn(msg: impl AsRef<str>) {
    let msg = msg.as_ref();
    if colour() {
        eprintln!("{}", msg.yellow());
    } else {
        eprintln!("{msg}");
    }
}

pub fn error(msg: impl AsRef<str>) {
    let msg = msg.as_ref();
    if colour() {
        eprintln!("{}", msg.red().bold());
    } else {
        eprintln!("{msg}");
    }
}

/// `✓ shown ✗ hidden` line printed after a search.
pub fn summary(shown: usize, hidden: usize) {
    if colour() {
        eprintln!(
            "{} {}",
            format!("✓ {shown}").green(),
            format!("✗ {hidden}").red()
        );
    } else {
        eprintln!("✓ {shown} ✗ {hidden}");
    }
}

/// Spinner shown while waiting on the network. Hidden automatically when stderr is not a
/// terminal.
pub fn spinner(msg: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
