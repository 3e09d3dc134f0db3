//! Formatting utilities for terminal output

use crate::core::{Mark, Round};
use crate::scores::ScoreRecord;
use colored::{ColoredString, Colorize};

/// Render one digit as a colored tile
#[must_use]
pub fn tile(digit: u8, mark: Mark) -> ColoredString {
    let text = format!(" {digit} ");
    match mark {
        Mark::Green => text.black().on_green().bold(),
        Mark::Yellow => text.black().on_yellow().bold(),
        Mark::Gray => text.white().on_bright_black(),
    }
}

/// Render a scored round as a row of colored tiles
#[must_use]
pub fn round_tiles(round: &Round) -> String {
    round
        .verdict
        .marks()
        .iter()
        .enumerate()
        .map(|(i, &mark)| tile(round.guess.digit_at(i), mark).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// "Last solved in N tries | Last 10 average: X.XX"
#[must_use]
pub fn score_summary(record: &ScoreRecord) -> String {
    let last = record.last().map_or_else(
        || "No solves yet".to_string(),
        |tries| format!("Last solved in {tries} {}", plural(tries, "try", "tries")),
    );
    let average = record.last_ten_average().map_or_else(
        || "Last 10 average: --".to_string(),
        |avg| format!("Last 10 average: {avg:.2}"),
    );
    format!("{last} | {average}")
}

#[must_use]
pub const fn plural<'a>(count: u32, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width] below
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
