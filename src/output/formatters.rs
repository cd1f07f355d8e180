//! Formatting utilities for terminal output

/// Format the per-turn line, e.g. `guess  3  crane`
#[must_use]
pub fn turn_line(turn: usize, rendered_guess: &str) -> String {
    format!("guess {turn:>2}  {rendered_guess}")
}

/// Bar for one row of the guess distribution, scaled to the most common count
#[must_use]
pub fn distribution_bar(count: usize, largest: usize, width: usize) -> String {
    let filled = if largest == 0 {
        0
    } else {
        (count * width).div_ceil(largest).min(width)
    };
    format!("{}{}", "■".repeat(filled), " ".repeat(width - filled))
}

/// Format a fraction as a percentage with one decimal
#[must_use]
pub fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 / total as f64 * 100.0)
}
