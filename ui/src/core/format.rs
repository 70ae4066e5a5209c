//! Formatting helpers for presenting scores.

/// Two decimal places, the way every score display is written (`0.8 → "0.80"`).
pub fn format_score(value: f64) -> String {
    format!("{value:.2}")
}

/// `"{passing}/{total} constraints passing"`
pub fn format_constraints(passing: u32, total: u32) -> String {
    format!("{passing}/{total} constraints passing")
}
