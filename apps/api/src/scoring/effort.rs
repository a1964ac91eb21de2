use crate::scoring::keywords::{contains_any, DEFAULT_EFFORT_HOURS, EFFORT_TIERS};

/// Estimates hours needed from the wording of the description.
pub fn estimate_effort(description: &str) -> f64 {
    let text = description.to_lowercase();

    EFFORT_TIERS
        .iter()
        .find(|(_, words)| contains_any(&text, words))
        .map(|(hours, _)| *hours)
        .unwrap_or(DEFAULT_EFFORT_HOURS)
}
