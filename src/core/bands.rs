use colored::Color;

/// One classification band. `max` is informational; selection only looks at `min`.
#[derive(Debug, Clone, Copy)]
pub struct Band<K: 'static> {
    pub kind: K,
    pub min: f64,
    pub max: f64,
    pub label: &'static str,
    pub color: Color,
}

/// Highest band whose minimum the score meets.
///
/// `bands` must be ordered by descending `min`. Bands are open-ended upward, so
/// the first match wins and no upper bound is checked. `None` means the score is
/// below every threshold and the caller applies its own default.
pub fn select<K>(bands: &'static [Band<K>], score: f64) -> Option<&'static Band<K>> {
    bands.iter().find(|band| score >= band.min)
}
