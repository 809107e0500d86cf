//! LSAT raw score to scaled score, percentile and law school tier.

use crate::core::bands;
use crate::tables::lsat::{self, LawSchoolTier, MAX_LSAT_RAW_SCORE, SCALED_TABLE, TIER_BANDS};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LsatResult {
    pub raw: u16,
    pub scaled: u16,
    pub percentile: u8,
    pub tier: LawSchoolTier,
}

/// Current result next to a hypothetical one, with deltas measured from current.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LsatProjection {
    pub current: LsatResult,
    pub projected: LsatResult,
    pub scaled_delta: i32,
    pub percentile_delta: i32,
}

/// Clamps user input into `0..=MAX_LSAT_RAW_SCORE` before it reaches the engine.
pub fn clamp_lsat_raw(raw: i64) -> u16 {
    let clamped = raw.clamp(0, i64::from(MAX_LSAT_RAW_SCORE));
    if clamped != raw {
        log::warn!("lsat: raw score {raw} outside 0..={MAX_LSAT_RAW_SCORE}, clamped to {clamped}");
    }
    // In range by the clamp above.
    clamped as u16
}

pub fn compute_lsat_score(raw: u16) -> LsatResult {
    let scaled = SCALED_TABLE.lookup(raw as usize);
    LsatResult {
        raw: raw.min(MAX_LSAT_RAW_SCORE),
        scaled,
        percentile: lsat::percentile_for(scaled),
        tier: tier_for(scaled),
    }
}

/// First tier, scanning from the highest threshold down, that the score reaches.
pub fn tier_for(scaled: u16) -> LawSchoolTier {
    bands::select(&TIER_BANDS, f64::from(scaled))
        .map(|band| band.kind)
        .unwrap_or(LawSchoolTier::BelowAverage)
}

/// Runs the conversion for a hypothetical raw score and diffs it against the current one.
pub fn project_lsat(current_raw: u16, hypothetical_raw: u16) -> LsatProjection {
    let current = compute_lsat_score(current_raw);
    let projected = compute_lsat_score(hypothetical_raw);
    LsatProjection {
        current,
        projected,
        scaled_delta: i32::from(projected.scaled) - i32::from(current.scaled),
        percentile_delta: i32::from(projected.percentile) - i32::from(current.percentile),
    }
}
