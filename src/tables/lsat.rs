//! LSAT raw-to-scaled conversion and scaled-score percentile ranks.

use super::{DenseTable, LSAT_SCALED_FLOOR, PERCENTILE_FLOOR};
use crate::core::bands::Band;
use colored::Color;
use serde::Serialize;
use std::fmt;

pub const MAX_LSAT_RAW_SCORE: u16 = 101;
pub const MIN_SCALED: u16 = 120;
pub const MAX_SCALED: u16 = 180;

#[rustfmt::skip]
static RAW_TO_SCALED: [u16; 102] = [
    120, 120, 121, 121, 121, 121, 122, 122, 122, 123,
    123, 123, 124, 124, 124, 125, 125, 126, 126, 126,
    127, 127, 128, 128, 129, 129, 130, 130, 131, 131,
    132, 132, 133, 134, 134, 135, 136, 136, 137, 138,
    138, 139, 140, 141, 141, 142, 143, 144, 145, 145,
    146, 147, 148, 149, 150, 150, 151, 152, 153, 154,
    155, 155, 156, 157, 158, 159, 160, 160, 161, 162,
    163, 163, 164, 165, 165, 166, 167, 167, 168, 169,
    169, 170, 170, 171, 172, 172, 173, 173, 174, 174,
    174, 175, 175, 176, 176, 177, 177, 177, 178, 178,
    179, 180,
];

// Indexed by `scaled - MIN_SCALED`.
#[rustfmt::skip]
static SCALED_PERCENTILE: [u8; 61] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 2, 2, 3, 4, 5, 6, 8, 9,
    11, 13, 15, 18, 21, 24, 27, 30, 34, 38,
    42, 46, 50, 53, 57, 61, 65, 69, 72, 75,
    78, 81, 84, 86, 88, 90, 91, 93, 94, 95,
    96, 97, 97, 98, 98, 98, 99, 99, 99, 99,
    99,
];

pub static SCALED_TABLE: DenseTable =
    DenseTable::new("lsat.scaled", &RAW_TO_SCALED, LSAT_SCALED_FLOOR);

pub static PERCENTILE_TABLE: DenseTable<u8> =
    DenseTable::new("lsat.percentile", &SCALED_PERCENTILE, PERCENTILE_FLOOR);

/// Percentile for a scaled score. Scores below 120 have no rank.
pub fn percentile_for(scaled: u16) -> u8 {
    match scaled.checked_sub(MIN_SCALED) {
        Some(offset) => PERCENTILE_TABLE.lookup(offset as usize),
        None => PERCENTILE_FLOOR,
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LawSchoolTier {
    T14,
    TopRegional,
    Regional,
    Safety,
    BelowAverage,
}

/// Ordered by descending threshold. Each tier is open-ended upward.
pub static TIER_BANDS: [Band<LawSchoolTier>; 4] = [
    Band {
        kind: LawSchoolTier::T14,
        min: 165.0,
        max: 180.0,
        label: "T14 Competitive",
        color: Color::Green,
    },
    Band {
        kind: LawSchoolTier::TopRegional,
        min: 160.0,
        max: 164.0,
        label: "Top Regional",
        color: Color::Cyan,
    },
    Band {
        kind: LawSchoolTier::Regional,
        min: 150.0,
        max: 159.0,
        label: "Regional",
        color: Color::Blue,
    },
    Band {
        kind: LawSchoolTier::Safety,
        min: 145.0,
        max: 149.0,
        label: "Safety Schools",
        color: Color::Yellow,
    },
];

static BELOW_AVERAGE_BAND: Band<LawSchoolTier> = Band {
    kind: LawSchoolTier::BelowAverage,
    min: 120.0,
    max: 144.0,
    label: "Below Average",
    color: Color::Red,
};

impl LawSchoolTier {
    pub fn band(self) -> &'static Band<Self> {
        match self {
            Self::T14 => &TIER_BANDS[0],
            Self::TopRegional => &TIER_BANDS[1],
            Self::Regional => &TIER_BANDS[2],
            Self::Safety => &TIER_BANDS[3],
            Self::BelowAverage => &BELOW_AVERAGE_BAND,
        }
    }

    pub fn label(self) -> &'static str {
        self.band().label
    }
}

impl fmt::Display for LawSchoolTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
