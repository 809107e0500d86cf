//! UK honours classification bands and their US GPA equivalents.

use crate::core::bands::Band;
use colored::Color;
use serde::Serialize;
use std::fmt;

/// Year weights applied to per-year averages. Year 1 is reported but not counted.
pub const YEAR1_WEIGHT: f64 = 0.0;
pub const YEAR2_WEIGHT: f64 = 0.3333;
pub const YEAR3_WEIGHT: f64 = 0.6667;

/// An average within this many points below a boundary is borderline.
pub const BORDERLINE_MARGIN: f64 = 1.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    First,
    UpperSecond,
    LowerSecond,
    Third,
    Fail,
}

pub static CLASS_BANDS: [Band<Classification>; 4] = [
    Band {
        kind: Classification::First,
        min: 70.0,
        max: 100.0,
        label: "First Class Honours",
        color: Color::Green,
    },
    Band {
        kind: Classification::UpperSecond,
        min: 60.0,
        max: 70.0,
        label: "Upper Second Class Honours (2:1)",
        color: Color::Cyan,
    },
    Band {
        kind: Classification::LowerSecond,
        min: 50.0,
        max: 60.0,
        label: "Lower Second Class Honours (2:2)",
        color: Color::Blue,
    },
    Band {
        kind: Classification::Third,
        min: 40.0,
        max: 50.0,
        label: "Third Class Honours",
        color: Color::Yellow,
    },
];

static FAIL_BAND: Band<Classification> = Band {
    kind: Classification::Fail,
    min: 0.0,
    max: 40.0,
    label: "Fail",
    color: Color::Red,
};

impl Classification {
    pub fn band(self) -> &'static Band<Self> {
        match self {
            Self::First => &CLASS_BANDS[0],
            Self::UpperSecond => &CLASS_BANDS[1],
            Self::LowerSecond => &CLASS_BANDS[2],
            Self::Third => &CLASS_BANDS[3],
            Self::Fail => &FAIL_BAND,
        }
    }

    pub fn label(self) -> &'static str {
        self.band().label
    }

    /// Point estimate reported alongside the range; not derived from it.
    pub fn gpa_estimate(self) -> f64 {
        match self {
            Self::First => 3.85,
            Self::UpperSecond => 3.35,
            Self::LowerSecond => 2.35,
            Self::Third => 1.5,
            Self::Fail => 0.5,
        }
    }

    pub fn gpa_range(self) -> &'static str {
        match self {
            Self::First => "3.7–4.0",
            Self::UpperSecond => "3.0–3.7",
            Self::LowerSecond => "2.0–2.7",
            Self::Third => "1.0–2.0",
            Self::Fail => "0.0–1.0",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
