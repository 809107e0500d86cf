//! SAT raw-to-scaled conversion with adaptive difficulty resolution.

use crate::tables::DenseTable;
use crate::tables::sat::{
    ACT_TABLE, DIGITAL_MATH_EASY_TABLE, DIGITAL_MATH_HARD_TABLE, DIGITAL_MATH_NORMAL_TABLE,
    DIGITAL_RW_EASY_TABLE, DIGITAL_RW_HARD_TABLE, DIGITAL_RW_NORMAL_TABLE, MATH_CALC_MAX,
    MATH_DIGITAL_MAX, MATH_NO_CALC_MAX, MATH_PAPER_MAX, PAPER_MATH_TABLE, PAPER_RW_TABLE,
    PERCENTILE_TABLE, RW_MAX,
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall raw percentage at or above which auto selects the hard tier.
pub const AUTO_HARD_THRESHOLD: f64 = 0.75;
/// Overall raw percentage at or below which auto selects the easy tier.
pub const AUTO_EASY_THRESHOLD: f64 = 0.35;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TestMode {
    Paper,
    #[default]
    Digital,
}

impl TestMode {
    pub fn math_max(self) -> u16 {
        match self {
            Self::Paper => MATH_PAPER_MAX,
            Self::Digital => MATH_DIGITAL_MAX,
        }
    }
}

impl fmt::Display for TestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paper => write!(f, "paper"),
            Self::Digital => write!(f, "digital"),
        }
    }
}

/// Difficulty tier actually used for conversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Normal => write!(f, "normal"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// Difficulty as requested by the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyChoice {
    #[default]
    Auto,
    Easy,
    Normal,
    Hard,
}

impl DifficultyChoice {
    pub fn fixed(self) -> Option<Difficulty> {
        match self {
            Self::Auto => None,
            Self::Easy => Some(Difficulty::Easy),
            Self::Normal => Some(Difficulty::Normal),
            Self::Hard => Some(Difficulty::Hard),
        }
    }
}

impl fmt::Display for DifficultyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fixed() {
            Some(difficulty) => write!(f, "{difficulty}"),
            None => write!(f, "auto"),
        }
    }
}

/// Math raw score, entered either as one number or as the paper test's two parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathRaw {
    Combined(Option<i32>),
    Split {
        no_calc: Option<i32>,
        calc: Option<i32>,
    },
}

impl Default for MathRaw {
    fn default() -> Self {
        Self::Combined(None)
    }
}

impl MathRaw {
    /// Validated raw total for the given mode. A split score needs both parts.
    fn resolve(&self, mode: TestMode) -> Option<u16> {
        match *self {
            Self::Combined(value) => checked_raw("math", value, mode.math_max()),
            Self::Split { no_calc, calc } => {
                let no_calc = checked_raw("math (no calculator)", no_calc, MATH_NO_CALC_MAX)?;
                let calc = checked_raw("math (calculator)", calc, MATH_CALC_MAX)?;
                Some(clamp_raw("math", no_calc + calc, mode.math_max()))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreInput {
    pub reading_writing_raw: Option<i32>,
    pub math: MathRaw,
    pub test_mode: TestMode,
    pub difficulty: DifficultyChoice,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SatResult {
    pub test_mode: TestMode,
    pub difficulty: Difficulty,
    /// True when `difficulty` was picked by auto resolution.
    pub auto_resolved: bool,
    pub reading_writing_raw: u16,
    pub math_raw: u16,
    pub reading_writing: u16,
    pub math: u16,
    pub total: u16,
    pub percentile: u8,
    pub act_equivalent: u8,
}

/// Converts raw section scores to scaled scores.
///
/// Returns `None` until both sections hold a non-negative raw score. Values above
/// a section maximum are clamped to it.
pub fn compute_sat_score(input: &ScoreInput) -> Option<SatResult> {
    let rw_raw = checked_raw("reading & writing", input.reading_writing_raw, RW_MAX)?;
    let math_raw = input.math.resolve(input.test_mode)?;

    let (difficulty, auto_resolved) = match (input.test_mode, input.difficulty.fixed()) {
        (TestMode::Paper, _) => (Difficulty::Normal, false),
        (TestMode::Digital, Some(fixed)) => (fixed, false),
        (TestMode::Digital, None) => (resolve_difficulty(rw_raw, math_raw), true),
    };

    let (rw_table, math_table) = section_tables(input.test_mode, difficulty);
    let reading_writing = rw_table.lookup(rw_raw as usize);
    let math = math_table.lookup(math_raw as usize);
    let total = reading_writing + math;

    Some(SatResult {
        test_mode: input.test_mode,
        difficulty,
        auto_resolved,
        reading_writing_raw: rw_raw,
        math_raw,
        reading_writing,
        math,
        total,
        percentile: PERCENTILE_TABLE.nearest(total),
        act_equivalent: ACT_TABLE.nearest(total),
    })
}

/// Picks the digital tier from the average of both sections' raw percentages.
pub fn resolve_difficulty(rw_raw: u16, math_raw: u16) -> Difficulty {
    let rw_percentage = f64::from(rw_raw) / f64::from(RW_MAX);
    let math_percentage = f64::from(math_raw) / f64::from(MATH_DIGITAL_MAX);
    let overall = (rw_percentage + math_percentage) / 2.0;

    let difficulty = if overall >= AUTO_HARD_THRESHOLD {
        Difficulty::Hard
    } else if overall <= AUTO_EASY_THRESHOLD {
        Difficulty::Easy
    } else {
        Difficulty::Normal
    };
    log::debug!(
        "auto difficulty: overall {:.3} (rw {:.3}, math {:.3}) -> {}",
        overall,
        rw_percentage,
        math_percentage,
        difficulty
    );
    difficulty
}

fn section_tables(
    mode: TestMode,
    difficulty: Difficulty,
) -> (&'static DenseTable, &'static DenseTable) {
    match (mode, difficulty) {
        (TestMode::Paper, _) => (&PAPER_RW_TABLE, &PAPER_MATH_TABLE),
        (TestMode::Digital, Difficulty::Easy) => (&DIGITAL_RW_EASY_TABLE, &DIGITAL_MATH_EASY_TABLE),
        (TestMode::Digital, Difficulty::Normal) => {
            (&DIGITAL_RW_NORMAL_TABLE, &DIGITAL_MATH_NORMAL_TABLE)
        }
        (TestMode::Digital, Difficulty::Hard) => (&DIGITAL_RW_HARD_TABLE, &DIGITAL_MATH_HARD_TABLE),
    }
}

fn checked_raw(section: &str, value: Option<i32>, max: u16) -> Option<u16> {
    let value = value?;
    if value < 0 {
        log::debug!("{section}: negative raw score {value} treated as missing");
        return None;
    }
    let value = u16::try_from(value).unwrap_or(u16::MAX);
    Some(clamp_raw(section, value, max))
}

fn clamp_raw(section: &str, value: u16, max: u16) -> u16 {
    if value > max {
        log::warn!("{section}: raw score {value} exceeds maximum {max}, clamping");
    }
    value.min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn digital(rw: i32, math: i32, difficulty: DifficultyChoice) -> ScoreInput {
        ScoreInput {
            reading_writing_raw: Some(rw),
            math: MathRaw::Combined(Some(math)),
            test_mode: TestMode::Digital,
            difficulty,
        }
    }

    #[test]
    fn missing_section_yields_no_result() {
        let mut input = digital(30, 30, DifficultyChoice::Auto);
        input.reading_writing_raw = None;
        assert_eq!(compute_sat_score(&input), None);

        let input = ScoreInput {
            reading_writing_raw: Some(30),
            math: MathRaw::Combined(None),
            ..ScoreInput::default()
        };
        assert_eq!(compute_sat_score(&input), None);
        assert_eq!(compute_sat_score(&ScoreInput::default()), None);
    }

    #[test]
    fn split_math_needs_both_parts() {
        let input = ScoreInput {
            reading_writing_raw: Some(40),
            math: MathRaw::Split {
                no_calc: Some(15),
                calc: None,
            },
            test_mode: TestMode::Paper,
            difficulty: DifficultyChoice::Auto,
        };
        assert_eq!(compute_sat_score(&input), None);
    }

    #[test]
    fn negative_raw_is_treated_as_missing() {
        assert_eq!(compute_sat_score(&digital(-1, 20, DifficultyChoice::Auto)), None);
        assert_eq!(compute_sat_score(&digital(20, -3, DifficultyChoice::Auto)), None);
    }

    #[test]
    fn auto_resolves_hard_for_perfect_raw() {
        let result = compute_sat_score(&digital(54, 44, DifficultyChoice::Auto)).expect("result");
        assert_eq!(result.difficulty, Difficulty::Hard);
        assert!(result.auto_resolved);
        assert_eq!(result.total, 1600);
        assert_eq!(result.percentile, 99);
        assert_eq!(result.act_equivalent, 36);
    }

    #[test]
    fn auto_resolves_easy_for_zero_raw() {
        let result = compute_sat_score(&digital(0, 0, DifficultyChoice::Auto)).expect("result");
        assert_eq!(result.difficulty, Difficulty::Easy);
        assert_eq!(result.total, 400);
    }

    #[test]
    fn auto_resolves_normal_at_half() {
        let result = compute_sat_score(&digital(27, 22, DifficultyChoice::Auto)).expect("result");
        assert_eq!(result.difficulty, Difficulty::Normal);
    }

    #[test]
    fn auto_thresholds_are_inclusive() {
        assert_eq!(resolve_difficulty(54, 22), Difficulty::Hard);
        assert_eq!(resolve_difficulty(0, 30), Difficulty::Easy);
        assert_eq!(resolve_difficulty(0, 31), Difficulty::Normal);
        assert_eq!(resolve_difficulty(20, 20), Difficulty::Normal);
    }

    #[test]
    fn explicit_difficulty_skips_auto_resolution() {
        let result = compute_sat_score(&digital(54, 44, DifficultyChoice::Easy)).expect("result");
        assert_eq!(result.difficulty, Difficulty::Easy);
        assert!(!result.auto_resolved);
        assert_eq!(result.reading_writing, 650);
        assert_eq!(result.math, 640);
    }

    #[test]
    fn paper_mode_forces_normal() {
        let input = ScoreInput {
            reading_writing_raw: Some(54),
            math: MathRaw::Combined(Some(58)),
            test_mode: TestMode::Paper,
            difficulty: DifficultyChoice::Hard,
        };
        let result = compute_sat_score(&input).expect("result");
        assert_eq!(result.difficulty, Difficulty::Normal);
        assert!(!result.auto_resolved);
        assert_eq!(result.total, 1600);
    }

    #[test]
    fn paper_split_math_sums_parts() {
        let combined = ScoreInput {
            reading_writing_raw: Some(30),
            math: MathRaw::Combined(Some(35)),
            test_mode: TestMode::Paper,
            difficulty: DifficultyChoice::Auto,
        };
        let split = ScoreInput {
            math: MathRaw::Split {
                no_calc: Some(12),
                calc: Some(23),
            },
            ..combined
        };
        assert_eq!(compute_sat_score(&combined), compute_sat_score(&split));
    }

    #[test]
    fn over_maximum_raw_is_clamped() {
        let clamped =
            compute_sat_score(&digital(90, 90, DifficultyChoice::Normal)).expect("result");
        let at_max = compute_sat_score(&digital(54, 44, DifficultyChoice::Normal)).expect("result");
        assert_eq!(clamped, at_max);
        assert_eq!(clamped.reading_writing_raw, 54);
        assert_eq!(clamped.math_raw, 44);
    }

    #[test]
    fn digital_split_parts_clamp_to_digital_maximum() {
        let input = ScoreInput {
            reading_writing_raw: Some(10),
            math: MathRaw::Split {
                no_calc: Some(20),
                calc: Some(38),
            },
            test_mode: TestMode::Digital,
            difficulty: DifficultyChoice::Normal,
        };
        let result = compute_sat_score(&input).expect("result");
        assert_eq!(result.math_raw, MATH_DIGITAL_MAX);
    }

    fn any_choice() -> impl Strategy<Value = DifficultyChoice> {
        prop_oneof![
            Just(DifficultyChoice::Auto),
            Just(DifficultyChoice::Easy),
            Just(DifficultyChoice::Normal),
            Just(DifficultyChoice::Hard),
        ]
    }

    proptest! {
        #[test]
        fn total_is_sum_of_sections_from_one_tier(
            rw in 0i32..=54,
            math in 0i32..=44,
            choice in any_choice(),
        ) {
            let result = compute_sat_score(&digital(rw, math, choice)).expect("result");
            prop_assert_eq!(result.total, result.reading_writing + result.math);
            prop_assert!((400..=1600).contains(&result.total));

            let (rw_table, math_table) = section_tables(TestMode::Digital, result.difficulty);
            prop_assert_eq!(result.reading_writing, rw_table.lookup(rw as usize));
            prop_assert_eq!(result.math, math_table.lookup(math as usize));
        }

        #[test]
        fn repeated_calls_agree(rw in -5i32..=70, math in -5i32..=70, choice in any_choice()) {
            let input = digital(rw, math, choice);
            prop_assert_eq!(compute_sat_score(&input), compute_sat_score(&input));
        }

        #[test]
        fn no_result_only_when_input_missing(
            rw in proptest::option::of(0i32..=54),
            math in proptest::option::of(0i32..=44),
        ) {
            let input = ScoreInput {
                reading_writing_raw: rw,
                math: MathRaw::Combined(math),
                ..ScoreInput::default()
            };
            let result = compute_sat_score(&input);
            prop_assert_eq!(result.is_none(), rw.is_none() || math.is_none());
        }

        #[test]
        fn fixed_tier_scaled_never_drops_with_more_correct(
            rw in 0i32..54,
            math in 0i32..44,
            choice in any_choice(),
        ) {
            prop_assume!(choice != DifficultyChoice::Auto);
            let lower = compute_sat_score(&digital(rw, math, choice)).expect("result");
            let higher = compute_sat_score(&digital(rw + 1, math + 1, choice)).expect("result");
            prop_assert!(lower.reading_writing <= higher.reading_writing);
            prop_assert!(lower.math <= higher.math);
        }
    }
}
