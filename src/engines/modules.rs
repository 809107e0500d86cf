//! Caller-owned UK module sheet. Every field is corrected on entry so the
//! averaging step only ever sees in-range values.

use super::uk::{UkError, UkResult, compute_uk_average};
use serde::Serialize;
use std::fmt;

pub const ALLOWED_CREDITS: [u8; 5] = [10, 15, 20, 30, 40];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(into = "u8")]
pub enum Credits {
    Ten,
    Fifteen,
    Twenty,
    Thirty,
    Forty,
}

impl Credits {
    pub fn value(self) -> u8 {
        match self {
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Twenty => 20,
            Self::Thirty => 30,
            Self::Forty => 40,
        }
    }

    /// Exact match, otherwise the nearest allowed value. Ties go to the smaller one.
    pub fn snap(raw: i64) -> Self {
        let mut best = ALLOWED_CREDITS[0];
        for &allowed in &ALLOWED_CREDITS[1..] {
            if i64::from(allowed).abs_diff(raw) < i64::from(best).abs_diff(raw) {
                best = allowed;
            }
        }
        if i64::from(best) != raw {
            log::warn!("credits {raw} not in {ALLOWED_CREDITS:?}, using {best}");
        }
        match best {
            10 => Self::Ten,
            15 => Self::Fifteen,
            20 => Self::Twenty,
            30 => Self::Thirty,
            _ => Self::Forty,
        }
    }
}

impl From<Credits> for u8 {
    fn from(credits: Credits) -> Self {
        credits.value()
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(into = "u8")]
pub enum Year {
    First,
    Second,
    Third,
}

impl Year {
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    pub fn clamp(raw: i64) -> Self {
        if !(1..=3).contains(&raw) {
            log::warn!("year {raw} outside 1..=3, clamping");
        }
        match raw {
            i64::MIN..=1 => Self::First,
            2 => Self::Second,
            _ => Self::Third,
        }
    }
}

impl From<Year> for u8 {
    fn from(year: Year) -> Self {
        year.number()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {}", self.number())
    }
}

/// Clamps a mark into `0..=100`. NaN reads as "not entered".
pub fn clamp_percentage(raw: f64) -> f64 {
    if raw.is_nan() {
        log::warn!("percentage is not a number, treating as not entered");
        return 0.0;
    }
    let clamped = raw.clamp(0.0, 100.0);
    if clamped != raw {
        log::warn!("percentage {raw} outside 0..=100, clamped to {clamped}");
    }
    clamped
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Module {
    pub id: u32,
    pub name: String,
    pub credits: Credits,
    pub percentage: f64,
    pub year: Year,
}

impl Module {
    /// Only entered modules take part in averaging. A 0% mark is read as not
    /// yet entered, so a genuine zero is indistinguishable from a blank row.
    pub fn is_entered(&self) -> bool {
        self.percentage > 0.0 && self.credits.value() > 0
    }
}

#[derive(Debug, Clone)]
pub struct ModuleSheet {
    modules: Vec<Module>,
    next_id: u32,
}

impl Default for ModuleSheet {
    fn default() -> Self {
        Self {
            modules: Vec::new(),
            next_id: 1,
        }
    }
}

impl ModuleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_module(
        &mut self,
        name: impl Into<String>,
        credits: i64,
        percentage: f64,
        year: i64,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.modules.push(Module {
            id,
            name: name.into(),
            credits: Credits::snap(credits),
            percentage: clamp_percentage(percentage),
            year: Year::clamp(year),
        });
        id
    }

    pub fn set_name(&mut self, id: u32, name: impl Into<String>) -> bool {
        self.edit(id, |module| module.name = name.into())
    }

    pub fn set_percentage(&mut self, id: u32, percentage: f64) -> bool {
        self.edit(id, |module| module.percentage = clamp_percentage(percentage))
    }

    pub fn set_credits(&mut self, id: u32, credits: i64) -> bool {
        self.edit(id, |module| module.credits = Credits::snap(credits))
    }

    pub fn set_year(&mut self, id: u32, year: i64) -> bool {
        self.edit(id, |module| module.year = Year::clamp(year))
    }

    pub fn remove_module(&mut self, id: u32) -> bool {
        let before = self.modules.len();
        self.modules.retain(|module| module.id != id);
        self.modules.len() != before
    }

    pub fn get(&self, id: u32) -> Option<&Module> {
        self.modules.iter().find(|module| module.id == id)
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn clear(&mut self) {
        self.modules.clear();
    }

    /// Recomputes the whole result from the current rows.
    pub fn calculate(&self) -> Result<UkResult, UkError> {
        compute_uk_average(&self.modules)
    }

    fn edit(&mut self, id: u32, apply: impl FnOnce(&mut Module)) -> bool {
        match self.modules.iter_mut().find(|module| module.id == id) {
            Some(module) => {
                apply(module);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credits_snap_to_allowed_set() {
        assert_eq!(Credits::snap(20), Credits::Twenty);
        assert_eq!(Credits::snap(0), Credits::Ten);
        assert_eq!(Credits::snap(-30), Credits::Ten);
        assert_eq!(Credits::snap(24), Credits::Twenty);
        assert_eq!(Credits::snap(36), Credits::Forty);
        assert_eq!(Credits::snap(120), Credits::Forty);
    }

    #[test]
    fn credits_snap_ties_toward_smaller() {
        assert_eq!(Credits::snap(25), Credits::Twenty);
        assert_eq!(Credits::snap(35), Credits::Thirty);
    }

    #[test]
    fn year_clamps_into_range() {
        assert_eq!(Year::clamp(0), Year::First);
        assert_eq!(Year::clamp(2), Year::Second);
        assert_eq!(Year::clamp(9), Year::Third);
    }

    #[test]
    fn percentage_clamps_into_range() {
        assert_eq!(clamp_percentage(-5.0), 0.0);
        assert_eq!(clamp_percentage(104.5), 100.0);
        assert_eq!(clamp_percentage(67.5), 67.5);
        assert_eq!(clamp_percentage(f64::NAN), 0.0);
    }

    #[test]
    fn sheet_add_edit_remove() {
        let mut sheet = ModuleSheet::new();
        let a = sheet.add_module("Algorithms", 20, 72.0, 2);
        let b = sheet.add_module("Dissertation", 40, 150.0, 5);
        assert_ne!(a, b);
        assert_eq!(sheet.len(), 2);

        let dissertation = sheet.get(b).expect("module b");
        assert_eq!(dissertation.percentage, 100.0);
        assert_eq!(dissertation.year, Year::Third);

        assert!(sheet.set_percentage(b, 64.0));
        assert!(sheet.set_credits(a, 17));
        assert!(sheet.set_year(a, 3));
        assert!(sheet.set_name(a, "Advanced Algorithms"));
        let algorithms = sheet.get(a).expect("module a");
        assert_eq!(algorithms.credits, Credits::Fifteen);
        assert_eq!(algorithms.year, Year::Third);
        assert_eq!(algorithms.name, "Advanced Algorithms");

        assert!(sheet.remove_module(a));
        assert!(!sheet.remove_module(a));
        assert!(!sheet.set_percentage(a, 50.0));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut sheet = ModuleSheet::new();
        let first = sheet.add_module("A", 20, 60.0, 2);
        sheet.remove_module(first);
        let second = sheet.add_module("B", 20, 60.0, 2);
        assert_ne!(first, second);
    }

    #[test]
    fn clear_empties_the_sheet() {
        let mut sheet = ModuleSheet::new();
        assert!(sheet.is_empty());
        sheet.add_module("A", 20, 60.0, 2);
        sheet.add_module("B", 20, 70.0, 3);
        sheet.clear();
        assert!(sheet.is_empty());
        assert_eq!(sheet.calculate(), Err(UkError::NoValidModules));
    }

    #[test]
    fn zero_percentage_is_not_entered() {
        let mut sheet = ModuleSheet::new();
        let id = sheet.add_module("Blank", 20, 0.0, 2);
        assert!(!sheet.get(id).expect("module").is_entered());
        sheet.set_percentage(id, 0.5);
        assert!(sheet.get(id).expect("module").is_entered());
    }

    #[test]
    fn credits_and_year_serialize_as_numbers() {
        let mut sheet = ModuleSheet::new();
        sheet.add_module("Stats", 15, 58.0, 1);
        let json = serde_json::to_value(&sheet.modules()[0]).expect("serialize");
        assert_eq!(json["credits"], 15);
        assert_eq!(json["year"], 1);
    }
}
