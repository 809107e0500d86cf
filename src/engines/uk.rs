//! Year-weighted UK module average, honours classification and US GPA equivalent.

use super::modules::{Module, Year};
use crate::core::bands;
use crate::tables::uk::{
    BORDERLINE_MARGIN, CLASS_BANDS, Classification, YEAR1_WEIGHT, YEAR2_WEIGHT, YEAR3_WEIGHT,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UkError {
    #[error("no valid modules: enter a percentage above 0 for at least one module")]
    NoValidModules,
}

/// Credit-weighted average per year, 0 for a year with no entered modules.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct YearAverages {
    pub year1: f64,
    pub year2: f64,
    pub year3: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UkResult {
    /// Unrounded apart from float noise below `NOISE_SCALE`. Display rounds it.
    pub weighted_average: f64,
    pub classification: Classification,
    pub gpa_estimate: f64,
    pub gpa_range: &'static str,
    pub borderline: bool,
    pub total_credits: u32,
    pub module_count: usize,
    pub year_averages: YearAverages,
}

pub fn compute_uk_average(modules: &[Module]) -> Result<UkResult, UkError> {
    let entered: Vec<&Module> = modules.iter().filter(|module| module.is_entered()).collect();
    if entered.is_empty() {
        return Err(UkError::NoValidModules);
    }
    if entered.len() != modules.len() {
        log::debug!(
            "ignoring {} module(s) without a mark",
            modules.len() - entered.len()
        );
    }

    let year_averages = YearAverages {
        year1: year_average(&entered, Year::First),
        year2: year_average(&entered, Year::Second),
        year3: year_average(&entered, Year::Third),
    };
    let weighted = year_averages.year1 * YEAR1_WEIGHT
        + year_averages.year2 * YEAR2_WEIGHT
        + year_averages.year3 * YEAR3_WEIGHT;
    let weighted_average = snap_noise(weighted);
    let classification = classify(weighted_average);

    Ok(UkResult {
        weighted_average,
        classification,
        gpa_estimate: classification.gpa_estimate(),
        gpa_range: classification.gpa_range(),
        borderline: is_borderline(weighted_average),
        total_credits: entered
            .iter()
            .map(|module| u32::from(module.credits.value()))
            .sum(),
        module_count: entered.len(),
        year_averages,
    })
}

pub fn classify(average: f64) -> Classification {
    bands::select(&CLASS_BANDS, average)
        .map(|band| band.kind)
        .unwrap_or(Classification::Fail)
}

/// True when the average sits within the margin below a class boundary.
/// Averages at or above a boundary are never borderline.
pub fn is_borderline(average: f64) -> bool {
    CLASS_BANDS
        .iter()
        .any(|band| band.min - BORDERLINE_MARGIN <= average && average < band.min)
}

fn year_average(modules: &[&Module], year: Year) -> f64 {
    let (marks, credits) = modules
        .iter()
        .filter(|module| module.year == year)
        .fold((0.0, 0.0), |(marks, credits), module| {
            let weight = f64::from(module.credits.value());
            (marks + module.percentage * weight, credits + weight)
        });
    if credits > 0.0 { marks / credits } else { 0.0 }
}

/// Year weights are four-decimal fractions, so any real average is exact well
/// above this scale and only accumulated float error is removed.
const NOISE_SCALE: f64 = 1e9;

fn snap_noise(value: f64) -> f64 {
    (value * NOISE_SCALE).round() / NOISE_SCALE
}
