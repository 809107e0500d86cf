pub mod bands;
pub mod report;

use crate::config::{Config, OutputFormat, UkConfig};
use crate::core::report::{JsonRejection, JsonReport, Reportable};
use crate::engines::{
    DifficultyChoice, LsatProjection, LsatResult, MathRaw, ModuleSheet, SatResult, ScoreInput,
    TestMode, UkError, UkResult, clamp_lsat_raw, compute_lsat_score, compute_sat_score,
    project_lsat,
};
use crate::utils::fs as fs_utils;
use crate::utils::parse::{ModuleSpec, parse_module_spec};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Raw SAT fields as entered. Split math parts are used only when no combined
/// math score is given.
#[derive(Debug, Clone, Default)]
pub struct SatRequest {
    pub reading_writing: Option<i32>,
    pub math: Option<i32>,
    pub math_no_calc: Option<i32>,
    pub math_calc: Option<i32>,
    pub mode: Option<TestMode>,
    pub difficulty: Option<DifficultyChoice>,
}

#[derive(Debug, Clone, Default)]
pub struct UkRequest {
    pub specs: Vec<String>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum Request {
    Sat(SatRequest),
    Lsat { raw: i64, what_if: Option<i64> },
    Uk(UkRequest),
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Sat(Option<SatResult>),
    Lsat(LsatResult),
    LsatWhatIf(LsatProjection),
    Uk(Result<UkResult, UkError>),
}

impl Outcome {
    /// 1 only for an explicit rejection. A missing SAT score is a prompt, not a failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Uk(Err(_)) => 1,
            _ => 0,
        }
    }
}

pub fn run(request: &Request, cfg: &Config) -> Result<Outcome> {
    match request {
        Request::Sat(req) => Ok(Outcome::Sat(compute_sat_score(&build_score_input(req, cfg)))),
        Request::Lsat { raw, what_if } => {
            let raw = clamp_lsat_raw(*raw);
            Ok(match what_if {
                Some(hypothetical) => {
                    Outcome::LsatWhatIf(project_lsat(raw, clamp_lsat_raw(*hypothetical)))
                }
                None => Outcome::Lsat(compute_lsat_score(raw)),
            })
        }
        Request::Uk(req) => {
            let sheet = build_module_sheet(&collect_module_specs(req)?, &cfg.uk);
            Ok(Outcome::Uk(sheet.calculate()))
        }
    }
}

pub fn build_score_input(req: &SatRequest, cfg: &Config) -> ScoreInput {
    let math = match (req.math, req.math_no_calc, req.math_calc) {
        (Some(combined), _, _) => MathRaw::Combined(Some(combined)),
        (None, None, None) => MathRaw::Combined(None),
        (None, no_calc, calc) => MathRaw::Split { no_calc, calc },
    };
    ScoreInput {
        reading_writing_raw: req.reading_writing,
        math,
        test_mode: req.mode.unwrap_or(cfg.sat.mode),
        difficulty: req.difficulty.unwrap_or(cfg.sat.difficulty),
    }
}

pub fn build_module_sheet(specs: &[ModuleSpec], cfg: &UkConfig) -> ModuleSheet {
    let mut sheet = ModuleSheet::new();
    for spec in specs {
        sheet.add_module(
            spec.name.clone(),
            spec.credits.unwrap_or(cfg.default_credits),
            spec.percentage,
            spec.year.unwrap_or(cfg.default_year),
        );
    }
    sheet
}

fn collect_module_specs(req: &UkRequest) -> Result<Vec<ModuleSpec>> {
    let mut specs = match &req.file {
        Some(path) => fs_utils::read_module_file(path)?,
        None => Vec::new(),
    };
    for raw in &req.specs {
        specs.push(parse_module_spec(raw).context("failed parsing --module")?);
    }
    Ok(specs)
}

pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<()> {
    match outcome {
        Outcome::Sat(Some(result)) => render_result(result, format),
        Outcome::Sat(None) => render_sat_placeholder(format),
        Outcome::Lsat(result) => render_result(result, format),
        Outcome::LsatWhatIf(projection) => render_result(projection, format),
        Outcome::Uk(Ok(result)) => render_result(result, format),
        Outcome::Uk(Err(err)) => render_uk_rejection(err, format),
    }
}

fn render_result<T: Reportable + Serialize>(result: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => report::print_human(result),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&JsonReport::new(result))?
        ),
        OutputFormat::Csv => print!("{}", report::to_csv(result)),
    }
    Ok(())
}

fn render_sat_placeholder(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => report::print_sat_placeholder(),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "title": "SAT Score",
                "rows": [],
                "result": null,
            }))?
        ),
        OutputFormat::Csv => println!("\"Category\",\"Value\""),
    }
    Ok(())
}

fn render_uk_rejection(err: &UkError, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => report::print_uk_rejection(err),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&JsonRejection::new(
                "UK Degree Classification",
                err.to_string()
            ))?
        ),
        OutputFormat::Csv => println!("\"Category\",\"Value\"\n\"Error\",\"{err}\""),
    }
    Ok(())
}
