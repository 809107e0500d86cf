use clap::{Args, Parser, Subcommand};
use scorecalc::config::OutputFormat;
use scorecalc::engines::{DifficultyChoice, TestMode};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "scorecalc",
    version,
    about = "Score conversions for SAT, LSAT and UK degree classifications"
)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert SAT raw section scores to scaled scores
    Sat(SatArgs),
    /// Convert an LSAT raw score, optionally against a what-if score
    Lsat(LsatArgs),
    /// Average UK module marks into a degree classification
    Uk(UkArgs),
    /// Write a default scorecalc.toml in the current directory
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
}

impl OutputArgs {
    pub fn resolve_format(&self, configured: OutputFormat) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format.unwrap_or(configured)
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct SatArgs {
    /// Reading & Writing raw score (0-54)
    #[arg(long = "rw", allow_negative_numbers = true)]
    pub reading_writing: Option<i32>,
    /// Math raw score (0-44 digital, 0-58 paper)
    #[arg(long, allow_negative_numbers = true, conflicts_with_all = ["no_calc", "calc"])]
    pub math: Option<i32>,
    /// Math no-calculator raw score (0-20)
    #[arg(long, allow_negative_numbers = true)]
    pub no_calc: Option<i32>,
    /// Math calculator raw score (0-38)
    #[arg(long, allow_negative_numbers = true)]
    pub calc: Option<i32>,
    #[arg(long, value_enum)]
    pub mode: Option<TestMode>,
    #[arg(long, value_enum)]
    pub difficulty: Option<DifficultyChoice>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct LsatArgs {
    /// Raw score (questions answered correctly)
    #[arg(long, allow_negative_numbers = true)]
    pub raw: i64,
    /// Hypothetical raw score to compare against
    #[arg(long, allow_negative_numbers = true)]
    pub what_if: Option<i64>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct UkArgs {
    #[arg(long = "module", value_name = "NAME:PERCENT[:CREDITS[:YEAR]]")]
    pub modules: Vec<String>,
    /// TOML file of [[modules]] tables
    #[arg(long)]
    pub file: Option<PathBuf>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
