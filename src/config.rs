use crate::engines::modules::ALLOWED_CREDITS;
use crate::engines::{DifficultyChoice, TestMode};
use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "scorecalc.toml";

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub sat: SatConfig,
    pub uk: UkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    pub format: OutputFormat,
    pub color: bool,
    /// Cosmetic pause before printing a result. Never affects the numbers.
    pub processing_delay_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: true,
            processing_delay_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SatConfig {
    pub mode: TestMode,
    pub difficulty: DifficultyChoice,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UkConfig {
    /// Used when a module spec leaves out its credits.
    pub default_credits: i64,
    /// Used when a module spec leaves out its year.
    pub default_year: i64,
}

impl Default for UkConfig {
    fn default() -> Self {
        Self {
            default_credits: 20,
            default_year: 3,
        }
    }
}

impl UkConfig {
    /// Problems with the module defaults. They are still accepted and get
    /// snapped per module, so these are reported rather than rejected.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let credits_allowed = u8::try_from(self.default_credits)
            .is_ok_and(|credits| ALLOWED_CREDITS.contains(&credits));
        if !credits_allowed {
            warnings.push(format!(
                "uk.default_credits = {} is not one of {:?}; modules will snap to the nearest",
                self.default_credits, ALLOWED_CREDITS
            ));
        }
        if !(1..=3).contains(&self.default_year) {
            warnings.push(format!(
                "uk.default_year = {} is outside 1..=3; modules will be clamped",
                self.default_year
            ));
        }
        warnings
    }
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    if let Some(path) = cli_config_path {
        if !path.exists() {
            bail!(
                "config file not found at {} (passed with --config)",
                path.display()
            );
        }

        return Ok(LoadedConfig {
            config: read_config(path)?,
            source: Some(path.to_path_buf()),
        });
    }

    let local_path = cwd.join(CONFIG_FILE_NAME);
    if local_path.exists() {
        return Ok(LoadedConfig {
            config: read_config(&local_path)?,
            source: Some(local_path),
        });
    }

    log::debug!("no {CONFIG_FILE_NAME} found, using defaults");
    Ok(LoadedConfig {
        config: Config::default(),
        source: None,
    })
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing config file: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&Config::default()).context("failed to serialize default config")
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("failed parsing config file {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    for warning in config.uk.warnings() {
        log::warn!("{}: {warning}", path.display());
    }
    Ok(config)
}
