use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

static MODULE_SPEC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<name>.+?):(?P<percentage>-?\d+(?:\.\d+)?)(?::(?P<credits>-?\d+))?(?::(?P<year>-?\d+))?$",
    )
    .expect("valid module spec regex")
});

/// One module as typed by the user, before any clamping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleSpec {
    pub name: String,
    pub percentage: f64,
    #[serde(default)]
    pub credits: Option<i64>,
    #[serde(default)]
    pub year: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleSpecError {
    #[error("invalid module '{0}': expected NAME:PERCENT[:CREDITS[:YEAR]]")]
    Malformed(String),
    #[error("invalid {field} '{value}' in module '{spec}'")]
    InvalidNumber {
        spec: String,
        field: &'static str,
        value: String,
    },
}

/// Parses `NAME:PERCENT[:CREDITS[:YEAR]]`. The name may itself contain colons.
pub fn parse_module_spec(spec: &str) -> Result<ModuleSpec, ModuleSpecError> {
    let trimmed = spec.trim();
    let caps = MODULE_SPEC_RE
        .captures(trimmed)
        .ok_or_else(|| ModuleSpecError::Malformed(trimmed.to_string()))?;

    let name = caps["name"].trim();
    if name.is_empty() {
        return Err(ModuleSpecError::Malformed(trimmed.to_string()));
    }

    let number_error = |field: &'static str, value: &str| ModuleSpecError::InvalidNumber {
        spec: trimmed.to_string(),
        field,
        value: value.to_string(),
    };

    let percentage = caps["percentage"]
        .parse::<f64>()
        .map_err(|_| number_error("percentage", &caps["percentage"]))?;
    let credits = match caps.name("credits") {
        Some(m) => Some(
            m.as_str()
                .parse::<i64>()
                .map_err(|_| number_error("credits", m.as_str()))?,
        ),
        None => None,
    };
    let year = match caps.name("year") {
        Some(m) => Some(
            m.as_str()
                .parse::<i64>()
                .map_err(|_| number_error("year", m.as_str()))?,
        ),
        None => None,
    };

    Ok(ModuleSpec {
        name: name.to_string(),
        percentage,
        credits,
        year,
    })
}
