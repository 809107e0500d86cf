use crate::utils::parse::ModuleSpec;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModuleFile {
    #[serde(default)]
    modules: Vec<ModuleSpec>,
}

/// Reads a TOML file of `[[modules]]` tables.
pub fn read_module_file(path: &Path) -> Result<Vec<ModuleSpec>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading module file {}", path.display()))?;
    parse_module_file(&content)
        .with_context(|| format!("failed parsing module file {}", path.display()))
}

fn parse_module_file(content: &str) -> Result<Vec<ModuleSpec>> {
    let file = toml::from_str::<ModuleFile>(content)?;
    Ok(file.modules)
}
