use crate::domain::models::WizardConfig;
use anyhow::Context;
use std::path::{Path, PathBuf};

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/certwiz/config.toml"))
}

// An explicit path must exist; the default one is optional.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<WizardConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(WizardConfig::default()),
        },
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&raw).with_context(|| format!("parsing config {}", path.display()))
}

pub fn parse_config(raw: &str) -> anyhow::Result<WizardConfig> {
    Ok(toml::from_str(raw)?)
}
