//! Loading the business under inspection

use anyhow::Context;
use shared_types::{BusinessInfo, BusinessRecord};
use std::fs;
use std::path::Path;

use crate::config::Config;

/// Files ending in `.toml` are TOML; anything else is read as JSON
pub(crate) fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Read a business record from a `.toml` file, or JSON for any other
/// extension, and check that every field is present
pub fn load_business(path: &Path) -> anyhow::Result<BusinessInfo> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read business file: {}", path.display()))?;

    let record: BusinessRecord = if is_toml(path) {
        toml::from_str(&content)
            .with_context(|| format!("Invalid TOML in business file: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in business file: {}", path.display()))?
    };

    BusinessInfo::try_from(record)
        .with_context(|| format!("Incomplete business file: {}", path.display()))
}

/// Business from the command line, else from config, else the built-in sample
pub fn resolve_business(path: Option<&Path>, config: &Config) -> anyhow::Result<BusinessInfo> {
    if let Some(path) = path {
        return load_business(path);
    }

    match &config.business {
        Some(record) => BusinessInfo::try_from(record.clone())
            .context("Incomplete [business] section in configuration"),
        None => Ok(BusinessInfo::sample()),
    }
}
