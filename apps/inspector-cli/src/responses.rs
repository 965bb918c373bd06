//! Pre-recorded checklist responses
//!
//! A responses file lists one status per checklist item, in checklist order:
//!
//! ```json
//! ["Compliant", "Non-Compliant", "N/A"]
//! ```
//!
//! or as a table (`{"responses": [...]}` in JSON, `responses = [...]` in TOML).

use anyhow::Context;
use serde::Deserialize;
use shared_types::ComplianceStatus;
use std::fs;
use std::path::Path;

use crate::business::is_toml;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResponsesFile {
    List(Vec<String>),
    Table { responses: Vec<String> },
}

impl ResponsesFile {
    fn into_labels(self) -> Vec<String> {
        match self {
            ResponsesFile::List(labels) => labels,
            ResponsesFile::Table { responses } => responses,
        }
    }
}

/// Parse status labels, reporting the 1-based position of the first bad one
pub fn parse_statuses(labels: &[String]) -> anyhow::Result<Vec<ComplianceStatus>> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            label
                .parse::<ComplianceStatus>()
                .with_context(|| format!("Invalid response for item {}", i + 1))
        })
        .collect()
}

pub fn load_responses(path: &Path) -> anyhow::Result<Vec<ComplianceStatus>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read responses file: {}", path.display()))?;

    let file: ResponsesFile = if is_toml(path) {
        toml::from_str(&content)
            .with_context(|| format!("Invalid TOML in responses file: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in responses file: {}", path.display()))?
    };

    parse_statuses(&file.into_labels())
}
