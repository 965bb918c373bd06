//! Subcommand implementations
//!
//! Each command writes its user-facing output to the supplied writer so the
//! binary can pass stdout and tests can pass a buffer.

use anyhow::Context;
use compliance_engine::{build, classifier, ChecklistForm, InspectionEngine};
use serde_json::json;
use shared_pdf::InspectionReport;
use shared_types::ComplianceStatus;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

use crate::business::resolve_business;
use crate::cli::InspectArgs;
use crate::config::Config;
use crate::{icps, prompt, responses};

pub fn classify<W: Write>(category: &str, as_json: bool, out: &mut W) -> anyhow::Result<()> {
    let types = classifier::classify(category);

    if as_json {
        let body = json!({
            "category": category,
            "matched_keywords": classifier::matched_keywords(category),
            "agreement_types": types,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    } else {
        for agreement in &types {
            writeln!(out, "{}", agreement)?;
        }
    }
    Ok(())
}

pub fn checklist<W: Write>(category: &str, as_json: bool, out: &mut W) -> anyhow::Result<()> {
    let types = classifier::classify(category);
    let checklist = build(types.iter().copied());

    if as_json {
        let body = json!({
            "category": category,
            "agreement_types": types,
            "checklist": checklist,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    } else if checklist.is_empty() {
        writeln!(out, "No checklist items apply.")?;
    } else {
        for (position, item) in checklist.numbered() {
            writeln!(out, "{}. {}", position, item)?;
        }
    }
    Ok(())
}

/// How an inspection run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectOutcome {
    Submitted {
        report: PathBuf,
        log: PathBuf,
        items: usize,
    },
    /// The inspector declined to submit; nothing was written
    NotSubmitted,
}

pub fn inspect<R: BufRead, W: Write>(
    args: &InspectArgs,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<InspectOutcome> {
    let business = resolve_business(args.business.as_deref(), config)?;
    let inspection = InspectionEngine::new().prepare(&business);

    let result = match &args.responses {
        Some(path) => {
            let statuses = responses::load_responses(path)?;
            prompt::present(&inspection, out)?;
            let result = ChecklistForm::from_responses(&inspection.checklist, &statuses)
                .and_then(ChecklistForm::submit)
                .with_context(|| format!("Responses in {} do not fit the checklist", path.display()))?;
            writeln!(out, "Checklist submitted successfully!")?;
            Some(result)
        }
        None => prompt::collect(&inspection, input, out)?,
    };

    let Some(result) = result else {
        return Ok(InspectOutcome::NotSubmitted);
    };

    let report_path = args
        .report
        .clone()
        .unwrap_or_else(|| config.output.report_path.clone());
    let log_path = args
        .log
        .clone()
        .unwrap_or_else(|| config.output.log_path.clone());

    writeln!(out, "Generating Inspection Report...")?;
    InspectionReport::new(&business, &result)
        .write_to(&report_path)
        .with_context(|| format!("Failed to generate report: {}", report_path.display()))?;
    icps::save_to_icps(&log_path, &business, &result)?;

    writeln!(
        out,
        "Results: {} Compliant, {} Non-Compliant, {} N/A",
        result.count(ComplianceStatus::Compliant),
        result.count(ComplianceStatus::NonCompliant),
        result.count(ComplianceStatus::NotApplicable),
    )?;
    writeln!(out, "Inspection report generated and results saved to ICPS!")?;
    writeln!(out, "Report: {}", report_path.display())?;
    writeln!(out, "ICPS log: {}", log_path.display())?;

    info!(business = %business.name, items = result.len(), "inspection complete");

    Ok(InspectOutcome::Submitted {
        report: report_path,
        log: log_path,
        items: result.len(),
    })
}
