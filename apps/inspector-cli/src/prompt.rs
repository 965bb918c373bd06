//! Interactive checklist collection over a line-oriented terminal
//!
//! The full checklist is shown first, then every item is asked in turn, and
//! the inspector must confirm submission explicitly. Running out of input
//! leaves the form incomplete, which is reported as an error.

use anyhow::Context;
use compliance_engine::{ChecklistForm, Inspection};
use shared_types::{ChecklistResult, ComplianceStatus};
use std::io::{BufRead, Write};

const CHOICES: &str = "Compliant / Non-Compliant / N/A";

/// Print the inspection header and the full numbered checklist
pub fn present<W: Write>(inspection: &Inspection, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Inspection Checklist - {}", inspection.business.name)?;
    writeln!(out, "Identified Agreement Types:")?;
    writeln!(out, "{}", inspection.agreement_summary())?;
    writeln!(out)?;

    if inspection.checklist.is_empty() {
        writeln!(out, "No checklist items apply to these agreement types.")?;
    } else {
        writeln!(
            out,
            "Please review each checklist item and mark compliance status."
        )?;
        for (position, item) in inspection.checklist.numbered() {
            writeln!(out, "  {}. {}", position, item)?;
        }
    }
    writeln!(out)
}

/// Read one trimmed line, `None` at end of input
fn read_answer<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    Ok((read > 0).then(|| line.trim().to_string()))
}

/// Ask for every item, then for confirmation.
///
/// Returns `Ok(None)` when the inspector declines to submit.
pub fn collect<R: BufRead, W: Write>(
    inspection: &Inspection,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Option<ChecklistResult>> {
    present(inspection, out)?;

    let mut form = inspection.form();
    'items: for (position, item) in inspection.checklist.numbered() {
        loop {
            write!(out, "{}. {} [{}]: ", position, item, CHOICES)?;
            out.flush()?;

            let Some(answer) = read_answer(input)? else {
                writeln!(out)?;
                break 'items;
            };
            match answer.parse::<ComplianceStatus>() {
                Ok(status) => {
                    form.record(position, status)?;
                    break;
                }
                Err(err) => writeln!(out, "{}", err)?,
            }
        }
    }

    if !form.is_complete() {
        // Surfaces the unanswered positions
        return form.submit().map(Some).map_err(Into::into);
    }

    confirm_and_submit(form, input, out)
}

fn confirm_and_submit<R: BufRead, W: Write>(
    form: ChecklistForm<'_>,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Option<ChecklistResult>> {
    write!(out, "Submit Checklist? [y/N]: ")?;
    out.flush()?;

    let confirmed = read_answer(input)?
        .map(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
        .unwrap_or(false);

    if !confirmed {
        writeln!(out, "Checklist not submitted.")?;
        return Ok(None);
    }

    let result = form.submit()?;
    writeln!(out, "Checklist submitted successfully!")?;
    Ok(Some(result))
}
