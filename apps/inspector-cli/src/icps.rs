//! ICPS compliance log, kept as a CSV file

use anyhow::Context;
use shared_types::{BusinessInfo, ChecklistResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub const HEADER: [&str; 3] = ["Business Name", "Checklist Item", "Compliance Status"];

/// Write the header and one row per checklist entry
pub fn write_log<W: Write>(
    writer: W,
    business: &BusinessInfo,
    result: &ChecklistResult,
) -> csv::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;
    for entry in result.iter() {
        csv.write_record([
            business.name.as_str(),
            entry.item.question,
            entry.status.label(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Save the log to `path`, replacing any existing file. The write is not
/// atomic.
pub fn save_to_icps(
    path: &Path,
    business: &BusinessInfo,
    result: &ChecklistResult,
) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create ICPS log: {}", path.display()))?;
    write_log(file, business, result)
        .with_context(|| format!("Failed to write ICPS log: {}", path.display()))?;

    info!(path = %path.display(), rows = result.len(), "saved inspection results to ICPS");
    Ok(())
}
