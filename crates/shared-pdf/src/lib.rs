//! PDF output for inspection reports
//!
//! This crate lays out and renders the inspection report using lopdf and the
//! PDF standard Helvetica fonts, so no font files are embedded.

pub mod error;
pub mod fonts;
pub mod layout;
pub mod report;

pub use error::ReportError;
pub use report::{render_report, write_report, InspectionReport};
