//! Inspector CLI
//!
//! Classifies a business into consumer-agreement types, collects checklist
//! responses, and emits the PDF inspection report and the ICPS CSV log.

pub mod business;
pub mod cli;
pub mod commands;
pub mod config;
pub mod icps;
pub mod prompt;
pub mod responses;
