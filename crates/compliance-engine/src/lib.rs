//! Consumer-agreement classification and checklist assembly
//!
//! - [`classifier`]: business category -> applicable agreement types
//! - [`checklist`]: agreement types -> ordered checklist questions
//! - [`form`]: response collection with completeness validation

pub mod checklist;
pub mod classifier;
pub mod form;
pub mod patterns;
pub mod templates;

use std::collections::BTreeSet;

use serde::Serialize;
use shared_types::{AgreementType, BusinessInfo};
use tracing::info;

pub use checklist::{build, Checklist};
pub use classifier::classify;
pub use form::ChecklistForm;

/// A prepared inspection: the business, the agreement types that apply to
/// it, and the checklist the inspector has to answer
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub business: BusinessInfo,
    pub agreement_types: BTreeSet<AgreementType>,
    pub checklist: Checklist,
}

impl Inspection {
    /// Start collecting responses for this inspection's checklist
    pub fn form(&self) -> ChecklistForm<'_> {
        ChecklistForm::new(&self.checklist)
    }

    /// Agreement type labels joined for display
    pub fn agreement_summary(&self) -> String {
        self.agreement_types
            .iter()
            .map(AgreementType::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// InspectionEngine entry point
pub struct InspectionEngine;

impl InspectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Classify the business and build its checklist
    pub fn prepare(&self, business: &BusinessInfo) -> Inspection {
        let agreement_types = classify(&business.category);
        let checklist = build(agreement_types.iter().copied());

        info!(
            business = %business.name,
            agreements = ?agreement_types,
            items = checklist.len(),
            "prepared inspection checklist"
        );

        Inspection {
            business: business.clone(),
            agreement_types,
            checklist,
        }
    }
}

impl Default for InspectionEngine {
    fn default() -> Self {
        Self::new()
    }
}
