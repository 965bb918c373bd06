//! Checklist form: present the whole checklist, collect a response for every
//! item, and only then allow submission.

use shared_types::{ChecklistEntry, ChecklistResult, ComplianceStatus, InspectionError};

use crate::checklist::Checklist;

/// Responses being collected for one checklist
#[derive(Debug, Clone)]
pub struct ChecklistForm<'a> {
    checklist: &'a Checklist,
    responses: Vec<Option<ComplianceStatus>>,
}

impl<'a> ChecklistForm<'a> {
    pub fn new(checklist: &'a Checklist) -> Self {
        Self {
            checklist,
            responses: vec![None; checklist.len()],
        }
    }

    /// Fill a form from a complete response list in checklist order
    pub fn from_responses(
        checklist: &'a Checklist,
        responses: &[ComplianceStatus],
    ) -> Result<Self, InspectionError> {
        if responses.len() != checklist.len() {
            return Err(InspectionError::ResponseCountMismatch {
                expected: checklist.len(),
                found: responses.len(),
            });
        }

        Ok(Self {
            checklist,
            responses: responses.iter().copied().map(Some).collect(),
        })
    }

    pub fn checklist(&self) -> &Checklist {
        self.checklist
    }

    /// Record the status for a 1-based position, replacing any earlier answer
    pub fn record(
        &mut self,
        position: usize,
        status: ComplianceStatus,
    ) -> Result<(), InspectionError> {
        let len = self.responses.len();
        let slot = position
            .checked_sub(1)
            .and_then(|index| self.responses.get_mut(index))
            .ok_or(InspectionError::UnknownItem { position, len })?;
        *slot = Some(status);
        Ok(())
    }

    /// Status recorded for a 1-based position
    pub fn response(&self, position: usize) -> Option<ComplianceStatus> {
        position
            .checked_sub(1)
            .and_then(|index| self.responses.get(index).copied().flatten())
    }

    /// 1-based positions still without a response
    pub fn missing(&self) -> Vec<usize> {
        self.responses
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_none())
            .map(|(i, _)| i + 1)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.responses.iter().all(Option::is_some)
    }

    /// Validate completeness and produce the result keyed by checklist position
    pub fn submit(self) -> Result<ChecklistResult, InspectionError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(InspectionError::IncompleteSubmission { missing });
        }

        let entries = self
            .checklist
            .numbered()
            .zip(self.responses)
            .filter_map(|((position, item), status)| {
                status.map(|status| ChecklistEntry {
                    position,
                    item: *item,
                    status,
                })
            })
            .collect();

        Ok(ChecklistResult::new(entries))
    }
}
