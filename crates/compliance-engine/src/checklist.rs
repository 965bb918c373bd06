//! Checklist assembly from agreement types

use serde::Serialize;
use shared_types::{AgreementType, ChecklistItem};

use crate::templates::questions_for;

/// Ordered checklist of questions for an inspection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.items.iter()
    }

    /// Items paired with their 1-based position
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &ChecklistItem)> {
        self.items.iter().enumerate().map(|(i, item)| (i + 1, item))
    }

    /// Item at a 1-based position
    pub fn get(&self, position: usize) -> Option<&ChecklistItem> {
        position
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Build a checklist by concatenating the template of each agreement type
/// in the order given.
///
/// Repeated question text is not deduplicated.
pub fn build(types: impl IntoIterator<Item = AgreementType>) -> Checklist {
    let items = types
        .into_iter()
        .flat_map(|agreement| {
            questions_for(agreement)
                .iter()
                .copied()
                .map(move |question| ChecklistItem {
                    question,
                    agreement,
                })
        })
        .collect();

    Checklist { items }
}
