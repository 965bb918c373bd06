use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InspectionError;

/// Business under inspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessInfo {
    pub name: String,
    pub category: String,
    pub description: String,
}

impl BusinessInfo {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    /// Built-in sample business used when no business file is supplied
    pub fn sample() -> Self {
        Self::new(
            "Castlebury Contracting",
            "Renovation Services",
            "Providing renovation and remodeling services.",
        )
    }
}

/// Business information as read from a file, before field presence is checked
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessRecord {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl TryFrom<BusinessRecord> for BusinessInfo {
    type Error = InspectionError;

    fn try_from(record: BusinessRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            name: record.name.ok_or(InspectionError::MissingField("name"))?,
            category: record
                .category
                .ok_or(InspectionError::MissingField("category"))?,
            description: record
                .description
                .ok_or(InspectionError::MissingField("description"))?,
        })
    }
}

/// Consumer agreement categories that determine which checklist applies.
///
/// Variant order is the canonical order used for classification results
/// and checklist assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgreementType {
    #[serde(rename = "Internet Agreement")]
    Internet,
    #[serde(rename = "Direct Agreement")]
    Direct,
    #[serde(rename = "Future Performance Agreement")]
    FuturePerformance,
    #[serde(rename = "Remote Agreement")]
    Remote,
    #[serde(rename = "General Consumer Agreement")]
    GeneralConsumer,
}

impl AgreementType {
    pub const ALL: [AgreementType; 5] = [
        AgreementType::Internet,
        AgreementType::Direct,
        AgreementType::FuturePerformance,
        AgreementType::Remote,
        AgreementType::GeneralConsumer,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            AgreementType::Internet => "Internet Agreement",
            AgreementType::Direct => "Direct Agreement",
            AgreementType::FuturePerformance => "Future Performance Agreement",
            AgreementType::Remote => "Remote Agreement",
            AgreementType::GeneralConsumer => "General Consumer Agreement",
        }
    }
}

impl fmt::Display for AgreementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgreementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AgreementType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown agreement type: {}", s))
    }
}

/// Inspector's verdict for one checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Compliant,
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl ComplianceStatus {
    pub const ALL: [ComplianceStatus; 3] = [
        ComplianceStatus::Compliant,
        ComplianceStatus::NonCompliant,
        ComplianceStatus::NotApplicable,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::NonCompliant => "Non-Compliant",
            ComplianceStatus::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ComplianceStatus {
    type Err = InspectionError;

    /// Accepts the full labels as well as the short forms `c`, `nc` and `na`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '/' | ' '))
            .collect();

        match normalized.as_str() {
            "c" | "compliant" => Ok(ComplianceStatus::Compliant),
            "nc" | "noncompliant" => Ok(ComplianceStatus::NonCompliant),
            "na" | "notapplicable" => Ok(ComplianceStatus::NotApplicable),
            _ => Err(InspectionError::InvalidStatus(s.to_string())),
        }
    }
}

/// A single checklist question and the agreement type that contributed it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub question: &'static str,
    pub agreement: AgreementType,
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.question)
    }
}

/// One answered checklist position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistEntry {
    /// 1-based position in the checklist
    pub position: usize,
    pub item: ChecklistItem,
    pub status: ComplianceStatus,
}

/// Submitted checklist, in checklist order.
///
/// Entries are keyed by position so that repeated question text from
/// different templates never collapses into one answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChecklistResult {
    entries: Vec<ChecklistEntry>,
}

impl ChecklistResult {
    pub fn new(entries: Vec<ChecklistEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ChecklistEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChecklistEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries with the given status
    pub fn count(&self, status: ComplianceStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_agreement_labels_round_trip_through_json() {
        let json = serde_json::to_string(&AgreementType::FuturePerformance).unwrap();
        assert_eq!(json, "\"Future Performance Agreement\"");

        let parsed: AgreementType = serde_json::from_str("\"Remote Agreement\"").unwrap();
        assert_eq!(parsed, AgreementType::Remote);
    }

    #[test]
    fn test_agreement_order_is_declaration_order() {
        let mut types = vec![
            AgreementType::GeneralConsumer,
            AgreementType::Remote,
            AgreementType::Direct,
            AgreementType::Internet,
            AgreementType::FuturePerformance,
        ];
        types.sort();
        assert_eq!(types, AgreementType::ALL.to_vec());
    }

    #[test]
    fn test_agreement_from_label_ignores_case() {
        assert_eq!(
            "direct agreement".parse::<AgreementType>(),
            Ok(AgreementType::Direct)
        );
        assert!("Lease".parse::<AgreementType>().is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ComplianceStatus::Compliant.to_string(), "Compliant");
        assert_eq!(ComplianceStatus::NonCompliant.to_string(), "Non-Compliant");
        assert_eq!(ComplianceStatus::NotApplicable.to_string(), "N/A");
    }

    #[test]
    fn test_status_parses_labels_and_short_forms() {
        for (input, expected) in [
            ("Compliant", ComplianceStatus::Compliant),
            ("c", ComplianceStatus::Compliant),
            ("Non-Compliant", ComplianceStatus::NonCompliant),
            ("NC", ComplianceStatus::NonCompliant),
            ("non compliant", ComplianceStatus::NonCompliant),
            ("N/A", ComplianceStatus::NotApplicable),
            ("na", ComplianceStatus::NotApplicable),
        ] {
            assert_eq!(input.parse::<ComplianceStatus>(), Ok(expected), "{input}");
        }
    }

    #[test]
    fn test_status_rejects_unknown_input() {
        assert_eq!(
            "maybe".parse::<ComplianceStatus>(),
            Err(InspectionError::InvalidStatus("maybe".to_string()))
        );
    }

    #[test]
    fn test_status_deserializes_from_label() {
        let statuses: Vec<ComplianceStatus> =
            serde_json::from_str(r#"["Compliant", "Non-Compliant", "N/A"]"#).unwrap();
        assert_eq!(statuses, ComplianceStatus::ALL.to_vec());
    }

    #[test]
    fn test_business_record_requires_every_field() {
        let record: BusinessRecord =
            serde_json::from_str(r#"{"category": "Online Retail", "description": "Shop"}"#)
                .unwrap();
        assert_eq!(
            BusinessInfo::try_from(record),
            Err(InspectionError::MissingField("name"))
        );
    }

    #[test]
    fn test_business_record_allows_empty_category() {
        let record: BusinessRecord =
            serde_json::from_str(r#"{"name": "Acme", "category": "", "description": ""}"#)
                .unwrap();
        let info = BusinessInfo::try_from(record).unwrap();
        assert_eq!(info, BusinessInfo::new("Acme", "", ""));
    }

    #[test]
    fn test_result_counts_statuses() {
        let item = ChecklistItem {
            question: "Is the agreement in writing?",
            agreement: AgreementType::Direct,
        };
        let result = ChecklistResult::new(vec![
            ChecklistEntry {
                position: 1,
                item,
                status: ComplianceStatus::Compliant,
            },
            ChecklistEntry {
                position: 2,
                item,
                status: ComplianceStatus::Compliant,
            },
            ChecklistEntry {
                position: 3,
                item,
                status: ComplianceStatus::NotApplicable,
            },
        ]);
        assert_eq!(result.len(), 3);
        assert_eq!(result.count(ComplianceStatus::Compliant), 2);
        assert_eq!(result.count(ComplianceStatus::NonCompliant), 0);
    }
}
