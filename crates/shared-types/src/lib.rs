pub mod error;
pub mod types;

pub use error::InspectionError;
pub use types::{
    AgreementType, BusinessInfo, BusinessRecord, ChecklistEntry, ChecklistItem, ChecklistResult,
    ComplianceStatus,
};
