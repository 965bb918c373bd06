//! Checklist question templates per agreement type

use shared_types::AgreementType;

pub const DIRECT_AGREEMENT: &[&str] = &[
    "Is the agreement in writing?",
    "Are all payment terms clear and included?",
    "Does the agreement include the consumer's right to cancel?",
];

pub const REMOTE_AGREEMENT: &[&str] = &[
    "Is the remote agreement properly disclosed to the consumer?",
    "Does the consumer have an express opportunity to accept or decline?",
    "Are additional charges clearly stated?",
];

pub const INTERNET_AGREEMENT: &[&str] = &[
    "Are all terms and conditions displayed prominently?",
    "Is the consumer provided with a copy of the agreement within 15 days?",
    "Are payment methods secure and disclosed?",
];

pub const FUTURE_PERFORMANCE_AGREEMENT: &[&str] = &[
    "Is a clear timeline for service completion provided?",
    "Are cancellation terms clearly stated?",
    "Is a refund policy included for non-performance?",
];

/// Questions for an agreement type. General consumer agreements have no
/// template and contribute nothing.
pub fn questions_for(agreement: AgreementType) -> &'static [&'static str] {
    match agreement {
        AgreementType::Direct => DIRECT_AGREEMENT,
        AgreementType::Remote => REMOTE_AGREEMENT,
        AgreementType::Internet => INTERNET_AGREEMENT,
        AgreementType::FuturePerformance => FUTURE_PERFORMANCE_AGREEMENT,
        AgreementType::GeneralConsumer => &[],
    }
}
