//! Category keywords and the agreement types they imply

use shared_types::AgreementType;

/// A lowercase keyword and every agreement type it implies when found in a
/// business category
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keyword: &'static str,
    pub agreements: &'static [AgreementType],
}

impl KeywordRule {
    /// Case-insensitive substring test against an already lowercased category
    pub fn matches(&self, category_lower: &str) -> bool {
        category_lower.contains(self.keyword)
    }
}

/// Keyword rules evaluated during classification. Rules are independent:
/// every matching rule contributes its agreement types.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        keyword: "online",
        agreements: &[AgreementType::Internet],
    },
    KeywordRule {
        keyword: "renovation",
        agreements: &[AgreementType::Direct, AgreementType::FuturePerformance],
    },
    KeywordRule {
        keyword: "remote",
        agreements: &[AgreementType::Remote],
    },
];
