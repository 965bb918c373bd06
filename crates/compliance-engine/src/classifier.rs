//! Agreement type classification from a business category

use std::collections::BTreeSet;

use shared_types::AgreementType;
use tracing::debug;

use crate::patterns::KEYWORD_RULES;

/// Classify the agreement types that apply to a business category.
///
/// Every keyword rule whose keyword occurs in the category (ignoring case)
/// contributes its agreement types. When nothing matches the result is
/// exactly `{General Consumer Agreement}`, so the set is never empty.
pub fn classify(category: &str) -> BTreeSet<AgreementType> {
    let category_lower = category.to_lowercase();

    let mut types: BTreeSet<AgreementType> = KEYWORD_RULES
        .iter()
        .filter(|rule| rule.matches(&category_lower))
        .flat_map(|rule| rule.agreements.iter().copied())
        .collect();

    if types.is_empty() {
        types.insert(AgreementType::GeneralConsumer);
    }

    debug!(category, ?types, "classified business category");
    types
}

/// Keywords found in the category, in rule order
pub fn matched_keywords(category: &str) -> Vec<&'static str> {
    let category_lower = category.to_lowercase();
    KEYWORD_RULES
        .iter()
        .filter(|rule| rule.matches(&category_lower))
        .map(|rule| rule.keyword)
        .collect()
}
