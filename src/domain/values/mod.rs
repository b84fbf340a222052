pub mod charitable_giving;
pub mod employment_status;
pub mod impact;
pub mod marital_status;
pub mod profile_flag;
pub mod real_estate_range;
pub mod retirement_range;
pub mod scoring_weights;
pub mod strategy_category;
pub mod transition;
pub mod trigger;

/// Collapse the spelling variants the questionnaire has used over time
/// (`"500k-1M"`, `"$500K - $1M"`, `"500k_1m"`) into one lookup key.
pub(crate) fn canonical_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '$' && *c != ',')
        .map(|c| if c == '_' || c == '–' { '-' } else { c })
        .collect()
}
