//! Answer normalization feeding the matcher.

mod common;

use common::{answers, ids, setup};
use taxplan::application::matching::MatchOptions;
use taxplan::domain::values::employment_status::EmploymentStatus;
use taxplan::domain::values::retirement_range::RetirementRange;

#[test]
fn test_legacy_bracket_spelling_matches_identically() {
    let plan = setup();
    let legacy = plan
        .match_answers(
            &answers(r#"{"age": 60, "retirementRange": "500k-1M"}"#),
            &MatchOptions::default(),
        )
        .unwrap();
    let current = plan
        .match_answers(
            &answers(r#"{"age": 60, "retirement_range": "500k-1m"}"#),
            &MatchOptions::default(),
        )
        .unwrap();
    assert_eq!(ids(&legacy.matches), ids(&current.matches));
}

#[test]
fn test_net_worth_infers_pre_tax_accounts() {
    let plan = setup();
    let profile = plan.normalize(&answers(r#"{"retirementRange": "250k-500k"}"#));
    assert_eq!(profile.flags.pre_tax_retirement, Some(true));

    let report = plan
        .match_profile(&profile, &MatchOptions::default())
        .unwrap();
    assert!(ids(&report.matches).contains(&"roth-conversion"));
}

#[test]
fn test_explicit_no_pre_tax_hides_roth_conversion() {
    let plan = setup();
    let report = plan
        .match_answers(
            &answers(r#"{"retirementRange": "5m+", "hasPreTaxRetirement": false}"#),
            &MatchOptions::default(),
        )
        .unwrap();
    assert!(!ids(&report.matches).contains(&"roth-conversion"));
}

#[test]
fn test_garbage_answers_degrade_to_defaults() {
    let plan = setup();
    let profile = plan.normalize(&answers(
        r#"{"age": "unknown", "employmentStatus": "pirate", "retirementRange": "???"}"#,
    ));
    assert_eq!(profile.age, None);
    assert_eq!(profile.employment, EmploymentStatus::Employed);
    assert_eq!(profile.retirement_range, RetirementRange::Under250k);

    // Still produces a usable result set: the general entries.
    let report = plan
        .match_profile(&profile, &MatchOptions::default())
        .unwrap();
    assert!(ids(&report.matches).contains(&"529-roth-rollover"));
}

#[test]
fn test_unemployment_implies_transition_year() {
    let plan = setup();
    let profile = plan.normalize(&answers(r#"{"employmentStatus": "unemployed"}"#));
    assert!(profile.transition.is_transition_year);
    assert!(profile.transition.is_lower_income_year);
}
