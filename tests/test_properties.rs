//! Property tests for the matching engine.

use proptest::prelude::*;
use proptest::sample::{select, subsequence};

use taxplan::application::matching::match_strategies;
use taxplan::application::scoring::score_breakdown;
use taxplan::domain::entities::profile::{Profile, SituationFlags, TransitionStatus};
use taxplan::domain::entities::strategy::{AgeWindow, PriorityModifiers, StrategyRecord};
use taxplan::domain::ports::strategy_catalog::StrategyCatalog;
use taxplan::domain::values::employment_status::EmploymentStatus;
use taxplan::domain::values::impact::Impact;
use taxplan::domain::values::marital_status::MaritalStatus;
use taxplan::domain::values::profile_flag::ProfileFlag;
use taxplan::domain::values::real_estate_range::RealEstateRange;
use taxplan::domain::values::retirement_range::RetirementRange;
use taxplan::domain::values::scoring_weights::ScoringWeights;
use taxplan::domain::values::strategy_category::StrategyCategory;
use taxplan::domain::values::transition::TransitionTerm;
use taxplan::domain::values::trigger::Trigger;
use taxplan::infrastructure::catalog::json_catalog::JsonCatalog;

fn arb_flags() -> impl Strategy<Value = SituationFlags> {
    (
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(pre_tax, stock, rental, business, charity, hdhp)| SituationFlags {
            pre_tax_retirement: pre_tax,
            employer_stock: stock,
            rental_real_estate: rental,
            business_ownership: business,
            charitable_intent: charity,
            high_deductible_health_plan: hdhp,
        })
}

fn arb_term() -> impl Strategy<Value = TransitionTerm> {
    select(vec![TransitionTerm::ShortTerm, TransitionTerm::LongTerm])
}

fn arb_profile() -> impl Strategy<Value = Profile> {
    (
        proptest::option::of(18u32..100),
        select(MaritalStatus::ALL.to_vec()),
        select(EmploymentStatus::ALL.to_vec()),
        proptest::option::of(select(EmploymentStatus::ALL.to_vec())),
        select(RetirementRange::ALL.to_vec()),
        select(RealEstateRange::ALL.to_vec()),
        arb_flags(),
        (any::<bool>(), any::<bool>(), proptest::option::of(arb_term())),
    )
        .prop_map(
            |(age, marital, employment, spouse, retirement, real_estate, flags, transition)| Profile {
                age,
                marital_status: marital,
                employment,
                spouse_employment: spouse,
                retirement_range: retirement,
                real_estate_range: real_estate,
                flags,
                transition: TransitionStatus {
                    is_transition_year: transition.0,
                    is_lower_income_year: transition.1,
                    term: transition.2,
                },
                ..Default::default()
            },
        )
}

fn arb_trigger() -> impl Strategy<Value = Trigger> {
    prop_oneof![
        (0u32..110).prop_map(Trigger::AgeAtLeast),
        (0u32..110).prop_map(Trigger::AgeAtMost),
        subsequence(MaritalStatus::ALL.to_vec(), 0..=2).prop_map(Trigger::MaritalStatusIn),
        subsequence(EmploymentStatus::ALL.to_vec(), 0..=5).prop_map(Trigger::EmploymentStatusIn),
        select(ProfileFlag::ALL.to_vec()).prop_map(Trigger::RequiresFlag),
        arb_term().prop_map(Trigger::TransitionTermIs),
    ]
}

fn arb_catalog() -> impl Strategy<Value = Vec<StrategyRecord>> {
    proptest::collection::vec(
        (
            proptest::collection::vec(arb_trigger(), 0..4),
            any::<bool>(),
            select(vec![Impact::High, Impact::Medium, Impact::Low]),
            -20i64..20,
        ),
        0..8,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (triggers, suppress, impact, boost))| {
                let mut s = StrategyRecord::new(format!("s{i}"), "S", impact, StrategyCategory::Retirement)
                    .with_triggers(triggers)
                    .with_priority(PriorityModifiers {
                        net_worth_tiers: vec![RetirementRange::From1mTo2_5m, RetirementRange::Over5m],
                        boost,
                        ..Default::default()
                    });
                s.suppress_during_unemployment = suppress;
                s
            })
            .collect()
    })
}

/// Independent restatement of trigger semantics.
fn holds(trigger: &Trigger, p: &Profile) -> bool {
    match trigger {
        Trigger::AgeAtLeast(n) => matches!(p.age, Some(a) if a >= *n),
        Trigger::AgeAtMost(n) => matches!(p.age, Some(a) if a <= *n),
        Trigger::MaritalStatusIn(set) => set.iter().any(|s| *s == p.marital_status),
        Trigger::EmploymentStatusIn(set) => set.iter().any(|s| *s == p.employment),
        Trigger::RequiresFlag(f) => p.flag(*f) == Some(true),
        Trigger::TransitionTermIs(t) => {
            p.transition.is_transition_year && p.transition.term == Some(*t)
        }
    }
}

fn member_ids(catalog: &[StrategyRecord], profile: &Profile) -> Vec<String> {
    let mut ids: Vec<String> = match_strategies(catalog, profile, &ScoringWeights::default())
        .into_iter()
        .map(|m| m.strategy.id)
        .collect();
    ids.sort();
    ids
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_membership_equals_trigger_conjunction(
        catalog in arb_catalog(),
        profile in arb_profile(),
    ) {
        let matched = member_ids(&catalog, &profile);
        for s in &catalog {
            let suppressed = s.suppress_during_unemployment
                && profile.employment == EmploymentStatus::Unemployed;
            let expected = !suppressed && s.triggers.iter().all(|t| holds(t, &profile));
            prop_assert_eq!(matched.contains(&s.id), expected, "strategy {}", s.id);
        }
    }

    #[test]
    fn prop_net_worth_never_gates(
        profile in arb_profile(),
        a in select(RetirementRange::ALL.to_vec()),
        b in select(RetirementRange::ALL.to_vec()),
        re_a in select(RealEstateRange::ALL.to_vec()),
        re_b in select(RealEstateRange::ALL.to_vec()),
    ) {
        let catalog = JsonCatalog::builtin().unwrap();
        let left = Profile { retirement_range: a, real_estate_range: re_a, ..profile.clone() };
        let right = Profile { retirement_range: b, real_estate_range: re_b, ..profile };
        prop_assert_eq!(
            member_ids(catalog.strategies(), &left),
            member_ids(catalog.strategies(), &right)
        );
    }

    #[test]
    fn prop_matching_is_deterministic(
        catalog in arb_catalog(),
        profile in arb_profile(),
    ) {
        let weights = ScoringWeights::default();
        let first = match_strategies(&catalog, &profile, &weights);
        let second = match_strategies(&catalog, &profile, &weights);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_ranked_scores_descend_and_ties_keep_order(
        catalog in arb_catalog(),
        profile in arb_profile(),
    ) {
        let ranked = match_strategies(&catalog, &profile, &ScoringWeights::default());
        let catalog_index = |id: &str| catalog.iter().position(|s| s.id == id).unwrap();
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].raw_score >= pair[1].raw_score);
            if pair[0].raw_score == pair[1].raw_score {
                prop_assert!(catalog_index(pair[0].id()) < catalog_index(pair[1].id()));
            }
        }
    }

    #[test]
    fn prop_entering_age_window_adds_exact_bonus(
        profile in arb_profile(),
        min in 20u32..70,
        span in 0u32..15,
        outside_offset in 1u32..10,
    ) {
        let weights = ScoringWeights::default();
        let max = min + span;
        let s = StrategyRecord::new("w", "W", Impact::Medium, StrategyCategory::Retirement)
            .with_priority(PriorityModifiers {
                age_window: Some(AgeWindow { min, max }),
                ..Default::default()
            });
        let outside = Profile { age: Some(min - outside_offset.min(min)), ..profile.clone() };
        let inside = Profile { age: Some(min + span / 2), ..profile };

        let before = score_breakdown(&s, &outside, &weights).total();
        let after = score_breakdown(&s, &inside, &weights).total();
        prop_assert_eq!(after - before, weights.age_window);
    }

    #[test]
    fn prop_triggerless_entry_admits_everyone(profile in arb_profile()) {
        let catalog = vec![
            StrategyRecord::new("gated", "G", Impact::High, StrategyCategory::Retirement)
                .with_triggers(vec![Trigger::RequiresFlag(ProfileFlag::EmployerStock)]),
            StrategyRecord::new("general", "General", Impact::Low, StrategyCategory::Education),
        ];
        prop_assert!(member_ids(&catalog, &profile).contains(&"general".to_string()));
    }
}
