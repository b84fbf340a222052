//! Eligibility filter.
//!
//! A strategy is eligible when it is not suppressed and every one of its
//! triggers holds. Score weights play no part here: net worth and
//! situational flags can move a strategy up or down the list, never on or
//! off it, unless a trigger names them explicitly.

use tracing::debug;

use crate::domain::entities::profile::Profile;
use crate::domain::entities::strategy::StrategyRecord;
use crate::domain::values::trigger::Trigger;

/// Entries flagged `suppress_during_unemployment` are hidden from anyone
/// whose primary employment is `unemployed`, whatever their triggers say.
pub fn is_suppressed(strategy: &StrategyRecord, profile: &Profile) -> bool {
    strategy.suppress_during_unemployment && profile.is_unemployed()
}

/// Evaluate one trigger. Unanswered fields fail closed.
pub fn evaluate_trigger(trigger: &Trigger, profile: &Profile) -> bool {
    match trigger {
        Trigger::AgeAtLeast(min) => profile.age.is_some_and(|age| age >= *min),
        Trigger::AgeAtMost(max) => profile.age.is_some_and(|age| age <= *max),
        Trigger::MaritalStatusIn(allowed) => allowed.contains(&profile.marital_status),
        Trigger::EmploymentStatusIn(allowed) => allowed.contains(&profile.employment),
        Trigger::RequiresFlag(flag) => profile.flag(*flag).unwrap_or(false),
        Trigger::TransitionTermIs(term) => {
            profile.transition.is_transition_year && profile.transition.term == Some(*term)
        }
    }
}

pub fn is_eligible(strategy: &StrategyRecord, profile: &Profile) -> bool {
    if is_suppressed(strategy, profile) {
        debug!(strategy = %strategy.id, "suppressed during unemployment");
        return false;
    }
    match strategy
        .triggers
        .iter()
        .find(|t| !evaluate_trigger(t, profile))
    {
        Some(failed) => {
            debug!(strategy = %strategy.id, trigger = %failed, "trigger not satisfied");
            false
        }
        None => true,
    }
}

/// Eligible entries in catalog order.
pub fn filter_eligible<'a>(catalog: &'a [StrategyRecord], profile: &Profile) -> Vec<&'a StrategyRecord> {
    catalog.iter().filter(|s| is_eligible(s, profile)).collect()
}
