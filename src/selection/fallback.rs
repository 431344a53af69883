use crate::catalog::card::{Card, Color};
use crate::policy::budget::usable_cost;
use crate::policy::classifier::{Classifier, Role};
use crate::policy::targets::RoleTargets;
use crate::selection::state::{fill, FillOutcome, SelectionState};
use crate::types::outcome::RoleSuggestion;

/// Swap suggestions per deficient role are capped at this many candidates.
pub const SUGGESTION_LIMIT: usize = 5;

/// The relaxed phase, engaged only when the primary fill under-produces:
/// admit any unused, non-forbidden, color-identity-legal candidate with NO
/// budget filtering. Meeting the count outranks honoring the budget here,
/// a deliberate product policy, not an oversight. The high-impact cap still
/// applies.
pub fn relaxed_fill<C>(
    pool: &[Card],
    mut state: SelectionState,
    classifier: &C,
    identity: &[Color],
) -> FillOutcome
where
    C: Classifier + ?Sized,
{
    let mut picked = Vec::new();

    for card in pool {
        if state.is_full() {
            break;
        }
        if state.is_used(card) {
            continue;
        }
        if classifier.is_forbidden(card, state.tier()) {
            continue;
        }
        if !card.fits_identity(identity) {
            continue;
        }
        let high_impact = classifier.is_high_impact(card);
        if high_impact && state.high_impact_capped() {
            continue;
        }
        let Some(cost) = usable_cost(card) else {
            continue;
        };

        let role = classifier.classify_role(card);
        state.admit(card, cost, role, high_impact);
        picked.push(card.clone());
    }

    FillOutcome { state, picked }
}

/// For each support role still under target, run a role-scoped fill with
/// the role as both predicate and hint.
pub fn reconcile_roles<C>(
    pool: &[Card],
    mut state: SelectionState,
    classifier: &C,
    targets: &RoleTargets,
) -> FillOutcome
where
    C: Classifier + ?Sized,
{
    let mut picked = Vec::new();

    for role in Role::SUPPORT {
        let deficit = targets.target(role).saturating_sub(state.roles.get(role));
        if deficit == 0 {
            continue;
        }
        let outcome = fill(pool, state, classifier, deficit, Some(role), |card, _| {
            classifier.classify_role(card) == role && !card.is_land()
        });
        state = outcome.state;
        picked.extend(outcome.picked);
    }

    FillOutcome { state, picked }
}

/// For each role still deficient after reconciliation, collect up to
/// `SUGGESTION_LIMIT` unused, color-legal candidates of that role as manual
/// swap material. Never mutates the selection.
pub fn swap_suggestions<C>(
    pool: &[Card],
    state: &SelectionState,
    classifier: &C,
    identity: &[Color],
    targets: &RoleTargets,
) -> Vec<RoleSuggestion>
where
    C: Classifier + ?Sized,
{
    let mut suggestions = Vec::new();

    for role in Role::SUPPORT {
        let deficit = targets.target(role).saturating_sub(state.roles.get(role));
        if deficit == 0 {
            continue;
        }
        let candidates: Vec<Card> = pool
            .iter()
            .filter(|c| {
                !state.is_used(c)
                    && classifier.classify_role(c) == role
                    && c.fits_identity(identity)
            })
            .take(SUGGESTION_LIMIT)
            .cloned()
            .collect();
        if !candidates.is_empty() {
            suggestions.push(RoleSuggestion {
                role,
                needed: deficit,
                candidates,
            });
        }
    }

    suggestions
}
