use crate::catalog::basics::{basic_names, BasicCache};
use crate::catalog::card::{Card, Color};
use crate::catalog::source::NamedLookup;
use crate::policy::budget::usable_cost;
use crate::policy::classifier::Role;
use crate::selection::state::{FillOutcome, SelectionState};

/// Fixing score of a land for the leader's identity: one point per shared
/// color, +2 when every leader color is covered, +2 for tri-color fixer
/// cards, +1 when at least two colors are shared.
pub fn land_color_score(card: &Card, identity: &[Color]) -> u32 {
    if !card.is_land() {
        return 0;
    }
    let shared = card
        .color_identity
        .iter()
        .filter(|c| identity.contains(c))
        .count();
    let covers_all = if !identity.is_empty() && shared == identity.len() { 2 } else { 0 };
    let tri_fixer = if card.has_type("triome") { 2 } else { 0 };
    let dual = if shared >= 2 { 1 } else { 0 };
    shared as u32 + covers_all + tri_fixer + dual
}

/// Planned basic count: `basics_per_color × color_count`, with the
/// per-color share clamped to [4, 8].
pub fn planned_basics(land_target: usize, identity_len: usize) -> usize {
    let per_color = (land_target / identity_len.max(1)).clamp(4, 8);
    per_color * identity_len
}

/// Phase one of land allocation: non-basic lands, highest fixing score
/// first (stable sort, ties keep catalog order), selected until the
/// non-basic quota (`land_target - planned`) is met, respecting budget.
pub fn allocate_nonbasics(
    pool: &[Card],
    mut state: SelectionState,
    identity: &[Color],
    land_target: usize,
    planned: usize,
) -> FillOutcome {
    let mut nonbasics: Vec<&Card> = pool
        .iter()
        .filter(|c| c.is_land() && !c.is_basic_land())
        .collect();
    nonbasics.sort_by(|a, b| land_color_score(b, identity).cmp(&land_color_score(a, identity)));

    let quota = land_target.saturating_sub(planned);
    let mut picked = Vec::new();

    for land in nonbasics {
        if state.is_full() || state.categories.lands >= quota {
            break;
        }
        if state.is_used(land) {
            continue;
        }
        let Some(cost) = usable_cost(land) else {
            continue;
        };
        if !state.within_budget(cost) {
            continue;
        }
        state.admit(land, cost, Role::Land, false);
        picked.push(land.clone());
    }

    FillOutcome { state, picked }
}

/// Phase two: basic resource instances up to the remaining basic need,
/// cycling the identity's canonical names. Each instance gets a
/// distinguishing copy suffix on its id; basics bypass the used-name set
/// and are tracked by count alone. A failed lookup omits the instance.
pub fn allocate_basics(
    lookup: &dyn NamedLookup,
    cache: &mut BasicCache,
    mut state: SelectionState,
    identity: &[Color],
    land_target: usize,
    planned: usize,
) -> FillOutcome {
    let names = basic_names(identity);
    if names.is_empty() {
        return FillOutcome { state, picked: Vec::new() };
    }

    let needed = planned
        .min(land_target.saturating_sub(state.categories.lands))
        .min(state.remaining_slots());

    let mut picked = Vec::new();
    for i in 0..needed {
        let name = names[i % names.len()];
        let Some(basic) = cache.resolve(lookup, name) else {
            continue;
        };
        let mut instance = basic.clone();
        instance.id = basic.id.copy(i);
        let cost = usable_cost(&instance).unwrap_or(0.0);
        state.admit_repeatable(&instance, cost, Role::Land);
        picked.push(instance);
    }

    FillOutcome { state, picked }
}
