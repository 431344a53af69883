use std::collections::BTreeSet;

use crate::catalog::card::{Card, Category};
use crate::policy::budget::{usable_cost, within_limits, BudgetTier};
use crate::policy::classifier::{Classifier, Role};
use crate::policy::targets::PowerTier;

/// Every completed build aims for exactly this many cards beside the leader.
pub const DECK_SIZE: usize = 99;

/// Running counts per structural category. Counts are per tag, not a
/// partition: a land creature increments both creatures and lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub creatures: usize,
    pub artifacts: usize,
    pub enchantments: usize,
    pub instants: usize,
    pub sorceries: usize,
    pub planeswalkers: usize,
    pub lands: usize,
}

impl CategoryCounts {
    fn record(&mut self, card: &Card) {
        for category in Category::DISPLAY_ORDER {
            if category.matches(card) {
                match category {
                    Category::Creature => self.creatures += 1,
                    Category::Artifact => self.artifacts += 1,
                    Category::Enchantment => self.enchantments += 1,
                    Category::Instant => self.instants += 1,
                    Category::Sorcery => self.sorceries += 1,
                    Category::Planeswalker => self.planeswalkers += 1,
                    Category::Land => self.lands += 1,
                }
            }
        }
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Creature => self.creatures,
            Category::Artifact => self.artifacts,
            Category::Enchantment => self.enchantments,
            Category::Instant => self.instants,
            Category::Sorcery => self.sorceries,
            Category::Planeswalker => self.planeswalkers,
            Category::Land => self.lands,
        }
    }
}

/// Running counts per functional role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleCounts {
    pub ramp: usize,
    pub draw: usize,
    pub removal: usize,
    pub protection: usize,
    pub wincon: usize,
    pub land: usize,
    pub value: usize,
}

impl RoleCounts {
    fn record(&mut self, role: Role) {
        match role {
            Role::Ramp => self.ramp += 1,
            Role::Draw => self.draw += 1,
            Role::Removal => self.removal += 1,
            Role::Protection => self.protection += 1,
            Role::WinCondition => self.wincon += 1,
            Role::Land => self.land += 1,
            Role::Value => self.value += 1,
        }
    }

    pub fn get(&self, role: Role) -> usize {
        match role {
            Role::Ramp => self.ramp,
            Role::Draw => self.draw,
            Role::Removal => self.removal,
            Role::Protection => self.protection,
            Role::WinCondition => self.wincon,
            Role::Land => self.land,
            Role::Value => self.value,
        }
    }
}

/// Mutable accounting for one build invocation: used names, per-category
/// and per-role counts, spend, remaining budget, high-impact count.
///
/// Constructed fresh per build, owned by that build alone, and threaded by
/// value through the fill phases; it is never shared between builds.
#[derive(Debug, Clone)]
pub struct SelectionState {
    tier: PowerTier,
    per_item_ceiling: Option<f64>,
    remaining_budget: Option<f64>,
    high_impact_cap: Option<usize>,
    used_names: BTreeSet<String>,
    pub categories: CategoryCounts,
    pub roles: RoleCounts,
    total_spent: f64,
    high_impact_selected: usize,
    selected: usize,
}

impl SelectionState {
    pub fn new(tier: PowerTier, budget: BudgetTier) -> SelectionState {
        SelectionState {
            tier,
            per_item_ceiling: budget.per_item_ceiling(),
            remaining_budget: budget.total_budget(),
            high_impact_cap: tier.high_impact_cap(),
            used_names: BTreeSet::new(),
            categories: CategoryCounts::default(),
            roles: RoleCounts::default(),
            total_spent: 0.0,
            high_impact_selected: 0,
            selected: 0,
        }
    }

    pub fn tier(&self) -> PowerTier {
        self.tier
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn total_spent(&self) -> f64 {
        self.total_spent
    }

    pub fn remaining_budget(&self) -> Option<f64> {
        self.remaining_budget
    }

    pub fn high_impact_selected(&self) -> usize {
        self.high_impact_selected
    }

    pub fn is_full(&self) -> bool {
        self.selected >= DECK_SIZE
    }

    pub fn remaining_slots(&self) -> usize {
        DECK_SIZE.saturating_sub(self.selected)
    }

    pub fn is_used(&self, card: &Card) -> bool {
        self.used_names.contains(&card.name_key())
    }

    pub fn high_impact_capped(&self) -> bool {
        matches!(self.high_impact_cap, Some(cap) if self.high_impact_selected >= cap)
    }

    pub fn within_budget(&self, cost: f64) -> bool {
        within_limits(cost, self.per_item_ceiling, self.remaining_budget)
    }

    /// Admit a card: reserve its name, charge the budget, update every
    /// running counter.
    pub fn admit(&mut self, card: &Card, cost: f64, role: Role, high_impact: bool) {
        self.used_names.insert(card.name_key());
        self.charge(card, cost, role, high_impact);
    }

    /// Same accounting as `admit` without reserving the name. Basic
    /// resource cards repeat by name and are tracked by count alone, the
    /// one exception to the name-uniqueness invariant.
    pub fn admit_repeatable(&mut self, card: &Card, cost: f64, role: Role) {
        self.charge(card, cost, role, false);
    }

    fn charge(&mut self, card: &Card, cost: f64, role: Role, high_impact: bool) {
        if let Some(rem) = self.remaining_budget {
            self.remaining_budget = Some((rem - cost).max(0.0));
        }
        self.total_spent += cost;
        if high_impact {
            self.high_impact_selected += 1;
        }
        self.categories.record(card);
        self.roles.record(role);
        self.selected += 1;
    }
}

/// Result of one fill pass: the threaded state plus the cards it accepted,
/// in scan order.
#[derive(Debug)]
pub struct FillOutcome {
    pub state: SelectionState,
    pub picked: Vec<Card>,
}

/// The primary allocation primitive: one stable scan over the normalized
/// pool in catalog order. A candidate is accepted only when all of these
/// hold: name unused, high-impact cap not exceeded, not forbidden for the
/// tier, predicate true, budget check passed. The scan stops once the need
/// is met or the list reaches its full size.
///
/// `role_hint` overrides classification for role accounting; without it the
/// accepted card's classified role is recorded.
pub fn fill<C, F>(
    pool: &[Card],
    mut state: SelectionState,
    classifier: &C,
    mut need: usize,
    role_hint: Option<Role>,
    accept: F,
) -> FillOutcome
where
    C: Classifier + ?Sized,
    F: Fn(&Card, &SelectionState) -> bool,
{
    let mut picked = Vec::new();

    for card in pool {
        if state.is_full() || need == 0 {
            break;
        }
        if state.is_used(card) {
            continue;
        }
        let high_impact = classifier.is_high_impact(card);
        if high_impact && state.high_impact_capped() {
            continue;
        }
        if classifier.is_forbidden(card, state.tier()) {
            continue;
        }
        if !accept(card, &state) {
            continue;
        }
        let Some(cost) = usable_cost(card) else {
            continue;
        };
        if !state.within_budget(cost) {
            continue;
        }

        let role = role_hint.unwrap_or_else(|| classifier.classify_role(card));
        state.admit(card, cost, role, high_impact);
        picked.push(card.clone());
        need -= 1;
    }

    FillOutcome { state, picked }
}
