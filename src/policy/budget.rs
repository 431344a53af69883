use serde::{Deserialize, Serialize};

use crate::catalog::card::Card;

/// Slack on the remaining-budget comparison, absorbing decimal price noise.
pub const BUDGET_EPSILON: f64 = 1e-6;

/// Budget tier: per-item price ceiling plus total budget, or unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    UpTo50,
    UpTo150,
    UpTo300,
    Unlimited,
}

impl BudgetTier {
    pub fn per_item_ceiling(self) -> Option<f64> {
        match self {
            BudgetTier::UpTo50 => Some(2.5),
            BudgetTier::UpTo150 => Some(5.0),
            BudgetTier::UpTo300 => Some(8.0),
            BudgetTier::Unlimited => None,
        }
    }

    pub fn total_budget(self) -> Option<f64> {
        match self {
            BudgetTier::UpTo50 => Some(50.0),
            BudgetTier::UpTo150 => Some(150.0),
            BudgetTier::UpTo300 => Some(300.0),
            BudgetTier::Unlimited => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetTier::UpTo50 => "0-50",
            BudgetTier::UpTo150 => "50-150",
            BudgetTier::UpTo300 => "150-300",
            BudgetTier::Unlimited => "unlimited",
        }
    }
}

/// The card's usable price: the lowest positive quotation across all
/// currencies. Basic resource cards with no quotation are free (always
/// obtainable); anything else without one is unselectable under any budget.
pub fn usable_cost(card: &Card) -> Option<f64> {
    let mut lowest: Option<f64> = None;
    for quote in card.prices.quotations() {
        if let Ok(value) = quote.parse::<f64>() {
            if value > 0.0 && lowest.map_or(true, |cur| value < cur) {
                lowest = Some(value);
            }
        }
    }
    if lowest.is_some() {
        return lowest;
    }
    if card.is_basic_land() {
        Some(0.0)
    } else {
        None
    }
}

/// Ceiling and remaining-budget checks in one place. `None` bounds are
/// unlimited and always pass.
pub fn within_limits(cost: f64, ceiling: Option<f64>, remaining: Option<f64>) -> bool {
    if let Some(cap) = ceiling {
        if cost > cap {
            return false;
        }
    }
    match remaining {
        None => true,
        Some(rem) => cost <= rem + BUDGET_EPSILON,
    }
}
