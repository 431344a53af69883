use serde::{Deserialize, Serialize};

use crate::policy::classifier::Role;
use crate::selection::state::DECK_SIZE;

/// Power tier, the ordinal knob controlling how permissive the banned-content
/// policy is and how ambitious the selection targets are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerTier {
    Exhibition,
    Core,
    Upgraded,
    Optimized,
    Competitive,
}

impl PowerTier {
    pub fn from_ordinal(n: u8) -> Option<PowerTier> {
        match n {
            1 => Some(PowerTier::Exhibition),
            2 => Some(PowerTier::Core),
            3 => Some(PowerTier::Upgraded),
            4 => Some(PowerTier::Optimized),
            5 => Some(PowerTier::Competitive),
            _ => None,
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            PowerTier::Exhibition => 1,
            PowerTier::Core => 2,
            PowerTier::Upgraded => 3,
            PowerTier::Optimized => 4,
            PowerTier::Competitive => 5,
        }
    }

    /// The two highest tiers never forbid content.
    pub fn enforces_forbidden(self) -> bool {
        self < PowerTier::Optimized
    }

    /// Per-tier ceiling on high-impact selections; `None` is unbounded.
    pub fn high_impact_cap(self) -> Option<usize> {
        match self {
            PowerTier::Exhibition => Some(0),
            PowerTier::Core => Some(1),
            PowerTier::Upgraded => Some(3),
            PowerTier::Optimized => Some(6),
            PowerTier::Competitive => None,
        }
    }
}

/// Desired counts per structural category. Land count decreases as tiers
/// rise; everything else holds or grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTargets {
    pub lands: usize,
    pub creatures: usize,
    pub instants: usize,
    pub sorceries: usize,
    pub enchantments: usize,
    pub artifacts: usize,
    pub planeswalkers: usize,
}

impl CategoryTargets {
    pub fn for_tier(tier: PowerTier) -> CategoryTargets {
        match tier {
            PowerTier::Exhibition => CategoryTargets { lands: 38, creatures: 28, instants: 6, sorceries: 6, enchantments: 8, artifacts: 8, planeswalkers: 1 },
            PowerTier::Core => CategoryTargets { lands: 37, creatures: 27, instants: 7, sorceries: 7, enchantments: 8, artifacts: 8, planeswalkers: 2 },
            PowerTier::Upgraded => CategoryTargets { lands: 36, creatures: 26, instants: 8, sorceries: 8, enchantments: 8, artifacts: 9, planeswalkers: 2 },
            PowerTier::Optimized => CategoryTargets { lands: 35, creatures: 24, instants: 9, sorceries: 9, enchantments: 7, artifacts: 9, planeswalkers: 3 },
            PowerTier::Competitive => CategoryTargets { lands: 33, creatures: 22, instants: 10, sorceries: 10, enchantments: 6, artifacts: 10, planeswalkers: 3 },
        }
    }
}

/// Desired counts per functional role. `land` tracks the tier's land target
/// and `value` is uncapped (the whole list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTargets {
    pub ramp: usize,
    pub draw: usize,
    pub removal: usize,
    pub protection: usize,
    pub wincon: usize,
    pub land: usize,
    pub value: usize,
}

impl RoleTargets {
    pub fn for_tier(tier: PowerTier, land_target: usize) -> RoleTargets {
        let (ramp, draw, removal, protection, wincon) = match tier {
            PowerTier::Exhibition => (8, 8, 8, 6, 4),
            PowerTier::Core => (9, 9, 9, 7, 5),
            PowerTier::Upgraded => (10, 10, 10, 8, 6),
            PowerTier::Optimized => (11, 11, 11, 9, 8),
            PowerTier::Competitive => (12, 12, 12, 10, 8),
        };
        RoleTargets {
            ramp,
            draw,
            removal,
            protection,
            wincon,
            land: land_target,
            value: DECK_SIZE,
        }
    }

    pub fn target(&self, role: Role) -> usize {
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
