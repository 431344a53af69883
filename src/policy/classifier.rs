use serde::{Deserialize, Serialize};

use crate::catalog::card::Card;
use crate::policy::targets::PowerTier;

/// Coarse functional role assigned to every non-leader card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Ramp,
    Draw,
    Removal,
    Protection,
    #[serde(rename = "wincon")]
    WinCondition,
    Land,
    Value,
}

impl Role {
    /// The four roles subject to deficit reconciliation and swap
    /// suggestions.
    pub const SUPPORT: [Role; 4] = [Role::Ramp, Role::Draw, Role::Removal, Role::Protection];

    pub const ALL: [Role; 7] = [
        Role::Ramp,
        Role::Draw,
        Role::Removal,
        Role::Protection,
        Role::WinCondition,
        Role::Land,
        Role::Value,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Ramp => "ramp",
            Role::Draw => "draw",
            Role::Removal => "removal",
            Role::Protection => "protection",
            Role::WinCondition => "wincon",
            Role::Land => "land",
            Role::Value => "value",
        }
    }
}

/// The classification seam: role assignment, banned-content policy, and the
/// high-impact flag together, so the rule tables can be swapped or tested
/// independently of the selection loop.
pub trait Classifier {
    fn classify_role(&self, card: &Card) -> Role;
    fn is_forbidden(&self, card: &Card, tier: PowerTier) -> bool;
    fn is_high_impact(&self, card: &Card) -> bool;
}

/// Default rule set: case-insensitive phrase matching over type line and
/// ability text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextHeuristicClassifier;

/// Curated names that count as high-impact regardless of text.
const HIGH_IMPACT_NAMES: &[&str] = &[
    "mana crypt",
    "mana vault",
    "jeweled lotus",
    "dockside extortionist",
    "fierce guardianship",
    "force of will",
    "timetwister",
    "time warp",
    "expropriate",
    "cyclonic rift",
    "urza's saga",
    "gaea's cradle",
];

impl Classifier for TextHeuristicClassifier {
    fn classify_role(&self, card: &Card) -> Role {
        if card.is_land() {
            return Role::Land;
        }
        let text = card.rules_text();
        // Precedence is fixed: a card matching both ramp and draw phrasing
        // classifies as ramp. The order is a compatibility contract, not a
        // claim of correctness.
        if text.contains("add {")
            || text.contains("search your library for a land")
            || text.contains("mana pool")
        {
            return Role::Ramp;
        }
        if text.contains("draw a card")
            || text.contains("draw two cards")
            || text.contains("each player draws")
        {
            return Role::Draw;
        }
        if text.contains("destroy target")
            || text.contains("exile target")
            || text.contains("counter target")
            || text.contains("fight target")
            || text.contains("sacrifice target")
        {
            return Role::Removal;
        }
        if text.contains("hexproof")
            || text.contains("indestructible")
            || text.contains("phase out")
            || text.contains("counter target spell")
        {
            return Role::Protection;
        }
        Role::Value
    }

    fn is_forbidden(&self, card: &Card, tier: PowerTier) -> bool {
        if !tier.enforces_forbidden() {
            return false;
        }
        let text = card.rules_text();
        let extra_turns = text.contains("extra turn");
        let tutors = text.contains("search your library") || text.contains("tutor");
        let mass_land_destruction =
            text.contains("destroy all lands") || text.contains("sacrifice all lands");
        let fast_mana = text.contains("add three mana")
            || text.contains("add {c}{c}{c}")
            || text.contains("mana vault")
            || text.contains("mana crypt")
            || text.contains("jeweled lotus");
        extra_turns || tutors || mass_land_destruction || fast_mana
    }

    fn is_high_impact(&self, card: &Card) -> bool {
        if HIGH_IMPACT_NAMES.contains(&card.name_key().as_str()) {
            return true;
        }
        let text = card.oracle_text.to_lowercase();
        text.contains("extra turn")
            || text.contains("win the game")
            || text.contains("infinite")
            || text.contains("tutor")
            || text.contains("add three")
            || text.contains("add four")
    }
}
