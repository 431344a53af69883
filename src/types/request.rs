use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::card::Card;
use crate::policy::budget::BudgetTier;
use crate::policy::targets::PowerTier;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no leader selected")]
    MissingLeader,
}

/// Theme tag steering the pool query. `Auto` derives a theme from the
/// leader's own text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Auto,
    Blink,
    Landfall,
    Counters,
    Spellslinger,
    Tokens,
    Artifacts,
    Aristocrats,
    Voltron,
    Control,
    Reanimator,
    Lifegain,
    Wheels,
    Mill,
    Infect,
    Storm,
    GroupHug,
    Chaos,
}

impl Theme {
    /// Catalog query fragment for a named theme; `Auto` has none and falls
    /// back to derivation from the leader.
    pub fn query_fragment(self) -> Option<&'static str> {
        match self {
            Theme::Auto => None,
            Theme::Blink => Some("(oracle:\"blink\" OR oracle:\"flicker\" OR oracle:\"exile and return\")"),
            Theme::Landfall => Some("keyword:landfall"),
            Theme::Counters => Some("(keyword:proliferate OR oracle:\"+1/+1 counters\")"),
            Theme::Spellslinger => Some("(type:instant OR type:sorcery) oracle:\"draw\""),
            Theme::Tokens => Some("(token OR oracle:\"create a token\")"),
            Theme::Artifacts => Some("type:artifact"),
            Theme::Aristocrats => Some("(oracle:\"sacrifice\" OR oracle:\"dies\")"),
            Theme::Voltron => Some("(aura OR equipment) type:creature"),
            Theme::Control => Some("(counterspell OR stax OR tax)"),
            Theme::Reanimator => Some("(reanimate OR oracle:\"return target creature card from your graveyard\")"),
            Theme::Lifegain => Some("oracle:\"gain life\""),
            Theme::Wheels => Some("(oracle:\"each player discards\" OR oracle:\"draw seven\")"),
            Theme::Mill => Some("(mill OR oracle:\"put the top\")"),
            Theme::Infect => Some("keyword:infect"),
            Theme::Storm => Some("keyword:storm"),
            Theme::GroupHug => Some("(oracle:\"each player may\" OR oracle:\"each player draws\")"),
            Theme::Chaos => Some("random"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Auto => "auto",
            Theme::Blink => "blink",
            Theme::Landfall => "landfall",
            Theme::Counters => "counters",
            Theme::Spellslinger => "spellslinger",
            Theme::Tokens => "tokens",
            Theme::Artifacts => "artifacts",
            Theme::Aristocrats => "aristocrats",
            Theme::Voltron => "voltron",
            Theme::Control => "control",
            Theme::Reanimator => "reanimator",
            Theme::Lifegain => "lifegain",
            Theme::Wheels => "wheels",
            Theme::Mill => "mill",
            Theme::Infect => "infect",
            Theme::Storm => "storm",
            Theme::GroupHug => "group-hug",
            Theme::Chaos => "chaos",
        }
    }
}

/// One build's configuration. Immutable for the duration of the build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub leader: Card,
    pub theme: Theme,
    pub power: PowerTier,
    pub budget: BudgetTier,
}

impl BuildRequest {
    pub fn new(leader: Card, theme: Theme, power: PowerTier, budget: BudgetTier) -> BuildRequest {
        BuildRequest {
            leader,
            theme,
            power,
            budget,
        }
    }

    /// The one fatal precondition: a build without a leader is rejected
    /// before any collaborator is consulted.
    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        if self.leader.name.trim().is_empty() {
            return Err(BuildError::MissingLeader);
        }
        Ok(())
    }
}
