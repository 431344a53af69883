use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::catalog::card::{Card, Category};
use crate::policy::classifier::Role;
use crate::policy::targets::RoleTargets;
use crate::selection::state::RoleCounts;

/// Content fingerprint of a normalized candidate pool: sha256 over the
/// ordered name keys. Equal fingerprints plus equal configuration and no
/// external signal guarantee an identical ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolFingerprint(String);

impl PoolFingerprint {
    pub fn from_pool(pool: &[Card]) -> PoolFingerprint {
        let mut hasher = Sha256::new();
        for card in pool {
            hasher.update(card.name_key().as_bytes());
            hasher.update(b"\n");
        }
        let hash = hasher.finalize();
        PoolFingerprint(format!("sha256:{}", hex::encode(hash)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One line of the grouped display view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub card: Card,
    pub qty: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSection {
    pub label: String,
    pub entries: Vec<DeckEntry>,
}

/// Group a finished list for display. Sections match independently, so a
/// card carrying two structural tags appears under both headings; repeated
/// names (basics) aggregate by quantity in first-appearance order.
pub fn group_sections(deck: &[Card]) -> Vec<DeckSection> {
    Category::DISPLAY_ORDER
        .iter()
        .filter_map(|category| {
            let mut entries: Vec<DeckEntry> = Vec::new();
            let mut by_name: BTreeMap<String, usize> = BTreeMap::new();
            for card in deck.iter().filter(|c| category.matches(c)) {
                match by_name.get(&card.name_key()) {
                    Some(&slot) => entries[slot].qty += 1,
                    None => {
                        by_name.insert(card.name_key(), entries.len());
                        entries.push(DeckEntry {
                            card: card.clone(),
                            qty: 1,
                        });
                    }
                }
            }
            if entries.is_empty() {
                None
            } else {
                Some(DeckSection {
                    label: category.label().to_string(),
                    entries,
                })
            }
        })
        .collect()
}

/// One role's target-versus-achieved line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleLine {
    pub role: Role,
    pub target: usize,
    pub achieved: usize,
}

/// Read-only snapshot of role targets against what the build achieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSummary {
    pub lines: Vec<RoleLine>,
}

impl RoleSummary {
    pub fn from_counts(targets: &RoleTargets, counts: &RoleCounts) -> RoleSummary {
        RoleSummary {
            lines: Role::ALL
                .iter()
                .map(|&role| RoleLine {
                    role,
                    target: targets.target(role),
                    achieved: counts.get(role),
                })
                .collect(),
        }
    }

    pub fn target(&self, role: Role) -> usize {
        self.lines
            .iter()
            .find(|l| l.role == role)
            .map_or(0, |l| l.target)
    }

    pub fn achieved(&self, role: Role) -> usize {
        self.lines
            .iter()
            .find(|l| l.role == role)
            .map_or(0, |l| l.achieved)
    }

    pub fn deficit(&self, role: Role) -> usize {
        self.target(role).saturating_sub(self.achieved(role))
    }
}

/// Swap material for a role still under target: up to five unused,
/// color-legal candidates of that role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSuggestion {
    pub role: Role,
    pub needed: usize,
    pub candidates: Vec<Card>,
}

/// Outcome of the advisory re-ranking step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RerankStatus {
    NotRequested,
    Applied { moved: usize },
    NoUsableSignal,
    Unavailable { note: String },
}

/// Metadata describing how the build went.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    pub pool_considered: usize,
    pub pool_eligible: usize,
    pub total_spent: f64,
    pub remaining_budget: Option<f64>,
    pub high_impact_selected: usize,
    pub pool_fingerprint: PoolFingerprint,
    // informational only
    pub generated_at: DateTime<Utc>,
    pub rerank: RerankStatus,
}

/// The final product of a build: the ordered list plus its display view,
/// role summary, swap suggestions and report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOutcome {
    pub leader: Card,
    pub deck: Vec<Card>,
    pub sections: Vec<DeckSection>,
    pub role_summary: RoleSummary,
    pub suggestions: Vec<RoleSuggestion>,
    pub report: BuildReport,
}
