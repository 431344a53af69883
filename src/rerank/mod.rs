pub mod parse;
pub mod reconcile;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::card::{Card, Color};
use crate::policy::budget::BudgetTier;
use crate::policy::targets::PowerTier;
use crate::types::request::Theme;

pub use parse::parse_preferences;
pub use reconcile::reconcile;

/// At most this many pool items are described to the re-ranking
/// collaborator.
pub const SNIPPET_LIMIT: usize = 60;

#[derive(Debug, Error)]
pub enum RerankError {
    #[error("re-ranking service unavailable: {0}")]
    Unavailable(String),
    #[error("re-ranking request rejected: {0}")]
    Rejected(String),
}

/// The external re-ranking collaborator. Returns free text expected, but
/// never guaranteed, to contain a preference ordering. The engine treats
/// every failure mode as advisory.
pub trait Reranker {
    fn rerank(&self, request: &RerankRequest) -> Result<String, RerankError>;
}

/// Everything the collaborator gets to see about the build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RerankRequest {
    pub leader_name: String,
    pub leader_colors: Vec<Color>,
    pub theme: Theme,
    pub power: PowerTier,
    pub budget: BudgetTier,
    pub pool_snippet: String,
}

impl RerankRequest {
    /// Build a request with a snippet describing up to `SNIPPET_LIMIT`
    /// pool items, one `name [type line]` entry per line.
    pub fn new(
        leader: &Card,
        theme: Theme,
        power: PowerTier,
        budget: BudgetTier,
        pool: &[Card],
    ) -> RerankRequest {
        let pool_snippet = pool
            .iter()
            .take(SNIPPET_LIMIT)
            .map(|c| format!("{} [{}]", c.name, c.type_line))
            .collect::<Vec<_>>()
            .join("\n");

        RerankRequest {
            leader_name: leader.name.clone(),
            leader_colors: leader.effective_colors(),
            theme,
            power,
            budget,
            pool_snippet,
        }
    }
}
