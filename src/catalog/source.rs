use thiserror::Error;
use tracing::warn;

use crate::catalog::card::{Card, CardId};
use crate::policy::budget::usable_cost;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    #[error("catalog returned a malformed page: {0}")]
    Malformed(String),
}

/// One page of search results. `next_page` is an opaque continuation token;
/// each page's token depends on the prior response, so retrieval is an
/// inherently sequential chain.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub cards: Vec<Card>,
    pub next_page: Option<String>,
}

/// Paginated catalog search. Implementations own transport, auth and
/// timeouts; the engine only sequences pages and enforces its own cap.
pub trait CatalogSource {
    fn search(&self, query: &str, page: Option<&str>) -> Result<CatalogPage, CatalogError>;
}

/// Exact-name lookup, used for basic resource cards.
pub trait NamedLookup {
    fn named(&self, exact: &str) -> Result<Option<Card>, CatalogError>;
}

/// Drain the pagination chain until `cap` cards are collected or the stream
/// ends. A failing page truncates the pool to what was already retrieved:
/// degraded, not fatal.
pub fn fetch_pool(catalog: &dyn CatalogSource, query: &str, cap: usize) -> Vec<Card> {
    let mut collected: Vec<Card> = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        if collected.len() >= cap {
            break;
        }
        match catalog.search(query, page_token.as_deref()) {
            Ok(page) => {
                collected.extend(page.cards);
                match page.next_page {
                    Some(token) => page_token = Some(token),
                    None => break,
                }
            }
            Err(err) => {
                warn!(collected = collected.len(), %err, "pool retrieval truncated");
                break;
            }
        }
    }

    collected
}

/// Normalize a raw pool into the candidate set the fill phases scan:
/// the leader itself is excluded, names deduplicate first-wins, and cards
/// with no usable cost drop out (unselectable under any budget). Catalog
/// order is preserved; the fill scan never re-sorts.
pub fn normalize_pool(pool: Vec<Card>, leader_id: &CardId) -> Vec<Card> {
    let mut seen = std::collections::BTreeSet::new();
    let mut normalized = Vec::with_capacity(pool.len());

    for card in pool {
        if card.id == *leader_id {
            continue;
        }
        if !seen.insert(card.name_key()) {
            continue;
        }
        if usable_cost(&card).is_none() {
            continue;
        }
        normalized.push(card);
    }

    normalized
}
