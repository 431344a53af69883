use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::catalog::card::{Card, Color};
use crate::catalog::source::NamedLookup;

#[derive(Debug, Clone)]
struct CacheEntry {
    card: Option<Card>,
    // informational only
    fetched_at: DateTime<Utc>,
}

/// Cache in front of the named-lookup collaborator for basic resource
/// cards: at most one lookup per name per cache lifetime, negative results
/// included. Lookups are idempotent, so one cache may serve sequential
/// builds; constructing a fresh one (tests, isolation) is equally valid.
#[derive(Debug, Default)]
pub struct BasicCache {
    entries: BTreeMap<String, CacheEntry>,
}

impl BasicCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fetched_at(&self, name: &str) -> Option<DateTime<Utc>> {
        self.entries.get(name).map(|e| e.fetched_at)
    }

    /// Resolve `name` through the cache. A failed collaborator call caches
    /// as absent; the corresponding instances are omitted from the build,
    /// never an error.
    pub fn resolve(&mut self, lookup: &dyn NamedLookup, name: &str) -> Option<Card> {
        if let Some(entry) = self.entries.get(name) {
            return entry.card.clone();
        }

        let card = match lookup.named(name) {
            Ok(found) => found,
            Err(err) => {
                warn!(name, %err, "basic lookup failed; instances omitted");
                None
            }
        };
        self.entries.insert(
            name.to_string(),
            CacheEntry {
                card: card.clone(),
                fetched_at: Utc::now(),
            },
        );
        card
    }
}

/// Canonical basic names for an identity, one per color, in identity order.
pub fn basic_names(identity: &[Color]) -> Vec<&'static str> {
    identity.iter().map(|c| c.basic_land_name()).collect()
}
