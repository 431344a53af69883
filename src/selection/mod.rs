pub mod fallback;
pub mod lands;
pub mod state;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::catalog::basics::BasicCache;
use crate::catalog::card::{Card, Category};
use crate::catalog::query::pool_query;
use crate::catalog::source::{fetch_pool, normalize_pool, CatalogSource, NamedLookup};
use crate::policy::classifier::{Classifier, Role, TextHeuristicClassifier};
use crate::policy::targets::{CategoryTargets, RoleTargets};
use crate::rerank::{parse_preferences, reconcile, Reranker, RerankRequest};
use crate::types::outcome::{
    group_sections, BuildOutcome, BuildReport, PoolFingerprint, RerankStatus, RoleSummary,
};
use crate::types::request::{BuildError, BuildRequest};

pub use state::{fill, FillOutcome, SelectionState, DECK_SIZE};

/// Upper bound on candidate-pool retrieval, bounding latency and memory.
pub const POOL_CAP: usize = 600;

/// The engine. Collaborators come in by reference; the classifier is a
/// swappable rule set defaulting to the text heuristics.
pub struct DeckBuilder<'a, C = TextHeuristicClassifier> {
    classifier: C,
    catalog: &'a dyn CatalogSource,
    lookup: &'a dyn NamedLookup,
    reranker: Option<&'a dyn Reranker>,
}

impl<'a> DeckBuilder<'a, TextHeuristicClassifier> {
    pub fn new(catalog: &'a dyn CatalogSource, lookup: &'a dyn NamedLookup) -> Self {
        DeckBuilder {
            classifier: TextHeuristicClassifier,
            catalog,
            lookup,
            reranker: None,
        }
    }
}

impl<'a, C> DeckBuilder<'a, C>
where
    C: Classifier,
{
    pub fn with_classifier(
        catalog: &'a dyn CatalogSource,
        lookup: &'a dyn NamedLookup,
        classifier: C,
    ) -> Self {
        DeckBuilder {
            classifier,
            catalog,
            lookup,
            reranker: None,
        }
    }

    pub fn with_reranker(mut self, reranker: &'a dyn Reranker) -> Self {
        self.reranker = Some(reranker);
        self
    }

    /// Run one build. `basics` is the explicit basic-resource cache; reuse
    /// it across sequential builds or pass a fresh one.
    ///
    /// Every collaborator failure degrades instead of aborting; the only
    /// fatal condition is a missing leader, rejected up front.
    pub fn build(
        &self,
        request: &BuildRequest,
        basics: &mut BasicCache,
    ) -> Result<BuildOutcome, BuildError> {
        request.validate()?;
        let leader = &request.leader;
        let identity = leader.effective_colors();

        // 1. Candidate pool: sequential pagination, then normalization.
        let query = pool_query(leader, request.theme);
        let raw = fetch_pool(self.catalog, &query, POOL_CAP);
        let pool_considered = raw.len();
        let pool = normalize_pool(raw, &leader.id);
        let fingerprint = PoolFingerprint::from_pool(&pool);
        debug!(
            considered = pool_considered,
            eligible = pool.len(),
            "candidate pool normalized"
        );

        let targets = CategoryTargets::for_tier(request.power);
        let role_targets = RoleTargets::for_tier(request.power, targets.lands);

        let mut state = SelectionState::new(request.power, request.budget);
        let mut deck: Vec<Card> = Vec::with_capacity(DECK_SIZE);

        // 2. Structural category fill, fixed order, each hinted `value`.
        for (category, need) in [
            (Category::Creature, targets.creatures),
            (Category::Artifact, targets.artifacts),
            (Category::Enchantment, targets.enchantments),
            (Category::Instant, targets.instants),
            (Category::Sorcery, targets.sorceries),
            (Category::Planeswalker, targets.planeswalkers),
        ] {
            let outcome = fill(
                &pool,
                state,
                &self.classifier,
                need,
                Some(Role::Value),
                move |card, _| category.matches(card),
            );
            state = outcome.state;
            deck.extend(outcome.picked);
        }

        // 3. Land allocation: non-basics by fixing score, then basics.
        let planned = lands::planned_basics(targets.lands, identity.len());
        let outcome = lands::allocate_nonbasics(&pool, state, &identity, targets.lands, planned);
        state = outcome.state;
        deck.extend(outcome.picked);

        let outcome = lands::allocate_basics(
            self.lookup,
            basics,
            state,
            &identity,
            targets.lands,
            planned,
        );
        state = outcome.state;
        deck.extend(outcome.picked);

        // 4. Generic fill for leftover slots; lands admitted only while the
        // land target is still open.
        let land_target = targets.lands;
        let need = state.remaining_slots();
        let outcome = fill(&pool, state, &self.classifier, need, None, move |card, s| {
            !card.is_land() || s.categories.lands < land_target
        });
        state = outcome.state;
        deck.extend(outcome.picked);

        // 5. Relaxed fallback when the primary fill under-produced.
        if !state.is_full() {
            debug!(
                selected = state.selected(),
                "primary fill short; relaxed fallback engaged"
            );
            let outcome = fallback::relaxed_fill(&pool, state, &self.classifier, &identity);
            state = outcome.state;
            deck.extend(outcome.picked);
        }

        // 6. Role quota reconciliation, then swap suggestions.
        let outcome = fallback::reconcile_roles(&pool, state, &self.classifier, &role_targets);
        state = outcome.state;
        deck.extend(outcome.picked);

        let suggestions =
            fallback::swap_suggestions(&pool, &state, &self.classifier, &identity, &role_targets);

        deck.truncate(DECK_SIZE);

        // 7. Optional external re-ranking; advisory, reorder only.
        let (deck, rerank) = self.apply_rerank(deck, request, &pool);

        let role_summary = RoleSummary::from_counts(&role_targets, &state.roles);
        let sections = group_sections(&deck);
        let report = BuildReport {
            pool_considered,
            pool_eligible: pool.len(),
            total_spent: state.total_spent(),
            remaining_budget: state.remaining_budget(),
            high_impact_selected: state.high_impact_selected(),
            pool_fingerprint: fingerprint,
            generated_at: Utc::now(),
            rerank,
        };

        info!(
            cards = deck.len(),
            spent = report.total_spent,
            "deck assembled"
        );

        Ok(BuildOutcome {
            leader: leader.clone(),
            deck,
            sections,
            role_summary,
            suggestions,
            report,
        })
    }

    fn apply_rerank(
        &self,
        deck: Vec<Card>,
        request: &BuildRequest,
        pool: &[Card],
    ) -> (Vec<Card>, RerankStatus) {
        let Some(reranker) = self.reranker else {
            return (deck, RerankStatus::NotRequested);
        };

        let rerank_request = RerankRequest::new(
            &request.leader,
            request.theme,
            request.power,
            request.budget,
            pool,
        );
        match reranker.rerank(&rerank_request) {
            Ok(text) => {
                let preferred = parse_preferences(&text);
                if preferred.is_empty() {
                    warn!("re-ranking returned no usable signal; local order stands");
                    (deck, RerankStatus::NoUsableSignal)
                } else {
                    let (reordered, moved) = reconcile(deck, &preferred);
                    debug!(moved, "re-ranking applied");
                    (reordered, RerankStatus::Applied { moved })
                }
            }
            Err(err) => {
                warn!(%err, "re-ranking unavailable; local order stands");
                (
                    deck,
                    RerankStatus::Unavailable {
                        note: err.to_string(),
                    },
                )
            }
        }
    }
}
