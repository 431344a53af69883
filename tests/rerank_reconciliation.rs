use std::collections::BTreeMap;

use decklist_core::catalog::{
    BasicCache, Card, CardId, CatalogError, CatalogPage, CatalogSource, Color, NamedLookup, Prices,
};
use decklist_core::policy::{BudgetTier, PowerTier};
use decklist_core::rerank::{parse_preferences, reconcile, Reranker, RerankError, RerankRequest};
use decklist_core::selection::DeckBuilder;
use decklist_core::types::{BuildRequest, RerankStatus, Theme};

fn make_card(id: &str, name: &str, type_line: &str, usd: Option<&str>) -> Card {
    Card {
        id: CardId::new(id),
        name: name.to_string(),
        type_line: type_line.to_string(),
        oracle_text: String::new(),
        mana_cost: None,
        prices: Prices {
            usd: usd.map(str::to_string),
            usd_foil: None,
            eur: None,
        },
        color_identity: vec![],
    }
}

fn leader() -> Card {
    let mut card = make_card("leader", "Odric, Master Tactician", "Legendary Creature — Human Soldier", Some("1.00"));
    card.color_identity = vec![Color::White];
    card
}

fn pool() -> Vec<Card> {
    let mut cards = vec![
        make_card("sol-ring", "Sol Ring", "Artifact", Some("1.50")),
        make_card("arcane-signet", "Arcane Signet", "Artifact", Some("1.00")),
    ];
    for i in 0..150 {
        cards.push(make_card(
            &format!("c-{i}"),
            &format!("Shield Bearer {i}"),
            "Creature — Soldier",
            Some("0.10"),
        ));
    }
    cards
}

struct FixedCatalog {
    cards: Vec<Card>,
}

impl CatalogSource for FixedCatalog {
    fn search(&self, _query: &str, _page: Option<&str>) -> Result<CatalogPage, CatalogError> {
        Ok(CatalogPage {
            cards: self.cards.clone(),
            next_page: None,
        })
    }
}

struct BasicsLookup;

impl NamedLookup for BasicsLookup {
    fn named(&self, exact: &str) -> Result<Option<Card>, CatalogError> {
        Ok(Some(make_card(&exact.to_lowercase(), exact, "Basic Land", None)))
    }
}

struct ScriptedReranker {
    response: String,
}

impl Reranker for ScriptedReranker {
    fn rerank(&self, _request: &RerankRequest) -> Result<String, RerankError> {
        Ok(self.response.clone())
    }
}

struct OfflineReranker;

impl Reranker for OfflineReranker {
    fn rerank(&self, _request: &RerankRequest) -> Result<String, RerankError> {
        Err(RerankError::Unavailable("no backend".to_string()))
    }
}

fn name_multiset(deck: &[Card]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for card in deck {
        *counts.entry(card.name_key()).or_insert(0usize) += 1;
    }
    counts
}

#[test]
fn preferred_names_move_to_the_front_in_given_order() {
    let catalog = FixedCatalog { cards: pool() };
    let lookup = BasicsLookup;
    let reranker = ScriptedReranker {
        response: "Here is the list:\n{\"cards\":[{\"name\":\"Sol Ring\",\"role\":\"ramp\"},{\"name\":\"Arcane Signet\",\"role\":\"ramp\"}]}".to_string(),
    };
    let builder = DeckBuilder::new(&catalog, &lookup).with_reranker(&reranker);
    let request = BuildRequest::new(leader(), Theme::Auto, PowerTier::Competitive, BudgetTier::Unlimited);
    let mut basics = BasicCache::new();

    let outcome = builder.build(&request, &mut basics).unwrap();

    assert_eq!(outcome.deck[0].name, "Sol Ring");
    assert_eq!(outcome.deck[1].name, "Arcane Signet");
    assert!(matches!(outcome.report.rerank, RerankStatus::Applied { moved: 2 }));
}

#[test]
fn reconciliation_is_a_pure_permutation() {
    let catalog = FixedCatalog { cards: pool() };
    let lookup = BasicsLookup;
    let request = BuildRequest::new(leader(), Theme::Auto, PowerTier::Competitive, BudgetTier::Unlimited);

    let plain_builder = DeckBuilder::new(&catalog, &lookup);
    let mut basics = BasicCache::new();
    let baseline = plain_builder.build(&request, &mut basics).unwrap();

    let reranker = ScriptedReranker {
        response: "1. Arcane Signet\n2. Sol Ring\n3. Imaginary Card".to_string(),
    };
    let reranked_builder = DeckBuilder::new(&catalog, &lookup).with_reranker(&reranker);
    let mut basics = BasicCache::new();
    let reranked = reranked_builder.build(&request, &mut basics).unwrap();

    assert_eq!(
        name_multiset(&baseline.deck),
        name_multiset(&reranked.deck),
        "reconciliation reorders, never adds or removes"
    );
    assert_eq!(reranked.deck[0].name, "Arcane Signet");
    assert_eq!(reranked.deck[1].name, "Sol Ring");
}

#[test]
fn unusable_signal_leaves_the_local_order_authoritative() {
    let catalog = FixedCatalog { cards: pool() };
    let lookup = BasicsLookup;
    let request = BuildRequest::new(leader(), Theme::Auto, PowerTier::Competitive, BudgetTier::Unlimited);

    let plain_builder = DeckBuilder::new(&catalog, &lookup);
    let mut basics = BasicCache::new();
    let baseline = plain_builder.build(&request, &mut basics).unwrap();

    let reranker = ScriptedReranker {
        response: "I am sorry, I cannot produce a list today.".to_string(),
    };
    let builder = DeckBuilder::new(&catalog, &lookup).with_reranker(&reranker);
    let mut basics = BasicCache::new();
    let outcome = builder.build(&request, &mut basics).unwrap();

    let baseline_ids: Vec<&str> = baseline.deck.iter().map(|c| c.id.as_str()).collect();
    let outcome_ids: Vec<&str> = outcome.deck.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(baseline_ids, outcome_ids);
    assert_eq!(outcome.report.rerank, RerankStatus::NoUsableSignal);
}

#[test]
fn reranker_failure_is_advisory_not_fatal() {
    let catalog = FixedCatalog { cards: pool() };
    let lookup = BasicsLookup;
    let reranker = OfflineReranker;
    let builder = DeckBuilder::new(&catalog, &lookup).with_reranker(&reranker);
    let request = BuildRequest::new(leader(), Theme::Auto, PowerTier::Competitive, BudgetTier::Unlimited);
    let mut basics = BasicCache::new();

    let outcome = builder.build(&request, &mut basics).unwrap();

    assert_eq!(outcome.deck.len(), 99);
    assert!(matches!(outcome.report.rerank, RerankStatus::Unavailable { .. }));
}

#[test]
fn parser_accepts_json_and_numbered_shapes_only() {
    let json = "noise before {\"cards\":[{\"name\":\" Sol Ring \"},{\"name\":\"Arcane Signet\",\"role\":\"ramp\"}]} noise after";
    assert_eq!(parse_preferences(json), vec!["Sol Ring", "Arcane Signet"]);

    let numbered = "Suggested order:\n1. Sol Ring\n2) Arcane Signet\n3x Command Tower\n4 Xenagos, God of Revels\nplain prose line";
    assert_eq!(
        parse_preferences(numbered),
        vec![
            "Sol Ring",
            "Arcane Signet",
            "Command Tower",
            "Xenagos, God of Revels"
        ]
    );

    assert!(parse_preferences("no structure here at all").is_empty());
    assert!(parse_preferences("{\"cards\": 12}").is_empty());
}

#[test]
fn reconcile_skips_unknown_and_duplicate_preferences() {
    let deck = vec![
        make_card("a", "Alpha", "Instant", None),
        make_card("b", "Beta", "Instant", None),
        make_card("c", "Gamma", "Instant", None),
    ];
    let preferred = vec![
        "gamma".to_string(),
        "Unknown Card".to_string(),
        "GAMMA".to_string(),
        "Alpha".to_string(),
    ];

    let (reordered, moved) = reconcile(deck, &preferred);

    let names: Vec<&str> = reordered.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Gamma", "Alpha", "Beta"]);
    assert_eq!(moved, 2);
}

#[test]
fn request_snippet_is_capped_at_sixty_items() {
    let cards = pool();
    let request = RerankRequest::new(
        &leader(),
        Theme::Auto,
        PowerTier::Core,
        BudgetTier::UpTo50,
        &cards,
    );
    assert_eq!(request.pool_snippet.lines().count(), 60);
    assert!(request.pool_snippet.starts_with("Sol Ring [Artifact]"));
}
