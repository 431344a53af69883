use decklist_core::catalog::{Card, CardId, Color, Prices};
use decklist_core::policy::{
    usable_cost, within_limits, BudgetTier, Classifier, PowerTier, Role, TextHeuristicClassifier,
};

fn make_card(name: &str, type_line: &str, text: &str) -> Card {
    Card {
        id: CardId::new(name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        type_line: type_line.to_string(),
        oracle_text: text.to_string(),
        mana_cost: None,
        prices: Prices::default(),
        color_identity: vec![Color::Green],
    }
}

fn priced(name: &str, usd: Option<&str>, usd_foil: Option<&str>, eur: Option<&str>) -> Card {
    let mut card = make_card(name, "Creature — Bear", "");
    card.prices = Prices {
        usd: usd.map(str::to_string),
        usd_foil: usd_foil.map(str::to_string),
        eur: eur.map(str::to_string),
    };
    card
}

#[test]
fn role_classification_follows_fixed_precedence() {
    let classifier = TextHeuristicClassifier;

    let land = make_card("Hidden Glade", "Land", "");
    assert_eq!(classifier.classify_role(&land), Role::Land);

    let ramp = make_card("Acolyte", "Creature — Druid", "{T}: Add {G}.");
    assert_eq!(classifier.classify_role(&ramp), Role::Ramp);

    // Both ramp and draw phrasing: ramp wins by precedence.
    let both = make_card(
        "Seer of Seasons",
        "Creature — Druid",
        "{T}: Add {G}. Whenever you tap a land, draw a card.",
    );
    assert_eq!(classifier.classify_role(&both), Role::Ramp);

    let draw = make_card("Inspiration", "Instant", "Draw two cards.");
    assert_eq!(classifier.classify_role(&draw), Role::Draw);

    let removal = make_card("Final Word", "Instant", "Destroy target creature.");
    assert_eq!(classifier.classify_role(&removal), Role::Removal);

    // Counter-spell phrasing lands in removal before protection can see it.
    let counter = make_card("Refute", "Instant", "Counter target spell.");
    assert_eq!(classifier.classify_role(&counter), Role::Removal);

    let protection = make_card("Stonewood Ward", "Instant", "Target creature gains hexproof.");
    assert_eq!(classifier.classify_role(&protection), Role::Protection);

    let value = make_card("Plain Bear", "Creature — Bear", "");
    assert_eq!(classifier.classify_role(&value), Role::Value);
}

#[test]
fn forbidden_rules_gate_on_tier() {
    let classifier = TextHeuristicClassifier;
    let tutor = make_card(
        "Dark Petition",
        "Sorcery",
        "Search your library for a card and put it into your hand.",
    );
    let turns = make_card("Looming Hour", "Sorcery", "Take an extra turn after this one.");
    let mld = make_card("Scorched Earth", "Sorcery", "Destroy all lands.");
    let fast = make_card("Ancient Relic", "Artifact", "{T}: Add three mana of any one color.");
    let plain = make_card("Plain Bear", "Creature — Bear", "");

    for tier in [PowerTier::Exhibition, PowerTier::Core, PowerTier::Upgraded] {
        assert!(classifier.is_forbidden(&tutor, tier));
        assert!(classifier.is_forbidden(&turns, tier));
        assert!(classifier.is_forbidden(&mld, tier));
        assert!(classifier.is_forbidden(&fast, tier));
        assert!(!classifier.is_forbidden(&plain, tier));
    }
    for tier in [PowerTier::Optimized, PowerTier::Competitive] {
        assert!(
            !classifier.is_forbidden(&tutor, tier),
            "tiers at or above the threshold never forbid"
        );
        assert!(!classifier.is_forbidden(&turns, tier));
    }
}

#[test]
fn high_impact_flags_curated_names_and_text_patterns() {
    let classifier = TextHeuristicClassifier;

    let named = make_card("Mana Crypt", "Artifact", "");
    assert!(classifier.is_high_impact(&named), "curated names always count");

    let by_text = make_card("Closing Act", "Sorcery", "You win the game.");
    assert!(classifier.is_high_impact(&by_text));

    let infinite = make_card("Endless Loop", "Enchantment", "infinite combo engine");
    assert!(classifier.is_high_impact(&infinite));

    let plain = make_card("Plain Bear", "Creature — Bear", "");
    assert!(!classifier.is_high_impact(&plain));
}

#[test]
fn high_impact_caps_grow_with_tier() {
    assert_eq!(PowerTier::Exhibition.high_impact_cap(), Some(0));
    assert_eq!(PowerTier::Core.high_impact_cap(), Some(1));
    assert_eq!(PowerTier::Upgraded.high_impact_cap(), Some(3));
    assert_eq!(PowerTier::Optimized.high_impact_cap(), Some(6));
    assert_eq!(
        PowerTier::Competitive.high_impact_cap(),
        None,
        "the top tier is uncapped"
    );
}

#[test]
fn usable_cost_picks_lowest_positive_quotation() {
    let cheap_eur = priced("Bargain Bin", Some("1.20"), Some("4.00"), Some("0.90"));
    assert_eq!(usable_cost(&cheap_eur), Some(0.90));

    let zero_ignored = priced("Zeroed Out", Some("0.00"), None, Some("2.00"));
    assert_eq!(usable_cost(&zero_ignored), Some(2.00));

    let garbage = priced("Bad Data", Some("n/a"), None, None);
    assert_eq!(usable_cost(&garbage), None, "unparseable quotes are unusable");

    let unpriced = priced("Ghost Listing", None, None, None);
    assert_eq!(usable_cost(&unpriced), None);

    let mut basic = make_card("Forest", "Basic Land — Forest", "");
    basic.prices = Prices::default();
    assert_eq!(usable_cost(&basic), Some(0.0), "unpriced basics are free");
}

#[test]
fn budget_tier_tables_and_limit_checks() {
    assert_eq!(BudgetTier::UpTo50.per_item_ceiling(), Some(2.5));
    assert_eq!(BudgetTier::UpTo50.total_budget(), Some(50.0));
    assert_eq!(BudgetTier::UpTo150.per_item_ceiling(), Some(5.0));
    assert_eq!(BudgetTier::UpTo300.total_budget(), Some(300.0));
    assert_eq!(BudgetTier::Unlimited.per_item_ceiling(), None);
    assert_eq!(BudgetTier::Unlimited.total_budget(), None);

    assert!(within_limits(2.5, Some(2.5), Some(10.0)));
    assert!(!within_limits(2.51, Some(2.5), Some(10.0)));
    assert!(within_limits(
        10.0,
        Some(50.0),
        Some(10.0),
    ));
    assert!(!within_limits(10.1, Some(50.0), Some(10.0)));
    assert!(within_limits(1_000.0, None, None));
}

#[test]
fn power_tier_ordinals_round_trip() {
    for n in 1..=5u8 {
        let tier = PowerTier::from_ordinal(n).unwrap();
        assert_eq!(tier.ordinal(), n);
    }
    assert!(PowerTier::from_ordinal(0).is_none());
    assert!(PowerTier::from_ordinal(6).is_none());
}
