use chrono::Utc;

use decklist_core::catalog::{Card, CardId, Color, Prices};
use decklist_core::export::{export_payload, to_csv, to_import_format, to_plain_text};
use decklist_core::policy::{BudgetTier, PowerTier, RoleTargets};
use decklist_core::selection::state::RoleCounts;
use decklist_core::types::{
    group_sections, BuildOutcome, BuildReport, BuildRequest, PoolFingerprint, RerankStatus,
    RoleSummary, Theme,
};

fn make_card(id: &str, name: &str, type_line: &str) -> Card {
    Card {
        id: CardId::new(id),
        name: name.to_string(),
        type_line: type_line.to_string(),
        oracle_text: String::new(),
        mana_cost: None,
        prices: Prices::default(),
        color_identity: vec![Color::Green],
    }
}

fn fixture() -> (BuildRequest, BuildOutcome) {
    let leader = make_card("leader", "Tolsimir, Friend to Wolves", "Legendary Creature — Elf Scout");
    let deck = vec![
        make_card("ring", "Sol Ring", "Artifact"),
        make_card("forest-0", "Forest", "Basic Land — Forest"),
        make_card("forest-1", "Forest", "Basic Land — Forest"),
        make_card("wolf", "Silverback Wolf", "Creature — Wolf"),
    ];

    let targets = RoleTargets::for_tier(PowerTier::Core, 37);
    let outcome = BuildOutcome {
        leader: leader.clone(),
        sections: group_sections(&deck),
        role_summary: RoleSummary::from_counts(&targets, &RoleCounts::default()),
        suggestions: Vec::new(),
        report: BuildReport {
            pool_considered: 4,
            pool_eligible: 4,
            total_spent: 0.0,
            remaining_budget: Some(50.0),
            high_impact_selected: 0,
            pool_fingerprint: PoolFingerprint::from_pool(&deck),
            generated_at: Utc::now(),
            rerank: RerankStatus::NotRequested,
        },
        deck,
    };
    let request = BuildRequest::new(leader, Theme::Tokens, PowerTier::Core, BudgetTier::UpTo50);
    (request, outcome)
}

#[test]
fn plain_text_export_matches_golden_shape() {
    let (request, outcome) = fixture();
    let text = to_plain_text(&request, &outcome);

    const EXPECTED: &str = "\
# Deck list for Tolsimir, Friend to Wolves
# Theme: tokens, Power: 2, Budget: 0-50
1 Tolsimir, Friend to Wolves (Commander)
1 Sol Ring
2 Forest
1 Silverback Wolf";

    assert_eq!(text, EXPECTED, "plain text export drifted from the golden shape");
}

#[test]
fn csv_export_quotes_every_line() {
    let (request, outcome) = fixture();
    let csv = to_csv(&request, &outcome);

    for line in csv.lines() {
        assert!(
            line.starts_with('"') && line.ends_with('"'),
            "every CSV line must be quoted: {line}"
        );
    }
    assert!(csv.contains("\"2 Forest\""));
}

#[test]
fn import_format_tags_the_leader() {
    let (_, outcome) = fixture();
    let text = to_import_format(&outcome);

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("1 Tolsimir, Friend to Wolves *CMDR*"));
    assert_eq!(lines.next(), Some("1 Sol Ring"));
    assert_eq!(lines.next(), Some("2 Forest"));
    assert_eq!(lines.next(), Some("1 Silverback Wolf"));
    assert_eq!(lines.next(), None);
}

#[test]
fn structured_payload_round_trips() {
    let (_, outcome) = fixture();
    let payload = export_payload(&outcome);

    assert_eq!(payload.commander, "Tolsimir, Friend to Wolves");
    assert_eq!(payload.mainboard.len(), 3);
    assert_eq!(payload.mainboard[1].name, "Forest");
    assert_eq!(payload.mainboard[1].count, 2);

    let json = serde_json::to_string_pretty(&payload).unwrap();
    let back: decklist_core::export::ExportPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(back, payload);
}

#[test]
fn sections_group_independently_and_aggregate_basics() {
    let (_, outcome) = fixture();

    let labels: Vec<&str> = outcome.sections.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Creatures", "Artifacts", "Lands"]);

    let lands = outcome
        .sections
        .iter()
        .find(|s| s.label == "Lands")
        .unwrap();
    assert_eq!(lands.entries.len(), 1);
    assert_eq!(lands.entries[0].qty, 2, "repeated basics aggregate by quantity");
}
