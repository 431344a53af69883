use std::cmp::Ordering;

use crate::catalog::card::Card;
use crate::types::request::Theme;

/// Compose the catalog filter string for a build: format legality, identity
/// clause from the leader's effective colors, structural exclusions, and a
/// theme predicate when one applies.
pub fn pool_query(leader: &Card, theme: Theme) -> String {
    let identity: String = leader
        .effective_colors()
        .iter()
        .map(|c| c.symbol().to_lowercase())
        .collect();

    let mut parts = vec![
        "legal:commander".to_string(),
        "game:paper".to_string(),
        format!("id:{identity}"),
        "-type:scheme".to_string(),
        "-type:plane".to_string(),
        "-type:vanguard".to_string(),
        "-type:conspiracy".to_string(),
    ];

    match theme.query_fragment() {
        Some(fragment) => parts.push(fragment.to_string()),
        None => {
            let derived = derive_theme_fragments(leader, 3);
            if !derived.is_empty() {
                parts.push(format!("({})", derived.join(" OR ")));
            }
        }
    }

    parts.join(" ")
}

struct SynergyRule {
    patterns: &'static [&'static str],
    query: &'static str,
    weight: f32,
}

/// Phrase-to-query rules for deriving a theme from a leader's own text when
/// the caller picks no theme. Order is part of the tie-break.
const SYNERGY_RULES: &[SynergyRule] = &[
    SynergyRule { patterns: &["enchant", "aura"], query: "type:enchantment", weight: 0.0 },
    SynergyRule { patterns: &["artifact", "treasure"], query: "type:artifact", weight: 0.0 },
    SynergyRule { patterns: &["+1/+1 counter", "proliferate"], query: "oracle:\"+1/+1 counter\" OR keyword:proliferate", weight: 0.0 },
    SynergyRule { patterns: &["flicker", "blink", "exile and return"], query: "(flicker OR blink)", weight: 0.0 },
    SynergyRule { patterns: &["create", "token"], query: "oracle:\"create a token\"", weight: 0.0 },
    SynergyRule { patterns: &["sacrifice", "dies"], query: "oracle:sacrifice", weight: 0.0 },
    SynergyRule { patterns: &["draw a card", "draws a card"], query: "oracle:\"draw a card\"", weight: 0.0 },
    SynergyRule { patterns: &["landfall", "land enters"], query: "keyword:landfall OR oracle:\"land enters\"", weight: 0.0 },
    SynergyRule { patterns: &["treasure", "blood token", "food token", "clue token", "map token"], query: "oracle:(treasure OR blood OR food OR clue OR map)", weight: 1.0 },
    SynergyRule { patterns: &["additional land"], query: "oracle:\"additional land\"", weight: 0.0 },
    SynergyRule { patterns: &["instant", "sorcery"], query: "(type:instant OR type:sorcery)", weight: 0.0 },
    SynergyRule { patterns: &["graveyard"], query: "oracle:graveyard", weight: 0.0 },
    SynergyRule { patterns: &["return target", "from your graveyard"], query: "oracle:\"return target creature card from your graveyard\"", weight: 0.0 },
    SynergyRule { patterns: &["equipment", "equip "], query: "type:equipment", weight: 0.0 },
    SynergyRule { patterns: &["vehicle"], query: "type:vehicle", weight: 0.0 },
    SynergyRule { patterns: &["gain life", "lifelink"], query: "(oracle:\"gain life\" OR keyword:lifelink)", weight: 0.0 },
    SynergyRule { patterns: &["storm"], query: "keyword:storm", weight: 0.0 },
    SynergyRule { patterns: &["investigate", "clue", "food"], query: "oracle:(investigate OR clue OR food)", weight: 1.0 },
    SynergyRule { patterns: &["hexproof", "ward", "indestructible", "shield counter"], query: "oracle:(hexproof OR ward OR indestructible OR \"shield counter\")", weight: 0.0 },
    SynergyRule { patterns: &["copy target", "copy a spell", "copy that spell"], query: "oracle:\"copy target\"", weight: 0.0 },
    SynergyRule { patterns: &["power", "greater power"], query: "oracle:power type:creature", weight: 0.0 },
    SynergyRule { patterns: &["initiative", "venture into the dungeon"], query: "oracle:(initiative OR dungeon)", weight: 1.0 },
    SynergyRule { patterns: &["cleric", "rogue", "warrior", "wizard"], query: "oracle:(party OR cleric OR rogue OR warrior OR wizard)", weight: 0.5 },
    SynergyRule { patterns: &["convoke"], query: "keyword:convoke", weight: 0.0 },
    SynergyRule { patterns: &["discover", "explore"], query: "oracle:(discover OR explore)", weight: 0.0 },
    SynergyRule { patterns: &["servo", "thopter", "construct"], query: "oracle:(servo OR thopter OR construct) type:artifact", weight: 0.0 },
    SynergyRule { patterns: &["attack", "attacks", "melee", "goad"], query: "oracle:(attacks OR melee OR goad OR exalted OR extra combat)", weight: 2.0 },
    SynergyRule { patterns: &["assassin", "rogue"], query: "type:creature (assassin OR rogue)", weight: 1.5 },
    SynergyRule { patterns: &["tapped and attacking"], query: "oracle:\"create a token tapped and attacking\"", weight: 1.2 },
    SynergyRule { patterns: &["double strike"], query: "keyword:\"double strike\"", weight: 1.0 },
];

/// Score every synergy rule against the leader's type line and ability text
/// and return the top `max` query fragments. Type-line hits weigh double;
/// the rule index breaks ties so the result is deterministic.
pub fn derive_theme_fragments(leader: &Card, max: usize) -> Vec<&'static str> {
    let type_text = leader.type_line.to_lowercase();
    let oracle_text = leader.oracle_text.to_lowercase();
    let combined = format!("{type_text} {oracle_text}");

    let mut scored: Vec<(f32, usize, &'static str)> = Vec::new();
    for (idx, rule) in SYNERGY_RULES.iter().enumerate() {
        let hits_type = rule.patterns.iter().filter(|p| type_text.contains(*p)).count();
        let hits_oracle = rule.patterns.iter().filter(|p| oracle_text.contains(*p)).count();
        let hits_total = rule.patterns.iter().filter(|p| combined.contains(*p)).count();
        if hits_total == 0 {
            continue;
        }
        let score = hits_type as f32 * 2.0
            + hits_oracle as f32
            + rule.weight
            + hits_total as f32 * 0.25
            - idx as f32 * 0.001;
        scored.push((score, idx, rule.query));
    }

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });

    scored.into_iter().take(max).map(|(_, _, q)| q).collect()
}
