//! Export projections of a finished build: pure string/value renderings,
//! no I/O.

use serde::{Deserialize, Serialize};

use crate::catalog::card::Card;
use crate::types::outcome::BuildOutcome;
use crate::types::request::BuildRequest;

/// Name/quantity pairs over the final list, first-appearance order.
/// Repeated names (basics) aggregate.
fn quantities(deck: &[Card]) -> Vec<(String, usize)> {
    let mut out: Vec<(String, usize)> = Vec::new();
    for card in deck {
        match out.iter_mut().find(|(name, _)| *name == card.name) {
            Some((_, qty)) => *qty += 1,
            None => out.push((card.name.clone(), 1)),
        }
    }
    out
}

/// Plain-text list with header comments and the leader on top.
pub fn to_plain_text(request: &BuildRequest, outcome: &BuildOutcome) -> String {
    let mut lines = vec![
        format!("# Deck list for {}", outcome.leader.name),
        format!(
            "# Theme: {}, Power: {}, Budget: {}",
            request.theme.label(),
            request.power.ordinal(),
            request.budget.label()
        ),
        format!("1 {} (Commander)", outcome.leader.name),
    ];
    for (name, qty) in quantities(&outcome.deck) {
        lines.push(format!("{qty} {name}"));
    }
    lines.join("\n")
}

/// CSV rendering: one quoted cell per line, embedded quotes doubled.
pub fn to_csv(request: &BuildRequest, outcome: &BuildOutcome) -> String {
    to_plain_text(request, outcome)
        .lines()
        .map(|line| format!("\"{}\"", line.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Deck-import dialect: the leader tagged `*CMDR*`, then quantity-name
/// lines with no commentary.
pub fn to_import_format(outcome: &BuildOutcome) -> String {
    let mut lines = vec![format!("1 {} *CMDR*", outcome.leader.name)];
    for (name, qty) in quantities(&outcome.deck) {
        lines.push(format!("{qty} {name}"));
    }
    lines.join("\n")
}

/// Structured export payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPayload {
    pub commander: String,
    pub mainboard: Vec<ExportEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub name: String,
    pub count: usize,
}

pub fn export_payload(outcome: &BuildOutcome) -> ExportPayload {
    ExportPayload {
        commander: outcome.leader.name.clone(),
        mainboard: quantities(&outcome.deck)
            .into_iter()
            .map(|(name, count)| ExportEntry { name, count })
            .collect(),
    }
}
