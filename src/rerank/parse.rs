use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PreferencePayload {
    cards: Vec<PreferenceEntry>,
}

#[derive(Debug, Deserialize)]
struct PreferenceEntry {
    name: String,
    #[serde(default)]
    #[allow(dead_code)]
    role: Option<String>,
}

/// Extract a preference ordering from the collaborator's free text.
///
/// Two shapes are tolerated: an embedded JSON object
/// `{"cards":[{"name":…,"role":…}]}`, or a newline-delimited numbered
/// list. Anything else yields an empty ordering: no usable signal, never
/// an error.
pub fn parse_preferences(text: &str) -> Vec<String> {
    if let Some(names) = parse_json_block(text) {
        return names;
    }
    parse_numbered_lines(text)
}

fn parse_json_block(text: &str) -> Option<Vec<String>> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    let payload: PreferencePayload = serde_json::from_str(&text[start..=end]).ok()?;
    let names: Vec<String> = payload
        .cards
        .into_iter()
        .map(|entry| entry.name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

/// Accept only lines that lead with a number (`1. Name`, `3) Name`,
/// `2x Name`, `1 Name`) and strip the numbering. Prose lines are noise.
fn parse_numbered_lines(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            continue;
        }
        // The count marker must sit directly against the digits, or a name
        // beginning with the marker letter would lose its first character.
        let mut rest = &line[digits..];
        for marker in [".", ")", "x", "X"] {
            if let Some(stripped) = rest.strip_prefix(marker) {
                rest = stripped;
                break;
            }
        }
        let name = rest.trim_start();
        if name.is_empty() {
            continue;
        }
        names.push(name.to_string());
    }
    names
}
