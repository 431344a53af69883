use serde::{Deserialize, Serialize};

/// Stable catalog identity of a single printing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        CardId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identity for the `n`-th copy of a card that may legally repeat.
    /// Copies share a display name but must stay distinguishable.
    pub fn copy(&self, n: usize) -> CardId {
        CardId(format!("{}-{}", self.0, n))
    }
}

/// The five color symbols plus colorless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
    #[serde(rename = "C")]
    Colorless,
}

impl Color {
    /// Canonical basic-land name producing this color.
    pub fn basic_land_name(self) -> &'static str {
        match self {
            Color::White => "Plains",
            Color::Blue => "Island",
            Color::Black => "Swamp",
            Color::Red => "Mountain",
            Color::Green => "Forest",
            Color::Colorless => "Wastes",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Color::White => "W",
            Color::Blue => "U",
            Color::Black => "B",
            Color::Red => "R",
            Color::Green => "G",
            Color::Colorless => "C",
        }
    }
}

/// Market quotations as reported by the catalog, in decimal strings.
/// Absent or unparseable quotations are simply unusable, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_foil: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eur: Option<String>,
}

impl Prices {
    pub fn quotations(&self) -> impl Iterator<Item = &str> {
        [&self.usd, &self.usd_foil, &self.eur]
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

/// One candidate item from the catalog pool.
///
/// Field names mirror the upstream catalog payload so a page of search
/// results deserializes directly into `Vec<Card>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub type_line: String,
    #[serde(default)]
    pub oracle_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub prices: Prices,
    #[serde(default)]
    pub color_identity: Vec<Color>,
}

impl Card {
    /// Case-insensitive type-line tag check. `keyword` must be lowercase.
    pub fn has_type(&self, keyword: &str) -> bool {
        self.type_line.to_lowercase().contains(keyword)
    }

    pub fn is_land(&self) -> bool {
        self.has_type("land")
    }

    pub fn is_basic_land(&self) -> bool {
        self.has_type("basic land")
    }

    /// Type line and ability text combined, lowercased: the haystack for
    /// every text-pattern policy rule.
    pub fn rules_text(&self) -> String {
        let mut text = String::with_capacity(self.type_line.len() + self.oracle_text.len() + 1);
        text.push_str(&self.type_line);
        text.push(' ');
        text.push_str(&self.oracle_text);
        text.to_lowercase()
    }

    /// Uniqueness key within a build: the display name, not the id, because
    /// variant printings share a name under distinct ids.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Color identity with the colorless marker substituted for an empty set.
    pub fn effective_colors(&self) -> Vec<Color> {
        if self.color_identity.is_empty() {
            vec![Color::Colorless]
        } else {
            self.color_identity.clone()
        }
    }

    /// True when this card is castable inside the given identity: zero-color
    /// cards are always legal, otherwise every symbol must be covered.
    pub fn fits_identity(&self, identity: &[Color]) -> bool {
        self.color_identity.is_empty()
            || self.color_identity.iter().all(|c| identity.contains(c))
    }
}

/// Structural deck categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creature,
    Artifact,
    Enchantment,
    Instant,
    Sorcery,
    Planeswalker,
    Land,
}

impl Category {
    pub const DISPLAY_ORDER: [Category; 7] = [
        Category::Creature,
        Category::Artifact,
        Category::Enchantment,
        Category::Instant,
        Category::Sorcery,
        Category::Planeswalker,
        Category::Land,
    ];

    /// Membership test. A card can satisfy more than one category (a land
    /// creature is both); `Artifact` deliberately excludes creatures so the
    /// artifact quota covers non-creature artifacts only.
    pub fn matches(self, card: &Card) -> bool {
        match self {
            Category::Creature => card.has_type("creature"),
            Category::Artifact => card.has_type("artifact") && !card.has_type("creature"),
            Category::Enchantment => card.has_type("enchantment"),
            Category::Instant => card.has_type("instant"),
            Category::Sorcery => card.has_type("sorcery"),
            Category::Planeswalker => card.has_type("planeswalker"),
            Category::Land => card.has_type("land"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Creature => "Creatures",
            Category::Artifact => "Artifacts",
            Category::Enchantment => "Enchantments",
            Category::Instant => "Instants",
            Category::Sorcery => "Sorceries",
            Category::Planeswalker => "Planeswalkers",
            Category::Land => "Lands",
        }
    }
}
