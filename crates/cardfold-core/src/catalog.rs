//! Static card catalog
//!
//! Cards are loaded once from JSON at startup and are immutable for the
//! lifetime of the session. The JSON uses camelCase field names
//! (`coverImage`, `leftImage`, ...).

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Unique identifier for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card_{}", self.0)
    }
}

/// How a card reveals its inside artwork.
///
/// The variant set is closed on purpose: the transform calculator matches
/// exhaustively, so an unknown type in the catalog is a load-time error
/// rather than a silent fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Two side-by-side inside panels
    #[default]
    Fold,
    /// Panels stacked vertically
    FoldDown,
    /// Single overlay image pair, no pan/zoom
    Popup,
    /// Scales up on interaction, no inside content
    NoOpen,
}

impl CardKind {
    /// Whether an open card of this kind supports pan and zoom
    pub fn pannable(&self) -> bool {
        matches!(self, CardKind::Fold)
    }
}

/// Which edge the opened spread is anchored to when it overflows the
/// viewport. Determines the initial pan bias on open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpensFrom {
    #[default]
    Left,
    Right,
}

/// A single greeting card record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: CardKind,
    #[serde(default)]
    pub opens: OpensFrom,
    pub cover_image: String,
    #[serde(default)]
    pub left_image: Option<String>,
    #[serde(default)]
    pub right_image: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
}

/// Ordered, immutable card list
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Build a catalog from an already-deserialized card list
    pub fn new(cards: Vec<Card>) -> CardResult<Self> {
        if cards.is_empty() {
            return Err(CardError::EmptyCatalog);
        }
        Ok(Self { cards })
    }

    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> CardResult<Self> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// Load a catalog from a JSON file on disk
    pub fn load(path: &std::path::Path) -> CardResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        // The embedded catalog is known-good; a parse failure here is a
        // build artifact problem, not a runtime condition.
        Self::from_json(include_str!("../assets/cards.json"))
            .unwrap_or_else(|e| panic!("builtin catalog is invalid: {e}"))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Position of a card id in the ordered list
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// The middle card, used whenever no valid persisted index exists
    pub fn default_index(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"id": 1, "name": "Birthday", "type": "fold", "coverImage": "a.png",
         "leftImage": "b.png", "rightImage": "c.png", "occasion": "Birthday 2024"},
        {"id": 2, "name": "Pop", "type": "popup", "opens": "right",
         "coverImage": "d.png", "rightImage": "e.png"},
        {"id": 3, "name": "Plain", "type": "no_open", "coverImage": "f.png"}
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0).unwrap().kind, CardKind::Fold);
        assert_eq!(catalog.get(1).unwrap().opens, OpensFrom::Right);
        assert_eq!(catalog.get(2).unwrap().kind, CardKind::NoOpen);
        assert_eq!(catalog.get(2).unwrap().left_image, None);
    }

    #[test]
    fn test_defaults() {
        let json = r#"[{"id": 9, "name": "Bare", "coverImage": "x.png"}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let card = catalog.get(0).unwrap();
        assert_eq!(card.kind, CardKind::Fold);
        assert_eq!(card.opens, OpensFrom::Left);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"[{"id": 1, "name": "Bad", "type": "origami", "coverImage": "x.png"}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CardError::Serialization(_))
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(Catalog::from_json("[]"), Err(CardError::EmptyCatalog)));
    }

    #[test]
    fn test_position_and_default_index() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.position_of(CardId(2)), Some(1));
        assert_eq!(catalog.position_of(CardId(42)), None);
        assert_eq!(catalog.default_index(), 1);
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
    }
}
