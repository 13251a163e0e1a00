//! The 54-card Tarokka deck.
//!
//! Source documents group cards by suit (`highDeck`, `swords`, `coins`,
//! `glyphs`, `stars`). [`Deck::from_source`] concatenates the groups in that
//! order and enforces the deck invariants: exactly 54 cards, all ids unique.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{LoadError, LoadResult};

/// Number of cards in a complete deck.
pub const DECK_SIZE: usize = 54;

/// The suit a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    /// The fourteen major cards.
    HighDeck,
    /// Swords (warriors).
    Swords,
    /// Coins (rogues).
    Coins,
    /// Glyphs (priests).
    Glyphs,
    /// Stars (wizards).
    Stars,
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HighDeck => write!(f, "High Deck"),
            Self::Swords => write!(f, "Swords"),
            Self::Coins => write!(f, "Coins"),
            Self::Glyphs => write!(f, "Glyphs"),
            Self::Stars => write!(f, "Stars"),
        }
    }
}

/// Major (high deck) or minor (common deck) card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCategory {
    /// A high deck card.
    Major,
    /// A numbered or master card of one of the four suits.
    Minor,
}

/// Fortune-telling texts attached to a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FortuneTelling {
    /// General meaning.
    pub general: String,
    /// Upright/light aspect.
    pub light: String,
    /// Reversed/dark aspect.
    pub dark: String,
    /// Advice for the querent.
    pub advice: String,
}

/// A single card definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier (e.g. `swords_avenger`).
    pub id: String,
    /// Suit.
    pub suit: Suit,
    /// Display name.
    pub name: String,
    /// Rank within the suit (`"1"`..`"9"`, `"master"`, or the high deck name).
    #[serde(default, deserialize_with = "deserialize_rank")]
    pub rank: String,
    /// Major or minor.
    pub category: CardCategory,
    /// Card description.
    #[serde(default)]
    pub description: String,
    /// Fortune-telling texts.
    #[serde(default)]
    pub fortune_telling: FortuneTelling,
}

/// Ranks appear as strings or bare numbers in source data.
fn deserialize_rank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rank {
        Text(String),
        Number(i64),
    }

    Ok(match Rank::deserialize(deserializer)? {
        Rank::Text(s) => s,
        Rank::Number(n) => n.to_string(),
    })
}

/// Raw deck document: five named card groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckSource {
    /// High deck (major) cards.
    pub high_deck: Vec<Card>,
    /// Swords.
    pub swords: Vec<Card>,
    /// Coins.
    pub coins: Vec<Card>,
    /// Glyphs.
    pub glyphs: Vec<Card>,
    /// Stars.
    pub stars: Vec<Card>,
}

impl DeckSource {
    /// Total number of cards across all groups.
    pub fn card_count(&self) -> usize {
        self.high_deck.len()
            + self.swords.len()
            + self.coins.len()
            + self.glyphs.len()
            + self.stars.len()
    }
}

/// A validated deck of exactly [`DECK_SIZE`] unique cards, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from a source document.
    ///
    /// Groups are concatenated in the order high deck, swords, coins,
    /// glyphs, stars.
    pub fn from_source(source: DeckSource) -> LoadResult<Self> {
        let DeckSource {
            high_deck,
            swords,
            coins,
            glyphs,
            stars,
        } = source;

        let cards: Vec<Card> = [high_deck, swords, coins, glyphs, stars]
            .into_iter()
            .flatten()
            .collect();

        Self::from_cards(cards)
    }

    /// Build a deck from an ordered card list.
    pub fn from_cards(cards: Vec<Card>) -> LoadResult<Self> {
        if cards.len() != DECK_SIZE {
            return Err(LoadError::CardCount {
                expected: DECK_SIZE,
                actual: cards.len(),
            });
        }

        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.id.as_str()) {
                return Err(LoadError::DuplicateCard(card.id.clone()));
            }
        }

        Ok(Self { cards })
    }

    /// All cards in deck order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards (always [`DECK_SIZE`]).
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty (never true for a validated deck).
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Find a card by id.
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Whether a card with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Cards of one suit, in deck order.
    pub fn suit(&self, suit: Suit) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.suit == suit)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn card(id: &str, suit: Suit) -> Card {
        Card {
            id: id.to_string(),
            suit,
            name: id.to_string(),
            rank: String::new(),
            category: if suit == Suit::HighDeck {
                CardCategory::Major
            } else {
                CardCategory::Minor
            },
            description: format!("{id} description"),
            fortune_telling: FortuneTelling::default(),
        }
    }

    /// A structurally valid 54-card source with synthetic ids.
    pub(crate) fn sample_source() -> DeckSource {
        let group = |suit: Suit, prefix: &str, n: usize| -> Vec<Card> {
            (1..=n).map(|i| card(&format!("{prefix}_{i}"), suit)).collect()
        };
        DeckSource {
            high_deck: group(Suit::HighDeck, "high_deck", 14),
            swords: group(Suit::Swords, "swords", 10),
            coins: group(Suit::Coins, "coins", 10),
            glyphs: group(Suit::Glyphs, "glyphs", 10),
            stars: group(Suit::Stars, "stars", 10),
        }
    }

    #[test]
    fn valid_source_builds_deck() {
        let deck = Deck::from_source(sample_source()).unwrap();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.cards()[0].id, "high_deck_1");
        assert_eq!(deck.cards()[14].id, "swords_1");
        assert_eq!(deck.cards()[53].id, "stars_10");
        assert_eq!(deck.suit(Suit::HighDeck).count(), 14);
        assert_eq!(deck.suit(Suit::Glyphs).count(), 10);
    }

    #[test]
    fn short_deck_rejected() {
        let mut source = sample_source();
        source.stars.pop();
        let err = Deck::from_source(source).unwrap_err();
        assert!(matches!(
            err,
            LoadError::CardCount {
                expected: 54,
                actual: 53
            }
        ));
    }

    #[test]
    fn long_deck_rejected() {
        let mut source = sample_source();
        source.coins.push(card("coins_extra", Suit::Coins));
        assert!(matches!(
            Deck::from_source(source),
            Err(LoadError::CardCount { actual: 55, .. })
        ));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut source = sample_source();
        source.stars[9].id = "swords_1".to_string();
        let err = Deck::from_source(source).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateCard(id) if id == "swords_1"));
    }

    #[test]
    fn lookup_by_id() {
        let deck = Deck::from_source(sample_source()).unwrap();
        assert_eq!(deck.get("glyphs_3").unwrap().suit, Suit::Glyphs);
        assert!(deck.contains("high_deck_14"));
        assert!(deck.get("nope").is_none());
    }

    #[test]
    fn card_json_shape() {
        let json = r#"{
            "id": "swords_avenger",
            "suit": "swords",
            "name": "Avenger",
            "rank": 1,
            "category": "minor",
            "description": "One of Swords",
            "fortuneTelling": { "general": "Justice", "advice": "Act" }
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.rank, "1");
        assert_eq!(card.suit, Suit::Swords);
        assert_eq!(card.category, CardCategory::Minor);
        assert_eq!(card.fortune_telling.general, "Justice");
        assert!(card.fortune_telling.dark.is_empty());

        let back = serde_json::to_value(&card).unwrap();
        assert_eq!(back["fortuneTelling"]["advice"], "Act");
        assert_eq!(back["suit"], "swords");
    }

    #[test]
    fn suit_display() {
        assert_eq!(Suit::HighDeck.to_string(), "High Deck");
        assert_eq!(Suit::Stars.to_string(), "Stars");
    }
}
