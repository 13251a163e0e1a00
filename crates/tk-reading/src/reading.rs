//! The result of a full reading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::deck::{Card, Suit};
use crate::resolve::{AllyOutcome, LocationOutcome, Outcome};

/// Draw protocol version. Bumped whenever slot order or the shuffle changes,
/// since either would make a saved seed replay into a different reading.
pub const FORMAT_VERSION: u32 = 1;

/// The parts of a card a reading records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSnapshot {
    /// Card id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Suit.
    pub suit: Suit,
    /// Rank.
    pub rank: String,
    /// Description shown with the slot.
    pub description: String,
}

impl From<&Card> for CardSnapshot {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id.clone(),
            name: card.name.clone(),
            suit: card.suit,
            rank: card.rank.clone(),
            description: card.description.clone(),
        }
    }
}

/// One drawn card and what it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot<O> {
    /// The drawn card.
    pub card: CardSnapshot,
    /// The resolved outcome.
    pub outcome: O,
}

/// The five slots of a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingCards {
    /// Position 0.
    pub sunsword: Slot<LocationOutcome>,
    /// Position 1.
    pub holy_symbol: Slot<LocationOutcome>,
    /// Position 2.
    pub tome: Slot<LocationOutcome>,
    /// Position 3.
    pub ally: Slot<AllyOutcome>,
    /// Position 4.
    pub enemy: Slot<LocationOutcome>,
}

impl ReadingCards {
    /// The card drawn for a category.
    pub fn card(&self, category: Category) -> &CardSnapshot {
        match category {
            Category::Sunsword => &self.sunsword.card,
            Category::HolySymbol => &self.holy_symbol.card,
            Category::Tome => &self.tome.card,
            Category::Ally => &self.ally.card,
            Category::Enemy => &self.enemy.card,
        }
    }

    /// The outcome of a category.
    pub fn outcome(&self, category: Category) -> Outcome {
        match category {
            Category::Sunsword => self.sunsword.outcome.clone().into(),
            Category::HolySymbol => self.holy_symbol.outcome.clone().into(),
            Category::Tome => self.tome.outcome.clone().into(),
            Category::Ally => self.ally.outcome.clone().into(),
            Category::Enemy => self.enemy.outcome.clone().into(),
        }
    }

    /// Drawn card ids in draw order.
    pub fn card_ids(&self) -> [&str; 5] {
        Category::ALL.map(|c| self.card(c).id.as_str())
    }
}

/// A complete five-card reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Draw protocol the reading was produced with.
    pub format_version: u32,
    /// Seed the deck was shuffled with.
    pub seed: u64,
    /// When the reading was generated.
    pub timestamp: DateTime<Utc>,
    /// The five slots.
    pub cards: ReadingCards,
}

impl Reading {
    /// Number of slots that fell back to a default outcome.
    pub fn fallback_count(&self) -> usize {
        Category::ALL
            .into_iter()
            .filter(|c| self.cards.outcome(*c).is_fallback())
            .count()
    }
}
