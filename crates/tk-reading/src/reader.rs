//! Full readings: shuffle, draw five, resolve each slot.
//!
//! Positions 0 through 4 of the shuffled deck are bound to Sunsword, Holy
//! Symbol, Tome, Ally and Enemy, in that order. That binding together with
//! the shuffle is what lets a saved seed reproduce a reading; see
//! [`FORMAT_VERSION`](crate::reading::FORMAT_VERSION).

use std::sync::Arc;

use chrono::Utc;

use crate::category::{ArtifactKind, Category};
use crate::config::{ReaderConfig, TomeDescription};
use crate::deck::{Card, Deck};
use crate::error::{LoadError, LoadResult, ReadingError, ReadingResult};
use crate::loader::DataCache;
use crate::reading::{CardSnapshot, FORMAT_VERSION, Reading, ReadingCards, Slot};
use crate::resolve::{
    Outcome, resolve_ally, resolve_artifact, resolve_enemy_location, resolve_key,
};
use crate::rng::seed_from_clock;
use crate::shuffle::shuffle;
use crate::source::{DataSource, EmbeddedSource};
use crate::tables::ReadingConfig;

/// Long-lived reader owning the deck and configuration caches.
#[derive(Debug)]
pub struct TarokkaReader<S = EmbeddedSource> {
    cache: DataCache<S>,
    config: ReaderConfig,
}

impl TarokkaReader<EmbeddedSource> {
    /// Reader over the bundled data set.
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }
}

impl<S: DataSource> TarokkaReader<S> {
    /// Create a reader with default options.
    pub fn new(source: S) -> Self {
        Self::with_config(source, ReaderConfig::default())
    }

    /// Create a reader with explicit options.
    pub fn with_config(source: S, config: ReaderConfig) -> Self {
        Self {
            cache: DataCache::new(source),
            config,
        }
    }

    /// Reader options.
    pub fn reader_config(&self) -> &ReaderConfig {
        &self.config
    }

    /// The validated deck (loaded on first use).
    pub fn deck(&self) -> LoadResult<Arc<Deck>> {
        self.cache.load_deck()
    }

    /// The validated reading configuration (loaded on first use).
    pub fn reading_config(&self) -> LoadResult<Arc<ReadingConfig>> {
        self.cache.load_config()
    }

    /// Perform a full five-card reading.
    ///
    /// `None` seeds from the clock; the seed actually used is recorded on the
    /// returned [`Reading`]. Load failures abort before anything is drawn.
    pub fn perform_full_reading(&self, seed: Option<u64>) -> LoadResult<Reading> {
        let seed = seed.unwrap_or_else(seed_from_clock);
        let deck = self.deck()?;
        let config = self.reading_config()?;

        let shuffled = shuffle(deck.cards(), seed);
        let [sunsword, holy_symbol, tome, ally, enemy, ..] = shuffled.as_slice() else {
            return Err(LoadError::CardCount {
                expected: crate::deck::DECK_SIZE,
                actual: shuffled.len(),
            });
        };

        let artifact_slot = |card: &Card, artifact: ArtifactKind| Slot {
            card: CardSnapshot::from(card),
            outcome: resolve_artifact(&card.id, artifact, &config),
        };

        let mut tome_slot = artifact_slot(tome, ArtifactKind::Tome);
        if self.config.tome_description == TomeDescription::HolySymbolCard {
            tome_slot.card.description = holy_symbol.description.clone();
        }

        let cards = ReadingCards {
            sunsword: artifact_slot(sunsword, ArtifactKind::Sunsword),
            holy_symbol: artifact_slot(holy_symbol, ArtifactKind::HolySymbol),
            tome: tome_slot,
            ally: Slot {
                card: CardSnapshot::from(ally),
                outcome: resolve_ally(&ally.id, &config),
            },
            enemy: Slot {
                card: CardSnapshot::from(enemy),
                outcome: resolve_enemy_location(&enemy.id, &config),
            },
        };

        let reading = Reading {
            format_version: FORMAT_VERSION,
            seed,
            timestamp: Utc::now(),
            cards,
        };
        tracing::info!(
            seed,
            cards = ?reading.cards.card_ids(),
            fallbacks = reading.fallback_count(),
            "performed reading"
        );

        Ok(reading)
    }

    /// Look up a card by id, independent of any shuffle.
    pub fn get_card_by_id(&self, card_id: &str) -> ReadingResult<Card> {
        let deck = self.deck()?;
        deck.get(card_id)
            .cloned()
            .ok_or_else(|| ReadingError::CardNotFound(card_id.to_string()))
    }

    /// Resolve one category, given as an untrusted key, for one card id.
    ///
    /// The card id is not checked against the deck; unknown ids fall back
    /// like any other unmapped card.
    pub fn resolve_slot(&self, card_id: &str, key: &str) -> LoadResult<Outcome> {
        let config = self.reading_config()?;
        Ok(resolve_key(card_id, key, &config))
    }

    /// Resolve one typed category for one card id.
    pub fn resolve_category(&self, card_id: &str, category: Category) -> LoadResult<Outcome> {
        self.resolve_slot(card_id, category.key())
    }
}

/// The card at `index`, or `None` when the index is negative or past the end.
pub fn draw_card(cards: &[Card], index: i64) -> Option<&Card> {
    usize::try_from(index).ok().and_then(|i| cards.get(i))
}
