//! Deterministic Tarokka card readings.
//!
//! Shuffles the 54-card deck with a seeded generator, draws five cards and
//! resolves each against the configured outcome tables: where the Sunsword,
//! the Holy Symbol and the Tome lie, who the party's ally is, and where the
//! final confrontation takes place. The same seed always yields the same
//! reading.

pub mod category;
pub mod config;
pub mod deck;
pub mod error;
pub mod loader;
pub mod reader;
pub mod reading;
pub mod resolve;
pub mod rng;
pub mod shuffle;
pub mod source;
pub mod tables;

pub use category::{ArtifactKind, Category};
pub use config::{ReaderConfig, TomeDescription};
pub use deck::{Card, Deck, DeckSource, Suit};
pub use error::{CategoryError, LoadError, LoadResult, ReadingError, ReadingResult};
pub use reader::{TarokkaReader, draw_card};
pub use reading::Reading;
pub use resolve::Outcome;
pub use rng::{SeededRng, create_seeded_rng};
pub use shuffle::shuffle;
pub use source::{DataSource, EmbeddedSource, JsonDirSource, StaticSource};
pub use tables::ReadingConfig;
