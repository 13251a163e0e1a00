//! Error types for the reading engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for deck and configuration loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for reader lookups.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors raised while loading the deck or the reading configuration.
///
/// A load error is always fatal for the operation that triggered it: no
/// reading is produced from a malformed data set.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The source document could not be parsed.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Path (or label) of the document that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The combined card groups do not hold the required number of cards.
    #[error("deck must contain exactly {expected} cards, found {actual}")]
    CardCount {
        /// Required card count.
        expected: usize,
        /// Number of cards actually present.
        actual: usize,
    },

    /// Two cards in the deck share an id.
    #[error("duplicate card id: \"{0}\"")]
    DuplicateCard(String),

    /// The reading configuration is structurally invalid.
    #[error("invalid reading config: {0}")]
    InvalidConfig(String),
}

/// An unknown category key requested by a caller.
///
/// Never returned as an `Err` by resolution; it is rendered into the
/// `error` field of the returned outcome instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// The key does not name one of the three artifacts.
    #[error("unknown artifact: {0}")]
    UnknownArtifact(String),

    /// The key does not name any reading category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Errors raised by reader lookups.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// Loading the deck or configuration failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// No card with the given id exists in the deck.
    #[error("card not found: \"{0}\"")]
    CardNotFound(String),
}
