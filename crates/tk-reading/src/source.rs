//! Where deck and configuration documents come from.
//!
//! The engine never decides on a storage format itself. It asks a
//! [`DataSource`] for the raw documents and validates what it gets back.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::deck::DeckSource;
use crate::error::{LoadError, LoadResult};
use crate::tables::ReadingConfig;

/// File name of the deck document inside a data directory.
pub const DECK_FILE: &str = "tarokka-deck.json";
/// File name of the configuration document inside a data directory.
pub const CONFIG_FILE: &str = "reading-config.json";

const EMBEDDED_DECK: &str = include_str!("../data/tarokka-deck.json");
const EMBEDDED_CONFIG: &str = include_str!("../data/reading-config.json");

/// Provider of raw deck and configuration documents.
pub trait DataSource {
    /// Human-readable description used in log events.
    fn describe(&self) -> String;

    /// Read the deck document.
    fn load_deck_source(&self) -> LoadResult<DeckSource>;

    /// Read the configuration document (not yet validated).
    fn load_config_source(&self) -> LoadResult<ReadingConfig>;
}

macro_rules! forward_data_source {
    ($ptr:ident) => {
        impl<S: DataSource + ?Sized> DataSource for $ptr<S> {
            fn describe(&self) -> String {
                (**self).describe()
            }

            fn load_deck_source(&self) -> LoadResult<DeckSource> {
                (**self).load_deck_source()
            }

            fn load_config_source(&self) -> LoadResult<ReadingConfig> {
                (**self).load_config_source()
            }
        }
    };
}

forward_data_source!(Arc);
forward_data_source!(Box);

/// JSON documents in a directory: [`DECK_FILE`] and [`CONFIG_FILE`].
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    /// Read from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&text, path)
}

fn parse_json<T: DeserializeOwned>(text: &str, label: &Path) -> LoadResult<T> {
    serde_json::from_str(text).map_err(|source| LoadError::Parse {
        path: label.to_path_buf(),
        source,
    })
}

impl DataSource for JsonDirSource {
    fn describe(&self) -> String {
        self.dir.display().to_string()
    }

    fn load_deck_source(&self) -> LoadResult<DeckSource> {
        read_json(&self.dir.join(DECK_FILE))
    }

    fn load_config_source(&self) -> LoadResult<ReadingConfig> {
        read_json(&self.dir.join(CONFIG_FILE))
    }
}

/// The data set bundled with the library.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl DataSource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded data".to_string()
    }

    fn load_deck_source(&self) -> LoadResult<DeckSource> {
        parse_json(EMBEDDED_DECK, Path::new(DECK_FILE))
    }

    fn load_config_source(&self) -> LoadResult<ReadingConfig> {
        parse_json(EMBEDDED_CONFIG, Path::new(CONFIG_FILE))
    }
}

/// Documents already held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    deck: DeckSource,
    config: ReadingConfig,
}

impl StaticSource {
    /// Serve clones of the given documents.
    pub fn new(deck: DeckSource, config: ReadingConfig) -> Self {
        Self { deck, config }
    }
}

impl DataSource for StaticSource {
    fn describe(&self) -> String {
        "in-memory data".to_string()
    }

    fn load_deck_source(&self) -> LoadResult<DeckSource> {
        Ok(self.deck.clone())
    }

    fn load_config_source(&self) -> LoadResult<ReadingConfig> {
        Ok(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use tempfile::TempDir;

    #[test]
    fn embedded_documents_parse() {
        let deck = EmbeddedSource.load_deck_source().unwrap();
        assert_eq!(deck.card_count(), 54);
        assert_eq!(deck.high_deck.len(), 14);
        let config = EmbeddedSource.load_config_source().unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn embedded_config_references_existing_cards() {
        let deck = Deck::from_source(EmbeddedSource.load_deck_source().unwrap()).unwrap();
        let config = EmbeddedSource.load_config_source().unwrap().validate().unwrap();
        for (category, card_id) in config.referenced_cards() {
            assert!(deck.contains(card_id), "{category}: unknown card {card_id}");
        }
    }

    #[test]
    fn json_dir_reads_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DECK_FILE), EMBEDDED_DECK).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), EMBEDDED_CONFIG).unwrap();

        let source = JsonDirSource::new(dir.path());
        let deck = Deck::from_source(source.load_deck_source().unwrap()).unwrap();
        assert_eq!(deck.len(), 54);
        assert!(source.load_config_source().is_ok());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = JsonDirSource::new(dir.path())
            .load_deck_source()
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { ref path, .. } if path.ends_with(DECK_FILE)));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        let err = JsonDirSource::new(dir.path())
            .load_config_source()
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
