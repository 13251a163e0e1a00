pub mod card;
pub mod check;
pub mod deck;
pub mod read;
pub mod resolve;

use std::path::Path;

use tk_reading::{DataSource, EmbeddedSource, JsonDirSource, ReaderConfig, TarokkaReader};

/// Reader over either a data directory or the embedded data set.
pub type Reader = TarokkaReader<Box<dyn DataSource>>;

/// Open a reader for `data`, falling back to the embedded data set.
fn open_reader(data: Option<&Path>, config: ReaderConfig) -> Reader {
    let source: Box<dyn DataSource> = match data {
        Some(dir) => Box::new(JsonDirSource::new(dir)),
        None => Box::new(EmbeddedSource),
    };
    tracing::debug!(source = %source.describe(), "opening reader");
    TarokkaReader::with_config(source, config)
}

/// Truncate long text for table cells.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else if text.is_empty() {
        "—".to_string()
    } else {
        text.to_string()
    }
}
