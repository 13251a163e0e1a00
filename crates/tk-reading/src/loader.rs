//! Memoized, single-flight loading of the deck and configuration.
//!
//! Each document is read at most once per [`DataCache`]. Callers that race
//! the first load block on the in-flight read and share its result. A failed
//! load leaves the cache empty, so the next call reads the source again.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::deck::Deck;
use crate::error::LoadResult;
use crate::source::DataSource;
use crate::tables::ReadingConfig;

/// Lazily filled deck and configuration caches over one [`DataSource`].
#[derive(Debug)]
pub struct DataCache<S> {
    source: S,
    deck: OnceCell<Arc<Deck>>,
    config: OnceCell<Arc<ReadingConfig>>,
}

impl<S: DataSource> DataCache<S> {
    /// Create an empty cache over `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            deck: OnceCell::new(),
            config: OnceCell::new(),
        }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load and validate the deck, or return the cached one.
    pub fn load_deck(&self) -> LoadResult<Arc<Deck>> {
        self.deck
            .get_or_try_init(|| {
                let deck = self
                    .source
                    .load_deck_source()
                    .and_then(Deck::from_source)
                    .inspect_err(|e| {
                        tracing::warn!(
                            source = %self.source.describe(),
                            error = %e,
                            "deck load failed"
                        );
                    })?;
                tracing::debug!(
                    source = %self.source.describe(),
                    cards = deck.len(),
                    "loaded deck"
                );
                Ok(Arc::new(deck))
            })
            .cloned()
    }

    /// Load and validate the configuration, or return the cached one.
    pub fn load_config(&self) -> LoadResult<Arc<ReadingConfig>> {
        self.config
            .get_or_try_init(|| {
                let config = self
                    .source
                    .load_config_source()
                    .and_then(ReadingConfig::validate)
                    .inspect_err(|e| {
                        tracing::warn!(
                            source = %self.source.describe(),
                            error = %e,
                            "config load failed"
                        );
                    })?;
                tracing::debug!(
                    source = %self.source.describe(),
                    entries = config.entry_count(),
                    "loaded reading config"
                );
                Ok(Arc::new(config))
            })
            .cloned()
    }

    /// Whether the deck has been loaded.
    pub fn deck_loaded(&self) -> bool {
        self.deck.get().is_some()
    }

    /// Whether the configuration has been loaded.
    pub fn config_loaded(&self) -> bool {
        self.config.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::deck::{DeckSource, tests::sample_source};
    use crate::error::LoadError;
    use crate::tables::tests::sample_config;

    /// Counts reads; optionally fails the first `fail_first` deck reads.
    struct CountingSource {
        deck_reads: AtomicUsize,
        config_reads: AtomicUsize,
        fail_first: usize,
        delay: Duration,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                deck_reads: AtomicUsize::new(0),
                config_reads: AtomicUsize::new(0),
                fail_first: 0,
                delay: Duration::ZERO,
            }
        }
    }

    impl DataSource for CountingSource {
        fn describe(&self) -> String {
            "counting".to_string()
        }

        fn load_deck_source(&self) -> LoadResult<DeckSource> {
            let n = self.deck_reads.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(self.delay);
            if n < self.fail_first {
                let mut source = sample_source();
                source.swords.clear();
                return Ok(source);
            }
            Ok(sample_source())
        }

        fn load_config_source(&self) -> LoadResult<ReadingConfig> {
            self.config_reads.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(self.delay);
            Ok(sample_config())
        }
    }

    #[test]
    fn repeated_loads_hit_cache() {
        let cache = DataCache::new(CountingSource::new());
        assert!(!cache.deck_loaded());
        let a = cache.load_deck().unwrap();
        let b = cache.load_deck().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.source().deck_reads.load(Ordering::SeqCst), 1);

        cache.load_config().unwrap();
        cache.load_config().unwrap();
        assert_eq!(cache.source().config_reads.load(Ordering::SeqCst), 1);
        assert!(cache.deck_loaded() && cache.config_loaded());
    }

    #[test]
    fn concurrent_first_load_reads_once() {
        let mut source = CountingSource::new();
        source.delay = Duration::from_millis(20);
        let cache = DataCache::new(source);

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    cache.load_deck().unwrap();
                    cache.load_config().unwrap();
                });
            }
        });

        assert_eq!(cache.source().deck_reads.load(Ordering::SeqCst), 1);
        assert_eq!(cache.source().config_reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let mut source = CountingSource::new();
        source.fail_first = 1;
        let cache = DataCache::new(source);

        let err = cache.load_deck().unwrap_err();
        assert!(matches!(err, LoadError::CardCount { actual: 44, .. }));
        assert!(!cache.deck_loaded());

        assert_eq!(cache.load_deck().unwrap().len(), 54);
        assert_eq!(cache.source().deck_reads.load(Ordering::SeqCst), 2);
    }
}
