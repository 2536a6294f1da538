use std::collections::HashMap;
use std::sync::Arc;

use super::loader::{self, Fetch};
use super::model::{LoadError, StationTable};

// ---------------------------------------------------------------------------
// Process-lifetime table cache
// ---------------------------------------------------------------------------

/// Memoises loaded tables per URL so repeated render passes never refetch.
///
/// Only successful loads populate the cache: after a failure the next call
/// with the same URL hits the network again. There is no invalidation;
/// entries live until the process exits.
#[derive(Default)]
pub struct TableCache {
    entries: HashMap<String, Arc<StationTable>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `url`, fetching and parsing on a miss.
    pub fn load(&mut self, url: &str, fetcher: &dyn Fetch) -> Result<Arc<StationTable>, LoadError> {
        if let Some(table) = self.entries.get(url) {
            return Ok(Arc::clone(table));
        }

        let body = fetcher.fetch_csv(url)?;
        let table = Arc::new(loader::parse_stations(&body)?);
        self.entries.insert(url.to_string(), Arc::clone(&table));
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    const FEED: &str = "\
puissance_nominale,nom_operateur,consolidated_longitude,consolidated_latitude
22.3,Izivia,2.3,48.8
50.0,Allego,4.8,45.7
";

    /// Counts calls; serves `body` or an HTTP error when `body` is None.
    struct CountingFetcher {
        body: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl CountingFetcher {
        fn serving(body: &'static str) -> Self {
            Self {
                body: Some(body),
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                body: None,
                calls: Cell::new(0),
            }
        }
    }

    impl Fetch for CountingFetcher {
        fn fetch_csv(&self, _url: &str) -> Result<String, LoadError> {
            self.calls.set(self.calls.get() + 1);
            match self.body {
                Some(body) => Ok(body.to_string()),
                None => Err(LoadError::Http("connection refused".to_string())),
            }
        }
    }

    #[test]
    fn second_load_hits_cache_without_refetch() {
        let fetcher = CountingFetcher::serving(FEED);
        let mut cache = TableCache::new();

        let first = cache.load("http://feed", &fetcher).unwrap();
        let second = cache.load("http://feed", &fetcher).unwrap();

        assert_eq!(fetcher.calls.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn distinct_urls_are_cached_independently() {
        let fetcher = CountingFetcher::serving(FEED);
        let mut cache = TableCache::new();

        cache.load("http://feed-a", &fetcher).unwrap();
        cache.load("http://feed-b", &fetcher).unwrap();
        cache.load("http://feed-a", &fetcher).unwrap();

        assert_eq!(fetcher.calls.get(), 2);
    }

    #[test]
    fn failures_are_not_cached() {
        let fetcher = CountingFetcher::failing();
        let mut cache = TableCache::new();

        assert!(cache.load("http://feed", &fetcher).is_err());
        assert!(cache.load("http://feed", &fetcher).is_err());

        // Both calls reached the fetcher: a failed load never populates
        // the cache, so the next interaction retries.
        assert_eq!(fetcher.calls.get(), 2);
    }

    #[test]
    fn parse_failure_is_not_cached_either() {
        let fetcher = CountingFetcher::serving("nom_operateur\nIzivia\n");
        let mut cache = TableCache::new();

        assert!(matches!(
            cache.load("http://feed", &fetcher),
            Err(LoadError::MissingColumn(_))
        ));
        assert!(cache.load("http://feed", &fetcher).is_err());
        assert_eq!(fetcher.calls.get(), 2);
    }
}
