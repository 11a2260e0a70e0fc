//! Best-effort schedule cache.
//!
//! Keeps the last good board per station so views can show slightly stale
//! data with a "stale" marker instead of going blank on a transient fetch
//! failure. Entries are keyed by (station, language) because every
//! localized field differs between the two. Last write wins per key.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Language, Station, StationId};
use crate::lrt::{LrtError, ScheduleSource, fetch_station_schedule};

/// Cache key: one entry per station per display language.
type BoardKey = (StationId, Language);

/// Configuration for the schedule cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached boards. The observed clients treat data older than
    /// 30 minutes as worthless, so that is the default.
    pub ttl: Duration,

    /// Maximum number of cached boards.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30 * 60),
            // 68 stations x 2 languages fits comfortably
            max_capacity: 256,
        }
    }
}

/// Station board cache.
pub struct ScheduleCache {
    boards: MokaCache<BoardKey, Arc<Station>>,
}

impl ScheduleCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let boards = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { boards }
    }

    /// Get a cached board.
    pub async fn get(&self, id: &StationId, lang: Language) -> Option<Arc<Station>> {
        self.boards.get(&(*id, lang)).await
    }

    /// Insert a board.
    pub async fn insert(&self, station: Arc<Station>, lang: Language) {
        self.boards.insert((station.station_id, lang), station).await;
    }

    /// Drop the cached boards for one station (both languages).
    pub async fn invalidate(&self, id: &StationId) {
        for lang in [Language::En, Language::Zh] {
            self.boards.invalidate(&(*id, lang)).await;
        }
    }

    /// Drop everything.
    pub fn invalidate_all(&self) {
        self.boards.invalidate_all();
    }

    /// Number of cached boards (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.boards.entry_count()
    }
}

/// Schedule source with a read-through cache in front.
pub struct CachedLrtClient<S> {
    source: S,
    cache: ScheduleCache,
}

impl<S: ScheduleSource> CachedLrtClient<S> {
    /// Wrap a source with a cache.
    pub fn new(source: S, cache_config: &CacheConfig) -> Self {
        Self {
            source,
            cache: ScheduleCache::new(cache_config),
        }
    }

    /// Get a station board, from cache when fresh enough, otherwise from
    /// the source.
    pub async fn station(
        &self,
        id: &StationId,
        lang: Language,
    ) -> Result<Arc<Station>, LrtError> {
        if let Some(cached) = self.cache.get(id, lang).await {
            return Ok(cached);
        }

        let station = Arc::new(fetch_station_schedule(&self.source, id, lang).await?);
        self.cache.insert(station.clone(), lang).await;
        Ok(station)
    }

    /// Force a fetch from the source, refreshing the cache on success. On
    /// failure the previous entry is left in place for stale reads.
    pub async fn refresh(&self, id: &StationId, lang: Language) -> Result<Arc<Station>, LrtError> {
        let station = Arc::new(fetch_station_schedule(&self.source, id, lang).await?);
        self.cache.insert(station.clone(), lang).await;
        Ok(station)
    }

    /// Cache-only read: the last known good board, if any and not expired.
    pub async fn last_known(&self, id: &StationId, lang: Language) -> Option<Arc<Station>> {
        self.cache.get(id, lang).await
    }

    /// Access the underlying source for operations that bypass the cache.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Number of cached boards.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Drop all cached boards.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lrt::{MockLrtClient, PlatformEntry, RouteEntry, ScheduleResponse};

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn board(minutes: u32) -> ScheduleResponse {
        ScheduleResponse {
            status: 1,
            system_time: None,
            platform_list: Some(vec![PlatformEntry {
                platform_id: 1,
                route_list: Some(vec![RouteEntry {
                    route_no: "610".to_string(),
                    dest_en: Some("Yuen Long".to_string()),
                    dest_ch: Some("元朗".to_string()),
                    time_en: Some(format!("{minutes} mins")),
                    time_ch: None,
                    train_length: Some(1),
                    stop: Some(0),
                    arrival_departure: Some("A".to_string()),
                }]),
            }]),
        }
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(1800));
        assert_eq!(config.max_capacity, 256);
    }

    #[tokio::test]
    async fn read_through_hits_cache_second_time() {
        let mock = MockLrtClient::from_boards([(sid("1"), board(5))]);
        let client = CachedLrtClient::new(mock, &CacheConfig::default());

        let first = client.station(&sid("1"), Language::En).await.unwrap();
        assert_eq!(first.next_trains[0].time_to_arrival, 5);

        // Change the upstream board; the cached value must still be served
        client.source().set_board(sid("1"), board(9)).await;
        let second = client.station(&sid("1"), Language::En).await.unwrap();
        assert_eq!(second.next_trains[0].time_to_arrival, 5);
    }

    #[tokio::test]
    async fn refresh_bypasses_and_updates_cache() {
        let mock = MockLrtClient::from_boards([(sid("1"), board(5))]);
        let client = CachedLrtClient::new(mock, &CacheConfig::default());

        client.station(&sid("1"), Language::En).await.unwrap();
        client.source().set_board(sid("1"), board(9)).await;

        let refreshed = client.refresh(&sid("1"), Language::En).await.unwrap();
        assert_eq!(refreshed.next_trains[0].time_to_arrival, 9);

        let cached = client.last_known(&sid("1"), Language::En).await.unwrap();
        assert_eq!(cached.next_trains[0].time_to_arrival, 9);
    }

    #[tokio::test]
    async fn languages_are_cached_separately() {
        let mock = MockLrtClient::from_boards([(sid("1"), board(5))]);
        let client = CachedLrtClient::new(mock, &CacheConfig::default());

        let en = client.station(&sid("1"), Language::En).await.unwrap();
        let zh = client.station(&sid("1"), Language::Zh).await.unwrap();
        assert_eq!(en.next_trains[0].destination, "Yuen Long");
        assert_eq!(zh.next_trains[0].destination, "元朗");
    }

    #[tokio::test]
    async fn failed_refresh_keeps_last_known() {
        let mock = MockLrtClient::from_boards([(sid("1"), board(5))]);
        let client = CachedLrtClient::new(mock, &CacheConfig::default());

        client.station(&sid("1"), Language::En).await.unwrap();

        // Break the upstream for this station
        client
            .source()
            .set_board(
                sid("1"),
                ScheduleResponse {
                    status: 2,
                    system_time: None,
                    platform_list: None,
                },
            )
            .await;

        assert!(client.refresh(&sid("1"), Language::En).await.is_err());
        let stale = client.last_known(&sid("1"), Language::En).await.unwrap();
        assert_eq!(stale.next_trains[0].time_to_arrival, 5);
    }

    #[tokio::test]
    async fn cache_miss_on_unknown_station_propagates() {
        let mock = MockLrtClient::from_boards(std::iter::empty());
        let client = CachedLrtClient::new(mock, &CacheConfig::default());

        let err = client.station(&sid("999"), Language::En).await.unwrap_err();
        assert!(matches!(err, LrtError::UnknownStation(_)));
    }
}
