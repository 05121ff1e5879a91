//! Startup fetch and per-minute refetching with change detection

use crate::error::FetchError;
use crate::fetch::Fetcher;
use crate::snapshot::{documents_equal, Snapshot, SourceState};
use crate::source::{Location, Source};
use chrono::{DateTime, TimeZone, Timelike, Utc};
use serde_json::Value;
use std::time::Duration;

/// Default bound on a single fetch
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Owns the sources and the snapshot; the only writer of the snapshot
///
/// Sources are fetched one at a time in declaration order.
pub struct Scheduler<F> {
    sources: Vec<Source>,
    location: Location,
    fetcher: F,
    timeout: Duration,
    snapshot: Snapshot,
}

impl<F: Fetcher> Scheduler<F> {
    /// Register `sources`; every one starts out stale
    pub fn new(sources: Vec<Source>, location: Location, fetcher: F) -> Self {
        let mut snapshot = Snapshot::new();
        for source in &sources {
            snapshot.insert(source.name.clone(), SourceState::Stale);
        }
        Self {
            sources,
            location,
            fetcher,
            timeout: DEFAULT_FETCH_TIMEOUT,
            snapshot,
        }
    }

    /// Bound every fetch by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Current documents
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Registered sources
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Fetcher in use
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch every source once, ignoring interval policies
    ///
    /// Failures leave the source [`SourceState::Failed`]; nothing is fatal.
    pub async fn refresh_all<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        let now = now.with_timezone(&Utc);
        for source in &self.sources {
            let state = match fetch_source(&self.fetcher, source, &self.location, now, self.timeout).await {
                Ok(doc) => {
                    tracing::debug!(source = %source.name, "source fetched");
                    SourceState::Fresh(doc)
                }
                Err(err) => {
                    tracing::warn!(source = %source.name, error = %err, "initial fetch failed");
                    SourceState::Failed
                }
            };
            self.snapshot.insert(source.name.clone(), state);
        }
    }

    /// Refetch the sources due at `now`'s minute
    ///
    /// Returns true when at least one document changed. Fetch failures are
    /// logged and count as no change; the previous state is kept.
    pub async fn tick<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> bool {
        let minute = now.minute();
        let now = now.with_timezone(&Utc);
        let mut changed = false;

        for source in self.sources.iter().filter(|s| s.due(minute)) {
            let doc = match fetch_source(&self.fetcher, source, &self.location, now, self.timeout).await {
                Ok(doc) => doc,
                Err(err) => {
                    tracing::warn!(source = %source.name, error = %err, "refetch failed, keeping previous data");
                    continue;
                }
            };

            let unchanged = self
                .snapshot
                .document(&source.name)
                .is_some_and(|prev| documents_equal(prev, &doc));
            if unchanged {
                tracing::debug!(source = %source.name, "source unchanged");
                continue;
            }

            tracing::info!(source = %source.name, "source changed, redraw needed");
            self.snapshot.insert(source.name.clone(), SourceState::Fresh(doc));
            changed = true;
        }

        changed
    }
}

async fn fetch_source<F: Fetcher>(
    fetcher: &F,
    source: &Source,
    location: &Location,
    now: DateTime<Utc>,
    timeout: Duration,
) -> Result<Value, FetchError> {
    let request = source.request(location, now);
    tracing::debug!(source = %source.name, url = %request.url, "fetching");
    tokio::time::timeout(timeout, fetcher.fetch(&request))
        .await
        .map_err(|_| FetchError::Timeout(timeout))?
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::fetch::{MockFetcher, Reply};
    use crate::source::UpdateInterval;
    use serde_json::json;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, minute, 0).unwrap()
    }

    fn scheduler(mock: MockFetcher) -> Scheduler<MockFetcher> {
        let sources = vec![
            Source::new("wx", "http://wx").with_interval(UpdateInterval::Every(10)),
            Source::new("tide", "http://tide").with_interval(UpdateInterval::Minutes(vec![7])),
            Source::new("static", "http://static"),
        ];
        Scheduler::new(sources, Location::default(), mock)
    }

    #[tokio::test]
    async fn test_starts_stale() {
        let s = scheduler(MockFetcher::new());
        assert_eq!(s.snapshot().state("wx"), Some(&SourceState::Stale));
        assert_eq!(s.snapshot().len(), 3);
    }

    #[tokio::test]
    async fn test_refresh_all_ignores_policy() {
        let mock = MockFetcher::new();
        mock.push("http://wx", Reply::Json(json!({"temp": 1})));
        mock.push("http://tide", Reply::Status(500));
        mock.push("http://static", Reply::Json(json!("fixed")));

        let mut s = scheduler(mock);
        s.refresh_all(&at(3)).await;

        assert_eq!(s.snapshot().document("wx"), Some(&json!({"temp": 1})));
        assert_eq!(s.snapshot().state("tide"), Some(&SourceState::Failed));
        assert_eq!(s.snapshot().document("static"), Some(&json!("fixed")));
    }

    #[tokio::test]
    async fn test_tick_fetches_only_due_sources() {
        let mock = MockFetcher::new();
        for url in ["http://wx", "http://tide", "http://static"] {
            mock.push(url, Reply::Json(json!(0)));
        }
        let mut s = scheduler(mock);
        s.refresh_all(&at(0)).await;

        s.tick(&at(7)).await;
        s.tick(&at(20)).await;
        s.tick(&at(21)).await;

        let mock = s.fetcher();
        assert_eq!(mock.call_count("http://wx"), 2);
        assert_eq!(mock.call_count("http://tide"), 2);
        assert_eq!(mock.call_count("http://static"), 1);
    }

    #[tokio::test]
    async fn test_change_detection() {
        let mock = MockFetcher::new();
        mock.push("http://wx", Reply::Json(json!({"temp": 21, "wind": 3})));
        mock.push("http://wx", Reply::Json(json!({"wind": 3.0, "temp": 21.0})));
        mock.push("http://wx", Reply::Json(json!({"temp": 22, "wind": 3})));
        let mut s = scheduler(mock);
        s.refresh_all(&at(0)).await;

        // Same content, different key order and number form
        assert!(!s.tick(&at(10)).await);
        // Different content, then the same again
        assert!(s.tick(&at(20)).await);
        assert!(!s.tick(&at(30)).await);
        assert_eq!(s.snapshot().document("wx"), Some(&json!({"temp": 22, "wind": 3})));
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_previous() {
        let mock = MockFetcher::new();
        mock.push("http://wx", Reply::Json(json!({"temp": 21})));
        mock.push("http://wx", Reply::Body("not json".into()));
        let mut s = scheduler(mock);
        s.refresh_all(&at(0)).await;

        assert!(!s.tick(&at(10)).await);
        assert_eq!(s.snapshot().document("wx"), Some(&json!({"temp": 21})));
    }

    #[tokio::test]
    async fn test_recovery_from_failure_is_a_change() {
        let mock = MockFetcher::new();
        mock.push("http://wx", Reply::Status(502));
        mock.push("http://wx", Reply::Json(json!({"temp": 21})));
        let mut s = scheduler(mock);
        s.refresh_all(&at(0)).await;
        assert_eq!(s.snapshot().state("wx"), Some(&SourceState::Failed));

        assert!(s.tick(&at(10)).await);
        assert_eq!(s.snapshot().document("wx"), Some(&json!({"temp": 21})));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_fetch_times_out() {
        let mock = MockFetcher::new();
        mock.push("http://wx", Reply::Hang);
        mock.push("http://tide", Reply::Json(json!(1)));
        mock.push("http://static", Reply::Json(json!(2)));
        let mut s = scheduler(mock).with_timeout(Duration::from_secs(5));

        s.refresh_all(&at(0)).await;

        assert_eq!(s.snapshot().state("wx"), Some(&SourceState::Failed));
        assert_eq!(s.snapshot().document("tide"), Some(&json!(1)));
    }
}
