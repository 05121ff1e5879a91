//! Fetching source documents
//!
//! [`Fetcher`] is the seam between the scheduler and the network.
//! [`HttpFetcher`] performs a plain GET with reqwest; [`MockFetcher`] replays
//! scripted replies for tests and offline runs.

use crate::error::FetchError;
use crate::source::Request;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

/// Retrieves one document per request
///
/// No retries: a failure is reported and the caller decides what to keep.
pub trait Fetcher {
    /// GET `request` and parse the body as JSON
    fn fetch(&self, request: &Request) -> impl Future<Output = Result<Value, FetchError>>;
}

/// reqwest-backed fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("panel/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, timeout })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &Request) -> Result<Value, FetchError> {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl HttpFetcher {
    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Http(err)
        }
    }
}

/// Scripted reply for [`MockFetcher`]
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Successful JSON document
    Json(Value),
    /// Non-success HTTP status
    Status(u16),
    /// Body that is not JSON
    Body(String),
    /// Never answers; the caller's timeout decides
    Hang,
}

/// Fetcher that replays scripted replies per URL
///
/// Each URL has a queue; the last reply repeats once the queue is down to
/// one entry. Unknown URLs answer `404`.
///
/// ```
/// use feeds::fetch::{Fetcher, MockFetcher, Reply};
/// use feeds::source::Request;
/// use serde_json::json;
///
/// let mock = MockFetcher::new();
/// mock.push("http://wx", Reply::Json(json!({"temp": 21.4})));
///
/// let req = Request { url: "http://wx".into(), headers: vec![] };
/// let doc = tokio::runtime::Builder::new_current_thread()
///     .build()
///     .unwrap()
///     .block_on(mock.fetch(&req))
///     .unwrap();
/// assert_eq!(doc["temp"], 21.4);
/// ```
#[derive(Debug, Default)]
pub struct MockFetcher {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<Request>>,
}

impl MockFetcher {
    /// Fetcher with no scripted replies
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for `url`
    pub fn push(&self, url: impl Into<String>, reply: Reply) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.entry(url.into()).or_default().push_back(reply);
        }
    }

    /// Every request seen so far, in order
    pub fn calls(&self) -> Vec<Request> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of requests made to `url`
    pub fn call_count(&self, url: &str) -> usize {
        self.calls().iter().filter(|r| r.url == url).count()
    }

    fn next_reply(&self, url: &str) -> Reply {
        let Ok(mut replies) = self.replies.lock() else {
            return Reply::Status(500);
        };
        match replies.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or(Reply::Status(404)),
            Some(queue) => queue.front().cloned().unwrap_or(Reply::Status(404)),
            None => Reply::Status(404),
        }
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, request: &Request) -> Result<Value, FetchError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }

        match self.next_reply(&request.url) {
            Reply::Json(doc) => Ok(doc),
            Reply::Status(code) => Err(FetchError::Status(code)),
            Reply::Body(text) => Ok(serde_json::from_str(&text)?),
            Reply::Hang => std::future::pending().await,
        }
    }
}
