//! Data sources and their request templates

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Timestamp format for `{start}` / `{end}`
const WINDOW_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// When a source is refetched after startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UpdateInterval {
    /// Every N minutes: due when `minute % N == 0`
    Every(u32),
    /// At these minutes past the hour
    Minutes(Vec<u32>),
}

impl UpdateInterval {
    /// Whether a refetch is due at `minute` (0-59)
    pub fn due(&self, minute: u32) -> bool {
        match self {
            UpdateInterval::Every(0) => false,
            UpdateInterval::Every(n) => minute % n == 0,
            UpdateInterval::Minutes(set) => set.contains(&minute),
        }
    }
}

/// Coordinates substituted into `{lat}` and `{long}`
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Location {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub long: f64,
}

/// A named feed
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// Unique key referenced by values
    pub name: String,
    /// URL template
    pub url: String,
    /// Substituted into `{apikey}`
    pub apikey: Option<String>,
    /// Header name → value template, sent in this order
    pub headers: Vec<(String, String)>,
    /// Refetch policy; `None` means fetched at startup only
    pub interval: Option<UpdateInterval>,
}

impl Source {
    /// Source fetched once at startup
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            apikey: None,
            headers: Vec::new(),
            interval: None,
        }
    }

    /// Set the refetch policy
    pub fn with_interval(mut self, interval: UpdateInterval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Set the API key
    pub fn with_apikey(mut self, apikey: impl Into<String>) -> Self {
        self.apikey = Some(apikey.into());
        self
    }

    /// Add a header template
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Whether this source is refetched at `minute`
    pub fn due(&self, minute: u32) -> bool {
        self.interval.as_ref().is_some_and(|i| i.due(minute))
    }

    /// Concrete request with every placeholder filled
    pub fn request(&self, location: &Location, now: DateTime<Utc>) -> Request {
        let vars = TemplateVars::new(self.apikey.as_deref(), location, now);
        Request {
            url: vars.expand(&self.url),
            headers: self
                .headers
                .iter()
                .map(|(name, value)| (name.clone(), vars.expand(value)))
                .collect(),
        }
    }
}

/// Resolved GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Target URL
    pub url: String,
    /// Header name/value pairs
    pub headers: Vec<(String, String)>,
}

/// Values available to `{placeholder}` substitution
struct TemplateVars {
    apikey: String,
    lat: String,
    long: String,
    start: String,
    end: String,
}

impl TemplateVars {
    fn new(apikey: Option<&str>, location: &Location, now: DateTime<Utc>) -> Self {
        Self {
            apikey: apikey.unwrap_or_default().to_string(),
            lat: location.lat.to_string(),
            long: location.long.to_string(),
            start: (now - Duration::weeks(4)).format(WINDOW_FORMAT).to_string(),
            end: (now + Duration::weeks(52)).format(WINDOW_FORMAT).to_string(),
        }
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "apikey" => Some(&self.apikey),
            "lat" => Some(&self.lat),
            "long" => Some(&self.long),
            "start" => Some(&self.start),
            "end" => Some(&self.end),
            _ => None,
        }
    }

    /// Replace known `{name}` placeholders; anything else is copied verbatim
    fn expand(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => match self.lookup(&after[..close]) {
                    Some(value) => {
                        out.push_str(value);
                        rest = &after[close + 1..];
                    }
                    None => {
                        out.push('{');
                        rest = after;
                    }
                },
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}
