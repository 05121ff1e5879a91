//! Error types for fetching, path parsing and value resolution

use std::time::Duration;
use thiserror::Error;

/// A source could not be fetched this round
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or protocol failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),

    /// Body was not a JSON document
    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// No complete response within the fetch timeout
    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// A path expression failed to parse
#[derive(Debug, Error)]
#[error("invalid path `{path}`: {err}")]
pub struct PathError {
    /// Expression as written
    pub path: String,
    /// Parser diagnostic
    #[source]
    pub err: serde_json_path::ParseError,
}

/// One value could not be produced; rendered as `"Error"`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// No source with this name is configured
    #[error("unknown source `{0}`")]
    UnknownSource(String),

    /// Source has no document (never fetched or last fetch failed)
    #[error("source `{0}` has no data")]
    SourceUnavailable(String),

    /// Path matched nothing in the document
    #[error("`{path}` matched nothing in `{source_name}`")]
    NoMatch {
        /// Source that was queried
        source_name: String,
        /// Path expression as written
        path: String,
    },

    /// Converter rejected its input
    #[error("converter `{converter}` cannot handle `{input}`")]
    Convert {
        /// Converter name
        converter: &'static str,
        /// Raw input string
        input: String,
    },

    /// Rounding requested on a non-numeric value
    #[error("cannot round non-numeric value `{0}`")]
    NotNumeric(String),
}
