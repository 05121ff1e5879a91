//! Data feeds for the status panel
//!
//! Sources are fetched over HTTP at startup and then on their own per-minute
//! policy. Each value shown on the panel is pulled out of a source document
//! with a path expression, then converted, rounded and decorated.
//!
//! ```
//! use feeds::prelude::*;
//! use serde_json::json;
//!
//! let mut snapshot = Snapshot::new();
//! snapshot.insert("wx", SourceState::Fresh(json!({"temp": 21.4})));
//!
//! let mut temp = ValueSpec::new("wx", "temp".parse().unwrap());
//! temp.round = Some(0);
//! temp.suffix = Some("°".into());
//! assert_eq!(temp.resolve(&snapshot), "21°");
//! ```

pub mod convert;
pub mod error;
pub mod fetch;
pub mod path;
pub mod resolve;
pub mod scheduler;
pub mod snapshot;
pub mod source;

pub use error::{FetchError, PathError, ResolveError};

pub mod prelude {
    //! Common types

    pub use crate::convert::Converter;
    pub use crate::error::{FetchError, PathError, ResolveError};
    pub use crate::fetch::{Fetcher, HttpFetcher, MockFetcher, Reply};
    pub use crate::path::PathExpr;
    pub use crate::resolve::{ValueSpec, ERROR_TEXT};
    pub use crate::scheduler::{Scheduler, DEFAULT_FETCH_TIMEOUT};
    pub use crate::snapshot::{documents_equal, Snapshot, SourceState};
    pub use crate::source::{Location, Request, Source, UpdateInterval};
}
