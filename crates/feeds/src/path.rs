//! Path expressions over JSON documents
//!
//! Paths are JSONPath queries (RFC 9535), compiled once when configuration is
//! loaded. The leading `$` may be left out, so `current.temp` reads as
//! `$.current.temp`.
//!
//! | Syntax | Meaning |
//! |---|---|
//! | `$` | document root |
//! | `.key`, `['key']`, `["key"]` | object member |
//! | `[2]`, `[-1]` | array element, negative counts from the end |
//! | `*`, `[*]` | every child |
//! | `..key`, `..*` | recursive descent |
//! | `[?@.a.b == 3]`, `[?(@.a.b == 3)]` | keep children whose member compares true |
//!
//! Matches come out in document order.
//!
//! ```
//! use feeds::path::PathExpr;
//! use serde_json::json;
//!
//! let doc = json!({"current": {"temp": 21.4}, "hourly": [{"t": 1}, {"t": 2}]});
//! let temp: PathExpr = "current.temp".parse().unwrap();
//! assert_eq!(temp.first(&doc), Some(&json!(21.4)));
//!
//! let last: PathExpr = "$.hourly[-1].t".parse().unwrap();
//! assert_eq!(last.first(&doc), Some(&json!(2)));
//! ```

use crate::error::PathError;
use serde_json::Value;
use serde_json_path::JsonPath;
use std::fmt;
use std::str::FromStr;

/// Compiled path expression
#[derive(Debug, Clone)]
pub struct PathExpr {
    text: String,
    query: JsonPath,
}

impl PathExpr {
    /// Expression as written
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Every match, in document order
    pub fn find<'a>(&self, doc: &'a Value) -> Vec<&'a Value> {
        self.query.query(doc).all()
    }

    /// First match, if any
    pub fn first<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        self.query.query(doc).first()
    }
}

impl PartialEq for PathExpr {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for PathExpr {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = JsonPath::parse(&rooted(s)).map_err(|err| PathError {
            path: s.to_string(),
            err,
        })?;
        Ok(Self {
            text: s.to_string(),
            query,
        })
    }
}

/// Anchor a relative path at the document root
fn rooted(s: &str) -> String {
    match s.chars().next() {
        None => "$".to_string(),
        Some('$') => s.to_string(),
        Some('.' | '[') => format!("${s}"),
        Some(_) => format!("$.{s}"),
    }
}
