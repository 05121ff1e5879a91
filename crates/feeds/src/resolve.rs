//! Turning a [`ValueSpec`] into display text

use crate::convert::{parse_number, Converter};
use crate::error::ResolveError;
use crate::path::PathExpr;
use crate::snapshot::{Snapshot, SourceState};
use serde_json::Value;

/// Text shown in place of any value that could not be resolved
pub const ERROR_TEXT: &str = "Error";

/// How to extract and format one value
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    /// Source name
    pub source: String,
    /// Compiled path into the source document
    pub path: PathExpr,
    /// Optional converter
    pub converter: Option<Converter>,
    /// Rounding precision; 0 truncates to an integer
    pub round: Option<u32>,
    /// Prepended after conversion and rounding
    pub prefix: Option<String>,
    /// Appended after conversion and rounding
    pub suffix: Option<String>,
}

impl ValueSpec {
    /// Plain value: no converter, rounding or decoration
    pub fn new(source: impl Into<String>, path: PathExpr) -> Self {
        Self {
            source: source.into(),
            path,
            converter: None,
            round: None,
            prefix: None,
            suffix: None,
        }
    }

    /// Resolve against `snapshot`, `"Error"` on any failure
    pub fn resolve(&self, snapshot: &Snapshot) -> String {
        match self.try_resolve(snapshot) {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(source = %self.source, path = %self.path, error = %err, "value unresolved");
                ERROR_TEXT.to_string()
            }
        }
    }

    /// Resolve against `snapshot`
    ///
    /// Order: lookup, first path match, stringify, convert, round, decorate.
    pub fn try_resolve(&self, snapshot: &Snapshot) -> Result<String, ResolveError> {
        let doc = match snapshot.state(&self.source) {
            None => return Err(ResolveError::UnknownSource(self.source.clone())),
            Some(SourceState::Fresh(doc)) => doc,
            Some(SourceState::Stale | SourceState::Failed) => {
                return Err(ResolveError::SourceUnavailable(self.source.clone()))
            }
        };

        let found = self.path.first(doc).ok_or_else(|| ResolveError::NoMatch {
            source_name: self.source.clone(),
            path: self.path.to_string(),
        })?;

        let mut text = stringify(found);
        if let Some(converter) = self.converter {
            text = converter.apply(&text)?;
        }
        if let Some(precision) = self.round {
            text = round(&text, precision)?;
        }

        let prefix = self.prefix.as_deref().unwrap_or_default();
        let suffix = self.suffix.as_deref().unwrap_or_default();
        Ok(format!("{prefix}{text}{suffix}"))
    }
}

/// Text form of a matched value
///
/// Strings are used as-is; everything else in its JSON form.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Round a numeric string
///
/// Precision 0 truncates toward zero; otherwise rounds to `precision` places
/// and keeps trailing zeros.
///
/// ```
/// use feeds::resolve::round;
///
/// assert_eq!(round("3.7", 0).unwrap(), "3");
/// assert_eq!(round("3.7", 1).unwrap(), "3.7");
/// assert_eq!(round("3", 2).unwrap(), "3.00");
/// ```
pub fn round(text: &str, precision: u32) -> Result<String, ResolveError> {
    let value = parse_number(text).ok_or_else(|| ResolveError::NotNumeric(text.to_string()))?;
    if precision == 0 {
        let whole = value.trunc();
        // Avoid "-0" for values in (-1, 0)
        let whole = if whole == 0.0 { 0.0 } else { whole };
        Ok(format!("{whole:.0}"))
    } else {
        Ok(format!("{value:.*}", precision as usize))
    }
}
