//! Last known document per source

use serde_json::{Number, Value};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Fetch state of one source
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SourceState {
    /// Not fetched yet
    #[default]
    Stale,
    /// Last good document
    Fresh(Value),
    /// Fetch failed and no document is available
    Failed,
}

impl SourceState {
    /// Document, if one is available
    pub fn document(&self) -> Option<&Value> {
        match self {
            SourceState::Fresh(doc) => Some(doc),
            SourceState::Stale | SourceState::Failed => None,
        }
    }
}

/// Mapping from source name to its latest state
///
/// Written only by the [`Scheduler`](crate::scheduler::Scheduler); read by the
/// resolver and renderers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    states: HashMap<String, SourceState>,
}

impl Snapshot {
    /// Empty snapshot; every lookup is absent
    pub fn new() -> Self {
        Self::default()
    }

    /// State of `name`, `None` when no such source was registered
    pub fn state(&self, name: &str) -> Option<&SourceState> {
        self.states.get(name)
    }

    /// Document of `name` if it is fresh
    pub fn document(&self, name: &str) -> Option<&Value> {
        self.state(name).and_then(SourceState::document)
    }

    /// Set the state of `name`
    pub fn insert(&mut self, name: impl Into<String>, state: SourceState) {
        self.states.insert(name.into(), state);
    }

    /// Number of registered sources
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when no source is registered
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Order two JSON numbers by value
///
/// Integers compare exactly; anything involving a float compares as `f64`.
pub(crate) fn compare_numbers(a: &Number, b: &Number) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return Some(x.cmp(&y));
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return Some(x.cmp(&y));
    }
    a.as_f64()?.partial_cmp(&b.as_f64()?)
}

/// Structural equality used for change detection
///
/// Object key order is ignored, numbers compare by value (`21 == 21.0`),
/// arrays compare element by element.
///
/// ```
/// use feeds::snapshot::documents_equal;
/// use serde_json::json;
///
/// assert!(documents_equal(&json!({"a": 21, "b": [1]}), &json!({"b": [1.0], "a": 21.0})));
/// assert!(!documents_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
pub fn documents_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y) == Some(Ordering::Equal),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| documents_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| documents_equal(x, y)))
        }
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equal_ignores_key_order() {
        let a: Value = serde_json::from_str(r#"{"x": 1, "y": {"p": true, "q": null}}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"y": {"q": null, "p": true}, "x": 1}"#).unwrap();
        assert!(documents_equal(&a, &b));
    }

    #[test]
    fn test_numbers_by_value() {
        assert!(documents_equal(&json!(21), &json!(21.0)));
        assert!(documents_equal(&json!(-3), &json!(-3.0)));
        assert!(!documents_equal(&json!(21), &json!(21.4)));
        assert!(!documents_equal(&json!(21), &json!("21")));
        assert!(documents_equal(&json!(u64::MAX), &json!(u64::MAX)));
    }

    #[test]
    fn test_structure_differences() {
        assert!(!documents_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!documents_equal(&json!({"a": 1}), &json!({"b": 1})));
        assert!(!documents_equal(&json!([1]), &json!([1, 1])));
        assert!(!documents_equal(&json!([]), &json!({})));
        assert!(documents_equal(&json!(null), &json!(null)));
    }

    #[test]
    fn test_snapshot_lookup() {
        let mut snap = Snapshot::new();
        assert!(snap.is_empty());
        snap.insert("wx", SourceState::Fresh(json!({"temp": 21.4})));
        snap.insert("down", SourceState::Failed);
        snap.insert("later", SourceState::Stale);

        assert_eq!(snap.len(), 3);
        assert_eq!(snap.document("wx"), Some(&json!({"temp": 21.4})));
        assert_eq!(snap.document("down"), None);
        assert_eq!(snap.document("later"), None);
        assert_eq!(snap.state("down"), Some(&SourceState::Failed));
        assert_eq!(snap.state("nope"), None);
    }
}
