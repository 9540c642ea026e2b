//! Canonical textual form of an operation's arguments.
//!
//! Cache keys are only as good as the serialization they are hashed from: two
//! calls that are equal by value must render to the same bytes, or the second
//! call misses forever. The rules are:
//!
//! - positional arguments keep their call order;
//! - keyword arguments are sorted by name;
//! - every JSON object, at any depth, has its keys sorted;
//! - numbers and strings use `serde_json`'s deterministic formatting;
//! - with [`CaseFolding::Fold`], every string value (not object keys) is
//!   lowercased first. Whitespace is kept: the lookups match substrings, so
//!   `"batman "` and `"batman"` can return different movies.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::{CacheError, Result};

/// Whether string arguments are case-folded before key derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFolding {
    /// Strings are used as given: `"Batman"` and `"batman"` are distinct keys.
    #[default]
    Preserve,
    /// Strings are lowercased: `"BATMAN"` and `"batman"` share a key, `" batman"` does not.
    Fold,
}

/// Arguments of a single call to a cacheable operation.
///
/// # Examples
///
/// ```
/// use moviecache_core::cache::{CallArgs, CaseFolding};
///
/// let a = CallArgs::new().arg("Batman").unwrap().kwarg("limit", 5).unwrap();
/// let b = CallArgs::new().arg("batman").unwrap().kwarg("limit", 5).unwrap();
///
/// assert_ne!(a.canonical(CaseFolding::Preserve), b.canonical(CaseFolding::Preserve));
/// assert_eq!(a.canonical(CaseFolding::Fold), b.canonical(CaseFolding::Fold));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    positional: Vec<Value>,
    keyword: BTreeMap<String, Value>,
}

impl CallArgs {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn arg<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        self.positional.push(to_value(value)?);
        Ok(self)
    }

    /// Sets a keyword argument. Setting the same name twice keeps the last value.
    pub fn kwarg<T: Serialize>(mut self, name: impl Into<String>, value: T) -> Result<Self> {
        self.keyword.insert(name.into(), to_value(&value)?);
        Ok(self)
    }

    /// Returns true if no arguments were given.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Renders the arguments to their canonical JSON text.
    pub fn canonical(&self, case_folding: CaseFolding) -> String {
        let args: Vec<Value> = self
            .positional
            .iter()
            .map(|v| normalize(v, case_folding))
            .collect();
        let kwargs: Map<String, Value> = self
            .keyword
            .iter()
            .map(|(k, v)| (k.clone(), normalize(v, case_folding)))
            .collect();

        let mut root = Map::new();
        root.insert("args".to_string(), Value::Array(args));
        root.insert("kwargs".to_string(), Value::Object(kwargs));

        render(&Value::Object(root))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| CacheError::Serialization(e.to_string()))
}

fn normalize(value: &Value, case_folding: CaseFolding) -> Value {
    match value {
        Value::String(s) if case_folding == CaseFolding::Fold => {
            Value::String(s.to_lowercase())
        }
        Value::Array(items) => {
            Value::Array(items.iter().map(|v| normalize(v, case_folding)).collect())
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), normalize(v, case_folding)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Writes compact JSON with object keys sorted at every depth, whatever the
/// iteration order of `serde_json::Map`.
fn render(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", inner.join(","))
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let inner: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| format!("{}:{}", Value::String(k.clone()), render(v)))
                .collect();
            format!("{{{}}}", inner.join(","))
        }
        scalar => scalar.to_string(),
    }
}
