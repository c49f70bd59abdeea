//! Shared scratch space for one transition attempt.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque bag of values threaded through every hook of one `trigger` call.
///
/// The engine creates an empty context when the caller does not supply one;
/// either way, all hooks invoked for a single transition attempt see the same
/// instance and may use it to pass data between phases. The context's
/// lifetime is one attempt — nothing is carried over to the next trigger.
///
/// # Example
///
/// ```rust
/// use gearshift::Context;
///
/// let mut context = Context::new();
/// context.insert("attempted_by", "alice");
///
/// assert_eq!(context.get("attempted_by"), Some(&"alice".into()));
/// assert!(context.get("missing").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    values: HashMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Whether a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
