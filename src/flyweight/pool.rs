//! Interning pool backing the state and input factories.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use uuid::Uuid;

/// One category's worth of interned names plus its wildcard sentinel.
///
/// The wildcard lives outside the named map, so interning a name can never
/// hand back the sentinel, even if an application somehow guessed its name.
pub(crate) struct Pool {
    names: Mutex<HashMap<String, Arc<str>>>,
    wildcard: OnceLock<Arc<str>>,
}

impl Pool {
    pub(crate) fn new() -> Self {
        Self {
            names: Mutex::new(HashMap::new()),
            wildcard: OnceLock::new(),
        }
    }

    /// Return the canonical `Arc<str>` for `name`, creating it on first use.
    pub(crate) fn intern(&self, name: &str) -> Arc<str> {
        let mut names = self.names.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = names.get(name) {
            return Arc::clone(existing);
        }

        let interned: Arc<str> = Arc::from(name);
        names.insert(name.to_owned(), Arc::clone(&interned));
        interned
    }

    /// Return the category's wildcard sentinel, minting it on first use.
    ///
    /// The sentinel's name is 64 random lowercase hex characters, long enough
    /// that it cannot collide with any name an application would choose.
    pub(crate) fn wildcard(&self) -> Arc<str> {
        let sentinel = self.wildcard.get_or_init(|| {
            let name = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
            Arc::from(name.as_str())
        });

        Arc::clone(sentinel)
    }
}
