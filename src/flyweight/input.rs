//! Named input markers with identity semantics.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An immutable named marker for a triggering action.
///
/// Inputs share the flyweight contract of [`State`](crate::State): the
/// [`Registry`](crate::Registry) hands out one canonical instance per name,
/// and equality is identity rather than string comparison. Inputs occupy
/// their own namespace, so an input named `"OPEN"` is unrelated to a state
/// named `"OPEN"`.
///
/// # Example
///
/// ```rust
/// use gearshift::Registry;
///
/// let registry = Registry::new();
///
/// let open = registry.input("OPEN");
/// assert_eq!(open, registry.input("OPEN"));
/// assert_eq!(open.name(), "OPEN");
/// ```
#[derive(Clone)]
pub struct Input {
    name: Arc<str>,
}

impl Input {
    pub(crate) fn from_interned(name: Arc<str>) -> Self {
        Self { name }
    }

    /// The input's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Input {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl Eq for Input {}

impl Hash for Input {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        Arc::as_ptr(&self.name).hash(hasher);
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Input").field(&self.name).finish()
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
