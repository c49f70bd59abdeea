//! Named state markers with identity semantics.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An immutable named marker for one condition of a stateful object.
///
/// States are obtained from a [`Registry`](crate::Registry), which guarantees
/// that two requests for the same name yield the same instance. Equality is
/// identity: two states compare equal only when they were interned by the
/// same registry under the same name. A `State` and an
/// [`Input`](crate::Input) are distinct types and can never be confused,
/// even when their names coincide.
///
/// # Example
///
/// ```rust
/// use gearshift::Registry;
///
/// let registry = Registry::new();
///
/// let open = registry.state("OPEN");
/// assert_eq!(open, registry.state("OPEN"));
/// assert_ne!(open, registry.state("CLOSED"));
/// assert_eq!(open.name(), "OPEN");
/// ```
#[derive(Clone)]
pub struct State {
    name: Arc<str>,
}

impl State {
    pub(crate) fn from_interned(name: Arc<str>) -> Self {
        Self { name }
    }

    /// The state's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        Arc::as_ptr(&self.name).hash(hasher);
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&self.name).finish()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
