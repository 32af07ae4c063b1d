//! Fixed - a source that always produces one stored value

use crate::absence::Produced;
use crate::determinism::Determinism;
use crate::source::Source;

/// A source holding a concrete value, produced on every call.
///
/// `Fixed` claims [`Determinism::Present`] and never signals absence. A
/// "present nothing" is expressed by storing an optional-like value, not by
/// absence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fixed<T> {
    value: T,
}

impl<T> Fixed<T> {
    /// Create a source that always produces `value`.
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrow the stored value without producing.
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap the stored value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> Source for Fixed<T> {
    type Value = T;

    fn produce(&self) -> Produced<T> {
        Ok(self.value.clone())
    }

    fn determinism(&self) -> Determinism {
        Determinism::Present
    }
}
