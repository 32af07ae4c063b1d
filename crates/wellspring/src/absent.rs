//! Absent - the canonical always-absent source

use std::fmt;
use std::marker::PhantomData;

use crate::absence::{Absence, Produced};
use crate::determinism::Determinism;
use crate::source::Source;

/// A stateless source that signals permanent absence on every call.
///
/// `Absent<T>` is a zero-sized type: every instance for a given `T` is the
/// canonical absent source of that type, so construction sites that need
/// "no delegate" all share one representation. It claims
/// [`Determinism::Absent`] and never produces a value.
///
/// The phantom parameter is carried as `fn() -> T`, so `Absent<T>` is
/// `Send + Sync + Copy` for any `T`.
pub struct Absent<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Absent<T> {
    /// The absent source for `T`.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Absent<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Absent<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Absent<T> {}

impl<T> PartialEq for Absent<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Absent<T> {}

impl<T> fmt::Debug for Absent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Absent")
    }
}

impl<T> Source for Absent<T> {
    type Value = T;

    fn produce(&self) -> Produced<T> {
        Err(Absence::Permanent)
    }

    fn determinism(&self) -> Determinism {
        Determinism::Absent
    }
}
