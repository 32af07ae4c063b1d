//! Source - the lazy value capability and its convenience layer
//!
//! A [`Source`] is anything that can be asked for a value and may answer
//! with one, or with an [`Absence`] signal instead. It has exactly two
//! extension points:
//!
//! - [`produce`](Source::produce) - required; the one operation that yields
//!   a value or signals absence. Must be safe to call concurrently.
//! - [`determinism`](Source::determinism) - optional; defaults to
//!   [`Determinism::NonDeterministic`]. Override only to make a stronger
//!   stability claim the implementation can honor ([`Determinism`] table).
//!
//! Everything else callers reach for - optional bridging, transforms,
//! fallbacks, presence callbacks, iteration - lives on [`SourceExt`], which
//! is blanket-implemented for every `Source` and defined purely in terms of
//! the two extension points. Implementations cannot and should not restate
//! any of it.
//!
//! # Absence at this layer
//!
//! The convenience operations treat both absence kinds uniformly as "no
//! value". Callers that care whether absence is transitory or permanent
//! match on [`produce`](Source::produce) directly or consult
//! [`determinism`](Source::determinism).

use std::sync::Arc;

use crate::absence::{Absence, Produced};
use crate::determinism::Determinism;

/// A capability that produces a value on demand or signals absence.
///
/// Implementations must keep `produce` consistent with the claim reported by
/// `determinism`: a source claiming [`Determinism::Absent`] must never
/// return a value, one claiming [`Determinism::Present`] must never signal
/// absence, and a claim, once made, must never weaken back to
/// [`Determinism::NonDeterministic`].
pub trait Source {
    /// The type of value this source produces.
    type Value;

    /// Produce a value or signal absence.
    ///
    /// Safe for concurrent invocation. Need not return equal values across
    /// calls unless [`determinism`](Source::determinism) says otherwise.
    fn produce(&self) -> Produced<Self::Value>;

    /// The source's current stability claim.
    ///
    /// Defaults to [`Determinism::NonDeterministic`], which promises
    /// nothing and is always a safe answer.
    fn determinism(&self) -> Determinism {
        Determinism::NonDeterministic
    }
}

/// A shared, type-erased handle to a source.
///
/// Composite sources hold their delegates through this alias so that any
/// mix of concrete sources can back them.
pub type SourceRef<T> = Arc<dyn Source<Value = T> + Send + Sync>;

impl<S: Source + ?Sized> Source for &S {
    type Value = S::Value;

    fn produce(&self) -> Produced<Self::Value> {
        (**self).produce()
    }

    fn determinism(&self) -> Determinism {
        (**self).determinism()
    }
}

impl<S: Source + ?Sized> Source for Arc<S> {
    type Value = S::Value;

    fn produce(&self) -> Produced<Self::Value> {
        (**self).produce()
    }

    fn determinism(&self) -> Determinism {
        (**self).determinism()
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    type Value = S::Value;

    fn produce(&self) -> Produced<Self::Value> {
        (**self).produce()
    }

    fn determinism(&self) -> Determinism {
        (**self).determinism()
    }
}

/// Derived operations available on every [`Source`].
///
/// All of these are defined in terms of [`Source::produce`] alone and keep
/// no state of their own. Both absence kinds collapse to "no value" here;
/// use [`Source::produce`] directly when the kind matters.
pub trait SourceExt: Source {
    /// Bridge to an optional: `Some(value)` on success, `None` on either
    /// absence kind.
    fn value(&self) -> Option<Self::Value> {
        self.produce().ok()
    }

    /// Transform the produced value, if there is one.
    fn map<U, F>(&self, f: F) -> Option<U>
    where
        F: FnOnce(Self::Value) -> U,
    {
        self.value().map(f)
    }

    /// Keep the produced value only if it satisfies the predicate.
    fn filter<P>(&self, predicate: P) -> Option<Self::Value>
    where
        P: FnOnce(&Self::Value) -> bool,
    {
        self.value().filter(predicate)
    }

    /// Transform the produced value with a function that may itself decline.
    fn and_then<U, F>(&self, f: F) -> Option<U>
    where
        F: FnOnce(Self::Value) -> Option<U>,
    {
        self.value().and_then(f)
    }

    /// The produced value, or the given default on absence.
    fn value_or(&self, default: Self::Value) -> Self::Value {
        self.value().unwrap_or(default)
    }

    /// The produced value, or one computed on absence.
    fn value_or_else<F>(&self, default: F) -> Self::Value
    where
        F: FnOnce() -> Self::Value,
    {
        self.value().unwrap_or_else(default)
    }

    /// The produced value, or a caller-chosen error on absence.
    ///
    /// This is the seam for callers that surface absence as their own
    /// "no such element" condition.
    fn value_or_err<E, F>(&self, err: F) -> Result<Self::Value, E>
    where
        F: FnOnce() -> E,
    {
        self.value().ok_or_else(err)
    }

    /// This source's value, or on absence the other source's.
    ///
    /// Unlike the defaulting source this is a one-shot consultation: no
    /// determinism is merged and nothing is remembered between calls.
    fn or_from<S>(&self, other: &S) -> Option<Self::Value>
    where
        S: Source<Value = Self::Value> + ?Sized,
    {
        match self.produce() {
            Ok(value) => Some(value),
            Err(_) => other.value(),
        }
    }

    /// The produced value, or one computed from the absence signal.
    ///
    /// The handler receives the absence kind, so recovery can differ for
    /// transitory and permanent absence.
    fn recover<F>(&self, handler: F) -> Self::Value
    where
        F: FnOnce(Absence) -> Self::Value,
    {
        match self.produce() {
            Ok(value) => value,
            Err(absence) => handler(absence),
        }
    }

    /// Run a callback with the produced value, if there is one.
    fn if_present<F>(&self, f: F)
    where
        F: FnOnce(Self::Value),
    {
        if let Some(value) = self.value() {
            f(value);
        }
    }

    /// Run one callback with the produced value, or another on absence.
    fn if_present_or_else<F, G>(&self, present: F, empty: G)
    where
        F: FnOnce(Self::Value),
        G: FnOnce(),
    {
        match self.value() {
            Some(value) => present(value),
            None => empty(),
        }
    }

    /// View the source as a sequence of zero or one values.
    fn iter(&self) -> std::option::IntoIter<Self::Value> {
        self.value().into_iter()
    }
}

impl<S: Source + ?Sized> SourceExt for S {}
