//! Adapters - turning closures and claims into sources
//!
//! Existing [`Source`] values are used directly and never re-wrapped; the
//! adapters here cover the two remaining cases:
//!
//! - a bare closure, which carries no determinism claim of its own
//!   ([`from_fn`], [`FnSource::claiming`]), and
//! - an existing source whose claim a caller wants to assert up front
//!   ([`Claimed`]), validated at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::absence::Produced;
use crate::determinism::Determinism;
use crate::source::Source;

/// Wrap a closure as a source claiming nothing.
///
/// The resulting source reports [`Determinism::NonDeterministic`], the one
/// claim every closure can honor. Use [`FnSource::claiming`] when the caller
/// can vouch for a stronger claim.
pub fn from_fn<T, F>(produce: F) -> FnSource<F>
where
    F: Fn() -> Produced<T>,
{
    FnSource::new(produce)
}

/// A source backed by a closure.
#[derive(Clone)]
pub struct FnSource<F> {
    producer: F,
    claim: Determinism,
}

impl<F> FnSource<F> {
    /// Wrap a closure, claiming [`Determinism::NonDeterministic`].
    pub fn new(producer: F) -> Self {
        Self {
            producer,
            claim: Determinism::NonDeterministic,
        }
    }

    /// Wrap a closure under an explicit determinism claim.
    ///
    /// The claim is trusted: a bare closure has no claim of its own to
    /// contradict, so nothing is validated here. The caller takes on the
    /// [`Determinism`] contract - composites treat a claim of
    /// [`Determinism::Present`] that signals absence as a logic defect and
    /// panic.
    pub fn claiming(claim: Determinism, producer: F) -> Self {
        Self { producer, claim }
    }
}

impl<T, F> Source for FnSource<F>
where
    F: Fn() -> Produced<T>,
{
    type Value = T;

    fn produce(&self) -> Produced<T> {
        (self.producer)()
    }

    fn determinism(&self) -> Determinism {
        self.claim
    }
}

impl<F> fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource")
            .field("claim", &self.claim)
            .finish_non_exhaustive()
    }
}

/// A determinism claim that contradicts the source's own.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error,
)]
#[error("claimed determinism ({claimed}) contradicts the source's own claim ({actual})")]
pub struct ClaimError {
    /// The determinism the caller asserted.
    pub claimed: Determinism,
    /// The determinism the source reports for itself.
    pub actual: Determinism,
}

/// A source whose determinism claim was asserted and validated up front.
///
/// `Claimed` pins the delegate's claim as observed at construction. A
/// later narrowing by the delegate (a caching source filling its slot) is
/// invisible through the wrapper; the pinned claim stays valid because
/// narrowing only ever strengthens the delegate's guarantee.
#[derive(Debug, Clone)]
pub struct Claimed<S> {
    source: S,
    determinism: Determinism,
}

impl<S: Source> Claimed<S> {
    /// Assert `claim` over `source`.
    ///
    /// Accepts the assertion when it matches the source's own claim, or
    /// when it is [`Determinism::NonDeterministic`] - the caller asserting
    /// nothing defers to the source. Either way the wrapper adopts the
    /// source's claim. A contradictory assertion is an input-validation
    /// error.
    pub fn new(claim: Determinism, source: S) -> Result<Self, ClaimError> {
        let actual = source.determinism();
        if claim == actual || claim == Determinism::NonDeterministic {
            Ok(Self {
                source,
                determinism: actual,
            })
        } else {
            Err(ClaimError {
                claimed: claim,
                actual,
            })
        }
    }

    /// Unwrap the delegate.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Source> Source for Claimed<S> {
    type Value = S::Value;

    fn produce(&self) -> Produced<Self::Value> {
        self.source.produce()
    }

    fn determinism(&self) -> Determinism {
        self.determinism
    }
}
