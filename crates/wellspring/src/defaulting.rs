//! Defaulting - a source that composes a primary with a fallback
//!
//! `Defaulting<T>` consults its primary delegate first and routes absence to
//! the fallback, with one twist over a plain `or`-chain: it tracks a merged
//! [`Determinism`] that narrows as the composite learns about its delegates.
//! Once the primary is known to always succeed the fallback is never
//! consulted again; once both delegates are known to always fail, neither
//! is.
//!
//! # Merge rule
//!
//! The initial merged determinism is computed once, at construction, from
//! the delegates' own claims:
//!
//! | primary | fallback | merged |
//! |---|---|---|
//! | `Absent` | `Absent` | `Absent` (collapses; delegates dropped) |
//! | `Absent` | anything else | fallback adopted as sole source, with its claim |
//! | `Present` | any | `Present` (fallback dropped) |
//! | `Deterministic` | `Deterministic` | `Deterministic` |
//! | `Deterministic` | weaker | `NonDeterministic` |
//! | `NonDeterministic` | any | `NonDeterministic` |
//!
//! A missing delegate is the canonical [`Absent`] source, so "no fallback"
//! and "permanently absent fallback" are the same thing.

use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::absence::{Absence, Produced};
use crate::absent::Absent;
use crate::determinism::{AtomicDeterminism, Determinism};
use crate::source::{Source, SourceRef};

/// A retry of the composite can succeed only if some delegate might recover.
const fn join_absence(primary: Absence, fallback: Absence) -> Absence {
    if primary.is_transitory() || fallback.is_transitory() {
        Absence::Transitory
    } else {
        Absence::Permanent
    }
}

/// A primary source with a fallback, under a merged determinism claim.
///
/// # Determinism narrowing
///
/// While the merged claim is [`Determinism::Deterministic`], the composite
/// is still learning: the primary's first success narrows the claim to
/// [`Determinism::Present`] (the fallback is dropped from consideration),
/// and a call on which *both* delegates signal absence narrows it to
/// [`Determinism::Absent`] (no delegate is ever consulted again). Narrowing
/// is a plain atomic store - under a concurrent first-use race several
/// callers may narrow, but all move the claim the same direction, so
/// produced values are unaffected.
///
/// # Panics
///
/// `produce` panics if the merged claim is [`Determinism::Present`] and the
/// primary signals absence anyway. A permanently-present delegate that
/// stops producing has violated its own claim; that is a logic defect in
/// the delegate, not an absence to route to the fallback.
pub struct Defaulting<T> {
    primary: SourceRef<T>,
    fallback: SourceRef<T>,
    determinism: AtomicDeterminism,
}

impl<T: 'static> Defaulting<T> {
    /// Compose a primary source with a fallback.
    pub fn new<P, F>(primary: P, fallback: F) -> Self
    where
        P: Source<Value = T> + Send + Sync + 'static,
        F: Source<Value = T> + Send + Sync + 'static,
    {
        Self::from_refs(Some(Arc::new(primary)), Some(Arc::new(fallback)))
    }

    /// Compose a primary source with no fallback.
    ///
    /// Behaves as the primary alone, with the primary's determinism.
    pub fn primary_only<P>(primary: P) -> Self
    where
        P: Source<Value = T> + Send + Sync + 'static,
    {
        Self::from_refs(Some(Arc::new(primary)), None)
    }

    /// Compose a fallback source with no primary.
    ///
    /// Behaves as the fallback alone, with the fallback's determinism.
    pub fn fallback_only<F>(fallback: F) -> Self
    where
        F: Source<Value = T> + Send + Sync + 'static,
    {
        Self::from_refs(None, Some(Arc::new(fallback)))
    }

    /// The composition of no sources at all: permanently absent.
    pub fn absent() -> Self {
        Self::from_refs(None, None)
    }

    /// Compose from optional shared delegate handles.
    ///
    /// This is the general factory behind the other constructors; missing
    /// positions are wired to the canonical [`Absent`] source.
    pub fn from_refs(primary: Option<SourceRef<T>>, fallback: Option<SourceRef<T>>) -> Self {
        let (primary, fallback, determinism) = match (primary, fallback) {
            (None, None) => {
                let absent: SourceRef<T> = Arc::new(Absent::new());
                (absent.clone(), absent, Determinism::Absent)
            }
            (None, Some(sole)) | (Some(sole), None) => {
                let determinism = sole.determinism();
                (sole, Arc::new(Absent::new()) as SourceRef<T>, determinism)
            }
            (Some(primary), Some(fallback)) => Self::merged(primary, fallback),
        };
        Self {
            primary,
            fallback,
            determinism: AtomicDeterminism::new(determinism),
        }
    }

    /// Apply the construction-time merge rule to two delegates.
    fn merged(
        primary: SourceRef<T>,
        fallback: SourceRef<T>,
    ) -> (SourceRef<T>, SourceRef<T>, Determinism) {
        match (primary.determinism(), fallback.determinism()) {
            (Determinism::Absent, Determinism::Absent) => {
                let absent: SourceRef<T> = Arc::new(Absent::new());
                (absent.clone(), absent, Determinism::Absent)
            }
            // The primary will never produce; the fallback is the source.
            (Determinism::Absent, adopted) => {
                (fallback, Arc::new(Absent::new()) as SourceRef<T>, adopted)
            }
            (Determinism::Present, _) => {
                (primary, Arc::new(Absent::new()) as SourceRef<T>, Determinism::Present)
            }
            (Determinism::Deterministic, Determinism::Deterministic) => {
                (primary, fallback, Determinism::Deterministic)
            }
            (Determinism::Deterministic, _) | (Determinism::NonDeterministic, _) => {
                (primary, fallback, Determinism::NonDeterministic)
            }
        }
    }
}

impl<T: 'static> Source for Defaulting<T> {
    type Value = T;

    fn produce(&self) -> Produced<T> {
        match self.determinism.load() {
            // Both delegates are known exhausted; neither is consulted.
            Determinism::Absent => Err(Absence::Permanent),
            Determinism::Present => match self.primary.produce() {
                Ok(value) => Ok(value),
                Err(absence) => {
                    panic!("a source claiming permanent presence signaled absence: {absence}")
                }
            },
            Determinism::Deterministic => match self.primary.produce() {
                Ok(value) => {
                    self.determinism.store(Determinism::Present);
                    debug!(
                        from = %Determinism::Deterministic,
                        to = %Determinism::Present,
                        "narrowed determinism after the primary's first success"
                    );
                    Ok(value)
                }
                Err(primary_absence) => match self.fallback.produce() {
                    Ok(value) => Ok(value),
                    Err(fallback_absence) => {
                        self.determinism.store(Determinism::Absent);
                        debug!(
                            primary = %primary_absence,
                            fallback = %fallback_absence,
                            "narrowed determinism to absent; both delegates signaled absence"
                        );
                        Err(Absence::Permanent)
                    }
                },
            },
            Determinism::NonDeterministic => match self.primary.produce() {
                Ok(value) => Ok(value),
                Err(primary_absence) => match self.fallback.produce() {
                    Ok(value) => Ok(value),
                    Err(fallback_absence) => {
                        Err(join_absence(primary_absence, fallback_absence))
                    }
                },
            },
        }
    }

    fn determinism(&self) -> Determinism {
        self.determinism.load()
    }
}

impl<T> fmt::Debug for Defaulting<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defaulting")
            .field("determinism", &self.determinism.load())
            .finish_non_exhaustive()
    }
}
