//! Caching - a source that computes once and memoizes the winner
//!
//! `Caching<T>` wraps a delegate source and a single-assignment slot. The
//! first successful production (or an explicit [`set`](Caching::set)) fills
//! the slot; every later call returns a clone of the stored value without
//! consulting the delegate again.
//!
//! # Concurrency
//!
//! The slot transition is a compare-and-set race: concurrent first callers
//! may each compute a candidate, exactly one candidate wins, and losers
//! discard theirs and adopt the winner. Readers are lock-free once the slot
//! is filled. Because the delegate can run more than once under that race,
//! it must be side-effect-free.

use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::absence::Produced;
use crate::absent::Absent;
use crate::determinism::Determinism;
use crate::source::{Source, SourceRef};

/// A thread-safe memoizing source around a delegate producer.
///
/// Determinism narrows monotonically: [`Determinism::Deterministic`] while
/// the slot is unset (whatever ends up stored will be produced forever
/// after), [`Determinism::Present`] once it is filled, never back.
///
/// Only successful productions are memoized. Absence from the delegate
/// passes through uncached, so a transitorily-absent delegate can be
/// retried until it first succeeds.
pub struct Caching<T> {
    slot: OnceCell<T>,
    delegate: SourceRef<T>,
}

impl<T: Clone + Send + Sync + 'static> Caching<T> {
    /// Create an unset caching source with no delegate.
    ///
    /// Until [`set`](Caching::set) fills the slot, `produce` signals
    /// permanent absence.
    pub fn new() -> Self {
        Self {
            slot: OnceCell::new(),
            delegate: Arc::new(Absent::new()),
        }
    }

    /// Create a caching source born with its slot already filled.
    ///
    /// `determinism` reports [`Determinism::Present`] from the start and
    /// [`set`](Caching::set) can never win.
    pub fn fixed(value: T) -> Self {
        Self {
            slot: OnceCell::with_value(value),
            delegate: Arc::new(Absent::new()),
        }
    }

    /// Create an unset caching source that computes through `source` on
    /// first demand.
    ///
    /// The delegate must be side-effect-free: under a first-use race it may
    /// run in several threads at once, and all but one result is discarded.
    pub fn from_source<S>(source: S) -> Self
    where
        S: Source<Value = T> + Send + Sync + 'static,
    {
        Self {
            slot: OnceCell::new(),
            delegate: Arc::new(source),
        }
    }

    /// Create an unset caching source computing through a closure.
    ///
    /// The closure carries no determinism claim of its own; the same
    /// side-effect-freedom requirement as [`from_source`](Caching::from_source)
    /// applies.
    pub fn from_fn<F>(produce: F) -> Self
    where
        F: Fn() -> Produced<T> + Send + Sync + 'static,
    {
        Self::from_source(crate::adapter::from_fn(produce))
    }

    /// Borrow the memoized value, if the slot has been filled.
    ///
    /// Never invokes the delegate.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Attempt the unset→set transition with an explicit value.
    ///
    /// Returns whether this call filled the slot. Once any writer has won -
    /// this call, an earlier call, or a delegate computation - every
    /// subsequent `set` returns `false`, including for values equal to the
    /// stored one.
    pub fn set(&self, value: T) -> bool {
        self.slot.set(value).is_ok()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Caching<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> Source for Caching<T> {
    type Value = T;

    fn produce(&self) -> Produced<T> {
        if let Some(value) = self.slot.get() {
            return Ok(value.clone());
        }
        let candidate = self.delegate.produce()?;
        match self.slot.try_insert(candidate) {
            Ok(stored) => {
                trace!("memoized first produced value");
                Ok(stored.clone())
            }
            Err((winner, _discarded)) => {
                debug!("lost memoization race; adopting the winning value");
                Ok(winner.clone())
            }
        }
    }

    fn determinism(&self) -> Determinism {
        if self.slot.get().is_some() {
            Determinism::Present
        } else {
            Determinism::Deterministic
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Caching<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Caching")
            .field("slot", &self.slot.get())
            .finish_non_exhaustive()
    }
}
