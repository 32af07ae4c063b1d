//! Determinism - the four-state stability classification for value sources
//!
//! Every [`Source`](crate::source::Source) reports a `Determinism` describing
//! how stable its future outputs are. The classification forms a small
//! lattice: a source may narrow its claim over time (an unknown source may
//! learn its value exists forever) but must never widen it back to
//! [`Determinism::NonDeterministic`] or contradict a guarantee it already
//! made.
//!
//! # Narrowing
//!
//! The only legal transitions are toward stronger claims:
//!
//! - `NonDeterministic` → any other state
//! - `Deterministic` → `Present` (a value was produced and is now permanent)
//! - `Deterministic` → `Absent` (absence is now known to be permanent)
//!
//! `Absent` and `Present` are terminal. [`AtomicDeterminism`] is the cell
//! used by sources that narrow at runtime.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

/// How stable a source's future outputs are.
///
/// The default claim is [`Determinism::NonDeterministic`]: nothing is
/// promised. The three remaining states all satisfy
/// [`deterministic()`](Determinism::deterministic) and each carries a
/// specific guarantee the source must never contradict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Determinism {
    /// No stability promise; outputs may vary from call to call.
    #[default]
    NonDeterministic,
    /// Outputs will not vary going forward, but whether a value exists is
    /// not yet known.
    Deterministic,
    /// Permanently produces no value; every future invocation signals
    /// absence.
    Absent,
    /// Permanently produces an interchangeable value; every future
    /// invocation returns one.
    Present,
}

impl Determinism {
    /// Whether this state carries any stability guarantee.
    ///
    /// `true` for [`Deterministic`](Determinism::Deterministic),
    /// [`Absent`](Determinism::Absent), and
    /// [`Present`](Determinism::Present); `false` only for
    /// [`NonDeterministic`](Determinism::NonDeterministic).
    pub const fn deterministic(&self) -> bool {
        !matches!(self, Determinism::NonDeterministic)
    }

    /// Whether this state settles presence or absence permanently.
    ///
    /// `true` for [`Absent`](Determinism::Absent) and
    /// [`Present`](Determinism::Present), the two terminal states.
    pub const fn settled(&self) -> bool {
        matches!(self, Determinism::Absent | Determinism::Present)
    }

    const fn to_bits(self) -> u8 {
        match self {
            Determinism::NonDeterministic => 0,
            Determinism::Deterministic => 1,
            Determinism::Absent => 2,
            Determinism::Present => 3,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Determinism::NonDeterministic,
            1 => Determinism::Deterministic,
            2 => Determinism::Absent,
            3 => Determinism::Present,
            // The cell only ever stores values written by to_bits.
            _ => unreachable!("invalid determinism encoding: {bits}"),
        }
    }
}

impl fmt::Display for Determinism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Determinism::NonDeterministic => "non-deterministic",
            Determinism::Deterministic => "deterministic",
            Determinism::Absent => "absent",
            Determinism::Present => "present",
        };
        f.write_str(name)
    }
}

/// A lock-free cell holding a [`Determinism`] that narrows over time.
///
/// Sources that refine their claim at runtime (the defaulting source) keep
/// their current state here. Narrowing uses a plain release store rather
/// than compare-and-set: under a concurrent first-use race two callers may
/// both narrow, but every transition moves in the same direction, so the
/// final state is identical regardless of write order.
pub struct AtomicDeterminism {
    bits: AtomicU8,
}

impl AtomicDeterminism {
    /// Create a cell holding the given initial state.
    pub fn new(determinism: Determinism) -> Self {
        Self {
            bits: AtomicU8::new(determinism.to_bits()),
        }
    }

    /// Read the current state.
    pub fn load(&self) -> Determinism {
        Determinism::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Replace the current state.
    ///
    /// Callers must only store states that narrow the current one.
    pub fn store(&self, determinism: Determinism) {
        self.bits.store(determinism.to_bits(), Ordering::Release);
    }
}

impl fmt::Debug for AtomicDeterminism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicDeterminism").field(&self.load()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_non_deterministic() {
        assert_eq!(Determinism::default(), Determinism::NonDeterministic);
    }

    #[test]
    fn test_deterministic_predicate() {
        assert!(!Determinism::NonDeterministic.deterministic());
        assert!(Determinism::Deterministic.deterministic());
        assert!(Determinism::Absent.deterministic());
        assert!(Determinism::Present.deterministic());
    }

    #[test]
    fn test_settled_predicate() {
        assert!(!Determinism::NonDeterministic.settled());
        assert!(!Determinism::Deterministic.settled());
        assert!(Determinism::Absent.settled());
        assert!(Determinism::Present.settled());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Determinism::NonDeterministic.to_string(), "non-deterministic");
        assert_eq!(Determinism::Deterministic.to_string(), "deterministic");
        assert_eq!(Determinism::Absent.to_string(), "absent");
        assert_eq!(Determinism::Present.to_string(), "present");
    }

    #[test]
    fn test_atomic_cell_narrows() {
        let cell = AtomicDeterminism::new(Determinism::Deterministic);
        assert_eq!(cell.load(), Determinism::Deterministic);

        cell.store(Determinism::Present);
        assert_eq!(cell.load(), Determinism::Present);
    }

    #[test]
    fn test_atomic_cell_debug() {
        let cell = AtomicDeterminism::new(Determinism::Absent);
        let rendered = format!("{cell:?}");
        assert!(rendered.contains("Absent"));
    }

    #[test]
    fn test_bits_round_trip() {
        for d in [
            Determinism::NonDeterministic,
            Determinism::Deterministic,
            Determinism::Absent,
            Determinism::Present,
        ] {
            assert_eq!(Determinism::from_bits(d.to_bits()), d);
        }
    }
}
