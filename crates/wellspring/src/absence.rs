//! Absence - the two-variant signal a source raises instead of a value
//!
//! A source that cannot produce a value distinguishes *how* it cannot:
//! [`Absence::Transitory`] means a later attempt may succeed,
//! [`Absence::Permanent`] means no attempt ever will. Both are expected,
//! recoverable outcomes, not faults: the convenience layer treats either as
//! "no value", and only kind-sensitive callers match on the variant.
//!
//! Faults are different. A delegate that violates its own determinism claim
//! (a permanently-present source signaling absence) is a logic defect and is
//! reported by panicking, never through this type.

use serde::{Deserialize, Serialize};

/// Why a source produced no value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error,
)]
pub enum Absence {
    /// No value right now; a later invocation may produce one.
    #[error("no value is available yet; a later attempt may produce one")]
    Transitory,
    /// No value, ever; no invocation will produce one.
    #[error("no value will ever be available")]
    Permanent,
}

impl Absence {
    /// Whether a later invocation may still produce a value.
    pub const fn is_transitory(&self) -> bool {
        matches!(self, Absence::Transitory)
    }

    /// Whether absence is final.
    pub const fn is_permanent(&self) -> bool {
        matches!(self, Absence::Permanent)
    }
}

/// The outcome of asking a source for a value.
///
/// `Ok` carries the produced value; `Err` carries the absence kind. Sources
/// whose values are meaningfully "present but empty" use an optional-like
/// `T`; the error channel is reserved for absence of the value itself.
pub type Produced<T> = Result<T, Absence>;
