//! Wellspring - lazily-computed, possibly-absent, determinism-tracked values
//!
//! A [`Source`] is a capability that produces a value on demand or signals
//! [`Absence`] instead, and that classifies its own temporal stability with
//! a four-state [`Determinism`] claim: unpredictable, stable-but-unknown,
//! permanently absent, or permanently present. Claims may narrow over time
//! but never weaken.
//!
//! # Layers
//!
//! - **Contract**: [`Source`] (one producing operation, one determinism
//!   query) and the absence signal taxonomy ([`Absence`], [`Produced`]).
//! - **Built-in sources**: [`Fixed`] (always present), [`Absent`] (always
//!   absent), [`Caching`] (thread-safe single-assignment memoization),
//!   [`Defaulting`] (primary/fallback composition with determinism
//!   merging).
//! - **Convenience**: [`SourceExt`], blanket-implemented for every source,
//!   defines all derived operations in terms of `produce` alone.
//! - **Adapters**: [`from_fn`] and [`Claimed`] bring closures and external
//!   claims into the contract.
//!
//! # Concurrency
//!
//! Everything here is a concurrency-safe data structure, not a scheduler:
//! all operations run synchronously on the calling thread. The caching
//! source resolves concurrent first use with a single-winner
//! compare-and-set; the defaulting source narrows its determinism with
//! monotonic atomic stores. No operation blocks readers once a value is
//! known.

#![forbid(unsafe_code)]

// === Modules ===

/// Absence signals and the produce-result alias
pub mod absence;

/// The canonical always-absent source
pub mod absent;

/// Closure adapters and validated determinism claims
pub mod adapter;

/// Thread-safe single-assignment memoization
pub mod caching;

/// Optional determinate views for content hashing
pub mod content;

/// Primary/fallback composition with determinism merging
pub mod defaulting;

/// The four-state stability classification
pub mod determinism;

/// The always-present constant source
pub mod fixed;

/// The source contract and its convenience layer
pub mod source;

/// Curated re-exports for typical usage
pub mod prelude;

// === Public API Re-exports ===

// Contract
pub use absence::{Absence, Produced};
pub use determinism::{AtomicDeterminism, Determinism};
pub use source::{Source, SourceExt, SourceRef};

// Built-in sources
pub use absent::Absent;
pub use caching::Caching;
pub use defaulting::Defaulting;
pub use fixed::Fixed;

// Adapters
pub use adapter::{from_fn, ClaimError, Claimed, FnSource};

// Content hashing
pub use content::ContentHashable;
