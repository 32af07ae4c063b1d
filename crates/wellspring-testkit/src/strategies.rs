//! Property test strategies for wellspring types
//!
//! Composable proptest strategies generating determinism claims, absence
//! kinds, and produce outcomes.

use proptest::prelude::*;

// Re-export proptest for convenience
pub use proptest;

use wellspring::{Absence, Determinism, Produced};

/// Strategy over all four determinism states.
///
/// # Example
///
/// ```rust
/// use wellspring_testkit::strategies::arb_determinism;
/// use proptest::prelude::*;
///
/// proptest! {
///     #[test]
///     fn claims_never_widen(claim in arb_determinism()) {
///         prop_assert!(claim.deterministic() || claim == wellspring::Determinism::NonDeterministic);
///     }
/// }
/// ```
pub fn arb_determinism() -> impl Strategy<Value = Determinism> {
    prop_oneof![
        Just(Determinism::NonDeterministic),
        Just(Determinism::Deterministic),
        Just(Determinism::Absent),
        Just(Determinism::Present),
    ]
}

/// Strategy over the two absence kinds.
pub fn arb_absence() -> impl Strategy<Value = Absence> {
    prop_oneof![Just(Absence::Transitory), Just(Absence::Permanent)]
}

/// Strategy over produce outcomes, weighted toward values.
pub fn arb_produced<T, S>(value: S) -> impl Strategy<Value = Produced<T>>
where
    T: std::fmt::Debug,
    S: Strategy<Value = T>,
{
    prop_oneof![
        2 => value.prop_map(Ok),
        1 => arb_absence().prop_map(Err),
    ]
}
