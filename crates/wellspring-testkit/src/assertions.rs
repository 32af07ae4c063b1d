//! Standard assertion helpers for source tests
//!
//! Assertion macros over produce outcomes and determinism claims, with
//! messages that name what the source actually did.

/// Assert that a source produces the expected value.
#[macro_export]
macro_rules! assert_produces {
    ($source:expr, $expected:expr) => {
        match $crate::wellspring::Source::produce(&$source) {
            Ok(value) => assert_eq!(value, $expected, "produced a different value"),
            Err(absence) => panic!("expected a value, got absence: {absence}"),
        }
    };
}

/// Assert that a source signals the expected absence kind.
#[macro_export]
macro_rules! assert_absence {
    ($source:expr, $expected:expr) => {
        match $crate::wellspring::Source::produce(&$source) {
            Ok(value) => panic!("expected absence, produced {value:?}"),
            Err(absence) => assert_eq!(absence, $expected, "signaled a different absence kind"),
        }
    };
}

/// Assert a source's current determinism claim.
#[macro_export]
macro_rules! assert_claims {
    ($source:expr, $expected:expr) => {
        assert_eq!(
            $crate::wellspring::Source::determinism(&$source),
            $expected,
            "source reports a different determinism claim"
        )
    };
}
