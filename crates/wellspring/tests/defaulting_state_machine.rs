//! Scenario Tests: Defaulting Produce Transitions
//!
//! Walks a defaulting source through its produce-time transitions: fallback
//! consultation while the primary is unsettled, the cutover once the primary
//! first succeeds, permanent collapse after a double absence, and the
//! retry-forever behavior of non-deterministic composites.

use std::sync::Arc;

use wellspring::{Absence, Caching, Defaulting, Determinism, Fixed, Source, SourceRef};
use wellspring_testkit::{GateSource, ProbeSource, ScriptedSource};

#[test]
fn present_primary_always_answers() {
    let fallback = Arc::new(ProbeSource::new(Fixed::new("b")));
    let source = Defaulting::from_refs(
        Some(Arc::new(Fixed::new("a")) as SourceRef<&str>),
        Some(fallback.clone() as SourceRef<&str>),
    );

    assert_eq!(source.determinism(), Determinism::Present);
    assert_eq!(source.produce(), Ok("a"));
    assert_eq!(source.produce(), Ok("a"));
    assert_eq!(fallback.calls(), 0);
}

#[test]
fn unset_cache_primary_falls_back_until_set() {
    let primary: Arc<Caching<&str>> = Arc::new(Caching::new());
    let fallback = Arc::new(ProbeSource::new(Fixed::new("y")));
    let source = Defaulting::from_refs(
        Some(primary.clone() as SourceRef<&str>),
        Some(fallback.clone() as SourceRef<&str>),
    );

    // Deterministic-but-unset primary with a present fallback merges to
    // non-deterministic: the composite cannot promise stability.
    assert_eq!(source.determinism(), Determinism::NonDeterministic);

    // Until the slot is written every call retries the primary and lands on
    // the fallback.
    assert_eq!(source.produce(), Ok("y"));
    assert_eq!(source.produce(), Ok("y"));
    assert_eq!(fallback.calls(), 2);

    // Once the slot is written the primary answers and the fallback rests.
    assert!(primary.set("x"));
    assert_eq!(source.produce(), Ok("x"));
    assert_eq!(source.produce(), Ok("x"));
    assert_eq!(fallback.calls(), 2);
    assert_eq!(source.determinism(), Determinism::NonDeterministic);
}

#[test]
fn deterministic_composite_uses_fallback_only_while_unsettled() {
    let primary = Arc::new(ProbeSource::new(
        ScriptedSource::new([Err(Absence::Transitory), Ok("p")])
            .with_exhausted(Ok("p"))
            .claiming(Determinism::Deterministic),
    ));
    let fallback = Arc::new(ProbeSource::new(
        ScriptedSource::new([Ok("f")])
            .with_exhausted(Ok("f"))
            .claiming(Determinism::Deterministic),
    ));
    let source = Defaulting::from_refs(
        Some(primary.clone() as SourceRef<&str>),
        Some(fallback.clone() as SourceRef<&str>),
    );
    assert_eq!(source.determinism(), Determinism::Deterministic);

    // First call: the primary misses, the fallback covers, nothing narrows.
    assert_eq!(source.produce(), Ok("f"));
    assert_eq!(source.determinism(), Determinism::Deterministic);
    assert_eq!((primary.calls(), fallback.calls()), (1, 1));

    // Second call: the primary settles and the claim narrows.
    assert_eq!(source.produce(), Ok("p"));
    assert_eq!(source.determinism(), Determinism::Present);

    // From here the fallback is out of the loop.
    assert_eq!(source.produce(), Ok("p"));
    assert_eq!((primary.calls(), fallback.calls()), (3, 1));
}

#[test]
fn double_absence_in_deterministic_state_collapses_for_good() {
    let primary = Arc::new(ProbeSource::new(
        ScriptedSource::<u32>::new([]).claiming(Determinism::Deterministic),
    ));
    let fallback = Arc::new(ProbeSource::new(
        ScriptedSource::<u32>::new([]).claiming(Determinism::Deterministic),
    ));
    let source = Defaulting::from_refs(
        Some(primary.clone() as SourceRef<u32>),
        Some(fallback.clone() as SourceRef<u32>),
    );

    assert_eq!(source.produce(), Err(Absence::Permanent));
    assert_eq!(source.determinism(), Determinism::Absent);
    assert_eq!((primary.calls(), fallback.calls()), (1, 1));

    // A collapsed composite stops consulting its delegates.
    assert_eq!(source.produce(), Err(Absence::Permanent));
    assert_eq!((primary.calls(), fallback.calls()), (1, 1));
}

#[test]
fn transitory_primary_keeps_the_composite_retrying() {
    let gate: Arc<GateSource<&str>> = Arc::new(GateSource::closed());
    let fallback: Arc<Caching<&str>> = Arc::new(Caching::new());
    let source = Defaulting::from_refs(
        Some(gate.clone() as SourceRef<&str>),
        Some(fallback.clone() as SourceRef<&str>),
    );
    assert_eq!(source.determinism(), Determinism::NonDeterministic);

    // Closed gate, empty cache: the transitory side wins the absence join.
    assert_eq!(source.produce(), Err(Absence::Transitory));

    assert!(fallback.set("cached"));
    assert_eq!(source.produce(), Ok("cached"));

    gate.open("live");
    assert_eq!(source.produce(), Ok("live"));

    gate.close();
    assert_eq!(source.produce(), Ok("cached"));
}
