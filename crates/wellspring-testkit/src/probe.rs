//! A pass-through source that counts invocations

use std::sync::atomic::{AtomicUsize, Ordering};

use wellspring::{Determinism, Produced, Source};

/// A transparent wrapper counting how often `produce` is invoked.
///
/// Wrap a delegate in `ProbeSource`, hand the probe (usually behind an
/// `Arc`) to the code under test, and read [`calls`](ProbeSource::calls)
/// afterwards to assert how many productions actually happened - the tool
/// for "the fallback was never consulted" style assertions.
#[derive(Debug)]
pub struct ProbeSource<S> {
    inner: S,
    calls: AtomicUsize,
}

impl<S> ProbeSource<S> {
    /// Wrap a delegate source.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `produce` has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Unwrap the delegate.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Source> Source for ProbeSource<S> {
    type Value = S::Value;

    fn produce(&self) -> Produced<Self::Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.produce()
    }

    fn determinism(&self) -> Determinism {
        self.inner.determinism()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellspring::{Absence, Fixed};

    #[test]
    fn test_counts_productions() {
        let probe = ProbeSource::new(Fixed::new(3));
        assert_eq!(probe.calls(), 0);

        assert_eq!(probe.produce(), Ok(3));
        assert_eq!(probe.produce(), Ok(3));
        assert_eq!(probe.calls(), 2);
    }

    #[test]
    fn test_counts_absence_too() {
        let probe = ProbeSource::new(wellspring::Absent::<u32>::new());
        assert_eq!(probe.produce(), Err(Absence::Permanent));
        assert_eq!(probe.calls(), 1);
    }

    #[test]
    fn test_passes_the_claim_through() {
        let probe = ProbeSource::new(Fixed::new(1));
        assert_eq!(probe.determinism(), Determinism::Present);
    }
}
