//! A source that replays a scripted sequence of outcomes

use std::collections::VecDeque;
use std::sync::Mutex;

use wellspring::{Determinism, Produced, Source};

/// A source that produces a queued sequence of outcomes, in order.
///
/// Each `produce` call pops the next scripted outcome. Once the script is
/// exhausted the source settles into a steady outcome (permanent absence
/// unless overridden with [`with_exhausted`](ScriptedSource::with_exhausted)).
///
/// The reported determinism defaults to
/// [`Determinism::NonDeterministic`]; tests that exercise claim handling
/// override it with [`claiming`](ScriptedSource::claiming). The script is
/// not validated against the claim - producing outcomes that contradict
/// the claim is exactly how contract-violation handling gets tested.
#[derive(Debug)]
pub struct ScriptedSource<T> {
    steps: Mutex<VecDeque<Produced<T>>>,
    exhausted: Produced<T>,
    claim: Determinism,
}

impl<T: Clone> ScriptedSource<T> {
    /// Script the given outcomes, in order.
    pub fn new<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = Produced<T>>,
    {
        Self {
            steps: Mutex::new(steps.into_iter().collect()),
            exhausted: Err(wellspring::Absence::Permanent),
            claim: Determinism::NonDeterministic,
        }
    }

    /// Replace the steady outcome returned after the script runs out.
    pub fn with_exhausted(mut self, outcome: Produced<T>) -> Self {
        self.exhausted = outcome;
        self
    }

    /// Report the given determinism instead of the default.
    pub fn claiming(mut self, claim: Determinism) -> Self {
        self.claim = claim;
        self
    }

    /// How many scripted outcomes have not been consumed yet.
    pub fn remaining(&self) -> usize {
        self.steps.lock().expect("script lock poisoned").len()
    }
}

impl<T: Clone> Source for ScriptedSource<T> {
    type Value = T;

    fn produce(&self) -> Produced<T> {
        self.steps
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .unwrap_or_else(|| self.exhausted.clone())
    }

    fn determinism(&self) -> Determinism {
        self.claim
    }
}
