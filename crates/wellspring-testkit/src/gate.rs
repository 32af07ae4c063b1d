//! A source that is transitorily absent until a test opens it

use std::sync::RwLock;

use wellspring::{Absence, Determinism, Produced, Source};

/// A source whose value appears and disappears under test control.
///
/// While closed, `produce` signals [`Absence::Transitory`] - the "no value
/// right now, retry later" shape. [`open`](GateSource::open) installs a
/// value; [`close`](GateSource::close) removes it again. The claim is
/// honestly [`Determinism::NonDeterministic`] throughout.
#[derive(Debug, Default)]
pub struct GateSource<T> {
    slot: RwLock<Option<T>>,
}

impl<T: Clone> GateSource<T> {
    /// A gate with no value yet.
    pub fn closed() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Install the value produced from now on.
    pub fn open(&self, value: T) {
        *self.slot.write().expect("gate lock poisoned") = Some(value);
    }

    /// Remove the value; the gate signals transitory absence again.
    pub fn close(&self) {
        *self.slot.write().expect("gate lock poisoned") = None;
    }

    /// Whether a value is currently installed.
    pub fn is_open(&self) -> bool {
        self.slot.read().expect("gate lock poisoned").is_some()
    }
}

impl<T: Clone> Source for GateSource<T> {
    type Value = T;

    fn produce(&self) -> Produced<T> {
        match &*self.slot.read().expect("gate lock poisoned") {
            Some(value) => Ok(value.clone()),
            None => Err(Absence::Transitory),
        }
    }

    fn determinism(&self) -> Determinism {
        Determinism::NonDeterministic
    }
}
