//! Wellspring testing infrastructure
//!
//! Deterministic test doubles for exercising source consumers: scripted
//! outcome sequences, invocation counting, and openable gates, plus
//! proptest strategies for determinism claims and produce outcomes.
//!
//! # Usage
//!
//! Add this to your crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! wellspring-testkit = { path = "../wellspring-testkit" }
//! ```
//!
//! Then in your tests:
//! ```rust
//! use wellspring::prelude::*;
//! use wellspring_testkit::ScriptedSource;
//!
//! let flaky = ScriptedSource::new([Err(Absence::Transitory), Ok(7)]);
//! assert_eq!(flaky.produce(), Err(Absence::Transitory));
//! assert_eq!(flaky.produce(), Ok(7));
//! ```

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod assertions;
pub mod gate;
pub mod probe;
pub mod script;
pub mod strategies;

// Re-export the library under test so assertion macros can name its traits.
pub use wellspring;

pub use gate::GateSource;
pub use probe::ProbeSource;
pub use script::ScriptedSource;
