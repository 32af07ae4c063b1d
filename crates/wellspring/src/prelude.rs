//! Wellspring prelude.
//!
//! Curated re-exports for source construction and consumption without
//! spelling out individual modules.

pub use crate::absence::{Absence, Produced};
pub use crate::absent::Absent;
pub use crate::adapter::{from_fn, Claimed, FnSource};
pub use crate::caching::Caching;
pub use crate::defaulting::Defaulting;
pub use crate::determinism::Determinism;
pub use crate::fixed::Fixed;
pub use crate::source::{Source, SourceExt, SourceRef};
