//! ContentHashable - an optional determinate view for cache-key derivation

use std::borrow::Cow;
use std::fmt::Display;
use std::sync::Arc;

use crate::fixed::Fixed;

/// A value that may expose a determinate textual input for content hashing.
///
/// `Some` is a rendering that is stable across calls and across equivalent
/// instances, suitable as input to whatever hash a host application picks.
/// `None` means no determinate content view exists and hashing is
/// undefined for this value; callers must not substitute a default.
pub trait ContentHashable {
    /// The determinate hash input, if one exists.
    fn content_hash_input(&self) -> Option<Cow<'_, str>>;
}

impl<T: ContentHashable + ?Sized> ContentHashable for &T {
    fn content_hash_input(&self) -> Option<Cow<'_, str>> {
        (**self).content_hash_input()
    }
}

impl<T: ContentHashable + ?Sized> ContentHashable for Arc<T> {
    fn content_hash_input(&self) -> Option<Cow<'_, str>> {
        (**self).content_hash_input()
    }
}

impl<T: ContentHashable + ?Sized> ContentHashable for Box<T> {
    fn content_hash_input(&self) -> Option<Cow<'_, str>> {
        (**self).content_hash_input()
    }
}

/// A fixed source's content is its stored value's rendering: the value is
/// permanent, so the rendering is determinate.
impl<T: Display> ContentHashable for Fixed<T> {
    fn content_hash_input(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.get().to_string()))
    }
}
