//! Zero-value merge-patch semantics.
//!
//! Update payloads are decoded with every field defaulted, so a field that is
//! absent and a field that carries its type's zero value look the same. The
//! store treats both as "leave unchanged": only non-zero fields are written.
//!
//! The consequence is pinned by tests: a boolean cannot be
//! reset to `false`, a string cannot be cleared, and a list cannot be emptied
//! through an update.

/// Types with a distinguished "zero" value meaning "not provided".
pub trait ZeroValue {
    fn is_zero(&self) -> bool;
}

impl ZeroValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl ZeroValue for i32 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl ZeroValue for i64 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl<T> ZeroValue for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

/// Turn a decoded payload field into an update intent.
///
/// Returns `None` ("unchanged") for zero values, `Some(value)` otherwise.
pub fn present<T: ZeroValue>(value: T) -> Option<T> {
    if value.is_zero() {
        None
    } else {
        Some(value)
    }
}
