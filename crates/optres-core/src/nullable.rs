//! Native carriers of "maybe a value".
//!
//! [`Nullable`] is how the adapters decide whether a host value is present.
//! It is implemented for [`Option`] and for raw pointers, the two nullable
//! shapes Rust code hands across boundaries.

use std::ptr::NonNull;

/// A value that is either present or absent.
pub trait Nullable {
    /// The value type when present.
    type Value;

    /// Returns the present value, or `None` when absent.
    fn into_present(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn into_present(self) -> Option<T> {
        self
    }
}

/// A null pointer is absent.
impl<T> Nullable for *mut T {
    type Value = NonNull<T>;

    #[inline]
    fn into_present(self) -> Option<NonNull<T>> {
        NonNull::new(self)
    }
}

/// A null pointer is absent.
impl<T> Nullable for *const T {
    type Value = NonNull<T>;

    #[inline]
    fn into_present(self) -> Option<NonNull<T>> {
        NonNull::new(self.cast_mut())
    }
}
