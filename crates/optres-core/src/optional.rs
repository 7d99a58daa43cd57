//! Optional type and operations
//!
//! The `Optional` type represents an optional value: either `Some(value)`
//! or `None`. `None` carries no payload, so every `None` of a given `T` is
//! the same value and can be shared freely between threads.
//!
//! # Callable discipline
//!
//! A `None` receiver only ever invokes a caller-supplied closure in the
//! operations whose purpose is to compute the fallback: `unwrap_or_else`,
//! `map_or_else`, `ok_or_else` and `or_else`. Every other closure runs on
//! the `Some` branch only.
//!
//! # Extraction failures
//!
//! `expect` and `unwrap` panic with a [`LogicError`] payload when called on
//! `None`; it can be recovered from `catch_unwind` with `downcast_ref`.

use std::fmt;
use std::panic::panic_any;

use crate::error::LogicError;
use crate::outcome::Outcome;

/// The Optional type
///
/// Ordering puts `None` before any `Some`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// No value
    None,
    /// Contains a value
    Some(T),
}

impl<T> Optional<T> {
    /// The shared `None` value.
    pub const NONE: Self = Optional::None;

    /// Returns `true` if the optional is a `Some` value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// Returns `true` if the optional is a `None` value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Optional::None)
    }

    /// Returns the contained `Some` value.
    ///
    /// # Panics
    ///
    /// Panics with [`LogicError::Expect`] carrying `msg` if the value is `None`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Optional::Some(x) => x,
            Optional::None => panic_any(LogicError::Expect(msg.to_owned())),
        }
    }

    /// Returns the contained `Some` value.
    ///
    /// # Panics
    ///
    /// Panics with [`LogicError::UnwrapNone`] if the value is `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Optional::Some(x) => x,
            Optional::None => panic_any(LogicError::UnwrapNone),
        }
    }

    /// Returns the contained `Some` value or a provided default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Some(x) => x,
            Optional::None => default,
        }
    }

    /// Returns the contained `Some` value or computes it from a closure.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Some(x) => x,
            Optional::None => f(),
        }
    }

    /// Maps an `Optional<T>` to `Optional<U>` by applying a function to a
    /// contained value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(x) => Optional::Some(f(x)),
            Optional::None => Optional::None,
        }
    }

    /// Applies `f` to the contained value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(x) => f(x),
            Optional::None => default,
        }
    }

    /// Applies `f` to the contained value, or computes a default with
    /// `default`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(x) => f(x),
            Optional::None => default(),
        }
    }

    /// Transforms `Some(v)` into `Ok(v)` and `None` into `Err(err)`.
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Optional::Some(x) => Outcome::Ok(x),
            Optional::None => Outcome::Err(err),
        }
    }

    /// Transforms `Some(v)` into `Ok(v)` and `None` into `Err(err())`.
    #[inline]
    pub fn ok_or_else<E, F>(self, err: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Some(x) => Outcome::Ok(x),
            Optional::None => Outcome::Err(err()),
        }
    }

    /// Returns `None` if the optional is `None`, otherwise returns `other`.
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Optional::Some(_) => other,
            Optional::None => Optional::None,
        }
    }

    /// Returns `None` if the optional is `None`, otherwise calls `f` with
    /// the wrapped value and returns the result.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Some(x) => f(x),
            Optional::None => Optional::None,
        }
    }

    /// Keeps a `Some` only when `predicate` accepts its value.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        if let Optional::Some(x) = self {
            if predicate(&x) {
                return Optional::Some(x);
            }
        }
        Optional::None
    }

    /// Returns the optional if it contains a value, otherwise `other`.
    #[inline]
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            x @ Optional::Some(_) => x,
            Optional::None => other,
        }
    }

    /// Returns the optional if it contains a value, otherwise calls `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        match self {
            x @ Optional::Some(_) => x,
            Optional::None => f(),
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match *self {
            Optional::Some(ref x) => Optional::Some(x),
            Optional::None => Optional::None,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match *self {
            Optional::Some(ref mut x) => Optional::Some(x),
            Optional::None => Optional::None,
        }
    }
}

impl<T> Default for Optional<T> {
    /// Returns `None`.
    fn default() -> Self {
        Optional::None
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Some(x) => write!(f, "Some({x:?})"),
            Optional::None => f.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Some(x) => write!(f, "Some {x}"),
            Optional::None => f.write_str("None"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(x) => Optional::Some(x),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(opt: Optional<T>) -> Self {
        match opt {
            Optional::Some(x) => Some(x),
            Optional::None => None,
        }
    }
}
