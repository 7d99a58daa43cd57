//! Adapters producing [`Outcome`].
//!
//! These mirror [`super::option`] but keep the reason for failure:
//!
//! - an absent nullable becomes [`NullValueError`],
//! - a panicking callable becomes [`CallError::Panicked`] holding the
//!   original payload, untouched,
//! - an absent return or a `false` try pattern becomes an
//!   [`ArgumentError`] naming the callable and its arguments.
//!
//! Arguments are rendered with `Debug` before the call, since the callable
//! takes them by value.

use std::fmt::Debug;

use tracing::{debug, trace};

use super::callable_name;
use crate::error::{ArgumentError, ArgumentErrorKind, CallError, NullValueError};
use crate::fault::catch;
use crate::nullable::Nullable;
use crate::outcome::Outcome;

/// Wraps a nullable value: present becomes `Ok`, absent becomes
/// `Err(NullValueError)`.
#[inline]
pub fn from_nullable<N: Nullable>(value: N) -> Outcome<N::Value, NullValueError> {
    match value.into_present() {
        Some(v) => Outcome::Ok(v),
        None => Outcome::Err(NullValueError::of::<N::Value>()),
    }
}

macro_rules! call_adapters {
    ($( $(#[$doc:meta])* fn $name:ident($($arg:ident: $ty:ident),*); )*) => {$(
        $(#[$doc])*
        pub fn $name<F, N $(, $ty)*>(f: F $(, $arg: $ty)*) -> Outcome<N::Value, CallError>
        where
            F: FnOnce($($ty),*) -> N,
            N: Nullable,
            $($ty: Debug,)*
        {
            let callable = callable_name::<F>();
            let arguments: Vec<String> = vec![$(format!("{:?}", $arg)),*];
            match catch(callable, move || f($($arg),*)) {
                Ok(value) => match value.into_present() {
                    Some(v) => Outcome::Ok(v),
                    None => {
                        trace!(callable, "callable returned an absent value");
                        Outcome::Err(CallError::Absent(ArgumentError::new(
                            ArgumentErrorKind::AbsentReturn,
                            callable,
                            arguments,
                        )))
                    }
                },
                Err(fault) => {
                    debug!(callable, "keeping fault as the error value");
                    Outcome::Err(CallError::Panicked(fault))
                }
            }
        }
    )*};
}

macro_rules! try_adapters {
    ($( $(#[$doc:meta])* fn $name:ident($($arg:ident: $ty:ident),*); )*) => {$(
        $(#[$doc])*
        pub fn $name<F, R $(, $ty)*>(f: F $(, $arg: $ty)*) -> Outcome<R, ArgumentError>
        where
            F: FnOnce($($ty,)* &mut R) -> bool,
            R: Default,
            $($ty: Debug,)*
        {
            let callable = callable_name::<F>();
            let arguments: Vec<String> = vec![$(format!("{:?}", $arg)),*];
            let mut out = R::default();
            if f($($arg,)* &mut out) {
                Outcome::Ok(out)
            } else {
                trace!(callable, "try pattern returned false");
                Outcome::Err(ArgumentError::new(
                    ArgumentErrorKind::TryFailed,
                    callable,
                    arguments,
                ))
            }
        }
    )*};
}

call_adapters! {
    /// Calls `f()` once.
    ///
    /// - present return: `Ok(value)`
    /// - panic: `Err(CallError::Panicked(fault))`, payload untouched
    /// - absent return: `Err(CallError::Absent(..))`
    ///
    /// # Example
    ///
    /// ```
    /// use optres_core::adapt::result;
    /// use optres_core::CallError;
    ///
    /// assert_eq!(result::call0(|| Some(1)).unwrap(), 1);
    ///
    /// let err = result::call0(|| -> Option<i32> { panic!("this is test.") }).none().unwrap();
    /// assert!(matches!(err, CallError::Panicked(_)));
    /// ```
    fn call0();

    /// Calls `f(a1)` once; see [`call0`].
    fn call1(a1: A1);

    /// Calls `f(a1, a2)` once; see [`call0`].
    fn call2(a1: A1, a2: A2);

    /// Calls `f(a1, a2, a3)` once; see [`call0`].
    fn call3(a1: A1, a2: A2, a3: A3);

    /// Calls `f(a1, a2, a3, a4)` once; see [`call0`].
    fn call4(a1: A1, a2: A2, a3: A3, a4: A4);

    /// Calls `f(a1, a2, a3, a4, a5)` once; see [`call0`].
    fn call5(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
}

try_adapters! {
    /// Calls the try pattern `f(&mut out)` once. `true` yields `Ok(out)`;
    /// `false` yields an [`ArgumentError`] naming `f`.
    fn try_call0();

    /// Calls the try pattern `f(a1, &mut out)` once.
    ///
    /// # Example
    ///
    /// ```
    /// use optres_core::adapt::result;
    ///
    /// fn parse(s: &str, out: &mut i32) -> bool {
    ///     s.parse().map(|v| *out = v).is_ok()
    /// }
    ///
    /// assert_eq!(result::try_call1(parse, "123456").unwrap(), 123456);
    /// let err = result::try_call1(parse, "tanaka").none().unwrap();
    /// assert!(err.to_string().contains("\"tanaka\""));
    /// ```
    fn try_call1(a1: A1);

    /// Calls the try pattern `f(a1, a2, &mut out)` once; see [`try_call1`].
    fn try_call2(a1: A1, a2: A2);

    /// Calls the try pattern `f(a1, a2, a3, &mut out)` once.
    fn try_call3(a1: A1, a2: A2, a3: A3);

    /// Calls the try pattern `f(a1, a2, a3, a4, &mut out)` once.
    fn try_call4(a1: A1, a2: A2, a3: A3, a4: A4);

    /// Calls the try pattern `f(a1, a2, a3, a4, a5, &mut out)` once.
    fn try_call5(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
}
