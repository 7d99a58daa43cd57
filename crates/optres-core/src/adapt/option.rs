//! Adapters producing [`Optional`].
//!
//! `Optional` has no error channel, so a panic raised by a wrapped callable
//! is caught, logged and dropped, collapsing to `None`.
//!
//! Dropping the fault happens after the fact: the process panic hook has
//! already run by then, so the default hook still prints the usual
//! `thread '..' panicked at ..` line to stderr. Install a quieter hook with
//! [`std::panic::set_hook`] if that output is unwanted.

use tracing::{debug, trace};

use super::callable_name;
use crate::fault::catch;
use crate::nullable::Nullable;
use crate::optional::Optional;

/// Wraps a nullable value: present becomes `Some`, absent becomes `None`.
///
/// # Example
///
/// ```
/// use optres_core::adapt::option;
/// use optres_core::Optional;
///
/// assert_eq!(option::from_nullable(Some(1)), Optional::Some(1));
/// assert_eq!(option::from_nullable(None::<i32>), Optional::None);
/// ```
#[inline]
pub fn from_nullable<N: Nullable>(value: N) -> Optional<N::Value> {
    match value.into_present() {
        Some(v) => Optional::Some(v),
        None => Optional::None,
    }
}

macro_rules! call_adapters {
    ($( $(#[$doc:meta])* fn $name:ident($($arg:ident: $ty:ident),*); )*) => {$(
        $(#[$doc])*
        pub fn $name<F, N $(, $ty)*>(f: F $(, $arg: $ty)*) -> Optional<N::Value>
        where
            F: FnOnce($($ty),*) -> N,
            N: Nullable,
        {
            let callable = callable_name::<F>();
            match catch(callable, move || f($($arg),*)) {
                Ok(value) => {
                    let wrapped = from_nullable(value);
                    if wrapped.is_none() {
                        trace!(callable, "callable returned an absent value");
                    }
                    wrapped
                }
                Err(_) => {
                    debug!(callable, "dropping fault, collapsing to None");
                    Optional::None
                }
            }
        }
    )*};
}

macro_rules! try_adapters {
    ($( $(#[$doc:meta])* fn $name:ident($($arg:ident: $ty:ident),*); )*) => {$(
        $(#[$doc])*
        pub fn $name<F, R $(, $ty)*>(f: F $(, $arg: $ty)*) -> Optional<R>
        where
            F: FnOnce($($ty,)* &mut R) -> bool,
            R: Default,
        {
            let mut out = R::default();
            if f($($arg,)* &mut out) {
                Optional::Some(out)
            } else {
                trace!(callable = callable_name::<F>(), "try pattern returned false");
                Optional::None
            }
        }
    )*};
}

call_adapters! {
    /// Calls `f()` once. A present return becomes `Some`; a panic or an
    /// absent return becomes `None`.
    ///
    /// A panic is still reported by the panic hook before it is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use optres_core::adapt::option;
    /// use optres_core::Optional;
    ///
    /// assert_eq!(option::call0(|| Some(1)), Optional::Some(1));
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
    /// Calls the try pattern `f(&mut out)` once. `true` yields
    /// `Some(out)`, `false` yields `None`. `out` starts at `R::default()`.
    fn try_call0();

    /// Calls the try pattern `f(a1, &mut out)` once.
    ///
    /// # Example
    ///
    /// ```
    /// use optres_core::adapt::option;
    /// use optres_core::Optional;
    ///
    /// fn parse(s: &str, out: &mut i32) -> bool {
    ///     s.parse().map(|v| *out = v).is_ok()
    /// }
    ///
    /// assert_eq!(option::try_call1(parse, "123456"), Optional::Some(123456));
    /// assert_eq!(option::try_call1(parse, "tanaka"), Optional::None);
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn parse_i32(s: &str, out: &mut i32) -> bool {
        match s.parse() {
            Ok(v) => {
                *out = v;
                true
            }
            Err(_) => false,
        }
    }

    #[test]
    fn test_from_nullable() {
        assert_eq!(from_nullable(Some(1)), Optional::Some(1));
        assert_eq!(from_nullable(None::<i32>), Optional::None);
        assert!(from_nullable(std::ptr::null::<u8>()).is_none());
    }

    #[test]
    fn test_call0() {
        assert_eq!(call0(|| Some(1)), Optional::Some(1));
        assert_eq!(call0(|| None::<i32>), Optional::None);
        assert_eq!(
            call0(|| -> Option<i32> { panic!("this is test.") }),
            Optional::None
        );
    }

    #[test]
    fn test_call_invokes_once() {
        let calls = Cell::new(0);
        let counted = |x: i32| -> Option<i32> {
            calls.set(calls.get() + 1);
            if x < 0 {
                panic!("negative");
            }
            (x > 0).then_some(x)
        };
        assert_eq!(call1(counted, 5), Optional::Some(5));
        assert_eq!(call1(counted, 0), Optional::None);
        assert_eq!(call1(counted, -1), Optional::None);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_call_arities() {
        assert_eq!(call2(|a: i32, b: i32| Some(a + b), 1, 2), Optional::Some(3));
        assert_eq!(
            call3(|a: i32, b: i32, c: i32| Some(a + b + c), 1, 2, 3),
            Optional::Some(6)
        );
        assert_eq!(
            call4(|a: i32, b: i32, c: i32, d: i32| Some(a * b * c * d), 1, 2, 3, 4),
            Optional::Some(24)
        );
        assert_eq!(
            call5(
                |a: &str, b: &str, c: &str, d: &str, e: &str| Some(format!("{a}{b}{c}{d}{e}")),
                "a",
                "b",
                "c",
                "d",
                "e"
            ),
            Optional::Some("abcde".to_string())
        );
    }

    #[test]
    fn test_try_call() {
        assert_eq!(try_call1(parse_i32, "123456"), Optional::Some(123456));
        assert_eq!(try_call1(parse_i32, "tanaka"), Optional::None);

        let always = |out: &mut u8| {
            *out = 9;
            true
        };
        assert_eq!(try_call0(always), Optional::Some(9));
        assert_eq!(
            try_call2(|a: u8, b: u8, out: &mut u8| a.checked_add(b).map(|v| *out = v).is_some(), 200, 100),
            Optional::None
        );
    }

    #[test]
    fn test_try_call_higher_arities() {
        let sum3 = |a: i32, b: i32, c: i32, out: &mut i32| {
            *out = a + b + c;
            true
        };
        assert_eq!(try_call3(sum3, 1, 2, 3), Optional::Some(6));

        let never = |_: i32, _: i32, _: i32, _: i32, _: &mut i32| false;
        assert_eq!(try_call4(never, 1, 2, 3, 4), Optional::None);

        let join = |a: char, b: char, c: char, d: char, e: char, out: &mut String| {
            out.extend([a, b, c, d, e]);
            true
        };
        assert_eq!(
            try_call5(join, 'h', 'e', 'l', 'l', 'o'),
            Optional::Some("hello".to_string())
        );
    }
}
