//! Outcome type and operations
//!
//! `Outcome<T, E>` is the result of a computation that may fail: either
//! `Ok(value)` or `Err(error)`. Combinators work on one track and pass the
//! other through untouched.
//!
//! # Type Class Instances
//!
//! - `Eq` / `Ord` / `Hash`: `Ok(_)` orders before `Err(_)`
//! - `Functor`: `map` over the `Ok` track
//! - `Bifunctor`: `map_err` over the `Err` track
//! - `Monad`: `and_then` (Ok-biased)
//!
//! # Unwrapping a fault
//!
//! When the stored error is itself a captured panic ([`Fault`],
//! [`CallError::Panicked`], or the raw `Box<dyn Any + Send>` payload that
//! `catch_unwind` returns), `unwrap` re-raises that panic with its original
//! payload instead of wrapping it again. Any other error becomes a
//! [`LogicError::UnwrapErr`] panic.

use std::any::Any;
use std::fmt;
use std::panic::{self, panic_any};

use crate::error::{CallError, LogicError};
use crate::fault::Fault;
use crate::optional::Optional;

/// The Outcome type
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// Contains the success value
    Ok(T),
    /// Contains the error value
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if the outcome is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Converts into `Optional<T>`, discarding the error.
    #[inline]
    pub fn some(self) -> Optional<T> {
        match self {
            Outcome::Ok(x) => Optional::Some(x),
            Outcome::Err(_) => Optional::None,
        }
    }

    /// Converts into `Optional<E>`, discarding the success value.
    ///
    /// The name mirrors [`Outcome::some`] on the error side; it is not a
    /// negation of it.
    #[inline]
    pub fn none(self) -> Optional<E> {
        match self {
            Outcome::Ok(_) => Optional::None,
            Outcome::Err(e) => Optional::Some(e),
        }
    }

    /// Maps an `Outcome<T, E>` to `Outcome<U, E>` by applying a function
    /// to a contained `Ok` value, leaving an `Err` value untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(x) => Outcome::Ok(f(x)),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Maps an `Outcome<T, E>` to `Outcome<T, F>` by applying a function
    /// to a contained `Err` value, leaving an `Ok` value untouched.
    #[inline]
    pub fn map_err<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Ok(x) => Outcome::Ok(x),
            Outcome::Err(e) => Outcome::Err(op(e)),
        }
    }

    /// Returns `other` if the outcome is `Ok`, otherwise the `Err` of self.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(_) => other,
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Calls `op` with the `Ok` value, otherwise returns the `Err` of self.
    #[inline]
    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(x) => op(x),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Returns `other` if the outcome is `Err`, otherwise the `Ok` of self.
    #[inline]
    pub fn or(self, other: Outcome<T, E>) -> Outcome<T, E> {
        match self {
            x @ Outcome::Ok(_) => x,
            Outcome::Err(_) => other,
        }
    }

    /// Calls `op` with the `Err` value, otherwise returns the `Ok` of self.
    #[inline]
    pub fn or_else<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Outcome::Ok(x) => Outcome::Ok(x),
            Outcome::Err(e) => op(e),
        }
    }

    /// Returns the contained `Ok` value.
    ///
    /// # Panics
    ///
    /// On `Err`: re-raises the original panic if the error is a captured
    /// fault, otherwise panics with [`LogicError::UnwrapErr`].
    ///
    /// # Limitations
    ///
    /// Telling a fault apart from an ordinary error is a runtime type check,
    /// which needs `E: 'static`. An `Outcome` whose error borrows
    /// non-`'static` data cannot be unwrapped; use [`Outcome::unwrap_or_else`]
    /// or map the error to an owned value first.
    ///
    /// ```compile_fail
    /// use optres_core::Outcome;
    ///
    /// fn first_digit(input: &str) -> u32 {
    ///     let parsed: Outcome<u32, &str> = Outcome::Err(input);
    ///     parsed.unwrap()
    /// }
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug + 'static,
    {
        match self {
            Outcome::Ok(x) => x,
            Outcome::Err(e) => raise(e),
        }
    }

    /// Returns the contained `Ok` value or a provided default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(x) => x,
            Outcome::Err(_) => default,
        }
    }

    /// Returns the contained `Ok` value or computes it from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(x) => x,
            Outcome::Err(e) => op(e),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match *self {
            Outcome::Ok(ref x) => Outcome::Ok(x),
            Outcome::Err(ref e) => Outcome::Err(e),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match *self {
            Outcome::Ok(ref mut x) => Outcome::Ok(x),
            Outcome::Err(ref mut e) => Outcome::Err(e),
        }
    }
}

/// Panics for an `Err` reached by `unwrap`.
#[track_caller]
fn raise<E: fmt::Debug + 'static>(error: E) -> ! {
    let description = format!("{error:?}");
    let error: Box<dyn Any> = Box::new(error);
    let error = match error.downcast::<Fault>() {
        Ok(fault) => (*fault).resume(),
        Err(other) => other,
    };
    let error = match error.downcast::<Box<dyn Any + Send>>() {
        Ok(payload) => panic::resume_unwind(*payload),
        Err(other) => other,
    };
    if let Ok(call) = error.downcast::<CallError>() {
        if let CallError::Panicked(fault) = *call {
            fault.resume();
        }
    }
    panic_any(LogicError::UnwrapErr { description })
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(x) => write!(f, "Ok({x:?})"),
            Outcome::Err(e) => write!(f, "Err({e:?})"),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(x) => write!(f, "Ok {x}"),
            Outcome::Err(e) => write!(f, "Err {e}"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(x) => Outcome::Ok(x),
            Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(x) => Ok(x),
            Outcome::Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArgumentError, ArgumentErrorKind};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn panic_payload<R>(f: impl FnOnce() -> R) -> Box<dyn Any + Send> {
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(_) => panic!("expected a panic"),
            Err(payload) => payload,
        }
    }

    fn boom() -> Fault {
        Fault::from_payload(Box::new("this is test."))
    }

    #[test]
    fn test_is_ok_is_err() {
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        let err: Outcome<i32, &str> = Outcome::Err("e");
        assert!(ok.is_ok() && !ok.is_err());
        assert!(err.is_err() && !err.is_ok());
    }

    #[test]
    fn test_some_and_none() {
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        let err: Outcome<i32, &str> = Outcome::Err("error message.");
        assert_eq!(ok.some(), Optional::Some(1));
        assert_eq!(err.some(), Optional::None);
        assert_eq!(ok.none(), Optional::None);
        assert_eq!(err.none(), Optional::Some("error message."));
    }

    #[test]
    fn test_map() {
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        assert_eq!(ok.map(|x| x + 1), Outcome::Ok(2));
        let err: Outcome<i32, &str> = Outcome::Err("e");
        assert_eq!(
            err.map(|_| -> String { unreachable!() }),
            Outcome::Err("e")
        );
    }

    #[test]
    fn test_map_err() {
        let err: Outcome<i32, String> = Outcome::Err("e".into());
        assert_eq!(err.map_err(|x| x + "!"), Outcome::Err("e!".to_string()));
        let ok: Outcome<i32, String> = Outcome::Ok(1);
        assert_eq!(
            ok.map_err(|_| -> u8 { unreachable!() }),
            Outcome::Ok(1)
        );
    }

    #[test]
    fn test_and_and_then() {
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        let err: Outcome<i32, &str> = Outcome::Err("first");
        assert_eq!(ok.and(Outcome::<&str, &str>::Ok("x")), Outcome::Ok("x"));
        assert_eq!(ok.and(Outcome::<&str, &str>::Err("second")), Outcome::Err("second"));
        assert_eq!(err.and(Outcome::<&str, &str>::Ok("x")), Outcome::Err("first"));
        assert_eq!(err.and(Outcome::<&str, &str>::Err("second")), Outcome::Err("first"));

        assert_eq!(
            ok.and_then(|x| Outcome::<String, &str>::Ok((x + 1).to_string())),
            Outcome::Ok("2".to_string())
        );
        assert_eq!(
            err.and_then(|_| -> Outcome<String, &str> { unreachable!() }),
            Outcome::Err("first")
        );
    }

    #[test]
    fn test_or_and_or_else() {
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        let err: Outcome<i32, &str> = Outcome::Err("e");
        assert_eq!(ok.or(Outcome::Ok(2)), Outcome::Ok(1));
        assert_eq!(ok.or(Outcome::Err("other")), Outcome::Ok(1));
        assert_eq!(err.or(Outcome::Ok(2)), Outcome::Ok(2));
        assert_eq!(err.or(Outcome::Err("other")), Outcome::Err("other"));

        assert_eq!(
            ok.or_else(|_| -> Outcome<i32, u8> { unreachable!() }),
            Outcome::Ok(1)
        );
        assert_eq!(err.or_else(|e| Outcome::<i32, usize>::Err(e.len())), Outcome::Err(1));
        assert_eq!(err.or_else(|_| Outcome::<i32, usize>::Ok(2)), Outcome::Ok(2));
    }

    #[test]
    fn test_unwrap_or_family() {
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        let err: Outcome<i32, &str> = Outcome::Err("abc");
        assert_eq!(ok.unwrap_or(2), 1);
        assert_eq!(err.unwrap_or(2), 2);
        assert_eq!(ok.unwrap_or_else(|_| unreachable!()), 1);
        assert_eq!(err.unwrap_or_else(|e| e.len() as i32), 3);
    }

    #[test]
    fn test_unwrap_plain_error_is_logic_error() {
        let err: Outcome<i32, &str> = Outcome::Err("e");
        let payload = panic_payload(|| err.unwrap());
        assert_eq!(
            payload.downcast_ref::<LogicError>(),
            Some(&LogicError::UnwrapErr {
                description: "\"e\"".into()
            })
        );
    }

    #[test]
    fn test_unwrap_argument_error_is_logic_error() {
        let arg = ArgumentError::new(ArgumentErrorKind::AbsentReturn, "f", Vec::new());
        let err: Outcome<i32, CallError> = Outcome::Err(CallError::Absent(arg));
        let payload = panic_payload(|| err.unwrap());
        assert!(matches!(
            payload.downcast_ref::<LogicError>(),
            Some(LogicError::UnwrapErr { .. })
        ));
    }

    #[test]
    fn test_unwrap_fault_resumes_original_payload() {
        let fault = boom();
        let addr = fault.with_payload(|p| (p as *const (dyn Any + Send)).cast::<()>());
        let err: Outcome<i32, Fault> = Outcome::Err(fault);

        let payload = panic_payload(|| err.unwrap());
        assert_eq!((&*payload as *const (dyn Any + Send)).cast::<()>(), addr);
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"this is test."));
    }

    #[test]
    fn test_unwrap_call_error_fault_resumes_original_payload() {
        let err: Outcome<i32, CallError> = Outcome::Err(CallError::Panicked(boom()));
        let payload = panic_payload(|| err.unwrap());
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"this is test."));
        assert!(payload.downcast_ref::<LogicError>().is_none());
    }

    #[test]
    fn test_unwrap_raw_payload_resumes_it() {
        let caught = catch_unwind(|| -> i32 { panic!("disk gone") });
        let err: Outcome<i32, Box<dyn Any + Send>> = caught.into();
        let addr = match &err {
            Outcome::Err(p) => (&**p as *const (dyn Any + Send)).cast::<()>(),
            Outcome::Ok(_) => panic!("expected a captured panic"),
        };

        let payload = panic_payload(|| err.unwrap());
        assert_eq!((&*payload as *const (dyn Any + Send)).cast::<()>(), addr);
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"disk gone"));
        assert!(payload.downcast_ref::<LogicError>().is_none());
    }

    #[test]
    fn test_call_error_outcome_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Outcome<i32, CallError>>();
        assert_send_sync::<Outcome<i32, Fault>>();
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format!("{:?}", Outcome::<i32, i32>::Ok(42)), "Ok(42)");
        assert_eq!(format!("{:?}", Outcome::<i32, i32>::Err(7)), "Err(7)");
        assert_eq!(format!("{}", Outcome::<i32, &str>::Ok(42)), "Ok 42");
        assert_eq!(format!("{}", Outcome::<i32, &str>::Err("bad")), "Err bad");
    }

    #[test]
    fn test_ord() {
        let ok: Outcome<i32, i32> = Outcome::Ok(i32::MAX);
        let err: Outcome<i32, i32> = Outcome::Err(i32::MIN);
        assert!(ok < err);
    }

    #[test]
    fn test_std_result_conversion() {
        let o: Outcome<i32, &str> = Ok(1).into();
        assert_eq!(o, Outcome::Ok(1));
        let back: Result<i32, &str> = Outcome::Err("e").into();
        assert_eq!(back, Err("e"));
    }
}
