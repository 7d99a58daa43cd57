//! Captured panics and the fault boundary.
//!
//! A fault is what a Rust callable raises when it cannot continue: a panic.
//! The adapters in [`crate::adapt`] run the callable they wrap inside
//! `catch`, which turns a panic into a [`Fault`] holding the original
//! payload. The payload box is never copied, so [`Fault::resume`]
//! re-raises the very allocation that was thrown.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::LogicError;

/// The payload of a panic, captured at a fault boundary.
///
/// The payload box sits behind a mutex so that a `Fault` (and every error
/// type holding one) is `Sync`. The text needed for formatting is read
/// once at capture time.
pub struct Fault {
    message: Option<String>,
    logic: Option<LogicError>,
    payload: Mutex<Box<dyn Any + Send>>,
}

impl Fault {
    /// Wraps a payload as returned by [`std::panic::catch_unwind`].
    #[must_use]
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            Some((*s).to_owned())
        } else {
            payload.downcast_ref::<String>().cloned()
        };
        let logic = payload.downcast_ref::<LogicError>().cloned();
        Self {
            message,
            logic,
            payload: Mutex::new(payload),
        }
    }

    /// The panic message, when the payload is a string.
    ///
    /// `panic!("..")` produces either a `&'static str` or a `String`
    /// payload; any other payload type yields `None`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Runs `f` with the original payload borrowed.
    ///
    /// The payload lock is held while `f` runs, so `f` must not call back
    /// into the same `Fault`.
    pub fn with_payload<R>(&self, f: impl FnOnce(&(dyn Any + Send)) -> R) -> R {
        let payload = self.payload.lock();
        f(&**payload)
    }

    /// Returns `true` if the payload has type `P`.
    #[must_use]
    pub fn is<P: Any>(&self) -> bool {
        self.with_payload(|payload| payload.is::<P>())
    }

    /// Gives back the original payload.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload.into_inner()
    }

    /// Re-raises the captured panic with its original payload.
    ///
    /// Uses [`std::panic::resume_unwind`], so the panic hook is not run a
    /// second time.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.into_payload())
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Fault");
        match self.message() {
            Some(msg) => s.field("message", &msg),
            None => s.field("payload", &format_args!("<opaque>")),
        };
        s.finish()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = self.message() {
            write!(f, "callable panicked: {msg}")
        } else if let Some(logic) = &self.logic {
            write!(f, "callable panicked: {logic}")
        } else {
            f.write_str("callable panicked with a non-string payload")
        }
    }
}

impl std::error::Error for Fault {}

/// Runs `f` exactly once, converting a panic into a [`Fault`].
///
/// This is the only place the crate intercepts a panic. `callable` is used
/// for logging only. The panic hook still runs before the unwind reaches
/// this boundary.
pub(crate) fn catch<R>(callable: &'static str, f: impl FnOnce() -> R) -> Result<R, Fault> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let fault = Fault::from_payload(payload);
        debug!(
            callable,
            message = fault.message().unwrap_or("<non-string payload>")
        );
        fault
    })
}
