//! Error types raised by extraction and produced by the adapters.
//!
//! - [`LogicError`] is a caller defect: an extraction was attempted on the
//!   variant that cannot satisfy it. It travels as a panic payload.
//! - [`NullValueError`] reports an absent nullable source.
//! - [`ArgumentError`] reports a wrapped call that came back empty-handed.
//! - [`CallError`] is the error channel of the callable result adapters,
//!   carrying either a captured [`Fault`] or an [`ArgumentError`].

use std::fmt;

use thiserror::Error;

use crate::fault::Fault;

/// An extraction operation was called on a variant that cannot satisfy it.
///
/// Raised with [`std::panic::panic_any`], so the payload of the resulting
/// panic is this value and can be recovered with `downcast_ref`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LogicError {
    /// `Optional::expect` on a `None`, carrying the caller's message.
    #[error("{0}")]
    Expect(String),

    /// `Optional::unwrap` on a `None`.
    #[error("called `Optional::unwrap()` on a `None` value")]
    UnwrapNone,

    /// `Outcome::unwrap` on an `Err` whose error is not a captured fault.
    #[error("called `Outcome::unwrap()` on an `Err` value: {description}")]
    UnwrapErr {
        /// `Debug` rendering of the stored error.
        description: String,
    },
}

/// A nullable source was absent when wrapped by the result adapter.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("expected a present `{type_name}` value, found an absent one")]
pub struct NullValueError {
    type_name: &'static str,
}

impl NullValueError {
    /// Creates the error for an absent value of type `T`.
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// The name of the value type that was expected.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// What went wrong in a call that produced an [`ArgumentError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArgumentErrorKind {
    /// The callable returned without panicking, but its value was absent.
    AbsentReturn,
    /// A try-pattern callable returned `false`.
    TryFailed,
}

/// A wrapped callable produced no usable value.
///
/// The message names the callable and every argument it was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgumentError {
    kind: ArgumentErrorKind,
    callable: &'static str,
    arguments: Vec<String>,
}

impl ArgumentError {
    /// Creates an error for `callable` invoked with the rendered `arguments`.
    #[must_use]
    pub fn new(kind: ArgumentErrorKind, callable: &'static str, arguments: Vec<String>) -> Self {
        Self {
            kind,
            callable,
            arguments,
        }
    }

    /// Which failure this describes.
    #[must_use]
    pub const fn kind(&self) -> ArgumentErrorKind {
        self.kind
    }

    /// The type name of the callable.
    #[must_use]
    pub const fn callable(&self) -> &'static str {
        self.callable
    }

    /// `Debug` renderings of the arguments, in positional order.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ArgumentErrorKind::AbsentReturn => write!(
                f,
                "calling `{}` succeeded but returned an absent value",
                self.callable
            )?,
            ArgumentErrorKind::TryFailed => {
                write!(f, "try pattern `{}` returned false", self.callable)?;
            }
        }
        if !self.arguments.is_empty() {
            write!(f, " (called with {})", ArgumentList(&self.arguments))?;
        }
        Ok(())
    }
}

impl std::error::Error for ArgumentError {}

/// Renders `arg1: .., arg2: ..` for an argument list.
struct ArgumentList<'a>(&'a [String]);

impl fmt::Display for ArgumentList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.0 {
            return write!(f, "arg: {only}");
        }
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "arg{}: {arg}", i + 1)?;
        }
        Ok(())
    }
}

/// Error channel of the callable result adapters.
#[derive(Debug, Error)]
pub enum CallError {
    /// The callable panicked; the original payload is kept intact.
    #[error(transparent)]
    Panicked(#[from] Fault),

    /// The callable returned an absent value without panicking.
    #[error(transparent)]
    Absent(#[from] ArgumentError),
}

impl CallError {
    /// Returns the captured fault, if the callable panicked.
    #[must_use]
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            CallError::Panicked(fault) => Some(fault),
            CallError::Absent(_) => None,
        }
    }

    /// Returns the argument error, if the callable returned absent.
    #[must_use]
    pub fn argument_error(&self) -> Option<&ArgumentError> {
        match self {
            CallError::Panicked(_) => None,
            CallError::Absent(err) => Some(err),
        }
    }
}
