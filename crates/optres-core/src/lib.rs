//! optres core - Optional and Outcome types
//!
//! This crate provides two algebraic data types and the adapters that build
//! them from native idioms.
//!
//! # Overview
//!
//! - [`Optional<T>`]: `Some(value)` or `None`
//! - [`Outcome<T, E>`]: `Ok(value)` or `Err(error)`
//! - [`adapt`]: conversions from nullable values, panicking callables and
//!   try-pattern callables
//!
//! Adapters are the only code that touches native constructs; everything
//! downstream works on the two uniform types through combinators.
//!
//! # Example
//!
//! ```
//! use optres_core::adapt::{option, result};
//! use optres_core::{Optional, Outcome};
//!
//! fn parse(s: &str, out: &mut u32) -> bool {
//!     s.parse().map(|v| *out = v).is_ok()
//! }
//!
//! let port = option::try_call1(parse, "8080")
//!     .filter(|p| *p > 1024)
//!     .unwrap_or(8000);
//! assert_eq!(port, 8080);
//!
//! let doubled: Outcome<u32, _> = result::try_call1(parse, "21").map(|n| n * 2);
//! assert_eq!(doubled.some(), Optional::Some(42));
//! ```
//!
//! # Failure conventions
//!
//! Extraction on the wrong variant (`expect`, `unwrap`) panics with a
//! [`LogicError`] payload. Combinators never catch panics from the closures
//! they are given; only the callable adapters run their callable inside a
//! fault boundary.

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod adapt;
pub mod error;
pub mod fault;
pub mod nullable;
pub mod optional;
pub mod outcome;

pub use error::{ArgumentError, ArgumentErrorKind, CallError, LogicError, NullValueError};
pub use fault::Fault;
pub use nullable::Nullable;
pub use optional::Optional;
pub use outcome::Outcome;
