//! Adapters from native idioms to [`Optional`](crate::Optional) and
//! [`Outcome`](crate::Outcome).
//!
//! | Idiom | [`option`] | [`result`] |
//! |---|---|---|
//! | nullable value | `Some` / `None` | `Ok` / `Err(NullValueError)` |
//! | callable that may panic or return absent | `Some` / `None` (fault dropped) | `Ok` / `Err(CallError)` (fault kept) |
//! | try pattern `fn(args.., &mut out) -> bool` | `Some(out)` / `None` | `Ok(out)` / `Err(ArgumentError)` |
//!
//! Every callable and try-pattern adapter comes in arities 0 through 5
//! (`call0`..`call5`, `try_call0`..`try_call5`). The wrapped callable is
//! invoked exactly once per adapter call.
//!
//! The option adapters discard a caught panic because `Optional` has no
//! error channel; the result adapters keep it as [`CallError::Panicked`].
//! Try-pattern callables run outside any fault boundary, so a panic from
//! one propagates to the caller.
//!
//! Catching a panic does not silence it. The panic hook runs when the panic
//! starts, before any adapter sees it, so the default hook prints its
//! message to stderr even when the option adapters go on to drop the fault.
//!
//! [`CallError::Panicked`]: crate::CallError::Panicked

pub mod option;
pub mod result;

/// The identity reported for a wrapped callable.
#[inline]
pub(crate) fn callable_name<F>() -> &'static str {
    std::any::type_name::<F>()
}
