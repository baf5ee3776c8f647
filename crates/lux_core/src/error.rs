//! Binding errors.
//!
//! Out-of-range input and broken cross-field invariants are not errors: they
//! are clamped or repaired in place. Only establishing a binding can fail.

use thiserror::Error;

/// Errors that can occur when binding a descriptor to a native light.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("Owning object has no native light")]
    MissingNativeLight,

    #[error("Native light is already bound to another descriptor")]
    AlreadyBound,

    #[error("Native light is borrowed elsewhere")]
    NativeBusy,
}

/// Result type for binding operations.
pub type BindingResult<T> = Result<T, BindingError>;
