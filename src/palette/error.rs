//! Crayon box errors.

use thiserror::Error;

/// Error returned when a [`CrayonBox`](super::CrayonBox) operation is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoxError {
    /// No crayon was given to store.
    #[error("crayon cannot be a nil reference")]
    NilCrayon,
    /// A crayon is already stored under this name.
    #[error("'{name}' is already in the box, remove it first")]
    AlreadyExists { name: String },
    /// The base crayon is permanent.
    #[error("cannot remove the base crayon")]
    RemoveBase,
}
