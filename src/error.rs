use std::collections::TryReserveError;
use thiserror::Error;

/// Errors reported by fallible set operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage for a new node could not be allocated. The set is unchanged.
    #[error("failed to allocate a tree node")]
    Alloc(#[from] TryReserveError),
}

/// A `Result` alias using this crate's `Error`.
pub type Result<T> = std::result::Result<T, Error>;
