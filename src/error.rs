//! Library error types.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Every class toggle was off, so the character pool is empty.
    #[error("Select at least one option")]
    NoCharacterClassSelected,
}
