//! Password generation.

pub mod charset;
mod generate;

pub use generate::{generate, generate_batch, generate_or_message};

use charset::CharClasses;

/// Length callers fall back to when the requested one is unusable.
pub const DEFAULT_LENGTH: usize = 12;

/// Text shown in place of a password when no class is enabled.
pub const NO_CLASS_SELECTED: &str = "Select at least one option";

/// What to generate: a length and the enabled character classes.
///
/// The length is taken as-is. Callers that accept free-text input coerce it
/// (see `DEFAULT_LENGTH`) before building a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: CharClasses,
}

impl GenerationRequest {
    pub fn new(length: usize, upper: bool, lower: bool, numbers: bool, symbols: bool) -> Self {
        Self {
            length,
            classes: CharClasses {
                upper,
                lower,
                numbers,
                symbols,
            },
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharClasses::ALL,
        }
    }
}
