//! Password generation and strength scoring.
//!
//! The library is two pure operations plus the random source they draw from:
//! [`generate`] builds a password from the enabled character classes, and
//! [`estimate`] scores any string 0-100. Everything interactive (argument
//! parsing, the terminal form, clipboard) lives in the `passgen` binary.

pub mod error;
pub mod pass;
pub mod rng;
pub mod strength;

pub use error::GenerateError;
pub use pass::charset::{CharClass, CharClasses};
pub use pass::{
    DEFAULT_LENGTH, GenerationRequest, NO_CLASS_SELECTED, generate, generate_batch,
    generate_or_message,
};
pub use strength::{StrengthLabel, entropy_bits, estimate, label};
