//! Password generation.

use rand::Rng;

use super::{GenerationRequest, NO_CLASS_SELECTED};
use crate::error::GenerateError;

/// Generate a single password.
///
/// Every position is an independent uniform draw from the pool, so a short
/// password may miss one of the enabled classes entirely.
pub fn generate<R: Rng>(request: &GenerationRequest, rng: &mut R) -> Result<String, GenerateError> {
    let chars = request.classes.pool();
    if chars.is_empty() {
        return Err(GenerateError::NoCharacterClassSelected);
    }
    Ok(generate_from_pool(&chars, request.length, rng))
}

/// Like [`generate`], but renders the empty-pool case as its message so the
/// caller can display the result without branching.
pub fn generate_or_message<R: Rng>(request: &GenerationRequest, rng: &mut R) -> String {
    generate(request, rng).unwrap_or_else(|_| NO_CLASS_SELECTED.to_string())
}

/// Generate `count` passwords from one pool.
pub fn generate_batch<R: Rng>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, GenerateError> {
    let chars = request.classes.pool();
    if chars.is_empty() {
        return Err(GenerateError::NoCharacterClassSelected);
    }
    Ok((0..count)
        .map(|_| generate_from_pool(&chars, request.length, rng))
        .collect())
}

#[inline]
fn generate_from_pool<R: Rng>(chars: &[u8], length: usize, rng: &mut R) -> String {
    (0..length).map(|_| random_char(chars, rng)).collect()
}

#[inline]
fn random_char<R: Rng>(chars: &[u8], rng: &mut R) -> char {
    chars[rng.random_range(0..chars.len())] as char
}
