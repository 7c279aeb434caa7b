//! Strength scoring.
//!
//! The score is a coarse 0-100 heuristic built from four 25-point checks:
//! two length thresholds, mixed case, and the presence of a digit or symbol.
//! It is not an entropy measurement; [`entropy_bits`] is reported alongside
//! it for that.

use std::fmt;

const POINTS: u8 = 25;
const MAX_SCORE: u8 = 100;

/// Score a password 0-100.
///
/// Length is measured in bytes, so multi-byte characters weigh more than one.
pub fn estimate(password: &str) -> u8 {
    let length = password.len();
    let (mut upper, mut lower, mut digit, mut symbol) = (false, false, false, false);

    for c in password.chars() {
        if c.is_ascii_uppercase() {
            upper = true;
        } else if c.is_ascii_lowercase() {
            lower = true;
        } else if c.is_ascii_digit() {
            digit = true;
        } else {
            symbol = true;
        }
    }

    let checks = [length >= 8, length >= 12, upper && lower, digit || symbol];
    let score = checks.iter().filter(|&&passed| passed).count() as u8 * POINTS;
    score.min(MAX_SCORE)
}

/// Coarse rendering of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn label(score: u8) -> StrengthLabel {
    match score {
        0..=24 => StrengthLabel::Weak,
        25..=49 => StrengthLabel::Fair,
        50..=74 => StrengthLabel::Good,
        _ => StrengthLabel::Strong,
    }
}

/// Calculate password entropy in bits for a uniform draw from the pool.
pub fn entropy_bits(password_length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    password_length as f64 * (pool_size as f64).log2()
}
