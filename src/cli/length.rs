//! Free-text length parsing shared by the CLI and the form.

use passgen::DEFAULT_LENGTH;
use tracing::warn;

/// Parse a length the way C `atoi` reads it: leading whitespace, an optional
/// sign, then as many digits as follow. Trailing text is ignored.
///
/// Returns `None` unless the result is a positive number.
pub fn parse_length(input: &str) -> Option<usize> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    match rest[..end].parse::<usize>() {
        Ok(n) if n > 0 && !negative => Some(n),
        _ => None,
    }
}

/// Parse a length, substituting the default for anything unusable.
pub fn coerce_length(input: &str) -> usize {
    parse_length(input).unwrap_or_else(|| {
        warn!(input, default = DEFAULT_LENGTH, "length is not a positive number, using default");
        DEFAULT_LENGTH
    })
}
