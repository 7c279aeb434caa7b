//! User-facing CLI messages.

use passgen::{entropy_bits, estimate, label};

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(quiet: bool) {
    if !quiet {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Shown in place of a strength line when no password was produced.
pub const NO_PASSWORD_STRENGTH: &str = "Strength: 0/100 (Weak)";

/// Strength summary for one generated password drawn from `pool_size` chars.
pub fn strength_line(password: &str, pool_size: usize) -> String {
    let score = estimate(password);
    let bits = entropy_bits(password.chars().count(), pool_size);
    format!("Strength: {score}/100 ({}, ~{bits:.0} bits)", label(score))
}
