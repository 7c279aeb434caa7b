//! Shared terminal utilities.
//!
//! Box drawing, the strength bar, and raw mode management.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;

/// Check if stdin is a tty (interactive)
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}
