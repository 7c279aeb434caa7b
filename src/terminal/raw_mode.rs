//! Raw mode RAII guard.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use crate::exits;

/// Guard that owns the terminal while the form is up: raw mode, alternate
/// screen and a hidden cursor, all undone on drop.
pub struct RawModeGuard {
    was_enabled: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        exits::set_terminal_dirty(true);
        let mut guard = Self { was_enabled: true };
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            guard.disable();
            return Err(e);
        }
        Ok(guard)
    }

    /// Manually restore the terminal (also happens on drop).
    pub fn disable(&mut self) {
        if self.was_enabled {
            let mut out = io::stdout();
            let _ = execute!(out, Show, LeaveAlternateScreen);
            let _ = out.flush();
            let _ = disable_raw_mode();
            exits::set_terminal_dirty(false);
            self.was_enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
