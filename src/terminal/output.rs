//! Terminal output utilities.
//!
//! Box drawing and the strength bar. Helpers return lines instead of printing
//! them, so the form can be composed and tested before it reaches a raw-mode
//! terminal (where every line needs an explicit `\r\n`).

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const REVERSE: &str = "\x1b[7m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen, move to top-left and write `lines` with raw-mode line endings.
pub fn draw<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    write!(out, "\x1b[2J\x1b[H")?;
    for line in lines {
        write!(out, "{line}\r\n")?;
    }
    out.flush()
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 52;
pub const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                                        │
pub fn box_line(content: &str) -> String {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// Box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Split `s` into rows of at most `width` characters. Nothing is dropped.
pub fn wrap(s: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|row| row.iter().collect())
        .collect()
}

// ============================================================================
// Strength Bar
// ============================================================================

/// Render a 0-100 score as a bar `width` cells wide, colored by band.
pub fn strength_bar(score: u8, width: usize) -> String {
    let score = score.min(100) as usize;
    let filled = score * width / 100;
    let color = match score {
        0..=49 => RED,
        50..=74 => YELLOW,
        _ => GREEN,
    };
    format!(
        "{color}{}{RESET}{DIM}{}{RESET}",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}
