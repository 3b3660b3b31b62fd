//! ANSI escape sequence reference
//!
//! [`crate::term::crossterm::CrosstermBackend`] issues all of these through
//! the `crossterm` crate rather than writing these strings directly; they're
//! kept here as the exact contract the terminal surface is specified
//! against (see the display layout section of the spec), and exercised by
//! unit tests so that contract can't silently drift.

pub const ENTER_ALT_SCREEN: &str = "\x1b[?1049h";
pub const LEAVE_ALT_SCREEN: &str = "\x1b[?1049l";
pub const CLEAR_SCREEN: &str = "\x1b[2J";
pub const CURSOR_HOME: &str = "\x1b[H";
pub const CLEAR_LINE: &str = "\x1b[2K";
pub const RESET_ATTRIBUTES: &str = "\x1b[0m";

/// `ESC[row;colH`, 1-indexed as the escape sequence itself requires.
#[must_use]
pub fn cursor_position(row: u16, col: u16) -> String {
    format!("\x1b[{};{}H", row + 1, col + 1)
}

/// `ESC[38;5;Nm` — set 256-color foreground.
#[must_use]
pub fn set_foreground_256(n: u8) -> String {
    format!("\x1b[38;5;{n}m")
}

/// `ESC[48;5;Nm` — set 256-color background.
#[must_use]
pub fn set_background_256(n: u8) -> String {
    format!("\x1b[48;5;{n}m")
}
