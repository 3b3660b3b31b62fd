//! Terminal backend abstraction
//! Provides a platform-agnostic interface for terminal operations
//!
//! ## Invariants
//!
//! - Terminal handling is isolated behind this trait boundary.
//! - Raw mode is enabled before input processing begins.
//! - Terminal state is restored on normal exit and on panic (see the
//!   [`crate::editor::Editor`] `Drop` impl).
//! - Terminal code never depends on edit-buffer internals.
use std::time::Duration;

use crate::color::Color;
use crate::error::Result;
use crate::key::Key;

/// Terminal size information, in character cells.
#[derive(Debug, Clone, Copy)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// A terminal backend. All backends must implement these operations.
pub trait TerminalBackend {
    /// Enter raw mode and the alternate screen buffer.
    fn init(&mut self) -> Result<()>;

    /// Restore the terminal to its original state. Infallible by contract:
    /// called from `Drop`, where an error has nowhere useful to go.
    fn deinit(&mut self);

    /// Block until an input event is ready, or until `duration` elapses.
    fn poll(&mut self, duration: Duration) -> Result<bool>;

    /// Read and decode a single input event. `None` means the event was not
    /// a key press worth acting on (e.g. a key-release event).
    fn read_key(&mut self) -> Result<Option<Key>>;

    /// Write raw bytes to the terminal.
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<()>;

    /// Get current terminal dimensions.
    fn get_size(&self) -> Result<Size>;

    /// Clear the entire screen and home the cursor.
    fn clear_screen(&mut self) -> Result<()>;

    /// Move the cursor to `(row, col)`, 0-indexed.
    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;
    fn show_cursor(&mut self) -> Result<()>;

    /// Clear from the cursor to the end of the current line.
    fn clear_to_end_of_line(&mut self) -> Result<()>;
}

/// Extension trait for 256-color support. Backends that can't render color
/// simply don't implement it; the renderer degrades to plain text.
pub trait ColorTerminal: TerminalBackend {
    fn set_foreground_color(&mut self, color: Color) -> Result<()>;
    fn set_background_color(&mut self, color: Color) -> Result<()>;
    fn reset_colors(&mut self) -> Result<()>;
}

pub mod ansi;
pub mod crossterm;
