//! Test utilities
//!
//! `MockTerminal` stands in for [`crate::term::crossterm::CrosstermBackend`]
//! in tests: it implements [`TerminalBackend`] (and [`ColorTerminal`])
//! without a real TTY, recording everything written to it and replaying a
//! scripted queue of keys back to `read_key`, so the editor's key-dispatch
//! loop can be driven end to end in a unit test.
//!
//! ## test_utils/ Invariants
//!
//! - Test utilities introduce no production-only behavior.
//! - Tests assert invariants, not implementation details.
//! - The edit buffer is testable without a terminal at all; `MockTerminal`
//!   exists only for the collaborators that sit above it.

use std::collections::VecDeque;
use std::time::Duration;

use crate::color::Color;
use crate::error::Result;
use crate::key::Key;
use crate::term::{ColorTerminal, Size, TerminalBackend};

/// Mock terminal backend for testing.
pub struct MockTerminal {
    pub writes: Vec<Vec<u8>>,
    pub cursor_moves: Vec<(u16, u16)>,
    pub clear_screen_calls: usize,
    pub size: (u16, u16),
    /// Keys to hand back from `read_key`, in order, as if typed.
    pending_keys: VecDeque<Key>,
}

impl MockTerminal {
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        MockTerminal {
            writes: Vec::new(),
            cursor_moves: Vec::new(),
            clear_screen_calls: 0,
            size: (rows, cols),
            pending_keys: VecDeque::new(),
        }
    }

    /// Queue keys to be returned by successive `read_key` calls.
    pub fn push_keys(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.pending_keys.extend(keys);
    }

    #[must_use]
    pub fn get_written_bytes(&self) -> Vec<u8> {
        self.writes.iter().flatten().copied().collect()
    }

    #[must_use]
    pub fn get_written_string(&self) -> String {
        String::from_utf8_lossy(&self.get_written_bytes()).to_string()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
        self.cursor_moves.clear();
        self.clear_screen_calls = 0;
    }
}

impl TerminalBackend for MockTerminal {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn deinit(&mut self) {}

    fn poll(&mut self, _duration: Duration) -> Result<bool> {
        Ok(!self.pending_keys.is_empty())
    }

    fn read_key(&mut self) -> Result<Option<Key>> {
        Ok(self.pending_keys.pop_front())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn get_size(&self) -> Result<Size> {
        Ok(Size {
            rows: self.size.0,
            cols: self.size.1,
        })
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.clear_screen_calls += 1;
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        self.cursor_moves.push((row, col));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        Ok(())
    }

    fn clear_to_end_of_line(&mut self) -> Result<()> {
        Ok(())
    }
}

impl ColorTerminal for MockTerminal {
    fn set_foreground_color(&mut self, _color: Color) -> Result<()> {
        Ok(())
    }

    fn set_background_color(&mut self, _color: Color) -> Result<()> {
        Ok(())
    }

    fn reset_colors(&mut self) -> Result<()> {
        Ok(())
    }
}
