//! Editor — ties the edit buffer, viewport, key dispatch, and a terminal
//! backend into the interactive hex-editing loop.
//!
//! This is the "Input/Controller" and main-loop collaborator described
//! alongside the core: it never reaches into `EditBuffer` internals, only
//! its public `insert`/`delete`/`read`/`total_size` surface.

use std::time::Duration;

use crate::constants::BYTES_PER_ROW;
use crate::edit_buffer::EditBuffer;
use crate::error::Result;
use crate::key::Key;
use crate::mode::Mode;
use crate::render;
use crate::term::{ColorTerminal, TerminalBackend};
use crate::viewport::Viewport;

/// How long `poll` blocks before looping back to check `should_quit`. Purely
/// a liveness knob; every key is still handled as soon as it arrives.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// The interactive hex editor: an edit buffer plus the cursor, mode, and
/// viewport state a terminal UI needs on top of it.
pub struct Editor<'src, T: TerminalBackend> {
    terminal: T,
    buf: EditBuffer<'src>,
    viewport: Viewport,
    cursor: u64,
    mode: Mode,
    filename: String,
    should_quit: bool,
}

impl<'src, T: TerminalBackend> Editor<'src, T> {
    /// Construct an editor over `buf`, initializing `terminal` (raw mode,
    /// alternate screen) and sizing the viewport to its current dimensions.
    pub fn new(mut terminal: T, buf: EditBuffer<'src>, filename: impl Into<String>) -> Result<Self> {
        terminal.init()?;
        let size = terminal.get_size()?;
        // Reserve one row for the header and one for the status bar.
        let visible_rows = (size.rows as usize).saturating_sub(2).max(1);
        let viewport = Viewport::new(visible_rows, size.cols as usize);

        Ok(Editor {
            terminal,
            buf,
            viewport,
            cursor: 0,
            mode: Mode::Command,
            filename: filename.into(),
            should_quit: false,
        })
    }

    #[must_use]
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the editor until the user quits. Blocking: alternates polling for
    /// input with rendering, as described in the concurrency model — the
    /// core itself never blocks on I/O, only this loop does.
    pub fn run(&mut self) -> Result<()>
    where
        T: ColorTerminal,
    {
        self.render()?;
        while !self.should_quit {
            if !self.terminal.poll(POLL_INTERVAL)? {
                continue;
            }
            let Some(key) = self.terminal.read_key()? else {
                continue;
            };
            self.handle_key(key)?;
            if !self.should_quit {
                self.render()?;
            }
        }
        log::debug!("editor exiting, final cursor={}", self.cursor);
        Ok(())
    }

    /// Dispatch one key press. Public (beyond `run`) so tests can drive the
    /// editor without a real terminal poll/read loop.
    pub fn handle_key(&mut self, key: Key) -> Result<()> {
        match self.mode {
            // Reserved: no command-mode binding currently transitions into
            // Insert, so this arm never runs in practice. Kept so the match
            // stays exhaustive if a binding is added later.
            Mode::Insert => {}
            Mode::Command => self.handle_command_key(key)?,
        }
        Ok(())
    }

    fn handle_command_key(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Char('q') => self.should_quit = true,
            Key::Char('h') | Key::ArrowLeft => self.move_cursor_by(-1),
            Key::Char('l') | Key::ArrowRight => self.move_cursor_by(1),
            Key::Char('k') | Key::ArrowUp => self.move_cursor_by(-(BYTES_PER_ROW as i64)),
            Key::Char('j') | Key::ArrowDown => self.move_cursor_by(BYTES_PER_ROW as i64),
            Key::Char('g') => self.cursor = 0,
            Key::Char('G') => self.cursor = self.max_cursor(),
            Key::Home => {
                self.cursor -= self.cursor % BYTES_PER_ROW as u64;
            }
            Key::End => {
                let row_start = self.cursor - self.cursor % BYTES_PER_ROW as u64;
                self.cursor = (row_start + BYTES_PER_ROW as u64 - 1).min(self.max_cursor());
            }
            Key::PageUp => {
                let page = (self.viewport.visible_rows() * BYTES_PER_ROW) as i64;
                self.move_cursor_by(-page);
            }
            Key::PageDown => {
                let page = (self.viewport.visible_rows() * BYTES_PER_ROW) as i64;
                self.move_cursor_by(page);
            }
            Key::Char('i') => {
                self.buf.insert(self.cursor, &[0u8])?;
                self.cursor = (self.cursor + 1).min(self.max_cursor());
            }
            Key::Char('x') => {
                if self.buf.total_size() > 0 {
                    self.buf.delete(self.cursor, 1)?;
                    self.cursor = self.cursor.min(self.max_cursor());
                }
            }
            Key::Resize(cols, rows) => {
                log::debug!("terminal resized to {cols}x{rows}");
                self.viewport
                    .set_size((rows as usize).saturating_sub(2).max(1), cols as usize);
            }
            _ => {} // Unknown keys are ignored.
        }
        Ok(())
    }

    fn max_cursor(&self) -> u64 {
        self.buf.total_size().saturating_sub(1)
    }

    fn move_cursor_by(&mut self, delta: i64) {
        let max = self.max_cursor();
        let new = (self.cursor as i64 + delta).clamp(0, max as i64);
        self.cursor = new as u64;
    }

    fn render(&mut self) -> Result<()>
    where
        T: ColorTerminal,
    {
        let row = (self.cursor / BYTES_PER_ROW as u64) as usize;
        let total_rows = (self.buf.total_size() as usize).div_ceil(BYTES_PER_ROW).max(1);
        self.viewport.scroll_to(row, total_rows.saturating_sub(1));
        render::render(
            &mut self.terminal,
            &self.buf,
            &self.viewport,
            self.cursor,
            self.mode,
            &self.filename,
        )
    }
}

impl<'src, T: TerminalBackend> Drop for Editor<'src, T> {
    fn drop(&mut self) {
        self.terminal.deinit();
    }
}
