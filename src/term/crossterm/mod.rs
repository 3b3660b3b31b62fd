//! Crossterm-based terminal backend
//! Cross-platform terminal operations using crossterm

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    style::{ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, BufWriter, Write};

use crate::color::Color;
use crate::error::{EditError, Result};
use crate::key::Key;
use crate::term::{ColorTerminal, Size, TerminalBackend};

/// Crossterm-based terminal backend implementation
pub struct CrosstermBackend {
    writer: BufWriter<std::io::Stdout>,
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl CrosstermBackend {
    pub fn new() -> Result<Self> {
        Ok(CrosstermBackend {
            writer: BufWriter::with_capacity(8192, stdout()),
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
        })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<()> {
        execute!(self.writer, terminal::EnterAlternateScreen)
            .map_err(|e| EditError::io(format!("failed to enter alternate screen: {e}")))?;
        self.alternate_screen_enabled = true;

        terminal::enable_raw_mode()
            .map_err(|e| EditError::io(format!("failed to enable raw mode: {e}")))?;
        self.raw_mode_enabled = true;

        execute!(self.writer, cursor::Hide)
            .map_err(|e| EditError::io(format!("failed to hide cursor: {e}")))?;

        self.writer
            .flush()
            .map_err(|e| EditError::io(format!("failed to flush: {e}")))?;
        Ok(())
    }

    fn deinit(&mut self) {
        let _ = execute!(self.writer, cursor::Show);

        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }

        if self.alternate_screen_enabled {
            let _ = execute!(self.writer, terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
        let _ = self.writer.flush();
    }

    fn poll(&mut self, duration: std::time::Duration) -> Result<bool> {
        event::poll(duration).map_err(|e| EditError::io(format!("failed to poll event: {e}")))
    }

    fn read_key(&mut self) -> Result<Option<Key>> {
        match event::read().map_err(|e| EditError::io(format!("failed to read event: {e}")))? {
            Event::Key(key_event) => {
                if key_event.kind == event::KeyEventKind::Press {
                    Ok(Some(translate_key_event(key_event)))
                } else {
                    Ok(None)
                }
            }
            Event::Resize(cols, rows) => Ok(Some(Key::Resize(cols, rows))),
            _ => Ok(None),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .map_err(|e| EditError::io(format!("write failed: {e}")))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| EditError::io(format!("flush failed: {e}")))
    }

    fn get_size(&self) -> Result<Size> {
        let (cols, rows) = terminal::size()
            .map_err(|e| EditError::io(format!("failed to get terminal size: {e}")))?;
        Ok(Size { rows, cols })
    }

    fn clear_screen(&mut self) -> Result<()> {
        execute!(self.writer, terminal::Clear(ClearType::All))
            .map_err(|e| EditError::io(format!("failed to clear screen: {e}")))?;
        execute!(self.writer, cursor::MoveTo(0, 0))
            .map_err(|e| EditError::io(format!("failed to move cursor: {e}")))?;
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        execute!(self.writer, cursor::MoveTo(col, row))
            .map_err(|e| EditError::io(format!("failed to move cursor: {e}")))?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        execute!(self.writer, cursor::Hide)
            .map_err(|e| EditError::io(format!("failed to hide cursor: {e}")))?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        execute!(self.writer, cursor::Show)
            .map_err(|e| EditError::io(format!("failed to show cursor: {e}")))?;
        Ok(())
    }

    fn clear_to_end_of_line(&mut self) -> Result<()> {
        execute!(self.writer, terminal::Clear(ClearType::UntilNewLine))
            .map_err(|e| EditError::io(format!("failed to clear to end of line: {e}")))?;
        Ok(())
    }
}

impl ColorTerminal for CrosstermBackend {
    fn set_foreground_color(&mut self, color: Color) -> Result<()> {
        execute!(self.writer, SetForegroundColor(color.to_crossterm()))
            .map_err(|e| EditError::io(format!("failed to set foreground color: {e}")))?;
        Ok(())
    }

    fn set_background_color(&mut self, color: Color) -> Result<()> {
        execute!(self.writer, SetBackgroundColor(color.to_crossterm()))
            .map_err(|e| EditError::io(format!("failed to set background color: {e}")))?;
        Ok(())
    }

    fn reset_colors(&mut self) -> Result<()> {
        execute!(self.writer, ResetColor)
            .map_err(|e| EditError::io(format!("failed to reset colors: {e}")))?;
        Ok(())
    }
}

/// Translate crossterm's `KeyEvent` to our backend-agnostic `Key`. Only the
/// keys the hex editor's key handler actually dispatches on are preserved;
/// everything else collapses to `Key::Char('\0')` and is ignored upstream.
pub(crate) fn translate_key_event(key_event: KeyEvent) -> Key {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char(ch) => {
            if ch == '\r' || ch == '\n' {
                Key::Enter
            } else if ctrl && (ch == 'c' || ch == 'C') {
                // Ctrl+C is treated as an unmodified quit request; the core
                // never needs to distinguish it from plain `q`.
                Key::Char('q')
            } else {
                Key::Char(ch)
            }
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Delete => Key::Delete,
        _ => Key::Char('\0'),
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
