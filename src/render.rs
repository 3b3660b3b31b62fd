//! Rendering — paints the hex dump, header, and status bar.
//!
//! Consumes only [`EditBuffer::read`] and [`EditBuffer::total_size`]; it has
//! no access to block-list internals and can't observe provenance, only
//! bytes. Display layout: 16 bytes per row as
//! `OFFSET: XX XX ... XX  | ....ascii....`, non-printable ASCII (outside
//! `[32, 126]`) rendered as `.`.

use crate::color::Color;
use crate::constants::BYTES_PER_ROW;
use crate::edit_buffer::EditBuffer;
use crate::error::Result;
use crate::mode::Mode;
use crate::term::{ColorTerminal, TerminalBackend};
use crate::viewport::Viewport;

/// `"{offset:08X}: "` — width of the offset label column.
const OFFSET_LABEL_WIDTH: usize = 10;

pub fn render<T: ColorTerminal>(
    term: &mut T,
    buf: &EditBuffer<'_>,
    viewport: &Viewport,
    cursor: u64,
    mode: Mode,
    filename: &str,
) -> Result<()> {
    term.clear_screen()?;

    render_header(term, filename, buf.total_size())?;

    let mut row_bytes = [0u8; BYTES_PER_ROW];
    for screen_row in 0..viewport.visible_rows() {
        let logical_row = viewport.top_row() + screen_row;
        let row_offset = logical_row as u64 * BYTES_PER_ROW as u64;
        if row_offset >= buf.total_size() {
            break;
        }
        let n = buf.read(row_offset, &mut row_bytes) as usize;
        render_row(
            term,
            (screen_row + 1) as u16,
            row_offset,
            &row_bytes[..n],
            cursor,
        )?;
    }

    render_status_bar(term, viewport, mode, cursor)?;
    position_cursor(term, viewport, cursor)?;
    Ok(())
}

fn render_header<T: TerminalBackend>(term: &mut T, filename: &str, total_size: u64) -> Result<()> {
    term.move_cursor(0, 0)?;
    term.write(format!("{filename} ({total_size} bytes)").as_bytes())?;
    Ok(())
}

fn render_row<T: ColorTerminal>(
    term: &mut T,
    screen_row: u16,
    row_offset: u64,
    bytes: &[u8],
    cursor: u64,
) -> Result<()> {
    term.move_cursor(screen_row, 0)?;
    term.clear_to_end_of_line()?;

    term.set_foreground_color(Color::OFFSET_COLUMN)?;
    term.write(format!("{row_offset:08X}: ").as_bytes())?;
    term.reset_colors()?;

    for (i, &byte) in bytes.iter().enumerate() {
        let is_cursor = row_offset + i as u64 == cursor;
        if is_cursor {
            term.set_background_color(Color::CURSOR)?;
        }
        term.write(format!("{byte:02X}").as_bytes())?;
        if is_cursor {
            term.reset_colors()?;
        }
        term.write(b" ")?;
    }
    for _ in bytes.len()..BYTES_PER_ROW {
        term.write(b"   ")?;
    }

    term.write(b" | ")?;
    for (i, &byte) in bytes.iter().enumerate() {
        let is_cursor = row_offset + i as u64 == cursor;
        let printable = (32..=126).contains(&byte);
        if is_cursor {
            term.set_background_color(Color::CURSOR)?;
        } else if !printable {
            term.set_foreground_color(Color::NON_PRINTABLE)?;
        }
        let ch = if printable { byte as char } else { '.' };
        term.write(&[ch as u8])?;
        if is_cursor || !printable {
            term.reset_colors()?;
        }
    }
    Ok(())
}

fn render_status_bar<T: ColorTerminal>(
    term: &mut T,
    viewport: &Viewport,
    mode: Mode,
    cursor: u64,
) -> Result<()> {
    let status_row = (viewport.visible_rows() + 1) as u16;
    term.move_cursor(status_row, 0)?;
    term.clear_to_end_of_line()?;
    term.set_background_color(Color::STATUS_BAR)?;
    term.write(format!(" {} | offset 0x{cursor:X}", mode.label()).as_bytes())?;
    term.reset_colors()?;
    Ok(())
}

/// Position the terminal's real cursor at the first nibble column of the
/// byte under edit. The editor tracks the cursor at byte granularity (no
/// sub-byte nibble state), so this lands on the high nibble rather than
/// distinguishing both nibble columns of a byte.
fn position_cursor<T: TerminalBackend>(term: &mut T, viewport: &Viewport, cursor: u64) -> Result<()> {
    let logical_row = (cursor / BYTES_PER_ROW as u64) as usize;
    let byte_in_row = (cursor % BYTES_PER_ROW as u64) as usize;
    let screen_row = logical_row.saturating_sub(viewport.top_row()) + 1;
    let col = OFFSET_LABEL_WIDTH + byte_in_row * 3;
    term.move_cursor(screen_row as u16, col as u16)
}
