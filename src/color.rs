//! 256-color palette support for the terminal backend

/// A terminal color expressed as an ANSI 256-color palette index.
///
/// Kept as a thin newtype rather than RGB: every backend we target speaks
/// the `ESC[38;5;Nm` / `ESC[48;5;Nm` 256-color sequences, not truecolor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8);

impl Color {
    pub const OFFSET_COLUMN: Color = Color(244);
    pub const NON_PRINTABLE: Color = Color(240);
    pub const STATUS_BAR: Color = Color(235);
    pub const CURSOR: Color = Color(226);

    #[must_use]
    pub fn to_crossterm(self) -> crossterm::style::Color {
        crossterm::style::Color::AnsiValue(self.0)
    }
}
