//! Key representation for editor input
//!
//! Decoupled from any particular terminal backend:
//! [`crate::term::crossterm::translate_key_event`] maps crossterm's event
//! type onto this enum, and [`crate::test_utils::MockTerminal`] feeds values
//! directly without a real TTY.

/// Represents a key press, independent of the backend that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character, including the command-mode letters (`h`, `j`,
    /// `k`, `l`, `g`, `G`, `i`, `x`, `q`) that drive the editor.
    Char(char),
    /// Arrow keys, accepted as synonyms for `h`/`j`/`k`/`l`.
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    Enter,
    Escape,
    /// Terminal size change, delivered by crossterm as a regular input
    /// event rather than a raw OS signal.
    Resize(u16, u16),
}
