//! Editor mode definitions

/// Editor operating mode.
///
/// `Command` is the default and only mode with wired key bindings (the
/// keystroke mapping described alongside the terminal surface). `Insert`
/// exists as a reserved value for a future two-hex-digit entry flow; no
/// binding in command mode currently transitions into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Command,
    Insert,
}

impl Mode {
    /// Short label shown in the status bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mode::Command => crate::constants::modes::COMMAND,
            Mode::Insert => crate::constants::modes::INSERT,
        }
    }
}
