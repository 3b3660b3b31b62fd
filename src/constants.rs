//! Global constants for the hex editor

/// Number of bytes shown per row in the hex view.
pub const BYTES_PER_ROW: usize = 16;

/// Default copy-on-write promotion quantum for source-view blocks, in bytes.
/// Large enough to amortize the cost of small, scattered edits to a mapped
/// file; small enough that a single edit doesn't copy unreasonable amounts.
pub const DEFAULT_BLOCK_LEN: u64 = 1024;

pub mod errors {
    pub const OFFSET_OOB: &str = "E_OFFSET_OOB";
    pub const IO: &str = "E_IO";
}

pub mod modes {
    pub const COMMAND: &str = "COMMAND";
    pub const INSERT: &str = "INSERT";
}
