//! Byte Source — the immutable region of bytes an edit buffer is opened over
//!
//! The edit buffer itself only ever needs a borrowed `&[u8]`; this module exists
//! to own the memory map (or owned bytes, for tests and empty files) for the
//! lifetime of the program and hand out that borrow. Keeping the mapping out of
//! `edit_buffer` lets the core stay generic over any `&'src [u8]`.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::Result;

enum Backing {
    Mapped { mmap: Mmap, _file: File },
    Owned(Vec<u8>),
}

/// Owns the bytes an [`crate::edit_buffer::EditBuffer`] is opened over.
///
/// For a real file this is a read-only memory map; the map is never written
/// to, and the `File` handle is kept alive alongside it since some platforms
/// invalidate a mapping if the descriptor that created it is closed first.
pub struct ByteSource(Backing);

impl ByteSource {
    /// Memory-map `path` read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        if file.metadata()?.len() == 0 {
            // Mapping a zero-length file is platform-dependent (fails on most
            // mmap implementations); fall back to an empty owned buffer.
            return Ok(Self(Backing::Owned(Vec::new())));
        }
        // SAFETY: the mapping is read-only; external truncation of the file
        // while mapped is the usual mmap caveat and out of scope here.
        let mmap = unsafe { Mmap::map(&file) }?;
        Ok(Self(Backing::Mapped { mmap, _file: file }))
    }

    /// Wrap already-owned bytes. Used by tests that want an in-memory source
    /// without touching the file system.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(Backing::Owned(bytes))
    }

    /// Borrow the bytes. The borrow is tied to `&self`, which must outlive
    /// any [`crate::edit_buffer::EditBuffer`] built from it.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.0 {
            Backing::Mapped { mmap, .. } => mmap,
            Backing::Owned(bytes) => bytes,
        }
    }

    /// Length in bytes of the source.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
