//! Block — a contiguous slice of the logical document
//!
//! A block is either a borrowed view into the immutable Byte Source, or a
//! private owned byte array created by an insert or by copy-on-write
//! promotion during delete. The two are distinguished by the compiler, not by
//! a runtime flag: `SourceView` carries a borrowed slice, `Patch` carries a
//! `Vec<u8>` the block exclusively owns.

/// One entry in a [`crate::edit_buffer::EditBuffer`]'s block list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'src> {
    /// Borrowed, read-only view into the Byte Source. Splitting a source view
    /// is zero-copy: both halves borrow the same underlying slice.
    SourceView(&'src [u8]),
    /// Owned, mutable bytes created by an insert or by promoting a source
    /// view during delete (copy-on-write).
    Patch(Vec<u8>),
}

impl<'src> Block<'src> {
    /// Length of this block. A length of zero marks a tombstone.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Block::SourceView(bytes) => bytes.len(),
            Block::Patch(bytes) => bytes.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once this block has been reduced to a tombstone by `delete`.
    #[must_use]
    pub fn is_tombstone(&self) -> bool {
        self.is_empty()
    }

    /// True if this block is a source view (as opposed to an owned patch).
    #[must_use]
    pub fn is_source_view(&self) -> bool {
        matches!(self, Block::SourceView(_))
    }

    /// Borrow this block's bytes regardless of provenance.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        match self {
            Block::SourceView(bytes) => bytes,
            Block::Patch(bytes) => bytes,
        }
    }

    /// Split this block at inner offset `at`, producing `(pre, post)`.
    /// `at == 0` or `at == self.len()` yields an empty half rather than
    /// panicking — callers collapse those into prepend/append.
    #[must_use]
    pub fn split_at(&self, at: usize) -> (Block<'src>, Block<'src>) {
        assert!(at <= self.len(), "split point past end of block");
        match self {
            Block::SourceView(bytes) => {
                let (pre, post) = bytes.split_at(at);
                (Block::SourceView(pre), Block::SourceView(post))
            }
            Block::Patch(bytes) => {
                let (pre, post) = bytes.split_at(at);
                (Block::Patch(pre.to_vec()), Block::Patch(post.to_vec()))
            }
        }
    }

    /// Promote a source view to an owned patch by copying its bytes. A no-op
    /// (cheap clone of the `Vec`) if already a patch.
    #[must_use]
    pub fn to_patch(&self) -> Block<'static> {
        Block::Patch(self.bytes().to_vec())
    }
}
