//! Edit buffer — the block-list core of the hex editor
//!
//! An [`EditBuffer`] represents the virtual file under edit as an ordered
//! list of [`Block`]s. Every block is either a borrowed view into the
//! immutable Byte Source or an owned "patch" created by an insert or by
//! copy-on-write promotion during delete. Concatenating the blocks in order
//! yields the logical document; no implicit gap exists between them.
//!
//! This module is the one place in the crate where correctness is load
//! bearing: overlap arithmetic across block boundaries, patch-block
//! generation, and tombstone handling all live here. Rendering, terminal
//! I/O, and key dispatch only ever call `insert`/`delete`/`read`/`total_size`.

use crate::block::Block;
use crate::constants::DEFAULT_BLOCK_LEN;
use crate::error::{EditError, Result};

/// `[a0,a1)` and `[b0,b1)` intersect.
fn overlaps(a0: u64, a1: u64, b0: u64, b1: u64) -> bool {
    a1 > b0 && a0 < b1
}

/// The block-list representation of a file under edit.
///
/// Generic over the lifetime of the Byte Source it was opened over (`'src`);
/// nothing here assumes the source is memory-mapped specifically, only that
/// it outlives the buffer as a borrowed `&'src [u8]`.
pub struct EditBuffer<'src> {
    blocks: Vec<Block<'src>>,
    total_size: u64,
    /// Quantum at which a source-view block is promoted to an owned patch
    /// when a delete needs to shift bytes inside it. Configurable; tests
    /// exercise values as small as 1.
    block_len: u64,
}

impl<'src> EditBuffer<'src> {
    /// Construct an edit buffer with a single source-view block spanning
    /// `source`. An empty source yields an empty block list.
    #[must_use]
    pub fn open(source: &'src [u8]) -> Self {
        Self::with_block_len(source, DEFAULT_BLOCK_LEN)
    }

    /// Like [`Self::open`], with an explicit promotion quantum.
    #[must_use]
    pub fn with_block_len(source: &'src [u8], block_len: u64) -> Self {
        assert!(block_len >= 1, "BLOCK_LEN must be at least 1");
        let blocks = if source.is_empty() {
            Vec::new()
        } else {
            vec![Block::SourceView(source)]
        };
        Self {
            total_size: source.len() as u64,
            blocks,
            block_len,
        }
    }

    /// Sum of all block lengths.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Number of entries in the block list, including tombstones that
    /// haven't yet been compacted. Exposed for tests and instrumentation,
    /// not part of the logical contract.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Copy `min(out.len(), total_size() - offset)` bytes starting at
    /// logical `offset` into `out`, returning the number of bytes written.
    /// Requests past `total_size()` are truncated silently, never erroring.
    pub fn read(&self, offset: u64, out: &mut [u8]) -> u64 {
        if out.is_empty() || offset >= self.total_size {
            return 0;
        }
        let want = out.len() as u64;
        let end = offset + want;

        let mut accum = 0u64;
        let mut written = 0u64;
        for block in &self.blocks {
            let blen = block.len() as u64;
            let b0 = accum;
            let b1 = b0 + blen;
            accum = b1;

            if blen == 0 || b1 <= offset {
                continue;
            }
            if b0 >= end {
                break;
            }

            let start = offset.max(b0);
            let stop = end.min(b1);
            let src_start = (start - b0) as usize;
            let src_stop = (stop - b0) as usize;
            let dst_start = (start - offset) as usize;
            let n = src_stop - src_start;

            out[dst_start..dst_start + n].copy_from_slice(&block.bytes()[src_start..src_stop]);
            written += n as u64;
        }
        written
    }

    /// Insert `bytes` as a new patch block so its first byte lands at
    /// logical `offset`. Rejects `offset > total_size()`.
    pub fn insert(&mut self, offset: u64, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            if offset > self.total_size {
                return Err(EditError::invalid_argument(format!(
                    "insert offset {offset} exceeds total size {}",
                    self.total_size
                )));
            }
            return Ok(());
        }
        if offset > self.total_size {
            return Err(EditError::invalid_argument(format!(
                "insert offset {offset} exceeds total size {}",
                self.total_size
            )));
        }

        let added = bytes.len() as u64;
        let new_block = Block::Patch(bytes.to_vec());

        if offset == self.total_size {
            self.blocks.push(new_block);
        } else if offset == 0 {
            self.blocks.insert(0, new_block);
        } else {
            self.insert_interior(offset, new_block);
        }

        self.total_size += added;
        Ok(())
    }

    /// Split the unique block straddling `offset` (or insert directly before
    /// a block that starts exactly at `offset`, which needs no split at all).
    fn insert_interior(&mut self, offset: u64, new_block: Block<'src>) {
        let mut accum = 0u64;
        for i in 0..self.blocks.len() {
            let b0 = accum;
            let blen = self.blocks[i].len() as u64;
            let b1 = b0 + blen;
            accum = b1;

            if offset == b0 {
                self.blocks.insert(i, new_block);
                return;
            }
            if offset < b1 {
                let inner = (offset - b0) as usize;
                let original_len = self.blocks[i].len();
                let (pre, post) = self.blocks[i].split_at(inner);
                assert_eq!(
                    pre.len() + post.len(),
                    original_len,
                    "invalid insert!"
                );
                self.blocks.splice(i..=i, [pre, new_block, post]);
                return;
            }
        }
        unreachable!("invalid insert!");
    }

    /// Remove the `n` bytes starting at logical `offset`. Rejects
    /// `offset + n > total_size()`. A no-op (after bounds validation) when
    /// `n == 0`.
    pub fn delete(&mut self, offset: u64, n: u64) -> Result<()> {
        let end = offset
            .checked_add(n)
            .ok_or_else(|| EditError::invalid_argument("offset + len overflows"))?;
        if end > self.total_size {
            return Err(EditError::invalid_argument(format!(
                "delete range [{offset}, {end}) exceeds total size {}",
                self.total_size
            )));
        }
        if n == 0 {
            return Ok(());
        }

        // Phase A: promote the at-most-one block whose overlap class will be
        // an interior hole, if it is currently a source view.
        self.promote_interior_hole(offset, end);

        // Phase B: trim pass.
        let mut removed = 0u64;
        let mut accum = 0u64;
        let mut new_blocks = Vec::with_capacity(self.blocks.len());
        for block in self.blocks.drain(..) {
            let blen = block.len() as u64;
            let b0 = accum;
            let b1 = b0 + blen;
            accum = b1;

            if blen == 0 || !overlaps(b0, b1, offset, end) {
                new_blocks.push(block);
                continue;
            }

            if offset <= b0 && end >= b1 {
                // Full cover: tombstone. Dropped by compaction below.
                removed += blen;
            } else if offset <= b0 {
                // Covers start: b0 < end < b1.
                let cut = (end - b0) as usize;
                removed += end - b0;
                new_blocks.push(trim_front(block, cut));
            } else if end >= b1 {
                // Covers end: b0 < offset < b1.
                let keep = (offset - b0) as usize;
                removed += b1 - offset;
                new_blocks.push(trim_back(block, keep));
            } else {
                // Interior hole: b0 < offset < end < b1. Phase A guaranteed
                // this block is now a patch.
                let lo = (offset - b0) as usize;
                let hi = (end - b0) as usize;
                removed += n;
                new_blocks.push(cut_middle(block, lo, hi));
            }
        }

        assert_eq!(removed, n, "invalid delete!");
        self.blocks = new_blocks;
        self.total_size -= n;
        self.compact_tombstones();
        Ok(())
    }

    /// Find the sole block (if any) whose overlap class with `[d0, d1)` is
    /// an interior hole, and if it's a source view, promote a BLOCK_LEN
    /// aligned region covering `[d0, d1)` to an owned patch. At most one
    /// block can have this class for a given delete call: an interior hole
    /// means `[d0, d1)` is entirely contained within that one block, which
    /// precludes any other block overlapping the same range.
    fn promote_interior_hole(&mut self, d0: u64, d1: u64) {
        let mut accum = 0u64;
        for i in 0..self.blocks.len() {
            let b0 = accum;
            let blen = self.blocks[i].len() as u64;
            let b1 = b0 + blen;
            accum = b1;

            if blen == 0 {
                continue;
            }
            let is_interior_hole = b0 < d0 && d1 < b1;
            if !is_interior_hole || !self.blocks[i].is_source_view() {
                continue;
            }

            let bytes = match self.blocks[i] {
                Block::SourceView(b) => b,
                Block::Patch(_) => unreachable!(),
            };
            let block_len = bytes.len();
            let block_len_quantum = self.block_len as usize;

            if block_len < block_len_quantum {
                self.blocks[i] = Block::Patch(bytes.to_vec());
                return;
            }

            // Clamp the inner offset to the block's own start per the
            // resolved promotion semantics (never negative, never less than
            // the block's own head).
            let p = (d0 - b0) as usize;
            let need_end = (d1 - b0) as usize;
            let aligned_start = (p / block_len_quantum) * block_len_quantum;
            let mut aligned_end = aligned_start + block_len_quantum;
            while aligned_end < need_end {
                aligned_end += block_len_quantum;
            }
            let aligned_end = aligned_end.min(block_len);

            let mut parts = Vec::with_capacity(3);
            if aligned_start > 0 {
                parts.push(Block::SourceView(&bytes[..aligned_start]));
            }
            parts.push(Block::Patch(bytes[aligned_start..aligned_end].to_vec()));
            if aligned_end < block_len {
                parts.push(Block::SourceView(&bytes[aligned_end..]));
            }
            self.blocks.splice(i..=i, parts);
            return;
        }
    }

    /// Drop zero-length blocks left behind by full-cover deletes.
    fn compact_tombstones(&mut self) {
        self.blocks.retain(|b| !b.is_empty());
    }
}

fn trim_front(block: Block<'_>, cut: usize) -> Block<'_> {
    match block {
        Block::SourceView(bytes) => Block::SourceView(&bytes[cut..]),
        Block::Patch(mut bytes) => {
            bytes.drain(..cut);
            Block::Patch(bytes)
        }
    }
}

fn trim_back(block: Block<'_>, keep: usize) -> Block<'_> {
    match block {
        Block::SourceView(bytes) => Block::SourceView(&bytes[..keep]),
        Block::Patch(mut bytes) => {
            bytes.truncate(keep);
            Block::Patch(bytes)
        }
    }
}

fn cut_middle(block: Block<'_>, lo: usize, hi: usize) -> Block<'_> {
    match block {
        Block::Patch(mut bytes) => {
            bytes.drain(lo..hi);
            Block::Patch(bytes)
        }
        Block::SourceView(_) => unreachable!("interior hole block must be promoted to patch"),
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
