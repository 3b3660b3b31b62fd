use super::*;

fn read_string(buf: &EditBuffer, offset: u64, len: usize) -> String {
    let mut out = vec![0u8; len];
    let n = buf.read(offset, &mut out);
    String::from_utf8(out[..n as usize].to_vec()).unwrap()
}

// --- Literal end-to-end scenarios (spec section 8) ---

#[test]
fn scenario_1_prepend_short() {
    let mut buf = EditBuffer::open(b"ABCDEFGHIJ");
    buf.insert(0, b"<3 ").unwrap();
    assert_eq!(buf.total_size(), 13);
    assert_eq!(read_string(&buf, 0, 13), "<3 ABCDEFGHIJ");
}

#[test]
fn scenario_2_double_prepend() {
    let mut buf = EditBuffer::open(b"ABCDEFGHIJ");
    buf.insert(0, b"<3 ").unwrap();
    buf.insert(0, b":) ").unwrap();
    assert_eq!(buf.total_size(), 16);
    assert_eq!(read_string(&buf, 0, 16), ":) <3 ABCDEFGHIJ");
}

#[test]
fn scenario_3_prepend_then_delete_spanning() {
    let mut buf = EditBuffer::open(b"ABCDEFGHIJ");
    buf.insert(0, b"<3 ").unwrap();
    buf.insert(0, b":) ").unwrap();
    buf.delete(1, 7).unwrap();
    assert_eq!(buf.total_size(), 9);
    assert_eq!(read_string(&buf, 0, 9), ":CDEFGHIJ");
}

#[test]
fn scenario_4_delete_everything() {
    let mut buf = EditBuffer::open(b"ABCDEFGHIJ");
    buf.delete(0, 10).unwrap();
    assert_eq!(buf.total_size(), 0);
    let mut out = [0u8; 1];
    assert_eq!(buf.read(0, &mut out[..0]), 0);
}

#[test]
fn scenario_5_append() {
    let mut buf = EditBuffer::open(b"ABCDEFGHIJ");
    buf.insert(10, b"!!").unwrap();
    assert_eq!(buf.total_size(), 12);
    assert_eq!(read_string(&buf, 10, 2), "!!");
    assert_eq!(read_string(&buf, 0, 10), "ABCDEFGHIJ");
}

#[test]
fn scenario_6_interior_delete_then_insert() {
    let mut buf = EditBuffer::open(b"ABCDEFGHIJ");
    buf.delete(3, 4).unwrap();
    assert_eq!(buf.total_size(), 6);
    assert_eq!(read_string(&buf, 0, 6), "ABCHIJ");
    buf.insert(3, b"xyz").unwrap();
    assert_eq!(read_string(&buf, 0, 9), "ABCxyzHIJ");
}

// --- Universal properties (spec section 8) ---

#[test]
fn total_size_tracks_insert_and_delete_lengths() {
    let mut buf = EditBuffer::open(b"0123456789");
    buf.insert(5, b"XYZ").unwrap();
    assert_eq!(buf.total_size(), 13);
    buf.delete(0, 4).unwrap();
    assert_eq!(buf.total_size(), 9);
    buf.insert(9, b"!").unwrap();
    assert_eq!(buf.total_size(), 10);
}

#[test]
fn insert_then_delete_same_range_is_inverse() {
    let source = b"0123456789";
    let mut buf = EditBuffer::open(source);
    buf.insert(4, b"NEWBYTES").unwrap();
    assert_eq!(read_string(&buf, 0, 18), "0123NEWBYTES456789");
    buf.delete(4, 8).unwrap();
    assert_eq!(buf.total_size(), 10);
    assert_eq!(read_string(&buf, 0, 10), "0123456789");
}

#[test]
fn byte_for_byte_matches_vec_oracle_under_random_ops() {
    // A small deterministic pseudo-random sequence of inserts/deletes,
    // cross-checked against a plain Vec<u8> oracle.
    let source: Vec<u8> = (0u8..=255).collect();
    let mut buf = EditBuffer::with_block_len(&source, 16);
    let mut oracle = source.clone();

    let mut state: u32 = 0x1234_5678;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };

    for _ in 0..200 {
        let total = oracle.len() as u64;
        if total > 0 && next() % 2 == 0 {
            let offset = (next() as u64) % (total + 1);
            let max_len = (total - offset).min(20);
            let len = if max_len == 0 { 0 } else { (next() as u64) % (max_len + 1) };
            buf.delete(offset, len).unwrap();
            oracle.drain(offset as usize..(offset + len) as usize);
        } else {
            let offset = (next() as u64) % (total + 1);
            let n_bytes = 1 + (next() % 6) as usize;
            let bytes: Vec<u8> = (0..n_bytes).map(|_| next() as u8).collect();
            buf.insert(offset, &bytes).unwrap();
            oracle.splice(offset as usize..offset as usize, bytes.iter().copied());
        }
        assert_eq!(buf.total_size(), oracle.len() as u64);
        let mut got = vec![0u8; oracle.len()];
        let n = buf.read(0, &mut got);
        assert_eq!(n as usize, oracle.len());
        assert_eq!(got, oracle);
    }
}

#[test]
fn source_bytes_are_never_mutated() {
    let source = b"immutable source bytes".to_vec();
    let snapshot = source.clone();
    let mut buf = EditBuffer::open(&source);
    buf.insert(3, b"XYZ").unwrap();
    buf.delete(0, 2).unwrap();
    buf.insert(0, b"!!").unwrap();
    assert_eq!(source, snapshot);
}

#[test]
fn tombstones_are_invisible_to_read_and_total_size() {
    let mut buf = EditBuffer::open(b"0123456789");
    buf.delete(2, 3).unwrap(); // full cover of a middle span
    assert_eq!(buf.total_size(), 7);
    assert_eq!(read_string(&buf, 0, 7), "0156789");
    // compaction drops zero-length blocks; none should remain
    assert!(buf.blocks.iter().all(|b| !b.is_empty()));
}

// --- Edge cases ---

#[test]
fn block_len_of_one_forces_per_byte_promotion() {
    let mut buf = EditBuffer::with_block_len(b"ABCDEFGHIJ", 1);
    buf.delete(3, 4).unwrap();
    assert_eq!(read_string(&buf, 0, 6), "ABCHIJ");
}

#[test]
fn empty_source_open_yields_zero_size() {
    let buf = EditBuffer::open(b"");
    assert_eq!(buf.total_size(), 0);
    assert_eq!(buf.block_count(), 0);
}

#[test]
fn insert_into_empty_source_then_read_back() {
    let mut buf = EditBuffer::open(b"");
    buf.insert(0, b"hello").unwrap();
    assert_eq!(buf.total_size(), 5);
    assert_eq!(read_string(&buf, 0, 5), "hello");
}

#[test]
fn insert_rejects_offset_past_total_size() {
    let mut buf = EditBuffer::open(b"ABC");
    let err = buf.insert(4, b"x").unwrap_err();
    assert_eq!(err.kind, crate::error::ErrorKind::InvalidArgument);
}

#[test]
fn delete_rejects_range_past_total_size() {
    let mut buf = EditBuffer::open(b"ABC");
    let err = buf.delete(1, 10).unwrap_err();
    assert_eq!(err.kind, crate::error::ErrorKind::InvalidArgument);
}

#[test]
fn zero_length_delete_is_a_no_op() {
    let mut buf = EditBuffer::open(b"ABCDE");
    buf.delete(2, 0).unwrap();
    assert_eq!(buf.total_size(), 5);
    assert_eq!(read_string(&buf, 0, 5), "ABCDE");
}

#[test]
fn interior_delete_promotes_only_a_block_len_quantum() {
    // A large source block with a small interior delete should only
    // promote the BLOCK_LEN-aligned region it touches, keeping the
    // untouched head and tail as zero-copy source views.
    let source: Vec<u8> = (0u8..=200).cycle().take(4096).collect();
    let mut buf = EditBuffer::with_block_len(&source, 1024);
    buf.delete(1500, 3).unwrap();
    assert_eq!(buf.total_size(), 4093);

    let mut expected = source.clone();
    expected.drain(1500..1503);
    let mut got = vec![0u8; expected.len()];
    buf.read(0, &mut got);
    assert_eq!(got, expected);

    // Head and tail untouched by the quantum should still be source views.
    assert!(buf.blocks.iter().any(|b| b.is_source_view()));
}

#[test]
fn interior_delete_spanning_multiple_quanta_still_correct() {
    let source: Vec<u8> = (0u8..=200).cycle().take(4096).collect();
    let mut buf = EditBuffer::with_block_len(&source, 256);
    // A delete range that straddles more than one BLOCK_LEN quantum.
    buf.delete(300, 500).unwrap();
    let mut expected = source.clone();
    expected.drain(300..800);
    let mut got = vec![0u8; expected.len()];
    buf.read(0, &mut got);
    assert_eq!(got, expected);
}

#[test]
fn full_cover_delete_removes_entire_block() {
    let mut buf = EditBuffer::open(b"ABCDEFGHIJ");
    buf.insert(10, b"TAIL").unwrap(); // second block, all patch
    buf.delete(10, 4).unwrap(); // exactly covers the patch block
    assert_eq!(buf.total_size(), 10);
    assert_eq!(read_string(&buf, 0, 10), "ABCDEFGHIJ");
}

// --- Block List primitive helpers (spec section 4.1) ---

#[test]
fn overlaps_detects_intersection_and_adjacency() {
    assert!(overlaps(0, 5, 3, 8));
    assert!(overlaps(3, 8, 0, 5));
    assert!(!overlaps(0, 5, 5, 10)); // half-open, touching is not overlapping
    assert!(!overlaps(0, 0, 0, 10)); // empty range never overlaps
}
