#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rift_hex::edit_buffer::EditBuffer;

#[derive(Arbitrary, Debug)]
struct FuzzCase {
    source: Vec<u8>,
    ops: Vec<Op>,
}

#[derive(Arbitrary, Debug)]
enum Op {
    Insert { offset: u64, bytes: Vec<u8> },
    Delete { offset: u64, len: u64 },
    Read { offset: u64, len: u8 },
}

// Differentially tests EditBuffer against a plain Vec<u8> oracle: every
// accepted op must leave both representations byte-identical, and every
// rejected op must leave the oracle's notion of total_size unchanged.
fuzz_target!(|case: FuzzCase| {
    let mut oracle = case.source.clone();
    let mut buf = EditBuffer::open(&case.source);

    for op in case.ops {
        match op {
            Op::Insert { offset, bytes } => {
                let offset = offset % (oracle.len() as u64 + 1);
                if buf.insert(offset, &bytes).is_ok() {
                    oracle.splice(offset as usize..offset as usize, bytes);
                }
            }
            Op::Delete { offset, len } => {
                if oracle.is_empty() {
                    continue;
                }
                let offset = offset % oracle.len() as u64;
                let len = len as u64 % (oracle.len() as u64 - offset + 1);
                if buf.delete(offset, len).is_ok() {
                    oracle.drain(offset as usize..(offset + len) as usize);
                }
            }
            Op::Read { offset, len } => {
                if oracle.is_empty() {
                    continue;
                }
                let offset = offset % oracle.len() as u64;
                let len = (len as usize).min(oracle.len() - offset as usize);
                let mut got = vec![0u8; len];
                let n = buf.read(offset, &mut got);
                assert_eq!(n as usize, len);
                assert_eq!(&got[..], &oracle[offset as usize..offset as usize + len]);
            }
        }
        assert_eq!(buf.total_size(), oracle.len() as u64);
    }

    let mut got = vec![0u8; oracle.len()];
    buf.read(0, &mut got);
    assert_eq!(got, oracle);
});
