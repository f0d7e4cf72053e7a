//! Utility functions used across the library.

use std::io::{ErrorKind, Read};

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than 16 bytes. All callers
/// pass whole AES blocks.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// Reads until `buf` is full or the reader reports end of stream.
///
/// Returns the number of bytes placed in `buf`. A return value smaller than
/// `buf.len()` means the stream is exhausted. `Interrupted` reads are retried.
pub fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
