//! src/encryptor/stream.rs
//! Chunked AES-CBC encryption with PKCS#7 padding

use crate::consts::{BLOCK_LEN, BUFFER_SIZE};
use crate::crypto::CbcEncryptor;
use crate::error::EcfileError;
use crate::utils::read_full;
use std::io::{Read, Write};
use tracing::trace;

/// Encrypt everything `source` yields and write the ciphertext to `destination`.
///
/// Reads [`BUFFER_SIZE`] bytes at a time. A full chunk is encrypted and written
/// as-is; the first short chunk (possibly empty) is the last one and gets
/// PKCS#7 padding, a whole extra block when it is already block-aligned.
///
/// Returns the number of plaintext bytes consumed. Does not flush `destination`.
pub fn encrypt_stream<R, W>(
    source: &mut R,
    destination: &mut W,
    mut cipher: CbcEncryptor,
) -> Result<u64, EcfileError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    // one spare block for the padding
    let mut buffer = vec![0u8; BUFFER_SIZE + BLOCK_LEN];
    let mut total: u64 = 0;

    loop {
        let n = read_full(source, &mut buffer[..BUFFER_SIZE])?;
        total += n as u64;

        if n == BUFFER_SIZE {
            cipher.encrypt_blocks(&mut buffer[..n]);
            destination.write_all(&buffer[..n])?;
            trace!(bytes = n, "encrypted chunk");
            continue;
        }

        let pad = BLOCK_LEN - n % BLOCK_LEN;
        let end = n + pad;
        buffer[n..end].fill(pad as u8);
        cipher.encrypt_blocks(&mut buffer[..end]);
        destination.write_all(&buffer[..end])?;
        trace!(bytes = n, pad, "encrypted final chunk");
        break;
    }

    Ok(total)
}
