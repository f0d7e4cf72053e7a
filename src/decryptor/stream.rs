//! src/decryptor/stream.rs
//! Chunked AES-CBC decryption; the last block is held back until EOF

use crate::aliases::Block16;
use crate::consts::{BLOCK_LEN, BUFFER_SIZE};
use crate::crypto::CbcDecryptor;
use crate::decryptor::padding::strip_pkcs7;
use crate::error::EcfileError;
use crate::utils::read_full;
use std::io::{Read, Write};
use tracing::trace;

/// Decrypt the ciphertext body from `source` into `destination`.
///
/// Reads [`BUFFER_SIZE`] bytes at a time. Each chunk's plaintext is written
/// except its last block, which is kept in `held` because it may turn out to be
/// the padded final block. At end of input the held block is unpadded and the
/// remainder written; an invalid final block writes nothing of that block.
///
/// Returns the number of plaintext bytes written. Does not flush `destination`.
pub fn decrypt_stream<R, W>(
    source: &mut R,
    destination: &mut W,
    mut cipher: CbcDecryptor,
) -> Result<u64, EcfileError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = vec![0u8; BUFFER_SIZE];
    let mut held = Block16::new([0u8; BLOCK_LEN]);
    let mut have_held = false;
    let mut written: u64 = 0;

    loop {
        let n = read_full(source, &mut buffer)?;
        if n == 0 {
            break;
        }
        if n % BLOCK_LEN != 0 {
            return Err(EcfileError::padding(format!(
                "truncated ciphertext: {n} trailing bytes are not a multiple of {BLOCK_LEN}"
            )));
        }

        cipher.decrypt_blocks(&mut buffer[..n]);

        if have_held {
            destination.write_all(held.expose_secret())?;
            written += BLOCK_LEN as u64;
        }
        let body = n - BLOCK_LEN;
        destination.write_all(&buffer[..body])?;
        written += body as u64;

        held.expose_secret_mut().copy_from_slice(&buffer[body..n]);
        have_held = true;
        trace!(bytes = n, "decrypted chunk");

        // read_full only comes up short at end of input
        if n < BUFFER_SIZE {
            break;
        }
    }

    if !have_held {
        return Err(EcfileError::padding("no ciphertext after the header"));
    }

    let tail = strip_pkcs7(held.expose_secret())?;
    destination.write_all(&held.expose_secret()[..tail])?;
    Ok(written + tail as u64)
}
