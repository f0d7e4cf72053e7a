//! src/decryptor/decrypt.rs
//! Container decryption: header sniffing, EVP key derivation, CBC body

use crate::aliases::PasswordString;
use crate::consts::{FORMAT_VERSION, MAGIC_NUMBER, SUPPORTED_KEY_LENGTHS};
use crate::crypto::CbcDecryptor;
use crate::decryptor::stream::decrypt_stream;
use crate::error::EcfileError;
use crate::header::{read_header, HeaderFormat};
use crate::kdf::derive_secure_evp_key;
use std::io::{Read, Write};
use tracing::{debug, warn};

/// Decrypt a container (current or legacy format) from `input` into `output`.
///
/// The format is detected from the first four bytes. Header problems
/// (unsupported key length or version) are reported before any plaintext is
/// written. The body is processed in 16 KiB chunks; plaintext is written as it
/// is produced, except for the final block, which is held back until its
/// padding is verified.
///
/// `input` and `output` are taken by value (pass `&mut` to keep them) and are
/// dropped on every return path. `output` is flushed on every return path,
/// so plaintext released before an error reaches the underlying sink.
///
/// # Errors
///
/// - [`EcfileError::Io`] - stream failure, or the input ends inside the header
/// - [`EcfileError::UnsupportedFormat`] - unknown version or key length
/// - [`EcfileError::Padding`] - wrong password or corrupted/truncated ciphertext.
///   Plaintext of earlier chunks may already have been written; the caller must
///   discard `output`. Detection is probabilistic (no MAC).
#[inline]
pub fn decrypt<R, W>(input: R, output: W, password: &PasswordString) -> Result<(), EcfileError>
where
    R: Read,
    W: Write,
{
    decrypt_with_policy(input, output, password, true)
}

/// Like [`decrypt`], but fails with [`EcfileError::UnsupportedFormat`] when the
/// stream has no magic number instead of reading it as a legacy container.
#[inline]
pub fn decrypt_current_only<R, W>(
    input: R,
    output: W,
    password: &PasswordString,
) -> Result<(), EcfileError>
where
    R: Read,
    W: Write,
{
    decrypt_with_policy(input, output, password, false)
}

pub(crate) fn decrypt_with_policy<R, W>(
    mut input: R,
    mut output: W,
    password: &PasswordString,
    accept_legacy: bool,
) -> Result<(), EcfileError>
where
    R: Read,
    W: Write,
{
    let body = read_header(&mut input).and_then(|header| {
        let cipher = open_decryptor(&header, password, accept_legacy)?;
        let plaintext_len = decrypt_stream(&mut input, &mut output, cipher)?;
        Ok((header, plaintext_len))
    });

    // Flush on every path; a body error takes precedence over a flush error
    let flushed = output.flush();
    let (header, plaintext_len) = body?;
    flushed?;

    debug!(
        version = header.version(),
        key_len = header.key_len(),
        plaintext_len,
        "decryption finished"
    );
    Ok(())
}

/// Validate a parsed header, derive key and IV, and build the CBC decryptor.
///
/// # Errors
///
/// - [`EcfileError::UnsupportedFormat`] - legacy header while `accept_legacy` is
///   false, version other than 2, or key length other than 16/24/32
pub fn open_decryptor(
    header: &HeaderFormat,
    password: &PasswordString,
    accept_legacy: bool,
) -> Result<CbcDecryptor, EcfileError> {
    match *header {
        HeaderFormat::Legacy { .. } if !accept_legacy => {
            return Err(EcfileError::unsupported(
                "missing magic number (legacy format not accepted)",
            ));
        }
        HeaderFormat::Legacy { .. } => {
            warn!("no magic number, decrypting as legacy format");
        }
        HeaderFormat::Current { version, key_len, .. } => {
            if version != FORMAT_VERSION {
                return Err(EcfileError::unsupported(format!(
                    "version {version} (magic 0x{MAGIC_NUMBER:08X}, expected version {FORMAT_VERSION})"
                )));
            }
            if !SUPPORTED_KEY_LENGTHS.contains(&usize::from(key_len)) {
                return Err(EcfileError::unsupported(format!(
                    "key length {key_len} (expected 16, 24 or 32)"
                )));
            }
        }
    }

    let (key, iv) = derive_secure_evp_key(password, &header.salt(), header.key_len());
    CbcDecryptor::new(&key, &iv)
}
