//! src/convert.rs
//! Legacy → current conversion
//!
//! Re-encrypts any readable container (legacy or current) into the current
//! format, optionally under a new password or key length.

use crate::aliases::PasswordString;
use crate::consts::SUPPORTED_KEY_LENGTHS;
use crate::{decrypt, encrypt_with_key_len, EcfileError};
use pipe::pipe;
use std::io::{ErrorKind, Read, Write};
use std::panic::resume_unwind;
use tracing::debug;

/// Convert a container to the current format.
///
/// # Features
/// - `new_password = None` keeps `old_password`
/// - Streaming, constant memory: decrypt and encrypt run on two scoped threads
///   joined by an in-memory pipe
///
/// # Errors
///
/// A decrypt error is returned in preference to an encrypt error, except when
/// the decrypt side only failed because the encrypt side stopped reading.
/// On any error `output` holds an incomplete container and must be discarded.
pub fn upgrade_to_current<R, W>(
    input: R,
    output: W,
    old_password: &PasswordString,
    new_password: Option<&PasswordString>,
    key_len: usize,
) -> Result<(), EcfileError>
where
    R: Read + Send,
    W: Write + Send,
{
    // Validate upfront so a bad length fails before any work
    if !SUPPORTED_KEY_LENGTHS.contains(&key_len) {
        return Err(EcfileError::UnsupportedFormat(format!(
            "unsupported key length {key_len} (expected 16, 24 or 32)"
        )));
    }

    let new_password = new_password.unwrap_or(old_password);

    let (decrypted, encrypted) = std::thread::scope(|s| {
        let (pipe_reader, pipe_writer) = pipe();

        let decrypt_thread = s.spawn(move || decrypt(input, pipe_writer, old_password));
        let encrypt_thread =
            s.spawn(move || encrypt_with_key_len(pipe_reader, output, new_password, key_len));

        (
            decrypt_thread.join().unwrap_or_else(|p| resume_unwind(p)),
            encrypt_thread.join().unwrap_or_else(|p| resume_unwind(p)),
        )
    });

    match (decrypted, encrypted) {
        (Err(EcfileError::Io(e)), Err(enc_err)) if e.kind() == ErrorKind::BrokenPipe => {
            Err(enc_err)
        }
        (Err(e), _) => Err(e),
        (Ok(()), result) => {
            debug!(key_len, "converted container to current format");
            result
        }
    }
}
