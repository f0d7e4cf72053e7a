//! src/encryptor/encrypt_fixed_salt.rs
//! Encryption with a caller-chosen salt (deterministic output for vectors and fuzzing)

use crate::aliases::{PasswordString, Salt16};
use crate::consts::SUPPORTED_KEY_LENGTHS;
use crate::crypto::CbcEncryptor;
use crate::encryptor::stream::encrypt_stream;
use crate::error::EcfileError;
use crate::header::write_header;
use crate::kdf::derive_secure_evp_key;
use std::io::{Read, Write};
use tracing::debug;

/// Encrypt with a **fixed** salt.
///
/// Same password, salt, key length and input always give the same container.
/// Reusing a salt across different plaintexts defeats its purpose; production
/// code should call [`encrypt`](crate::encrypt).
pub fn encrypt_with_salt<R, W>(
    mut input: R,
    mut output: W,
    password: &PasswordString,
    salt: &Salt16,
    key_len: usize,
) -> Result<(), EcfileError>
where
    R: Read,
    W: Write,
{
    if !SUPPORTED_KEY_LENGTHS.contains(&key_len) {
        return Err(EcfileError::unsupported(format!(
            "unsupported key length {key_len} (expected 16, 24 or 32)"
        )));
    }

    // Cipher first: nothing reaches `output` unless it can be built
    let (key, iv) = derive_secure_evp_key(password, salt, key_len);
    let cipher = CbcEncryptor::new(&key, &iv)?;

    let body = write_header(&mut output, salt, key_len)
        .and_then(|()| encrypt_stream(&mut input, &mut output, cipher));

    // Flush on every path; a body error takes precedence over a flush error
    let flushed = output.flush();
    let plaintext_len = body?;
    flushed?;

    debug!(key_len, plaintext_len, "encryption finished");
    Ok(())
}
