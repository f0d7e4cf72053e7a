//! src/encryptor/encrypt.rs
//! Container encryption: random salt, EVP key derivation, header, CBC body

use crate::aliases::PasswordString;
use crate::consts::DEFAULT_KEY_LEN;
use crate::crypto::random_salt;
use crate::encryptor::encrypt_fixed_salt::encrypt_with_salt;
use crate::error::EcfileError;
use std::io::{Read, Write};

/// Encrypt `input` into a current-format container on `output` (AES-128-CBC).
///
/// A fresh random salt is generated per call, so encrypting the same data twice
/// yields different bytes. The input is consumed in 16 KiB chunks; memory use
/// does not depend on its length.
///
/// `input` and `output` are taken by value (pass `&mut` to keep them) and are
/// dropped on every return path. `output` is flushed on every return path,
/// errors included.
///
/// # Example
///
/// ```
/// use ecfile::aliases::PasswordString;
/// use ecfile::{decrypt, encrypt};
/// use std::io::Cursor;
///
/// let password = PasswordString::new("hunter2".to_string());
/// let mut container = Vec::new();
/// encrypt(Cursor::new(b"hello world"), &mut container, &password)?;
/// assert_eq!(container.len(), 33 + 16);
///
/// let mut plaintext = Vec::new();
/// decrypt(Cursor::new(&container), &mut plaintext, &password)?;
/// assert_eq!(plaintext, b"hello world");
/// # Ok::<(), ecfile::EcfileError>(())
/// ```
#[inline]
pub fn encrypt<R, W>(input: R, output: W, password: &PasswordString) -> Result<(), EcfileError>
where
    R: Read,
    W: Write,
{
    encrypt_with_key_len(input, output, password, DEFAULT_KEY_LEN)
}

/// Like [`encrypt`], with an explicit key length of 16, 24 or 32 bytes
/// (AES-128/192/256). The length is recorded in the header.
///
/// # Errors
///
/// - [`EcfileError::UnsupportedFormat`] - unsupported `key_len`; nothing is written
/// - [`EcfileError::Crypto`] - the OS random source failed; nothing is written
/// - [`EcfileError::Io`] - reading `input` or writing `output` failed
pub fn encrypt_with_key_len<R, W>(
    input: R,
    output: W,
    password: &PasswordString,
    key_len: usize,
) -> Result<(), EcfileError>
where
    R: Read,
    W: Write,
{
    let salt = random_salt()?;
    encrypt_with_salt(input, output, password, &salt, key_len)
}
