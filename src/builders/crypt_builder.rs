//! src/builders/crypt_builder.rs
//! Encrypt/decrypt configuration builder

use crate::aliases::PasswordString;
use crate::consts::DEFAULT_KEY_LEN;
use crate::decryptor::decrypt::decrypt_with_policy;
use crate::encryptor::encrypt_with_key_len;
use crate::error::EcfileError;
use std::io::{Read, Write};

/// Configuration for one or more encrypt/decrypt calls.
///
/// Defaults: 16-byte key (AES-128), legacy streams accepted. These match
/// [`encrypt`](crate::encrypt) and [`decrypt`](crate::decrypt).
///
/// # Thread Safety
///
/// `CryptBuilder` is `Copy + Send + Sync` and holds no key material; one value
/// can drive any number of concurrent calls.
///
/// # Example
///
/// ```
/// use ecfile::aliases::PasswordString;
/// use ecfile::CryptBuilder;
/// use std::io::Cursor;
///
/// let password = PasswordString::new("correct horse".to_string());
/// let builder = CryptBuilder::new().with_key_len(32).accept_legacy(false);
///
/// let mut container = Vec::new();
/// builder.encrypt(Cursor::new(b"payload"), &mut container, &password)?;
/// assert_eq!(container[32], 32);
///
/// let mut plaintext = Vec::new();
/// builder.decrypt(Cursor::new(&container), &mut plaintext, &password)?;
/// assert_eq!(plaintext, b"payload");
/// # Ok::<(), ecfile::EcfileError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptBuilder {
    key_len: usize,
    accept_legacy: bool,
}

impl CryptBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key_len: DEFAULT_KEY_LEN,
            accept_legacy: true,
        }
    }

    /// Key length used when encrypting: 16, 24 or 32.
    ///
    /// Not validated here; an unsupported value makes [`encrypt`](Self::encrypt)
    /// fail with [`EcfileError::UnsupportedFormat`].
    #[must_use]
    pub const fn with_key_len(mut self, key_len: usize) -> Self {
        self.key_len = key_len;
        self
    }

    /// Whether [`decrypt`](Self::decrypt) reads streams without the magic number.
    #[must_use]
    pub const fn accept_legacy(mut self, accept: bool) -> Self {
        self.accept_legacy = accept;
        self
    }

    #[must_use]
    pub const fn key_len(&self) -> usize {
        self.key_len
    }

    #[must_use]
    pub const fn accepts_legacy(&self) -> bool {
        self.accept_legacy
    }

    pub fn encrypt<R, W>(
        &self,
        input: R,
        output: W,
        password: &PasswordString,
    ) -> Result<(), EcfileError>
    where
        R: Read,
        W: Write,
    {
        encrypt_with_key_len(input, output, password, self.key_len)
    }

    pub fn decrypt<R, W>(
        &self,
        input: R,
        output: W,
        password: &PasswordString,
    ) -> Result<(), EcfileError>
    where
        R: Read,
        W: Write,
    {
        decrypt_with_policy(input, output, password, self.accept_legacy)
    }
}

impl Default for CryptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
