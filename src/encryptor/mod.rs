// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(input, output, &password)?` writes a current-format container.
//! Variants: `encrypt_with_key_len` (AES-192/256), `encrypt_with_salt` (deterministic, for tests).
//! Building block: `encrypt_stream` for the chunked CBC body.

pub(crate) mod encrypt;
pub(crate) mod encrypt_fixed_salt;
pub(crate) mod stream;

pub use encrypt::{encrypt, encrypt_with_key_len};
pub use encrypt_fixed_salt::encrypt_with_salt;
pub use stream::encrypt_stream;
