// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(input, output, &password)?` accepts current and legacy containers.
//! Strict variant: `decrypt_current_only` refuses streams without the magic number.
//! Helpers: `open_decryptor`, `decrypt_stream`, `strip_pkcs7` for custom flows.

pub(crate) mod decrypt;
pub(crate) mod padding;
pub(crate) mod stream;

pub use decrypt::{decrypt, decrypt_current_only, open_decryptor};
pub use padding::strip_pkcs7;
pub use stream::decrypt_stream;
