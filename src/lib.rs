// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod convert;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod kdf;
pub mod utils;

// High-level API
pub use decryptor::{decrypt, decrypt_current_only};
pub use encryptor::{encrypt, encrypt_with_key_len, encrypt_with_salt};
pub use error::EcfileError;

pub use builders::CryptBuilder;

// Low-level KDF, for OpenSSL interop and hand-built flows
pub use kdf::{derive_evp_key_iv, derive_secure_evp_key};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};

pub use convert::upgrade_to_current;

pub use header::{read_header, read_version, write_header, HeaderFormat};
