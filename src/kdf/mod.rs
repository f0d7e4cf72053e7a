//! # Key Derivation Functions (KDF)
//!
//! The container format derives its AES key and IV from the password and salt
//! with OpenSSL's `EVP_BytesToKey` (MD5, one iteration).
//!
//! ## Modules
//!
//! - [`evp`] - `EVP_BytesToKey` with MD5
//!
//! ## Usage
//!
//! For most use cases, use the high-level [`encrypt`](crate::encrypt) and
//! [`decrypt`](crate::decrypt) functions, which derive keys automatically.
//! These low-level functions are exposed for custom flows, such as
//! interoperating with `openssl enc -md md5` or inspecting a header by hand.

pub mod evp;

pub use evp::{derive_evp_key_iv, derive_secure_evp_key};
