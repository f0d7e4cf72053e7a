//! # Builders
//!
//! ## Modules
//!
//! - [`crypt_builder`] - per-call configuration for encrypt/decrypt
//!
//! ## Usage
//!
//! The free functions [`encrypt`](crate::encrypt) and [`decrypt`](crate::decrypt)
//! use the defaults. A builder is for the non-default knobs: AES-192/256 on
//! encrypt, and refusing legacy streams on decrypt.

pub mod crypt_builder;

pub use crypt_builder::CryptBuilder;
