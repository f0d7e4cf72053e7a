// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`cipher`] - AES-128/192/256 selected by key length, with CBC chaining state
//! - [`rng`] - salt generation from the operating system

pub mod cipher;
pub mod rng;

pub use cipher::{CbcDecryptor, CbcEncryptor};
pub use rng::random_salt;
