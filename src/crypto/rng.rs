// src/crypto/rng.rs
//! Salt generation from the operating system random source.

use crate::aliases::Salt16;
use crate::error::EcfileError;
use rand::{rngs::OsRng, TryRngCore};

/// Generate a fresh 16-byte salt, wrapped from birth.
///
/// Unlike a `fill_bytes` call, a failing OS source is reported instead of
/// leaving the salt zeroed.
pub fn random_salt() -> Result<Salt16, EcfileError> {
    let mut salt = Salt16::new([0u8; 16]);
    OsRng
        .try_fill_bytes(salt.expose_secret_mut())
        .map_err(|e| EcfileError::Crypto(format!("OS random source failed: {e}")))?;
    Ok(salt)
}
