//! src/batch_ops.rs
//! Parallel encrypt/decrypt over independent stream pairs (feature `batch-ops`)
//!
//! Every pair gets its own salt, key and cipher state; nothing is shared
//! between workers except the borrowed password.

use rayon::prelude::*;
use std::io::{Read, Write};

use crate::aliases::PasswordString;
use crate::{decrypt, encrypt, EcfileError};

/// Encrypt every `(input, output)` pair in parallel. Stops at the first error.
pub fn encrypt_batch<R, W>(batch: &mut [(R, W)], password: &PasswordString) -> Result<(), EcfileError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| encrypt(src, dst, password))
}

/// Decrypt every `(input, output)` pair in parallel. Stops at the first error.
pub fn decrypt_batch<R, W>(batch: &mut [(R, W)], password: &PasswordString) -> Result<(), EcfileError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| decrypt(src, dst, password))
}
