//! src/kdf/evp.rs
//! OpenSSL `EVP_BytesToKey` (MD5, count = 1), out-param and zero-exposure

use crate::aliases::{Iv16, KeyBytes, PasswordString, Salt16};
use md5::{Digest, Md5};

/// Derive key and IV directly into caller buffers.
///
/// `D_1 = MD5(password || salt)`, `D_i = MD5(D_{i-1} || password || salt)`.
/// The concatenation `D_1 || D_2 || ...` fills `key_out` first, then `iv_out`.
/// Output lengths are taken from the buffers, so any key/IV size works.
///
/// Deterministic and infallible. MD5 is compiled in, so there is no
/// "digest unavailable" path that could leave the buffers zeroed.
#[inline]
pub fn derive_evp_key_iv(password: &[u8], salt: &[u8], key_out: &mut [u8], iv_out: &mut [u8]) {
    let key_len = key_out.len();
    let total = key_len + iv_out.len();

    let mut hasher = Md5::new();
    let mut digest = [0u8; 16];
    let mut produced = 0;

    while produced < total {
        if produced > 0 {
            hasher.update(digest);
        }
        hasher.update(password);
        hasher.update(salt);
        digest = hasher.finalize_reset().into();

        for &byte in digest.iter().take(total - produced) {
            if produced < key_len {
                key_out[produced] = byte;
            } else {
                iv_out[produced - key_len] = byte;
            }
            produced += 1;
        }
    }

    digest.fill(0);
}

/// Derive a `key_len`-byte AES key and a 16-byte IV from a password and salt.
///
/// Both outputs are wrapped from birth; the password is never copied.
#[inline]
pub fn derive_secure_evp_key(
    password: &PasswordString,
    salt: &Salt16,
    key_len: usize,
) -> (KeyBytes, Iv16) {
    let mut key = KeyBytes::new(vec![0u8; key_len]);
    let mut iv = Iv16::new([0u8; 16]);
    derive_evp_key_iv(
        password.expose_secret().as_bytes(),
        salt.expose_secret(),
        key.expose_secret_mut(),
        iv.expose_secret_mut(),
    );
    (key, iv)
}
