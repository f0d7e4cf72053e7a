//! # Secure-Gate Type Aliases
//!
//! Wrappers from [`secure-gate`](https://github.com/Slurp9187/secure-gate) for every
//! value that is derived from, or feeds into, the password.
//! Access always goes through `.expose_secret()` / `.expose_secret_mut()`.
//!
//! ## Dynamic secrets
//! - [`PasswordString`] - user password (UTF-8)
//! - [`KeyBytes`] - derived AES key, 16/24/32 bytes depending on the header
//!
//! ## Fixed-size values
//! - [`Salt16`] - per-stream salt
//! - [`Iv16`] - derived CBC initialization vector
//! - [`Block16`] - one plaintext block held back for padding removal

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Block16 = SpanBuffer<16>; // one AES block

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(pub PasswordString, String);
dynamic_alias!(pub KeyBytes, Vec<u8>);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets, alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(pub Iv16, 16); // derived CBC IV
fixed_alias!(pub Salt16, 16); // KDF salt, random or read from the header
