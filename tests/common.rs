//! tests/common.rs
//! Common constants and utilities shared across test files

use serde::Deserialize;
use std::io::{self, Read};
use std::path::Path;

/// Standard test password, matching the JSON vectors in tests/vector/data/
#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "Hello";

#[allow(dead_code)]
pub const TEST_DATA: &[u8] = b"test data";

/// Chunk size of the streaming pipeline, duplicated so tests notice if it changes
#[allow(dead_code)]
pub const CHUNK: usize = 16 * 1024;

/// Reader that yields at most `remaining` bytes from `inner`, then fails every read.
#[allow(dead_code)]
pub struct FailAfter<R> {
    pub inner: R,
    pub remaining: usize,
}

impl<R: Read> Read for FailAfter<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "source gone"));
        }
        let max = buf.len().min(self.remaining);
        let n = self.inner.read(&mut buf[..max])?;
        self.remaining -= n;
        Ok(n)
    }
}

/// Route `tracing` output through the test harness; set `RUST_LOG=ecfile=trace` to see it.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Current-format vector: fixed salt and key length, OpenSSL-produced ciphertext
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct CurrentVector {
    pub password: String,
    pub salt_hex: String,
    pub key_len: usize,
    pub plaintext_hex: String,
    pub ciphertext_hex: String,
}

/// Legacy vector: salt-first stream, implied 16-byte key
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct LegacyVector {
    pub password: String,
    pub plaintext_hex: String,
    pub ciphertext_hex: String,
}

#[allow(dead_code)]
pub fn load_json<T>(filename: &str) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
{
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vector")
        .join("data")
        .join(filename);

    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {filename}: {e}"));

    serde_json::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {filename}: {e}"))
}

#[allow(dead_code)]
pub fn current_vectors() -> Vec<CurrentVector> {
    load_json("current_vectors.json")
}

#[allow(dead_code)]
pub fn legacy_vectors() -> Vec<LegacyVector> {
    load_json("legacy_vectors.json")
}
