//! # Header Parsing
//!
//! The container starts with either
//!
//! - a **current** header (33 bytes): `magic(4, BE 0xECECECEC) | version(1) | reserved(11)
//!   | salt(16) | key_len(1)`, or
//! - a **legacy** header (16 bytes): the salt alone, with an implied 16-byte key.
//!
//! The two are told apart only by whether the first four bytes equal the magic
//! number. A legacy salt that happens to start with `EC EC EC EC` is misread as a
//! current header; with random salts this has probability 2^-32 and is accepted.

use crate::aliases::Salt16;
use crate::consts::{
    CURRENT_HEADER_LEN, FORMAT_VERSION, HEAD_LEN, LEGACY_KEY_LEN, LEGACY_VERSION, MAGIC_NUMBER,
    SALT_LEN, SUPPORTED_KEY_LENGTHS,
};
use crate::error::EcfileError;
use std::io::{Read, Write};
use tracing::debug;

/// Parsed container header.
///
/// The salt is stored in the clear on disk, so it is kept as a plain array here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFormat {
    /// Magic number present: self-describing header.
    Current {
        salt: [u8; SALT_LEN],
        key_len: u8,
        version: u8,
    },
    /// No magic number: the first 16 bytes are the salt.
    Legacy { salt: [u8; SALT_LEN] },
}

impl HeaderFormat {
    /// Salt bytes as stored in the header.
    pub fn salt_bytes(&self) -> &[u8; SALT_LEN] {
        match self {
            Self::Current { salt, .. } | Self::Legacy { salt } => salt,
        }
    }

    /// Salt wrapped for the KDF.
    pub fn salt(&self) -> Salt16 {
        Salt16::new(*self.salt_bytes())
    }

    /// Declared key length; [`LEGACY_KEY_LEN`] for legacy streams.
    pub fn key_len(&self) -> usize {
        match self {
            Self::Current { key_len, .. } => usize::from(*key_len),
            Self::Legacy { .. } => LEGACY_KEY_LEN,
        }
    }

    /// Format version; [`LEGACY_VERSION`] for legacy streams.
    pub fn version(&self) -> u8 {
        match self {
            Self::Current { version, .. } => *version,
            Self::Legacy { .. } => LEGACY_VERSION,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy { .. })
    }

    /// Number of header bytes this variant occupies in the stream.
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Current { .. } => CURRENT_HEADER_LEN,
            Self::Legacy { .. } => HEAD_LEN,
        }
    }
}

/// Build the 16-byte head block: magic, version, eleven zero bytes.
#[inline]
pub fn encode_head_block(version: u8) -> [u8; HEAD_LEN] {
    let mut head = [0u8; HEAD_LEN];
    head[..4].copy_from_slice(&MAGIC_NUMBER.to_be_bytes());
    head[4] = version;
    head
}

/// Write a current-format header (33 bytes) for `salt` and `key_len`.
///
/// # Errors
///
/// - [`EcfileError::UnsupportedFormat`] - `key_len` is not 16, 24 or 32
/// - [`EcfileError::Io`] - the writer failed
pub fn write_header<W: Write + ?Sized>(
    writer: &mut W,
    salt: &Salt16,
    key_len: usize,
) -> Result<(), EcfileError> {
    if !SUPPORTED_KEY_LENGTHS.contains(&key_len) {
        return Err(EcfileError::unsupported(format!(
            "cannot write key length {key_len} (expected 16, 24 or 32)"
        )));
    }

    let mut header = [0u8; CURRENT_HEADER_LEN];
    header[..HEAD_LEN].copy_from_slice(&encode_head_block(FORMAT_VERSION));
    header[HEAD_LEN..HEAD_LEN + SALT_LEN].copy_from_slice(salt.expose_secret());
    // key_len validated above, fits in a byte
    header[CURRENT_HEADER_LEN - 1] = key_len as u8;

    writer.write_all(&header)?;
    Ok(())
}

/// Read and classify the container header.
///
/// Reads 16 bytes; if they start with the magic number, reads the salt and
/// key-length byte that follow. Otherwise the 16 bytes are the salt of a legacy
/// stream and nothing more is consumed.
///
/// The returned header is not validated beyond parsing; key length and version
/// are checked when the decryptor is built.
///
/// # Errors
///
/// - [`EcfileError::Io`] - the stream ended inside the header or the read failed
pub fn read_header<R: Read + ?Sized>(reader: &mut R) -> Result<HeaderFormat, EcfileError> {
    let mut head = [0u8; HEAD_LEN];
    reader.read_exact(&mut head)?;

    let magic = u32::from_be_bytes([head[0], head[1], head[2], head[3]]);
    if magic != MAGIC_NUMBER {
        debug!("no magic number, reading legacy header");
        return Ok(HeaderFormat::Legacy { salt: head });
    }

    let version = head[4];
    let mut salt = [0u8; SALT_LEN];
    reader.read_exact(&mut salt)?;
    let mut key_len = [0u8; 1];
    reader.read_exact(&mut key_len)?;

    debug!(version, key_len = key_len[0], "read current header");
    Ok(HeaderFormat::Current {
        salt,
        key_len: key_len[0],
        version,
    })
}

/// Read only the head block and report the format version.
///
/// Returns the version byte for streams with the magic number and
/// [`LEGACY_VERSION`] (`1`) otherwise. Useful for sorting files before
/// [`upgrade_to_current`](crate::upgrade_to_current).
///
/// # Example
///
/// ```
/// use ecfile::read_version;
/// use std::io::Cursor;
///
/// let current = [0xEC, 0xEC, 0xEC, 0xEC, 0x02, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
/// assert_eq!(read_version(Cursor::new(current))?, 2);
///
/// let legacy = [0x42u8; 16];
/// assert_eq!(read_version(Cursor::new(legacy))?, 1);
/// # Ok::<(), ecfile::EcfileError>(())
/// ```
pub fn read_version<R: Read>(mut reader: R) -> Result<u8, EcfileError> {
    let mut head = [0u8; HEAD_LEN];
    reader.read_exact(&mut head)?;

    if head[..4] == MAGIC_NUMBER.to_be_bytes() {
        Ok(head[4])
    } else {
        Ok(LEGACY_VERSION)
    }
}
