//! # Constants
//!
//! Fixed values of the container format and the streaming pipeline.

/// Sentinel stored big-endian in the first four bytes of a current-format header.
pub const MAGIC_NUMBER: u32 = 0xECEC_ECEC;

/// Container format version written by this library.
///
/// Streams without the magic number are reported as version [`LEGACY_VERSION`].
pub const FORMAT_VERSION: u8 = 2;

/// Version assigned to headerless (salt-first) streams.
pub const LEGACY_VERSION: u8 = 1;

/// Length of the head block (magic + version + reserved padding).
pub const HEAD_LEN: usize = 16;

/// Salt length in bytes, for both formats.
pub const SALT_LEN: usize = 16;

/// AES block length, which is also the IV length.
pub const BLOCK_LEN: usize = 16;

/// Key length used by [`encrypt`](crate::encrypt) (AES-128).
pub const DEFAULT_KEY_LEN: usize = 16;

/// Key length implied by a legacy stream, which carries no key-length byte.
pub const LEGACY_KEY_LEN: usize = 16;

/// Key lengths accepted on both paths (AES-128, AES-192, AES-256).
pub const SUPPORTED_KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// Size of a current-format header: head block + salt + key-length byte.
pub const CURRENT_HEADER_LEN: usize = HEAD_LEN + SALT_LEN + 1;

/// Chunk size of the streaming pipeline (16 KiB).
///
/// Must stay a multiple of [`BLOCK_LEN`].
pub const BUFFER_SIZE: usize = 16 * 1024;

const _: () = assert!(BUFFER_SIZE % BLOCK_LEN == 0);
