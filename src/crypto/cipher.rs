//! src/crypto/cipher.rs
//! AES-CBC over whole blocks, key size chosen at run time from the header

use crate::aliases::{Iv16, KeyBytes};
use crate::consts::BLOCK_LEN;
use crate::error::EcfileError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128Dec, Aes128Enc, Aes192Dec, Aes192Enc, Aes256Dec, Aes256Enc, Block as AesBlock};

fn invalid_key_len(len: usize) -> EcfileError {
    EcfileError::unsupported(format!(
        "invalid AES key length: {len} bytes (expected 16, 24 or 32)"
    ))
}

/// AES block encryptor for one of the three standard key sizes.
pub enum AesEnc {
    Aes128(Aes128Enc),
    Aes192(Aes192Enc),
    Aes256(Aes256Enc),
}

impl AesEnc {
    pub fn new(key: &[u8]) -> Result<Self, EcfileError> {
        let len = key.len();
        let cipher = match len {
            16 => Aes128Enc::new_from_slice(key).map(Self::Aes128),
            24 => Aes192Enc::new_from_slice(key).map(Self::Aes192),
            32 => Aes256Enc::new_from_slice(key).map(Self::Aes256),
            _ => return Err(invalid_key_len(len)),
        };
        cipher.map_err(|_| invalid_key_len(len))
    }

    #[inline(always)]
    fn encrypt_block(&self, block: &mut AesBlock) {
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }
}

/// AES block decryptor for one of the three standard key sizes.
pub enum AesDec {
    Aes128(Aes128Dec),
    Aes192(Aes192Dec),
    Aes256(Aes256Dec),
}

impl AesDec {
    pub fn new(key: &[u8]) -> Result<Self, EcfileError> {
        let len = key.len();
        let cipher = match len {
            16 => Aes128Dec::new_from_slice(key).map(Self::Aes128),
            24 => Aes192Dec::new_from_slice(key).map(Self::Aes192),
            32 => Aes256Dec::new_from_slice(key).map(Self::Aes256),
            _ => return Err(invalid_key_len(len)),
        };
        cipher.map_err(|_| invalid_key_len(len))
    }

    #[inline(always)]
    fn decrypt_block(&self, block: &mut AesBlock) {
        match self {
            Self::Aes128(c) => c.decrypt_block(block),
            Self::Aes192(c) => c.decrypt_block(block),
            Self::Aes256(c) => c.decrypt_block(block),
        }
    }
}

/// CBC encryption state: block cipher plus the previous ciphertext block.
pub struct CbcEncryptor {
    cipher: AesEnc,
    prev: [u8; BLOCK_LEN],
}

impl CbcEncryptor {
    /// Fails with [`EcfileError::UnsupportedFormat`] for key lengths other than 16/24/32.
    pub fn new(key: &KeyBytes, iv: &Iv16) -> Result<Self, EcfileError> {
        Ok(Self {
            cipher: AesEnc::new(key.expose_secret())?,
            prev: *iv.expose_secret(),
        })
    }

    /// Encrypts `buf` in place. `buf.len()` must be a multiple of 16.
    pub fn encrypt_blocks(&mut self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len() % BLOCK_LEN, 0);
        for chunk in buf.chunks_exact_mut(BLOCK_LEN) {
            let mut block = AesBlock::default();
            xor_blocks(chunk, &self.prev, &mut block);
            self.cipher.encrypt_block(&mut block);
            chunk.copy_from_slice(&block);
            self.prev.copy_from_slice(&block);
        }
    }
}

/// CBC decryption state: block cipher plus the previous ciphertext block.
pub struct CbcDecryptor {
    cipher: AesDec,
    prev: [u8; BLOCK_LEN],
}

impl CbcDecryptor {
    /// Fails with [`EcfileError::UnsupportedFormat`] for key lengths other than 16/24/32.
    pub fn new(key: &KeyBytes, iv: &Iv16) -> Result<Self, EcfileError> {
        Ok(Self {
            cipher: AesDec::new(key.expose_secret())?,
            prev: *iv.expose_secret(),
        })
    }

    /// Decrypts `buf` in place. `buf.len()` must be a multiple of 16.
    pub fn decrypt_blocks(&mut self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len() % BLOCK_LEN, 0);
        for chunk in buf.chunks_exact_mut(BLOCK_LEN) {
            let mut ciphertext = [0u8; BLOCK_LEN];
            ciphertext.copy_from_slice(chunk);

            let mut block = AesBlock::clone_from_slice(chunk);
            self.cipher.decrypt_block(&mut block);
            xor_blocks(&block, &self.prev, chunk);

            self.prev = ciphertext;
        }
    }
}
