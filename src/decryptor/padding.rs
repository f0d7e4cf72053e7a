//! src/decryptor/padding.rs
//! PKCS#7 removal for the final plaintext block

use crate::consts::BLOCK_LEN;
use crate::error::EcfileError;

/// Validate PKCS#7 padding on the final decrypted block and return the number
/// of plaintext bytes it carries (0..=15).
///
/// The padding bytes are compared without an early exit.
#[inline]
pub fn strip_pkcs7(block: &[u8; BLOCK_LEN]) -> Result<usize, EcfileError> {
    let pad = block[BLOCK_LEN - 1];

    // Range check is not secret-dependent beyond the byte already read
    if pad == 0 || usize::from(pad) > BLOCK_LEN {
        return Err(EcfileError::padding(format!("invalid PKCS#7 pad length {pad}")));
    }

    let start = BLOCK_LEN - usize::from(pad);
    let diff = block[start..].iter().fold(0u8, |acc, &b| acc | (b ^ pad));
    if diff != 0 {
        return Err(EcfileError::padding("corrupt PKCS#7 padding bytes"));
    }

    Ok(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_padding() {
        let mut block = [0x41u8; 16];
        block[11..].fill(5);
        assert_eq!(strip_pkcs7(&block).unwrap(), 11);

        assert_eq!(strip_pkcs7(&[16u8; 16]).unwrap(), 0);

        let mut one = [0u8; 16];
        one[15] = 1;
        assert_eq!(strip_pkcs7(&one).unwrap(), 15);
    }

    #[test]
    fn invalid_padding() {
        let mut zero = [0x41u8; 16];
        zero[15] = 0;
        assert!(matches!(strip_pkcs7(&zero), Err(EcfileError::Padding(_))));

        let mut too_big = [0x41u8; 16];
        too_big[15] = 17;
        assert!(matches!(strip_pkcs7(&too_big), Err(EcfileError::Padding(_))));

        let mut mismatch = [0x41u8; 16];
        mismatch[12..].fill(4);
        mismatch[13] = 3;
        assert!(matches!(strip_pkcs7(&mismatch), Err(EcfileError::Padding(_))));
    }
}
