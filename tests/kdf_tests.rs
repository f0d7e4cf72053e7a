//! tests/kdf_tests.rs
//! EVP_BytesToKey (MD5) determinism and edge cases

use ecfile::aliases::{PasswordString, Salt16};
use ecfile::{derive_evp_key_iv, derive_secure_evp_key};

#[test]
fn derivation_is_deterministic() {
    let password = PasswordString::new("correct horse battery staple".to_string());
    let salt = Salt16::new([0x11; 16]);

    let (key1, iv1) = derive_secure_evp_key(&password, &salt, 16);
    let (key2, iv2) = derive_secure_evp_key(&password, &salt, 16);

    assert_eq!(key1.expose_secret(), key2.expose_secret());
    assert_eq!(iv1.expose_secret(), iv2.expose_secret());
    assert_eq!(key1.expose_secret().len(), 16);
}

#[test]
fn longer_keys_extend_shorter_ones() {
    // key || iv is a prefix of the same MD5 chain for every key length
    let password = PasswordString::new("prefix".to_string());
    let salt = Salt16::new([0x77; 16]);

    let (k16, iv16) = derive_secure_evp_key(&password, &salt, 16);
    let (k32, _) = derive_secure_evp_key(&password, &salt, 32);

    assert_eq!(&k32.expose_secret()[..16], k16.expose_secret().as_slice());
    assert_eq!(&k32.expose_secret()[16..], iv16.expose_secret());
}

#[test]
fn inputs_all_matter() {
    let salt_a = Salt16::new([0x01; 16]);
    let salt_b = Salt16::new([0x02; 16]);
    let pw_a = PasswordString::new("a".to_string());
    let pw_b = PasswordString::new("b".to_string());

    let (k_aa, _) = derive_secure_evp_key(&pw_a, &salt_a, 16);
    let (k_ab, _) = derive_secure_evp_key(&pw_a, &salt_b, 16);
    let (k_ba, _) = derive_secure_evp_key(&pw_b, &salt_a, 16);

    assert_ne!(k_aa.expose_secret(), k_ab.expose_secret());
    assert_ne!(k_aa.expose_secret(), k_ba.expose_secret());
}

#[test]
fn raw_derivation_odd_lengths() {
    // lengths that do not fall on MD5 boundaries
    let mut key = [0u8; 5];
    let mut iv = [0u8; 27];
    derive_evp_key_iv(b"pw", b"salt", &mut key, &mut iv);

    let mut stream = [0u8; 32];
    derive_evp_key_iv(b"pw", b"salt", &mut stream, &mut []);

    assert_eq!(&stream[..5], &key);
    assert_eq!(&stream[5..], &iv);
}

#[test]
fn password_is_used_as_utf8_bytes() {
    let salt = Salt16::new([0u8; 16]);
    let (key, iv) = derive_secure_evp_key(&PasswordString::new("ä".to_string()), &salt, 16);

    let mut raw_key = [0u8; 16];
    let mut raw_iv = [0u8; 16];
    derive_evp_key_iv(&[0xC3, 0xA4], &[0u8; 16], &mut raw_key, &mut raw_iv);

    assert_eq!(key.expose_secret().as_slice(), &raw_key);
    assert_eq!(iv.expose_secret(), &raw_iv);
}
