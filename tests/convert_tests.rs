//! tests/convert_tests.rs
//! Legacy → current conversion through the in-memory pipe

mod common;
use common::{current_vectors, legacy_vectors, CHUNK, TEST_PASSWORD};

use ecfile::aliases::PasswordString;
use ecfile::{
    decrypt, decrypt_current_only, encrypt, read_version, upgrade_to_current, EcfileError,
};
use hex::decode;
use std::io::{Cursor, Write};

#[test]
fn upgrade_all_legacy_vectors() {
    for (i, v) in legacy_vectors().iter().enumerate() {
        let legacy = decode(&v.ciphertext_hex).unwrap();
        let password = PasswordString::new(v.password.clone());

        let mut upgraded = Vec::new();
        upgrade_to_current(Cursor::new(&legacy), &mut upgraded, &password, None, 16)
            .unwrap_or_else(|e| panic!("legacy vector {i}: {e}"));
        assert_eq!(read_version(Cursor::new(&upgraded)).unwrap(), 2);

        let mut plaintext = Vec::new();
        decrypt_current_only(Cursor::new(&upgraded), &mut plaintext, &password).unwrap();
        assert_eq!(plaintext, decode(&v.plaintext_hex).unwrap(), "legacy vector {i}");
    }
}

#[test]
fn rekey_current_container_with_new_password_and_key_len() {
    let v = &current_vectors()[0];
    let old = PasswordString::new(v.password.clone());
    let new = PasswordString::new("new-password".to_string());

    let mut upgraded = Vec::new();
    upgrade_to_current(
        Cursor::new(decode(&v.ciphertext_hex).unwrap()),
        &mut upgraded,
        &old,
        Some(&new),
        32,
    )
    .unwrap();
    assert_eq!(upgraded[32], 32);

    let mut plaintext = Vec::new();
    decrypt(Cursor::new(&upgraded), &mut plaintext, &new).unwrap();
    assert_eq!(plaintext, decode(&v.plaintext_hex).unwrap());

    // The old password no longer opens it
    let mut plaintext = Vec::new();
    match decrypt(Cursor::new(&upgraded), &mut plaintext, &old) {
        Err(e) => assert!(matches!(e, EcfileError::Padding(_))),
        Ok(()) => assert_ne!(plaintext, b"hello world"),
    }
}

#[test]
fn upgrade_multi_chunk_stream() {
    let password = PasswordString::new(TEST_PASSWORD.to_string());
    let data: Vec<u8> = (0..3 * CHUNK + 7).map(|i| (i % 253) as u8).collect();

    let mut container = Vec::new();
    encrypt(Cursor::new(&data), &mut container, &password).unwrap();

    let mut upgraded = Vec::new();
    upgrade_to_current(Cursor::new(container), &mut upgraded, &password, None, 24).unwrap();

    let mut plaintext = Vec::new();
    decrypt(Cursor::new(&upgraded), &mut plaintext, &password).unwrap();
    assert_eq!(plaintext, data);
}

#[test]
fn wrong_old_password_surfaces_decrypt_error() {
    let v = &legacy_vectors()[0];
    let wrong = PasswordString::new("wrong".to_string());

    let mut upgraded = Vec::new();
    let err = upgrade_to_current(
        Cursor::new(decode(&v.ciphertext_hex).unwrap()),
        &mut upgraded,
        &wrong,
        None,
        16,
    )
    .unwrap_err();
    assert!(matches!(err, EcfileError::Padding(_)));
}

#[test]
fn output_failure_surfaces_encrypt_error() {
    struct Failing;
    impl Write for Failing {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let password = PasswordString::new(TEST_PASSWORD.to_string());
    let mut container = Vec::new();
    encrypt(Cursor::new(vec![1u8; 4 * CHUNK]), &mut container, &password).unwrap();

    let err = upgrade_to_current(Cursor::new(container), Failing, &password, None, 16).unwrap_err();
    assert!(matches!(err, EcfileError::Io(ref e) if e.to_string().contains("disk full")), "{err}");
}

#[test]
fn bad_key_len_rejected_upfront() {
    let password = PasswordString::new(TEST_PASSWORD.to_string());
    let mut out = Vec::new();
    let err = upgrade_to_current(Cursor::new(Vec::new()), &mut out, &password, None, 7).unwrap_err();
    assert!(matches!(err, EcfileError::UnsupportedFormat(_)));
    assert!(out.is_empty());
}
