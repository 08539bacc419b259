//! Tests for the byte-level codecs: Base64, hashing, hex and URL encoding

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use tcv::converters::{
    binary_to_hex, decode_base64, decode_url, encode_base64, encode_url, generate_hash,
    hex_to_binary, hex_to_c_array, HashAlgorithm,
};
use tcv::{ConversionError, ConversionErrorKind};

const SAMPLES: &[&str] = &[
    "",
    "a",
    "hello world",
    "multi\nline\ttext",
    "ünïcödé ✓ 日本語",
    "{\"json\": [1, 2, 3]}",
];

#[test]
fn test_base64_round_trip() {
    for sample in SAMPLES {
        let encoded = encode_base64(sample);
        assert_eq!(decode_base64(&encoded).unwrap(), *sample);
    }
}

#[test]
fn test_base64_known_vectors() {
    assert_eq!(encode_base64("Man"), "TWFu");
    assert_eq!(encode_base64("Ma"), "TWE=");
    assert_eq!(encode_base64("M"), "TQ==");
    assert_eq!(decode_base64("TWE").unwrap(), "Ma");
}

#[test]
fn test_base64_rejects_garbage() {
    let err = decode_base64("not*base64!").unwrap_err();
    assert_matches!(err, ConversionError::Decode { .. });
}

#[test]
fn test_hash_lengths_and_determinism() {
    for sample in SAMPLES {
        for algorithm in HashAlgorithm::ALL {
            let first = generate_hash(sample, algorithm.as_str()).unwrap();
            let second = generate_hash(sample, algorithm.as_str()).unwrap();
            assert_eq!(first.len(), algorithm.hex_len());
            assert_eq!(first, second);
            assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }
}

#[test]
fn test_hash_known_digests() {
    assert_eq!(
        generate_hash("", "md5").unwrap(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
    assert_eq!(
        generate_hash("", "sha1").unwrap(),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
    assert_eq!(
        generate_hash("", "sha256").unwrap(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_hash_algorithm_name_is_case_insensitive() {
    assert_eq!(
        generate_hash("abc", "SHA256").unwrap(),
        generate_hash("abc", "sha256").unwrap()
    );
}

#[test]
fn test_unknown_hash_algorithm() {
    let err = generate_hash("abc", "crc32").unwrap_err();
    assert_eq!(err.kind(), ConversionErrorKind::InvalidArgument);
    assert_eq!(
        err.to_string(),
        "Invalid algorithm. Use: md5, sha1, sha256, sha512"
    );
}

#[test]
fn test_hex_binary_round_trip() {
    for hex in ["0", "a5", "DEADBEEF", "0123456789abcdef"] {
        let binary = hex_to_binary(hex);
        assert_eq!(binary_to_hex(&binary), hex.to_ascii_uppercase());
    }
}

#[test]
fn test_hex_is_lenient() {
    assert_eq!(hex_to_binary("0xFF, 0x01"), "0000 1111 1111 0000 0000 0001");
    assert_eq!(binary_to_hex("1111 2222 0000"), "F0");
}

#[test]
fn test_c_array_empty_input() {
    assert_eq!(hex_to_c_array(""), "const unsigned char data[] = {\n  \n};");
    assert_eq!(hex_to_c_array("xyz"), hex_to_c_array(""));
}

#[test]
fn test_c_array_entries() {
    assert_eq!(
        hex_to_c_array("de ad be ef"),
        "const unsigned char data[] = {\n  0xDE, 0xAD, 0xBE, 0xEF\n};"
    );
}

#[test]
fn test_url_round_trip() {
    for sample in SAMPLES {
        assert_eq!(decode_url(&encode_url(sample)).unwrap(), *sample);
    }
}

#[test]
fn test_url_malformed_escape() {
    for input in ["%", "%zz", "100%"] {
        assert_eq!(
            decode_url(input).unwrap_err().kind(),
            ConversionErrorKind::Decode
        );
    }
}
