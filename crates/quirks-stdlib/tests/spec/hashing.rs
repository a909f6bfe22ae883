//! Digests and checksums: known-answer behavior.

use sha2::{Digest, Sha256};

// ============================================================================
// SHA-256
// ============================================================================

#[test]
fn test_sha256_of_empty_input() {
    let digest = Sha256::digest(b"");
    assert_eq!(
        format!("{:x}", digest),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_sha256_known_vector() {
    let digest = Sha256::digest(b"abc");
    assert_eq!(
        format!("{:x}", digest),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_incremental_update_equals_one_shot() {
    let mut hasher = Sha256::new();
    hasher.update(b"ab");
    hasher.update(b"c");
    assert_eq!(hasher.finalize()[..], Sha256::digest(b"abc")[..]);
}

#[test]
fn test_single_bit_flip_changes_the_whole_digest() {
    let a = Sha256::digest(b"abc");
    let b = Sha256::digest(b"abd");
    let differing_bytes = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
    // avalanche: roughly half the bytes differ, certainly more than a few
    assert!(differing_bytes > 20);
}

#[test]
fn test_digest_is_32_bytes() {
    assert_eq!(Sha256::digest(b"x").len(), 32);
}

// ============================================================================
// CRC32
// ============================================================================

#[test]
fn test_crc32_known_vector() {
    // IEEE CRC32 of "123456789"
    assert_eq!(crc32fast::hash(b"123456789"), 0xCBF4_3926);
}

#[test]
fn test_crc32_of_empty_input_is_zero() {
    assert_eq!(crc32fast::hash(b""), 0);
}

#[test]
fn test_crc32_incremental_hasher() {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(b"1234");
    hasher.update(b"56789");
    assert_eq!(hasher.finalize(), crc32fast::hash(b"123456789"));
}

// ============================================================================
// std Hasher contract
// ============================================================================

#[test]
fn test_std_hasher_is_sensitive_to_write_boundaries_of_str() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    // Hash for str adds a terminator, so ("ab", "c") != ("a", "bc")
    fn hash_pair(a: &str, b: &str) -> u64 {
        let mut h = DefaultHasher::new();
        a.hash(&mut h);
        b.hash(&mut h);
        h.finish()
    }
    assert_ne!(hash_pair("ab", "c"), hash_pair("a", "bc"));
}
