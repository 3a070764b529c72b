//! Content fingerprinting for cache keys.
//!
//! 32-bit FNV-1a over UTF-16 code units. Fast and deterministic, not
//! cryptographic; collisions are tolerated by prefixing the code-unit
//! length in [`stable_text_key`].

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Hash `text` to an 8-digit lowercase hex string.
///
/// Iterates UTF-16 code units so that the fingerprint matches the same
/// text regardless of how the caller sourced it.
pub fn hash_text(text: &str) -> String {
    let mut hash = FNV_OFFSET_BASIS;
    for unit in text.encode_utf16() {
        hash ^= u32::from(unit);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    format!("{:08x}", hash)
}

/// Cache-key fingerprint: `"{utf16_len}:{hash}"`.
///
/// The length prefix keeps two texts of different lengths from ever
/// sharing a key, even on a hash collision.
pub fn stable_text_key(text: &str) -> String {
    format!("{}:{}", text.encode_utf16().count(), hash_text(text))
}
