//! # Keyed Hashing Primitives
//!
//! The VM seeds its memory from a 32-byte key by expanding a ChaCha20
//! keystream, and checkpoints state through fixed-output Blake2b
//! compressions. Expansion and compression are the only cryptography the
//! protocol fixes; program execution itself lives elsewhere.
//!
//! Buffer-size and key-size violations are call-site bugs and panic.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Blake2b512, Digest};
use chacha20::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
use chacha20::{ChaCha20, Key, Nonce};

/// Expansion keys are exactly 32 bytes.
pub const KEY_SZ: usize = 32;

/// Output size of [`hash_compress`].
pub const HASH_SZ: usize = 32;

/// Output size of [`hash_compress64`].
pub const HASH64_SZ: usize = 64;

/// Fixed nonce under which every expansion keystream is generated;
/// domain-separates expansion from any other use of the key.
pub const EXPAND_NONCE: [u8; 12] = *b"____PC_EXPND";

/// Fill `out` with deterministic pseudo-random bytes derived from `key`.
///
/// Zero-fills the buffer and XORs in the IETF ChaCha20 keystream keyed
/// by `key` under [`EXPAND_NONCE`], starting at block `counter`; the
/// buffer ends up holding the raw keystream. Distinct counters yield
/// independent streams, which is how large memory regions are
/// materialized from one small seed.
///
/// # Panics
///
/// If `key` is not exactly 32 bytes.
pub fn hash_expand(out: &mut [u8], key: &[u8], counter: u32) {
    assert_eq!(key.len(), KEY_SZ, "expansion key must be {KEY_SZ} bytes");
    out.fill(0);
    let mut cipher = ChaCha20::new(Key::from_slice(key), Nonce::from_slice(&EXPAND_NONCE));
    cipher.seek(counter as u64 * 64);
    cipher.apply_keystream(out);
}

/// Blake2b-256 of `input`, written into `out[..32]`.
///
/// # Panics
///
/// If `out` is shorter than 32 bytes.
pub fn hash_compress(out: &mut [u8], input: &[u8]) {
    assert!(
        out.len() >= HASH_SZ,
        "compress output buffer must hold {HASH_SZ} bytes"
    );
    let mut hasher = Blake2b::<U32>::new();
    hasher.update(input);
    out[..HASH_SZ].copy_from_slice(&hasher.finalize());
}

/// Blake2b-512 of `input`, written into `out[..64]`.
///
/// # Panics
///
/// If `out` is shorter than 64 bytes.
pub fn hash_compress64(out: &mut [u8], input: &[u8]) {
    assert!(
        out.len() >= HASH64_SZ,
        "compress output buffer must hold {HASH64_SZ} bytes"
    );
    let mut hasher = Blake2b512::new();
    hasher.update(input);
    out[..HASH64_SZ].copy_from_slice(&hasher.finalize());
}
