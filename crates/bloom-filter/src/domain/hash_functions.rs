//! Seeded hash family for the Bloom filter
//!
//! Round `i` of an insert or query hashes the item with MurmurHash3 seeded
//! with `i`. Varying the seed gives effectively independent positions for the
//! same item, which is what the FPR formulas assume.

use std::io::Cursor;

/// Hash an item with MurmurHash3 (x64, 128-bit) under `seed`
///
/// Returns the lower 64 bits. Deterministic across runs and platforms.
pub fn stable_hash(item: &[u8], seed: u32) -> u64 {
    let mut cursor = Cursor::new(item);

    // Reading from an in-memory cursor cannot fail
    let hash = murmur3::murmur3_x64_128(&mut cursor, seed).unwrap_or(0);
    hash as u64
}

/// Bit position selected by hash round `seed` in an array of `size` bits
pub fn bit_position(item: &[u8], seed: u32, size: usize) -> usize {
    (stable_hash(item, seed) % size as u64) as usize
}

/// Lazily compute the `hash_count` bit positions for an item
///
/// Lazy so that a query can stop at the first clear bit.
pub fn hash_positions(
    item: &[u8],
    hash_count: usize,
    size: usize,
) -> impl Iterator<Item = usize> + '_ {
    // k <= ~log2(1/fp_prob) <= ~1075, so the seed cast cannot truncate
    (0..hash_count).map(move |round| bit_position(item, round as u32, size))
}
