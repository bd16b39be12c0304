//! Grid content fingerprints.
//!
//! Uses FNV-1a for fast, deterministic hashing of a grid's row-major
//! bit pattern. Fingerprints are not cryptographically secure; the
//! lineage classifier uses them to group generations cheaply and
//! confirms candidate cycles against actual grid content.

use loam_core::Grid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u64 (as 8 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Compute a stable fingerprint of a grid's dimensions and cells.
///
/// The dimensions are folded in first so that the same bit pattern in
/// different shapes hashes differently.
pub fn grid_fingerprint(grid: &Grid) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, grid.width() as u64);
    hash = fnv1a_u64(hash, grid.height() as u64);
    for &cell in grid.as_flat() {
        hash = fnv1a_byte(hash, cell);
    }
    hash
}
