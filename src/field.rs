//! Field arithmetic and the lossless integer ↔ chunk-pair split.
//!
//! `split` keeps every bit: the high chunk is the plain quotient by P, so
//! it is unbounded, while the low chunk is always a field element.

use num_bigint::BigUint;

/// Working state of the network between rounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkPair {
    /// `x / P`. Not reduced.
    pub chunk1: BigUint,
    /// `x mod P`.
    pub chunk2: BigUint,
}

/// Split x into (x / P, x mod P).
pub fn split(x: &BigUint, modulus: &BigUint) -> ChunkPair {
    ChunkPair {
        chunk1: x / modulus,
        chunk2: x % modulus,
    }
}

/// Inverse of [`split`]: chunk1 * P + chunk2.
pub fn merge(pair: &ChunkPair, modulus: &BigUint) -> BigUint {
    &pair.chunk1 * modulus + &pair.chunk2
}

/// Modular multiplication: (a * b) mod m.
#[inline]
pub fn mulmod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Modular addition: (a + b) mod m. Inputs need not be reduced.
#[inline]
pub fn addmod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// Modular subtraction: (a - b) mod m, always in [0, m). Inputs need not be reduced.
#[inline]
pub fn submod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b { a - b } else { a + m - b }
}
