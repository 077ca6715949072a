//! Public per-round constants.
//!
//! c[i] = ((44·i) ⊕ (3 + 98·i) ⊕ (2 + 172·i + 491)) mod P
//!
//! Addition binds tighter than XOR here, so the three XOR operands are
//! the sums shown above.

use num_bigint::BigUint;

/// Constant for round `i`.
pub fn round_constant(i: usize, modulus: &BigUint) -> BigUint {
    let i = i as u128;
    let raw = (44 * i) ^ (3 + 98 * i) ^ (2 + 172 * i + 491);
    BigUint::from(raw) % modulus
}

/// Constants for rounds `0..rounds`.
pub fn round_constants(rounds: usize, modulus: &BigUint) -> Vec<BigUint> {
    (0..rounds).map(|i| round_constant(i, modulus)).collect()
}
