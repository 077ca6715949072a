//! The two Feistel round functions and the per-round selection rule.
//!
//! `ff` is a linear bijection on the field. `gg` hashes the fixed-width
//! encoding of its input with SHA-256 and is one-way; the network never
//! needs to invert either in isolation.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::encoding::int_to_fixed_bytes;
use crate::error::Result;
use crate::field::mulmod;
use crate::params::{CipherParams, LINEAR_ROUND_PERIOD};

/// Which F a round uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundFunction {
    /// `ff`: x · EXPONENT · MULTIPLIER mod P.
    Linear,
    /// `gg`: SHA-256 of the block encoding, mod P.
    Hashed,
}

impl RoundFunction {
    /// Linear on every `LINEAR_ROUND_PERIOD`-th round, hashed otherwise.
    pub fn for_round(i: usize) -> Self {
        if i % LINEAR_ROUND_PERIOD == 0 {
            RoundFunction::Linear
        } else {
            RoundFunction::Hashed
        }
    }

    pub fn apply(self, x: &BigUint, params: &CipherParams) -> Result<BigUint> {
        match self {
            RoundFunction::Linear => Ok(ff(x, params)),
            RoundFunction::Hashed => gg(x, params),
        }
    }
}

/// Linear round function.
pub fn ff(x: &BigUint, params: &CipherParams) -> BigUint {
    let scale = BigUint::from(params.exponent) * BigUint::from(params.multiplier);
    mulmod(x, &scale, &params.modulus)
}

/// Hash round function. Fails only if x does not fit the block.
pub fn gg(x: &BigUint, params: &CipherParams) -> Result<BigUint> {
    let block = int_to_fixed_bytes(x, params.block_bytes)?;
    let digest = Sha256::digest(&block);
    Ok(BigUint::from_bytes_be(&digest) % &params.modulus)
}
