//! Scheme parameters and the immutable parameter set passed to every operation.

use std::ops::RangeInclusive;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{CipherError, Result};

/// Field modulus P, big-endian. Prime, 256 bits.
/// P = 112100829556962061444927618073086278041158621998950683631735636667566868795947
pub const MODULUS_BYTES: [u8; 32] = [
    247, 214, 210, 48, 230, 1, 114, 251, 88, 50, 123, 177, 117, 72, 204, 219,
    89, 57, 208, 227, 204, 53, 56, 109, 147, 247, 27, 37, 178, 182, 18, 43,
];

/// Scalar applied by the linear round function alongside [`MULTIPLIER`].
pub const EXPONENT: u64 = 3;

/// Multiplier of the linear round function (the java.util.Random LCG constant).
pub const MULTIPLIER: u64 = 0x5DEECE66D;

/// Width of the fixed big-endian buffer hashed by `gg` and used for recovery.
pub const BLOCK_BYTES: usize = 256;

/// Rounds with `i % LINEAR_ROUND_PERIOD == 0` use the linear round function.
pub const LINEAR_ROUND_PERIOD: usize = 11;

/// Rounds with `i % SWAP_PERIOD == 0` update (chunk1, chunk2); the rest (chunk2, chunk1).
pub const SWAP_PERIOD: usize = 5;

/// Deployment range for the secret round count.
pub const ROUNDS: RangeInclusive<usize> = 26..=53;

/// Public parameter set. Cloned into each cipher instance, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CipherParams {
    pub modulus: BigUint,
    pub exponent: u64,
    pub multiplier: u64,
    pub block_bytes: usize,
    pub rounds: RangeInclusive<usize>,
}

impl Default for CipherParams {
    fn default() -> Self {
        CipherParams {
            modulus: BigUint::from_bytes_be(&MODULUS_BYTES),
            exponent: EXPONENT,
            multiplier: MULTIPLIER,
            block_bytes: BLOCK_BYTES,
            rounds: ROUNDS,
        }
    }
}

impl CipherParams {
    /// Reject parameter sets under which the network is not a bijection.
    ///
    /// Primality of the modulus is assumed, not checked.
    pub fn validate(&self) -> Result<()> {
        if self.modulus < BigUint::from(2u32) {
            return Err(CipherError::InvalidParams("modulus must be at least 2"));
        }
        let scale = BigUint::from(self.exponent) * BigUint::from(self.multiplier);
        if (scale % &self.modulus).is_zero() {
            return Err(CipherError::InvalidParams(
                "exponent * multiplier vanishes modulo the modulus",
            ));
        }
        if self.rounds.is_empty() || *self.rounds.start() == 0 {
            return Err(CipherError::InvalidParams("round range must be non-empty and start at 1 or above"));
        }
        // Ciphertexts range up to P², so the block must hold two field elements.
        if (self.block_bytes as u64) * 8 < 2 * self.modulus.bits() {
            return Err(CipherError::InvalidParams("block cannot hold a ciphertext below P^2"));
        }
        Ok(())
    }

    /// Largest plaintext length whose integers all stay below P².
    ///
    /// Above P² the high chunk is no longer a field element and the first
    /// reduction that touches it loses information.
    pub fn max_plaintext_bytes(&self) -> usize {
        let bits = self.modulus.bits().saturating_sub(1);
        let bytes = (2 * bits / 8) as usize;
        bytes.min(self.block_bytes)
    }

    /// Widest ciphertext accepted for decryption.
    pub fn max_ciphertext_bits(&self) -> u64 {
        self.block_bytes as u64 * 8
    }

    /// Check an encryptor's round count against the deployment range.
    pub fn check_rounds(&self, rounds: usize) -> Result<()> {
        if self.rounds.contains(&rounds) {
            Ok(())
        } else {
            Err(CipherError::InvalidRoundCount {
                rounds,
                min: *self.rounds.start(),
                max: *self.rounds.end(),
            })
        }
    }
}
