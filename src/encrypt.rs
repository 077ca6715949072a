//! Forward network: plaintext integer → ciphertext integer.

use num_bigint::BigUint;
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::round_constants;
use crate::decrypt::{decrypt_int, recover_bytes};
use crate::encoding::bytes_to_int;
use crate::error::{CipherError, Result};
use crate::field::{addmod, merge, split, ChunkPair};
use crate::params::{CipherParams, SWAP_PERIOD};
use crate::round_fn::RoundFunction;
use crate::sampling::sample_rounds;

/// The secret round count.
///
/// Zeroized on drop. Does not implement `Debug` to keep it out of logs.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretRounds(usize);

impl SecretRounds {
    pub fn get(&self) -> usize {
        self.0
    }
}

/// One cipher instance: parameters, its round count and that count's constants.
#[derive(Clone)]
pub struct FeistelCipher {
    params: CipherParams,
    rounds: SecretRounds,
    constants: Vec<BigUint>,
}

impl FeistelCipher {
    /// Build an instance with a fixed round count from `params.rounds`.
    pub fn new(params: CipherParams, rounds: usize) -> Result<Self> {
        params.validate()?;
        params.check_rounds(rounds)?;
        let constants = round_constants(rounds, &params.modulus);
        Ok(FeistelCipher {
            params,
            rounds: SecretRounds(rounds),
            constants,
        })
    }

    /// Build an instance with a round count drawn from `params.rounds`.
    pub fn random<R: Rng>(rng: &mut R, params: CipherParams) -> Result<Self> {
        params.validate()?;
        let rounds = sample_rounds(rng, &params.rounds);
        Self::new(params, rounds)
    }

    pub fn params(&self) -> &CipherParams {
        &self.params
    }

    pub fn rounds(&self) -> usize {
        self.rounds.get()
    }

    pub fn constants(&self) -> &[BigUint] {
        &self.constants
    }

    /// Encrypt a byte string of at most `params.max_plaintext_bytes()` bytes.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<BigUint> {
        let max = self.params.max_plaintext_bytes();
        if plaintext.len() > max {
            return Err(CipherError::PlaintextTooLong { len: plaintext.len(), max });
        }
        self.encrypt_int(&bytes_to_int(plaintext))
    }

    /// Encrypt an integer below P².
    pub fn encrypt_int(&self, x: &BigUint) -> Result<BigUint> {
        let p = &self.params.modulus;
        if x >= &(p * p) {
            let max = self.params.max_plaintext_bytes();
            return Err(CipherError::PlaintextTooLong { len: x.bits().div_ceil(8) as usize, max });
        }
        let pair = encrypt_pair(split(x, p), &self.constants, &self.params)?;
        Ok(merge(&pair, p))
    }

    /// Decrypt with this instance's own round count.
    ///
    /// Leading zero bytes of the plaintext do not survive the round trip.
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<Vec<u8>> {
        let x = decrypt_int(ciphertext, self.rounds(), &self.params)?;
        recover_bytes(&x, &self.params)
    }
}

/// One half-step: (x, y) → ((y + F_i(x) + c[i]) mod P, x).
pub fn transform(
    x: BigUint,
    y: &BigUint,
    i: usize,
    constant: &BigUint,
    params: &CipherParams,
) -> Result<(BigUint, BigUint)> {
    let p = &params.modulus;
    let f = RoundFunction::for_round(i).apply(&x, params)?;
    let v = addmod(&addmod(y, &f, p), constant, p);
    Ok((v, x))
}

/// Run `constants.len()` forward rounds over `pair`.
pub fn encrypt_pair(pair: ChunkPair, constants: &[BigUint], params: &CipherParams) -> Result<ChunkPair> {
    let ChunkPair { mut chunk1, mut chunk2 } = pair;
    for (i, c) in constants.iter().enumerate() {
        if i % SWAP_PERIOD == 0 {
            let (v, u) = transform(chunk1, &chunk2, i, c, params)?;
            chunk1 = v;
            chunk2 = u;
        } else {
            let (v, u) = transform(chunk2, &chunk1, i, c, params)?;
            chunk2 = v;
            chunk1 = u;
        }
    }
    Ok(ChunkPair { chunk1, chunk2 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::ciphertext_to_hex;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_known_ciphertext() {
        let cipher = FeistelCipher::new(CipherParams::default(), 26).unwrap();
        let ct = cipher.encrypt(b"CTF{test}").unwrap();
        assert_eq!(
            ciphertext_to_hex(&ct),
            "0xb1e119ca749695cb6ed8d40c5926e106b886e77de4c89f07382aa3a5e6bb61d2\
             84e6bb36e02f89291ff81e3611232f858b2db1af4fb7258fad2b840724e1aca4"
        );
    }

    #[test]
    fn test_deterministic() {
        let cipher = FeistelCipher::new(CipherParams::default(), 40).unwrap();
        let a = cipher.encrypt(b"same input").unwrap();
        let b = cipher.encrypt(b"same input").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_round_count_changes_output() {
        let params = CipherParams::default();
        let a = FeistelCipher::new(params.clone(), 30).unwrap().encrypt(b"x").unwrap();
        let b = FeistelCipher::new(params, 31).unwrap().encrypt(b"x").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_transform_swaps() {
        let params = CipherParams::default();
        let x = BigUint::from(5u32);
        let y = BigUint::from(9u32);
        let c = BigUint::from(494u32);
        let (v, u) = transform(x.clone(), &y, 0, &c, &params).unwrap();
        assert_eq!(u, x);
        let expected = (&y + BigUint::from(5 * 3 * 0x5DEECE66Du64) + &c) % &params.modulus;
        assert_eq!(v, expected);
    }

    #[test]
    fn test_output_below_p_squared() {
        let params = CipherParams::default();
        let p2 = &params.modulus * &params.modulus;
        let cipher = FeistelCipher::new(params, 53).unwrap();
        let ct = cipher.encrypt(&[0xFF; 63]).unwrap();
        assert!(ct < p2);
    }

    #[test]
    fn test_rejects_out_of_range_rounds() {
        let params = CipherParams::default();
        assert!(matches!(
            FeistelCipher::new(params.clone(), 0),
            Err(CipherError::InvalidRoundCount { rounds: 0, .. })
        ));
        assert!(FeistelCipher::new(params, 54).is_err());
    }

    #[test]
    fn test_rejects_long_plaintext() {
        let cipher = FeistelCipher::new(CipherParams::default(), 26).unwrap();
        assert_eq!(
            cipher.encrypt(&[0x41; 64]),
            Err(CipherError::PlaintextTooLong { len: 64, max: 63 })
        );
    }

    #[test]
    fn test_rejects_integer_at_p_squared() {
        let params = CipherParams::default();
        let p2 = &params.modulus * &params.modulus;
        let cipher = FeistelCipher::new(params, 26).unwrap();
        assert!(matches!(cipher.encrypt_int(&p2), Err(CipherError::PlaintextTooLong { .. })));
        assert!(cipher.encrypt_int(&(p2 - 1u32)).is_ok());
    }

    #[test]
    fn test_random_instance_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let cipher = FeistelCipher::random(&mut rng, CipherParams::default()).unwrap();
        assert!((26..=53).contains(&cipher.rounds()));
        assert_eq!(cipher.constants().len(), cipher.rounds());
    }
}
