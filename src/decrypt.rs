//! Inverse network.
//!
//! Each forward half-step leaves its F argument untouched in the other
//! slot, so undoing a round reads that argument back, recomputes F and
//! subtracts. Neither round function is ever inverted. Rounds are undone
//! from R-1 down to 0 because constants and F depend on the index.

use num_bigint::BigUint;

use crate::constants::round_constants;
use crate::encoding::{int_to_fixed_bytes, strip_padding};
use crate::error::{CipherError, Result};
use crate::field::{addmod, merge, split, submod, ChunkPair};
use crate::params::{CipherParams, SWAP_PERIOD};
use crate::round_fn::RoundFunction;

/// Undo `constants.len()` rounds of [`crate::encrypt::encrypt_pair`].
pub fn decrypt_pair(pair: ChunkPair, constants: &[BigUint], params: &CipherParams) -> Result<ChunkPair> {
    let p = &params.modulus;
    let ChunkPair { mut chunk1, mut chunk2 } = pair;
    for (i, c) in constants.iter().enumerate().rev() {
        let f = RoundFunction::for_round(i);
        if i % SWAP_PERIOD == 0 {
            let old_c1 = chunk2;
            let mask = addmod(&f.apply(&old_c1, params)?, c, p);
            chunk2 = submod(&chunk1, &mask, p);
            chunk1 = old_c1;
        } else {
            let old_c2 = chunk1;
            let mask = addmod(&f.apply(&old_c2, params)?, c, p);
            chunk1 = submod(&chunk2, &mask, p);
            chunk2 = old_c2;
        }
    }
    Ok(ChunkPair { chunk1, chunk2 })
}

/// Decrypt with a trial round count, recomputing that count's constants.
///
/// Any `rounds >= 1` is accepted; a wrong count yields garbage, not an error.
pub fn decrypt_int(ciphertext: &BigUint, rounds: usize, params: &CipherParams) -> Result<BigUint> {
    params.validate()?;
    if rounds == 0 {
        return Err(CipherError::InvalidRoundCount { rounds, min: 1, max: usize::MAX });
    }
    let max = params.max_ciphertext_bits();
    if ciphertext.bits() > max {
        return Err(CipherError::CiphertextTooWide { bits: ciphertext.bits(), max });
    }
    let p = &params.modulus;
    let constants = round_constants(rounds, p);
    let pair = decrypt_pair(split(ciphertext, p), &constants, params)?;
    Ok(merge(&pair, p))
}

/// Encode a recovered integer into the block and drop the zero padding.
pub fn recover_bytes(x: &BigUint, params: &CipherParams) -> Result<Vec<u8>> {
    let block = int_to_fixed_bytes(x, params.block_bytes)?;
    Ok(strip_padding(&block).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{bytes_to_int, is_printable};
    use crate::encrypt::{encrypt_pair, FeistelCipher};

    #[test]
    fn test_inverts_known_vector() {
        let params = CipherParams::default();
        let ct = BigUint::parse_bytes(
            b"b1e119ca749695cb6ed8d40c5926e106b886e77de4c89f07382aa3a5e6bb61d2\
              84e6bb36e02f89291ff81e3611232f858b2db1af4fb7258fad2b840724e1aca4",
            16,
        )
        .unwrap();
        let x = decrypt_int(&ct, 26, &params).unwrap();
        assert_eq!(recover_bytes(&x, &params).unwrap(), b"CTF{test}".to_vec());
    }

    #[test]
    fn test_neighbouring_round_counts_are_garbage() {
        let params = CipherParams::default();
        let cipher = FeistelCipher::new(params.clone(), 26).unwrap();
        let ct = cipher.encrypt(b"CTF{test}").unwrap();
        for wrong in [25, 27] {
            let x = decrypt_int(&ct, wrong, &params).unwrap();
            let bytes = recover_bytes(&x, &params).unwrap();
            assert_ne!(bytes, b"CTF{test}".to_vec());
            assert!(!is_printable(&bytes), "R={} decoded to printable text", wrong);
        }
    }

    #[test]
    fn test_pair_roundtrip_at_field_edge() {
        let params = CipherParams::default();
        let p = &params.modulus;
        let constants = round_constants(33, p);
        let pair = ChunkPair {
            chunk1: p - 1u32,
            chunk2: BigUint::from(12345u32),
        };
        let ct = encrypt_pair(pair.clone(), &constants, &params).unwrap();
        assert_ne!(ct, pair);
        assert_eq!(decrypt_pair(ct, &constants, &params).unwrap(), pair);
    }

    #[test]
    fn test_every_round_count_in_range_roundtrips() {
        let params = CipherParams::default();
        let x = bytes_to_int(b"snakeCTF{round_trip}");
        for r in params.rounds.clone() {
            let cipher = FeistelCipher::new(params.clone(), r).unwrap();
            let ct = cipher.encrypt_int(&x).unwrap();
            assert_eq!(decrypt_int(&ct, r, &params).unwrap(), x, "R={}", r);
        }
    }

    #[test]
    fn test_minimal_block_roundtrip() {
        let mut params = CipherParams::default();
        params.block_bytes = 64;
        let cipher = FeistelCipher::new(params.clone(), 26).unwrap();
        let ct = cipher.encrypt(b"CTF{test}").unwrap();
        assert!(ct.bits() <= params.max_ciphertext_bits());
        assert_eq!(cipher.decrypt(&ct).unwrap(), b"CTF{test}".to_vec());

        let max = bytes_to_int(&[0xFF; 63]);
        let ct = cipher.encrypt_int(&max).unwrap();
        assert_eq!(decrypt_int(&ct, 26, &params).unwrap(), max);
    }

    #[test]
    fn test_unvalidated_params_rejected() {
        let mut params = CipherParams::default();
        params.modulus = BigUint::from(0u32);
        assert!(matches!(
            decrypt_int(&BigUint::from(5u32), 26, &params),
            Err(CipherError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let params = CipherParams::default();
        assert!(matches!(
            decrypt_int(&BigUint::from(1u32), 0, &params),
            Err(CipherError::InvalidRoundCount { rounds: 0, .. })
        ));
    }

    #[test]
    fn test_oversized_ciphertext_rejected() {
        let params = CipherParams::default();
        let ct = BigUint::from(1u32) << 2048;
        assert_eq!(
            decrypt_int(&ct, 26, &params),
            Err(CipherError::CiphertextTooWide { bits: 2049, max: 2048 })
        );
    }
}
