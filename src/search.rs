//! Round-count recovery.
//!
//! Every candidate is independent, so candidates are decrypted in parallel.
//! `find_map_first` keeps the ascending-scan result: the lowest candidate
//! that settles wins, and higher candidates stop being evaluated once it
//! is known.
//!
//! A candidate settles when it either decodes to printable text or fails
//! with an error other than a width overflow. Overflow and non-printable
//! output are the expected outcome of a wrong count and are skipped.

use std::ops::RangeInclusive;

use num_bigint::BigUint;
use rayon::prelude::*;

use crate::decrypt::{decrypt_int, recover_bytes};
use crate::encoding::is_printable;
use crate::error::{CipherError, Result};
use crate::params::CipherParams;

/// A successful recovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recovered {
    pub rounds: usize,
    pub plaintext: String,
}

/// Try one round count. `Ok(None)` means the candidate was rejected.
pub fn try_rounds(ciphertext: &BigUint, rounds: usize, params: &CipherParams) -> Result<Option<Recovered>> {
    let x = decrypt_int(ciphertext, rounds, params)?;
    let bytes = match recover_bytes(&x, params) {
        Ok(bytes) => bytes,
        Err(CipherError::EncodingOverflow { .. }) => return Ok(None),
        Err(e) => return Err(e),
    };
    match validate_text(bytes) {
        Ok(plaintext) => Ok(Some(Recovered { rounds, plaintext })),
        Err(CipherError::NonPrintableResult) => Ok(None),
        Err(e) => Err(e),
    }
}

fn validate_text(bytes: Vec<u8>) -> Result<String> {
    if !is_printable(&bytes) {
        return Err(CipherError::NonPrintableResult);
    }
    String::from_utf8(bytes).map_err(|_| CipherError::NonPrintableResult)
}

fn check_candidates(candidates: &RangeInclusive<usize>, params: &CipherParams) -> Result<()> {
    params.validate()?;
    if candidates.is_empty() || *candidates.start() == 0 {
        return Err(CipherError::InvalidRoundCount {
            rounds: *candidates.start(),
            min: 1,
            max: *candidates.end(),
        });
    }
    Ok(())
}

/// Recover the round count and plaintext, evaluating candidates in parallel.
///
/// Returns the lowest accepting count, same as [`search_sequential`].
pub fn search(
    ciphertext: &BigUint,
    candidates: RangeInclusive<usize>,
    params: &CipherParams,
) -> Result<Recovered> {
    check_candidates(&candidates, params)?;
    let (start, end) = (*candidates.start(), *candidates.end());
    let outcome = candidates
        .into_par_iter()
        .map(|rounds| try_rounds(ciphertext, rounds, params))
        .find_map_first(|res| match res {
            Ok(None) => None,
            settled => Some(settled),
        });
    match outcome {
        Some(Ok(Some(found))) => Ok(found),
        Some(Err(e)) => Err(e),
        _ => Err(CipherError::SearchExhausted { start, end }),
    }
}

/// Ascending single-threaded scan.
pub fn search_sequential(
    ciphertext: &BigUint,
    candidates: RangeInclusive<usize>,
    params: &CipherParams,
) -> Result<Recovered> {
    check_candidates(&candidates, params)?;
    let (start, end) = (*candidates.start(), *candidates.end());
    for rounds in candidates {
        if let Some(found) = try_rounds(ciphertext, rounds, params)? {
            return Ok(found);
        }
    }
    Err(CipherError::SearchExhausted { start, end })
}
