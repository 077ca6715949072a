//! Ciphertext text form: `0x`-prefixed lowercase hex, no padding.
//!
//! The artifact written by [`write_ciphertext`] is `out.txt` holding that text.

use std::fs;
use std::path::{Path, PathBuf};

use num_bigint::BigUint;

use crate::error::{CipherError, Result};
use crate::params::CipherParams;

/// File name of the ciphertext artifact.
pub const CIPHERTEXT_FILE: &str = "out.txt";

/// Hex text of a ciphertext, e.g. `0x1f`.
pub fn ciphertext_to_hex(ct: &BigUint) -> String {
    format!("{:#x}", ct)
}

/// Parse hex text, with or without `0x`, rejecting values wider than the block.
pub fn ciphertext_from_hex(text: &str, params: &CipherParams) -> Result<BigUint> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CipherError::InvalidCiphertextText);
    }
    let ct = BigUint::parse_bytes(digits.as_bytes(), 16).ok_or(CipherError::InvalidCiphertextText)?;
    let max = params.max_ciphertext_bits();
    if ct.bits() > max {
        return Err(CipherError::CiphertextTooWide { bits: ct.bits(), max });
    }
    Ok(ct)
}

/// Write the hex text to `dir/out.txt` and return that path.
pub fn write_ciphertext(dir: &Path, ct: &BigUint) -> Result<PathBuf> {
    let path = dir.join(CIPHERTEXT_FILE);
    fs::write(&path, ciphertext_to_hex(ct))?;
    Ok(path)
}

/// Read and parse a ciphertext artifact.
pub fn read_ciphertext(path: &Path, params: &CipherParams) -> Result<BigUint> {
    let text = fs::read_to_string(path)?;
    ciphertext_from_hex(&text, params)
}
