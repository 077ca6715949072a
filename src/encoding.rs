//! Byte strings ↔ big integers, fixed-width big-endian.

use num_bigint::BigUint;

use crate::error::{CipherError, Result};

/// Interpret bytes as a big-endian integer. Leading zero bytes are lost.
pub fn bytes_to_int(data: &[u8]) -> BigUint {
    BigUint::from_bytes_be(data)
}

/// Encode x big-endian, left-padded with zeros to exactly `width` bytes.
pub fn int_to_fixed_bytes(x: &BigUint, width: usize) -> Result<Vec<u8>> {
    let bits = x.bits();
    if bits > width as u64 * 8 {
        return Err(CipherError::EncodingOverflow { bits, width });
    }
    let mut out = vec![0u8; width];
    if bits > 0 {
        let be = x.to_bytes_be();
        out[width - be.len()..].copy_from_slice(&be);
    }
    Ok(out)
}

/// Drop leading zero bytes.
pub fn strip_padding(data: &[u8]) -> &[u8] {
    let start = data.iter().position(|&b| b != 0).unwrap_or(data.len());
    &data[start..]
}

/// True when every byte is printable ASCII (space through tilde).
pub fn is_printable(data: &[u8]) -> bool {
    data.iter().all(|b| (0x20..=0x7E).contains(b))
}
