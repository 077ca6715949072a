//! Feistel network over a prime field whose only secret is the round count.
//!
//! # ⚠️ WARNING: NOT A REAL CIPHER ⚠️
//!
//! The "key" is an integer drawn from a few dozen values and the round
//! constants are public. [`search`] recovers it in milliseconds. This crate
//! exists to study the construction and the recovery, nothing more.
//!
//! ```
//! use prime_feistel::params::CipherParams;
//! use prime_feistel::encrypt::FeistelCipher;
//! use prime_feistel::search::search;
//!
//! let params = CipherParams::default();
//! let cipher = FeistelCipher::new(params.clone(), 26).unwrap();
//! let ct = cipher.encrypt(b"CTF{test}").unwrap();
//!
//! let found = search(&ct, 26..=53, &params).unwrap();
//! assert_eq!(found.rounds, 26);
//! assert_eq!(found.plaintext, "CTF{test}");
//! ```

pub mod error;
pub mod params;
pub mod field;
pub mod constants;
pub mod round_fn;
pub mod encoding;
pub mod sampling;
pub mod encrypt;
pub mod decrypt;
pub mod search;
pub mod serialize;

pub use error::{CipherError, Result};
