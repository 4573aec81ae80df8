//! Bit-level Fully Homomorphic Encryption in the GSW style over LWE.
//!
//! This crate implements:
//! - LWE key generation over big-integer matrices mod q
//! - Single-bit encryption and decryption
//! - Homomorphic NOT, AND, OR, NAND and XOR gates
//!
//! A secret key is the row vector `s = (1 | t)`; the public key `A` satisfies
//! `s·A = e mod q` for a small error row `e`; a ciphertext for a bit mu is
//! `C = A·R + mu·G` for a binary mask `R` and the gadget matrix `G`.
//! Decryption recovers the bit while accumulated noise stays below
//! `2^(l-2)`, which the default parameters guarantee for circuits of two
//! multiplicative levels in the worst case.
//!
//! Parameters are toy-sized by default; this is a pedagogical scheme, not a
//! production cryptosystem. Pass a CSPRNG (for example `ChaCha20Rng`) for
//! anything beyond experimentation.
//!
//! # Example
//!
//! ```ignore
//! use bitfhe::{and, decrypt, encrypt, generate_key, Params};
//! use rand::thread_rng;
//!
//! let params = Params::default();
//! let mut rng = thread_rng();
//! let keys = generate_key(&mut rng, &params)?;
//!
//! let ct1 = encrypt(&mut rng, &keys.public_key, true)?;
//! let ct2 = encrypt(&mut rng, &keys.public_key, false)?;
//! let conj = and(&ct1, &ct2, &keys.public_key)?;
//! assert_eq!(decrypt(&conj, &keys.secret_key)?, false);
//! ```

pub mod error;
pub mod gadget;
pub mod gsw;
pub mod lwe;
pub mod matrix;
pub mod modular;
pub mod params;

pub use error::{Error, Result};
pub use gsw::{and, decrypt, encrypt, nand, not, or, xor, Ciphertext};
pub use lwe::{generate_key, KeyPair, PublicKey, SecretKey};
pub use matrix::Matrix;
pub use params::Params;
