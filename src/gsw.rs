//! GSW encryption, decryption, and the homomorphic gate algebra.

use log::trace;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use rand::Rng;

use crate::error::{Error, Result};
use crate::gadget::{g_inverse, gadget_matrix};
use crate::lwe::{PublicKey, SecretKey};
use crate::matrix::Matrix;
use crate::modular::centered;
use crate::params::Params;

/// GSW ciphertext: an `(n+1) x N` matrix over Z_q with
/// `s·C = mu·s·G + noise`.
pub type Ciphertext = Matrix;

fn check_ciphertext(op: &'static str, c: &Ciphertext, params: &Params) -> Result<()> {
    let expected = (params.n + 1, params.big_n);
    if c.shape() != expected {
        return Err(Error::shape(op, c.shape(), expected));
    }
    Ok(())
}

/// Encrypt a single bit: `C = A·R + mu·G` with `R` uniform in
/// `{0,1}^{m x N}`.
///
/// The fresh noise is `e·R`, bounded by `m * noise_bound`. The randomness in
/// `R` makes two encryptions of the same bit differ with overwhelming
/// probability.
pub fn encrypt<R: Rng>(rng: &mut R, pk: &PublicKey, bit: bool) -> Result<Ciphertext> {
    let params = pk.params();
    let q = &params.q;
    let expected = (params.n + 1, params.m);
    if pk.a.shape() != expected {
        return Err(Error::shape("encrypt", pk.a.shape(), expected));
    }

    let two = BigInt::from(2);
    let r = Matrix::random(params.m, params.big_n, rng, &two);
    trace!("encrypt: {}x{} masking product", params.m, params.big_n);
    let ar = pk.a.multiply(&r, q)?;
    if bit {
        ar.add(&gadget_matrix(params), q)
    } else {
        Ok(ar)
    }
}

/// Decrypt a ciphertext with the secret key.
///
/// Reads coefficient `l-1` of `s·C`, the top column of the gadget block
/// scaled by the constant 1 in `s`, so its signal term is `mu·2^{l-1}`. The
/// centred value is attributed to the nearer of 0 and `2^{l-1}`; correct
/// whenever the accumulated noise is below `2^{l-2}`.
pub fn decrypt(ct: &Ciphertext, sk: &SecretKey) -> Result<bool> {
    let params = sk.params();
    check_ciphertext("decrypt", ct, params)?;

    let u = sk.s.multiply(ct, &params.q)?;
    let v = centered(u.get(0, params.ell - 1), &params.q);
    let threshold = if params.ell >= 2 {
        BigInt::one() << (params.ell - 2)
    } else {
        BigInt::zero()
    };
    Ok(v.abs() > threshold)
}

/// Homomorphic NOT: `G - C`.
pub fn not(ct: &Ciphertext, pk: &PublicKey) -> Result<Ciphertext> {
    let params = pk.params();
    check_ciphertext("not", ct, params)?;
    gadget_matrix(params).subtract(ct, &params.q)
}

/// Homomorphic AND: `C1 · G^{-1}(C2)`.
///
/// `s·(C1·G^{-1}(C2)) = mu1·mu2·s·G + noise`, with the noise bounded by
/// `N·|noise1| + |noise2|` since `G^{-1}(C2)` is binary.
pub fn and(c1: &Ciphertext, c2: &Ciphertext, pk: &PublicKey) -> Result<Ciphertext> {
    let params = pk.params();
    check_ciphertext("and", c1, params)?;
    check_ciphertext("and", c2, params)?;
    c1.multiply(&g_inverse(c2, params)?, &params.q)
}

/// Homomorphic NAND: `G - C1 · G^{-1}(C2)`.
pub fn nand(c1: &Ciphertext, c2: &Ciphertext, pk: &PublicKey) -> Result<Ciphertext> {
    not(&and(c1, c2, pk)?, pk)
}

/// Homomorphic OR, by De Morgan: `NOT(AND(NOT C1, NOT C2))`.
pub fn or(c1: &Ciphertext, c2: &Ciphertext, pk: &PublicKey) -> Result<Ciphertext> {
    not(&and(&not(c1, pk)?, &not(c2, pk)?, pk)?, pk)
}

/// Homomorphic XOR: `(C1 + C2) - 2·(C1 · G^{-1}(C2))`.
pub fn xor(c1: &Ciphertext, c2: &Ciphertext, pk: &PublicKey) -> Result<Ciphertext> {
    let params = pk.params();
    let q = &params.q;
    let prod = and(c1, c2, pk)?;
    c1.add(c2, q)?
        .subtract(&prod.scalar_multiply(&BigInt::from(2), q), q)
}
