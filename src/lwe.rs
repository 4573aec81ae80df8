//! LWE (Learning With Errors) key generation.

use log::debug;
use num_bigint::{BigInt, RandBigInt};
use num_traits::One;
use rand::Rng;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::modular::reduce;
use crate::params::Params;

/// Secret key: the row vector `s = (1, t_1, ..., t_n)` in Z_q^{1 x (n+1)}.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretKey {
    pub(crate) s: Matrix,
    params: Params,
}

impl SecretKey {
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The full secret row vector.
    pub fn vector(&self) -> &Matrix {
        &self.s
    }
}

/// Public key: `A = [a; B]` in Z_q^{(n+1) x m}, built so that `s·A = e` is
/// small over Z_q.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) a: Matrix,
    params: Params,
}

impl PublicKey {
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The public matrix A.
    pub fn matrix(&self) -> &Matrix {
        &self.a
    }
}

/// A freshly generated key pair.
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub public_key: PublicKey,
    pub secret_key: SecretKey,
}

/// Draw a noise term uniformly from `[-bound, bound]`, stored in `[0, q)`.
fn sample_noise<R: Rng>(rng: &mut R, bound: u64, q: &BigInt) -> BigInt {
    let b = BigInt::from(bound);
    let lo = -&b;
    let hi = &b + BigInt::one();
    reduce(&rng.gen_bigint_range(&lo, &hi), q)
}

/// Generate an LWE key pair.
///
/// Draws `t` uniform in Z_q^n and sets `s = (1 | t)`; draws `B` uniform in
/// Z_q^{n x m} and a noise row `e` with entries in
/// `[-noise_bound, noise_bound]`; publishes `A = [a; B]` with
/// `a = e - t·B`, so `s·A = a + t·B = e mod q`.
///
/// The output is a pure function of the randomness consumed, in the order
/// `t`, `B`, `e`.
pub fn generate_key<R: Rng>(rng: &mut R, params: &Params) -> Result<KeyPair> {
    let q = &params.q;
    let (n, m) = (params.n, params.m);

    let t = Matrix::random(1, n, rng, q);
    let mut s_row = vec![BigInt::one()];
    s_row.extend_from_slice(t.row(0));
    let s = Matrix::from_rows(vec![s_row])?;

    let b = Matrix::random(n, m, rng, q);
    let e = Matrix::from_fn(1, m, |_, _| sample_noise(rng, params.noise_bound, q));

    let a_row = e.subtract(&t.multiply(&b, q)?, q)?;
    let mut a = a_row;
    for i in 0..n {
        a = a.add_row(b.row(i))?;
    }

    debug!(
        "generated key pair: n={n}, m={m}, l={}, N={}",
        params.ell, params.big_n
    );

    Ok(KeyPair {
        public_key: PublicKey {
            a,
            params: params.clone(),
        },
        secret_key: SecretKey {
            s,
            params: params.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modular::centered;
    use num_traits::{Signed, Zero};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn secret_key_layout() {
        let params = Params::default();
        let mut rng = ChaCha20Rng::seed_from_u64(17);
        let keys = generate_key(&mut rng, &params).unwrap();
        let s = keys.secret_key.vector();
        assert_eq!(s.shape(), (1, params.n + 1));
        assert_eq!(*s.get(0, 0), BigInt::one());
    }

    #[test]
    fn public_key_shape() {
        let params = Params::default();
        let mut rng = ChaCha20Rng::seed_from_u64(17);
        let keys = generate_key(&mut rng, &params).unwrap();
        assert_eq!(keys.public_key.matrix().shape(), (params.n + 1, params.m));
    }

    #[test]
    fn secret_times_public_is_small() {
        let params = Params::default();
        let mut rng = ChaCha20Rng::seed_from_u64(23);
        let keys = generate_key(&mut rng, &params).unwrap();

        let e = keys
            .secret_key
            .vector()
            .multiply(keys.public_key.matrix(), &params.q)
            .unwrap();
        let bound = BigInt::from(params.noise_bound);
        for x in e.row(0) {
            assert!(centered(x, &params.q).abs() <= bound, "noise term {x} too large");
        }
    }

    #[test]
    fn noise_sampler_stays_in_bound() {
        let q = BigInt::from(1u64 << 20);
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let mut seen_negative = false;
        for _ in 0..200 {
            let e = sample_noise(&mut rng, 6, &q);
            let c = centered(&e, &q);
            assert!(c.abs() <= BigInt::from(6u64));
            if c < BigInt::zero() {
                seen_negative = true;
            }
        }
        assert!(seen_negative, "sampler never produced a negative error");
    }

    #[test]
    fn independent_key_pairs_differ() {
        let params = Params::default();
        let mut rng = ChaCha20Rng::seed_from_u64(29);
        let kp1 = generate_key(&mut rng, &params).unwrap();
        let kp2 = generate_key(&mut rng, &params).unwrap();
        assert_ne!(kp1.public_key.matrix(), kp2.public_key.matrix());
        assert_ne!(kp1.secret_key.vector(), kp2.secret_key.vector());
    }
}
