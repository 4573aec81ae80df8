//! The gadget matrix G and the inverse-gadget operator G^{-1}.
//!
//! G is the `(n+1) x N` matrix whose row i carries the powers
//! `1, 2, ..., 2^{l-1}` in columns `[i*l, (i+1)*l)` and zeros elsewhere, with
//! `N = (n+1)*l`. For any matrix C with entries in `[0, 2^l)`,
//! `G * G^{-1}(C) = C` over Z_q.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::params::Params;

/// The gadget matrix for the given parameters, shape `(n+1) x N`.
///
/// Depends only on n and q; all powers are below q, so no reduction is
/// needed.
pub fn gadget_matrix(params: &Params) -> Matrix {
    let ell = params.ell;
    Matrix::from_fn(params.n + 1, params.big_n, |i, j| {
        if j / ell == i {
            BigInt::one() << (j % ell)
        } else {
            BigInt::zero()
        }
    })
}

/// Bit-decompose every entry of `c`: an `(n+1) x k` input becomes `N x k`,
/// column j holding the concatenated lsb-first decompositions of column j of
/// `c`.
pub fn g_inverse(c: &Matrix, params: &Params) -> Result<Matrix> {
    let ell = params.ell;
    if c.rows() != params.n + 1 {
        return Err(Error::shape("g_inverse", c.shape(), (params.n + 1, c.cols())));
    }
    Ok(Matrix::from_fn(params.big_n, c.cols(), |r, j| {
        (c.get(r / ell, j) >> (r % ell)) & BigInt::one()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn params() -> Params {
        Params::new(2, 10, BigInt::from(1u64 << 8), 1).unwrap()
    }

    #[test]
    fn gadget_layout() {
        let p = params();
        let g = gadget_matrix(&p);
        assert_eq!(g.shape(), (3, 24));
        assert_eq!(*g.get(0, 0), BigInt::from(1));
        assert_eq!(*g.get(0, 7), BigInt::from(128));
        assert_eq!(*g.get(1, 8), BigInt::from(1));
        assert_eq!(*g.get(2, 23), BigInt::from(128));
        assert_eq!(*g.get(0, 8), BigInt::zero());
        assert_eq!(*g.get(2, 7), BigInt::zero());
    }

    #[test]
    fn inverse_gadget_is_binary() {
        let p = params();
        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let c = Matrix::random(p.n + 1, 5, &mut rng, &p.q);
        let decomposed = g_inverse(&c, &p).unwrap();
        assert_eq!(decomposed.shape(), (p.big_n, 5));
        for i in 0..decomposed.rows() {
            for x in decomposed.row(i) {
                assert!(*x == BigInt::zero() || *x == BigInt::one());
            }
        }
    }

    #[test]
    fn gadget_identity() {
        let p = params();
        let g = gadget_matrix(&p);
        let mut rng = ChaCha20Rng::seed_from_u64(33);
        let c = Matrix::random(p.n + 1, 7, &mut rng, &p.q);
        let reconstructed = g.multiply(&g_inverse(&c, &p).unwrap(), &p.q).unwrap();
        assert_eq!(reconstructed, c);
    }

    #[test]
    fn inverse_gadget_rejects_wrong_height() {
        let p = params();
        let c = Matrix::zeros(p.n + 2, 4);
        assert!(matches!(
            g_inverse(&c, &p),
            Err(Error::MalformedMatrix { op: "g_inverse", .. })
        ));
    }

    #[test]
    fn decompose_matches_gadget_block() {
        // A column of G^{-1} restricted to one block is Matrix::decompose.
        let p = params();
        let x = BigInt::from(173);
        let c = Matrix::from_fn(p.n + 1, 1, |i, _| {
            if i == 0 {
                x.clone()
            } else {
                BigInt::zero()
            }
        });
        let decomposed = g_inverse(&c, &p).unwrap();
        let bits = Matrix::decompose(&x, p.ell);
        for i in 0..p.ell {
            assert_eq!(decomposed.get(i, 0), bits.get(i, 0));
        }
    }
}
