//! LWE/GSW parameter definitions.
//!
//! Defaults are toy-sized and correctness-oriented; they are not hardened
//! against lattice attacks. Callers choosing their own parameters should run
//! a lattice estimator.

use num_bigint::BigInt;
use num_traits::One;

use crate::error::{Error, Result};

/// Default secret dimension.
pub const DEFAULT_N: usize = 4;
/// Default modulus is `2^DEFAULT_Q_BITS`.
pub const DEFAULT_Q_BITS: usize = 30;
/// Default noise magnitude bound.
pub const DEFAULT_NOISE_BOUND: u64 = 6;

/// LWE/GSW instance parameters.
///
/// Noise budget: the worst-case fresh noise is `m * noise_bound`, and one
/// gadget product multiplies noise by at most `N + 1`. Decryption is correct
/// while the accumulated noise stays below `2^(l-2)`, so the defaults
/// (`(N+1)^2 * m * noise_bound < 2^28`) guarantee two chained multiplicative
/// levels in the worst case; random sign cancellation carries typical
/// circuits noticeably deeper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// LWE secret dimension n.
    pub n: usize,
    /// Number of LWE samples in the public key (columns of A).
    pub m: usize,
    /// Ciphertext modulus q.
    pub q: BigInt,
    /// Bits to represent q: l = ceil(log2 q).
    pub ell: usize,
    /// N = (n+1) * l, the ciphertext side length.
    pub big_n: usize,
    /// Errors are drawn uniformly from `[-noise_bound, noise_bound]`.
    pub noise_bound: u64,
}

impl Params {
    /// Validate `(n, m, q)` and derive `l` and `N`.
    pub fn new(n: usize, m: usize, q: BigInt, noise_bound: u64) -> Result<Self> {
        if n < 1 {
            return Err(Error::InvalidParameters(format!(
                "secret dimension n must be at least 1, got {n}"
            )));
        }
        if m < 1 {
            return Err(Error::InvalidParameters(format!(
                "sample count m must be at least 1, got {m}"
            )));
        }
        if q < BigInt::from(2) {
            return Err(Error::InvalidParameters(format!(
                "modulus q must be at least 2, got {q}"
            )));
        }
        let ell = (&q - BigInt::one()).bits() as usize;
        let big_n = (n + 1) * ell;
        Ok(Params {
            n,
            m,
            q,
            ell,
            big_n,
            noise_bound,
        })
    }
}

impl Default for Params {
    /// n = 4, q = 2^30, m = n*l + 140, noise bound 6.
    fn default() -> Self {
        let n = DEFAULT_N;
        let ell = DEFAULT_Q_BITS;
        Params {
            n,
            m: n * ell + 140,
            q: BigInt::one() << DEFAULT_Q_BITS,
            ell,
            big_n: (n + 1) * ell,
            noise_bound: DEFAULT_NOISE_BOUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_derivation() {
        let p = Params::default();
        assert_eq!(p.n, 4);
        assert_eq!(p.ell, 30);
        assert_eq!(p.big_n, 150);
        assert_eq!(p.m, 260);
        assert_eq!(p.q, BigInt::one() << 30);
        // Default matches explicit construction
        assert_eq!(p, Params::new(4, 260, BigInt::one() << 30, 6).unwrap());
    }

    #[test]
    fn ell_for_non_power_of_two() {
        let p = Params::new(3, 10, BigInt::from(1000), 2).unwrap();
        assert_eq!(p.ell, 10); // ceil(log2 1000)
        assert_eq!(p.big_n, 40);
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(matches!(
            Params::new(0, 10, BigInt::from(16), 1),
            Err(Error::InvalidParameters(_))
        ));
        assert!(matches!(
            Params::new(2, 0, BigInt::from(16), 1),
            Err(Error::InvalidParameters(_))
        ));
        assert!(matches!(
            Params::new(2, 10, BigInt::one(), 1),
            Err(Error::InvalidParameters(_))
        ));
    }
}
