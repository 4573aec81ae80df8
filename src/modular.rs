//! Modular arithmetic utilities for Z_q.

use num_bigint::BigInt;
use num_integer::Integer;

/// Reduce a value to the representative in `[0, q)`.
///
/// Mathematical (floored) modulus, so negative inputs land in range too.
#[inline]
pub fn reduce(val: &BigInt, q: &BigInt) -> BigInt {
    val.mod_floor(q)
}

/// Reduce a value to the centred representative in `(-q/2, q/2]`.
///
/// Storage keeps entries in `[0, q)`; decryption reads coefficients in the
/// centred range. The two conventions meet only here.
#[inline]
pub fn centered(val: &BigInt, q: &BigInt) -> BigInt {
    let r = val.mod_floor(q);
    if &r + &r > *q {
        r - q
    } else {
        r
    }
}
