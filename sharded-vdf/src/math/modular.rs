// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Arbitrary-precision modular arithmetic used by the evaluators and the verifier.

use crate::error::{VdfError, VdfResult};
use crate::math::extended_gcd::extended_euclidean_algorithm;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Pow, Zero};

/// Compute `base^exponent mod modulus`. The modulus must be non-zero.
pub fn pow_mod(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exponent, modulus)
}

/// Compute `2^exponent mod modulus`. The modulus must be non-zero.
pub fn pow2_mod(exponent: u64, modulus: &BigUint) -> BigUint {
    BigUint::from(2u8).modpow(&BigUint::from(exponent), modulus)
}

/// Compute `2^exponent` without any reduction.
pub fn pow2(exponent: u64) -> BigUint {
    BigUint::one() << exponent
}

/// Compute `base^exponent` without any reduction. The size of the result grows linearly in the
/// exponent, so this is only feasible for small exponents.
pub fn pow_unreduced(base: &BigUint, exponent: &BigUint) -> BigUint {
    Pow::pow(base, exponent)
}

/// Compute `a * b mod modulus`. The modulus must be non-zero.
pub fn mul_mod(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    (a * b).mod_floor(modulus)
}

/// Compute the inverse of `a` modulo `modulus`. Returns [VdfError::NoInverseExists] if `a` and
/// `modulus` are not coprime.
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> VdfResult<BigUint> {
    if modulus.is_zero() {
        return Err(VdfError::NoInverseExists);
    }
    let a = BigInt::from_biguint(Sign::Plus, a.clone());
    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let output = extended_euclidean_algorithm(&a, &m);
    if !output.gcd.is_one() {
        return Err(VdfError::NoInverseExists);
    }
    output
        .x
        .mod_floor(&m)
        .to_biguint()
        .ok_or(VdfError::NoInverseExists)
}

/// Compute `a mod modulus` for a signed `a`, returning the non-negative representative.
pub fn reduce_signed(a: &BigInt, modulus: &BigUint) -> BigUint {
    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    a.mod_floor(&m)
        .to_biguint()
        .expect("mod_floor with a positive modulus is non-negative")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow() {
        let p = BigUint::from(101u32);
        assert_eq!(pow2_mod(16, &p), BigUint::from(88u32));
        assert_eq!(pow2_mod(0, &p), BigUint::one());
        assert_eq!(pow2(16), BigUint::from(65536u32));
        assert_eq!(
            pow_mod(&BigUint::from(2u32), &BigUint::from(16u32), &p),
            pow2_mod(16, &p)
        );
        assert_eq!(
            pow_unreduced(&BigUint::from(3u32), &BigUint::from(40u32)),
            BigUint::from(3u64.pow(40))
        );
        assert_eq!(
            pow_unreduced(&BigUint::from(7u32), &BigUint::zero()),
            BigUint::one()
        );
    }

    #[test]
    fn test_mul_mod() {
        let p = BigUint::from(101u32);
        assert_eq!(
            mul_mod(&BigUint::from(88u32), &BigUint::from(37u32), &p),
            BigUint::from(24u32)
        );
        assert!(mul_mod(&BigUint::from(4u32), &BigUint::from(3u32), &BigUint::from(2u32)).is_zero());
    }

    #[test]
    fn test_mod_inverse() {
        let p = BigUint::from(101u32);
        assert_eq!(
            mod_inverse(&BigUint::from(3u32), &p).unwrap(),
            BigUint::from(34u32)
        );
        for a in 1..101u32 {
            let inverse = mod_inverse(&BigUint::from(a), &p).unwrap();
            assert!(mul_mod(&inverse, &BigUint::from(a), &p).is_one());
        }

        assert_eq!(
            mod_inverse(&BigUint::from(6u32), &BigUint::from(9u32)),
            Err(VdfError::NoInverseExists)
        );
        assert_eq!(
            mod_inverse(&BigUint::zero(), &p),
            Err(VdfError::NoInverseExists)
        );
    }

    #[test]
    fn test_reduce_signed() {
        let p = BigUint::from(101u32);
        assert_eq!(reduce_signed(&BigInt::from(-65448), &p), BigUint::zero());
        assert_eq!(reduce_signed(&BigInt::from(-1), &p), BigUint::from(100u32));
        assert_eq!(reduce_signed(&BigInt::from(205), &p), BigUint::from(3u32));
    }
}
