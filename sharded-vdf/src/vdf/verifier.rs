// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{VdfError, VdfResult};
use crate::hash::hash_to_group;
use crate::math::hash_prime::hash_prime_default;
use crate::math::modular::{mul_mod, pow2_mod, pow_mod};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Verify an output and proof for the given input and number of iterations in the group defined
/// by `modulus`.
///
/// The group element `g = HashToGroup(input)`, the challenge `l = HPrime(g, output)` and
/// `r = 2^iterations mod l` are all recomputed here, and the proof is accepted iff
/// `proof^l = g^r * output mod modulus`. For zero iterations the only valid pair is `(g, 1)`.
///
/// Returns `Ok(false)` if the proof is invalid. Fails with [VdfError::InvalidParameters] if the
/// modulus is zero, or with [VdfError::PrimeSearchExhausted] if the challenge cannot be derived.
pub fn verify(
    modulus: &BigUint,
    input: &BigUint,
    output: &BigUint,
    proof: &BigUint,
    iterations: u64,
) -> VdfResult<bool> {
    if modulus.is_zero() {
        return Err(VdfError::InvalidParameters(
            "the modulus must be positive".to_string(),
        ));
    }
    let g = hash_to_group(input);
    if iterations == 0 {
        return Ok(output == &g && proof.is_one());
    }

    let l = hash_prime_default(&g, output)?;
    let r = pow2_mod(iterations, &l);

    let lhs = pow_mod(proof, &l, modulus);
    let rhs = mul_mod(&pow_mod(&g, &r, modulus), output, modulus);
    Ok(lhs == rhs)
}
