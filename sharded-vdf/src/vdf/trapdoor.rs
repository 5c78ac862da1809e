// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Evaluation of the VDF by a holder of the trapdoor, the secret order of the group. Knowing the
//! order, `2^T` can be reduced before exponentiating, so the evaluation takes `O(log T)` work
//! instead of `T` sequential squarings.

use crate::error::{VdfError, VdfResult};
use crate::hash::hash_to_group;
use crate::math::hash_prime::hash_prime_default;
use crate::math::modular::{mod_inverse, mul_mod, pow2_mod, pow_unreduced, reduce_signed};
use crate::params::ParameterSet;
use crate::vdf::{Evaluation, VDF};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use std::time::Instant;
use tracing::{info, warn};

/// The trapdoor evaluator. The secret must never be given to a verifier.
pub struct TrapdoorVDF<'a> {
    parameters: &'a ParameterSet,
    secret: BigUint,
}

impl<'a> TrapdoorVDF<'a> {
    /// Create a new trapdoor evaluator for the given parameters and secret group order.
    pub fn new(parameters: &'a ParameterSet, secret: BigUint) -> VdfResult<Self> {
        validate_secret(&secret)?;
        Ok(Self { parameters, secret })
    }

    /// Evaluate the VDF on `input` and return the output, the proof and the time it took.
    pub fn evaluate_timed(&self, input: &BigUint) -> VdfResult<Evaluation> {
        evaluate(input, self.parameters.iterations(), &self.secret)
    }
}

impl VDF for TrapdoorVDF<'_> {
    type InputType = BigUint;
    type OutputType = BigUint;
    type ProofType = BigUint;

    fn evaluate(&self, input: &BigUint) -> VdfResult<(BigUint, BigUint)> {
        self.evaluate_timed(input)
            .map(|evaluation| (evaluation.output, evaluation.proof))
    }

    fn verify(&self, input: &BigUint, output: &BigUint, proof: &BigUint) -> VdfResult<bool> {
        self.parameters.verify(input, output, proof)
    }
}

fn validate_secret(secret: &BigUint) -> VdfResult<()> {
    if secret.is_zero() {
        return Err(VdfError::InvalidParameters(
            "the trapdoor secret must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Evaluate the VDF on `input` with `iterations` iterations using the secret group order.
///
/// With `g = HashToGroup(input)` and `e = 2^iterations mod secret`, the output is `y = g^e` and the
/// proof is `g^q` where `q = (e - r) / l mod secret` for the challenge `l = HPrime(g, y)` and
/// `r = 2^iterations mod l`. Neither `y` nor the proof is reduced.
///
/// Fails with [VdfError::NoInverseExists] if `l` is not invertible modulo the secret.
pub fn evaluate(input: &BigUint, iterations: u64, secret: &BigUint) -> VdfResult<Evaluation> {
    validate_secret(secret)?;
    let start = Instant::now();

    let g = hash_to_group(input);
    if iterations == 0 {
        return Ok(Evaluation {
            output: g,
            proof: BigUint::one(),
            elapsed: start.elapsed(),
        });
    }

    let e = pow2_mod(iterations, secret);
    let output = pow_unreduced(&g, &e);

    let l = hash_prime_default(&g, &output)?;
    let r = pow2_mod(iterations, &l);
    let l_inverse = mod_inverse(&l, secret).map_err(|error| {
        warn!("The challenge {} has no inverse modulo the secret", l);
        error
    })?;

    let difference = BigInt::from(e) - BigInt::from(r);
    let q = mul_mod(&reduce_signed(&difference, secret), &l_inverse, secret);
    let proof = pow_unreduced(&g, &q);

    let elapsed = start.elapsed();
    info!(iterations, ?elapsed, "Trapdoor evaluation finished");

    Ok(Evaluation {
        output,
        proof,
        elapsed,
    })
}
