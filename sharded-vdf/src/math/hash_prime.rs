// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! This module contains the hash-to-prime function used to derive the Fiat-Shamir challenge from
//! a group element and a VDF output.

use crate::bigint_utils::to_canonical_bytes;
use crate::error::{VdfError, VdfResult};
use fastcrypto::hash::{HashFunction, Sha256};
use num_bigint::BigUint;
use num_integer::Integer;
use num_prime::nt_funcs::is_prime;
use num_prime::PrimalityTestConfig;
use tracing::{debug, warn};

/// Number of Miller-Rabin rounds used by [DefaultPrimalityCheck].
pub const PRIMALITY_ROUNDS: usize = 20;

/// Number of times the candidate is incremented before the search gives up.
pub const MAX_PRIME_SEARCH_ITERATIONS: usize = 100_000;

/// Implementation of a probabilistic primality test.
pub trait PrimalityCheck {
    /// Return true if `x` is probably a prime. If `false` is returned, `x` is guaranteed to be composite.
    fn is_prime(x: &BigUint) -> bool;
}

/// Implementation of the [PrimalityCheck] trait using [PRIMALITY_ROUNDS] Miller-Rabin rounds
/// followed by a strong Lucas test from `num_prime::nt_funcs::is_prime`.
pub struct DefaultPrimalityCheck {}

impl PrimalityCheck for DefaultPrimalityCheck {
    fn is_prime(x: &BigUint) -> bool {
        let mut config = PrimalityTestConfig::default();
        config.sprp_trials = PRIMALITY_ROUNDS;
        config.sprp_random_trials = 0;
        config.slprp_test = true;
        is_prime(x, Some(config)).probably()
    }
}

/// Hash `g` and `y` and find the smallest odd probable prime which is at least the digest read as
/// an integer. Fails with [VdfError::PrimeSearchExhausted] if no prime is found after
/// `max_iterations` increments.
///
/// This method returns both the prime and the number of increments needed to reach it.
///
/// See also [hash_prime].
pub fn hash_prime_with_index<P: PrimalityCheck>(
    g: &BigUint,
    y: &BigUint,
    max_iterations: usize,
) -> VdfResult<(usize, BigUint)> {
    let mut hash = Sha256::new();
    hash.update(to_canonical_bytes(g));
    hash.update(to_canonical_bytes(y));
    let mut candidate = BigUint::from_bytes_be(&hash.finalize().digest);

    if candidate.is_even() {
        candidate += 1u8;
    }

    for iteration in 0..=max_iterations {
        if P::is_prime(&candidate) {
            debug!("Prime candidate found after {} iterations", iteration);
            return Ok((iteration, candidate));
        }
        candidate += 2u8;
    }

    warn!(
        "Failed to find a prime number after {} iterations",
        max_iterations
    );
    Err(VdfError::PrimeSearchExhausted(max_iterations))
}

/// Derive the prime challenge `l = HPrime(g, y)` using at most [MAX_PRIME_SEARCH_ITERATIONS]
/// increments. The result only depends on `g` and `y`, so a verifier can recompute it.
pub fn hash_prime<P: PrimalityCheck>(g: &BigUint, y: &BigUint) -> VdfResult<BigUint> {
    hash_prime_with_index::<P>(g, y, MAX_PRIME_SEARCH_ITERATIONS).map(|(_, prime)| prime)
}

/// Implementation of [hash_prime] using [DefaultPrimalityCheck].
pub fn hash_prime_default(g: &BigUint, y: &BigUint) -> VdfResult<BigUint> {
    hash_prime::<DefaultPrimalityCheck>(g, y)
}
