// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Public parameters shared by the evaluators and the verifier.

use crate::error::{VdfError, VdfResult};
use crate::math::modular::{pow2, pow_mod};
use crate::vdf::verifier;
use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Default block width used by the command line driver.
pub const DEFAULT_BLOCK_WIDTH: u64 = 2;

/// Default number of shards used by the command line driver.
pub const DEFAULT_PARALLELISM: u64 = 2;

lazy_static! {
    /// Default generator. The generator is also used as the group modulus.
    pub static ref DEFAULT_GENERATOR: BigUint = BigUint::from(2u32);

    /// Default modulus for the precomputed table.
    pub static ref DEFAULT_TABLE_MODULUS: BigUint = BigUint::from(101u32);
}

/// The immutable parameters of the VDF. This holds the group modulus `G`, the table modulus
/// `PrimeL`, the number of iterations `T`, the block width `Kappa`, the parallelism `Gamma` and the
/// precomputed table `C` with `C[i] = generator^(2^(Kappa * Gamma * i)) mod PrimeL` for
/// `0 <= i <= T / (Kappa * Gamma)`.
///
/// A parameter set can only be created by [ParameterSet::setup] which always builds the full
/// table, so evaluators never see a partially populated table. Deserialization runs the same
/// validation and rejects a table that does not match the other parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParameterSet {
    #[serde(with = "crate::bigint_serde")]
    modulus: BigUint,
    #[serde(with = "crate::bigint_serde")]
    table_modulus: BigUint,
    iterations: u64,
    block_width: u64,
    parallelism: u64,
    #[serde(with = "crate::bigint_serde::seq")]
    table: Vec<BigUint>,
}

/// The serialized form of a [ParameterSet] before validation.
#[derive(Deserialize)]
struct SerializedParameterSet {
    #[serde(with = "crate::bigint_serde")]
    modulus: BigUint,
    #[serde(with = "crate::bigint_serde")]
    table_modulus: BigUint,
    iterations: u64,
    block_width: u64,
    parallelism: u64,
    #[serde(with = "crate::bigint_serde::seq")]
    table: Vec<BigUint>,
}

impl<'de> Deserialize<'de> for ParameterSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Self::from_serialized(SerializedParameterSet::deserialize(deserializer)?)
            .map_err(serde::de::Error::custom)
    }
}

impl ParameterSet {
    fn from_serialized(value: SerializedParameterSet) -> VdfResult<Self> {
        let parameters = Self::setup(
            value.modulus,
            value.table_modulus,
            value.iterations,
            value.block_width,
            value.parallelism,
        )?;
        if parameters.table != value.table {
            return Err(VdfError::InvalidParameters(
                "the table does not match the parameters".to_string(),
            ));
        }
        Ok(parameters)
    }
}

impl ParameterSet {
    /// Create a new parameter set and precompute the table used by the parallel evaluator.
    ///
    /// Returns [VdfError::InvalidParameters] if `block_width * parallelism` is zero or overflows,
    /// or if the generator or table modulus is zero.
    pub fn setup(
        generator: BigUint,
        table_modulus: BigUint,
        iterations: u64,
        block_width: u64,
        parallelism: u64,
    ) -> VdfResult<Self> {
        if generator.is_zero() {
            return Err(VdfError::InvalidParameters(
                "the generator must be positive".to_string(),
            ));
        }
        if table_modulus.is_zero() {
            return Err(VdfError::InvalidParameters(
                "the table modulus must be positive".to_string(),
            ));
        }
        let step = Self::step(block_width, parallelism)?;

        let table_size = iterations / step + 1;
        let table_size = usize::try_from(table_size).map_err(|_| {
            VdfError::InvalidParameters(format!("a table of size {} is too large", table_size))
        })?;

        let mut table = Vec::with_capacity(table_size);
        table.push(&generator % &table_modulus);
        if table_size > 1 {
            // C[i + 1] = C[i]^(2^step). Here step <= iterations.
            let exponent = pow2(step);
            while table.len() < table_size {
                let next = pow_mod(&table[table.len() - 1], &exponent, &table_modulus);
                table.push(next);
            }
        }
        debug!("Precomputed table with {} entries", table.len());

        Ok(Self {
            modulus: generator,
            table_modulus,
            iterations,
            block_width,
            parallelism,
            table,
        })
    }

    /// Returns `Kappa * Gamma`, the number of exponent bits covered by one table entry.
    fn step(block_width: u64, parallelism: u64) -> VdfResult<u64> {
        match block_width.checked_mul(parallelism) {
            Some(0) | None => Err(VdfError::InvalidParameters(format!(
                "block width ({}) times parallelism ({}) must be positive and fit in 64 bits",
                block_width, parallelism
            ))),
            Some(step) => Ok(step),
        }
    }

    /// The group modulus `G`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The table modulus `PrimeL`.
    pub fn table_modulus(&self) -> &BigUint {
        &self.table_modulus
    }

    /// The number of iterations `T`.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// The block width `Kappa`.
    pub fn block_width(&self) -> u64 {
        self.block_width
    }

    /// The number of shards `Gamma`.
    pub fn parallelism(&self) -> u64 {
        self.parallelism
    }

    /// The precomputed table `C`.
    pub fn table(&self) -> &[BigUint] {
        &self.table
    }

    /// Verify an output and proof for the given input. See [verifier::verify].
    pub fn verify(&self, input: &BigUint, output: &BigUint, proof: &BigUint) -> VdfResult<bool> {
        verifier::verify(&self.modulus, input, output, proof, self.iterations)
    }
}
