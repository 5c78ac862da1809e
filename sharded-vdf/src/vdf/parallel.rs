// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Evaluation of the VDF without the trapdoor using the precomputed table of a [ParameterSet].
//! The blocks of the exponent `2^T` are split into `Gamma` shards which are processed
//! concurrently. Each shard only reads the immutable table and keeps its own accumulators, and the
//! shard results are folded with a commutative product, so the result does not depend on the order
//! in which the shards finish.

use crate::error::VdfResult;
use crate::hash::hash_to_group;
use crate::math::modular::{mul_mod, pow2_mod};
use crate::params::ParameterSet;
use crate::vdf::{Evaluation, VDF};
use num_bigint::BigUint;
use num_traits::One;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// The public parallel evaluator.
pub struct ParallelVDF<'a> {
    parameters: &'a ParameterSet,
}

impl<'a> ParallelVDF<'a> {
    pub fn new(parameters: &'a ParameterSet) -> Self {
        Self { parameters }
    }

    /// Evaluate the VDF on `input` and return the output, the proof and the time it took.
    pub fn evaluate_timed(&self, input: &BigUint) -> Evaluation {
        evaluate(self.parameters, input)
    }
}

impl VDF for ParallelVDF<'_> {
    type InputType = BigUint;
    type OutputType = BigUint;
    type ProofType = BigUint;

    fn evaluate(&self, input: &BigUint) -> VdfResult<(BigUint, BigUint)> {
        let evaluation = self.evaluate_timed(input);
        Ok((evaluation.output, evaluation.proof))
    }

    fn verify(&self, input: &BigUint, output: &BigUint, proof: &BigUint) -> VdfResult<bool> {
        self.parameters.verify(input, output, proof)
    }
}

/// The accumulated values of a single shard. The output is reduced modulo the table modulus and
/// the proof modulo the group modulus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShardResult {
    pub output: BigUint,
    pub proof: BigUint,
}

/// Evaluate the VDF on `input` using the table from `parameters`, running one task per shard.
pub fn evaluate(parameters: &ParameterSet, input: &BigUint) -> Evaluation {
    let start = Instant::now();

    let g = hash_to_group(input);
    if parameters.iterations() == 0 {
        return Evaluation {
            output: g,
            proof: BigUint::one(),
            elapsed: start.elapsed(),
        };
    }

    // A block only depends on the exponent modulo 2^Kappa * PrimeL, so the shards get
    // 2^T reduced by that modulus.
    let exponent = pow2_mod(parameters.iterations(), &block_modulus(parameters));

    let shards: Vec<ShardResult> = (0..parameters.parallelism())
        .into_par_iter()
        .map(|shard| evaluate_shard(parameters, &exponent, shard))
        .collect();
    let (output, proof) = aggregate_shards(parameters, g, shards);

    let elapsed = start.elapsed();
    info!(
        iterations = parameters.iterations(),
        shards = parameters.parallelism(),
        ?elapsed,
        "Parallel evaluation finished"
    );

    Evaluation {
        output,
        proof,
        elapsed,
    }
}

/// Compute the accumulators for shard `shard`. For every table index `i`, the table entry `C[i]`
/// is multiplied into both accumulators if the block with index `i * Gamma + shard` of the
/// exponent is non-zero.
pub fn evaluate_shard(parameters: &ParameterSet, exponent: &BigUint, shard: u64) -> ShardResult {
    let mut output = BigUint::one();
    let mut proof = BigUint::one();
    let mut selected = 0usize;

    for (i, entry) in parameters.table().iter().enumerate() {
        let index = i as u64 * parameters.parallelism() + shard;
        if get_block(
            exponent,
            index,
            parameters.block_width(),
            parameters.table_modulus(),
        ) != 0
        {
            output = mul_mod(&output, entry, parameters.table_modulus());
            proof = mul_mod(&proof, entry, parameters.modulus());
            selected += 1;
        }
    }

    debug!(
        "Shard {} selected {} of {} table entries",
        shard,
        selected,
        parameters.table().len()
    );
    ShardResult { output, proof }
}

/// Fold the shard results into the final output and proof, starting from `g` and `1`
/// respectively. The output is reduced modulo the table modulus and the proof modulo the group
/// modulus. The fold is a product, so the order of the shards does not matter.
pub fn aggregate_shards(
    parameters: &ParameterSet,
    g: BigUint,
    shards: impl IntoIterator<Item = ShardResult>,
) -> (BigUint, BigUint) {
    shards
        .into_iter()
        .fold((g, BigUint::one()), |(output, proof), shard| {
            (
                mul_mod(&output, &shard.output, parameters.table_modulus()),
                mul_mod(&proof, &shard.proof, parameters.modulus()),
            )
        })
}

/// Compute `(2^(index * block_width) * e) mod (2^block_width * table_modulus)` and return its
/// lowest 64 bits. A non-zero result selects the corresponding table entry.
pub fn get_block(e: &BigUint, index: u64, block_width: u64, table_modulus: &BigUint) -> u64 {
    let modulus = table_modulus << block_width;
    let block = mul_mod(&pow2_mod(index * block_width, &modulus), e, &modulus);
    block.iter_u64_digits().next().unwrap_or(0)
}

fn block_modulus(parameters: &ParameterSet) -> BigUint {
    parameters.table_modulus() << parameters.block_width()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::modular::pow2;
    use proptest::prelude::*;

    fn default_parameters() -> ParameterSet {
        ParameterSet::setup(BigUint::from(2u32), BigUint::from(101u32), 16, 2, 2).unwrap()
    }

    #[test]
    fn test_get_block() {
        let e = pow2(16);
        let table_modulus = BigUint::from(101u32);
        let expected = [88u64, 352, 196, 380, 308, 20, 80, 320, 68, 272];
        for (index, block) in expected.iter().enumerate() {
            assert_eq!(get_block(&e, index as u64, 2, &table_modulus), *block);
        }

        // Only the exponent modulo 2^Kappa * PrimeL matters
        let reduced = &e % BigUint::from(404u32);
        for index in 0..10 {
            assert_eq!(
                get_block(&e, index, 2, &table_modulus),
                get_block(&reduced, index, 2, &table_modulus)
            );
        }

        assert_eq!(get_block(&BigUint::from(404u32), 3, 2, &table_modulus), 0);
    }

    #[test]
    fn test_evaluate_shard() {
        let parameters = default_parameters();
        let exponent = pow2(16);
        let expected = ShardResult {
            output: BigUint::from(32u32),
            proof: BigUint::from(0u32),
        };
        assert_eq!(evaluate_shard(&parameters, &exponent, 0), expected);
        assert_eq!(evaluate_shard(&parameters, &exponent, 1), expected);
    }

    #[test]
    fn test_evaluate() {
        let parameters = default_parameters();
        let input = BigUint::from(12345u32);
        let evaluation = evaluate(&parameters, &input);
        assert_eq!(evaluation.output, BigUint::from(90u32));
        assert_eq!(evaluation.proof, BigUint::from(0u32));

        // Evaluation is deterministic regardless of scheduling
        for _ in 0..5 {
            let again = evaluate(&parameters, &input);
            assert_eq!(again.output, evaluation.output);
            assert_eq!(again.proof, evaluation.proof);
        }
    }

    #[test]
    fn test_reduced_exponent() {
        // One step covers all iterations, so the table has two entries and there are many shards
        let parameters =
            ParameterSet::setup(BigUint::from(3u32), BigUint::from(101u32), 4096, 64, 64).unwrap();
        let input = BigUint::from(12345u32);
        let full_exponent = pow2(4096);
        let shards = (0..parameters.parallelism())
            .map(|shard| evaluate_shard(&parameters, &full_exponent, shard));
        let expected = aggregate_shards(&parameters, hash_to_group(&input), shards);

        let evaluation = evaluate(&parameters, &input);
        assert_eq!((evaluation.output, evaluation.proof), expected);
    }

    #[test]
    fn test_zero_iterations() {
        let parameters =
            ParameterSet::setup(BigUint::from(2u32), BigUint::from(101u32), 0, 2, 2).unwrap();
        let input = BigUint::from(12345u32);
        let evaluation = evaluate(&parameters, &input);
        assert_eq!(evaluation.output, hash_to_group(&input));
        assert!(evaluation.proof.is_one());
    }

    proptest! {
        #[test]
        fn test_aggregation_is_order_independent(
            values in prop::collection::vec((any::<u64>(), any::<u64>()), 1..8),
            rotation in 0usize..8,
        ) {
            let parameters = ParameterSet::setup(
                BigUint::from(1_000_000_007u64),
                BigUint::from(1_000_003u64),
                16,
                2,
                values.len() as u64,
            )
            .unwrap();
            let g = hash_to_group(&BigUint::from(12345u32));
            let shards: Vec<ShardResult> = values
                .iter()
                .map(|(output, proof)| ShardResult {
                    output: BigUint::from(*output),
                    proof: BigUint::from(*proof),
                })
                .collect();

            let expected = aggregate_shards(&parameters, g.clone(), shards.clone());

            let mut reversed = shards.clone();
            reversed.reverse();
            prop_assert_eq!(&aggregate_shards(&parameters, g.clone(), reversed), &expected);

            let mut rotated = shards;
            let len = rotated.len();
            rotated.rotate_left(rotation % len);
            prop_assert_eq!(&aggregate_shards(&parameters, g, rotated), &expected);
        }

        #[test]
        fn test_block_is_bounded(e in any::<u64>(), index in 0u64..64, block_width in 1u64..8) {
            let table_modulus = BigUint::from(101u32);
            let block = get_block(&BigUint::from(e), index, block_width, &table_modulus);
            prop_assert!(block < (101u64 << block_width));
        }
    }
}
