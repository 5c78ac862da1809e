// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! A verifiable delay function with two interchangeable evaluators: a trapdoor evaluator which
//! uses the secret group order to skip the sequential work, and a public evaluator which shards a
//! precomputed table over a fixed number of concurrent workers. Both produce an output and a proof
//! which are checked by the same verifier.

pub mod bigint_utils;
pub mod error;
pub mod hash;
pub mod math;
pub mod params;
pub mod vdf;

/// Serialization and deserialization for `num_bigint::BigUint` in big-endian byte order.
mod bigint_serde;

pub use error::{VdfError, VdfResult};
pub use params::ParameterSet;
