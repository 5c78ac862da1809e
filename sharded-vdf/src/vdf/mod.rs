// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! This module contains the two evaluators of the verifiable delay function (VDF) and the verifier
//! they share.

use crate::error::VdfResult;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod parallel;
pub mod trapdoor;
pub mod verifier;

/// This represents a Verifiable Delay Function (VDF) construction.
pub trait VDF {
    /// The type of the input to the VDF.
    type InputType;

    /// The type of the output from the VDF.
    type OutputType;

    /// The type of the proof of correctness for this VDF.
    type ProofType;

    /// Evaluate this VDF and return the output and a proof of correctness.
    fn evaluate(&self, input: &Self::InputType)
        -> VdfResult<(Self::OutputType, Self::ProofType)>;

    /// Verify the output and proof from a VDF. Returns `Ok(false)` if the proof is invalid.
    fn verify(
        &self,
        input: &Self::InputType,
        output: &Self::OutputType,
        proof: &Self::ProofType,
    ) -> VdfResult<bool>;
}

/// The output and proof of an evaluation together with the wall-clock time it took. Only the
/// output and the proof are serialized, both as big-endian bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(with = "crate::bigint_serde")]
    pub output: BigUint,
    #[serde(with = "crate::bigint_serde")]
    pub proof: BigUint,
    #[serde(skip)]
    pub elapsed: Duration,
}
