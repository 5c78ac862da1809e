// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

// Failures are never retried inside the crate. Each one is fatal for the current call and is
// returned to the immediate caller. A proof that does not verify is not an error, verification
// returns `Ok(false)` in that case.

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VdfError {
    #[error("No prime found after {0} iterations of the prime search")]
    PrimeSearchExhausted(usize),

    #[error("The challenge is not invertible modulo the trapdoor secret")]
    NoInverseExists,

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Malformed integer: {0}")]
    MalformedInteger(String),
}

pub type VdfResult<T> = Result<T, VdfError>;
