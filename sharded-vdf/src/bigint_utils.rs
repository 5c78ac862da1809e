// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{VdfError, VdfResult};
use num_bigint::BigUint;
use num_traits::Zero;
use std::str::FromStr;

/// Return the minimal big-endian byte representation of `x`. Zero is encoded as the empty string,
/// so the encoding is the same as the one used for hashing by the reference algorithm.
pub fn to_canonical_bytes(x: &BigUint) -> Vec<u8> {
    if x.is_zero() {
        return vec![];
    }
    x.to_bytes_be()
}

/// Parse a non-negative decimal integer.
pub fn parse_integer(s: &str) -> VdfResult<BigUint> {
    let trimmed = s.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VdfError::MalformedInteger(s.to_string()));
    }
    BigUint::from_str(trimmed).map_err(|_| VdfError::MalformedInteger(s.to_string()))
}
