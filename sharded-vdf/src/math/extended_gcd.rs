// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! This module contains an implementation of the extended Euclidean algorithm for [BigInt]`s.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::mem;

/// The output of the extended Euclidean algorithm on inputs `a` and `b`: The Bezout coefficients `x`
/// and `y` such that `ax + by = gcd`.
#[derive(Debug, PartialEq, Eq)]
pub struct EuclideanAlgorithmOutput {
    pub gcd: BigInt,
    pub x: BigInt,
    pub y: BigInt,
}

/// Compute the greatest common divisor gcd of a and b. The output also returns the Bezout coefficients
/// x and y such that ax + by = gcd. The gcd is always non-negative.
pub fn extended_euclidean_algorithm(a: &BigInt, b: &BigInt) -> EuclideanAlgorithmOutput {
    let mut r = (a.abs(), b.abs());
    let mut s = (BigInt::one(), BigInt::zero());
    let mut t = (BigInt::zero(), BigInt::one());

    while !r.1.is_zero() {
        let q = r.0.div_floor(&r.1);
        r.0 -= &q * &r.1;
        s.0 -= &q * &s.1;
        t.0 -= &q * &t.1;
        mem::swap(&mut r.0, &mut r.1);
        mem::swap(&mut s.0, &mut s.1);
        mem::swap(&mut t.0, &mut t.1);
    }

    // The loop works on |a| and |b|, so the signs of the coefficients are fixed up here.
    if a.is_negative() {
        s.0 = -s.0;
    }
    if b.is_negative() {
        t.0 = -t.0;
    }

    EuclideanAlgorithmOutput {
        gcd: r.0,
        x: s.0,
        y: t.0,
    }
}
