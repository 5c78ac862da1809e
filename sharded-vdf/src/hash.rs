// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Hash an integer to a group element.

use crate::bigint_utils::to_canonical_bytes;
use fastcrypto::hash::{HashFunction, Sha256};
use num_bigint::BigUint;

/// Map `x` to a group element by hashing its canonical big-endian bytes with SHA-256 and reading
/// the digest as a big-endian integer. The result is not reduced, callers reduce it modulo the
/// group modulus where needed.
pub fn hash_to_group(x: &BigUint) -> BigUint {
    BigUint::from_bytes_be(&Sha256::digest(to_canonical_bytes(x)).digest)
}

#[cfg(test)]
mod tests {
    use super::hash_to_group;
    use num_bigint::BigUint;
    use proptest::prelude::*;
    use std::str::FromStr;

    #[test]
    fn test_hash_to_group() {
        // Regression tests
        assert_eq!(
            hash_to_group(&BigUint::from(12345u32)),
            BigUint::from_str(
                "24009111651170361809012638631819110575961757232501163593209026750359502315781"
            )
            .unwrap()
        );
        assert_eq!(
            hash_to_group(&BigUint::from(1u32)),
            BigUint::from_str(
                "34356466678672179216206944866734405838331831190171667647615530531663699592602"
            )
            .unwrap()
        );

        // Zero is hashed as the empty string
        assert_eq!(
            hash_to_group(&BigUint::from(0u32)).to_bytes_be(),
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap()
        );
    }

    proptest! {
        #[test]
        fn test_hash_to_group_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let x = BigUint::from_bytes_be(&bytes);
            let g = hash_to_group(&x);
            prop_assert_eq!(&g, &hash_to_group(&x.clone()));
            prop_assert!(g.bits() <= 256);
        }
    }
}
