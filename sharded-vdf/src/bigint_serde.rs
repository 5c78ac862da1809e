// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::bigint_utils::to_canonical_bytes;
use num_bigint::BigUint;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(BigUint::from_bytes_be(&<Vec<u8>>::deserialize(
        deserializer,
    )?))
}

pub(crate) fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    to_canonical_bytes(value).serialize(serializer)
}

/// serde for a sequence of `BigUint`s, each encoded as in the parent module.
pub(crate) mod seq {
    use crate::bigint_utils::to_canonical_bytes;
    use num_bigint::BigUint;
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serialize;
    use serde::Serializer;

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<BigUint>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(<Vec<Vec<u8>>>::deserialize(deserializer)?
            .iter()
            .map(|bytes| BigUint::from_bytes_be(bytes))
            .collect())
    }

    pub(crate) fn serialize<S>(values: &[BigUint], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        values
            .iter()
            .map(to_canonical_bytes)
            .collect::<Vec<_>>()
            .serialize(serializer)
    }
}
