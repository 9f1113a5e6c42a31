// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The unified gas price result shared by all chain adapters.
//!
//! Fee values are `f64` in the chain's native fee unit (gwei for both
//! supported families); they are not normalized across chains. Serialized
//! field names follow the upstream EIP-1559 wire conventions
//! (`maxPriorityFeePerGas`, `maxFeePerGas`, `LastBlock`).

use serde::{Deserialize, Serialize};

/// One urgency tier's fee recommendation.
///
/// Follows the EIP-1559 fee split: the max fee is the total ceiling per unit
/// of gas, the priority fee is the portion offered to the block producer on
/// top of the base fee.
///
/// # Examples
///
/// ```
/// use gascan::GasPriceLevel;
///
/// let level = GasPriceLevel {
///     max_priority_fee_per_gas: 2.0,
///     max_fee_per_gas: 32.0,
/// };
/// assert!(level.max_fee_per_gas >= level.max_priority_fee_per_gas);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasPriceLevel {
    /// Fee per unit of gas offered to the block producer, in gwei
    pub max_priority_fee_per_gas: f64,
    /// Total ceiling fee per unit of gas, in gwei
    pub max_fee_per_gas: f64,
}

impl GasPriceLevel {
    /// A degenerate level with both fees set to the same value.
    ///
    /// Used for fallback results, where no base fee information is
    /// available to split the value into its components.
    pub const fn flat(gas_price: f64) -> Self {
        Self {
            max_priority_fee_per_gas: gas_price,
            max_fee_per_gas: gas_price,
        }
    }
}

/// Gas price recommendations at four urgency tiers.
///
/// This is the result shape returned for every supported network. The
/// `low`, `average` and `high` tiers come straight from the upstream gas
/// station; the `asap` tier is derived from the high tier by
/// [`asap_gas_price_level`](crate::asap_gas_price_level).
///
/// `last_block` is the block number the upstream recommendation was
/// computed against, when reported. It is always `None` for a result
/// produced by the fallback path, which makes degraded results
/// distinguishable from live ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasPrice {
    /// Upstream block number the recommendation refers to, if reported
    #[serde(rename = "LastBlock")]
    pub last_block: Option<u64>,
    /// Cheapest recommended tier
    pub low: GasPriceLevel,
    /// Middle-of-the-road tier
    pub average: GasPriceLevel,
    /// Fast-inclusion tier
    pub high: GasPriceLevel,
    /// Derived tier more aggressive than `high`
    pub asap: GasPriceLevel,
}

impl GasPrice {
    /// The fallback result: no block number, all four tiers flattened to
    /// the same gas price.
    pub const fn flat(gas_price: f64) -> Self {
        Self {
            last_block: None,
            low: GasPriceLevel::flat(gas_price),
            average: GasPriceLevel::flat(gas_price),
            high: GasPriceLevel::flat(gas_price),
            asap: GasPriceLevel::flat(gas_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_gas_price_has_no_block_number() {
        let gas_price = GasPrice::flat(80.0);

        assert_eq!(gas_price.last_block, None);
        for level in [
            gas_price.low,
            gas_price.average,
            gas_price.high,
            gas_price.asap,
        ] {
            assert_eq!(level, GasPriceLevel::flat(80.0));
        }
    }

    #[test]
    fn test_serialized_field_names_match_wire_conventions() {
        let gas_price = GasPrice {
            last_block: Some(19_000_000),
            low: GasPriceLevel::flat(10.0),
            average: GasPriceLevel::flat(12.0),
            high: GasPriceLevel::flat(15.0),
            asap: GasPriceLevel {
                max_priority_fee_per_gas: 22.5,
                max_fee_per_gas: 37.5,
            },
        };

        let value = serde_json::to_value(gas_price).unwrap();
        assert_eq!(value["LastBlock"], 19_000_000);
        assert_eq!(value["asap"]["maxPriorityFeePerGas"], 22.5);
        assert_eq!(value["asap"]["maxFeePerGas"], 37.5);
    }
}
