// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the asap tier derivation.
//!
//! These tests use proptest to validate the derivation invariants across a
//! wide range of base fees and high-tier priority fees.

use gascan::{asap_gas_price_level, ASAP_PERCENTAGE};
use proptest::prelude::*;

proptest! {
    /// Property: the asap priority fee is always the high priority fee
    /// scaled by the fixed percentage, and the max fee adds the base fee.
    #[test]
    fn prop_asap_scales_high_priority_fee(
        base_fee in 0.0f64..10_000.0,
        high_priority_fee in 0.0f64..10_000.0,
    ) {
        let asap = asap_gas_price_level(base_fee, high_priority_fee);
        let expected_priority_fee = high_priority_fee * ASAP_PERCENTAGE / 100.0;

        prop_assert_eq!(asap.max_priority_fee_per_gas, expected_priority_fee);
        prop_assert_eq!(asap.max_fee_per_gas, expected_priority_fee + base_fee);
    }

    /// Property: asap never recommends less than the high tier it was
    /// derived from.
    #[test]
    fn prop_asap_is_at_least_as_aggressive_as_high(
        base_fee in 0.0f64..10_000.0,
        high_priority_fee in 0.0f64..10_000.0,
    ) {
        let asap = asap_gas_price_level(base_fee, high_priority_fee);

        prop_assert!(asap.max_priority_fee_per_gas >= high_priority_fee);
        prop_assert!(asap.max_fee_per_gas >= asap.max_priority_fee_per_gas);
    }

    /// Property: the derivation is pure, so equal inputs give structurally
    /// equal levels.
    #[test]
    fn prop_derivation_is_deterministic(
        base_fee in 0.0f64..10_000.0,
        high_priority_fee in 0.0f64..10_000.0,
    ) {
        prop_assert_eq!(
            asap_gas_price_level(base_fee, high_priority_fee),
            asap_gas_price_level(base_fee, high_priority_fee)
        );
    }
}
