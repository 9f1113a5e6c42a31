// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Derivation of the synthetic `asap` tier.

use crate::types::gas_price::GasPriceLevel;

/// Markup applied to the high tier's priority fee to obtain the `asap`
/// priority fee, in percent. Shared by both chain adapters.
pub const ASAP_PERCENTAGE: f64 = 150.0;

/// Compute the `asap` tier from the current base fee and the high tier's
/// priority fee.
///
/// The asap priority fee is the high priority fee scaled by
/// [`ASAP_PERCENTAGE`]; the asap max fee is that priority fee plus the
/// base fee, consistent with the max-fee = priority-fee + base-fee split
/// used everywhere else.
///
/// # Examples
///
/// ```
/// use gascan::asap_gas_price_level;
///
/// let asap = asap_gas_price_level(0.0, 120.0);
/// assert_eq!(asap.max_priority_fee_per_gas, 180.0);
/// assert_eq!(asap.max_fee_per_gas, 180.0);
/// ```
pub fn asap_gas_price_level(base_fee: f64, high_priority_fee: f64) -> GasPriceLevel {
    let max_priority_fee_per_gas = high_priority_fee * ASAP_PERCENTAGE / 100.0;

    GasPriceLevel {
        max_priority_fee_per_gas,
        max_fee_per_gas: max_priority_fee_per_gas + base_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asap_priority_fee_is_scaled_high_priority_fee() {
        let asap = asap_gas_price_level(0.0, 120.0);

        assert_eq!(asap.max_priority_fee_per_gas, 120.0 * ASAP_PERCENTAGE / 100.0);
        assert_eq!(asap.max_priority_fee_per_gas, 180.0);
    }

    #[test]
    fn test_asap_max_fee_adds_base_fee() {
        let asap = asap_gas_price_level(10.0, 2.0);

        assert_eq!(asap.max_priority_fee_per_gas, 3.0);
        assert_eq!(asap.max_fee_per_gas, 13.0);
    }
}
