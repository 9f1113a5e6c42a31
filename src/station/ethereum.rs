// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Etherscan gas oracle adapter for Ethereum networks.
//!
//! The oracle reports each tier as a *total* gas price (base fee
//! included), so priority fees are derived by subtracting the suggested
//! base fee. Numeric fields arrive as numbers or numeric strings and are
//! coerced on decode.

use serde::Deserialize;

use crate::errors::{FallbackError, GasStationError};
use crate::station::{f64_or_string, fetch_gas_price, u64_or_string, GasPriceSnapshot, GasStation};
use crate::types::fallback::FallbackGasPrice;
use crate::types::gas_price::{GasPrice, GasPriceLevel};
use crate::types::network::EthereumNetwork;

/// Fallback gas price (gwei) when the caller supplies none.
const DEFAULT_FALLBACK_GAS_PRICE: f64 = 80.0;

/// Options for [`get_ethereum_gas_price`].
#[derive(Debug, Default)]
pub struct EthereumOptions {
    /// Etherscan API key, appended to the request URL when present.
    /// Requests without one are rate limited upstream.
    pub api_key: Option<String>,
    /// Fallback gas price; defaults to 80 gwei
    pub fallback_gas_price: Option<FallbackGasPrice>,
}

/// Response envelope of the Etherscan gas oracle.
///
/// `status == "0"` means the request reached Etherscan but the oracle
/// reports an error; `result` then holds the error message instead of the
/// gas oracle payload.
#[derive(Debug, Deserialize)]
pub(crate) struct EtherscanEnvelope {
    #[serde(default)]
    status: Option<String>,
    result: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct EtherscanGasOracle {
    #[serde(rename = "LastBlock", deserialize_with = "u64_or_string")]
    last_block: u64,
    #[serde(rename = "suggestBaseFee", deserialize_with = "f64_or_string")]
    suggest_base_fee: f64,
    #[serde(rename = "SafeGasPrice", deserialize_with = "f64_or_string")]
    safe_gas_price: f64,
    #[serde(rename = "ProposeGasPrice", deserialize_with = "f64_or_string")]
    propose_gas_price: f64,
    #[serde(rename = "FastGasPrice", deserialize_with = "f64_or_string")]
    fast_gas_price: f64,
}

pub(crate) struct EtherscanGasStation;

impl GasStation for EtherscanGasStation {
    type Response = EtherscanEnvelope;

    const DEFAULT_FALLBACK_GAS_PRICE: f64 = DEFAULT_FALLBACK_GAS_PRICE;

    fn snapshot(response: EtherscanEnvelope) -> Result<GasPriceSnapshot, GasStationError> {
        if response.status.as_deref() == Some("0") {
            let message = match response.result {
                serde_json::Value::String(message) => message,
                other => other.to_string(),
            };
            return Err(GasStationError::Oracle { message });
        }

        let oracle: EtherscanGasOracle =
            serde_json::from_value(response.result).map_err(GasStationError::Shape)?;

        let base_fee = oracle.suggest_base_fee;
        let level = |total_gas_price: f64| GasPriceLevel {
            max_priority_fee_per_gas: total_gas_price - base_fee,
            max_fee_per_gas: total_gas_price,
        };

        Ok(GasPriceSnapshot {
            last_block: Some(oracle.last_block),
            base_fee,
            low: level(oracle.safe_gas_price),
            average: level(oracle.propose_gas_price),
            high: level(oracle.fast_gas_price),
        })
    }
}

fn request_url(network: EthereumNetwork, api_key: Option<&str>) -> String {
    let gas_station_url = network.gas_station_url();
    match api_key {
        Some(api_key) => format!("{gas_station_url}&apiKey={api_key}"),
        None => gas_station_url.to_owned(),
    }
}

/// Fetch gas price recommendations for an Ethereum network.
///
/// On any upstream failure the configured fallback (default 80 gwei) is
/// substituted for all four tiers and `last_block` is `None`; the failure
/// itself is logged, never returned. The only possible error is a failing
/// deferred fallback producer.
pub async fn get_ethereum_gas_price(
    network: EthereumNetwork,
    options: EthereumOptions,
) -> Result<GasPrice, FallbackError> {
    let url = request_url(network, options.api_key.as_deref());
    fetch_gas_price::<EtherscanGasStation>(&url, options.fallback_gas_price).await
}
