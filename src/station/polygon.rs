// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Polygon gas station adapter.
//!
//! Unlike the Etherscan oracle, the Polygon gas station already reports
//! each tier split into a priority fee and a max fee, so the tiers map
//! through without subtraction. The block number may be absent upstream
//! even on success.

use serde::Deserialize;

use crate::errors::{FallbackError, GasStationError};
use crate::station::{fetch_gas_price, GasPriceSnapshot, GasStation};
use crate::types::fallback::FallbackGasPrice;
use crate::types::gas_price::{GasPrice, GasPriceLevel};
use crate::types::network::PolygonNetwork;

/// Fallback gas price (gwei) when the caller supplies none.
const DEFAULT_FALLBACK_GAS_PRICE: f64 = 50.0;

/// Options for [`get_polygon_gas_price`].
///
/// The Polygon gas station has no API key concept.
#[derive(Debug, Default)]
pub struct PolygonOptions {
    /// Fallback gas price; defaults to 50 gwei
    pub fallback_gas_price: Option<FallbackGasPrice>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PolygonGasStationResponse {
    #[serde(default)]
    block_number: Option<u64>,
    estimated_base_fee: f64,
    safe_low: PolygonGasPriceLevel,
    standard: PolygonGasPriceLevel,
    fast: PolygonGasPriceLevel,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PolygonGasPriceLevel {
    max_priority_fee: f64,
    max_fee: f64,
}

impl From<PolygonGasPriceLevel> for GasPriceLevel {
    fn from(level: PolygonGasPriceLevel) -> Self {
        Self {
            max_priority_fee_per_gas: level.max_priority_fee,
            max_fee_per_gas: level.max_fee,
        }
    }
}

pub(crate) struct PolygonGasStation;

impl GasStation for PolygonGasStation {
    type Response = PolygonGasStationResponse;

    const DEFAULT_FALLBACK_GAS_PRICE: f64 = DEFAULT_FALLBACK_GAS_PRICE;

    fn snapshot(response: PolygonGasStationResponse) -> Result<GasPriceSnapshot, GasStationError> {
        Ok(GasPriceSnapshot {
            last_block: response.block_number,
            base_fee: response.estimated_base_fee,
            low: response.safe_low.into(),
            average: response.standard.into(),
            high: response.fast.into(),
        })
    }
}

/// Fetch gas price recommendations for a Polygon network.
///
/// Same contract as
/// [`get_ethereum_gas_price`](crate::get_ethereum_gas_price): every
/// upstream failure resolves the configured fallback (default 50 gwei)
/// instead of propagating, and a failing deferred producer is the only
/// possible error.
pub async fn get_polygon_gas_price(
    network: PolygonNetwork,
    options: PolygonOptions,
) -> Result<GasPrice, FallbackError> {
    let url = network.gas_station_url();
    fetch_gas_price::<PolygonGasStation>(url, options.fallback_gas_price).await
}
