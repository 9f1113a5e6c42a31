// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Generic gas station query pipeline shared by both chain adapters.
//!
//! The two adapters differ only in their endpoint tables and response
//! mapping; the fetch / validate / package flow and the error-absorption
//! contract live here once. A [`GasStation`] implementation contributes a
//! serde response schema plus the mapping from that schema into a
//! [`GasPriceSnapshot`].

pub mod ethereum;
pub mod polygon;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use crate::errors::{FallbackError, GasStationError};
use crate::levels::asap_gas_price_level;
use crate::station::ethereum::EthereumOptions;
use crate::station::polygon::PolygonOptions;
use crate::types::fallback::FallbackGasPrice;
use crate::types::gas_price::{GasPrice, GasPriceLevel};
use crate::types::network::Network;

/// A chain family's gas station: its response schema and the mapping into
/// the common snapshot.
pub(crate) trait GasStation {
    /// The upstream response shape. Deserialization failure is absorbed
    /// as a decode error, never propagated.
    type Response: DeserializeOwned;

    /// Fallback gas price used when the caller supplies none.
    const DEFAULT_FALLBACK_GAS_PRICE: f64;

    /// Map a decoded response into the common snapshot, or reject it
    /// (e.g. the oracle reported an error).
    fn snapshot(response: Self::Response) -> Result<GasPriceSnapshot, GasStationError>;
}

/// A successfully fetched recommendation, before the asap tier is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GasPriceSnapshot {
    pub last_block: Option<u64>,
    pub base_fee: f64,
    pub low: GasPriceLevel,
    pub average: GasPriceLevel,
    pub high: GasPriceLevel,
}

impl GasPriceSnapshot {
    fn into_gas_price(self) -> GasPrice {
        let asap = asap_gas_price_level(self.base_fee, self.high.max_priority_fee_per_gas);

        GasPrice {
            last_block: self.last_block,
            low: self.low,
            average: self.average,
            high: self.high,
            asap,
        }
    }
}

/// Query a gas station and package the result, absorbing every failure
/// into the fallback.
///
/// Exactly one fallback resolution happens per failing call; no retry.
/// The collapsed failure kind is logged, not returned.
pub(crate) async fn fetch_gas_price<S: GasStation>(
    url: &str,
    fallback: Option<FallbackGasPrice>,
) -> Result<GasPrice, FallbackError> {
    match query_station::<S>(url).await {
        Ok(snapshot) => {
            debug!(url, last_block = ?snapshot.last_block, "gas station snapshot fetched");
            Ok(snapshot.into_gas_price())
        }
        Err(error) => {
            warn!(url, error = %error, "gas station query failed, using fallback gas price");
            let gas_price = match &fallback {
                Some(fallback) => fallback.resolve().await?,
                None => S::DEFAULT_FALLBACK_GAS_PRICE,
            };
            Ok(GasPrice::flat(gas_price))
        }
    }
}

async fn query_station<S: GasStation>(url: &str) -> Result<GasPriceSnapshot, GasStationError> {
    let response = reqwest::get(url).await.map_err(GasStationError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(GasStationError::Status { status });
    }

    let body: S::Response = response.json().await.map_err(GasStationError::Decode)?;
    S::snapshot(body)
}

/// Deserialize an upstream field that arrives either as a JSON number or
/// as a numeric string.
pub(crate) fn f64_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Like [`f64_or_string`] for integral fields (block numbers).
pub(crate) fn u64_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Options for [`get_gas_price`].
///
/// The API key only applies to Ethereum networks; it is ignored when
/// dispatching to the Polygon gas station.
#[derive(Debug, Default)]
pub struct GasPriceOptions {
    /// Etherscan API key, appended to the request URL when present
    pub api_key: Option<String>,
    /// Fallback gas price; defaults to the dispatched family's constant
    pub fallback_gas_price: Option<FallbackGasPrice>,
}

/// Fetch gas price recommendations for any supported network.
///
/// Dispatches to [`get_ethereum_gas_price`](crate::get_ethereum_gas_price)
/// or [`get_polygon_gas_price`](crate::get_polygon_gas_price) based on the
/// network's chain family, with that family's default fallback.
pub async fn get_gas_price(
    network: Network,
    options: GasPriceOptions,
) -> Result<GasPrice, FallbackError> {
    match network {
        Network::Ethereum(network) => {
            ethereum::get_ethereum_gas_price(
                network,
                EthereumOptions {
                    api_key: options.api_key,
                    fallback_gas_price: options.fallback_gas_price,
                },
            )
            .await
        }
        Network::Polygon(network) => {
            polygon::get_polygon_gas_price(
                network,
                PolygonOptions {
                    fallback_gas_price: options.fallback_gas_price,
                },
            )
            .await
        }
    }
}
