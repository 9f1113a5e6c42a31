// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Gas price recommendations for EVM chains with graceful fallback.
//!
//! gascan queries the public gas stations of two chain families — the
//! Etherscan gas oracle for Ethereum networks and the Polygon gas station
//! for Polygon networks — and normalizes their responses into one
//! [`GasPrice`] result with four urgency tiers: `low`, `average`, `high`
//! and `asap`.
//!
//! When the upstream query fails for any reason (network error, bad HTTP
//! status, malformed body, or an error reported by the oracle itself) the
//! result degrades to a configurable [fallback gas price](FallbackGasPrice)
//! instead of surfacing the error. A degraded result is recognizable by
//! `last_block == None`.
//!
//! # Example
//!
//! ```rust,no_run
//! use gascan::{get_ethereum_gas_price, EthereumNetwork, EthereumOptions};
//!
//! # async fn example() {
//! let gas_price = get_ethereum_gas_price(
//!     EthereumNetwork::Ethereum,
//!     EthereumOptions::default(),
//! )
//! .await
//! .expect("literal fallbacks cannot fail");
//!
//! println!("high tier max fee: {} gwei", gas_price.high.max_fee_per_gas);
//! # }
//! ```
//!
//! # Fallback configuration
//!
//! The fallback is either a literal value or a deferred asynchronous
//! producer, invoked only when a fallback is actually needed:
//!
//! ```rust,no_run
//! use gascan::{get_polygon_gas_price, FallbackGasPrice, PolygonNetwork, PolygonOptions};
//!
//! # async fn example() {
//! let options = PolygonOptions {
//!     fallback_gas_price: Some(FallbackGasPrice::deferred(|| async {
//!         // e.g. a secondary on-chain read, only paid for on failure
//!         Ok(35.0)
//!     })),
//! };
//!
//! let gas_price = get_polygon_gas_price(PolygonNetwork::Polygon, options).await;
//! # }
//! ```

mod errors;
mod levels;
mod station;
mod types;

pub use errors::FallbackError;
pub use levels::{asap_gas_price_level, ASAP_PERCENTAGE};
pub use station::ethereum::{get_ethereum_gas_price, EthereumOptions};
pub use station::polygon::{get_polygon_gas_price, PolygonOptions};
pub use station::{get_gas_price, GasPriceOptions};
pub use types::fallback::{FallbackGasPrice, FallbackProducerError};
pub use types::gas_price::{GasPrice, GasPriceLevel};
pub use types::network::{EthereumNetwork, Network, PolygonNetwork};
