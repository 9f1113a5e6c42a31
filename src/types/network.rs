// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Closed network enumerations and their gas station endpoints.
//!
//! Each network maps 1:1 to a fixed upstream URL; there is no "unknown
//! network" case because the enums close the set. The tables are static
//! configuration, not mutable state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Networks served by the Etherscan gas oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EthereumNetwork {
    /// Ethereum mainnet
    Ethereum,
    /// Goerli testnet
    Goerli,
    /// Sepolia testnet
    Sepolia,
    /// Rinkeby testnet
    Rinkeby,
}

impl EthereumNetwork {
    /// The network's gas oracle endpoint.
    ///
    /// Note this API is rate limited if no API key is passed; callers can
    /// supply theirs via
    /// [`EthereumOptions::api_key`](crate::EthereumOptions).
    /// More info at <https://docs.etherscan.io/support/rate-limits>.
    pub const fn gas_station_url(self) -> &'static str {
        match self {
            Self::Ethereum => "https://api.etherscan.io/api?module=gastracker&action=gasoracle",
            Self::Goerli => {
                "https://api-goerli.etherscan.io/api?module=gastracker&action=gasoracle"
            }
            Self::Sepolia => {
                "https://api-sepolia.etherscan.io/api?module=gastracker&action=gasoracle"
            }
            Self::Rinkeby => {
                "https://api-rinkeby.etherscan.io/api?module=gastracker&action=gasoracle"
            }
        }
    }

    /// Lowercase network name, matching the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Goerli => "goerli",
            Self::Sepolia => "sepolia",
            Self::Rinkeby => "rinkeby",
        }
    }
}

impl fmt::Display for EthereumNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Networks served by the Polygon gas station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolygonNetwork {
    /// Polygon PoS mainnet
    Polygon,
    /// Mumbai testnet
    Mumbai,
}

impl PolygonNetwork {
    /// The network's gas station endpoint.
    pub const fn gas_station_url(self) -> &'static str {
        match self {
            Self::Polygon => "https://gasstation.polygon.technology/v2",
            Self::Mumbai => "https://gasstation-testnet.polygon.technology/v2",
        }
    }

    /// Lowercase network name, matching the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Polygon => "polygon",
            Self::Mumbai => "mumbai",
        }
    }
}

impl fmt::Display for PolygonNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any supported network, for callers that dispatch dynamically.
///
/// Use [`get_gas_price`](crate::get_gas_price) with this type when the
/// chain family is only known at runtime; otherwise prefer the
/// family-specific entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Network {
    /// An Etherscan-served network
    Ethereum(EthereumNetwork),
    /// A Polygon gas station network
    Polygon(PolygonNetwork),
}

impl From<EthereumNetwork> for Network {
    fn from(network: EthereumNetwork) -> Self {
        Self::Ethereum(network)
    }
}

impl From<PolygonNetwork> for Network {
    fn from(network: PolygonNetwork) -> Self {
        Self::Polygon(network)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ethereum(network) => network.fmt(f),
            Self::Polygon(network) => network.fmt(f),
        }
    }
}
