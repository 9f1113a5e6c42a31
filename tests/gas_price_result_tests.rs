// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for the public result and configuration types.

use gascan::{
    EthereumNetwork, EthereumOptions, FallbackGasPrice, GasPrice, GasPriceLevel, GasPriceOptions,
    Network, PolygonNetwork, PolygonOptions,
};
use serde_json::json;

#[test]
fn test_gas_price_wire_format() {
    let gas_price = GasPrice {
        last_block: Some(19_000_000),
        low: GasPriceLevel {
            max_priority_fee_per_gas: 1.0,
            max_fee_per_gas: 21.0,
        },
        average: GasPriceLevel {
            max_priority_fee_per_gas: 1.5,
            max_fee_per_gas: 21.5,
        },
        high: GasPriceLevel {
            max_priority_fee_per_gas: 2.0,
            max_fee_per_gas: 22.0,
        },
        asap: GasPriceLevel {
            max_priority_fee_per_gas: 3.0,
            max_fee_per_gas: 23.0,
        },
    };

    assert_eq!(
        serde_json::to_value(gas_price).unwrap(),
        json!({
            "LastBlock": 19_000_000,
            "low": { "maxPriorityFeePerGas": 1.0, "maxFeePerGas": 21.0 },
            "average": { "maxPriorityFeePerGas": 1.5, "maxFeePerGas": 21.5 },
            "high": { "maxPriorityFeePerGas": 2.0, "maxFeePerGas": 22.0 },
            "asap": { "maxPriorityFeePerGas": 3.0, "maxFeePerGas": 23.0 },
        })
    );
}

#[test]
fn test_gas_price_round_trips() {
    let gas_price = GasPrice::flat(50.0);
    let json = serde_json::to_string(&gas_price).unwrap();
    let decoded: GasPrice = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, gas_price);
    assert_eq!(decoded.last_block, None);
}

#[test]
fn test_options_default_to_empty() {
    let ethereum = EthereumOptions::default();
    assert!(ethereum.api_key.is_none());
    assert!(ethereum.fallback_gas_price.is_none());

    let polygon = PolygonOptions::default();
    assert!(polygon.fallback_gas_price.is_none());

    let dispatch = GasPriceOptions::default();
    assert!(dispatch.api_key.is_none());
    assert!(dispatch.fallback_gas_price.is_none());
}

#[test]
fn test_fallback_gas_price_from_literal() {
    match FallbackGasPrice::from(80.0) {
        FallbackGasPrice::Value(gas_price) => assert_eq!(gas_price, 80.0),
        FallbackGasPrice::Deferred(_) => panic!("literal expected"),
    }
}

#[test]
fn test_network_covers_both_families() {
    let networks: Vec<Network> = vec![
        EthereumNetwork::Ethereum.into(),
        EthereumNetwork::Goerli.into(),
        EthereumNetwork::Sepolia.into(),
        EthereumNetwork::Rinkeby.into(),
        PolygonNetwork::Polygon.into(),
        PolygonNetwork::Mumbai.into(),
    ];

    let names: Vec<String> = networks.iter().map(Network::to_string).collect();
    assert_eq!(
        names,
        ["ethereum", "goerli", "sepolia", "rinkeby", "polygon", "mumbai"]
    );
}
