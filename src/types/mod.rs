// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across gascan.
//!
//! This module provides the domain value types:
//! - Gas price tiers and the unified per-network result
//! - Closed network enumerations with their gas station endpoints
//! - The fallback gas price configuration (literal or deferred)

pub mod fallback;
pub mod gas_price;
pub mod network;

// Note: Public types are re-exported from lib.rs, not here
