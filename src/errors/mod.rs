// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the gascan library.
//!
//! The adapters deliberately absorb every upstream failure into the
//! fallback path, so the internal [`GasStationError`] taxonomy never
//! reaches callers; it exists to keep the failure kinds distinct in logs
//! and tests. The only error a public entry point can return is
//! [`FallbackError`], raised when a deferred fallback producer itself
//! fails.

use crate::types::fallback::FallbackProducerError;

/// A deferred fallback gas price producer failed.
///
/// This is the single error the public entry points can return. Calls
/// configured with a literal fallback (or the per-family default) never
/// produce it.
#[derive(Debug, thiserror::Error)]
#[error("fallback gas price producer failed")]
pub struct FallbackError {
    #[source]
    source: FallbackProducerError,
}

impl FallbackError {
    pub(crate) fn new(source: FallbackProducerError) -> Self {
        Self { source }
    }
}

/// Failure kinds absorbed by the fallback path.
///
/// All variants are treated identically by the adapters: one fallback
/// resolution, no retry, no propagation. The distinction exists only for
/// the `warn!` event emitted when a query is absorbed.
#[derive(Debug, thiserror::Error)]
pub(crate) enum GasStationError {
    /// Connection, DNS, or timeout failure reported by the HTTP client.
    #[error("gas station request failed")]
    Transport(#[source] reqwest::Error),

    /// The gas station answered with a non-success HTTP status.
    #[error("gas station returned HTTP status {status}")]
    Status {
        /// The non-success status code
        status: reqwest::StatusCode,
    },

    /// The response body could not be read or was not valid JSON.
    #[error("failed to decode gas station response")]
    Decode(#[source] reqwest::Error),

    /// The body was valid JSON but did not match the expected shape.
    #[error("unexpected gas station response shape")]
    Shape(#[source] serde_json::Error),

    /// The request succeeded but the oracle itself reported an error.
    #[error("gas oracle reported an error: {message}")]
    Oracle {
        /// The oracle's reported error message
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_error_carries_upstream_message() {
        let error = GasStationError::Oracle {
            message: "Max rate limit reached".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "gas oracle reported an error: Max rate limit reached"
        );
    }

    #[test]
    fn test_fallback_error_keeps_producer_source() {
        let error = FallbackError::new("rpc node unreachable".into());
        let source = std::error::Error::source(&error).unwrap();
        assert_eq!(source.to_string(), "rpc node unreachable");
    }
}
