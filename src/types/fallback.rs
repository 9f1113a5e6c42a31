// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fallback gas price configuration.
//!
//! A fallback is either a literal value or a deferred asynchronous
//! producer. The producer form lets callers defer an expensive fallback
//! computation (e.g. a secondary on-chain read) until a fallback is
//! actually needed; it is invoked at most once per failing call and never
//! on success.

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;

use crate::errors::FallbackError;

/// Error type a deferred fallback producer may return.
pub type FallbackProducerError = Box<dyn std::error::Error + Send + Sync>;

type FallbackProducer =
    Box<dyn Fn() -> BoxFuture<'static, Result<f64, FallbackProducerError>> + Send + Sync>;

/// Gas price substituted for all tiers when upstream data cannot be
/// obtained.
///
/// # Examples
///
/// ```
/// use gascan::FallbackGasPrice;
///
/// // Literal value
/// let fallback = FallbackGasPrice::from(80.0);
///
/// // Deferred producer, only invoked on failure
/// let fallback = FallbackGasPrice::deferred(|| async { Ok(80.0) });
/// ```
pub enum FallbackGasPrice {
    /// A literal gas price, used as-is
    Value(f64),
    /// A zero-argument asynchronous producer, invoked only when a
    /// fallback is needed
    Deferred(FallbackProducer),
}

impl FallbackGasPrice {
    /// Wrap an asynchronous producer as a deferred fallback.
    pub fn deferred<F, Fut>(producer: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<f64, FallbackProducerError>> + Send + 'static,
    {
        Self::Deferred(Box::new(move || Box::pin(producer())))
    }

    /// Resolve the configured fallback to a concrete gas price.
    ///
    /// A literal resolves immediately and cannot fail. A deferred
    /// producer is awaited; its failure is the only error the public
    /// entry points ever propagate.
    pub(crate) async fn resolve(&self) -> Result<f64, FallbackError> {
        match self {
            Self::Value(gas_price) => Ok(*gas_price),
            Self::Deferred(producer) => producer().await.map_err(FallbackError::new),
        }
    }
}

impl From<f64> for FallbackGasPrice {
    fn from(gas_price: f64) -> Self {
        Self::Value(gas_price)
    }
}

impl fmt::Debug for FallbackGasPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(gas_price) => f.debug_tuple("Value").field(gas_price).finish(),
            Self::Deferred(_) => f.debug_tuple("Deferred").field(&"<producer>").finish(),
        }
    }
}
