use async_trait::async_trait;

use crate::error::LookupError;

/// Spot-price source the alert monitor polls.
///
/// Implementations must return a finite, non-negative price on success. The
/// engine treats every failure as transient: one bad lookup skips the
/// affected rules for that cycle and nothing else.
#[async_trait]
pub trait PriceLookup: Send + Sync {
    async fn spot(&self, asset_id: &str, vs_currency: &str) -> Result<f64, LookupError>;
}
