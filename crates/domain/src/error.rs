//! Allocation error types.

use common::Sku;
use thiserror::Error;

/// Errors that can occur while allocating an order line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// No candidate batch can take the line, either because none carries
    /// the SKU or because none has enough available quantity.
    #[error("Out of stock for sku {sku}")]
    OutOfStock { sku: Sku },
}

impl AllocationError {
    /// Returns the SKU that could not be allocated.
    pub fn sku(&self) -> &Sku {
        match self {
            AllocationError::OutOfStock { sku } => sku,
        }
    }
}

/// Convenience type alias for allocation results.
pub type Result<T> = std::result::Result<T, AllocationError>;
