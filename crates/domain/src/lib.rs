//! Inventory allocation domain.
//!
//! This crate provides:
//! - `OrderLine`, an immutable request for a quantity of one SKU
//! - `Batch`, a stock receipt that tracks the lines allocated against it
//! - `allocate_with_priority`, which picks the best batch for a line
//!
//! Everything here is synchronous, in-memory computation with no IO.

pub mod allocation;
pub mod error;
pub mod model;

pub use allocation::allocate_with_priority;
pub use common::{BatchReference, OrderId, Sku};
pub use error::{AllocationError, Result};
pub use model::{Batch, OrderLine};
