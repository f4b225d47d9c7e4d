//! Shared types for the allocation workspace.

pub mod telemetry;
pub mod types;

pub use types::{BatchReference, OrderId, Sku};
