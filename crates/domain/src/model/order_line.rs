//! Order line value object.

use common::{OrderId, Sku};
use serde::{Deserialize, Serialize};

/// A single requested quantity of one SKU within an order.
///
/// Order lines are values: two lines with the same order, SKU, and quantity
/// are interchangeable, which is what makes re-allocating an equal line to a
/// batch a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderLine {
    order_id: OrderId,
    sku: Sku,
    qty: u32,
}

impl OrderLine {
    /// Creates a new order line.
    ///
    /// The quantity is not validated; a zero-quantity line fits any batch
    /// carrying its SKU.
    pub fn new(order_id: impl Into<OrderId>, sku: impl Into<Sku>, qty: u32) -> Self {
        Self {
            order_id: order_id.into(),
            sku: sku.into(),
            qty,
        }
    }

    /// Returns the order this line belongs to.
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the requested SKU.
    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    /// Returns the requested quantity.
    pub fn qty(&self) -> u32 {
        self.qty
    }
}
