//! Allocation policy: choose the best batch for an order line.

use common::BatchReference;

use crate::error::{AllocationError, Result};
use crate::model::{Batch, OrderLine};

/// Allocates `line` to the highest-priority batch that can take it.
///
/// Candidates are ranked with [`Batch::priority_cmp`] (warehouse stock
/// first, then shipments by eta) using a stable sort, so batches with the
/// same eta keep the order they were given in. The first batch for which
/// [`Batch::can_allocate`] holds receives the line and its reference is
/// returned. The caller's collection is not reordered.
///
/// Returns [`AllocationError::OutOfStock`] carrying the line's SKU when no
/// candidate qualifies, including when there are no candidates at all.
#[tracing::instrument(
    skip(line, batches),
    fields(order_id = %line.order_id(), sku = %line.sku(), qty = line.qty())
)]
pub fn allocate_with_priority<'a>(
    line: &OrderLine,
    batches: impl IntoIterator<Item = &'a mut Batch>,
) -> Result<BatchReference> {
    let mut ranked: Vec<&mut Batch> = batches.into_iter().collect();
    ranked.sort_by(|a, b| a.priority_cmp(b));
    let candidates = ranked.len();

    match ranked.into_iter().find(|batch| batch.can_allocate(line)) {
        Some(batch) => {
            batch.allocate(line.clone());
            metrics::counter!("allocations_total").increment(1);
            tracing::debug!(
                batch = %batch.reference(),
                available_qty = batch.available_qty(),
                "line allocated"
            );
            Ok(batch.reference().clone())
        }
        None => {
            metrics::counter!("allocations_out_of_stock_total", "sku" => line.sku().to_string())
                .increment(1);
            tracing::warn!(sku = %line.sku(), candidates, "out of stock");
            Err(AllocationError::OutOfStock {
                sku: line.sku().clone(),
            })
        }
    }
}
