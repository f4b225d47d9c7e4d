//! Batch entity.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use common::{BatchReference, Sku};
use serde::{Deserialize, Serialize};

use super::OrderLine;

/// A receipt of stock that order lines are allocated against.
///
/// A batch either sits in the warehouse already (`eta` is `None`) or is an
/// incoming shipment with an estimated arrival date. Its reference, SKU,
/// purchased quantity, and eta never change after construction; the only
/// mutable state is the set of allocated lines.
///
/// Equality and hashing use the reference alone, so a batch stays findable
/// in hash-based containers while its allocations change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    reference: BatchReference,
    sku: Sku,
    purchased_qty: u32,
    eta: Option<NaiveDate>,
    allocations: HashSet<OrderLine>,
}

impl Batch {
    /// Creates a batch with no allocations.
    pub fn new(
        reference: impl Into<BatchReference>,
        sku: impl Into<Sku>,
        purchased_qty: u32,
        eta: Option<NaiveDate>,
    ) -> Self {
        Self {
            reference: reference.into(),
            sku: sku.into(),
            purchased_qty,
            eta,
            allocations: HashSet::new(),
        }
    }
}

// Query methods
impl Batch {
    /// Returns the batch reference.
    pub fn reference(&self) -> &BatchReference {
        &self.reference
    }

    /// Returns the SKU held by this batch.
    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    /// Returns the quantity purchased for this batch.
    pub fn purchased_qty(&self) -> u32 {
        self.purchased_qty
    }

    /// Returns the estimated arrival date, or `None` for warehouse stock.
    pub fn eta(&self) -> Option<NaiveDate> {
        self.eta
    }

    /// Returns true if the batch is already in the warehouse.
    pub fn is_in_stock(&self) -> bool {
        self.eta.is_none()
    }

    /// Returns the lines currently allocated to this batch.
    pub fn allocations(&self) -> impl Iterator<Item = &OrderLine> {
        self.allocations.iter()
    }

    /// Returns true if an equal line is allocated to this batch.
    pub fn is_allocated(&self, line: &OrderLine) -> bool {
        self.allocations.contains(line)
    }

    /// Returns the total quantity of all allocated lines.
    pub fn allocated_qty(&self) -> i64 {
        self.allocations.iter().map(|line| i64::from(line.qty())).sum()
    }

    /// Returns the quantity still free for allocation.
    ///
    /// Always derived from the purchased quantity and the allocation set.
    /// Negative only if [`Batch::allocate`] was called past capacity.
    pub fn available_qty(&self) -> i64 {
        i64::from(self.purchased_qty) - self.allocated_qty()
    }

    /// Returns true if the line's SKU matches and enough quantity is free.
    pub fn can_allocate(&self, line: &OrderLine) -> bool {
        self.sku == *line.sku() && self.available_qty() >= i64::from(line.qty())
    }
}

// Allocation bookkeeping
impl Batch {
    /// Allocates a line to this batch.
    ///
    /// Neither SKU nor capacity is checked here; call
    /// [`Batch::can_allocate`] first. Allocating a line equal to one already
    /// held changes nothing.
    pub fn allocate(&mut self, line: OrderLine) {
        let order_id = line.order_id().clone();
        let qty = line.qty();
        if self.allocations.insert(line) {
            tracing::trace!(batch = %self.reference, %order_id, qty, "line allocated");
        }
    }

    /// Removes a line from this batch. Unknown lines are ignored.
    pub fn de_allocate(&mut self, line: &OrderLine) {
        if self.allocations.remove(line) {
            tracing::trace!(
                batch = %self.reference,
                order_id = %line.order_id(),
                qty = line.qty(),
                "line de-allocated"
            );
        }
    }
}

// Allocation priority
impl Batch {
    /// Three-way priority comparison: `Less` means `self` is preferred.
    ///
    /// Warehouse stock comes before any shipment; shipments come in order of
    /// arrival. Batches with the same eta compare `Equal`, so a stable sort
    /// keeps their input order.
    pub fn priority_cmp(&self, other: &Batch) -> Ordering {
        match (self.eta, other.eta) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(ours), Some(theirs)) => ours.cmp(&theirs),
        }
    }

    /// Returns true if `self` ranks strictly after `other`.
    ///
    /// Warehouse stock is never later than anything.
    pub fn is_later_than(&self, other: &Batch) -> bool {
        self.priority_cmp(other) == Ordering::Greater
    }
}

impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl Eq for Batch {}

impl Hash for Batch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}

impl std::fmt::Display for Batch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Batch {}>", self.reference)
    }
}
