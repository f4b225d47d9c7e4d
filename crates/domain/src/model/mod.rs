//! Order lines and the batches they are allocated against.

mod batch;
mod order_line;

pub use batch::Batch;
pub use order_line::OrderLine;
