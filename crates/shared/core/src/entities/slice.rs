use super::{OrderId, Side};
use crate::values::{Price, Quantity};

/// A disclosed, tradable fragment of an order's remaining quantity.
///
/// Slices live for a single matching pass and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slice {
    pub source_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
    pub direction: Side,
    /// Position in disclosure order; breaks ties between equal prices
    pub sequence: u64,
}

impl Slice {
    pub fn is_exhausted(&self) -> bool {
        self.quantity.is_zero()
    }
}
