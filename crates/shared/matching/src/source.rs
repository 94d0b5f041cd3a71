use floe_core::{Order, Slice};

/// Cuts the incoming order into slices, one at a time.
///
/// Every slice is sized from the order's current remaining quantity: a limit
/// order yields all of it, an iceberg order at most one peak. Nothing is
/// precomputed, so a slice requested after partial fills reflects them.
#[derive(Debug, Default)]
pub struct SourceSlicer {
    issued: u64,
}

impl SourceSlicer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next slice of `incoming`, or `None` once it has nothing left to trade
    pub fn next_slice(&mut self, incoming: &Order) -> Option<Slice> {
        if !incoming.is_active() {
            return None;
        }

        let slice = Slice {
            source_order_id: incoming.id,
            price: incoming.price,
            quantity: incoming.disclosure_of(incoming.quantity),
            direction: incoming.side,
            sequence: self.issued,
        };
        self.issued += 1;
        Some(slice)
    }

    /// Number of slices handed out so far
    pub fn issued(&self) -> u64 {
        self.issued
    }
}
