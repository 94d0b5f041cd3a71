use floe_core::{Order, OrderType, OrderValidationError, Price, Quantity, Side, Timestamp};

/// An order as submitted, before it has an id or an arrival time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub order_type: OrderType,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
    /// Required for Iceberg orders, ignored for Limit orders
    pub peak: Option<Quantity>,
}

impl OrderRequest {
    pub fn limit(side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            order_type: OrderType::Limit,
            side,
            price,
            quantity,
            peak: None,
        }
    }

    pub fn iceberg(side: Side, price: Price, quantity: Quantity, peak: Quantity) -> Self {
        Self {
            order_type: OrderType::Iceberg,
            side,
            price,
            quantity,
            peak: Some(peak),
        }
    }

    /// Turn the request into an order that arrived at `created_at`
    pub fn into_order(self, created_at: Timestamp) -> Result<Order, OrderValidationError> {
        Order::new(
            self.order_type,
            self.side,
            self.price,
            self.quantity,
            self.peak,
            created_at,
        )
    }
}
