use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OrderId;
use crate::values::{Price, Quantity};

/// A fill between a buy order and a sell order.
///
/// `price` is always the resting (maker) order's price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

impl Execution {
    pub fn new(buy_order_id: OrderId, sell_order_id: OrderId, price: Price, quantity: Quantity) -> Self {
        Self {
            buy_order_id,
            sell_order_id,
            price,
            quantity,
        }
    }

    /// Returns the notional value of the execution (price * quantity)
    pub fn notional(&self) -> Decimal {
        self.price * self.quantity
    }

    /// True if the given order was either counterparty
    pub fn involves(&self, order_id: OrderId) -> bool {
        self.buy_order_id == order_id || self.sell_order_id == order_id
    }
}
