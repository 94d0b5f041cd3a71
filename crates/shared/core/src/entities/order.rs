use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{OrderType, Side};
use crate::error::OrderValidationError;
use crate::values::{Price, Quantity, Timestamp};

/// Unique identifier for an order
pub type OrderId = Uuid;

/// Full order details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(rename = "direction")]
    pub side: Side,
    /// Execution price whenever this order is the resting side
    pub price: Price,
    /// Remaining tradable quantity; zero once fully filled
    pub quantity: Quantity,
    /// Required for Iceberg orders, always `None` for Limit orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak: Option<Quantity>,
    pub created_at: Timestamp,
}

impl Order {
    /// Create a new order, rejecting anything that could not be submitted
    pub fn new(
        order_type: OrderType,
        side: Side,
        price: Price,
        quantity: Quantity,
        peak: Option<Quantity>,
        created_at: Timestamp,
    ) -> Result<Self, OrderValidationError> {
        if quantity <= Decimal::ZERO {
            return Err(OrderValidationError::NonPositiveQuantity(quantity));
        }

        let order = Self {
            id: Uuid::new_v4(),
            order_type,
            side,
            price,
            quantity,
            peak: match order_type {
                OrderType::Limit => None,
                OrderType::Iceberg => peak,
            },
            created_at,
        };
        order.validate()?;
        Ok(order)
    }

    /// Create a new limit order
    pub fn limit(
        side: Side,
        price: Price,
        quantity: Quantity,
        created_at: Timestamp,
    ) -> Result<Self, OrderValidationError> {
        Self::new(OrderType::Limit, side, price, quantity, None, created_at)
    }

    /// Create a new iceberg order
    pub fn iceberg(
        side: Side,
        price: Price,
        quantity: Quantity,
        peak: Quantity,
        created_at: Timestamp,
    ) -> Result<Self, OrderValidationError> {
        Self::new(OrderType::Iceberg, side, price, quantity, Some(peak), created_at)
    }

    /// Check the invariants every stored order must hold
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        if self.price <= Decimal::ZERO {
            return Err(OrderValidationError::NonPositivePrice(self.price));
        }
        if self.quantity < Decimal::ZERO {
            return Err(OrderValidationError::NegativeQuantity(self.quantity));
        }
        if self.order_type == OrderType::Iceberg {
            match self.peak {
                None => return Err(OrderValidationError::MissingPeak),
                Some(peak) if peak <= Decimal::ZERO => {
                    return Err(OrderValidationError::NonPositivePeak(peak));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Returns true while the order still has quantity to trade
    pub fn is_active(&self) -> bool {
        self.quantity > Decimal::ZERO
    }

    /// Largest chunk of `remaining` this order may show at once
    pub fn disclosure_of(&self, remaining: Quantity) -> Quantity {
        match (self.order_type, self.peak) {
            (OrderType::Iceberg, Some(peak)) => peak.min(remaining),
            _ => remaining,
        }
    }

    /// Reduce the remaining quantity by a fill.
    ///
    /// Leaves the order untouched if the fill exceeds what remains.
    pub fn fill(&mut self, quantity: Quantity) -> Result<(), OrderValidationError> {
        let remaining = self.quantity - quantity;
        if remaining < Decimal::ZERO {
            return Err(OrderValidationError::NegativeQuantity(remaining));
        }
        self.quantity = remaining;
        Ok(())
    }
}
