//! Wire shapes for the runner's input and output streams
//!
//! Input lines look like
//! `{"type":"ICEBERG","order":{"direction":"SELL","price":100,"quantity":200,"peak":100}}`.
//! Output lines are either a [`MatchResponse`] or an [`ErrorResponse`].

use floe_book::{MatchReport, OrderRequest};
use floe_core::{Execution, Order, OrderType, Price, Quantity, Side};
use serde::{Deserialize, Serialize};

/// One submitted order as it arrives on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub order: OrderBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBody {
    pub direction: Side,
    pub price: Price,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak: Option<Quantity>,
}

impl OrderPayload {
    /// Parse a single payload line
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<OrderPayload> for OrderRequest {
    fn from(payload: OrderPayload) -> Self {
        OrderRequest {
            order_type: payload.order_type,
            side: payload.order.direction,
            price: payload.order.price,
            quantity: payload.order.quantity,
            peak: payload.order.peak,
        }
    }
}

/// Book state and executions after one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub order: Order,
    pub buy_orders: Vec<Order>,
    pub sell_orders: Vec<Order>,
    pub transactions: Vec<Execution>,
}

impl From<MatchReport> for MatchResponse {
    fn from(report: MatchReport) -> Self {
        Self {
            order: report.order,
            buy_orders: report.buy_orders,
            sell_orders: report.sell_orders,
            transactions: report.executions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
