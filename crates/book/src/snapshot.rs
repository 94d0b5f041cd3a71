use floe_core::{Execution, Order, Price, Side};
use floe_ports::{OrderRepository, PriceFilter, RepositoryResult};

/// Resting orders on both sides of the book, in priority order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookSnapshot {
    /// Bids, highest price first then oldest
    pub buy_orders: Vec<Order>,
    /// Asks, lowest price first then oldest
    pub sell_orders: Vec<Order>,
}

impl BookSnapshot {
    /// Read both sides of the book from `repository`
    pub fn capture<R: OrderRepository + ?Sized>(repository: &R) -> RepositoryResult<Self> {
        Ok(Self {
            buy_orders: repository.query_orders(Side::Buy, PriceFilter::Any)?,
            sell_orders: repository.query_orders(Side::Sell, PriceFilter::Any)?,
        })
    }

    pub fn best_bid(&self) -> Option<Price> {
        self.buy_orders.first().map(|o| o.price)
    }

    pub fn best_ask(&self) -> Option<Price> {
        self.sell_orders.first().map(|o| o.price)
    }

    pub fn side(&self, side: Side) -> &[Order] {
        match side {
            Side::Buy => &self.buy_orders,
            Side::Sell => &self.sell_orders,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buy_orders.is_empty() && self.sell_orders.is_empty()
    }
}

/// Everything a submission produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// The submitted order with its final remaining quantity
    pub order: Order,
    /// Executions in the order liquidity was consumed
    pub executions: Vec<Execution>,
    pub buy_orders: Vec<Order>,
    pub sell_orders: Vec<Order>,
}

impl MatchReport {
    pub fn new(order: Order, executions: Vec<Execution>, book: BookSnapshot) -> Self {
        Self {
            order,
            executions,
            buy_orders: book.buy_orders,
            sell_orders: book.sell_orders,
        }
    }

    /// True if the submitted order has nothing left to trade
    pub fn is_filled(&self) -> bool {
        !self.order.is_active()
    }

    /// Top of book after the pass
    pub fn best_bid_and_ask(&self) -> (Option<Price>, Option<Price>) {
        (
            self.buy_orders.first().map(|o| o.price),
            self.sell_orders.first().map(|o| o.price),
        )
    }
}
