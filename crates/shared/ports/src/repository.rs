use floe_core::{Order, Price, Side};
use rust_decimal::Decimal;

use crate::error::RepositoryResult;

/// Price condition applied when querying one side of the book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceFilter {
    /// Every price is acceptable
    Any,
    /// Only prices that cross the given limit.
    ///
    /// On the buy side this admits bids at or above the limit, on the
    /// sell side asks at or below it.
    Limit(Price),
}

impl PriceFilter {
    /// Filter for the resting orders an incoming order may trade against.
    ///
    /// A zero price means the incoming order accepts any price.
    pub fn for_incoming(order: &Order) -> Self {
        Self::limit(order.price)
    }

    /// Build a limit filter, treating non-positive prices as no filter
    pub fn limit(price: Price) -> Self {
        if price > Decimal::ZERO {
            PriceFilter::Limit(price)
        } else {
            PriceFilter::Any
        }
    }

    /// Check whether a resting order on `side` at `price` passes this filter
    pub fn admits(&self, side: Side, price: Price) -> bool {
        match (self, side) {
            (PriceFilter::Any, _) => true,
            (PriceFilter::Limit(limit), _) if *limit <= Decimal::ZERO => true,
            (PriceFilter::Limit(limit), Side::Buy) => price >= *limit,
            (PriceFilter::Limit(limit), Side::Sell) => price <= *limit,
        }
    }
}

/// Port for the persistent store of orders
///
/// Implementations must serve queries in priority order and apply each
/// `persist_orders` call as a single unit of work.
pub trait OrderRepository: Send + Sync {
    /// Active (`quantity > 0`) orders on `side` admitted by `filter`,
    /// best price first, then earliest `created_at`
    fn query_orders(&self, side: Side, filter: PriceFilter) -> RepositoryResult<Vec<Order>>;

    /// Insert new orders and update the quantity of existing ones
    fn persist_orders(&self, orders: &[Order]) -> RepositoryResult<()>;
}
