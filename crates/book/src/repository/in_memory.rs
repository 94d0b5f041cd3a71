use std::collections::HashMap;
use std::sync::Arc;

use floe_core::{Order, OrderId, Side};
use floe_ports::{OrderRepository, PriceFilter, RepositoryError, RepositoryResult};
use parking_lot::RwLock;

#[derive(Debug, Clone)]
struct StoredOrder {
    order: Order,
    /// Insertion counter; orders the book when arrival times tie
    arrival: u64,
}

#[derive(Debug, Default)]
struct Store {
    orders: HashMap<OrderId, StoredOrder>,
    next_arrival: u64,
}

/// In-memory order repository
///
/// Thread-safe storage for orders behind a single lock, so every
/// `persist_orders` call is applied atomically. Filled orders are kept but
/// never returned by queries.
pub struct InMemoryOrderRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        InMemoryOrderRepository {
            store: Arc::new(RwLock::new(Store::default())),
        }
    }

    /// Get a stored order by id, filled or not
    pub fn get(&self, order_id: OrderId) -> Option<Order> {
        self.store.read().orders.get(&order_id).map(|s| s.order.clone())
    }

    /// Number of stored orders, including filled ones
    pub fn len(&self) -> usize {
        self.store.read().orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().orders.is_empty()
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryOrderRepository {
    fn clone(&self) -> Self {
        InMemoryOrderRepository {
            store: Arc::clone(&self.store),
        }
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn query_orders(&self, side: Side, filter: PriceFilter) -> RepositoryResult<Vec<Order>> {
        let store = self.store.read();

        let mut matches: Vec<&StoredOrder> = store
            .orders
            .values()
            .filter(|s| s.order.side == side && s.order.is_active())
            .filter(|s| filter.admits(side, s.order.price))
            .collect();

        matches.sort_by(|a, b| {
            side.price_priority(a.order.price, b.order.price)
                .then_with(|| a.order.created_at.cmp(&b.order.created_at))
                .then_with(|| a.arrival.cmp(&b.arrival))
        });

        Ok(matches.into_iter().map(|s| s.order.clone()).collect())
    }

    fn persist_orders(&self, orders: &[Order]) -> RepositoryResult<()> {
        for order in orders {
            order.validate().map_err(|e| RepositoryError::Rejected {
                order_id: order.id,
                reason: e.to_string(),
            })?;
        }

        let mut store = self.store.write();
        for order in orders {
            if let Some(existing) = store.orders.get_mut(&order.id) {
                existing.order.quantity = order.quantity;
                continue;
            }

            let arrival = store.next_arrival;
            store.next_arrival += 1;
            store.orders.insert(
                order.id,
                StoredOrder {
                    order: order.clone(),
                    arrival,
                },
            );
        }

        Ok(())
    }
}
