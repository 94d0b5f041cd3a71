use std::sync::Arc;

use floe_core::{Order, OrderValidationError};
use floe_matching::MatchingEngine;
use floe_ports::{Clock, OrderRepository};
use log::{info, warn};
use parking_lot::Mutex;

use crate::error::{Result, ServiceError};
use crate::request::OrderRequest;
use crate::snapshot::{BookSnapshot, MatchReport};

/// Entry point for submitting orders to a single book
///
/// Matching passes are serialized: a pass reads resting quantities, works on
/// them in memory and persists at the end, so two concurrent passes over the
/// same book would corrupt quantity accounting.
pub struct OrderBookService<R, C>
where
    R: OrderRepository + ?Sized,
    C: Clock + ?Sized,
{
    engine: MatchingEngine<R>,
    clock: Arc<C>,
    pass_lock: Mutex<()>,
}

impl<R, C> OrderBookService<R, C>
where
    R: OrderRepository + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            engine: MatchingEngine::new(repository),
            clock,
            pass_lock: Mutex::new(()),
        }
    }

    /// Get reference to the underlying repository
    pub fn repository(&self) -> &Arc<R> {
        self.engine.repository()
    }

    /// Validate a request, stamp it with the current time and match it
    pub fn submit(&self, request: OrderRequest) -> Result<MatchReport> {
        let order = request.into_order(self.clock.now()).map_err(|e| {
            warn!("Rejected order request: {}", e);
            ServiceError::from(e)
        })?;
        self.submit_order(order)
    }

    /// Match an already constructed order against the book.
    ///
    /// Returns the executions in the order they happened together with the
    /// refreshed book. On error nothing from this pass was persisted, except
    /// that a repository failure during the final write may leave the book in
    /// an unknown state.
    pub fn submit_order(&self, order: Order) -> Result<MatchReport> {
        order.validate()?;
        if !order.is_active() {
            return Err(OrderValidationError::NonPositiveQuantity(order.quantity).into());
        }

        let _pass = self.pass_lock.lock();
        let outcome = self.engine.execute(order).map_err(|e| {
            warn!("Matching pass aborted: {}", e);
            ServiceError::from(e)
        })?;

        let book = BookSnapshot::capture(self.engine.repository().as_ref())?;
        info!(
            "Book after order {}: {} bids, {} asks",
            outcome.incoming.id,
            book.buy_orders.len(),
            book.sell_orders.len()
        );

        Ok(MatchReport::new(outcome.incoming, outcome.executions, book))
    }

    /// Current resting orders on both sides, without matching anything
    pub fn book(&self) -> Result<BookSnapshot> {
        let _pass = self.pass_lock.lock();
        Ok(BookSnapshot::capture(self.engine.repository().as_ref())?)
    }
}
