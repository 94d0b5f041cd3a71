use std::collections::HashMap;

use floe_core::{Execution, Order, OrderId, Quantity, Side, Slice};
use floe_ports::{MatchingError, MatchingResult};
use log::debug;
use rust_decimal::Decimal;

use crate::{DisclosureQueue, SourceSlicer, TradeRecorder};

/// Result of one matching pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Executions in the order liquidity was consumed
    pub executions: Vec<Execution>,
    /// The incoming order with its final remaining quantity
    pub incoming: Order,
    /// Resting orders that traded, in first-touch order
    pub touched: Vec<Order>,
}

impl MatchOutcome {
    /// Outcome for an order that found nothing to trade against
    pub fn unmatched(incoming: Order) -> Self {
        Self {
            executions: Vec::new(),
            incoming,
            touched: Vec::new(),
        }
    }

    /// Everything the pass changed: touched resting orders, then the incoming order
    pub fn orders_to_persist(&self) -> Vec<Order> {
        let mut orders = Vec::with_capacity(self.touched.len() + 1);
        orders.extend(self.touched.iter().cloned());
        orders.push(self.incoming.clone());
        orders
    }

    /// Total quantity traded by the incoming order
    pub fn filled_quantity(&self) -> Quantity {
        self.executions.iter().map(|e| e.quantity).sum()
    }
}

/// One incoming order matched against a snapshot of the opposite side.
///
/// The pass never talks to storage. It keeps its own authoritative copy of
/// every resting order, separate from the quantities staged in the
/// disclosure queue, and reports what changed.
pub struct MatchPass {
    incoming: Order,
    book: HashMap<OrderId, Order>,
    touched: Vec<OrderId>,
    recorder: TradeRecorder,
}

impl MatchPass {
    /// Match `incoming` against `resting`, which must be the opposite side in
    /// price-time order
    pub fn run(incoming: Order, resting: Vec<Order>) -> MatchingResult<MatchOutcome> {
        let mut targets = DisclosureQueue::build(&resting, incoming.side)?;
        debug!(
            "Matching order {} ({:?} {} @ {}) against {} slices from {} resting orders",
            incoming.id,
            incoming.side,
            incoming.quantity,
            incoming.price,
            targets.len(),
            resting.len()
        );

        let mut pass = Self {
            incoming,
            book: resting.into_iter().map(|o| (o.id, o)).collect(),
            touched: Vec::new(),
            recorder: TradeRecorder::new(),
        };
        let mut slicer = SourceSlicer::new();
        let mut source: Option<Slice> = None;

        'queue: while let Some(mut target) = targets.pop() {
            loop {
                if source.as_ref().is_none_or(Slice::is_exhausted) {
                    source = slicer.next_slice(&pass.incoming);
                }
                let Some(current) = source.as_mut() else {
                    break 'queue;
                };
                if target.is_exhausted() {
                    break 'queue;
                }

                let quantity = target.quantity.min(current.quantity);
                take(&mut target, quantity)?;
                take(current, quantity)?;
                pass.trade(&target, quantity)?;

                if target.is_exhausted() {
                    continue 'queue;
                }
            }
        }

        Ok(pass.finish())
    }

    /// Apply a fill of `quantity` against the resting order behind `target`
    fn trade(&mut self, target: &Slice, quantity: Quantity) -> MatchingResult<()> {
        let resting = self.book.get_mut(&target.source_order_id).ok_or_else(|| {
            MatchingError::InvariantViolation(format!(
                "slice refers to unknown order {}",
                target.source_order_id
            ))
        })?;
        resting
            .fill(quantity)
            .map_err(|e| MatchingError::InvariantViolation(format!("resting order {}: {}", resting.id, e)))?;
        if !self.touched.contains(&resting.id) {
            self.touched.push(resting.id);
        }

        self.incoming.fill(quantity).map_err(|e| {
            MatchingError::InvariantViolation(format!("incoming order {}: {}", self.incoming.id, e))
        })?;

        let (buy_order_id, sell_order_id) = match self.incoming.side {
            Side::Buy => (self.incoming.id, target.source_order_id),
            Side::Sell => (target.source_order_id, self.incoming.id),
        };
        self.recorder
            .record(Execution::new(buy_order_id, sell_order_id, target.price, quantity));
        Ok(())
    }

    fn finish(mut self) -> MatchOutcome {
        let touched = self
            .touched
            .iter()
            .filter_map(|id| self.book.remove(id))
            .collect();

        MatchOutcome {
            executions: self.recorder.into_executions(),
            incoming: self.incoming,
            touched,
        }
    }
}

/// Decrement a slice, refusing to go below zero
fn take(slice: &mut Slice, quantity: Quantity) -> MatchingResult<()> {
    if quantity <= Decimal::ZERO || quantity > slice.quantity {
        return Err(MatchingError::InvariantViolation(format!(
            "cannot take {} from slice {} of order {} holding {}",
            quantity, slice.sequence, slice.source_order_id, slice.quantity
        )));
    }
    slice.quantity -= quantity;
    Ok(())
}
