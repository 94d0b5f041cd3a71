use floe_core::{Execution, Quantity};
use log::debug;

/// Collects executions in the order liquidity was consumed
#[derive(Debug, Default)]
pub struct TradeRecorder {
    executions: Vec<Execution>,
}

impl TradeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, execution: Execution) {
        debug!(
            "Execution #{}: buy={} sell={} price={} qty={}",
            self.executions.len() + 1,
            execution.buy_order_id,
            execution.sell_order_id,
            execution.price,
            execution.quantity
        );
        self.executions.push(execution);
    }

    pub fn executions(&self) -> &[Execution] {
        &self.executions
    }

    pub fn len(&self) -> usize {
        self.executions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executions.is_empty()
    }

    /// Sum of all recorded quantities
    pub fn total_quantity(&self) -> Quantity {
        self.executions.iter().map(|e| e.quantity).sum()
    }

    pub fn into_executions(self) -> Vec<Execution> {
        self.executions
    }
}
