use std::sync::Arc;

use floe_core::Order;
use floe_ports::{MatchingResult, OrderRepository, PriceFilter};
use log::info;

use crate::{MatchOutcome, MatchPass};

/// Runs matching passes against an order repository
///
/// A pass queries the opposite side once, matches in memory, then persists
/// every changed order in a single call. Nothing is written if the pass
/// fails. Callers must not run two passes over the same book at once.
pub struct MatchingEngine<R: OrderRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: OrderRepository + ?Sized> MatchingEngine<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Get reference to the underlying repository
    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Match `incoming` against the book and persist the result
    pub fn execute(&self, incoming: Order) -> MatchingResult<MatchOutcome> {
        let filter = PriceFilter::for_incoming(&incoming);
        let resting = self.repository.query_orders(incoming.side.opposite(), filter)?;

        if resting.is_empty() {
            info!(
                "No liquidity for order {} ({:?} {} @ {}), resting unmatched",
                incoming.id, incoming.side, incoming.quantity, incoming.price
            );
            self.repository.persist_orders(std::slice::from_ref(&incoming))?;
            return Ok(MatchOutcome::unmatched(incoming));
        }

        let outcome = MatchPass::run(incoming, resting)?;
        self.repository.persist_orders(&outcome.orders_to_persist())?;

        info!(
            "Order {} matched {} in {} executions, {} remaining",
            outcome.incoming.id,
            outcome.filled_quantity(),
            outcome.executions.len(),
            outcome.incoming.quantity
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use floe_core::{Side, Timestamp};
    use floe_ports::{MatchingError, RepositoryError, RepositoryResult};
    use parking_lot::Mutex;
    use rust_decimal_macros::dec;

    fn at(seconds: i64) -> Timestamp {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::seconds(seconds)
    }

    /// Serves a fixed query result and records every persist call
    #[derive(Default)]
    struct ScriptedRepository {
        resting: Vec<Order>,
        queries: Mutex<Vec<(Side, PriceFilter)>>,
        persisted: Mutex<Vec<Vec<Order>>>,
        fail_persist: bool,
    }

    impl OrderRepository for ScriptedRepository {
        fn query_orders(&self, side: Side, filter: PriceFilter) -> RepositoryResult<Vec<Order>> {
            self.queries.lock().push((side, filter));
            Ok(self.resting.clone())
        }

        fn persist_orders(&self, orders: &[Order]) -> RepositoryResult<()> {
            if self.fail_persist {
                return Err(RepositoryError::Unavailable("disk full".to_string()));
            }
            self.persisted.lock().push(orders.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_queries_opposite_side_once() {
        let resting = Order::limit(Side::Sell, dec!(95), dec!(10), at(0)).unwrap();
        let repo = Arc::new(ScriptedRepository {
            resting: vec![resting],
            ..Default::default()
        });
        let engine = MatchingEngine::new(Arc::clone(&repo));

        let incoming = Order::limit(Side::Buy, dec!(100), dec!(10), at(1)).unwrap();
        engine.execute(incoming).unwrap();

        assert_eq!(
            *repo.queries.lock(),
            vec![(Side::Sell, PriceFilter::Limit(dec!(100)))]
        );
    }

    #[test]
    fn test_persists_touched_orders_then_incoming_in_one_call() {
        let resting = Order::limit(Side::Sell, dec!(95), dec!(10), at(0)).unwrap();
        let repo = Arc::new(ScriptedRepository {
            resting: vec![resting.clone()],
            ..Default::default()
        });
        let engine = MatchingEngine::new(Arc::clone(&repo));

        let incoming = Order::limit(Side::Buy, dec!(100), dec!(4), at(1)).unwrap();
        let outcome = engine.execute(incoming.clone()).unwrap();

        let persisted = repo.persisted.lock();
        assert_eq!(persisted.len(), 1);
        let ids: Vec<_> = persisted[0].iter().map(|o| (o.id, o.quantity)).collect();
        assert_eq!(ids, vec![(resting.id, dec!(6)), (incoming.id, dec!(0))]);
        assert_eq!(outcome.executions.len(), 1);
    }

    #[test]
    fn test_empty_book_persists_incoming_unchanged() {
        let repo = Arc::new(ScriptedRepository::default());
        let engine = MatchingEngine::new(Arc::clone(&repo));

        let incoming = Order::iceberg(Side::Sell, dec!(50), dec!(30), dec!(10), at(0)).unwrap();
        let outcome = engine.execute(incoming.clone()).unwrap();

        assert!(outcome.executions.is_empty());
        assert_eq!(*repo.persisted.lock(), vec![vec![incoming]]);
    }

    #[test]
    fn test_invariant_violation_persists_nothing() {
        // A repository handing back the wrong side is a collaborator bug
        let wrong_side = Order::limit(Side::Buy, dec!(95), dec!(10), at(0)).unwrap();
        let repo = Arc::new(ScriptedRepository {
            resting: vec![wrong_side],
            ..Default::default()
        });
        let engine = MatchingEngine::new(Arc::clone(&repo));

        let incoming = Order::limit(Side::Buy, dec!(100), dec!(10), at(1)).unwrap();
        let result = engine.execute(incoming);

        assert!(matches!(result, Err(MatchingError::InvariantViolation(_))));
        assert!(repo.persisted.lock().is_empty());
    }

    #[test]
    fn test_persist_failure_propagates() {
        let resting = Order::limit(Side::Sell, dec!(95), dec!(10), at(0)).unwrap();
        let repo = Arc::new(ScriptedRepository {
            resting: vec![resting],
            fail_persist: true,
            ..Default::default()
        });
        let engine = MatchingEngine::new(repo);

        let incoming = Order::limit(Side::Buy, dec!(100), dec!(10), at(1)).unwrap();
        assert_eq!(
            engine.execute(incoming),
            Err(MatchingError::Repository(RepositoryError::Unavailable(
                "disk full".to_string()
            )))
        );
    }
}
