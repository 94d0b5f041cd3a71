//! End-to-end matching scenarios through the order book service

use std::sync::Arc;

use chrono::Duration;
use floe_book::{InMemoryOrderRepository, OrderBookService, OrderRequest};
use floe_clock::ManualClock;
use floe_core::Side;
use rust_decimal_macros::dec;

fn service() -> OrderBookService<InMemoryOrderRepository, ManualClock> {
    let _ = env_logger::builder().is_test(true).try_init();
    OrderBookService::new(
        Arc::new(InMemoryOrderRepository::new()),
        Arc::new(ManualClock::stepping(Duration::seconds(1))),
    )
}

#[test]
fn test_buy_limit_fills_against_cheaper_resting_sell() {
    let service = service();
    let resting = service
        .submit(OrderRequest::limit(Side::Sell, dec!(95), dec!(10)))
        .unwrap()
        .order;

    let report = service
        .submit(OrderRequest::limit(Side::Buy, dec!(100), dec!(10)))
        .unwrap();

    assert_eq!(report.executions.len(), 1);
    let execution = &report.executions[0];
    assert_eq!(execution.price, dec!(95));
    assert_eq!(execution.quantity, dec!(10));
    assert_eq!(execution.buy_order_id, report.order.id);
    assert_eq!(execution.sell_order_id, resting.id);

    assert!(report.is_filled());
    assert!(report.buy_orders.is_empty());
    assert!(report.sell_orders.is_empty());
    assert_eq!(service.repository().get(resting.id).unwrap().quantity, dec!(0));
}

#[test]
fn test_buy_limit_sweeps_two_price_levels() {
    let service = service();
    let older = service
        .submit(OrderRequest::limit(Side::Sell, dec!(95), dec!(10)))
        .unwrap()
        .order;
    let newer = service
        .submit(OrderRequest::limit(Side::Sell, dec!(97), dec!(10)))
        .unwrap()
        .order;

    let report = service
        .submit(OrderRequest::limit(Side::Buy, dec!(100), dec!(15)))
        .unwrap();

    let fills: Vec<_> = report
        .executions
        .iter()
        .map(|e| (e.sell_order_id, e.price, e.quantity))
        .collect();
    assert_eq!(
        fills,
        vec![(older.id, dec!(95), dec!(10)), (newer.id, dec!(97), dec!(5))]
    );
    assert!(report.is_filled());
    assert_eq!(report.sell_orders.len(), 1);
    assert_eq!(report.sell_orders[0].id, newer.id);
    assert_eq!(report.sell_orders[0].quantity, dec!(5));
}

#[test]
fn test_sell_iceberg_fills_resting_buy_in_three_peaks() {
    let service = service();
    let resting = service
        .submit(OrderRequest::limit(Side::Buy, dec!(55), dec!(30)))
        .unwrap()
        .order;

    let report = service
        .submit(OrderRequest::iceberg(Side::Sell, dec!(50), dec!(30), dec!(10)))
        .unwrap();

    assert_eq!(report.executions.len(), 3);
    assert!(report
        .executions
        .iter()
        .all(|e| e.price == dec!(55) && e.quantity == dec!(10) && e.buy_order_id == resting.id));
    assert!(report.is_filled());
    assert!(report.buy_orders.is_empty());
    assert!(report.sell_orders.is_empty());
}

#[test]
fn test_buy_limit_takes_one_peak_of_resting_iceberg() {
    let service = service();
    let iceberg = service
        .submit(OrderRequest::iceberg(Side::Sell, dec!(50), dec!(20), dec!(5)))
        .unwrap()
        .order;

    let report = service
        .submit(OrderRequest::limit(Side::Buy, dec!(50), dec!(5)))
        .unwrap();

    assert_eq!(report.executions.len(), 1);
    assert_eq!(report.executions[0].price, dec!(50));
    assert_eq!(report.executions[0].quantity, dec!(5));
    assert_eq!(report.sell_orders.len(), 1);
    assert_eq!(report.sell_orders[0].id, iceberg.id);
    assert_eq!(report.sell_orders[0].quantity, dec!(15));

    // Still tradable, one peak at a time, on the next pass
    let next = service
        .submit(OrderRequest::limit(Side::Buy, dec!(50), dec!(7)))
        .unwrap();
    let quantities: Vec<_> = next.executions.iter().map(|e| e.quantity).collect();
    assert_eq!(quantities, vec![dec!(5), dec!(2)]);
    assert_eq!(next.sell_orders[0].quantity, dec!(8));
}

#[test]
fn test_no_liquidity_rests_order_unchanged() {
    let service = service();

    let report = service
        .submit(OrderRequest::iceberg(Side::Buy, dec!(40), dec!(12), dec!(4)))
        .unwrap();

    assert!(report.executions.is_empty());
    assert_eq!(report.buy_orders, vec![report.order.clone()]);
    assert_eq!(report.order.quantity, dec!(12));
    assert!(report.sell_orders.is_empty());
}

#[test]
fn test_price_limit_excludes_worse_resting_orders() {
    let service = service();
    service
        .submit(OrderRequest::limit(Side::Sell, dec!(101), dec!(10)))
        .unwrap();

    let report = service
        .submit(OrderRequest::limit(Side::Buy, dec!(100), dec!(10)))
        .unwrap();

    assert!(report.executions.is_empty());
    assert_eq!(report.best_bid_and_ask(), (Some(dec!(100)), Some(dec!(101))));
}

#[test]
fn test_partial_fill_leaves_remainder_resting() {
    let service = service();
    service
        .submit(OrderRequest::limit(Side::Buy, dec!(20), dec!(4)))
        .unwrap();

    let report = service
        .submit(OrderRequest::limit(Side::Sell, dec!(19), dec!(10)))
        .unwrap();

    assert_eq!(report.executions.len(), 1);
    assert_eq!(report.executions[0].price, dec!(20));
    assert_eq!(report.order.quantity, dec!(6));
    assert!(report.buy_orders.is_empty());
    assert_eq!(report.sell_orders, vec![report.order.clone()]);
}

#[test]
fn test_iceberg_loses_time_priority_between_peaks() {
    let service = service();
    let iceberg = service
        .submit(OrderRequest::iceberg(Side::Sell, dec!(50), dec!(10), dec!(4)))
        .unwrap()
        .order;
    let limit = service
        .submit(OrderRequest::limit(Side::Sell, dec!(50), dec!(3)))
        .unwrap()
        .order;

    let report = service
        .submit(OrderRequest::limit(Side::Buy, dec!(50), dec!(9)))
        .unwrap();

    let fills: Vec<_> = report
        .executions
        .iter()
        .map(|e| (e.sell_order_id, e.quantity))
        .collect();
    assert_eq!(
        fills,
        vec![(iceberg.id, dec!(4)), (limit.id, dec!(3)), (iceberg.id, dec!(2))]
    );
    assert_eq!(report.sell_orders.len(), 1);
    assert_eq!(report.sell_orders[0].quantity, dec!(4));
}

#[test]
fn test_book_snapshot_is_idempotent() {
    let service = service();
    service
        .submit(OrderRequest::limit(Side::Buy, dec!(10), dec!(1)))
        .unwrap();
    service
        .submit(OrderRequest::iceberg(Side::Sell, dec!(12), dec!(9), dec!(3)))
        .unwrap();

    let first = service.book().unwrap();
    let second = service.book().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.best_bid(), Some(dec!(10)));
    assert_eq!(first.best_ask(), Some(dec!(12)));
}
