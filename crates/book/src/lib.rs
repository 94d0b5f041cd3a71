//! Floe Order Book Service
//!
//! Application layer around the matching engine:
//!
//! - **Submission**: validates an [`OrderRequest`], stamps it with an id and
//!   arrival time, and runs one matching pass
//! - **Snapshot**: the resting orders on both sides after the pass
//! - **Repository**: an in-memory [`OrderRepository`] implementation
//!
//! # Example
//!
//! ```ignore
//! use floe_book::{InMemoryOrderRepository, OrderBookService, OrderRequest};
//! use floe_clock::SystemClock;
//! use floe_core::Side;
//! use rust_decimal_macros::dec;
//! use std::sync::Arc;
//!
//! let service = OrderBookService::new(
//!     Arc::new(InMemoryOrderRepository::new()),
//!     Arc::new(SystemClock::new()),
//! );
//! service.submit(OrderRequest::limit(Side::Sell, dec!(95), dec!(10)))?;
//! let report = service.submit(OrderRequest::limit(Side::Buy, dec!(100), dec!(10)))?;
//! assert_eq!(report.executions[0].price, dec!(95));
//! ```

pub mod error;
pub mod repository;
pub mod request;
pub mod service;
pub mod snapshot;

pub use error::{Result, ServiceError};
pub use repository::InMemoryOrderRepository;
pub use request::OrderRequest;
pub use service::OrderBookService;
pub use snapshot::{BookSnapshot, MatchReport};

// Re-export port traits for integration tests
pub use floe_ports::{Clock, OrderRepository, PriceFilter, RepositoryError};
