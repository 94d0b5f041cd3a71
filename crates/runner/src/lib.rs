//! Floe Runner
//!
//! Drives a single order book from a stream of JSON order payloads:
//!
//! - **Config**: JSON file with the book name, log level, worker buffer size
//!   and seed orders
//! - **Worker**: one blocking task owns the book; submissions queue on a
//!   bounded channel and are matched strictly one at a time
//! - **Session**: turns payload lines into match responses or error lines
//!
//! # Example
//!
//! ```ignore
//! use floe_runner::{RunnerConfig, session, start};
//!
//! let (handle, worker) = start(&RunnerConfig::default());
//! let line = r#"{"type":"LIMIT","order":{"direction":"BUY","price":100,"quantity":10}}"#;
//! let output = session::handle_line(&handle, line).await?;
//! handle.shutdown().await?;
//! let stats = worker.await?;
//! ```

pub mod config;
pub mod error;
pub mod payload;
pub mod session;
pub mod worker;

use std::sync::Arc;

use floe_book::{InMemoryOrderRepository, OrderBookService};
use floe_clock::SystemClock;
use tokio::task::JoinHandle;

pub use config::{ConfigError, RunnerConfig};
pub use error::{Result, RunnerError};
pub use payload::{ErrorResponse, MatchResponse, OrderBody, OrderPayload};
pub use worker::{BookCommand, BookHandle, BookWorker, WorkerStats};

/// Start a book worker over an empty in-memory book stamped by the system clock
pub fn start(config: &RunnerConfig) -> (BookHandle, JoinHandle<WorkerStats>) {
    let service = OrderBookService::new(
        Arc::new(InMemoryOrderRepository::new()),
        Arc::new(SystemClock::new()),
    );
    BookWorker::spawn(config.name.clone(), service, config.command_buffer_size)
}
