//! Book worker
//!
//! A single blocking task owns the [`OrderBookService`] and drains a bounded
//! command channel, so every submission against the book runs one after the
//! other. Callers talk to it through a cloneable [`BookHandle`] and receive
//! results on oneshot channels.

use floe_book::{BookSnapshot, Clock, MatchReport, OrderBookService, OrderRepository, OrderRequest};
use log::{debug, info};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::error::{Result, RunnerError};

/// Commands understood by the book worker
#[derive(Debug)]
pub enum BookCommand {
    /// Match an order and reply with the resulting report
    Submit {
        request: OrderRequest,
        response: oneshot::Sender<floe_book::Result<MatchReport>>,
    },

    /// Reply with the current resting orders
    Snapshot {
        response: oneshot::Sender<floe_book::Result<BookSnapshot>>,
    },

    /// Stop after the commands already queued ahead of this one
    Shutdown,
}

/// Counters reported by the worker when it stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub accepted: u64,
    pub rejected: u64,
    pub executions: u64,
}

/// Handle to communicate with a running book worker
#[derive(Debug, Clone)]
pub struct BookHandle {
    sender: mpsc::Sender<BookCommand>,
}

impl BookHandle {
    /// Submit an order and wait for its match report
    pub async fn submit(&self, request: OrderRequest) -> Result<MatchReport> {
        let (response, reply) = oneshot::channel();
        self.send(BookCommand::Submit { request, response }).await?;
        Ok(reply.await.map_err(|_| RunnerError::WorkerClosed)??)
    }

    /// Read both sides of the book
    pub async fn snapshot(&self) -> Result<BookSnapshot> {
        let (response, reply) = oneshot::channel();
        self.send(BookCommand::Snapshot { response }).await?;
        Ok(reply.await.map_err(|_| RunnerError::WorkerClosed)??)
    }

    /// Ask the worker to stop once it has drained earlier commands
    pub async fn shutdown(&self) -> Result<()> {
        self.send(BookCommand::Shutdown).await
    }

    async fn send(&self, command: BookCommand) -> Result<()> {
        self.sender
            .send(command)
            .await
            .map_err(|_| RunnerError::WorkerClosed)
    }
}

/// Owns the book and processes commands sequentially
pub struct BookWorker<R, C>
where
    R: OrderRepository + ?Sized,
    C: Clock + ?Sized,
{
    name: String,
    service: OrderBookService<R, C>,
    receiver: mpsc::Receiver<BookCommand>,
    stats: WorkerStats,
}

impl<R, C> BookWorker<R, C>
where
    R: OrderRepository + ?Sized + 'static,
    C: Clock + ?Sized + 'static,
{
    /// Start a worker on the blocking pool and return its handle.
    ///
    /// The join handle resolves with the worker's counters once it stops,
    /// either on [`BookCommand::Shutdown`] or when every handle is dropped.
    pub fn spawn(
        name: impl Into<String>,
        service: OrderBookService<R, C>,
        command_buffer_size: usize,
    ) -> (BookHandle, JoinHandle<WorkerStats>) {
        let (sender, receiver) = mpsc::channel(command_buffer_size.max(1));
        let worker = Self {
            name: name.into(),
            service,
            receiver,
            stats: WorkerStats::default(),
        };

        let task = tokio::task::spawn_blocking(move || worker.run());
        (BookHandle { sender }, task)
    }

    fn run(mut self) -> WorkerStats {
        info!("Book worker '{}' started", self.name);

        while let Some(command) = self.receiver.blocking_recv() {
            if !self.process_command(command) {
                break;
            }
        }

        info!(
            "Book worker '{}' stopped: {} accepted, {} rejected, {} executions",
            self.name, self.stats.accepted, self.stats.rejected, self.stats.executions
        );
        self.stats
    }

    /// Process a single command, returns false if the worker should stop
    fn process_command(&mut self, command: BookCommand) -> bool {
        match command {
            BookCommand::Submit { request, response } => {
                let result = self.service.submit(request);
                match &result {
                    Ok(report) => {
                        self.stats.accepted += 1;
                        self.stats.executions += report.executions.len() as u64;
                    }
                    Err(_) => self.stats.rejected += 1,
                }
                if response.send(result).is_err() {
                    debug!("Submitter went away before the report was delivered");
                }
            }
            BookCommand::Snapshot { response } => {
                let _ = response.send(self.service.book());
            }
            BookCommand::Shutdown => return false,
        }
        true
    }
}
