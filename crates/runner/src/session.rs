//! Line-oriented driving of a book worker
//!
//! Each input line is one [`OrderPayload`]. Each output line is either a
//! [`MatchResponse`] or an [`ErrorResponse`]; a bad line never stops the
//! session, only a dead worker does.

use log::{info, warn};

use crate::error::{Result, RunnerError};
use crate::payload::{ErrorResponse, MatchResponse, OrderPayload};
use crate::worker::BookHandle;

/// Submit the configured seed orders, returning how many were accepted
pub async fn seed(handle: &BookHandle, orders: &[OrderPayload]) -> Result<usize> {
    let mut accepted = 0;
    for payload in orders {
        match handle.submit(payload.clone().into()).await {
            Ok(report) => {
                accepted += 1;
                info!(
                    "Seeded {:?} {:?} order {} ({} executions)",
                    report.order.order_type,
                    report.order.side,
                    report.order.id,
                    report.executions.len()
                );
            }
            Err(RunnerError::Service(err)) => warn!("Seed order rejected: {}", err),
            Err(err) => return Err(err),
        }
    }
    Ok(accepted)
}

/// Handle one input line and render the output line, if any.
///
/// Blank lines produce no output.
pub async fn handle_line(handle: &BookHandle, line: &str) -> Result<Option<String>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let payload = match OrderPayload::from_json(line) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("Malformed payload: {}", err);
            return render(&ErrorResponse::new(RunnerError::Payload(err))).map(Some);
        }
    };

    match handle.submit(payload.into()).await {
        Ok(report) => render(&MatchResponse::from(report)).map(Some),
        Err(RunnerError::Service(err)) => render(&ErrorResponse::new(err)).map(Some),
        Err(err) => Err(err),
    }
}

fn render<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
