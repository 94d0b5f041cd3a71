use std::cmp::Ordering;

use floe_core::{Order, Price, Quantity, Side, Slice};
use floe_ports::{MatchingError, MatchingResult};
use log::{debug, trace};
use priority_queue::PriorityQueue;
use rust_decimal::Decimal;

/// Queue position of a disclosed slice.
///
/// Better resting price wins; equal prices fall back to the disclosure
/// sequence, so a slice revealed in a later round yields to every slice at
/// the same price revealed before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlicePriority {
    resting_side: Side,
    price: Price,
    sequence: u64,
}

impl SlicePriority {
    fn of(slice: &Slice) -> Self {
        Self {
            resting_side: slice.direction,
            price: slice.price,
            sequence: slice.sequence,
        }
    }
}

impl Ord for SlicePriority {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap: the slice to trade first must compare greatest
        self.resting_side
            .price_priority(self.price, other.price)
            .reverse()
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for SlicePriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of slices disclosed from the resting side of the book
pub struct DisclosureQueue {
    slices: PriorityQueue<Slice, SlicePriority>,
    rounds: usize,
}

impl DisclosureQueue {
    /// Disclose `resting` orders to an incoming order on `incoming_side`.
    ///
    /// `resting` must be the opposite side, already in price-time order.
    /// Each round every order with undisclosed quantity reveals one chunk:
    /// a limit order its whole remainder, an iceberg order at most its
    /// peak. Rounds repeat until nothing is left to disclose. The orders
    /// themselves are not modified.
    pub fn build(resting: &[Order], incoming_side: Side) -> MatchingResult<Self> {
        let resting_side = incoming_side.opposite();
        for order in resting {
            if order.side != resting_side {
                return Err(MatchingError::InvariantViolation(format!(
                    "order {} is on the {:?} side, expected {:?}",
                    order.id, order.side, resting_side
                )));
            }
            order
                .validate()
                .map_err(|e| MatchingError::InvariantViolation(format!("order {}: {}", order.id, e)))?;
        }

        let mut undisclosed: Vec<Quantity> = resting.iter().map(|o| o.quantity).collect();
        let mut slices = PriorityQueue::with_capacity(resting.len());
        let mut sequence = 0u64;
        let mut rounds = 0;

        while undisclosed.iter().any(|q| *q > Decimal::ZERO) {
            rounds += 1;
            let mut shown_this_round = 0usize;

            for (order, remaining) in resting.iter().zip(undisclosed.iter_mut()) {
                if *remaining <= Decimal::ZERO {
                    continue;
                }

                let shown = order.disclosure_of(*remaining);
                *remaining -= shown;

                let slice = Slice {
                    source_order_id: order.id,
                    price: order.price,
                    quantity: shown,
                    direction: order.side,
                    sequence,
                };
                trace!(
                    "Round {}: disclosed {} of order {} at {} (seq {})",
                    rounds, shown, order.id, order.price, sequence
                );
                let priority = SlicePriority::of(&slice);
                slices.push(slice, priority);
                sequence += 1;
                shown_this_round += 1;
            }

            debug!("Disclosure round {} revealed {} slices", rounds, shown_this_round);
        }

        Ok(Self { slices, rounds })
    }

    /// Take the next slice in priority order
    pub fn pop(&mut self) -> Option<Slice> {
        self.slices.pop().map(|(slice, _)| slice)
    }

    /// Number of slices still queued
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Number of disclosure rounds it took to reveal every order
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

impl Iterator for DisclosureQueue {
    type Item = Slice;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop()
    }
}
