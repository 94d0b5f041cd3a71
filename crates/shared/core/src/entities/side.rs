use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::values::Price;

/// Order direction (Buy or Sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Compare two resting prices on this side of the book.
    ///
    /// `Ordering::Less` means `a` has priority over `b`: the highest bid
    /// and the lowest ask come first.
    pub fn price_priority(&self, a: Price, b: Price) -> Ordering {
        match self {
            Side::Buy => b.cmp(&a),
            Side::Sell => a.cmp(&b),
        }
    }
}
