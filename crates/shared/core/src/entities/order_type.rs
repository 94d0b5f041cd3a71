use serde::{Deserialize, Serialize};

/// Order types supported by the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Shows its whole remaining quantity
    Limit,
    /// Shows at most `peak` of its remaining quantity at a time
    Iceberg,
}
