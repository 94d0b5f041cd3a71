mod execution;
mod order;
mod order_type;
mod side;
mod slice;

pub use execution::Execution;
pub use order::{Order, OrderId};
pub use order_type::OrderType;
pub use side::Side;
pub use slice::Slice;
