//! The rope tree and the operations over it.

mod balance;
mod edit;
mod fragment;
mod map;
mod node;
mod query;

pub use balance::{rebalance, rotate_left, rotate_right};
pub use edit::{append, concat, delete_range, insert, prepend, split_at};
pub use map::RopeMap;
pub use node::Rope;
pub use query::Chunks;
