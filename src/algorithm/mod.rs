pub mod buffer;
pub mod reachability;

pub use buffer::Buffer;
pub use reachability::{reachable_subgraph, ReachableSubgraph};
