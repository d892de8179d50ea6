pub mod floyd_cycle;
pub mod node;
pub mod start_by_cycle_length;
pub mod start_by_reachability;
pub mod start_by_visited_set;
pub mod strategy;

pub use floyd_cycle::{cycle_length, find_collision_point, has_cycle};
pub use node::{build_list, next_of, same_node, Link, ListNode, NodeRef};
pub use start_by_cycle_length::find_cycle_start_by_cycle_length;
pub use start_by_reachability::find_cycle_start_by_reachability;
pub use start_by_visited_set::find_cycle_start_by_visited_set;
pub use strategy::CycleStartStrategy;
