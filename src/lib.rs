//! Locate the node where a cycle begins in a singly linked list.
//!
//! Three interchangeable algorithms are provided, all built on Floyd's
//! tortoise and hare except the visited-set variant:
//!
//! | Function | Time | Extra space |
//! |---|---|---|
//! | [`find_cycle_start_by_reachability`] | O(n * k) | O(1) |
//! | [`find_cycle_start_by_visited_set`] | O(n) | O(n) |
//! | [`find_cycle_start_by_cycle_length`] | O(n) | O(1) |
//!
//! [`CycleStartStrategy`] selects between them at runtime.

pub mod cs;
pub mod error;

pub use cs::linked_list;
pub use cs::linked_list::*;
pub use error::{ListError, Result};
