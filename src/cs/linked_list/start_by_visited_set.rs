//! Cycle start by remembering every visited node.
//!
//! The first node reached twice on a walk from the head is the node where
//! the cycle re-enters itself. \( O(n) \) time, \( O(n) \) extra space for the
//! set of visited node identities.

use log::{debug, trace};
use std::collections::HashSet;
use std::rc::Rc;

use super::node::{next_of, Link};

/// Returns the first node of the cycle, or `None` if the list has no cycle.
///
/// Nodes are keyed by their allocation address, so two nodes with equal data
/// are still distinct entries.
///
/// # Examples
/// ```
/// use cycle_start::{build_list, find_cycle_start_by_visited_set};
///
/// let (head, _) = build_list(vec![1, 2, 3, 4, 5], Some(2)).unwrap();
/// let start = find_cycle_start_by_visited_set(&head).unwrap();
/// assert_eq!(start.borrow().data, 3);
///
/// let (head, _) = build_list(vec![1, 2, 3], None).unwrap();
/// assert!(find_cycle_start_by_visited_set(&head).is_none());
/// ```
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(n)
pub fn find_cycle_start_by_visited_set<T>(head: &Link<T>) -> Link<T> {
    let mut visited = HashSet::new();
    let mut cursor = head.clone();

    // Falling off the end means the list is acyclic.
    while let Some(node) = cursor {
        if !visited.insert(Rc::as_ptr(&node)) {
            debug!("cycle start found after visiting {} nodes", visited.len());
            return Some(node);
        }
        cursor = next_of(&node);
    }

    trace!("reached the end after {} nodes, no cycle", visited.len());
    None
}
