//! Cycle start by reachability from the collision point.
//!
//! Once Floyd's algorithm has produced a node on the cycle, walk the list
//! from the head and, for each candidate, go once around the cycle looking
//! for a node whose successor is the candidate. The first candidate found
//! this way is where the cycle begins. \( O(n \cdot k) \) time for a cycle
//! of length \( k \), \( O(1) \) extra space.

use log::debug;
use std::rc::Rc;

use super::floyd_cycle::find_collision_point;
use super::node::{next_of, Link};

/// Returns the first node of the cycle, or `None` if the list has no cycle.
///
/// # Examples
/// ```
/// use cycle_start::{build_list, find_cycle_start_by_reachability};
///
/// let (head, _) = build_list(vec![1, 2, 3, 4, 5], Some(2)).unwrap();
/// let start = find_cycle_start_by_reachability(&head).unwrap();
/// assert_eq!(start.borrow().data, 3);
/// ```
///
/// # Complexity
/// * Time: O(n * k) where k is the cycle length
/// * Space: O(1)
pub fn find_cycle_start_by_reachability<T>(head: &Link<T>) -> Link<T> {
    let loop_node = find_collision_point(head)?;
    let mut candidate = head.clone()?;
    let mut offset = 0usize;

    loop {
        // Go around the cycle once, stopping early at a predecessor of the
        // candidate.
        let mut walker = Rc::clone(&loop_node);
        let mut successor = next_of(&walker)?;
        while !Rc::ptr_eq(&successor, &loop_node) && !Rc::ptr_eq(&successor, &candidate) {
            walker = successor;
            successor = next_of(&walker)?;
        }

        if Rc::ptr_eq(&successor, &candidate) {
            debug!("cycle start found {offset} nodes from the head");
            return Some(candidate);
        }

        candidate = next_of(&candidate)?;
        offset += 1;
    }
}
