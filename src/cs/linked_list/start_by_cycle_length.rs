//! Cycle start from the collision point and the cycle length.
//!
//! 1. Detect the cycle with Floyd's algorithm and keep the meeting node.
//! 2. Count the nodes in the cycle, \( k \).
//! 3. Put one cursor at the head and another \( k \) nodes ahead of it.
//! 4. Move both one node at a time; they meet at the start of the cycle.
//!
//! \( O(n) \) time, \( O(1) \) extra space.

use log::debug;
use std::rc::Rc;

use super::floyd_cycle::{find_collision_point, lap_length};
use super::node::{next_of, Link};

/// Returns the first node of the cycle, or `None` if the list has no cycle.
///
/// # Examples
/// ```
/// use cycle_start::{build_list, find_cycle_start_by_cycle_length};
///
/// let (head, _) = build_list(vec![1, 2, 3, 4, 5], Some(2)).unwrap();
/// let start = find_cycle_start_by_cycle_length(&head).unwrap();
/// assert_eq!(start.borrow().data, 3);
/// ```
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(1)
pub fn find_cycle_start_by_cycle_length<T>(head: &Link<T>) -> Link<T> {
    let loop_node = find_collision_point(head)?;
    let k = lap_length(&loop_node);

    let mut behind = head.clone()?;
    let mut ahead = Rc::clone(&behind);
    for _ in 0..k {
        ahead = next_of(&ahead)?;
    }

    let mut offset = 0usize;
    while !Rc::ptr_eq(&behind, &ahead) {
        behind = next_of(&behind)?;
        ahead = next_of(&ahead)?;
        offset += 1;
    }

    debug!("cycle of length {k} starts {offset} nodes from the head");
    Some(behind)
}
