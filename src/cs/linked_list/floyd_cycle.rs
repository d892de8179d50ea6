//! # Floyd's Cycle Detection (Tortoise and Hare)
//!
//! Two cursors walk the list from the head: slow advances by one node per
//! step, fast by two. If they ever reference the same node the list has a
//! cycle and that node lies on it. If fast runs off the end there is no
//! cycle. \( O(n) \) time, \( O(1) \) extra space.
//!
//! The meeting node is not, in general, the node where the cycle begins.
//! [`find_cycle_start_by_reachability`] and [`find_cycle_start_by_cycle_length`]
//! build on it to find the entry; [`find_cycle_start_by_visited_set`] does
//! without it.
//!
//! [`find_cycle_start_by_reachability`]: super::find_cycle_start_by_reachability
//! [`find_cycle_start_by_cycle_length`]: super::find_cycle_start_by_cycle_length
//! [`find_cycle_start_by_visited_set`]: super::find_cycle_start_by_visited_set
//!
//! ```rust
//! use cycle_start::{build_list, find_collision_point, has_cycle};
//!
//! let (head, _) = build_list(vec![1, 2, 3, 4, 5], Some(2)).unwrap();
//! assert!(has_cycle(&head));
//!
//! let meet = find_collision_point(&head).unwrap();
//! assert!([3, 4, 5].contains(&meet.borrow().data));
//! ```

use log::{debug, trace};
use std::rc::Rc;

use super::node::{next_of, Link, NodeRef};

/// Runs the tortoise and hare from `head` and returns the node where they
/// meet, or `None` if the list terminates.
///
/// The returned node is guaranteed to lie on the cycle.
pub fn find_collision_point<T>(head: &Link<T>) -> Link<T> {
    let mut slow = head.clone();
    let mut fast = head.clone();
    let mut steps = 0usize;

    while let (Some(s), Some(f)) = (slow.clone(), fast.clone()) {
        let Some(f1) = next_of(&f) else {
            break;
        };
        slow = next_of(&s);
        fast = next_of(&f1);
        steps += 1;

        if let (Some(s), Some(f)) = (&slow, &fast) {
            if Rc::ptr_eq(s, f) {
                debug!("slow and fast cursors met after {steps} steps");
                return Some(Rc::clone(f));
            }
        }
    }

    trace!("fast cursor reached the end after {steps} steps, no cycle");
    None
}

/// `true` when the slow and fast cursors meet, i.e. a walk from `head`
/// never reaches a `None` link.
pub fn has_cycle<T>(head: &Link<T>) -> bool {
    find_collision_point(head).is_some()
}

/// Number of nodes on the cycle that passes through `node`.
///
/// Returns `None` when `node` is not on a cycle: either a walk from it ends,
/// or it sits on the acyclic prefix leading into a cycle. At most one
/// tortoise and hare run plus one lap of the cycle.
pub fn cycle_length<T>(node: &NodeRef<T>) -> Option<usize> {
    let meet = find_collision_point(&Some(Rc::clone(node)))?;
    let k = lap_length(&meet);

    let mut cursor = meet;
    for _ in 0..k {
        if Rc::ptr_eq(&cursor, node) {
            return Some(k);
        }
        cursor = next_of(&cursor)?;
    }
    None
}

/// Steps taken to walk from `node` back around to itself, or 0 if the walk
/// reaches the end of the list. `node` must be a collision point.
pub(super) fn lap_length<T>(node: &NodeRef<T>) -> usize {
    let mut k = 1;
    let mut cursor = next_of(node);

    while let Some(current) = cursor {
        if Rc::ptr_eq(&current, node) {
            trace!("cycle length is {k}");
            return k;
        }
        k += 1;
        cursor = next_of(&current);
    }
    0
}
