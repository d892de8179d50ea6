//! # Singly-Linked List Nodes
//!
//! Nodes are shared through `Rc` and wired through `RefCell`, so a list can
//! loop back onto itself. Every algorithm in this crate compares nodes by
//! identity (`Rc::ptr_eq`), never by the data they carry.
//!
//! ```rust
//! use cycle_start::{build_list, find_cycle_start_by_cycle_length};
//! use std::rc::Rc;
//!
//! // 1 -> 2 -> 3 -> 4 -> 5 -> back to 3
//! let (head, nodes) = build_list(vec![1, 2, 3, 4, 5], Some(2)).unwrap();
//! let start = find_cycle_start_by_cycle_length(&head).unwrap();
//! assert!(Rc::ptr_eq(&start, &nodes[2]));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ListError, Result};

/// Shared handle to a node.
pub type NodeRef<T> = Rc<RefCell<ListNode<T>>>;

/// The `next` pointer of a node, or the head of a list.
pub type Link<T> = Option<NodeRef<T>>;

/// A singly-linked list node.
///
/// `next` is set once while the list is wired up and is only read after
/// that. A node that closes a cycle keeps its successor alive, so a cyclic
/// list is not reclaimed when its handles are dropped. Acyclic chains are
/// released iteratively, so long lists can be dropped without exhausting
/// the stack.
#[derive(Debug)]
pub struct ListNode<T> {
    pub data: T,
    pub next: Link<T>,
}

impl<T> ListNode<T> {
    /// An unlinked node; wire it up by assigning `next`.
    pub fn new(data: T) -> Self {
        ListNode { data, next: None }
    }

    /// Creates a new node already wrapped in a shared handle.
    pub fn new_ref(data: T) -> NodeRef<T> {
        Rc::new(RefCell::new(ListNode::new(data)))
    }
}

impl<T> Drop for ListNode<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(cell) => next = cell.into_inner().next.take(),
                // Still reachable from elsewhere, the other owner frees it.
                Err(_) => break,
            }
        }
    }
}

/// Returns the successor of `node`.
#[inline]
pub fn next_of<T>(node: &NodeRef<T>) -> Link<T> {
    node.borrow().next.clone()
}

/// Returns `true` when both links are empty or both point at the same node.
#[inline]
pub fn same_node<T>(a: &Link<T>, b: &Link<T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Builds a list from `values`, linked in order.
///
/// With `cycle_entry = Some(i)` the last node points back at node `i`,
/// closing a cycle of length `values.len() - i`. Returns the head together
/// with a handle to every node, in list order, so callers can check results
/// by identity.
///
/// # Errors
/// * `ListError::EntryOutOfBounds` - if `i >= values.len()`
pub fn build_list<T, I>(values: I, cycle_entry: Option<usize>) -> Result<(Link<T>, Vec<NodeRef<T>>)>
where
    I: IntoIterator<Item = T>,
{
    let nodes: Vec<NodeRef<T>> = values.into_iter().map(ListNode::new_ref).collect();

    if let Some(index) = cycle_entry {
        if index >= nodes.len() {
            return Err(ListError::EntryOutOfBounds {
                index,
                len: nodes.len(),
            });
        }
    }

    for pair in nodes.windows(2) {
        pair[0].borrow_mut().next = Some(pair[1].clone());
    }

    if let (Some(index), Some(last)) = (cycle_entry, nodes.last()) {
        last.borrow_mut().next = Some(nodes[index].clone());
    }

    Ok((nodes.first().cloned(), nodes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_along<T: Copy>(head: &Link<T>, steps: usize) -> Vec<T> {
        let mut out = Vec::new();
        let mut cursor = head.clone();
        for _ in 0..steps {
            match cursor {
                Some(node) => {
                    out.push(node.borrow().data);
                    cursor = next_of(&node);
                }
                None => break,
            }
        }
        out
    }

    #[test]
    fn test_build_empty() {
        let (head, nodes) = build_list(Vec::<i32>::new(), None).unwrap();
        assert!(head.is_none());
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_build_empty_with_entry() {
        let err = build_list(Vec::<i32>::new(), Some(0)).unwrap_err();
        assert_eq!(err, ListError::EntryOutOfBounds { index: 0, len: 0 });
    }

    #[test]
    fn test_build_acyclic() {
        let (head, nodes) = build_list(vec![1, 2, 3], None).unwrap();
        assert_eq!(data_along(&head, 10), vec![1, 2, 3]);
        assert!(nodes[2].borrow().next.is_none());
    }

    #[test]
    fn test_build_cyclic() {
        let (head, nodes) = build_list(vec![1, 2, 3, 4, 5], Some(2)).unwrap();
        assert_eq!(data_along(&head, 8), vec![1, 2, 3, 4, 5, 3, 4, 5]);
        assert!(same_node(&next_of(&nodes[4]), &Some(nodes[2].clone())));
    }

    #[test]
    fn test_build_self_loop() {
        let (head, nodes) = build_list(vec!['a'], Some(0)).unwrap();
        assert!(same_node(&head, &next_of(&nodes[0])));
    }

    #[test]
    fn test_build_entry_out_of_bounds() {
        let err = build_list(vec![1, 2, 3], Some(3)).unwrap_err();
        assert_eq!(err, ListError::EntryOutOfBounds { index: 3, len: 3 });
    }

    #[test]
    fn test_drop_long_list() {
        let (head, nodes) = build_list(0..500_000usize, None).unwrap();
        assert_eq!(nodes.len(), 500_000);
        drop(nodes);
        drop(head);

        // Dropping the head first leaves every node owned by the handle vector.
        let (head, nodes) = build_list(0..500_000usize, None).unwrap();
        drop(head);
        drop(nodes);
    }

    #[test]
    fn test_drop_keeps_shared_tail() {
        let (head, nodes) = build_list(vec![1, 2, 3, 4], None).unwrap();
        let tail = nodes[2].clone();
        drop(nodes);
        drop(head);
        assert_eq!(tail.borrow().data, 3);
        assert_eq!(next_of(&tail).unwrap().borrow().data, 4);
    }

    #[test]
    fn test_same_node_is_identity() {
        let a = ListNode::new_ref(1);
        let b = ListNode::new_ref(1);
        assert!(same_node(&Some(a.clone()), &Some(a.clone())));
        assert!(!same_node(&Some(a.clone()), &Some(b)));
        assert!(!same_node(&Some(a), &None));
        assert!(same_node::<i32>(&None, &None));
    }
}
