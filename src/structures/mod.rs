//! Data-structure engines
//!
//! This module provides the four structures the console demonstrates:
//! - [`linked_list`]: Singly linked list with tail insert and delete-by-value
//! - [`stack`]: Fixed-capacity LIFO over a contiguous buffer
//! - [`queue`]: Fixed-capacity circular FIFO over a contiguous buffer
//! - [`tree`]: Unbalanced binary search tree with three traversal orders
//!
//! # Element Type
//!
//! Every structure stores plain `i32` values. None of them is generic.
//!
//! # Boundary Policy
//!
//! The exceptional conditions of these structures are ordinary return values,
//! never errors or panics:
//!
//! | Condition | Operation | Result |
//! |-|-|-|
//! | Full | `Stack::push`, `Queue::enqueue` | `false`, structure unchanged |
//! | Empty | `Stack::pop`, `Queue::dequeue` | `None` |
//! | Not found | `LinkedList::delete` | `false`, list unchanged |
//! | Duplicate | `BinarySearchTree::insert` | `false`, tree unchanged |
//!
//! The only fallible operation is constructing a stack or queue, which fails
//! with [`StructureError`] for a zero capacity or a buffer that cannot be
//! allocated.

pub mod constants;
pub mod errors;
pub mod linked_list;
pub mod queue;
pub mod stack;
pub mod tree;

pub use errors::StructureError;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
pub use tree::{BinarySearchTree, TraversalOrder, TreeRow};

/// Zeroed buffer of `capacity` slots, reporting allocation failure as an error
fn allocate_slots(
    structure: &'static str,
    capacity: usize,
) -> Result<Box<[i32]>, StructureError> {
    if capacity == 0 {
        return Err(StructureError::ZeroCapacity { structure });
    }
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| StructureError::CapacityTooLarge {
            structure,
            capacity,
        })?;
    slots.resize(capacity, 0);
    Ok(slots.into_boxed_slice())
}
