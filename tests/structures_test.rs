// Integration tests for the data structure engines

use dsconsole::structures::{
    BinarySearchTree, LinkedList, Queue, Stack, StructureError, TraversalOrder,
};
use std::collections::VecDeque;

/// Deterministic pseudo-random sequence for operation mixes
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }
}

#[test]
fn test_list_length_tracks_successful_deletes() {
    let mut rng = Lcg(7);
    let mut list = LinkedList::new();
    let mut inserts = 0;
    let mut deletes = 0;

    for _ in 0..2_000 {
        let value = (rng.next() % 20) as i32;
        if rng.next() % 3 == 0 {
            let before = list.len();
            if list.delete(value) {
                deletes += 1;
                assert_eq!(list.len(), before - 1);
            } else {
                assert_eq!(list.len(), before, "Missing delete changed length");
            }
        } else {
            list.insert(value);
            inserts += 1;
        }
        assert_eq!(list.len(), inserts - deletes);
        assert_eq!(list.iter().count(), list.len());
    }
}

#[test]
fn test_list_keeps_insertion_order() {
    let mut list = LinkedList::new();
    for value in [3, 1, 4, 1, 5] {
        list.insert(value);
    }
    assert!(list.delete(1));

    // Only the first 1 is removed
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![3, 4, 1, 5]);
    assert!(!list.delete(9));
    assert_eq!(list.len(), 4);
}

#[test]
fn test_stack_capacity_two_scenario() {
    let mut stack = Stack::new(2).expect("capacity 2 is valid");

    assert!(stack.push(1));
    assert!(stack.push(2));
    assert_eq!(stack.top_index(), Some(1));
    assert!(stack.is_full());

    assert!(!stack.push(3), "Push onto a full stack must be dropped");
    assert_eq!(stack.iter().rev().collect::<Vec<_>>(), vec![1, 2]);

    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.top_index(), Some(0));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.top_index(), None);
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_stack_matches_model() {
    let mut rng = Lcg(11);
    let mut stack = Stack::new(5).unwrap();
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..2_000 {
        if rng.next() % 2 == 0 {
            let value = rng.next() as i32;
            let pushed = stack.push(value);
            assert_eq!(pushed, model.len() < 5);
            if pushed {
                model.push(value);
                // LIFO: the value just pushed comes straight back
                assert_eq!(stack.peek(), Some(value));
            }
        } else {
            assert_eq!(stack.pop(), model.pop());
        }
        assert!(stack.len() <= stack.capacity());
        assert_eq!(stack.top_index(), model.len().checked_sub(1));
    }
}

#[test]
fn test_queue_capacity_three_trace() {
    let mut queue = Queue::new(3).unwrap();

    assert!(queue.enqueue(10));
    assert!(queue.enqueue(20));
    assert_eq!((queue.front_index(), queue.rear_index()), (Some(0), Some(1)));

    assert_eq!(queue.dequeue(), Some(10));
    assert_eq!(queue.front_index(), Some(1));

    assert!(queue.enqueue(30));
    assert_eq!(queue.rear_index(), Some(2));

    // Rear wraps to slot 0, which is not the front yet
    assert!(queue.enqueue(40));
    assert_eq!((queue.front_index(), queue.rear_index()), (Some(1), Some(0)));
    assert!(queue.is_full());

    assert!(!queue.enqueue(50));
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec![20, 30, 40]);

    assert_eq!(queue.dequeue(), Some(20));
    assert_eq!(queue.dequeue(), Some(30));
    assert_eq!(queue.dequeue(), Some(40));
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.front_index(), None);
}

#[test]
fn test_queue_matches_model() {
    let mut rng = Lcg(23);
    let capacity = 4;
    let mut queue = Queue::new(capacity).unwrap();
    let mut model: VecDeque<i32> = VecDeque::new();

    for _ in 0..2_000 {
        if rng.next() % 5 < 3 {
            let value = (rng.next() % 1000) as i32;
            let before: Vec<i32> = queue.iter().collect();
            if queue.enqueue(value) {
                model.push_back(value);
            } else {
                assert_eq!(queue.iter().collect::<Vec<_>>(), before);
            }
        } else {
            // FIFO: dequeue order equals enqueue order
            assert_eq!(queue.dequeue(), model.pop_front());
        }
        assert!(queue.len() <= capacity);
        assert_eq!(queue.iter().collect::<Vec<_>>(), Vec::from(model.clone()));
    }
}

#[test]
fn test_bst_round_trip() {
    let tree: BinarySearchTree = [5, 3, 8, 1, 4].into_iter().collect();

    assert_eq!(tree.in_order().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
    assert_eq!(tree.pre_order().collect::<Vec<_>>(), vec![5, 3, 1, 4, 8]);
    assert_eq!(tree.post_order().collect::<Vec<_>>(), vec![1, 4, 3, 8, 5]);

    // Traversals are restartable
    assert_eq!(
        tree.traverse(TraversalOrder::InOrder).collect::<Vec<_>>(),
        tree.in_order().collect::<Vec<_>>()
    );
}

#[test]
fn test_bst_in_order_is_strictly_ascending() {
    let mut rng = Lcg(31);
    let mut tree = BinarySearchTree::new();

    for _ in 0..1_000 {
        tree.insert((rng.next() % 500) as i32 - 250);
        let values: Vec<i32> = tree.in_order().collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(values.len(), tree.len());
    }
}

#[test]
fn test_bst_drops_duplicates() {
    let mut tree = BinarySearchTree::new();
    assert!(tree.insert(2));
    assert!(!tree.insert(2));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.sideways().len(), 1);
}

#[test]
fn test_zero_capacity_is_rejected() {
    assert_eq!(
        Stack::new(0).unwrap_err(),
        StructureError::ZeroCapacity { structure: "Stack" }
    );
    assert!(matches!(
        Queue::new(0),
        Err(StructureError::ZeroCapacity { .. })
    ));
}
