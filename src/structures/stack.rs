//! Fixed-capacity stack
//!
//! A LIFO sequence over a contiguous buffer whose capacity is fixed at
//! creation. The `top` cursor is `None` for an empty stack (the `-1` sentinel
//! of a C-style implementation) and otherwise holds the index of the most
//! recently pushed element. Every slot in `0..=top` is live.
//!
//! # Overflow and Underflow
//!
//! Pushing onto a full stack drops the value and returns `false`. Popping an
//! empty stack returns `None` instead of a sentinel, so a stored `-1` can no
//! longer be mistaken for "empty".

use super::constants::DEFAULT_CAPACITY;
use super::errors::StructureError;
use super::allocate_slots;

#[derive(Debug, Clone)]
pub struct Stack {
    buffer: Box<[i32]>,
    top: Option<usize>,
}

impl Stack {
    /// Create an empty stack holding at most `capacity` values
    pub fn new(capacity: usize) -> Result<Self, StructureError> {
        Ok(Stack {
            buffer: allocate_slots("Stack", capacity)?,
            top: None,
        })
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn len(&self) -> usize {
        self.top.map_or(0, |top| top + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.top == Some(self.capacity() - 1)
    }

    /// Index of the most recently pushed element
    pub fn top_index(&self) -> Option<usize> {
        self.top
    }

    /// Push `value` onto the stack.
    ///
    /// Returns `false` without storing anything when the stack is full.
    pub fn push(&mut self, value: i32) -> bool {
        if self.is_full() {
            return false;
        }
        let top = self.top.map_or(0, |top| top + 1);
        self.buffer[top] = value;
        self.top = Some(top);
        true
    }

    /// Remove and return the topmost value, or `None` when empty
    pub fn pop(&mut self) -> Option<i32> {
        let top = self.top?;
        self.top = top.checked_sub(1);
        Some(self.buffer[top])
    }

    /// The topmost value without removing it
    pub fn peek(&self) -> Option<i32> {
        self.top.map(|top| self.buffer[top])
    }

    /// Live values from the top down to index 0
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = i32> + ExactSizeIterator + '_ {
        self.buffer[..self.len()].iter().rev().copied()
    }
}

impl Default for Stack {
    fn default() -> Self {
        Stack {
            buffer: vec![0; DEFAULT_CAPACITY].into_boxed_slice(),
            top: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = Stack::new(4).unwrap();
        assert!(stack.push(1));
        assert!(stack.push(2));
        assert!(stack.push(3));

        assert_eq!(stack.top_index(), Some(2));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.top_index(), None);
    }

    #[test]
    fn test_push_into_full_stack_is_dropped() {
        let mut stack = Stack::new(2).unwrap();
        stack.push(1);
        stack.push(2);
        assert!(stack.is_full());

        assert!(!stack.push(3));
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_stored_negative_one_is_not_empty() {
        let mut stack = Stack::new(1).unwrap();
        stack.push(-1);

        assert_eq!(stack.pop(), Some(-1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_iter_is_top_first() {
        let mut stack = Stack::new(5).unwrap();
        for v in [10, 20, 30] {
            stack.push(v);
        }

        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![30, 20, 10]);
        assert_eq!(stack.peek(), Some(30));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            Stack::new(0).unwrap_err(),
            StructureError::ZeroCapacity { structure: "Stack" }
        );
        assert_eq!(Stack::default().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_unallocatable_capacity_rejected() {
        assert_eq!(
            Stack::new(usize::MAX).unwrap_err(),
            StructureError::CapacityTooLarge {
                structure: "Stack",
                capacity: usize::MAX
            }
        );
    }
}
