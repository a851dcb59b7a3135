//! Fixed-capacity circular queue
//!
//! A FIFO sequence over a contiguous buffer of capacity `C`, addressed by two
//! cursors that wrap modulo `C`:
//!
//! ```text
//! empty:      cursors = None                 (front == rear == -1)
//! non-empty:  live = front, front+1, ..., rear   (indices mod C)
//! full:       (rear + 1) % C == front
//! ```
//!
//! Because the empty state is carried by the sentinel rather than by the
//! cursor positions, the full test above is only reached once every slot is
//! live.

use super::constants::DEFAULT_CAPACITY;
use super::errors::StructureError;
use super::allocate_slots;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursors {
    front: usize,
    rear: usize,
}

#[derive(Debug, Clone)]
pub struct Queue {
    buffer: Box<[i32]>,
    cursors: Option<Cursors>,
}

impl Queue {
    /// Create an empty queue over a buffer of `capacity` slots
    pub fn new(capacity: usize) -> Result<Self, StructureError> {
        Ok(Queue {
            buffer: allocate_slots("Queue", capacity)?,
            cursors: None,
        })
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn len(&self) -> usize {
        match self.cursors {
            None => 0,
            Some(Cursors { front, rear }) => (rear + self.capacity() - front) % self.capacity() + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cursors.is_none()
    }

    pub fn is_full(&self) -> bool {
        match self.cursors {
            None => false,
            Some(Cursors { front, rear }) => self.advance(rear) == front,
        }
    }

    pub fn front_index(&self) -> Option<usize> {
        self.cursors.map(|c| c.front)
    }

    pub fn rear_index(&self) -> Option<usize> {
        self.cursors.map(|c| c.rear)
    }

    /// Append `value` at the rear.
    ///
    /// Returns `false` without storing anything when the queue is full.
    pub fn enqueue(&mut self, value: i32) -> bool {
        let cursors = match self.cursors {
            None => Cursors { front: 0, rear: 0 },
            Some(_) if self.is_full() => return false,
            Some(Cursors { front, rear }) => Cursors {
                front,
                rear: self.advance(rear),
            },
        };
        self.buffer[cursors.rear] = value;
        self.cursors = Some(cursors);
        true
    }

    /// Remove and return the value at the front, or `None` when empty
    pub fn dequeue(&mut self) -> Option<i32> {
        let Cursors { front, rear } = self.cursors?;
        let value = self.buffer[front];
        self.cursors = if front == rear {
            None
        } else {
            Some(Cursors {
                front: self.advance(front),
                rear,
            })
        };
        Some(value)
    }

    /// The value at the front without removing it
    pub fn peek(&self) -> Option<i32> {
        self.cursors.map(|c| self.buffer[c.front])
    }

    /// Live values from front to rear, wrapping around the buffer end
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            queue: self,
            index: self.front_index().unwrap_or(0),
            remaining: self.len(),
        }
    }

    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }
}

impl Default for Queue {
    fn default() -> Self {
        Queue {
            buffer: vec![0; DEFAULT_CAPACITY].into_boxed_slice(),
            cursors: None,
        }
    }
}

/// Front-to-rear iterator over a [`Queue`]
#[derive(Clone)]
pub struct Iter<'a> {
    queue: &'a Queue,
    index: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.queue.buffer[self.index];
        self.index = self.queue.advance(self.index);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_dequeue_fifo() {
        let mut queue = Queue::new(4).unwrap();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_first_enqueue_sets_both_cursors() {
        let mut queue = Queue::new(3).unwrap();
        assert_eq!(queue.front_index(), None);
        assert_eq!(queue.rear_index(), None);

        queue.enqueue(5);
        assert_eq!(queue.front_index(), Some(0));
        assert_eq!(queue.rear_index(), Some(0));
    }

    #[test]
    fn test_last_dequeue_resets_to_empty() {
        let mut queue = Queue::new(3).unwrap();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.dequeue();
        queue.dequeue();

        assert!(queue.is_empty());
        assert_eq!(queue.front_index(), None);

        // Restarts from slot 0 after going empty
        queue.enqueue(9);
        assert_eq!(queue.front_index(), Some(0));
        assert_eq!(queue.rear_index(), Some(0));
    }

    #[test]
    fn test_wraparound_iteration() {
        let mut queue = Queue::new(3).unwrap();
        queue.enqueue(10);
        queue.enqueue(20);
        queue.dequeue();
        queue.enqueue(30);
        queue.enqueue(40);

        assert_eq!(queue.front_index(), Some(1));
        assert_eq!(queue.rear_index(), Some(0));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![20, 30, 40]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_enqueue_into_full_queue_is_dropped() {
        let mut queue = Queue::new(2).unwrap();
        assert!(queue.enqueue(1));
        assert!(queue.enqueue(2));
        assert!(queue.is_full());

        assert!(!queue.enqueue(3));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_single_slot_queue() {
        let mut queue = Queue::new(1).unwrap();
        assert!(!queue.is_full());
        assert!(queue.enqueue(7));
        assert!(queue.is_full());
        assert!(!queue.enqueue(8));
        assert_eq!(queue.dequeue(), Some(7));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(Queue::new(0).is_err());
        assert_eq!(Queue::default().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_unallocatable_capacity_rejected() {
        assert!(matches!(
            Queue::new(usize::MAX / 2),
            Err(StructureError::CapacityTooLarge { structure: "Queue", .. })
        ));
    }
}
