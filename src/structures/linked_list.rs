//! Singly linked list
//!
//! Each node exclusively owns its successor, so ownership runs strictly
//! from head to tail and the last node's `next` is always `None`. The list has
//! no maximum length.
//!
//! | Method | Complexity |
//! |-|-|
//! | `insert` | `O(n)` |
//! | `delete` | `O(n)` |
//! | `front` | `O(1)` |
//! | `len` | `O(1)` |

use std::fmt;

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    value: i32,
    next: Link,
}

impl Node {
    fn new(value: i32) -> Self {
        Node { value, next: None }
    }
}

/// An ordered sequence of integers with tail insertion and delete-by-value
pub struct LinkedList {
    head: Link,
    len: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Append `value` as the new tail node
    pub fn insert(&mut self, value: i32) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Remove the first node (scanning from the head) holding `value`.
    ///
    /// Returns `false` and leaves the list untouched when no node matches.
    pub fn delete(&mut self, value: i32) -> bool {
        let mut link = &mut self.head;
        loop {
            match link {
                None => return false,
                Some(node) if node.value == value => {
                    *link = node.next.take();
                    self.len -= 1;
                    return true;
                }
                Some(node) => link = &mut node.next,
            }
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        self.iter().any(|v| v == value)
    }

    /// The value at the head of the list, if any
    pub fn front(&self) -> Option<i32> {
        self.head.as_ref().map(|node| node.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Release every node
    pub fn clear(&mut self) {
        // Unlink one node at a time so teardown never recurses through the chain
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Iterate over the stored values from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        let mut link = &mut list.head;
        for value in iter {
            let node = link.insert(Box::new(Node::new(value)));
            link = &mut node.next;
            list.len += 1;
        }
        list
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Head-to-tail iterator over a [`LinkedList`]
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
