//! Session engine
//!
//! [`Session`] applies menu operations to the one live [`Structure`] of a
//! demonstration and reports each result as an [`Outcome`]. Outcomes are
//! also appended to the session's [`EventLog`].
//!
//! # Messages
//!
//! The boundary conditions of the structures are reported, not raised:
//!
//! | Condition | Tone | Message |
//! |-|-|-|
//! | push on full stack | warning | `Stack Overflow! Cannot push more elements.` |
//! | pop on empty stack | error | `Stack Underflow! Stack is empty.` |
//! | enqueue on full queue | warning | `Queue is Full! Cannot enqueue more elements.` |
//! | dequeue on empty queue | error | `Queue is Empty! Nothing to dequeue.` |
//! | delete of missing value | info | `Value N not found in the list.` |
//! | duplicate tree insert | info | `Value N already exists in the tree.` |

use super::errors::parse_value;
use super::kind::{Operation, StructureKind};
use super::log::{EventLog, Tone};
use super::playback::Playback;
use crate::structures::{
    BinarySearchTree, LinkedList, Queue, Stack, StructureError, TraversalOrder,
};

/// The live instance owned by a session
#[derive(Debug, Clone)]
pub enum Structure {
    LinkedList(LinkedList),
    Stack(Stack),
    Queue(Queue),
    BinaryTree(BinarySearchTree),
}

impl Structure {
    /// Create an empty structure; `capacity` only affects the stack and queue
    pub fn new(kind: StructureKind, capacity: usize) -> Result<Self, StructureError> {
        Ok(match kind {
            StructureKind::LinkedList => Structure::LinkedList(LinkedList::new()),
            StructureKind::Stack => Structure::Stack(Stack::new(capacity)?),
            StructureKind::Queue => Structure::Queue(Queue::new(capacity)?),
            StructureKind::BinaryTree => Structure::BinaryTree(BinarySearchTree::new()),
        })
    }

    pub fn kind(&self) -> StructureKind {
        match self {
            Structure::LinkedList(_) => StructureKind::LinkedList,
            Structure::Stack(_) => StructureKind::Stack,
            Structure::Queue(_) => StructureKind::Queue,
            Structure::BinaryTree(_) => StructureKind::BinaryTree,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Structure::LinkedList(list) => list.len(),
            Structure::Stack(stack) => stack.len(),
            Structure::Queue(queue) => queue.len(),
            Structure::BinaryTree(tree) => tree.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity of fixed-size structures
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Structure::Stack(stack) => Some(stack.capacity()),
            Structure::Queue(queue) => Some(queue.capacity()),
            Structure::LinkedList(_) | Structure::BinaryTree(_) => None,
        }
    }
}

/// Result of one operation
#[derive(Debug, Clone)]
pub struct Outcome {
    pub tone: Tone,
    pub message: String,
    pub playback: Option<Playback>,
}

/// What happens after an operation is selected from the menu
#[derive(Debug, Clone)]
pub enum Step {
    /// The operation needs a value; show this prompt and call [`Session::submit`]
    Prompt(&'static str),
    /// The operation ran to completion
    Done(Outcome),
    /// Return to the main menu, releasing the structure
    Leave,
}

/// One demonstration: a live structure and the log of what was done to it
#[derive(Debug)]
pub struct Session {
    structure: Structure,
    log: EventLog,
}

impl Session {
    pub fn new(kind: StructureKind, capacity: usize) -> Result<Self, StructureError> {
        Ok(Session {
            structure: Structure::new(kind, capacity)?,
            log: EventLog::new(),
        })
    }

    pub fn kind(&self) -> StructureKind {
        self.structure.kind()
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Start `operation`, checking whether it can run before asking for a value
    pub fn select(&mut self, operation: Operation) -> Step {
        if operation == Operation::Back {
            return Step::Leave;
        }
        if !self.kind().supports(operation) {
            return Step::Done(self.record(Tone::Error, "Invalid choice!", None));
        }

        match (&mut self.structure, operation) {
            (Structure::Stack(stack), Operation::Push) if stack.is_full() => {
                Step::Done(self.record(Tone::Warning, STACK_OVERFLOW, None))
            }
            (Structure::Queue(queue), Operation::Enqueue) if queue.is_full() => {
                Step::Done(self.record(Tone::Warning, QUEUE_FULL, None))
            }
            (_, op) if op.needs_value() => match op.prompt() {
                Some(prompt) => Step::Prompt(prompt),
                None => Step::Done(self.record(Tone::Error, "Invalid choice!", None)),
            },

            (Structure::Stack(stack), Operation::Pop) => match stack.pop() {
                Some(value) => Step::Done(self.record(
                    Tone::Success,
                    format!("Value {} popped from stack!", value),
                    None,
                )),
                None => Step::Done(self.record(Tone::Error, STACK_UNDERFLOW, None)),
            },
            (Structure::Queue(queue), Operation::Dequeue) => match queue.dequeue() {
                Some(value) => Step::Done(self.record(
                    Tone::Success,
                    format!("Value {} removed from queue!", value),
                    None,
                )),
                None => Step::Done(self.record(Tone::Error, QUEUE_EMPTY, None)),
            },
            (Structure::Queue(queue), Operation::AnimateQueue) => {
                let playback = Playback::queue_demo(queue);
                let remaining = join_values(queue.iter(), " ");
                Step::Done(self.record(
                    Tone::Info,
                    format!("Queue demo finished, queue now holds: {}", remaining),
                    Some(playback),
                ))
            }

            (Structure::LinkedList(list), Operation::AnimateListTraversal) => {
                let playback = Playback::list_traversal(list);
                let message = format!("Traversal: {}", render_chain(list));
                Step::Done(self.record(Tone::Info, message, Some(playback)))
            }
            (Structure::BinaryTree(tree), Operation::Traverse(order)) => {
                let playback = Playback::tree_traversal(tree, order);
                let message = format!(
                    "{} Traversal: {}",
                    order.name(),
                    join_values(tree.traverse(order), " ")
                );
                Step::Done(self.record(Tone::Info, message, Some(playback)))
            }
            (Structure::BinaryTree(tree), Operation::AnimateTreeTraversals) => {
                let playback = Playback::all_tree_traversals(tree);
                let message = TraversalOrder::ALL
                    .iter()
                    .map(|&order| {
                        format!(
                            "{}: {}",
                            order.description(),
                            join_values(tree.traverse(order), " ")
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                Step::Done(self.record(Tone::Info, message, Some(playback)))
            }

            _ => Step::Done(self.record(Tone::Error, "Invalid choice!", None)),
        }
    }

    /// Finish a prompted operation with the text the user typed
    pub fn submit(&mut self, operation: Operation, input: &str) -> Outcome {
        match parse_value(input) {
            Ok(value) => self.apply(operation, value),
            Err(e) => self.record(Tone::Error, format!("Invalid input! {}", e), None),
        }
    }

    /// Run a value-taking operation with an already validated operand
    pub fn apply(&mut self, operation: Operation, value: i32) -> Outcome {
        match (&mut self.structure, operation) {
            (Structure::LinkedList(list), Operation::Insert) => {
                list.insert(value);
                self.record(
                    Tone::Success,
                    format!("Node with value {} inserted successfully!", value),
                    None,
                )
            }
            (Structure::LinkedList(list), Operation::Delete) => {
                if list.delete(value) {
                    self.record(
                        Tone::Success,
                        format!("Node with value {} deleted successfully!", value),
                        None,
                    )
                } else {
                    self.record(
                        Tone::Info,
                        format!("Value {} not found in the list.", value),
                        None,
                    )
                }
            }
            (Structure::Stack(stack), Operation::Push) => {
                if stack.push(value) {
                    self.record(
                        Tone::Success,
                        format!("Value {} pushed onto stack!", value),
                        None,
                    )
                } else {
                    self.record(Tone::Warning, STACK_OVERFLOW, None)
                }
            }
            (Structure::Queue(queue), Operation::Enqueue) => {
                if queue.enqueue(value) {
                    self.record(
                        Tone::Success,
                        format!("Value {} added to queue!", value),
                        None,
                    )
                } else {
                    self.record(Tone::Warning, QUEUE_FULL, None)
                }
            }
            (Structure::BinaryTree(tree), Operation::Insert) => {
                if tree.insert(value) {
                    self.record(
                        Tone::Success,
                        format!("Node with value {} inserted successfully!", value),
                        None,
                    )
                } else {
                    self.record(
                        Tone::Info,
                        format!("Value {} already exists in the tree.", value),
                        None,
                    )
                }
            }
            _ => self.record(Tone::Error, "Invalid choice!", None),
        }
    }

    fn record(
        &mut self,
        tone: Tone,
        message: impl Into<String>,
        playback: Option<Playback>,
    ) -> Outcome {
        let message = message.into();
        self.log.push(tone, message.clone());
        Outcome {
            tone,
            message,
            playback,
        }
    }
}

const STACK_OVERFLOW: &str = "Stack Overflow! Cannot push more elements.";
const STACK_UNDERFLOW: &str = "Stack Underflow! Stack is empty.";
const QUEUE_FULL: &str = "Queue is Full! Cannot enqueue more elements.";
const QUEUE_EMPTY: &str = "Queue is Empty! Nothing to dequeue.";

fn join_values(values: impl Iterator<Item = i32>, separator: &str) -> String {
    let joined = values.map(|v| v.to_string()).collect::<Vec<_>>().join(separator);
    if joined.is_empty() {
        "(empty)".to_string()
    } else {
        joined
    }
}

/// `[1] -> [2] -> NULL`
fn render_chain(list: &LinkedList) -> String {
    list.iter()
        .map(|v| format!("[{}] -> ", v))
        .chain(std::iter::once("NULL".to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_chain() {
        let list: LinkedList = [1, 2].into_iter().collect();
        assert_eq!(render_chain(&list), "[1] -> [2] -> NULL");
        assert_eq!(render_chain(&LinkedList::new()), "NULL");
    }

    #[test]
    fn test_join_values() {
        assert_eq!(join_values([1, 2, 3].into_iter(), " "), "1 2 3");
        assert_eq!(join_values(std::iter::empty(), " "), "(empty)");
    }

    #[test]
    fn test_structure_new() {
        let stack = Structure::new(StructureKind::Stack, 4).unwrap();
        assert_eq!(stack.kind(), StructureKind::Stack);
        assert_eq!(stack.capacity(), Some(4));
        assert!(stack.is_empty());

        assert!(Structure::new(StructureKind::Queue, 0).is_err());
        // Capacity is ignored by unbounded structures
        assert!(Structure::new(StructureKind::LinkedList, 0).is_ok());
    }
}
