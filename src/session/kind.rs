//! Demonstrations and their operation menus
//!
//! Menu numbering follows the console convention: entries are numbered from 1
//! in the order listed and `0` always goes back.

use crate::structures::TraversalOrder;

/// One of the four demonstrations reachable from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    LinkedList,
    Stack,
    Queue,
    BinaryTree,
}

/// An entry of a demonstration's operation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Insert,
    Delete,
    AnimateListTraversal,
    Push,
    Pop,
    Enqueue,
    Dequeue,
    AnimateQueue,
    Traverse(TraversalOrder),
    AnimateTreeTraversals,
    Back,
}

const LINKED_LIST_OPERATIONS: &[Operation] = &[
    Operation::Insert,
    Operation::Delete,
    Operation::AnimateListTraversal,
];

const STACK_OPERATIONS: &[Operation] = &[Operation::Push, Operation::Pop];

const QUEUE_OPERATIONS: &[Operation] = &[
    Operation::Enqueue,
    Operation::Dequeue,
    Operation::AnimateQueue,
];

const TREE_OPERATIONS: &[Operation] = &[
    Operation::Insert,
    Operation::Traverse(TraversalOrder::InOrder),
    Operation::Traverse(TraversalOrder::PreOrder),
    Operation::Traverse(TraversalOrder::PostOrder),
    Operation::AnimateTreeTraversals,
];

impl StructureKind {
    pub const ALL: [StructureKind; 4] = [
        StructureKind::LinkedList,
        StructureKind::Stack,
        StructureKind::Queue,
        StructureKind::BinaryTree,
    ];

    /// Map a main-menu digit (1-4) to its demonstration
    pub fn from_choice(choice: u32) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Main-menu digit of this demonstration
    pub fn choice(self) -> u32 {
        match self {
            StructureKind::LinkedList => 1,
            StructureKind::Stack => 2,
            StructureKind::Queue => 3,
            StructureKind::BinaryTree => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StructureKind::LinkedList => "Linked List",
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::BinaryTree => "Binary Tree",
        }
    }

    /// Label on the main menu
    pub fn menu_label(self) -> &'static str {
        match self {
            StructureKind::LinkedList => "Linked List Demonstration",
            StructureKind::Stack => "Stack Implementation",
            StructureKind::Queue => "Queue Implementation",
            StructureKind::BinaryTree => "Binary Tree Visualization",
        }
    }

    /// Title of the operations box
    pub fn title(self) -> String {
        format!("{} Operations", self.name())
    }

    pub fn intro(self) -> &'static str {
        match self {
            StructureKind::LinkedList => {
                "This section demonstrates Linked List operations\nwith visual animations."
            }
            StructureKind::Stack => {
                "This section demonstrates Stack operations\nwith visual animations."
            }
            StructureKind::Queue => {
                "This section demonstrates Queue operations\nwith visual animations."
            }
            StructureKind::BinaryTree => {
                "This section demonstrates Binary Tree operations\nwith visual animations and traversal demonstrations."
            }
        }
    }

    /// Caption of the progress bar shown while the demonstration starts
    pub fn loading_message(self) -> String {
        format!("Initializing {}", self.name())
    }

    /// Operations in menu order, without the trailing "back" entry
    pub fn operations(self) -> &'static [Operation] {
        match self {
            StructureKind::LinkedList => LINKED_LIST_OPERATIONS,
            StructureKind::Stack => STACK_OPERATIONS,
            StructureKind::Queue => QUEUE_OPERATIONS,
            StructureKind::BinaryTree => TREE_OPERATIONS,
        }
    }

    /// Map an operation-menu digit to its operation
    pub fn operation_for(self, choice: u32) -> Option<Operation> {
        if choice == 0 {
            return Some(Operation::Back);
        }
        let index = usize::try_from(choice).ok()? - 1;
        self.operations().get(index).copied()
    }

    pub fn supports(self, operation: Operation) -> bool {
        operation == Operation::Back || self.operations().contains(&operation)
    }

    /// Numbered lines of the operation menu, e.g. `1. Push Element`
    pub fn menu_lines(self) -> Vec<String> {
        self.operations()
            .iter()
            .enumerate()
            .map(|(i, op)| format!("{}. {}", i + 1, op.label()))
            .chain(std::iter::once(format!("0. {}", Operation::Back.label())))
            .collect()
    }
}

/// Numbered lines of the main menu
pub fn main_menu_lines() -> Vec<String> {
    StructureKind::ALL
        .iter()
        .map(|kind| format!("{}. {}", kind.choice(), kind.menu_label()))
        .chain(std::iter::once("0. Exit Program".to_string()))
        .collect()
}

impl Operation {
    pub fn label(self) -> &'static str {
        match self {
            Operation::Insert => "Insert Node",
            Operation::Delete => "Delete Node",
            Operation::AnimateListTraversal => "Animate Linked List Traversal",
            Operation::Push => "Push Element",
            Operation::Pop => "Pop Element",
            Operation::Enqueue => "Enqueue Element",
            Operation::Dequeue => "Dequeue Element",
            Operation::AnimateQueue => "Animate Queue Operations",
            Operation::Traverse(TraversalOrder::InOrder) => "Inorder Traversal",
            Operation::Traverse(TraversalOrder::PreOrder) => "Preorder Traversal",
            Operation::Traverse(TraversalOrder::PostOrder) => "Postorder Traversal",
            Operation::AnimateTreeTraversals => "Animate Tree Traversal",
            Operation::Back => "Back to Main Menu",
        }
    }

    /// Prompt for operations that take a value
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            Operation::Insert => Some("Enter value to insert: "),
            Operation::Delete => Some("Enter value to delete: "),
            Operation::Push => Some("Enter value to push: "),
            Operation::Enqueue => Some("Enter value to enqueue: "),
            _ => None,
        }
    }

    pub fn needs_value(self) -> bool {
        self.prompt().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_choices() {
        assert_eq!(StructureKind::from_choice(1), Some(StructureKind::LinkedList));
        assert_eq!(StructureKind::from_choice(4), Some(StructureKind::BinaryTree));
        assert_eq!(StructureKind::from_choice(0), None);
        assert_eq!(StructureKind::from_choice(5), None);

        for kind in StructureKind::ALL {
            assert_eq!(StructureKind::from_choice(kind.choice()), Some(kind));
        }
        assert_eq!(main_menu_lines().last().map(String::as_str), Some("0. Exit Program"));
    }

    #[test]
    fn test_operation_choices() {
        let tree = StructureKind::BinaryTree;
        assert_eq!(tree.operation_for(0), Some(Operation::Back));
        assert_eq!(tree.operation_for(1), Some(Operation::Insert));
        assert_eq!(
            tree.operation_for(3),
            Some(Operation::Traverse(TraversalOrder::PreOrder))
        );
        assert_eq!(tree.operation_for(5), Some(Operation::AnimateTreeTraversals));
        assert_eq!(tree.operation_for(6), None);

        assert_eq!(StructureKind::Stack.operation_for(3), None);
        assert!(!StructureKind::Stack.supports(Operation::Insert));
        assert!(StructureKind::Queue.supports(Operation::Back));
    }

    #[test]
    fn test_menu_lines() {
        assert_eq!(
            StructureKind::Stack.menu_lines(),
            vec!["1. Push Element", "2. Pop Element", "0. Back to Main Menu"]
        );
        assert_eq!(StructureKind::Queue.title(), "Queue Operations");
        assert_eq!(StructureKind::Stack.loading_message(), "Initializing Stack");
    }
}
