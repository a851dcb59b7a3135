// Integration tests for demonstration sessions

use dsconsole::session::{Operation, Outcome, Session, Step, Structure, StructureKind, Tone};
use dsconsole::structures::{StructureError, TraversalOrder};

fn done(step: Step) -> Outcome {
    match step {
        Step::Done(outcome) => outcome,
        other => panic!("Expected a finished operation, got {:?}", other),
    }
}

fn prompt(session: &mut Session, operation: Operation) -> &'static str {
    match session.select(operation) {
        Step::Prompt(prompt) => prompt,
        other => panic!("Expected a prompt, got {:?}", other),
    }
}

#[test]
fn test_stack_session_messages() {
    let mut session = Session::new(StructureKind::Stack, 2).unwrap();

    assert_eq!(prompt(&mut session, Operation::Push), "Enter value to push: ");
    let outcome = session.submit(Operation::Push, " 7 ");
    assert_eq!(outcome.tone, Tone::Success);
    assert_eq!(outcome.message, "Value 7 pushed onto stack!");

    session.submit(Operation::Push, "8");
    // Full stacks are refused before asking for a value
    let outcome = done(session.select(Operation::Push));
    assert_eq!(outcome.tone, Tone::Warning);
    assert_eq!(outcome.message, "Stack Overflow! Cannot push more elements.");

    assert_eq!(
        done(session.select(Operation::Pop)).message,
        "Value 8 popped from stack!"
    );
    session.select(Operation::Pop);
    let outcome = done(session.select(Operation::Pop));
    assert_eq!(outcome.tone, Tone::Error);
    assert_eq!(outcome.message, "Stack Underflow! Stack is empty.");
}

#[test]
fn test_invalid_input_leaves_structure_unchanged() {
    let mut session = Session::new(StructureKind::LinkedList, 10).unwrap();
    session.submit(Operation::Insert, "4");

    for input in ["", "abc", "4.5", "99999999999"] {
        let outcome = session.submit(Operation::Insert, input);
        assert_eq!(outcome.tone, Tone::Error);
        assert!(
            outcome.message.starts_with("Invalid input!"),
            "Unexpected message: {}",
            outcome.message
        );
    }
    assert_eq!(session.structure().len(), 1);
}

#[test]
fn test_list_delete_reports_missing_values() {
    let mut session = Session::new(StructureKind::LinkedList, 10).unwrap();
    session.submit(Operation::Insert, "1");
    session.submit(Operation::Insert, "2");

    assert_eq!(
        session.apply(Operation::Delete, 1).message,
        "Node with value 1 deleted successfully!"
    );
    let outcome = session.apply(Operation::Delete, 42);
    assert_eq!(outcome.tone, Tone::Info);
    assert_eq!(outcome.message, "Value 42 not found in the list.");

    let outcome = done(session.select(Operation::AnimateListTraversal));
    assert_eq!(outcome.message, "Traversal: [2] -> NULL");
    assert!(outcome.playback.is_some());
}

#[test]
fn test_queue_session() {
    let mut session = Session::new(StructureKind::Queue, 3).unwrap();

    assert_eq!(
        session.apply(Operation::Enqueue, 5).message,
        "Value 5 added to queue!"
    );
    assert_eq!(
        done(session.select(Operation::Dequeue)).message,
        "Value 5 removed from queue!"
    );
    assert_eq!(
        done(session.select(Operation::Dequeue)).message,
        "Queue is Empty! Nothing to dequeue."
    );

    let outcome = done(session.select(Operation::AnimateQueue));
    assert!(outcome.playback.is_some());
    // 10, 20 and 30 fit a capacity-3 queue and are all dequeued again
    assert_eq!(
        outcome.message,
        "Queue demo finished, queue now holds: (empty)"
    );
    assert!(session.structure().is_empty());
}

#[test]
fn test_tree_session() {
    let mut session = Session::new(StructureKind::BinaryTree, 10).unwrap();
    for value in [5, 3, 8, 1, 4] {
        session.apply(Operation::Insert, value);
    }
    let outcome = session.apply(Operation::Insert, 3);
    assert_eq!(outcome.message, "Value 3 already exists in the tree.");

    let outcome = done(session.select(Operation::Traverse(TraversalOrder::PostOrder)));
    assert_eq!(outcome.message, "Postorder Traversal: 1 4 3 8 5");

    let outcome = done(session.select(Operation::AnimateTreeTraversals));
    assert_eq!(
        outcome.message,
        "Inorder (L Root R): 1 3 4 5 8\n\
         Preorder (Root L R): 5 3 1 4 8\n\
         Postorder (L R Root): 1 4 3 8 5"
    );

    match session.structure() {
        Structure::BinaryTree(tree) => assert_eq!(tree.len(), 5),
        other => panic!("Expected a tree, got {:?}", other),
    }
}

#[test]
fn test_unsupported_operation_and_back() {
    let mut session = Session::new(StructureKind::Stack, 4).unwrap();

    let outcome = done(session.select(Operation::Enqueue));
    assert_eq!(outcome.message, "Invalid choice!");
    assert!(matches!(session.select(Operation::Back), Step::Leave));
}

#[test]
fn test_every_outcome_is_logged() {
    let mut session = Session::new(StructureKind::Stack, 1).unwrap();
    session.apply(Operation::Push, 1);
    session.apply(Operation::Push, 2);
    session.select(Operation::Pop);

    let texts: Vec<&str> = session.log().entries().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Value 1 pushed onto stack!",
            "Stack Overflow! Cannot push more elements.",
            "Value 1 popped from stack!",
        ]
    );
}

#[test]
fn test_unallocatable_capacity_is_an_error() {
    let result = Session::new(StructureKind::Stack, usize::MAX / 2);
    assert!(matches!(
        result,
        Err(StructureError::CapacityTooLarge { structure: "Stack", .. })
    ));

    // Structures without a capacity ignore it
    assert!(Session::new(StructureKind::BinaryTree, usize::MAX).is_ok());
}
