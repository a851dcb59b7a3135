//! Animation scripts
//!
//! A [`Playback`] is a finished list of [`PlaybackStep`]s computed up front
//! from the structure's traversal. The structures never sleep or print; the
//! UI replays the steps, waiting each step's `delay` before moving on.
//!
//! # Scripts
//!
//! | Builder | Steps |
//! |-|-|
//! | [`Playback::list_traversal`] | one per node, head to tail |
//! | [`Playback::tree_traversal`] | one per value of the chosen order |
//! | [`Playback::all_tree_traversals`] | the three orders back to back |
//! | [`Playback::queue_demo`] | empty, enqueue 10..=50, dequeue three |
//!
//! Every script ends with a completion step whose caption asks for a key.

use super::engine::Structure;
use crate::structures::{BinarySearchTree, LinkedList, Queue, TraversalOrder};
use std::rc::Rc;
use std::time::Duration;

/// Pause after each node of a linked-list traversal
pub const LIST_STEP_DELAY: Duration = Duration::from_millis(300);

/// Extra pause while the arrow to the next node is drawn
pub const LIST_LINK_DELAY: Duration = Duration::from_millis(1500);

/// Pause after each value of a tree traversal
pub const TREE_STEP_DELAY: Duration = Duration::from_millis(100);

/// Pause after each enqueue of the queue demo
pub const ENQUEUE_STEP_DELAY: Duration = Duration::from_millis(1000);

/// Pause after each dequeue of the queue demo
pub const DEQUEUE_STEP_DELAY: Duration = Duration::from_millis(500);

/// Values revealed so far by one traversal.
///
/// Every step of a playback shares the traversal's full value list and only
/// records how much of it is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    pub label: String,
    values: Rc<[i32]>,
    shown: usize,
    /// Whether the traversal has run to the end
    pub complete: bool,
}

impl Trail {
    pub fn new(label: impl Into<String>, values: impl Into<Rc<[i32]>>) -> Self {
        Trail {
            label: label.into(),
            values: values.into(),
            shown: 0,
            complete: false,
        }
    }

    /// The same trail with the first `count` values showing
    pub fn revealing(&self, count: usize) -> Self {
        Trail {
            shown: count.min(self.values.len()),
            ..self.clone()
        }
    }

    /// The same trail with every value showing, marked complete
    pub fn completed(&self) -> Self {
        Trail {
            complete: true,
            ..self.revealing(self.values.len())
        }
    }

    pub fn revealed(&self) -> &[i32] {
        &self.values[..self.shown]
    }
}

/// Which part of the structure a step draws attention to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    None,
    /// Position in display order (linked list nodes may repeat values)
    Position(usize),
    /// A tree traversal in `order` that has visited its first `visited`
    /// values and is now on the next one
    Nodes {
        order: TraversalOrder,
        visited: usize,
    },
}

/// One frame of an animation
#[derive(Debug, Clone)]
pub struct PlaybackStep {
    pub caption: String,
    pub trails: Vec<Trail>,
    pub focus: Focus,
    /// Structure state to draw instead of the live one
    pub snapshot: Option<Structure>,
    pub delay: Duration,
}

impl PlaybackStep {
    fn new(caption: impl Into<String>, delay: Duration) -> Self {
        PlaybackStep {
            caption: caption.into(),
            trails: Vec::new(),
            focus: Focus::None,
            snapshot: None,
            delay,
        }
    }
}

/// A replayable sequence of steps with a cursor
#[derive(Debug, Clone)]
pub struct Playback {
    steps: Vec<PlaybackStep>,
    position: usize,
}

impl Playback {
    pub fn new(steps: Vec<PlaybackStep>) -> Self {
        Playback { steps, position: 0 }
    }

    pub fn steps(&self) -> &[PlaybackStep] {
        &self.steps
    }

    pub fn current(&self) -> Option<&PlaybackStep> {
        self.steps.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True once the last step is showing
    pub fn is_finished(&self) -> bool {
        self.position + 1 >= self.steps.len()
    }

    /// Move to the next step; returns `false` if already on the last one
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Jump straight to the last step
    pub fn finish(&mut self) {
        self.position = self.steps.len().saturating_sub(1);
    }

    /// Reveal the nodes of `list` from head to tail
    pub fn list_traversal(list: &LinkedList) -> Self {
        let values: Vec<i32> = list.iter().collect();
        let count = values.len();
        let trail = Trail::new("Traversal", values);

        let mut steps = vec![PlaybackStep::new("Animating traversal...", LIST_STEP_DELAY)];
        for index in 0..count {
            let delay = if index + 1 < count {
                LIST_STEP_DELAY + LIST_LINK_DELAY
            } else {
                LIST_STEP_DELAY
            };
            let mut step = PlaybackStep::new("Animating traversal...", delay);
            step.trails.push(trail.revealing(index + 1));
            step.focus = Focus::Position(index);
            steps.push(step);
        }

        let mut done = PlaybackStep::new("Traversal complete! Press any key...", Duration::ZERO);
        done.trails.push(trail.completed());
        steps.push(done);

        Playback::new(steps)
    }

    /// Reveal the values of `tree` in a single order
    pub fn tree_traversal(tree: &BinarySearchTree, order: TraversalOrder) -> Self {
        Self::tree_steps(
            tree,
            &[order],
            format!("{} Traversal", order.name()),
            "Traversal complete! Press any key...",
            |order| format!("{} Traversal", order.name()),
        )
    }

    /// Reveal the values of `tree` in every order, one after another
    pub fn all_tree_traversals(tree: &BinarySearchTree) -> Self {
        Self::tree_steps(
            tree,
            &TraversalOrder::ALL,
            "Animating tree traversal...".to_string(),
            "Animation complete! Press any key...",
            |order| order.description().to_string(),
        )
    }

    fn tree_steps(
        tree: &BinarySearchTree,
        orders: &[TraversalOrder],
        caption: String,
        completion: &str,
        label: impl Fn(TraversalOrder) -> String,
    ) -> Self {
        let mut steps = vec![PlaybackStep::new(caption.clone(), TREE_STEP_DELAY)];
        let mut finished: Vec<Trail> = Vec::new();

        for &order in orders {
            let values: Vec<i32> = tree.traverse(order).collect();
            let count = values.len();
            let trail = Trail::new(label(order), values);

            for visited in 0..count {
                let mut step = PlaybackStep::new(caption.clone(), TREE_STEP_DELAY);
                step.trails = finished.clone();
                step.trails.push(trail.revealing(visited + 1));
                step.focus = Focus::Nodes { order, visited };
                steps.push(step);
            }

            finished.push(trail.completed());
        }

        let mut done = PlaybackStep::new(completion, Duration::ZERO);
        done.trails = finished;
        steps.push(done);

        Playback::new(steps)
    }

    /// Empty `queue`, enqueue 10, 20, 30, 40 and 50, then dequeue three values.
    ///
    /// The queue is left in its final state; every step carries a snapshot.
    pub fn queue_demo(queue: &mut Queue) -> Self {
        while queue.dequeue().is_some() {}

        let snapshot = |queue: &Queue, caption: String, delay: Duration| {
            let mut step = PlaybackStep::new(caption, delay);
            step.snapshot = Some(Structure::Queue(queue.clone()));
            step
        };

        let mut steps = vec![snapshot(
            &*queue,
            "Animating queue operations...".to_string(),
            DEQUEUE_STEP_DELAY,
        )];

        for value in (1..=5).map(|i| i * 10) {
            if queue.enqueue(value) {
                steps.push(snapshot(
                    &*queue,
                    format!("Enqueuing {}...", value),
                    ENQUEUE_STEP_DELAY,
                ));
            }
        }

        for _ in 0..3 {
            if let Some(value) = queue.dequeue() {
                steps.push(snapshot(
                    &*queue,
                    format!("Dequeuing {}...", value),
                    DEQUEUE_STEP_DELAY,
                ));
            }
        }

        steps.push(snapshot(
            &*queue,
            "Animation complete! Press any key...".to_string(),
            Duration::ZERO,
        ));

        Playback::new(steps)
    }
}
