//! Unbalanced binary search tree
//!
//! Each [`TreeNode`] exclusively owns its two subtrees. For every node, all
//! values on the left are strictly smaller and all values on the right are
//! strictly greater. Inserting a value that is already present does nothing.
//!
//! # Traversals
//!
//! [`BinarySearchTree::traverse`] yields values lazily in one of three fixed
//! orders, see [`TraversalOrder`]. The iterator keeps an explicit work stack no
//! deeper than the tree, and a fresh call starts a fresh pass.
//!
//! # Sideways Rendering
//!
//! [`BinarySearchTree::sideways`] lays the tree out on its side: right subtree
//! above, node in the middle, left subtree below. Each level moves the node
//! [`TREE_INDENT_STEP`] columns to the right.
//!
//! ```text
//!      [8]
//! [5]
//!           [4]
//!      [3]
//!           [1]
//! ```

use super::constants::TREE_INDENT_STEP;
use std::cmp::Ordering;
use std::fmt;

type Link = Option<Box<TreeNode>>;

/// A tree node
#[derive(Debug)]
pub struct TreeNode {
    pub value: i32,
    left: Link,
    right: Link,
}

impl TreeNode {
    fn new(value: i32) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }
}

/// The fixed traversal orders of a [`BinarySearchTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Left, node, right
    InOrder,
    /// Node, left, right
    PreOrder,
    /// Left, right, node
    PostOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::InOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TraversalOrder::InOrder => "Inorder",
            TraversalOrder::PreOrder => "Preorder",
            TraversalOrder::PostOrder => "Postorder",
        }
    }

    /// Name with the visiting rule spelled out, e.g. `Inorder (L Root R)`
    pub fn description(self) -> &'static str {
        match self {
            TraversalOrder::InOrder => "Inorder (L Root R)",
            TraversalOrder::PreOrder => "Preorder (Root L R)",
            TraversalOrder::PostOrder => "Postorder (L R Root)",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One line of the sideways rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRow {
    pub value: i32,
    /// Distance from the root (root is 0)
    pub depth: usize,
}

impl TreeRow {
    /// Leading columns before this node's label
    pub fn indent(&self) -> usize {
        self.depth * TREE_INDENT_STEP
    }
}

pub struct BinarySearchTree {
    root: Link,
    len: usize,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    /// Insert `value`, returning `false` if it was already present
    pub fn insert(&mut self, value: i32) -> bool {
        let inserted = Self::insert_node(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Walks a cursor down the parent links until it reaches the empty link
    /// where `value` belongs, then stores the new subtree root in that link.
    fn insert_node(mut link: &mut Link, value: i32) -> bool {
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *link = Some(Box::new(TreeNode::new(value)));
        true
    }

    pub fn contains(&self, value: i32) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels (0 for an empty tree)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&TreeNode, usize)> =
            self.root().map(|node| (node, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|left| (left, depth + 1)));
            pending.extend(node.right().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Lazily walk the tree in `order`
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_> {
        Traversal {
            order,
            work: self.root().map(Work::Expand).into_iter().collect(),
        }
    }

    pub fn in_order(&self) -> Traversal<'_> {
        self.traverse(TraversalOrder::InOrder)
    }

    pub fn pre_order(&self) -> Traversal<'_> {
        self.traverse(TraversalOrder::PreOrder)
    }

    pub fn post_order(&self) -> Traversal<'_> {
        self.traverse(TraversalOrder::PostOrder)
    }

    /// Rows of the sideways rendering, top line first
    pub fn sideways(&self) -> Vec<TreeRow> {
        let mut rows = Vec::with_capacity(self.len);
        let mut pending: Vec<(&TreeNode, usize)> = Vec::new();
        let mut current = self.root().map(|node| (node, 0));

        // Reverse in-order: right, node, left
        while current.is_some() || !pending.is_empty() {
            while let Some((node, depth)) = current {
                pending.push((node, depth));
                current = node.right().map(|right| (right, depth + 1));
            }
            if let Some((node, depth)) = pending.pop() {
                rows.push(TreeRow {
                    value: node.value,
                    depth,
                });
                current = node.left().map(|left| (left, depth + 1));
            }
        }
        rows
    }

    /// Release every node in post-order, children before their parent
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            let (left, right) = (node.left.take(), node.right.take());
            if left.is_none() && right.is_none() {
                // leaf: released here
                continue;
            }
            // Revisit the now childless parent after both subtrees are gone
            pending.push(node);
            pending.extend(right);
            pending.extend(left);
        }
        self.len = 0;
    }
}

impl Default for BinarySearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BinarySearchTree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for BinarySearchTree {
    fn clone(&self) -> Self {
        let mut root: Link = None;
        {
            let mut pending: Vec<(&TreeNode, &mut Link)> = Vec::new();
            if let Some(node) = self.root() {
                pending.push((node, &mut root));
            }

            // Each copied node hands its empty child links to the work list
            while let Some((source, slot)) = pending.pop() {
                let copy = slot.insert(Box::new(TreeNode::new(source.value)));
                let TreeNode { left, right, .. } = &mut **copy;
                if let Some(child) = source.left() {
                    pending.push((child, left));
                }
                if let Some(child) = source.right() {
                    pending.push((child, right));
                }
            }
        }

        BinarySearchTree {
            root,
            len: self.len,
        }
    }
}

impl fmt::Debug for BinarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl FromIterator<i32> for BinarySearchTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

#[derive(Clone, Copy)]
enum Work<'a> {
    Expand(&'a TreeNode),
    Emit(i32),
}

/// Lazy traversal over a [`BinarySearchTree`] in a fixed [`TraversalOrder`]
#[derive(Clone)]
pub struct Traversal<'a> {
    order: TraversalOrder,
    work: Vec<Work<'a>>,
}

impl Traversal<'_> {
    pub fn order(&self) -> TraversalOrder {
        self.order
    }
}

impl Iterator for Traversal<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        while let Some(work) = self.work.pop() {
            let node = match work {
                Work::Emit(value) => return Some(value),
                Work::Expand(node) => node,
            };

            // Pushed in reverse of the visiting order
            let right = node.right().map(Work::Expand);
            let left = node.left().map(Work::Expand);
            let emit = Some(Work::Emit(node.value));
            let steps = match self.order {
                TraversalOrder::InOrder => [right, emit, left],
                TraversalOrder::PreOrder => [right, left, emit],
                TraversalOrder::PostOrder => [emit, right, left],
            };
            self.work.extend(steps.into_iter().flatten());
        }
        None
    }
}
