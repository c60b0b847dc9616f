//! Rotations and AVL-style rebalancing.
//!
//! Rotations are ordinary binary tree rotations. Because a node's text sits
//! between its two children in the logical string, a rotation moves node
//! texts around with their nodes and the in-order sequence stays the same.
//!
//! Edits keep ropes balanced through [`join_with`], which glues two balanced
//! trees around a text fragment and fixes heights on the way back up.
//! [`rebalance`] rebuilds an arbitrary tree out of the same joins.

use tracing::debug;

use super::node::{Rope, Tree, tree_height};

/*
 Turns:
     b
    / \
   a   c
      / \
     x   d

 Into:
       c
      / \
     b   d
    / \
   a   x
*/
fn rotate_left_node(mut node: Box<Rope>) -> Box<Rope> {
    match node.right.take() {
        None => node,
        Some(mut pivot) => {
            node.right = pivot.left.take();
            node.update();
            pivot.left = Some(node);
            pivot.update();
            pivot
        }
    }
}

/*
 Turns:
       b
      / \
     a   c
    / \
   d   x

 Into:
     a
    / \
   d   b
      / \
     x   c
*/
fn rotate_right_node(mut node: Box<Rope>) -> Box<Rope> {
    match node.left.take() {
        None => node,
        Some(mut pivot) => {
            node.left = pivot.right.take();
            node.update();
            pivot.right = Some(node);
            pivot.update();
            pivot
        }
    }
}

/// Rotates the rope left, making the right child the new root. A rope
/// without a right child is returned unchanged.
pub fn rotate_left(rope: Rope) -> Rope {
    *rotate_left_node(Box::new(rope))
}

/// Rotates the rope right, making the left child the new root. A rope
/// without a left child is returned unchanged.
pub fn rotate_right(rope: Rope) -> Rope {
    *rotate_right_node(Box::new(rope))
}

/// Restores balance at a single node whose children are balanced and differ
/// in height by at most two.
pub(crate) fn fix(mut node: Box<Rope>) -> Box<Rope> {
    let balance = node.balance_factor();
    if balance > 1 {
        // Left-right case
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left_node);
        }
        rotate_right_node(node)
    } else if balance < -1 {
        // Right-left case
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right_node);
        }
        rotate_left_node(node)
    } else {
        node
    }
}

/// Joins `left + text + right` into one tree. When both sides are balanced
/// the result is balanced, whatever their heights.
pub(crate) fn join_with(left: Tree, text: String, right: Tree) -> Tree {
    if text.is_empty() {
        return join(left, right);
    }

    match (left, right) {
        (Some(mut node), right) if node.height() > tree_height(&right) + 1 => {
            node.right = join_with(node.right.take(), text, right);
            node.update();
            Some(fix(node))
        }
        (left, Some(mut node)) if node.height() > tree_height(&left) + 1 => {
            node.left = join_with(left, text, node.left.take());
            node.update();
            Some(fix(node))
        }
        (left, right) => Some(Rope::from_parts(left, text, right)),
    }
}

/// Joins two trees, using the first fragment of `right` as the pivot.
pub(crate) fn join(left: Tree, right: Tree) -> Tree {
    match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (left, Some(right)) => {
            let (text, rest) = pop_first(right);
            join_with(left, text, rest)
        }
    }
}

/// Removes the structurally first node, returning its text and whatever
/// remains of the tree.
fn pop_first(mut node: Box<Rope>) -> (String, Tree) {
    match node.left.take() {
        Some(left) => {
            let (text, rest) = pop_first(left);
            node.left = rest;
            node.update();
            (text, Some(fix(node)))
        }
        None => {
            let (_, text, right) = (*node).into_parts();
            (text, right)
        }
    }
}

/// Pending work for [`rebalance_tree`].
enum Step {
    /// Rebalance this subtree and push the result.
    Visit(Tree),
    /// Pop the right and left results and join them around this text.
    Join(String),
}

/// Post-order rebuild with an explicit stack: each subtree is rebalanced,
/// then re-joined with its siblings. Only [`join_with`] recurses, and it is
/// only ever handed balanced trees.
fn rebalance_tree(tree: Tree) -> Tree {
    let mut steps = vec![Step::Visit(tree)];
    let mut done: Vec<Tree> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(None) => done.push(None),
            Step::Visit(Some(node)) => {
                let (left, text, right) = (*node).into_parts();
                steps.push(Step::Join(text));
                steps.push(Step::Visit(right));
                steps.push(Step::Visit(left));
            }
            Step::Join(text) => {
                let right = done.pop().flatten();
                let left = done.pop().flatten();
                done.push(join_with(left, text, right));
            }
        }
    }

    done.pop().flatten()
}

/// Rebuilds a rope whose height is out of all proportion to its length, so
/// the recursive edit paths stay shallow. Balanced ropes pass through.
pub(crate) fn flatten_if_degenerate(rope: Rope) -> Rope {
    if rope.is_degenerate() { rebalance(rope) } else { rope }
}

/// Rebuilds the rope bottom-up so that every node is balanced. Content is
/// unchanged; an already balanced rope keeps its shape. Empty fragments are
/// dropped along the way.
pub fn rebalance(rope: Rope) -> Rope {
    let before = rope.height();
    let rope = Rope::from_tree(rebalance_tree(rope.into_tree()));
    debug!(before, after = rope.height(), "rebalanced rope");
    rope
}
