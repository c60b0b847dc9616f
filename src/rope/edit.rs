//! Structural edits: prepend, append, split, insert and delete.
//!
//! Every function takes the rope by value and hands back the new root, which
//! may be a different node than the one passed in. Splitting is the primitive
//! the other edits are built on; the pieces are glued back together with
//! AVL joins so a balanced rope stays balanced.
//!
//! The helpers here recurse to the height of the tree. A rope built by hand
//! can be arbitrarily tall, so each entry point first rebuilds degenerate
//! input with `flatten_if_degenerate`.

use tracing::trace;

use super::balance::{fix, flatten_if_degenerate, join, join_with};
use super::fragment;
use super::node::{Rope, Tree, tree_len};
use crate::error::RopeError;

fn prepend_tree(tree: Tree, text: String) -> Box<Rope> {
    match tree {
        None => Rope::from_parts(None, text, None),
        Some(mut node) => {
            node.left = Some(prepend_tree(node.left.take(), text));
            node.update();
            fix(node)
        }
    }
}

fn append_tree(tree: Tree, text: String) -> Box<Rope> {
    match tree {
        None => Rope::from_parts(None, text, None),
        Some(mut node) => {
            node.right = Some(append_tree(node.right.take(), text));
            node.update();
            fix(node)
        }
    }
}

/// Adds `text` to the front of the rope.
///
/// The new leaf is hung off the end of the left spine, i.e. below the node
/// with no left child, and the spine is rebalanced on the way back up.
pub fn prepend(rope: Rope, text: impl Into<String>) -> Rope {
    let text = text.into();
    if text.is_empty() {
        return rope;
    }
    *prepend_tree(flatten_if_degenerate(rope).into_tree(), text)
}

/// Adds `text` to the end of the rope, mirroring [`prepend`] on the right
/// spine.
pub fn append(rope: Rope, text: impl Into<String>) -> Rope {
    let text = text.into();
    if text.is_empty() {
        return rope;
    }
    *append_tree(flatten_if_degenerate(rope).into_tree(), text)
}

/// Splits a tree into `[0, position)` and `[position, len)`.
/// `position` must not exceed the tree's length.
fn split_tree(tree: Tree, position: usize) -> (Tree, Tree) {
    let Some(node) = tree else {
        return (None, None);
    };
    if position == 0 {
        return (None, Some(node));
    }
    if position >= node.total_size() {
        return (Some(node), None);
    }

    let size = node.size();
    let (left, text, right) = (*node).into_parts();
    let left_len = tree_len(&left);

    if position <= left_len {
        let (head, tail) = split_tree(left, position);
        (head, join_with(tail, text, right))
    } else if position < left_len + size {
        let (head, tail) = fragment::split_chars(text, position - left_len);
        (join_with(left, head, None), join_with(None, tail, right))
    } else {
        let (head, tail) = split_tree(right, position - left_len - size);
        (join_with(left, text, head), tail)
    }
}

/// Splits the rope at `position`, returning ropes holding
/// `[0, position)` and `[position, total_size)`.
pub fn split_at(rope: Rope, position: usize) -> Result<(Rope, Rope), RopeError> {
    let len = rope.total_size();
    if position > len {
        return Err(RopeError::IndexOutOfRange { position, len });
    }

    trace!(position, len, "split rope");
    let (left, right) = split_tree(flatten_if_degenerate(rope).into_tree(), position);
    Ok((Rope::from_tree(left), Rope::from_tree(right)))
}

/// Joins two ropes end to end.
pub fn concat(left: Rope, right: Rope) -> Rope {
    let left = flatten_if_degenerate(left);
    let right = flatten_if_degenerate(right);
    Rope::from_tree(join(left.into_tree(), right.into_tree()))
}

/// Inserts `text` so that it starts at char `location`.
pub fn insert(rope: Rope, text: impl Into<String>, location: usize) -> Result<Rope, RopeError> {
    let len = rope.total_size();
    if location > len {
        return Err(RopeError::IndexOutOfRange { position: location, len });
    }

    let text = text.into();
    trace!(location, len, inserted = fragment::char_len(&text), "insert into rope");
    if text.is_empty() {
        return Ok(rope);
    }

    let (left, right) = split_tree(flatten_if_degenerate(rope).into_tree(), location);
    Ok(Rope::from_tree(join_with(left, text, right)))
}

/// Removes the chars in `[start, end)`.
pub fn delete_range(rope: Rope, start: usize, end: usize) -> Result<Rope, RopeError> {
    let len = rope.total_size();
    if start > end || end > len {
        return Err(RopeError::InvalidRange { start, end, len });
    }

    trace!(start, end, len, "delete from rope");
    if start == end {
        return Ok(rope);
    }

    let (left, rest) = split_tree(flatten_if_degenerate(rope).into_tree(), start);
    let (_, right) = split_tree(rest, end - start);
    Ok(Rope::from_tree(join(left, right)))
}
