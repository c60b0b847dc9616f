//! The rope node type.
//!
//! A rope is a binary tree. Every node owns a text fragment plus optional
//! left and right subtrees, and the logical string of a subtree is
//! `left + text + right`. Leaves are simply nodes without children; branch
//! nodes may carry text of their own.
//!
//! # Cached metrics
//!
//! Each node caches three numbers so queries never have to walk the tree:
//! - `size`: chars in this node's own fragment
//! - `len`: chars in the whole subtree (`total_size`)
//! - `height`: 1 + the taller child's height, 1 for a leaf
//!
//! Fields are private and every structural change goes through
//! [`Rope::update`], so the caches always match the recursive definitions.
//!
//! `Clone`, `PartialEq`, `Debug` and `Drop` are written by hand with explicit
//! stacks, so a tree of any height can be copied, compared and freed.

use std::fmt;

use super::fragment;

/// An owned, possibly absent subtree. `None` is the empty rope.
pub(crate) type Tree = Option<Box<Rope>>;

/// A rope node, and therefore also a whole rope.
pub struct Rope {
    text: String,
    size: usize,
    len: usize,
    height: usize,
    pub(crate) left: Tree,
    pub(crate) right: Tree,
}

impl Rope {
    /// Creates a leaf holding `text`. An empty string gives the empty rope.
    pub fn new(text: impl Into<String>) -> Rope {
        let text = text.into();
        let size = fragment::char_len(&text);
        Rope {
            text,
            size,
            len: size,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Creates a node with the given children. Nothing is rebalanced; the
    /// shape is taken exactly as given.
    pub fn branch(left: Option<Rope>, text: impl Into<String>, right: Option<Rope>) -> Rope {
        let mut rope = Rope::new(text);
        rope.left = left.map(Box::new);
        rope.right = right.map(Box::new);
        rope.update();
        rope
    }

    pub(crate) fn from_parts(left: Tree, text: String, right: Tree) -> Box<Rope> {
        let mut node = Box::new(Rope::new(text));
        node.left = left;
        node.right = right;
        node.update();
        node
    }

    /// Recomputes the cached length and height from the children.
    /// Must be called after any change to `left` or `right`.
    pub(crate) fn update(&mut self) {
        self.len = tree_len(&self.left) + self.size + tree_len(&self.right);
        self.height = 1 + tree_height(&self.left).max(tree_height(&self.right));
    }

    /// Left height minus right height.
    pub(crate) fn balance_factor(&self) -> isize {
        tree_height(&self.left) as isize - tree_height(&self.right) as isize
    }

    /// Turns a rope into a subtree, dropping it entirely if it holds no text.
    pub(crate) fn into_tree(self) -> Tree {
        if self.len == 0 { None } else { Some(Box::new(self)) }
    }

    pub(crate) fn from_tree(tree: Tree) -> Rope {
        match tree {
            Some(node) => *node,
            None => Rope::default(),
        }
    }

    /// This node's own fragment, without its children.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Takes the node apart into `(left, text, right)`.
    pub(crate) fn into_parts(mut self) -> (Tree, String, Tree) {
        (self.left.take(), std::mem::take(&mut self.text), self.right.take())
    }

    /// Whether the tree is far taller than any AVL tree of its length could
    /// be. Edits rebuild such trees first so they only ever recurse to a
    /// logarithmic depth.
    pub(crate) fn is_degenerate(&self) -> bool {
        let log2 = (self.len + 2).ilog2() as usize + 1;
        self.height > 2 * log2 + 2
    }

    /// Length in chars of this node's own fragment.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn left(&self) -> Option<&Rope> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Rope> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Whether the whole rope holds no text.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total length in chars of the subtree rooted here.
    pub fn total_size(&self) -> usize {
        self.len
    }

    /// Depth of the deepest path from this node; a leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }
}

pub(crate) fn tree_len(tree: &Tree) -> usize {
    tree.as_ref().map_or(0, |node| node.len)
}

pub(crate) fn tree_height(tree: &Tree) -> usize {
    tree.as_ref().map_or(0, |node| node.height)
}

impl Drop for Rope {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Rope>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for Rope {
    fn clone(&self) -> Self {
        // Pre-order with the right child visited first; reversed, every node
        // comes after its left subtree and then its right subtree.
        let mut order: Vec<&Rope> = Vec::new();
        let mut stack: Vec<&Rope> = vec![self];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(node.left());
            stack.extend(node.right());
        }

        let mut built: Vec<Rope> = Vec::new();
        for node in order.into_iter().rev() {
            let right = if node.right.is_some() { built.pop().map(Box::new) } else { None };
            let left = if node.left.is_some() { built.pop().map(Box::new) } else { None };
            built.push(Rope {
                text: node.text.clone(),
                size: node.size,
                len: node.len,
                height: node.height,
                left,
                right,
            });
        }
        built.pop().unwrap_or_default()
    }
}

impl PartialEq for Rope {
    fn eq(&self, other: &Self) -> bool {
        let mut stack: Vec<(&Rope, &Rope)> = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.text != b.text || a.len != b.len || a.height != b.height {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (Some(a), Some(b)) => stack.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Rope {}

impl fmt::Debug for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rope")
            .field("len", &self.len)
            .field("height", &self.height)
            .field("shape", &self.to_debug_string())
            .finish()
    }
}

impl Default for Rope {
    fn default() -> Self {
        Rope::new(String::new())
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Self {
        Rope::new(text)
    }
}

impl From<String> for Rope {
    fn from(text: String) -> Self {
        Rope::new(text)
    }
}
