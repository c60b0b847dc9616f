//! Nested-map descriptions of rope shapes.
//!
//! A [`RopeMap`] spells out a tree node by node. It exists so that tests can
//! build ropes of an exact shape and assert on the shape an operation
//! produced; with the `serde` feature the description can be written as JSON.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::node::Rope;

/// One node of a tree description: its text and optional children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RopeMap {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub left: Option<Box<RopeMap>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub right: Option<Box<RopeMap>>,
}

impl RopeMap {
    pub fn leaf(text: impl Into<String>) -> RopeMap {
        RopeMap { text: text.into(), left: None, right: None }
    }
}

impl Rope {
    /// Builds a rope with exactly the shape described by `map`.
    pub fn from_map(map: &RopeMap) -> Rope {
        Rope::branch(
            map.left.as_deref().map(Rope::from_map),
            map.text.clone(),
            map.right.as_deref().map(Rope::from_map),
        )
    }

    /// Describes this rope's shape, the inverse of [`Rope::from_map`].
    pub fn to_map(&self) -> RopeMap {
        RopeMap {
            text: self.text().to_string(),
            left: self.left().map(|left| Box::new(left.to_map())),
            right: self.right().map(|right| Box::new(right.to_map())),
        }
    }

    /// Dumps the tree one node per line, in logical order, with one `-` per
    /// level of depth. A root `ABC` with children `DEF` and `GHI` prints as
    /// `"-DEF\nABC\n-GHI\n"`.
    pub fn to_debug_string(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<(&Rope, usize)> = Vec::new();
        push_left_spine(&mut stack, Some(self), 0);
        while let Some((node, depth)) = stack.pop() {
            out.extend(std::iter::repeat_n('-', depth));
            out.push_str(node.text());
            out.push('\n');
            push_left_spine(&mut stack, node.right(), depth + 1);
        }
        out
    }
}

fn push_left_spine<'a>(stack: &mut Vec<(&'a Rope, usize)>, mut node: Option<&'a Rope>, mut depth: usize) {
    while let Some(current) = node {
        stack.push((current, depth));
        node = current.left();
        depth += 1;
    }
}

impl From<&RopeMap> for Rope {
    fn from(map: &RopeMap) -> Self {
        Rope::from_map(map)
    }
}
