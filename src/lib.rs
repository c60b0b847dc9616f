//! A rope: a binary tree of text fragments that represents one long string.
//!
//! Edits split and re-join the tree instead of copying the whole text, and
//! the tree is kept height-balanced with AVL rotations. Positions are counted
//! in chars.
//!
//! # Quick Start
//!
//! ```
//! use rope::{Rope, append, delete_range, insert};
//!
//! let rope = Rope::new("test");
//! let rope = insert(rope, "123", 2)?;
//! assert_eq!(rope.to_string(), "te123st");
//!
//! let rope = delete_range(rope, 0, 5)?;
//! let rope = append(rope, "!");
//! assert_eq!(rope.to_string(), "st!");
//! assert_eq!(rope.char_at(2)?, '!');
//! assert!(rope.is_balanced());
//! # Ok::<(), rope::RopeError>(())
//! ```
//!
//! # Shapes
//!
//! Any node may hold text, not only leaves: a node reads as
//! `left + text + right`. [`RopeMap`] describes a tree shape node by node,
//! which is how tests build and compare exact shapes:
//!
//! ```
//! use rope::{Rope, RopeMap, rebalance};
//!
//! let chain = Rope::from_map(&RopeMap {
//!     text: "a".into(),
//!     left: None,
//!     right: Some(Box::new(RopeMap {
//!         text: "b".into(),
//!         left: None,
//!         right: Some(Box::new(RopeMap::leaf("c"))),
//!     })),
//! });
//! assert!(!chain.is_balanced());
//!
//! let balanced = rebalance(chain);
//! assert_eq!(balanced.to_debug_string(), "-a\nb\n-c\n");
//! ```

pub mod error;
mod rope;

pub use crate::error::RopeError;
pub use crate::rope::*;
