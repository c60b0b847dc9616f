//! Read-only queries over a rope.
//!
//! Lookups descend with a loop and traversals keep an explicit stack, so a
//! badly unbalanced rope costs time but never call-stack depth.

use std::fmt;

use smallvec::SmallVec;
use smallvec::smallvec;

use super::fragment;
use super::node::Rope;
use crate::error::RopeError;

/// Stack depth kept inline before spilling to the heap. A balanced rope of
/// this height already holds millions of fragments.
const INLINE_DEPTH: usize = 32;

impl Rope {
    /// Returns the char at `position` in the logical string.
    pub fn char_at(&self, position: usize) -> Result<char, RopeError> {
        let len = self.total_size();
        let out_of_range = || RopeError::IndexOutOfRange { position, len };
        if position >= len {
            return Err(out_of_range());
        }

        let mut node = self;
        let mut offset = position;
        loop {
            let left_len = node.left().map_or(0, Rope::total_size);
            if offset < left_len {
                node = node.left().ok_or_else(out_of_range)?;
            } else if offset < left_len + node.size() {
                return fragment::nth_char(node.text(), offset - left_len).ok_or_else(out_of_range);
            } else {
                offset -= left_len + node.size();
                node = node.right().ok_or_else(out_of_range)?;
            }
        }
    }

    /// Whether every node's children differ in height by at most one.
    pub fn is_balanced(&self) -> bool {
        let mut stack: SmallVec<[&Rope; INLINE_DEPTH]> = smallvec![self];
        while let Some(node) = stack.pop() {
            if node.balance_factor().abs() > 1 {
                return false;
            }
            stack.extend(node.left());
            stack.extend(node.right());
        }
        true
    }

    /// Iterates over the non-empty text fragments in logical order.
    pub fn chunks(&self) -> Chunks<'_> {
        let mut chunks = Chunks { stack: SmallVec::new() };
        chunks.push_left_spine(Some(self));
        chunks
    }

    /// Iterates over every char of the logical string.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chunks().flat_map(str::chars)
    }
}

/// In-order iterator over a rope's fragments, see [`Rope::chunks`].
pub struct Chunks<'a> {
    stack: SmallVec<[&'a Rope; INLINE_DEPTH]>,
}

impl<'a> Chunks<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a Rope>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(node) = self.stack.pop() {
            self.push_left_spine(node.right());
            if !node.text().is_empty() {
                return Some(node.text());
            }
        }
        None
    }
}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `ab` / `c` / (`de` / `fgh`), interior text included.
    fn sample() -> Rope {
        Rope::branch(
            Some(Rope::new("ab")),
            "c",
            Some(Rope::branch(None, "de", Some(Rope::new("fgh")))),
        )
    }

    #[test]
    fn to_string_includes_interior_text() {
        assert_eq!(sample().to_string(), "abcdefgh");
        assert_eq!(Rope::default().to_string(), "");
    }

    #[test]
    fn chunks_in_order() {
        let rope = sample();
        let chunks: Vec<&str> = rope.chunks().collect();
        assert_eq!(chunks, vec!["ab", "c", "de", "fgh"]);
    }

    #[test]
    fn chunks_skip_empty_fragments() {
        let rope = Rope::branch(Some(Rope::new("a")), "", Some(Rope::new("b")));
        assert_eq!(rope.chunks().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(Rope::default().chunks().count(), 0);
    }

    #[test]
    fn char_at_every_position() {
        let rope = sample();
        for (i, expected) in "abcdefgh".chars().enumerate() {
            assert_eq!(rope.char_at(i), Ok(expected));
        }
    }

    #[test]
    fn char_at_out_of_range() {
        let rope = sample();
        assert_eq!(rope.char_at(8), Err(RopeError::IndexOutOfRange { position: 8, len: 8 }));
        assert!(Rope::default().char_at(0).is_err());
    }

    #[test]
    fn char_at_descends_long_chain() {
        let rope = (0..5_000).fold(Rope::default(), |rope, i| {
            Rope::branch(Some(rope), char::from(b'0' + (i % 10) as u8).to_string(), None)
        });
        assert_eq!(rope.char_at(0), Ok('0'));
        assert_eq!(rope.char_at(4_321), Ok('1'));
        assert_eq!(rope.char_at(4_999), Ok('9'));
        assert_eq!(
            rope.char_at(5_000),
            Err(RopeError::IndexOutOfRange { position: 5_000, len: 5_000 })
        );
    }

    #[test]
    fn char_at_multibyte() {
        let rope = Rope::branch(Some(Rope::new("日本")), "語", None);
        assert_eq!(rope.char_at(1), Ok('本'));
        assert_eq!(rope.char_at(2), Ok('語'));
    }

    #[test]
    fn balance_check() {
        assert!(sample().is_balanced());
        assert!(Rope::new("x").is_balanced());

        let chain = Rope::branch(None, "a", Some(Rope::branch(None, "b", Some(Rope::new("c")))));
        assert!(!chain.is_balanced());

        // Unbalanced below a balanced root.
        let nested = Rope::branch(Some(chain), "d", Some(sample()));
        assert!(!nested.is_balanced());
    }

    #[test]
    fn chars_match_to_string() {
        let rope = sample();
        assert_eq!(rope.chars().collect::<String>(), rope.to_string());
    }
}
