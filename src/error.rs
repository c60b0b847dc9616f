//! Errors returned by rope operations.

use std::fmt;

/// Error returned when a position or range does not fit the rope.
///
/// All positions are measured in chars, the same unit as
/// [`Rope::total_size`](crate::Rope::total_size).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RopeError {
    /// A single position lies outside the valid bounds for the operation.
    IndexOutOfRange { position: usize, len: usize },
    /// A range is inverted or extends past the end of the rope.
    InvalidRange { start: usize, end: usize, len: usize },
}

impl fmt::Display for RopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RopeError::IndexOutOfRange { position, len } => {
                write!(f, "position {} is out of range for rope of length {}", position, len)
            }
            RopeError::InvalidRange { start, end, len } => {
                write!(f, "range {}..{} is invalid for rope of length {}", start, end, len)
            }
        }
    }
}

impl std::error::Error for RopeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_bounds() {
        let err = RopeError::IndexOutOfRange { position: 7, len: 4 };
        assert_eq!(err.to_string(), "position 7 is out of range for rope of length 4");

        let err = RopeError::InvalidRange { start: 3, end: 1, len: 4 };
        assert_eq!(err.to_string(), "range 3..1 is invalid for rope of length 4");
    }
}
