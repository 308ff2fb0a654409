//! Error types for cursor misuse (spec §7, category 1).
//!
//! Scanner exhaustion (`Next`/`Previous` reaching an end) and data/invariant
//! violations (spec §7, categories 2 and 3) are not modeled as `Result`s:
//! exhaustion is the `None` arm of the `Option<Pos>` the engine returns, and
//! invariant violations are treated as fatal per spec and surfaced with
//! `panic!`/`debug_assert!`, since the spec explicitly rules out retries or
//! partial results for them.

use core::fmt;

/// A [`crate::cursor::TextCursor::set_position`] call was rejected.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CursorError {
    /// The requested position is beyond the end of the text.
    OutOfRange,
    /// The requested position does not lie on a code-point boundary.
    NotCodePointBoundary,
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::OutOfRange => write!(f, "position is out of range for this text"),
            CursorError::NotCodePointBoundary => {
                write!(f, "position does not lie on a code point boundary")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CursorError {}
