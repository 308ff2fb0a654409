//! A rule-based break iterator, in the manner of ICU's `RuleBasedBreakIterator`:
//! a deterministic state machine, compiled ahead of time from a table of
//! rules, scanned over text to find grapheme cluster, word, sentence, and
//! line-wrap boundaries.
//!
//! The engine itself ([`engine::BreakIterator`]) is generic over any
//! [`cursor::TextCursor`], so it has no idea whether it's reading a `&str`,
//! a rope, or a piece table; [`cursor::StrCursor`] is the one cursor this
//! crate ships, and the per-break-kind functions below are a thin,
//! `&str`-specialized convenience layer over it.
//!
//! # Example
//!
//! ```
//! use unicode_rbbi::words;
//!
//! let spans: Vec<&str> = words("Hi there!").collect();
//! assert_eq!(spans, vec!["Hi", " ", "there", "!"]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs, missing_debug_implementations)]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

pub mod cursor;
pub mod data;
pub mod engine;
pub mod error;
pub mod table;
pub mod trie;

pub use cursor::{StrCursor, TextCursor};
pub use engine::BreakIterator;
pub use error::CursorError;
pub use table::BreakData;

/// A grapheme-cluster break iterator over `text`, yielding each cluster as
/// a `&str` slice in order.
pub fn graphemes(text: &str) -> Spans<'_> {
    Spans { it: BreakIterator::new_character(&data::character::BUNDLE), cursor: StrCursor::new(text), text }
}

/// A word break iterator over `text`, yielding each word *and* each
/// intervening run of non-word material (whitespace, punctuation) as a
/// `&str` slice, in order.
pub fn words(text: &str) -> Spans<'_> {
    Spans { it: BreakIterator::new_word(&data::word::BUNDLE), cursor: StrCursor::new(text), text }
}

/// A sentence break iterator over `text`, yielding each sentence
/// (including its trailing whitespace) as a `&str` slice, in order.
pub fn sentences(text: &str) -> Spans<'_> {
    Spans { it: BreakIterator::new_sentence(&data::sentence::BUNDLE), cursor: StrCursor::new(text), text }
}

/// A line break iterator over `text`, yielding each line-wrappable chunk
/// as a `&str` slice, in order. The boundary at the end of each chunk is
/// either a soft (breakable, not mandatory) or hard (mandatory) wrap
/// point; use [`line_break_indices`] instead if that distinction matters.
pub fn lines(text: &str) -> Spans<'_> {
    Spans { it: BreakIterator::new_line(&data::line::BUNDLE), cursor: StrCursor::new(text), text }
}

/// Whether a line break found at a given position must be taken
/// (`Mandatory`, e.g. after a newline) or merely may be (`Allowed`, e.g.
/// after a run of spaces).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BreakOpportunity {
    /// The line must break here.
    Mandatory,
    /// The line may break here.
    Allowed,
}

/// Line break positions and their opportunity kind, read off the line
/// break iterator's rule-status tag (spec §3's line tag catalogue: 1 =
/// soft, 2 = hard).
pub fn line_break_indices(text: &str) -> impl Iterator<Item = (usize, BreakOpportunity)> + '_ {
    let mut it = BreakIterator::new_line(&data::line::BUNDLE);
    it.set_cursor(StrCursor::new(text));
    core::iter::from_fn(move || {
        let pos = it.next()?;
        let kind = if it.rule_status() == 2 { BreakOpportunity::Mandatory } else { BreakOpportunity::Allowed };
        Some((pos, kind))
    })
}

/// An iterator over the `&str` spans between consecutive boundaries found
/// by a [`BreakIterator`], produced by [`graphemes`], [`words`],
/// [`sentences`] and [`lines`].
pub struct Spans<'a> {
    it: BreakIterator<'static, StrCursor<'a>>,
    cursor: StrCursor<'a>,
    text: &'a str,
}

impl<'a> Spans<'a> {
    fn pos(&self) -> usize {
        use TextCursor as _;
        self.cursor.position()
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.it.set_cursor(self.cursor);
        let start = self.pos();
        let end = self.it.next()?;
        self.cursor = StrCursor::new(self.text);
        use TextCursor as _;
        self.cursor.set_position(end).expect("break iterator returned a non-boundary position");
        Some(&self.text[start..end])
    }
}

impl<'a> core::fmt::Debug for Spans<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Spans").field("remaining", &&self.text[self.pos()..]).finish()
    }
}
