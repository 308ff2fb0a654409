//! Sentence breaking, a reduced UAX #29 subset.
//!
//! Categories: `Other`(3), `CR`(4), `LF`(5), `Sp`(6), `ATerm`(7, `.`/`!`/
//! `?`/ellipsis), `Upper`(8), `Lower`(9, any other cased/alphabetic
//! letter), `Close`(10, closing quotes/brackets).
//!
//! A sentence boundary is found at an `ATerm`, optionally followed by
//! `Close` and/or `Sp` (SB8a/SB9/SB10), or at the end of text. Whether the
//! next significant character is `Upper` decides the rule-status tag:
//! `Upper` marks a genuine new sentence (tag 2), anything else marks a
//! softer continuation (tag 1) — this crate's stand-in for UAX #29's
//! abbreviation heuristics (SB8), which would otherwise need a dictionary
//! of known abbreviations this crate doesn't have.
//!
//! The tag decision needs one code point of lookahead past the `Sp`/
//! `Close` run, so unlike the other three break kinds this table uses the
//! engine's lookahead-completion slot (see `crate::table::Row::lookahead`)
//! rather than accepting unconditionally.

use super::{cat, trie_for, SENTENCE_DATA};
use crate::table::{BreakData, Row, StateTable};

const SP: u16 = 6;
const ATERM: u16 = 7;
const UPPER: u16 = 8;
const LOWER: u16 = 9;
const CLOSE: u16 = 10;
const CATEGORY_COUNT: u32 = 11;

const LOOKAHEAD_SLOT: u16 = 2;
const TAG_CONTINUATION: u16 = 1;
const TAG_TERMINAL: u16 = 2;

static START_NEXT: [u16; 11] = {
    let mut n = [0u16; 11];
    n[cat::OTHER as usize] = 1;
    n[cat::CR as usize] = 1;
    n[cat::LF as usize] = 1;
    n[SP as usize] = 1;
    n[UPPER as usize] = 1;
    n[LOWER as usize] = 1;
    n[CLOSE as usize] = 1;
    n[ATERM as usize] = 2;
    n[1] = 5; // EOF: end of text is always a boundary
    n
};

static PENDING_TERM_NEXT: [u16; 11] = {
    let mut n = [0u16; 11];
    n[cat::CR as usize] = 2;
    n[cat::LF as usize] = 2;
    n[SP as usize] = 2;
    n[CLOSE as usize] = 2;
    n[ATERM as usize] = 2;
    n[UPPER as usize] = 3;
    n[LOWER as usize] = 4;
    n[cat::OTHER as usize] = 4;
    n[1] = 5; // EOF after a terminator run: still a boundary
    n
};

static NONE_NEXT: [u16; 11] = [0u16; 11];

static FORWARD_ROWS: [Row; 6] = [
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &[] },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &START_NEXT },
    Row { accepting: 0, lookahead: LOOKAHEAD_SLOT, tag_index: 0, next_states: &PENDING_TERM_NEXT },
    Row { accepting: LOOKAHEAD_SLOT, lookahead: 0, tag_index: TAG_TERMINAL, next_states: &NONE_NEXT },
    Row { accepting: LOOKAHEAD_SLOT, lookahead: 0, tag_index: TAG_CONTINUATION, next_states: &NONE_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: 0, next_states: &NONE_NEXT },
];

// The reverse table only needs to find a position before any run of
// `ATerm`/`Close`/`Sp`/`CR`/`LF` characters, since that run is the only
// construct the forward table resolves with trailing context.
static REV_START_NEXT: [u16; 11] = {
    let mut n = [0u16; 11];
    n[ATERM as usize] = 2;
    n[CLOSE as usize] = 2;
    n[SP as usize] = 2;
    n[cat::CR as usize] = 2;
    n[cat::LF as usize] = 2;
    n
};

static REV_CLUMP_NEXT: [u16; 11] = REV_START_NEXT;

static REVERSE_ROWS: [Row; 3] = [
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &[] },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REV_START_NEXT },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REV_CLUMP_NEXT },
];

/// The sentence break data bundle.
pub static BUNDLE: BreakData = BreakData {
    forward: StateTable {
        rows: &FORWARD_ROWS,
        bof_required: false,
        dict_categories_start: CATEGORY_COUNT,
        lookahead_results_size: 3,
        category_count: CATEGORY_COUNT,
    },
    reverse: StateTable {
        rows: &REVERSE_ROWS,
        bof_required: false,
        dict_categories_start: CATEGORY_COUNT,
        lookahead_results_size: 3,
        category_count: CATEGORY_COUNT,
    },
    trie: trie_for(&SENTENCE_DATA),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StrCursor;
    use crate::engine::BreakIterator;
    use std::vec;
    use std::vec::Vec;

    fn sentences(text: &str) -> Vec<&str> {
        let mut it = BreakIterator::new_sentence(&BUNDLE);
        it.set_cursor(StrCursor::new(text));
        let mut out = Vec::new();
        let mut start = 0;
        while let Some(end) = it.next() {
            out.push(&text[start..end]);
            start = end;
        }
        out
    }

    #[test]
    fn splits_terminated_sentences() {
        assert_eq!(sentences("Go now. Stop here."), vec!["Go now. ", "Stop here."]);
    }

    #[test]
    fn keeps_closing_quote_with_its_sentence() {
        assert_eq!(sentences("She said \"Go!\" Then left."), vec![
            "She said \"Go!\" ",
            "Then left.",
        ]);
    }

    #[test]
    fn tags_terminal_vs_continuation_breaks() {
        let mut it = BreakIterator::new_sentence(&BUNDLE);
        it.set_cursor(StrCursor::new("Go now. stop here."));
        let first = it.next().unwrap();
        assert_eq!(&"Go now. stop here."[..first], "Go now. ");
        assert_eq!(it.rule_status(), TAG_CONTINUATION);
    }
}
