//! Line (wrap) breaking, a reduced UAX #14 subset.
//!
//! Categories: `Other`(3), `CR`(4), `LF`(5), `Space`(6), `OP`(7, opening
//! bracket), `CL`(8, closing bracket), `GL`(9, non-breaking glue such as
//! U+00A0 NBSP).
//!
//! `LF`, and `CR` not immediately followed by `LF`, are mandatory
//! ("hard") breaks (tag 2). A run of `Space` offers a break right after
//! its last character (tag 1, "soft") — the opportunistic kind a line
//! wrapper may or may not take. `OP`/`CL`/`GL`/`Other` never introduce a
//! break opportunity on their own (LB14/LB15/LB_GL, reduced: this crate
//! does not special-case a break immediately before `CL` the way LB14/15
//! do when there is no intervening space).
//!
//! Every rule here only ever looks at most one character behind the
//! current position (a `Space` run's merge is associative, and CR/LF's
//! forward interpretation never depends on what preceded it), so the
//! reverse table is the trivial one-state table: any single code point
//! stepped over backward is already a safe restart point.

use super::{cat, trie_for, LINE_DATA};
use crate::table::{BreakData, Row, StateTable};

const SPACE: u16 = 6;
const OP: u16 = 7;
const CL: u16 = 8;
const GL: u16 = 9;
const CATEGORY_COUNT: u32 = 10;

const TAG_SOFT: u16 = 1;
const TAG_HARD: u16 = 2;

static START_NEXT: [u16; 10] = {
    let mut n = [0u16; 10];
    n[cat::OTHER as usize] = 1;
    n[OP as usize] = 1;
    n[CL as usize] = 1;
    n[GL as usize] = 1;
    n[SPACE as usize] = 2;
    n[cat::CR as usize] = 3;
    n[cat::LF as usize] = 4;
    n[1] = 5; // EOF: end of text is always a boundary
    n
};

static SPACE_RUN_NEXT: [u16; 10] = {
    let mut n = [0u16; 10];
    n[SPACE as usize] = 2;
    n
};

static AFTER_CR_NEXT: [u16; 10] = {
    let mut n = [0u16; 10];
    n[cat::LF as usize] = 4;
    n
};

static NONE_NEXT: [u16; 10] = [0u16; 10];

static FORWARD_ROWS: [Row; 6] = [
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &[] },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &START_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: TAG_SOFT, next_states: &SPACE_RUN_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: TAG_HARD, next_states: &AFTER_CR_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: TAG_HARD, next_states: &NONE_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: 0, next_states: &NONE_NEXT },
];

static REVERSE_ROWS: [Row; 2] = [
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &[] },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &NONE_NEXT },
];

/// The line break data bundle.
pub static BUNDLE: BreakData = BreakData {
    forward: StateTable {
        rows: &FORWARD_ROWS,
        bof_required: false,
        dict_categories_start: CATEGORY_COUNT,
        lookahead_results_size: 0,
        category_count: CATEGORY_COUNT,
    },
    reverse: StateTable {
        rows: &REVERSE_ROWS,
        bof_required: false,
        dict_categories_start: CATEGORY_COUNT,
        lookahead_results_size: 0,
        category_count: CATEGORY_COUNT,
    },
    trie: trie_for(&LINE_DATA),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StrCursor;
    use crate::engine::BreakIterator;
    use std::vec;
    use std::vec::Vec;

    fn breaks(text: &str) -> Vec<&str> {
        let mut it = BreakIterator::new_line(&BUNDLE);
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
    fn offers_a_break_after_each_space_run() {
        assert_eq!(breaks("one two  three"), vec!["one ", "two  ", "three"]);
    }

    #[test]
    fn lf_is_a_mandatory_break() {
        assert_eq!(breaks("a\nb"), vec!["a\n", "b"]);
    }

    #[test]
    fn crlf_is_one_mandatory_break() {
        // No break opportunity precedes the CR either, so the whole
        // "a\r\n" run is swept into the first break: the preceding `a`
        // never got an accepting row of its own to fall back to.
        let mut it = BreakIterator::new_line(&BUNDLE);
        it.set_cursor(StrCursor::new("a\r\nb"));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.rule_status(), TAG_HARD);
        assert_eq!(it.next(), Some(4));
    }
}
