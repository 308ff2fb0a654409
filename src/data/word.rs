//! Word breaking, a reduced UAX #29 subset.
//!
//! Categories: `Other`(3), `CR`(4), `LF`(5), `Space`(6), `ALetter`(7),
//! `Numeric`(8), `MidLetter`(9, apostrophe/right-quote), `MidNum`(10,
//! period/comma), `Ideographic`(11), `Katakana`(12, hiragana lumped in).
//!
//! A run of `ALetter` is one word, and a single `MidLetter` surrounded by
//! `ALetter` on both sides joins rather than splits it (so "don't" stays
//! one word, matching WB6/WB7). The same holds for `Numeric` runs and
//! `MidNum` ("3.14" is one token, WB11/WB12). Consecutive whitespace
//! merges into a single non-word token. `Ideographic` code points never
//! merge with their neighbors (CJK text has no word-internal spacing to
//! lean on); `Katakana` runs merge with each other.

use super::{cat, trie_for, WORD_DATA};
use crate::table::{BreakData, Row, StateTable};

const SPACE: u16 = 6;
const ALETTER: u16 = 7;
const NUMERIC: u16 = 8;
const MIDLETTER: u16 = 9;
const MIDNUM: u16 = 10;
const IDEOGRAPHIC: u16 = 11;
const KATAKANA: u16 = 12;
const CATEGORY_COUNT: u32 = 13;

const TAG_NOT_A_WORD: u16 = 1;
const TAG_NUMBER: u16 = 2;
const TAG_LETTER: u16 = 3;
const TAG_KANA: u16 = 4;
const TAG_IDEOGRAPHIC: u16 = 5;

static START_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[cat::OTHER as usize] = 9;
    n[cat::CR as usize] = 6;
    n[cat::LF as usize] = 4;
    n[SPACE as usize] = 4;
    n[ALETTER as usize] = 2;
    n[NUMERIC as usize] = 3;
    n[MIDLETTER as usize] = 9;
    n[MIDNUM as usize] = 9;
    n[IDEOGRAPHIC as usize] = 10;
    n[KATAKANA as usize] = 5;
    n
};

static ALETTER_RUN_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[ALETTER as usize] = 2;
    n[MIDLETTER as usize] = 7;
    n
};

static NUMERIC_RUN_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[NUMERIC as usize] = 3;
    n[MIDNUM as usize] = 8;
    n
};

static SPACE_RUN_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[cat::LF as usize] = 4;
    n[SPACE as usize] = 4;
    n[cat::CR as usize] = 6;
    n
};

static KATAKANA_RUN_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[KATAKANA as usize] = 5;
    n
};

static AFTER_CR_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[cat::LF as usize] = 4;
    n
};

static PENDING_MIDLETTER_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[ALETTER as usize] = 2;
    n
};

static PENDING_MIDNUM_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[NUMERIC as usize] = 3;
    n
};

static NONE_NEXT: [u16; 13] = [0u16; 13];

static FORWARD_ROWS: [Row; 11] = [
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &[] },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &START_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: TAG_LETTER, next_states: &ALETTER_RUN_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: TAG_NUMBER, next_states: &NUMERIC_RUN_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: TAG_NOT_A_WORD, next_states: &SPACE_RUN_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: TAG_KANA, next_states: &KATAKANA_RUN_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: TAG_NOT_A_WORD, next_states: &AFTER_CR_NEXT },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &PENDING_MIDLETTER_NEXT },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &PENDING_MIDNUM_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: TAG_NOT_A_WORD, next_states: &NONE_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: TAG_IDEOGRAPHIC, next_states: &NONE_NEXT },
];

static REV_START_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[ALETTER as usize] = 2;
    n[NUMERIC as usize] = 3;
    n[cat::CR as usize] = 4;
    n[cat::LF as usize] = 4;
    n[SPACE as usize] = 4;
    n[KATAKANA as usize] = 5;
    n
};

static REV_ALETTER_RUN_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[ALETTER as usize] = 2;
    n[MIDLETTER as usize] = 6;
    n
};

static REV_NUMERIC_RUN_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[NUMERIC as usize] = 3;
    n[MIDNUM as usize] = 7;
    n
};

static REV_SPACE_RUN_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[cat::CR as usize] = 4;
    n[cat::LF as usize] = 4;
    n[SPACE as usize] = 4;
    n
};

static REV_KATAKANA_RUN_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[KATAKANA as usize] = 5;
    n
};

static REV_PENDING_MIDLETTER_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[ALETTER as usize] = 2;
    n
};

static REV_PENDING_MIDNUM_NEXT: [u16; 13] = {
    let mut n = [0u16; 13];
    n[NUMERIC as usize] = 3;
    n
};

static REVERSE_ROWS: [Row; 8] = [
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &[] },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REV_START_NEXT },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REV_ALETTER_RUN_NEXT },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REV_NUMERIC_RUN_NEXT },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REV_SPACE_RUN_NEXT },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REV_KATAKANA_RUN_NEXT },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REV_PENDING_MIDLETTER_NEXT },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REV_PENDING_MIDNUM_NEXT },
];

/// The word break data bundle.
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
    trie: trie_for(&WORD_DATA),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StrCursor;
    use crate::engine::BreakIterator;
    use std::vec;
    use std::vec::Vec;

    fn words(text: &str) -> Vec<&str> {
        let mut it = BreakIterator::new_word(&BUNDLE);
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
    fn splits_on_whitespace_and_punctuation() {
        assert_eq!(words("Hi there"), vec!["Hi", " ", "there"]);
    }

    #[test]
    fn keeps_contraction_together() {
        assert_eq!(words("don't"), vec!["don't"]);
    }

    #[test]
    fn keeps_decimal_number_together() {
        assert_eq!(words("3.14"), vec!["3.14"]);
    }

    #[test]
    fn rule_status_distinguishes_letters_from_punctuation() {
        let mut it = BreakIterator::new_word(&BUNDLE);
        it.set_cursor(StrCursor::new("Hi!"));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.rule_status(), TAG_LETTER);
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.rule_status(), TAG_NOT_A_WORD);
    }
}
