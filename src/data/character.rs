//! Grapheme cluster ("character") breaking, a reduced UAX #29 subset.
//!
//! Categories: `Other`(3), `CR`(4), `LF`(5), `Control`(6), `Extend`(7),
//! `ZWJ`(8), `RI`(9, regional indicator). Rules covered: CR×LF does not
//! break (GB3), a base character absorbs any run of trailing `Extend` or
//! `ZWJ` into the same cluster (GB9), a `ZWJ` also absorbs the single code
//! point that follows it (an approximation of GB11, see below), and
//! regional indicators pair up two at a time (GB12/GB13). Everything else
//! breaks (GB999).
//!
//! The shipped trie only classifies the BMP (see DESIGN.md): every
//! supplementary code point, `Extended_Pictographic` or not, collapses to
//! the same `Other` category. That makes real GB11 (`ZWJ ×
//! Extended_Pictographic`) undetectable, so this table approximates it by
//! having `ZWJ` absorb whatever `Other` code point comes right after it,
//! unconditionally. A ZWJ-joined sequence of emoji therefore still comes
//! out as one cluster, at the cost of also merging ordinary BMP text of
//! the same shape (`"a\u{200D}b"` merges into a single cluster too, since
//! this table cannot tell that 'b' isn't a pictograph either).
//!
//! `RI` only ever reaches non-BMP code points (the flag-emoji block starts
//! at U+1F1E6), and this crate's shipped tries only classify the BMP — see
//! DESIGN.md. The state machine still implements the pairing rule and it
//! is exercised directly in `engine`'s tests, but no code point the
//! bundled trie can reach will ever produce it in practice.

use super::{cat, trie_for, CHARACTER_DATA};
use crate::table::{BreakData, Row, StateTable};

const EXTEND: u16 = 7;
const ZWJ: u16 = 8;
const RI: u16 = 9;
const CATEGORY_COUNT: u32 = 10;

static START_NEXT: [u16; 10] = {
    let mut n = [0u16; 10];
    n[cat::OTHER as usize] = 2;
    n[cat::CR as usize] = 3;
    n[cat::LF as usize] = 2;
    n[6] = 2; // Control
    n[EXTEND as usize] = 2;
    n[ZWJ as usize] = 2;
    n[RI as usize] = 4;
    n
};

static MERGE_NEXT: [u16; 10] = {
    let mut n = [0u16; 10];
    n[EXTEND as usize] = 2;
    n[ZWJ as usize] = 5; // absorb one more code point after the ZWJ
    n
};

static AFTER_CR_NEXT: [u16; 10] = {
    let mut n = [0u16; 10];
    n[cat::LF as usize] = 2;
    n
};

static AFTER_RI_NEXT: [u16; 10] = {
    let mut n = [0u16; 10];
    n[RI as usize] = 2;
    n
};

// Reached only via `ZWJ` from the merge state. `Other` is absorbed back
// into the cluster (GB11 approximation); a further `Extend` or `ZWJ` also
// continues the cluster, same as from the merge state itself.
static AFTER_ZWJ_NEXT: [u16; 10] = {
    let mut n = [0u16; 10];
    n[cat::OTHER as usize] = 2;
    n[EXTEND as usize] = 2;
    n[ZWJ as usize] = 5;
    n
};

static FORWARD_ROWS: [Row; 6] = [
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &[] },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &START_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: 1, next_states: &MERGE_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: 1, next_states: &AFTER_CR_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: 1, next_states: &AFTER_RI_NEXT },
    Row { accepting: 1, lookahead: 0, tag_index: 1, next_states: &AFTER_ZWJ_NEXT },
];

static REV_START_NEXT: [u16; 10] = {
    let mut n = [0u16; 10];
    n[EXTEND as usize] = 2;
    n[ZWJ as usize] = 2;
    n[RI as usize] = 3;
    n[cat::OTHER as usize] = 4;
    n
};

static REV_CHAIN_NEXT: [u16; 10] = {
    let mut n = [0u16; 10];
    n[EXTEND as usize] = 2;
    n[ZWJ as usize] = 2;
    n[cat::OTHER as usize] = 4;
    n
};

static REV_RI_RUN_NEXT: [u16; 10] = {
    let mut n = [0u16; 10];
    n[RI as usize] = 3;
    n
};

// Reached after stepping back over an `Other`: that code point only
// belongs to the run if the one before it is a `ZWJ` (the AFTER_ZWJ_NEXT
// absorption); anything else means it was a fresh cluster start, safe to
// stop at.
static REV_MAYBE_ABSORBED_NEXT: [u16; 10] = {
    let mut n = [0u16; 10];
    n[ZWJ as usize] = 2;
    n
};

static REVERSE_ROWS: [Row; 5] = [
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &[] },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REV_START_NEXT },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REV_CHAIN_NEXT },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REV_RI_RUN_NEXT },
    Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REV_MAYBE_ABSORBED_NEXT },
];

/// The grapheme-cluster break data bundle.
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
    trie: trie_for(&CHARACTER_DATA),
};
