//! Break iterator engine (C4): drives forward and backward scans over a
//! [`TextCursor`] using a [`BreakData`] bundle's trie and state tables.
//!
//! Engines are not safe for concurrent use; the data bundle they reference
//! is immutable and freely shared (spec §5).

use crate::cursor::{StrCursor, TextCursor};
use crate::table::{category, BreakData};

/// Upper bound on a table's `lookahead_results_size`. No break kind this
/// crate ships needs more than a handful of concurrently pending lookahead
/// rules; a fixed-size array avoids heap allocation on the hot path (spec
/// §5: "no per-call allocation"), matching the base crate's own `no_std`,
/// zero-heap posture.
pub const MAX_LOOKAHEAD: usize = 8;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum ScanMode {
    Start,
    Run,
    End,
}

/// A rule-based break iterator bound to one break-data bundle and one
/// cursor implementation.
///
/// Construct with [`BreakIterator::new_character`] / `_word` / `_sentence`
/// / `_line`, bind a cursor with [`BreakIterator::set_cursor`], then drive
/// with [`BreakIterator::next`] / [`BreakIterator::previous`].
pub struct BreakIterator<'d, C: TextCursor> {
    data: &'d BreakData,
    cursor: Option<C>,
    lookahead_matches: [Option<C::Pos>; MAX_LOOKAHEAD],
    rule_status_index: u16,
    dict_char_count: u32,
}

impl<'d, C: TextCursor> BreakIterator<'d, C> {
    fn new(data: &'d BreakData) -> Self {
        debug_assert!(
            (data.forward.lookahead_results_size as usize) <= MAX_LOOKAHEAD,
            "forward table's lookahead_results_size exceeds MAX_LOOKAHEAD"
        );
        BreakIterator {
            data,
            cursor: None,
            lookahead_matches: [None; MAX_LOOKAHEAD],
            rule_status_index: 0,
            dict_char_count: 0,
        }
    }

    /// A grapheme-cluster ("character") break iterator.
    pub fn new_character(data: &'d BreakData) -> Self {
        Self::new(data)
    }

    /// A word break iterator.
    pub fn new_word(data: &'d BreakData) -> Self {
        Self::new(data)
    }

    /// A sentence break iterator.
    pub fn new_sentence(data: &'d BreakData) -> Self {
        Self::new(data)
    }

    /// A line (wrap) break iterator.
    pub fn new_line(data: &'d BreakData) -> Self {
        Self::new(data)
    }

    /// Rebinds the text source. Per spec §4.4.1, this does not reseek to
    /// the start of text: the next `next()`/`previous()` call treats the
    /// cursor's current position as the starting point, so callers wanting
    /// "from the beginning" must position the cursor there themselves.
    pub fn set_cursor(&mut self, cursor: C) {
        self.cursor = Some(cursor);
    }

    /// Returns the last matched rule's tag, or `0` after a forced advance.
    /// Valid after any `next`/`previous` call, until the next one.
    pub fn rule_status(&self) -> u16 {
        self.rule_status_index
    }

    /// Number of dictionary-owned (CJK/Thai) code points the forward scan
    /// has consumed across the iterator's lifetime. Tracked per spec §4.4.2
    /// step 2; dictionary-based refinement itself is a future extension
    /// (spec §1) and is not performed here.
    pub fn dictionary_character_count(&self) -> u32 {
        self.dict_char_count
    }

    fn cursor_mut(&mut self) -> &mut C {
        self.cursor
            .as_mut()
            .expect("BreakIterator: no cursor bound; call set_cursor first")
    }

    fn cursor_ref(&self) -> &C {
        self.cursor
            .as_ref()
            .expect("BreakIterator: no cursor bound; call set_cursor first")
    }

    /// Borrows the bound cursor, if any.
    pub fn cursor(&self) -> Option<&C> {
        self.cursor.as_ref()
    }

    fn category_of(&self, cp: u32, category_count: u32) -> u16 {
        let cat = self.data.trie.get(cp) as u16;
        debug_assert!(
            (cat as u32) < category_count,
            "trie returned a category out of range for this table"
        );
        cat
    }

    /// Returns the next break position strictly after the cursor's entry
    /// position, and leaves the cursor there. Returns `None` iff the
    /// cursor was already at the end of text on entry.
    pub fn next(&mut self) -> Option<C::Pos> {
        for slot in self.lookahead_matches.iter_mut() {
            *slot = None;
        }
        self.rule_status_index = 0;

        let table = self.data.forward;
        let initial_pos = self.cursor_ref().position();
        let mut result = initial_pos;

        let mut state: u16 = 1;
        let mut row = table.row(state);
        let mut mode = if table.bof_required {
            ScanMode::Start
        } else {
            ScanMode::Run
        };

        loop {
            let category = match mode {
                ScanMode::End => break,
                ScanMode::Start => category::BOF,
                ScanMode::Run => match self.cursor_mut().next() {
                    Some(cp) => {
                        let cat = self.category_of(cp, table.category_count);
                        if (cat as u32) >= table.dict_categories_start {
                            self.dict_char_count += 1;
                        }
                        cat
                    }
                    None => {
                        mode = ScanMode::End;
                        category::EOF
                    }
                },
            };

            state = row.next_states[category as usize];
            row = table.row(state);

            match row.accepting {
                0 => {}
                1 => {
                    if mode != ScanMode::Start {
                        result = self.cursor_ref().position();
                        self.rule_status_index = row.tag_index;
                    }
                }
                slot => {
                    let slot = slot as usize;
                    if let Some(saved) = self.lookahead_matches[slot] {
                        self.cursor_mut()
                            .set_position(saved)
                            .expect("engine: saved lookahead position invalid for this cursor");
                        self.rule_status_index = row.tag_index;
                        return Some(saved);
                    }
                }
            }

            if row.lookahead > 1 {
                self.lookahead_matches[row.lookahead as usize] = Some(self.cursor_ref().position());
            }

            if state == 0 {
                break;
            }

            if mode == ScanMode::Start {
                mode = ScanMode::Run;
            }
        }

        if result == initial_pos {
            // The rules failed to advance. Force progress by consuming one
            // code point, per spec §4.4.2.
            self.cursor_mut()
                .set_position(initial_pos)
                .expect("engine: initial_pos invalid for this cursor");
            match self.cursor_mut().next() {
                None => return None,
                Some(_) => {
                    result = self.cursor_ref().position();
                    self.rule_status_index = 0;
                }
            }
        }

        self.cursor_mut()
            .set_position(result)
            .expect("engine: computed result position invalid for this cursor");
        Some(result)
    }

    /// Finds a guaranteed-correct restart point at or before `from_pos`:
    /// a boundary from which forward scanning reproduces the same break
    /// set as scanning from the true start of text. Uses the reverse
    /// ("safe") table, which has no lookahead or accepting semantics.
    fn safe_previous(&mut self, from_pos: C::Pos) -> Option<C::Pos> {
        self.cursor_mut()
            .set_position(from_pos)
            .expect("engine: safe_previous: from_pos invalid for this cursor");
        let mut cp = self.cursor_mut().previous()?;

        let table = self.data.reverse;
        let mut state: u16 = 1;
        let mut row = table.row(state);
        loop {
            let category = self.category_of(cp, table.category_count);
            state = row.next_states[category as usize];
            row = table.row(state);
            if state == 0 {
                break;
            }
            match self.cursor_mut().previous() {
                Some(next_cp) => cp = next_cp,
                None => break,
            }
        }
        Some(self.cursor_ref().position())
    }

    /// Returns the largest break position strictly less than the cursor's
    /// entry position. Returns `None` iff the entry position is at the
    /// beginning of text.
    pub fn previous(&mut self) -> Option<C::Pos> {
        let start_pos = self.cursor_ref().position();
        let mut backtrace_start = start_pos;
        let mut last_break: Option<C::Pos> = None;

        loop {
            match self.safe_previous(backtrace_start) {
                None => {
                    if backtrace_start == start_pos {
                        return None;
                    }
                    self.cursor_mut()
                        .set_position(backtrace_start)
                        .expect("engine: previous: backtrace_start invalid for this cursor");
                    return Some(backtrace_start);
                }
                Some(new_start) => {
                    backtrace_start = new_start;
                    self.cursor_mut()
                        .set_position(new_start)
                        .expect("engine: previous: new_start invalid for this cursor");
                    loop {
                        match self.next() {
                            Some(p) => {
                                if p < start_pos {
                                    last_break = Some(p);
                                } else {
                                    break;
                                }
                            }
                            None => panic!(
                                "engine: previous: forward replay hit end of text before reaching \
                                 the entry position; data or rules are inconsistent"
                            ),
                        }
                    }
                }
            }

            if last_break.is_some() {
                break;
            }
        }

        let result = last_break.expect("engine: previous: loop exited without a break");
        self.cursor_mut()
            .set_position(result)
            .expect("engine: previous: result position invalid for this cursor");
        Some(result)
    }
}

/// Navigation helpers composed from [`BreakIterator::next`] /
/// [`BreakIterator::previous`] (spec §1: "straightforward compositions of
/// the two primitives"). Specialized to [`StrCursor`] since they need to
/// know the text's start/end, which the generic [`TextCursor`] contract
/// deliberately does not expose.
impl<'d, 'a> BreakIterator<'d, StrCursor<'a>> {
    /// The position of the first boundary (always `0`); rebinds the cursor
    /// to the start of its text.
    pub fn first(&mut self) -> usize {
        let text = self.cursor_ref().text();
        self.cursor_mut().set_position(0).expect("start of text is always a valid position");
        let _ = text;
        0
    }

    /// The position of the last boundary (always `len(text)`); rebinds the
    /// cursor to the end of its text.
    pub fn last(&mut self) -> usize {
        let len = self.cursor_ref().text().len();
        self.cursor_mut()
            .set_position(len)
            .expect("end of text is always a valid position");
        len
    }

    /// The first break at or after `pos`.
    pub fn following(&mut self, pos: usize) -> Option<usize> {
        self.cursor_mut()
            .set_position(pos)
            .expect("following: pos is not a valid code point boundary");
        self.next()
    }

    /// The last break strictly before `pos`.
    pub fn preceding(&mut self, pos: usize) -> Option<usize> {
        self.cursor_mut()
            .set_position(pos)
            .expect("preceding: pos is not a valid code point boundary");
        self.previous()
    }

    /// Whether `pos` is itself a break position.
    pub fn is_boundary(&mut self, pos: usize) -> bool {
        let len = self.cursor_ref().text().len();
        if pos == 0 || pos == len {
            return true;
        }
        match self.preceding(pos) {
            Some(b) => b == pos,
            None => false,
        }
    }

    /// Moves `delta` breaks forward (positive) or backward (negative) from
    /// the current position, returning the final position, or `None` if
    /// the move would go past either end of the text.
    pub fn next_n(&mut self, delta: i32) -> Option<usize> {
        let mut last = self.cursor_ref().position();
        if delta >= 0 {
            for _ in 0..delta {
                last = self.next()?;
            }
        } else {
            for _ in 0..delta.unsigned_abs() {
                last = self.previous()?;
            }
        }
        Some(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Row, StateTable};
    use crate::trie::{CodePointTrie, TrieData, TrieType};

    // A minimal "break after every code point" table: two ordinary
    // categories aren't even needed — every non-sentinel code point maps
    // to category 3, and the single state accepts unconditionally on it.
    fn trivial_trie() -> CodePointTrie {
        static DATA: [u8; 66] = {
            let mut d = [3u8; 66];
            d[64] = 0; // high value (unused, cp<=0x10FFFF always hits fast path here)
            d[65] = 0; // error value
            d
        };
        static FAST_INDEX: [u16; 0x10000 / 64] = [0; 0x10000 / 64];
        CodePointTrie::from_parts(
            TrieType::Fast,
            &FAST_INDEX,
            &[],
            &[],
            &[],
            TrieData::U8(&DATA),
            0xFFFF,
            0x110000,
        )
    }

    fn break_every_char_bundle() -> BreakData {
        // States: 0 = stop, 1 = start, 2 = "saw one char" (accepting).
        // From the accepting state, every category goes straight to the
        // stop sink: the scan halts after exactly one code point, so each
        // `next()` call reports a single character's break.
        static START_NEXT: [u16; 4] = [0, 0, 2, 2]; // category 3 (and BOF/EOF too) -> state 2
        static ACCEPT_NEXT: [u16; 4] = [0, 0, 0, 0];
        static ROWS: [Row; 3] = [
            Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &[] },
            Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &START_NEXT },
            Row { accepting: 1, lookahead: 0, tag_index: 1, next_states: &ACCEPT_NEXT },
        ];
        let forward = StateTable {
            rows: &ROWS,
            bof_required: false,
            dict_categories_start: 100,
            lookahead_results_size: 0,
            category_count: 4,
        };
        static REVERSE_NEXT: [u16; 4] = [0, 0, 0, 0];
        static REVERSE_ROWS: [Row; 2] = [
            Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &[] },
            Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REVERSE_NEXT },
        ];
        let reverse = StateTable {
            rows: &REVERSE_ROWS,
            bof_required: false,
            dict_categories_start: 100,
            lookahead_results_size: 0,
            category_count: 4,
        };
        BreakData { forward, reverse, trie: trivial_trie() }
    }

    #[test]
    fn next_breaks_after_every_character() {
        let data = break_every_char_bundle();
        let mut it = BreakIterator::new_character(&data);
        it.set_cursor(StrCursor::new("abc"));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn previous_mirrors_next_in_reverse() {
        let data = break_every_char_bundle();
        let mut it = BreakIterator::new_character(&data);
        it.set_cursor(StrCursor::new("abc"));
        it.cursor_mut().set_position(3).unwrap();
        assert_eq!(it.previous(), Some(2));
        assert_eq!(it.previous(), Some(1));
        assert_eq!(it.previous(), Some(0));
        assert_eq!(it.previous(), None);
    }

    #[test]
    fn next_then_previous_restores_entry_position() {
        let data = break_every_char_bundle();
        let mut it = BreakIterator::new_character(&data);
        it.set_cursor(StrCursor::new("abc"));
        it.cursor_mut().set_position(1).unwrap();
        let entry = it.cursor_ref().position();
        it.next().unwrap();
        it.previous().unwrap();
        assert_eq!(it.cursor_ref().position(), entry);
    }

    #[test]
    fn empty_text_first_next_fails() {
        let data = break_every_char_bundle();
        let mut it = BreakIterator::new_character(&data);
        it.set_cursor(StrCursor::new(""));
        assert_eq!(it.next(), None);
    }

    fn bof_required_bundle() -> BreakData {
        // `bof_required: true`: the start row transitions on the synthetic
        // BOF category (2) into a row that is itself `accepting`. Per spec
        // §4.4.2 step 4, a break is only recorded from an accepting row
        // "if not in Start mode" — the BOF step alone must not end the
        // scan or record a break at the entry position; the tentative
        // state it reaches keeps absorbing real input afterward.
        static START_NEXT: [u16; 4] = [0, 0, 2, 0]; // category::BOF (2) -> state 2
        static TENTATIVE_NEXT: [u16; 4] = [0, 0, 0, 2]; // ordinary category (3) self-loops
        static ROWS: [Row; 3] = [
            Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &[] },
            Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &START_NEXT },
            Row { accepting: 1, lookahead: 0, tag_index: 7, next_states: &TENTATIVE_NEXT },
        ];
        let forward = StateTable {
            rows: &ROWS,
            bof_required: true,
            dict_categories_start: 100,
            lookahead_results_size: 0,
            category_count: 4,
        };
        static REVERSE_NEXT: [u16; 4] = [0, 0, 0, 0];
        static REVERSE_ROWS: [Row; 2] = [
            Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &[] },
            Row { accepting: 0, lookahead: 0, tag_index: 0, next_states: &REVERSE_NEXT },
        ];
        let reverse = StateTable {
            rows: &REVERSE_ROWS,
            bof_required: false,
            dict_categories_start: 100,
            lookahead_results_size: 0,
            category_count: 4,
        };
        BreakData { forward, reverse, trie: trivial_trie() }
    }

    #[test]
    fn bof_triggered_acceptance_does_not_end_the_scan_in_start_mode() {
        let data = bof_required_bundle();
        let mut it = BreakIterator::new_character(&data);
        it.set_cursor(StrCursor::new("ab"));
        // The BOF step alone must not produce a break at position 0; the
        // scan keeps running and reports the break after both real
        // characters are absorbed, with the tag from the real accept.
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.rule_status(), 7);
        assert_eq!(it.next(), None);
    }
}
