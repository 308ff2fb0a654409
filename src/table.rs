//! Break data tables (C3): the static, precompiled forward and reverse
//! state tables plus the shared trie, bundled per break kind.
//!
//! Rule compilation is out of scope for this crate (see spec §1, §4.3):
//! the tables below are consumed as already-compiled data, produced once
//! by `build.rs` and embedded as `static` arrays, the same way the
//! `unicode-linebreak` crate this one grew out of embeds its own
//! `BREAK_PROP_DATA` / `PAIR_TABLE`.

use crate::trie::CodePointTrie;

/// A single row of a compiled state table.
///
/// `accepting == 0` means the row does not record a break. `accepting == 1`
/// means an unconditional accept: record the current position as a
/// candidate break. `accepting > 1` indexes into the engine's
/// `lookahead_matches` scratch array: a lookahead rule has completed, and
/// if the saved position for that id is set, the break is recorded there
/// instead of at the current position.
///
/// `lookahead == 0` means this row does not mark a trailing-context slash
/// position. `lookahead > 1` means: save the current cursor position into
/// `lookahead_matches[lookahead]`.
///
/// `tag_index` is the rule-status value stored on a break produced from
/// this row (see [`crate::engine::BreakIterator::rule_status`]).
#[derive(Copy, Clone, Debug)]
pub struct Row {
    pub accepting: u16,
    pub lookahead: u16,
    pub tag_index: u16,
    /// `category -> next state`, indexed by the category produced by the
    /// trie. Length is always `categoryCount`.
    pub next_states: &'static [u16],
}

/// A compiled state table: a flat array of [`Row`]s plus the flags needed
/// to drive the scan. State `0` is the stop sink; state `1` is the start
/// state, per spec §3.
#[derive(Copy, Clone, Debug)]
pub struct StateTable {
    pub rows: &'static [Row],
    /// If set, the forward scan feeds the synthetic BOF category (2)
    /// before consuming any text.
    pub bof_required: bool,
    /// First category index that belongs to a dictionary (CJK/Thai word
    /// breaking). Categories `>= dict_categories_start` are tracked by the
    /// engine's dictionary-character counter but not otherwise acted on —
    /// dictionary refinement itself is out of scope (spec §1).
    pub dict_categories_start: u32,
    /// Size of the engine's per-scan lookahead scratch array.
    pub lookahead_results_size: u32,
    /// Shared with the trie; bounds `Row::next_states`.
    pub category_count: u32,
}

impl StateTable {
    /// The start-state row (`state == 1`).
    #[inline]
    pub fn start_row(&self) -> &'static Row {
        &self.rows[1]
    }

    /// The row for `state`. Panics (invariant violation, see spec §7) if
    /// `state` is out of range for this table — this can only happen if
    /// `next_states` was compiled with a target state this table doesn't
    /// have, a data-bundle corruption.
    #[inline]
    pub fn row(&self, state: u16) -> &'static Row {
        &self.rows[state as usize]
    }
}

/// One break-data bundle: the forward table, the reverse ("safe") table,
/// and the trie they both index with, for a single break kind.
///
/// Bundles are immutable, process-lifetime static data, freely shared
/// across engines and threads (spec §5).
pub struct BreakData {
    pub forward: StateTable,
    pub reverse: StateTable,
    pub trie: CodePointTrie,
}

/// Reserved category values, per spec §3.
pub mod category {
    /// Out-of-range or ill-formed code points.
    pub const ERROR: u16 = 0;
    /// Synthetic end-of-input sentinel fed once when the cursor is
    /// exhausted.
    pub const EOF: u16 = 1;
    /// Synthetic beginning-of-input sentinel, fed once before the first
    /// real code point when a table's `bof_required` flag is set.
    pub const BOF: u16 = 2;
    /// First ordinary (non-reserved) category.
    pub const FIRST_ORDINARY: u16 = 3;
}
