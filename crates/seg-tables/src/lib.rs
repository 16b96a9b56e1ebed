//! Packed Unicode property database for text segmentation (spec.md §4.1).
//!
//! This crate is the leaf of the segmentation engine: it owns nothing about
//! rule application, only "what is true of this code point". `seg-core`
//! layers the Run Cursor and the four boundary engines on top of the
//! accessors re-exported here.

pub mod accessors;
pub mod derived;
pub mod enums;
pub mod generated;
pub mod row;
pub mod trie;

pub use accessors::{
    east_asian_width, extended_pictographic, general_category, grapheme_cluster_break,
    indic_conjunct_break, line_break, sentence_break, word_break,
};
pub use derived::{
    changes_when_casefolded, changes_when_casemapped, changes_when_lowercased,
    changes_when_titlecased, changes_when_uppercased, is_alphabetic, is_case_ignorable, is_cased,
    is_default_ignorable, is_grapheme_base, is_grapheme_extend, is_id_continue, is_id_start,
    is_lowercase, is_math, is_uppercase, is_xid_continue, is_xid_start,
};
pub use enums::{
    EastAsianWidth, GeneralCategory, GraphemeClusterBreak, IndicConjunctBreak, LineBreak,
    SentenceBreak, WordBreak,
};
pub use generated::UNICODE_VERSION;
pub use row::PropertyRow;
