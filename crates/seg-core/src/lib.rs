//! UAX #29 / UAX #14 text segmentation: grapheme-cluster, word, sentence,
//! and line breaking over a property database built once and shared for
//! the life of the process (spec.md §1, §5).

mod cursor;
mod decision;
mod facade;
mod grapheme;
mod line;
mod sentence;
mod word;

pub use decision::Decision;
pub use facade::{
    grapheme_cluster_boundaries, grapheme_cluster_breakables, grapheme_cluster_units,
    line_boundaries, line_breakables, line_units, sentence_boundaries, sentence_breakables,
    sentence_units, word_boundaries, word_breakables, word_units, Tailoring,
};

// Re-export the property accessors directly: a caller who only needs
// `K_break(code_point) -> Enum` (spec.md §6) shouldn't have to depend on
// `seg-tables` separately.
pub use seg_tables::{
    changes_when_casefolded, changes_when_casemapped, changes_when_lowercased,
    changes_when_titlecased, changes_when_uppercased, east_asian_width, extended_pictographic,
    general_category, grapheme_cluster_break, indic_conjunct_break, is_alphabetic,
    is_case_ignorable, is_cased, is_default_ignorable, is_grapheme_base, is_grapheme_extend,
    is_id_continue, is_id_start, is_lowercase, is_math, is_uppercase, is_xid_continue,
    is_xid_start, line_break, sentence_break, word_break, UNICODE_VERSION,
};
