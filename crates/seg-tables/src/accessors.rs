//! Thin per-column property accessors (spec.md §2 item 2, §6).
//!
//! Each function is total over `0..=0x10FFFF` and never panics, per the
//! error taxonomy in spec.md §7: out-of-range or surrogate code points fall
//! back to row 0 inside [`crate::generated::tables`], which these functions
//! surface as the enum's `Other`/`XX`/`None` default.

use crate::enums::{
    EastAsianWidth, GeneralCategory, GraphemeClusterBreak, IndicConjunctBreak, LineBreak,
    SentenceBreak, WordBreak,
};
use crate::generated::tables;
use crate::row::PropertyRow;

#[inline]
fn row_for(cp: u32) -> PropertyRow {
    let idx = tables().trie.row_index(cp);
    crate::generated::ROWS.get(idx).copied().unwrap_or_else(|| {
        tracing::trace!(target: "seg_tables.accessors", cp, idx, "row index out of range, falling back to default");
        PropertyRow::DEFAULT
    })
}

/// Precomposed Hangul syllables (U+AC00–U+D7A3) follow a closed-form rule:
/// every 28th syllable (no trailing consonant jamo) is `LV`, the rest are
/// `LVT`. Materializing that as 11,172 individual table rows would dwarf
/// every other entry the offline builder emits, so the engine special-cases
/// the (trivial, well-known) arithmetic instead — the table still drives
/// everything else. See DESIGN.md.
#[inline]
fn hangul_syllable_index(cp: u32) -> Option<u32> {
    if (0xAC00..=0xD7A3).contains(&cp) {
        Some(cp - 0xAC00)
    } else {
        None
    }
}

/// `Grapheme_Cluster_Break` (spec.md §6).
pub fn grapheme_cluster_break(cp: u32) -> GraphemeClusterBreak {
    if let Some(index) = hangul_syllable_index(cp) {
        return if index % 28 == 0 {
            GraphemeClusterBreak::LV
        } else {
            GraphemeClusterBreak::LVT
        };
    }
    row_for(cp).gcb
}

/// `Word_Break`.
pub fn word_break(cp: u32) -> WordBreak {
    row_for(cp).wb
}

/// `Sentence_Break`.
pub fn sentence_break(cp: u32) -> SentenceBreak {
    row_for(cp).sb
}

/// `Line_Break`, pre-LB1 resolution (may still read `AI`/`SA`/`SG`/`CJ`/`XX`;
/// the line-break engine resolves those per spec.md §4.7 step 1).
pub fn line_break(cp: u32) -> LineBreak {
    if let Some(index) = hangul_syllable_index(cp) {
        return if index % 28 == 0 {
            LineBreak::H2
        } else {
            LineBreak::H3
        };
    }
    row_for(cp).lb
}

/// `Extended_Pictographic` (spec.md §6).
pub fn extended_pictographic(cp: u32) -> bool {
    row_for(cp).extended_pictographic
}

/// `Indic_Conjunct_Break` (spec.md §6).
pub fn indic_conjunct_break(cp: u32) -> IndicConjunctBreak {
    row_for(cp).incb
}

/// `General_Category`, collapsed to the Mn/Mc distinction LB1 needs.
pub fn general_category(cp: u32) -> GeneralCategory {
    row_for(cp).gc
}

/// `East_Asian_Width`, collapsed to wide/narrow for LB30.
pub fn east_asian_width(cp: u32) -> EastAsianWidth {
    if hangul_syllable_index(cp).is_some() {
        return EastAsianWidth::Wide;
    }
    row_for(cp).eaw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_lv_lvt_closed_form() {
        // U+AC00 is index 0 -> LV; U+AC01 is index 1 -> LVT.
        assert_eq!(grapheme_cluster_break(0xAC00), GraphemeClusterBreak::LV);
        assert_eq!(grapheme_cluster_break(0xAC01), GraphemeClusterBreak::LVT);
        assert_eq!(line_break(0xAC00), LineBreak::H2);
        assert_eq!(line_break(0xAC01), LineBreak::H3);
    }

    #[test]
    fn jamo_classes() {
        assert_eq!(grapheme_cluster_break(0x1100), GraphemeClusterBreak::L);
        assert_eq!(grapheme_cluster_break(0x1161), GraphemeClusterBreak::V);
        assert_eq!(grapheme_cluster_break(0x11A8), GraphemeClusterBreak::T);
    }

    #[test]
    fn cr_lf_control() {
        assert_eq!(grapheme_cluster_break(0x0D), GraphemeClusterBreak::CR);
        assert_eq!(grapheme_cluster_break(0x0A), GraphemeClusterBreak::LF);
        assert_eq!(grapheme_cluster_break(0x01), GraphemeClusterBreak::Control);
    }

    #[test]
    fn indic_conjunct_break_sample() {
        assert_eq!(indic_conjunct_break(0x915), IndicConjunctBreak::Consonant);
        assert_eq!(indic_conjunct_break(0x94D), IndicConjunctBreak::Linker);
        assert_eq!(indic_conjunct_break(0x937), IndicConjunctBreak::Consonant);
    }

    #[test]
    fn out_of_range_is_default() {
        assert_eq!(grapheme_cluster_break(0x20FFFF), GraphemeClusterBreak::Other);
    }
}
