//! Derived boolean Unicode properties (spec.md §6, "Auxiliary").
//!
//! These are not columns of [`crate::row::PropertyRow`] — the packed table
//! only carries the six categorical columns the four engines consult — so
//! they're implemented as small standalone range predicates, the way
//! `uniseg/derived.py` computes them in the original source (SPEC_FULL.md
//! §3). Coverage matches the representative range set in
//! [`crate::generated`], not the full UCD derived-property files.

/// `Alphabetic` (Lu, Ll, Lt, Lm, Lo, Nl, or Other_Alphabetic).
pub fn is_alphabetic(cp: u32) -> bool {
    matches!(cp,
        0x41..=0x5A | 0x61..=0x7A
        | 0xC0..=0xD6 | 0xD8..=0xF6 | 0xF8..=0xFF
        | 0x391..=0x3A9 | 0x3B1..=0x3C9
        | 0x400..=0x42F | 0x430..=0x45F
        | 0x5D0..=0x5EA
        | 0x621..=0x64A | 0x671..=0x6D3
        | 0x904..=0x939 | 0x958..=0x961
        | 0xE01..=0xE30 | 0xE32..=0xE33 | 0xE40..=0xE46
        | 0x3041..=0x3096 | 0x30A0..=0x30FF
        | 0x3400..=0x4DBF | 0x4E00..=0x9FFF
        | 0x1100..=0x1112 | 0x1161..=0x1175 | 0x11A8..=0x11C2
        | 0xAC00..=0xD7A3
    )
}

/// `Lowercase`.
pub fn is_lowercase(cp: u32) -> bool {
    matches!(cp, 0x61..=0x7A | 0xDF..=0xF6 | 0xF8..=0xFF | 0x3B1..=0x3C9 | 0x430..=0x45F)
}

/// `Uppercase`.
pub fn is_uppercase(cp: u32) -> bool {
    matches!(cp, 0x41..=0x5A | 0xC0..=0xD6 | 0xD8..=0xDE | 0x391..=0x3A9 | 0x400..=0x42F)
}

/// `Cased`: has a case distinction at all.
pub fn is_cased(cp: u32) -> bool {
    is_lowercase(cp) || is_uppercase(cp)
}

/// `Case_Ignorable`: combining marks, and a handful of punctuation/format
/// characters that don't themselves break a cased run (UAX #44).
pub fn is_case_ignorable(cp: u32) -> bool {
    matches!(cp, 0x27 | 0x2E | 0x3A | 0x300..=0x36F | 0xFE00..=0xFE0F | 0x200C | 0x200D)
}

/// `ID_Start`: letters usable to start an identifier.
pub fn is_id_start(cp: u32) -> bool {
    is_alphabetic(cp)
}

/// `ID_Continue`: `ID_Start` plus digits, underscore, and combining marks.
pub fn is_id_continue(cp: u32) -> bool {
    is_id_start(cp) || matches!(cp, 0x30..=0x39 | 0x5F | 0x300..=0x36F)
}

/// `XID_Start`: the NFKC-closed variant of `ID_Start`. Over this range set
/// the two coincide.
pub fn is_xid_start(cp: u32) -> bool {
    is_id_start(cp)
}

/// `XID_Continue`: the NFKC-closed variant of `ID_Continue`.
pub fn is_xid_continue(cp: u32) -> bool {
    is_id_continue(cp)
}

/// `Default_Ignorable_Code_Point`: invisible formatting characters that
/// render as nothing and should vanish from e.g. identifier display.
pub fn is_default_ignorable(cp: u32) -> bool {
    matches!(cp, 0x200B | 0x200C | 0x200D | 0x2060 | 0xFE00..=0xFE0F)
}

/// `Grapheme_Extend`: the subset of combining marks GB9 treats as Extend.
pub fn is_grapheme_extend(cp: u32) -> bool {
    matches!(cp, 0x300..=0x36F | 0x200C | 0x200D | 0xFE00..=0xFE0F | 0x1F3FB..=0x1F3FF)
}

/// `Grapheme_Base`: everything graphic that is not itself `Grapheme_Extend`.
pub fn is_grapheme_base(cp: u32) -> bool {
    !is_grapheme_extend(cp) && (is_alphabetic(cp) || matches!(cp, 0x30..=0x39))
}

/// `Math`.
pub fn is_math(cp: u32) -> bool {
    matches!(cp, 0x2B | 0x3C..=0x3E | 0x2200..=0x22FF)
}

/// `Changes_When_Lowercased`.
pub fn changes_when_lowercased(cp: u32) -> bool {
    is_uppercase(cp)
}

/// `Changes_When_Uppercased`.
pub fn changes_when_uppercased(cp: u32) -> bool {
    is_lowercase(cp)
}

/// `Changes_When_Titlecased`.
pub fn changes_when_titlecased(cp: u32) -> bool {
    is_lowercase(cp)
}

/// `Changes_When_Casefolded`.
pub fn changes_when_casefolded(cp: u32) -> bool {
    is_uppercase(cp)
}

/// `Changes_When_Casemapped`: union of the four `Changes_When_*` properties
/// above.
pub fn changes_when_casemapped(cp: u32) -> bool {
    changes_when_lowercased(cp)
        || changes_when_uppercased(cp)
        || changes_when_titlecased(cp)
        || changes_when_casefolded(cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_case_properties() {
        assert!(is_uppercase('A' as u32));
        assert!(!is_uppercase('a' as u32));
        assert!(is_lowercase('a' as u32));
        assert!(is_cased('A' as u32));
        assert!(!is_cased('5' as u32));
    }

    #[test]
    fn identifier_properties() {
        assert!(is_id_start('a' as u32));
        assert!(!is_id_start('5' as u32));
        assert!(is_id_continue('5' as u32));
        assert!(is_id_continue('_' as u32));
    }

    #[test]
    fn default_ignorable_covers_zwj() {
        assert!(is_default_ignorable(0x200D));
        assert!(!is_default_ignorable('a' as u32));
    }
}
