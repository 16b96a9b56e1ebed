//! Closed property enumerations named by UAX #29 / UAX #14.
//!
//! Every enum carries the Unicode "unassigned"/"other" sentinel as its
//! `Default`, so a raw table value that doesn't match any known column
//! value degrades to that sentinel rather than panicking (spec.md §3,
//! "Property Enums").

/// `Grapheme_Cluster_Break` property values (UAX #29 §3.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphemeClusterBreak {
    #[default]
    Other,
    CR,
    LF,
    Control,
    Extend,
    ZWJ,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    RegionalIndicator,
}

/// `Word_Break` property values (UAX #29 §4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordBreak {
    #[default]
    Other,
    CR,
    LF,
    Newline,
    Extend,
    ZWJ,
    RegionalIndicator,
    Format,
    Katakana,
    HebrewLetter,
    ALetter,
    SingleQuote,
    DoubleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    WSegSpace,
}

/// `Sentence_Break` property values (UAX #29 §5.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SentenceBreak {
    #[default]
    Other,
    Sep,
    Format,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    SContinue,
    STerm,
    Close,
    CR,
    LF,
    Extend,
}

impl SentenceBreak {
    /// `SATerm` is the union {STerm, ATerm} used throughout SB6–SB11 (spec.md §4.6, GLOSSARY).
    pub fn is_saterm(self) -> bool {
        matches!(self, Self::STerm | Self::ATerm)
    }
}

/// `Line_Break` property values (UAX #14 §4), restricted to the classes the
/// engine resolves or consults (spec.md §4.7). Pre-resolution classes AI,
/// SG, XX, SA, CJ appear only transiently before LB1; the resolved set never
/// contains them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineBreak {
    #[default]
    XX,
    AI,
    SG,
    SA,
    CJ,
    BK,
    CR,
    LF,
    NL,
    CM,
    ZWJ,
    WJ,
    ZW,
    GL,
    SP,
    B2,
    BA,
    BB,
    HY,
    CB,
    CL,
    CP,
    EX,
    IN,
    NS,
    OP,
    QU,
    IS,
    NU,
    PO,
    PR,
    SY,
    AL,
    HL,
    ID,
    EB,
    EM,
    H2,
    H3,
    JL,
    JV,
    JT,
    RI,
    AK,
    AP,
    AS,
    VF,
    VI,
}

/// `Indic_Conjunct_Break` property values (spec.md §3, GLOSSARY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndicConjunctBreak {
    #[default]
    None,
    Linker,
    Consonant,
    Extend,
}

/// Minimal `General_Category` grouping: LB1's SA resolution needs Mn/Mc
/// ("Replace SA by CM if General_Category ∈ {Mn,Mc}, else AL"), and LB15a/
/// LB15b need the Pi/Pf quotation-mark categories to tell an initial
/// quotation mark (e.g. U+201C) from a final one (e.g. U+201D) — a
/// distinction `Line_Break`'s own `QU` class does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GeneralCategory {
    #[default]
    Other,
    NonspacingMark,
    SpacingMark,
    InitialPunctuation,
    FinalPunctuation,
}

/// East Asian Width, collapsed to the wide/non-wide distinction LB30 needs
/// (spec.md §4.7: "only when the OP/CP is non-East-Asian-wide").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EastAsianWidth {
    #[default]
    Narrow,
    Wide,
}
