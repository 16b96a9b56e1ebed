use crate::enums::{
    EastAsianWidth, GeneralCategory, GraphemeClusterBreak, IndicConjunctBreak, LineBreak,
    SentenceBreak, WordBreak,
};

/// A single row of the property table: the tuple every code point resolves
/// to (spec.md §3, "Property Row").
///
/// `rows[0]` is always the all-default row (spec.md §4.1 invariant (i)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PropertyRow {
    pub gcb: GraphemeClusterBreak,
    pub wb: WordBreak,
    pub sb: SentenceBreak,
    pub lb: LineBreak,
    pub extended_pictographic: bool,
    pub incb: IndicConjunctBreak,
    pub gc: GeneralCategory,
    pub eaw: EastAsianWidth,
}

impl PropertyRow {
    pub const DEFAULT: PropertyRow = PropertyRow {
        gcb: GraphemeClusterBreak::Other,
        wb: WordBreak::Other,
        sb: SentenceBreak::Other,
        lb: LineBreak::XX,
        extended_pictographic: false,
        incb: IndicConjunctBreak::None,
        gc: GeneralCategory::Other,
        eaw: EastAsianWidth::Narrow,
    };
}
