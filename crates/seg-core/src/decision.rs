/// A write-once boundary decision for a single code-point position
/// (spec.md §3 "Decision", §4.2, §9 "Write-once decisions").
///
/// `Unknown` distinguishes "no rule has fired yet" from "a rule fired:
/// `DoNotBreak`", which matters because engines default differently:
/// `Break` for GCE/WBE/LBE, `DoNotBreak` for SBE (SB998).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decision {
    #[default]
    Unknown,
    Break,
    DoNotBreak,
}

impl Decision {
    pub fn is_unknown(self) -> bool {
        matches!(self, Decision::Unknown)
    }

    pub fn as_bit(self) -> u8 {
        match self {
            Decision::Break => 1,
            Decision::DoNotBreak | Decision::Unknown => 0,
        }
    }
}
