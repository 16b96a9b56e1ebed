//! Grapheme-Cluster Engine: UAX #29 GB1–GB13 (spec.md §4.4).

use crate::cursor::RunCursor;
use crate::decision::Decision;
use seg_tables::{
    extended_pictographic, indic_conjunct_break, GraphemeClusterBreak as Gcb,
    IndicConjunctBreak as Incb,
};
use tracing::trace;

/// Computes the grapheme-cluster boundary vector for `text` (1 = break
/// permitted before that code point).
pub fn breakables(text: &[char]) -> Vec<u8> {
    if text.is_empty() {
        return Vec::new();
    }
    trace!(target: "seg_core.grapheme", code_points = text.len(), "entering grapheme breakables");

    let gcb_of: Vec<Gcb> = text.iter().map(|c| seg_tables::grapheme_cluster_break(*c as u32)).collect();
    let incb_of: Vec<Incb> = text.iter().map(|c| indic_conjunct_break(*c as u32)).collect();
    let picto_of: Vec<bool> = text.iter().map(|c| extended_pictographic(*c as u32)).collect();

    let mut cursor: RunCursor<Gcb> = RunCursor::new(text, |c| seg_tables::grapheme_cluster_break(*c as u32));

    // Position 0 is always a break (spec.md §4.8).
    cursor.break_here();

    // GB9c shadow pass: mark Consonant x Consonant pairs joined by
    // Extend*Linker+Extend* as DoNotBreak in a side vector the main pass
    // consults (spec.md §4.4, §9 "InCB lookahead").
    let incb_do_not_break = incb_shadow_pass(&incb_of);

    for i in 1..text.len() {
        let prev = gcb_of[i - 1];
        let curr = gcb_of[i];
        cursor.walk(1);
        debug_assert_eq!(cursor.position(), i);

        // GB3
        if prev == Gcb::CR && curr == Gcb::LF {
            cursor.do_not_break_here();
        }
        // GB4
        if matches!(prev, Gcb::Control | Gcb::CR | Gcb::LF) {
            cursor.break_here();
        }
        // GB5
        if matches!(curr, Gcb::Control | Gcb::CR | Gcb::LF) {
            cursor.break_here();
        }
        // GB6
        if prev == Gcb::L && matches!(curr, Gcb::L | Gcb::V | Gcb::LV | Gcb::LVT) {
            cursor.do_not_break_here();
        }
        // GB7
        if matches!(prev, Gcb::LV | Gcb::V) && matches!(curr, Gcb::V | Gcb::T) {
            cursor.do_not_break_here();
        }
        // GB8
        if matches!(prev, Gcb::LVT | Gcb::T) && curr == Gcb::T {
            cursor.do_not_break_here();
        }
        // GB9
        if matches!(curr, Gcb::Extend | Gcb::ZWJ) {
            cursor.do_not_break_here();
        }
        // GB9a
        if curr == Gcb::SpacingMark {
            cursor.do_not_break_here();
        }
        // GB9b
        if prev == Gcb::Prepend {
            cursor.do_not_break_here();
        }
        // GB9c (consult shadow pass)
        if incb_do_not_break[i] {
            cursor.do_not_break_here();
        }
        // GB11: \p{Extended_Pictographic} Extend* ZWJ x \p{Extended_Pictographic}
        if prev == Gcb::ZWJ && picto_of[i] && gb11_zwj_preceded_by_pictographic(&gcb_of, &picto_of, i - 1) {
            cursor.do_not_break_here();
        }
    }

    // GB12/13: regional indicator pairing, a post-pass over maximal RI runs.
    ri_pairing_pass(&gcb_of, &mut cursor);

    cursor.set_default(Decision::Break);
    cursor.into_decisions().iter().map(|d| d.as_bit()).collect()
}

/// Is position `zwj_index` a ZWJ immediately preceded by an
/// Extended_Pictographic base, possibly through a run of `Extend`?
fn gb11_zwj_preceded_by_pictographic(gcb_of: &[Gcb], picto_of: &[bool], zwj_index: usize) -> bool {
    let mut i = zwj_index;
    loop {
        if i == 0 {
            return false;
        }
        i -= 1;
        if gcb_of[i] == Gcb::Extend {
            continue;
        }
        return picto_of[i];
    }
}

fn incb_shadow_pass(incb_of: &[Incb]) -> Vec<bool> {
    let n = incb_of.len();
    let mut do_not_break = vec![false; n];
    if n == 0 {
        return do_not_break;
    }
    // For every position i with InCB=Consonant, scan forward through
    // Extend/Linker positions; if we reach another Consonant and the run
    // contained at least one Linker, every position from i+1..=that
    // Consonant is DoNotBreak (GB9c).
    for i in 0..n {
        if incb_of[i] != Incb::Consonant {
            continue;
        }
        let mut j = i + 1;
        let mut saw_linker = false;
        while j < n && matches!(incb_of[j], Incb::Extend | Incb::Linker) {
            saw_linker |= incb_of[j] == Incb::Linker;
            j += 1;
        }
        if j < n && incb_of[j] == Incb::Consonant && saw_linker {
            trace!(target: "seg_core.grapheme", from = i, to = j, "gb9c consonant cluster");
            for position in (i + 1)..=j {
                do_not_break[position] = true;
            }
        }
    }
    do_not_break
}

fn ri_pairing_pass(gcb_of: &[Gcb], cursor: &mut RunCursor<Gcb>) {
    let n = gcb_of.len();
    let mut i = 0;
    while i < n {
        if gcb_of[i] != Gcb::RegionalIndicator {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < n && gcb_of[i] == Gcb::RegionalIndicator {
            i += 1;
        }
        // Within [run_start, i), forbid a break between the 1st-2nd,
        // 3rd-4th, ... RI of the run.
        let mut pos = run_start + 1;
        while pos < i {
            cursor.set_if_unknown(pos, Decision::DoNotBreak);
            pos += 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn crlf_stays_together() {
        let v = breakables(&chars("\r\n"));
        assert_eq!(v, vec![1, 0]);
    }

    #[test]
    fn combining_mark_attaches() {
        // g + COMBINING DIAERESIS
        let v = breakables(&chars("g\u{0308}"));
        assert_eq!(v, vec![1, 0]);
    }

    #[test]
    fn hangul_lvt_composition() {
        let v = breakables(&chars("\u{1100}\u{1161}\u{11A8}"));
        assert_eq!(v, vec![1, 0, 0]);
    }

    #[test]
    fn regional_indicator_pairs() {
        let v = breakables(&chars("\u{1F1EF}\u{1F1F5}\u{1F1EF}\u{1F1F5}"));
        assert_eq!(v, vec![1, 0, 1, 0]);
    }

    #[test]
    fn indic_conjunct_cluster() {
        // KA + VIRAMA + SSA: one grapheme cluster (GB9c).
        let v = breakables(&chars("\u{0915}\u{094D}\u{0937}"));
        assert_eq!(v, vec![1, 0, 0]);
    }

    #[test]
    fn empty_input_yields_empty_vector() {
        assert!(breakables(&[]).is_empty());
    }
}
