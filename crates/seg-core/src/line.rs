//! Line-Break Engine: UAX #14 LB1–LB31 (spec.md §4.7).
//!
//! The largest of the four engines: a resolution pass (LB1) collapses the
//! provisional classes (`AI`, `SA`, `SG`, `XX`, `CJ`) into the classes the
//! remaining rules actually switch on, an effective-class pass absorbs
//! combining marks into their base (LB9/LB10), and the rest is rule-ordered
//! write-once decisions exactly like the other three engines.

use crate::cursor::RunCursor;
use crate::decision::Decision;
use seg_tables::{EastAsianWidth as Eaw, GeneralCategory as Gc, LineBreak as Lb};
use tracing::trace;

/// Computes the line-break boundary vector for `text`.
///
/// `legacy` selects the UAX #14 "legacy" resolution for the two classes the
/// standard explicitly leaves to tailoring: with `legacy = true`, `AI` and
/// `CJ` resolve to `ID` (treating ambiguous-width and CJK-adjacent
/// characters as ordinary ideographs, the behavior older East Asian
/// typesetting conventions expect); with `legacy = false` they resolve to
/// `AL` and `NS` respectively, the UAX #14 default (spec.md §4.7, §9
/// "legacy resolution").
pub fn breakables(text: &[char], legacy: bool) -> Vec<u8> {
    if text.is_empty() {
        return Vec::new();
    }
    trace!(target: "seg_core.line", code_points = text.len(), legacy, "entering line breakables");

    let resolved: Vec<Lb> = text
        .iter()
        .map(|c| resolve_lb1(seg_tables::line_break(*c as u32), seg_tables::general_category(*c as u32), legacy))
        .collect();
    let effective = effective_classes(&resolved);
    let gc_of: Vec<Gc> = text.iter().map(|c| seg_tables::general_category(*c as u32)).collect();
    let eaw_of: Vec<Eaw> = text.iter().map(|c| seg_tables::east_asian_width(*c as u32)).collect();

    let mut cursor: RunCursor<Lb> = RunCursor::new(text, |c| {
        resolve_lb1(seg_tables::line_break(*c as u32), seg_tables::general_category(*c as u32), legacy)
    });
    cursor.break_here();

    for i in 1..text.len() {
        cursor.walk(1);
        apply_rules(&mut cursor, &resolved, &effective, &gc_of, &eaw_of, i);
    }

    // LB30a: regional indicators pair up exactly like GB12/13 and WB15/16.
    ri_pairing_pass(&resolved, &mut cursor);
    // LB30b: emoji base x emoji modifier.
    eb_em_pass(&resolved, &mut cursor);

    cursor.set_default(Decision::Break); // LB31 fallback
    cursor.into_decisions().iter().map(|d| d.as_bit()).collect()
}

/// LB1: fold the provisional pre-resolution classes into the ones every
/// later rule actually matches on.
fn resolve_lb1(raw: Lb, gc: Gc, legacy: bool) -> Lb {
    match raw {
        Lb::XX | Lb::SG => Lb::AL,
        Lb::AI => {
            if legacy {
                Lb::ID
            } else {
                Lb::AL
            }
        }
        Lb::SA => {
            if matches!(gc, Gc::NonspacingMark | Gc::SpacingMark) {
                Lb::CM
            } else {
                Lb::AL
            }
        }
        Lb::CJ => {
            if legacy {
                Lb::ID
            } else {
                Lb::NS
            }
        }
        other => other,
    }
}

/// LB9/LB10: a run of `CM`/`ZWJ` inherits the effective class of its base,
/// unless the base is itself a mandatory-break or space class, in which
/// case the mark is treated as `AL`.
fn effective_classes(resolved: &[Lb]) -> Vec<Lb> {
    let mut effective = Vec::with_capacity(resolved.len());
    for (i, &class) in resolved.iter().enumerate() {
        let eff = if matches!(class, Lb::CM | Lb::ZWJ) {
            if i == 0 {
                Lb::AL
            } else {
                let prev_raw = resolved[i - 1];
                if matches!(prev_raw, Lb::BK | Lb::CR | Lb::LF | Lb::NL | Lb::SP | Lb::ZW) {
                    Lb::AL
                } else {
                    effective[i - 1]
                }
            }
        } else {
            class
        };
        effective.push(eff);
    }
    effective
}

fn skip_back_over_sp(resolved: &[Lb], mut i: usize) -> Option<usize> {
    loop {
        if i == 0 {
            return None;
        }
        i -= 1;
        if resolved[i] != Lb::SP {
            return Some(i);
        }
    }
}

fn apply_rules(
    cursor: &mut RunCursor<Lb>,
    resolved: &[Lb],
    effective: &[Lb],
    gc_of: &[Gc],
    eaw_of: &[Eaw],
    i: usize,
) {
    let prev_raw = resolved[i - 1];
    let curr_raw = resolved[i];
    let prev = effective[i - 1];
    let curr = effective[i];

    // LB9: a CM/ZWJ not itself treated as AL (i.e. not excluded by LB10's
    // start-of-text/space/mandatory-break guard) attaches to its base.
    if matches!(curr_raw, Lb::CM | Lb::ZWJ)
        && !(i == 0 || matches!(prev_raw, Lb::BK | Lb::CR | Lb::LF | Lb::NL | Lb::SP | Lb::ZW))
    {
        cursor.do_not_break_here();
        return;
    }

    // LB4/LB5: mandatory breaks.
    if prev_raw == Lb::CR && curr_raw == Lb::LF {
        cursor.do_not_break_here();
        return;
    }
    if matches!(prev_raw, Lb::BK | Lb::CR | Lb::LF | Lb::NL) {
        cursor.break_here();
        return;
    }
    // LB6: do not break before a mandatory-break character.
    if matches!(curr_raw, Lb::BK | Lb::CR | Lb::LF | Lb::NL) {
        cursor.do_not_break_here();
        return;
    }
    // LB7: do not break before spaces or ZW.
    if matches!(curr_raw, Lb::SP | Lb::ZW) {
        cursor.do_not_break_here();
        return;
    }
    // LB8: ZW SP* x -> break once the ZW's space run ends.
    if prev_raw == Lb::ZW || (prev_raw == Lb::SP && skip_back_over_sp(resolved, i - 1).map(|j| resolved[j]) == Some(Lb::ZW)) {
        cursor.break_here();
        return;
    }
    // LB8a: do not break after ZWJ.
    if prev_raw == Lb::ZWJ {
        cursor.do_not_break_here();
        return;
    }

    // From here on, rules read the effective (CM-absorbed) classes.
    // LB11: do not break around WJ.
    if prev == Lb::WJ || curr == Lb::WJ {
        cursor.do_not_break_here();
        return;
    }
    // LB12: do not break after GL.
    if prev == Lb::GL {
        cursor.do_not_break_here();
        return;
    }
    // LB12a: do not break before GL unless preceded by SP/BA/HY.
    if curr == Lb::GL && !matches!(prev, Lb::SP | Lb::BA | Lb::HY) {
        cursor.do_not_break_here();
        return;
    }
    // LB13: do not break before CL, CP, EX, IS, SY.
    if matches!(curr, Lb::CL | Lb::CP | Lb::EX | Lb::IS | Lb::SY) {
        cursor.do_not_break_here();
        return;
    }
    // LB14: OP SP* x — do not break after an opening punctuation run.
    if prev == Lb::OP || (prev == Lb::SP && skip_back_over_sp(effective, i - 1).map(|j| effective[j]) == Some(Lb::OP)) {
        cursor.do_not_break_here();
        return;
    }
    // LB15: QU SP* x OP.
    if curr == Lb::OP {
        let quote_base = if prev == Lb::SP {
            skip_back_over_sp(effective, i - 1).map(|j| effective[j])
        } else {
            Some(prev)
        };
        if quote_base == Some(Lb::QU) {
            cursor.do_not_break_here();
            return;
        }
    }
    // LB15a (condensed): an initial quotation mark (GC=Pi) that itself
    // follows an opening-ish context glues forward through its own
    // trailing space run.
    if curr == Lb::QU && gc_of[i] == Gc::InitialPunctuation {
        let left_ok = matches!(
            prev,
            Lb::BK | Lb::CR | Lb::LF | Lb::NL | Lb::OP | Lb::QU | Lb::GL | Lb::SP | Lb::ZW
        );
        if left_ok {
            cursor.do_not_break_here();
            return;
        }
    }
    if prev == Lb::SP {
        if let Some(j) = skip_back_over_sp(effective, i - 1) {
            if effective[j] == Lb::QU && gc_of[j] == Gc::InitialPunctuation {
                let left_ok = j == 0
                    || matches!(
                        effective[j - 1],
                        Lb::BK | Lb::CR | Lb::LF | Lb::NL | Lb::OP | Lb::QU | Lb::GL | Lb::SP | Lb::ZW
                    );
                if left_ok {
                    cursor.do_not_break_here();
                    return;
                }
            }
        }
    }
    // LB15b (condensed): do not break just before a final quotation mark
    // (GC=Pf) when it is itself followed by closing-ish context; reaching
    // the end of text right after it satisfies the condition too (the
    // facade always marks the last position as a boundary on its own).
    if curr == Lb::QU && gc_of[i] == Gc::FinalPunctuation {
        let right_ok = i + 1 >= effective.len()
            || matches!(
                effective[i + 1],
                Lb::SP | Lb::GL | Lb::WJ | Lb::CL | Lb::QU | Lb::CP | Lb::EX | Lb::IS | Lb::SY
            )
            || matches!(resolved[i + 1], Lb::BK | Lb::CR | Lb::LF | Lb::NL | Lb::ZW);
        if right_ok {
            cursor.do_not_break_here();
            return;
        }
    }
    // LB16: (CL|CP) SP* x NS.
    if curr == Lb::NS {
        let base = if prev == Lb::SP {
            skip_back_over_sp(effective, i - 1).map(|j| effective[j])
        } else {
            Some(prev)
        };
        if matches!(base, Some(Lb::CL) | Some(Lb::CP)) {
            cursor.do_not_break_here();
            return;
        }
    }
    // LB17: B2 SP* x B2.
    if curr == Lb::B2 {
        let base = if prev == Lb::SP {
            skip_back_over_sp(effective, i - 1).map(|j| effective[j])
        } else {
            Some(prev)
        };
        if base == Some(Lb::B2) {
            cursor.do_not_break_here();
            return;
        }
    }
    // LB18 (break after SP) needs no code: it is the engine's default.

    // LB19/LB19a: a non-wide QU never breaks from its neighbour; a wide
    // QU only glues to a neighbour that is itself wide (a missing
    // neighbour at a text edge counts as non-wide, so it never forces a
    // glue there).
    if curr == Lb::QU {
        let wide = eaw_of[i] == Eaw::Wide;
        if !wide || eaw_of[i - 1] == Eaw::Wide {
            cursor.do_not_break_here();
            return;
        }
    }
    if prev == Lb::QU {
        let wide = eaw_of[i - 1] == Eaw::Wide;
        if !wide || eaw_of[i] == Eaw::Wide {
            cursor.do_not_break_here();
            return;
        }
    }
    // LB20: contingent break opportunities on both sides of CB.
    if prev == Lb::CB || curr == Lb::CB {
        cursor.break_here();
        return;
    }
    // LB20a (condensed): a hyphen at the start of a line glues to a
    // following letter, "start of line" approximated as a hyphen whose
    // own predecessor is one of sot/BK/CR/LF/NL/SP/ZW/CB/GL.
    if prev == Lb::HY && matches!(curr, Lb::AL | Lb::HL) {
        let start_of_line = i < 2
            || matches!(
                effective[i - 2],
                Lb::BK | Lb::CR | Lb::LF | Lb::NL | Lb::SP | Lb::ZW | Lb::CB | Lb::GL
            );
        if start_of_line {
            cursor.do_not_break_here();
            return;
        }
    }
    // LB21: do not break before BA/HY/NS, or after BB.
    if matches!(curr, Lb::BA | Lb::HY | Lb::NS) || prev == Lb::BB {
        cursor.do_not_break_here();
        return;
    }
    // LB21a (condensed): HL (HY|BA) x, suppressed when curr is itself HL.
    if matches!(prev, Lb::HY | Lb::BA) && curr != Lb::HL && i >= 2 && effective[i - 2] == Lb::HL {
        cursor.do_not_break_here();
        return;
    }
    // LB21b: SY x HL.
    if prev == Lb::SY && curr == Lb::HL {
        cursor.do_not_break_here();
        return;
    }
    // LB22: do not break before IN.
    if curr == Lb::IN {
        cursor.do_not_break_here();
        return;
    }
    // LB23: (AL|HL) x NU, NU x (AL|HL).
    if (matches!(prev, Lb::AL | Lb::HL) && curr == Lb::NU) || (prev == Lb::NU && matches!(curr, Lb::AL | Lb::HL)) {
        cursor.do_not_break_here();
        return;
    }
    // LB23a: PR x (ID|EB|EM), (ID|EB|EM) x PO.
    if (prev == Lb::PR && matches!(curr, Lb::ID | Lb::EB | Lb::EM))
        || (matches!(prev, Lb::ID | Lb::EB | Lb::EM) && curr == Lb::PO)
    {
        cursor.do_not_break_here();
        return;
    }
    // LB24: (PR|PO) x (AL|HL), (AL|HL) x (PR|PO).
    if (matches!(prev, Lb::PR | Lb::PO) && matches!(curr, Lb::AL | Lb::HL))
        || (matches!(prev, Lb::AL | Lb::HL) && matches!(curr, Lb::PR | Lb::PO))
    {
        cursor.do_not_break_here();
        return;
    }
    // LB25 (condensed numeric run table).
    let lb25 = matches!(
        (prev, curr),
        (Lb::CL, Lb::PO)
            | (Lb::CP, Lb::PO)
            | (Lb::CL, Lb::PR)
            | (Lb::CP, Lb::PR)
            | (Lb::NU, Lb::PO)
            | (Lb::NU, Lb::PR)
            | (Lb::PO, Lb::OP)
            | (Lb::PO, Lb::NU)
            | (Lb::PR, Lb::OP)
            | (Lb::PR, Lb::NU)
            | (Lb::HY, Lb::NU)
            | (Lb::IS, Lb::NU)
            | (Lb::NU, Lb::NU)
            | (Lb::SY, Lb::NU)
    );
    if lb25 {
        cursor.do_not_break_here();
        return;
    }
    // LB26: Korean syllable block.
    let lb26 = matches!(prev, Lb::JL) && matches!(curr, Lb::JL | Lb::JV | Lb::H2 | Lb::H3)
        || matches!(prev, Lb::JV | Lb::H2) && matches!(curr, Lb::JV | Lb::JT)
        || matches!(prev, Lb::JT | Lb::H3) && curr == Lb::JT;
    if lb26 {
        cursor.do_not_break_here();
        return;
    }
    // LB27: Korean syllable + PO/PR.
    if (matches!(prev, Lb::JL | Lb::JV | Lb::JT | Lb::H2 | Lb::H3) && curr == Lb::PO)
        || (prev == Lb::PR && matches!(curr, Lb::JL | Lb::JV | Lb::JT | Lb::H2 | Lb::H3))
    {
        cursor.do_not_break_here();
        return;
    }
    // LB28: (AL|HL) x (AL|HL).
    if matches!(prev, Lb::AL | Lb::HL) && matches!(curr, Lb::AL | Lb::HL) {
        cursor.do_not_break_here();
        return;
    }
    // LB28a (condensed akshara clustering).
    let lb28a = (prev == Lb::AP && matches!(curr, Lb::AK | Lb::AS))
        || (matches!(prev, Lb::AK | Lb::AS) && matches!(curr, Lb::VF | Lb::VI))
        || (prev == Lb::VI && matches!(curr, Lb::AK | Lb::AS));
    if lb28a {
        cursor.do_not_break_here();
        return;
    }
    // LB29: IS x (AL|HL).
    if prev == Lb::IS && matches!(curr, Lb::AL | Lb::HL) {
        cursor.do_not_break_here();
        return;
    }
    // LB30: (AL|HL|NU) x OP, CP x (AL|HL|NU), both gated on non-wide EAW.
    let curr_narrow = curr == Lb::OP && eaw_of[i] == Eaw::Narrow;
    let prev_narrow = prev == Lb::CP && eaw_of[i - 1] == Eaw::Narrow;
    if curr_narrow && matches!(prev, Lb::AL | Lb::HL | Lb::NU) {
        cursor.do_not_break_here();
        return;
    }
    if prev_narrow && matches!(curr, Lb::AL | Lb::HL | Lb::NU) {
        cursor.do_not_break_here();
    }
}

fn ri_pairing_pass(resolved: &[Lb], cursor: &mut RunCursor<Lb>) {
    let n = resolved.len();
    let mut i = 0;
    while i < n {
        if resolved[i] != Lb::RI {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < n && resolved[i] == Lb::RI {
            i += 1;
        }
        let mut pos = run_start + 1;
        while pos < i {
            cursor.set_if_unknown(pos, Decision::DoNotBreak);
            pos += 2;
        }
    }
}

fn eb_em_pass(resolved: &[Lb], cursor: &mut RunCursor<Lb>) {
    for i in 1..resolved.len() {
        if resolved[i - 1] == Lb::EB && resolved[i] == Lb::EM {
            trace!(target: "seg_core.line", at = i, "lb30b eb x em");
            cursor.set_if_unknown(i, Decision::DoNotBreak);
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
    fn break_after_space_is_default() {
        let v = breakables(&chars("go now"), false);
        // boundary before 'n' (right after the space) should permit a break.
        assert_eq!(v[3], 1);
    }

    #[test]
    fn no_break_before_closing_punctuation() {
        let v = breakables(&chars("(ok)"), false);
        // boundary before ')' (index 3) must be suppressed (LB13).
        assert_eq!(v[3], 0);
    }

    #[test]
    fn no_break_around_quotation_marks() {
        let v = breakables(&chars("say \u{201C}hi\u{201D}"), false);
        let quote_index = chars("say \u{201C}hi\u{201D}").iter().position(|c| *c == '\u{201C}').unwrap();
        assert_eq!(v[quote_index], 0);
    }

    #[test]
    fn legacy_flag_changes_ambiguous_resolution() {
        // U+03B1 is tagged AI (legacy-ambiguous) in the table.
        let raw = seg_tables::line_break(0x3B1);
        assert_eq!(raw, Lb::AI);
        assert_eq!(resolve_lb1(raw, seg_tables::general_category(0x3B1), false), Lb::AL);
        assert_eq!(resolve_lb1(raw, seg_tables::general_category(0x3B1), true), Lb::ID);

        // Standard: AL x AL glues via LB28. Legacy: ID x ID has no
        // gluing rule (ideographs break freely), so the pair now admits
        // a break where the standard resolution forbade one.
        let text = chars("\u{03B1}\u{03B1}");
        let standard = breakables(&text, false);
        let legacy = breakables(&text, true);
        assert_eq!(standard[1], 0);
        assert_eq!(legacy[1], 1);
    }

    #[test]
    fn regional_indicators_pair_for_line_breaking() {
        let v = breakables(&chars("\u{1F1EF}\u{1F1F5}\u{1F1EF}\u{1F1F5}"), false);
        assert_eq!(v, vec![1, 0, 1, 0]);
    }

    #[test]
    fn empty_is_empty() {
        assert!(breakables(&[], false).is_empty());
    }

    #[test]
    fn lb30_does_not_glue_a_wide_closing_punctuation() {
        // U+3008 (CJK opening angle bracket) is Wide and class OP; LB30
        // must not fire, so a break stays permitted after the preceding
        // letter (unlike the narrow '(' case covered elsewhere).
        let v = breakables(&chars("x\u{3008}"), false);
        assert_eq!(v[1], 1);
    }

    #[test]
    fn lb30_still_glues_narrow_opening_punctuation_to_a_letter() {
        let v = breakables(&chars("x("), false);
        assert_eq!(v[1], 0);
    }

    #[test]
    fn lb15a_glues_an_initial_quote_and_its_trailing_space_to_what_follows() {
        // "“ hi" — LB18 would otherwise permit a break right after the
        // space (the engine's default), but LB15a glues the whole
        // "QU_Pi SP*" run to the word that follows it.
        let v = breakables(&chars("\u{201C} hi"), false);
        assert_eq!(v[2], 0);
    }

    #[test]
    fn lb20a_glues_a_line_initial_hyphen_to_the_following_letter() {
        // A hyphen preceded by a space (line-start-equivalent context)
        // must not admit a break before the letter that follows it.
        let v = breakables(&chars("go -ward"), false);
        let hyphen_index = chars("go -ward").iter().position(|c| *c == '-').unwrap();
        assert_eq!(v[hyphen_index + 1], 0);
    }
}
