//! Sentence-Break Engine: UAX #29 SB1–SB11 (spec.md §4.6).
//!
//! Unlike GCE/WBE/LBE, the unresolved default here is `DoNotBreak` (SB998):
//! a sentence boundary is the rarer event, so "no rule fired" should not
//! manufacture one.

use crate::cursor::RunCursor;
use crate::decision::Decision;
use seg_tables::SentenceBreak as Sb;
use tracing::trace;

pub fn breakables(text: &[char]) -> Vec<u8> {
    if text.is_empty() {
        return Vec::new();
    }
    trace!(target: "seg_core.sentence", code_points = text.len(), "entering sentence breakables");
    let sb_of: Vec<Sb> = text.iter().map(|c| seg_tables::sentence_break(*c as u32)).collect();
    let mut cursor: RunCursor<Sb> = RunCursor::new(text, |c| seg_tables::sentence_break(*c as u32));
    cursor.break_here();

    for i in 1..text.len() {
        let prev = sb_of[i - 1];
        let curr = sb_of[i];
        cursor.walk(1);

        // SB3
        if prev == Sb::CR && curr == Sb::LF {
            cursor.do_not_break_here();
        }
        // SB4: (Sep | CR | LF) x anything -> break
        if matches!(prev, Sb::Sep | Sb::CR | Sb::LF) {
            cursor.break_here();
        }
        // SB5: x (Format | Extend)
        if matches!(curr, Sb::Format | Sb::Extend) {
            cursor.do_not_break_here();
        }
    }

    // SB6–SB11 read through the Format/Extend skip set (SB5's "ignore"
    // convention), so every predicate below is phrased against that
    // transparent view.
    for i in 1..text.len() {
        if cursor.decision_at(i) != Decision::Unknown {
            continue;
        }
        apply_saterm_rules(&mut cursor, &sb_of, i);
    }

    cursor.set_default(Decision::DoNotBreak);
    cursor.into_decisions().iter().map(|d| d.as_bit()).collect()
}

fn skip_back_over(sb_of: &[Sb], mut i: usize) -> Option<usize> {
    loop {
        if i == 0 {
            return None;
        }
        i -= 1;
        if !matches!(sb_of[i], Sb::Format | Sb::Extend) {
            return Some(i);
        }
    }
}

fn skip_fwd_over(sb_of: &[Sb], mut i: usize) -> Option<usize> {
    loop {
        if i >= sb_of.len() {
            return None;
        }
        if !matches!(sb_of[i], Sb::Format | Sb::Extend) {
            return Some(i);
        }
        i += 1;
    }
}

/// SB6–SB11: the rules governing what follows `ATerm`/`STerm` (the
/// `SATerm` union), stated in the order UAX #29 lists them so later rules
/// only fire when an earlier one left the decision `Unknown`.
fn apply_saterm_rules(cursor: &mut RunCursor<Sb>, sb_of: &[Sb], i: usize) {
    let Some(p) = skip_back_over(sb_of, i) else {
        return;
    };
    let prev = sb_of[p];
    let curr = sb_of[i];

    // SB6: ATerm x Numeric
    if prev == Sb::ATerm && curr == Sb::Numeric {
        cursor.set_if_unknown(i, Decision::DoNotBreak);
        return;
    }
    // SB7: Upper ATerm x Upper (look back two for the Upper before ATerm).
    if prev == Sb::ATerm && curr == Sb::Upper {
        if let Some(before) = skip_back_over(sb_of, p) {
            if sb_of[before] == Sb::Upper {
                cursor.set_if_unknown(i, Decision::DoNotBreak);
                return;
            }
        }
    }
    // SB8: ATerm Close* Sp* x (not {OLetter,Upper,Lower,Sep,CR,LF,STerm,ATerm})* Lower
    // i.e. "ATerm, optionally followed by Close/Sp runs, eventually reaches
    // a Lower before any sentence-ending class interrupts it" — a forward
    // scan, so it is evaluated here rather than deferred (spec.md §9,
    // "SB8 lookahead").
    if prev == Sb::ATerm && sb8_lower_follows(sb_of, p) {
        trace!(target: "seg_core.sentence", at = i, "sb8 lookahead suppressed a break");
        cursor.set_if_unknown(i, Decision::DoNotBreak);
        return;
    }
    // SB8a: SATerm Close* x (SContinue | SATerm)
    if sb_of[p].is_saterm() && matches!(curr, Sb::SContinue | Sb::STerm | Sb::ATerm) {
        cursor.set_if_unknown(i, Decision::DoNotBreak);
        return;
    }
    if matches!(prev, Sb::Close) {
        if let Some(before) = skip_back_over(sb_of, p) {
            if sb_of[before].is_saterm() && matches!(curr, Sb::SContinue | Sb::STerm | Sb::ATerm) {
                cursor.set_if_unknown(i, Decision::DoNotBreak);
                return;
            }
        }
    }
    // SB9: SATerm Close* x (Close | Sp | Sep | CR | LF)
    if sb_of[p].is_saterm() && matches!(curr, Sb::Close | Sb::Sp | Sb::Sep | Sb::CR | Sb::LF) {
        cursor.set_if_unknown(i, Decision::DoNotBreak);
        return;
    }
    if matches!(prev, Sb::Close) {
        if let Some(before) = skip_back_over(sb_of, p) {
            if before_is_saterm_through_close(sb_of, before) && matches!(curr, Sb::Close | Sb::Sp | Sb::Sep | Sb::CR | Sb::LF) {
                cursor.set_if_unknown(i, Decision::DoNotBreak);
                return;
            }
        }
    }
    // SB10: SATerm Close* Sp* x (Sp | Sep | CR | LF)
    if saterm_close_sp_prefix(sb_of, p) && matches!(curr, Sb::Sp | Sb::Sep | Sb::CR | Sb::LF) {
        cursor.set_if_unknown(i, Decision::DoNotBreak);
        return;
    }
    // SB11: SATerm Close* Sp* x anything -> break (the terminal positive
    // rule; everything else falls through to SB998).
    if saterm_close_sp_prefix(sb_of, p) {
        cursor.set_if_unknown(i, Decision::Break);
    }
}

fn before_is_saterm_through_close(sb_of: &[Sb], mut i: usize) -> bool {
    loop {
        if sb_of[i].is_saterm() {
            return true;
        }
        if sb_of[i] != Sb::Close {
            return false;
        }
        match skip_back_over(sb_of, i) {
            Some(j) => i = j,
            None => return false,
        }
    }
}

/// Is the run ending at (and including) position `p` an SATerm optionally
/// followed by Close* and Sp* (reading backward from `p`)?
fn saterm_close_sp_prefix(sb_of: &[Sb], p: usize) -> bool {
    let mut i = p;
    while sb_of[i] == Sb::Sp {
        match skip_back_over(sb_of, i) {
            Some(j) => i = j,
            None => return false,
        }
    }
    while sb_of[i] == Sb::Close {
        match skip_back_over(sb_of, i) {
            Some(j) => i = j,
            None => return false,
        }
    }
    sb_of[i].is_saterm()
}

/// SB8's forward scan: does a Lower eventually appear after `aterm_index`,
/// tolerating arbitrary many Close/Sp/Numeric/SContinue in between (besides
/// the Extend/Format `skip_fwd_over` already treats as invisible)?
fn sb8_lower_follows(sb_of: &[Sb], aterm_index: usize) -> bool {
    let mut i = aterm_index;
    loop {
        match skip_fwd_over(sb_of, i + 1) {
            Some(j) => i = j,
            None => return false,
        }
        match sb_of[i] {
            Sb::Lower => return true,
            Sb::Close | Sb::Sp | Sb::Numeric | Sb::SContinue => continue,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn sentences(s: &str) -> Vec<String> {
        let text = chars(s);
        let bv = breakables(&text);
        let mut out = Vec::new();
        let mut start = 0usize;
        for i in 1..=text.len() {
            if i == text.len() || bv[i] == 1 {
                out.push(text[start..i].iter().collect());
                start = i;
            }
        }
        out
    }

    #[test]
    fn simple_two_sentences_split_on_terminal_punctuation() {
        let got = sentences("He said hello. She left.");
        assert_eq!(got, vec!["He said hello. ", "She left."]);
    }

    #[test]
    fn abbreviation_does_not_force_a_break() {
        // "Mr." is ATerm (the period) followed by Sp then Lower ("he") —
        // SB8 should suppress the break since a Lower follows.
        let got = sentences("Mr. he said hi.");
        assert_eq!(got, vec!["Mr. he said hi."]);
    }

    #[test]
    fn closing_quote_after_terminator_still_ends_the_sentence() {
        // SB9 suppresses the break right at "!” " (Close/Sp are transparent
        // to a preceding SATerm), but SB11 still fires once the Sp* run
        // ends — the default algorithm does not look inside the quote.
        let got = sentences("She said \u{201C}Go!\u{201D} and left.");
        assert_eq!(got, vec!["She said \u{201C}Go!\u{201D} ", "and left."]);
    }

    #[test]
    fn empty_is_empty() {
        assert!(breakables(&[]).is_empty());
    }

    #[test]
    fn numeral_between_abbreviation_and_lowercase_does_not_force_a_break() {
        // SB8's lookahead must pass through Numeric, not just Sp — "5" sits
        // between "Mr." and "apples" and must not block the Lower match.
        let got = sentences("Mr. 5 apples came.");
        assert_eq!(got, vec!["Mr. 5 apples came."]);
    }
}
