//! Word-Break Engine: UAX #29 WB1–WB16 (spec.md §4.5).

use crate::cursor::RunCursor;
use crate::decision::Decision;
use seg_tables::WordBreak as Wb;
use tracing::trace;

const AHLETTER: [Wb; 2] = [Wb::ALetter, Wb::HebrewLetter];
const MIDNUMLETQ: [Wb; 2] = [Wb::MidNumLet, Wb::SingleQuote];

pub fn breakables(text: &[char]) -> Vec<u8> {
    if text.is_empty() {
        return Vec::new();
    }
    trace!(target: "seg_core.word", code_points = text.len(), "entering word breakables");
    let wb_of: Vec<Wb> = text.iter().map(|c| seg_tables::word_break(*c as u32)).collect();
    let mut cursor: RunCursor<Wb> = RunCursor::new(text, |c| seg_tables::word_break(*c as u32));
    cursor.break_here();

    // Pass 1: no skip set.
    for i in 1..text.len() {
        let prev = wb_of[i - 1];
        let curr = wb_of[i];
        cursor.walk(1);

        // WB3
        if prev == Wb::CR && curr == Wb::LF {
            cursor.do_not_break_here();
        }
        // WB3a/b: break at Newline/CR/LF boundaries.
        if matches!(prev, Wb::Newline | Wb::CR | Wb::LF) {
            cursor.break_here();
        }
        if matches!(curr, Wb::Newline | Wb::CR | Wb::LF) {
            cursor.break_here();
        }
        // WB3c: ZWJ x Extended_Pictographic
        if prev == Wb::ZWJ && seg_tables::extended_pictographic(text[i] as u32) {
            cursor.do_not_break_here();
        }
        // WB3d: WSegSpace x WSegSpace
        if prev == Wb::WSegSpace && curr == Wb::WSegSpace {
            cursor.do_not_break_here();
        }
        // WB4: x (Format | Extend | ZWJ)
        if matches!(curr, Wb::Format | Wb::Extend | Wb::ZWJ) {
            cursor.do_not_break_here();
        }
    }

    // Pass 2: {Extend, Format, ZWJ} are transparent to the lettering/
    // numeric rules below (skip_back_over/skip_fwd_over implement that).
    for i in 1..text.len() {
        if cursor.decision_at(i) != Decision::Unknown {
            continue;
        }
        apply_pass2_rule(&mut cursor, &wb_of, i);
    }

    // Pass 3: RI pairing, identical shape to GB12/13.
    ri_pairing_pass(&wb_of, &mut cursor);

    cursor.set_default(Decision::Break);
    cursor.into_decisions().iter().map(|d| d.as_bit()).collect()
}

fn skip_back_over(wb_of: &[Wb], mut i: usize, skip: &[Wb]) -> Option<usize> {
    loop {
        if i == 0 {
            return None;
        }
        i -= 1;
        if !skip.contains(&wb_of[i]) {
            return Some(i);
        }
    }
}

fn skip_fwd_over(wb_of: &[Wb], mut i: usize, skip: &[Wb]) -> Option<usize> {
    loop {
        i += 1;
        if i >= wb_of.len() {
            return None;
        }
        if !skip.contains(&wb_of[i]) {
            return Some(i);
        }
    }
}

/// Applies WB5–WB13b at boundary `i` (between code point `i-1` and `i`),
/// treating `{Extend, Format, ZWJ}` as transparent the way UAX #29's
/// "treat as invisible" convention for pass 2 requires.
fn apply_pass2_rule(cursor: &mut RunCursor<Wb>, wb_of: &[Wb], i: usize) {
    const SKIP: [Wb; 3] = [Wb::Extend, Wb::Format, Wb::ZWJ];
    let Some(p) = skip_back_over(wb_of, i, &SKIP) else {
        return;
    };
    let prev = wb_of[p];
    let curr = wb_of[i];

    // WB5
    if AHLETTER.contains(&prev) && AHLETTER.contains(&curr) {
        cursor.set_if_unknown(i, Decision::DoNotBreak);
        return;
    }
    // WB7: AHLetter (MidLetter|MidNumLetQ) x AHLetter — look back two and
    // forward one.
    if matches!(prev, Wb::MidLetter) || MIDNUMLETQ.contains(&prev) {
        if let Some(before) = skip_back_over(wb_of, p, &SKIP) {
            if AHLETTER.contains(&wb_of[before]) && AHLETTER.contains(&curr) {
                cursor.set_if_unknown(i, Decision::DoNotBreak);
                return;
            }
        }
    }
    // WB6: AHLetter x (MidLetter|MidNumLetQ) AHLetter — look ahead two.
    if AHLETTER.contains(&prev) && (curr == Wb::MidLetter || MIDNUMLETQ.contains(&curr)) {
        if let Some(after) = skip_fwd_over(wb_of, i, &SKIP) {
            if AHLETTER.contains(&wb_of[after]) {
                cursor.set_if_unknown(i, Decision::DoNotBreak);
                return;
            }
        }
    }
    // WB7a: Hebrew_Letter x Single_Quote
    if prev == Wb::HebrewLetter && curr == Wb::SingleQuote {
        cursor.set_if_unknown(i, Decision::DoNotBreak);
        return;
    }
    // WB7b: Hebrew_Letter x Double_Quote Hebrew_Letter
    if prev == Wb::HebrewLetter && curr == Wb::DoubleQuote {
        if let Some(after) = skip_fwd_over(wb_of, i, &SKIP) {
            if wb_of[after] == Wb::HebrewLetter {
                cursor.set_if_unknown(i, Decision::DoNotBreak);
                return;
            }
        }
    }
    // WB7c: Hebrew_Letter Double_Quote x Hebrew_Letter
    if curr == Wb::HebrewLetter && prev == Wb::DoubleQuote {
        if let Some(before) = skip_back_over(wb_of, p, &SKIP) {
            if wb_of[before] == Wb::HebrewLetter {
                cursor.set_if_unknown(i, Decision::DoNotBreak);
                return;
            }
        }
    }
    // WB8: Numeric x Numeric
    if prev == Wb::Numeric && curr == Wb::Numeric {
        cursor.set_if_unknown(i, Decision::DoNotBreak);
        return;
    }
    // WB9: AHLetter x Numeric
    if AHLETTER.contains(&prev) && curr == Wb::Numeric {
        cursor.set_if_unknown(i, Decision::DoNotBreak);
        return;
    }
    // WB10: Numeric x AHLetter
    if prev == Wb::Numeric && AHLETTER.contains(&curr) {
        cursor.set_if_unknown(i, Decision::DoNotBreak);
        return;
    }
    // WB11: Numeric (MidNum|MidNumLetQ) x Numeric
    if (matches!(prev, Wb::MidNum) || MIDNUMLETQ.contains(&prev)) && curr == Wb::Numeric {
        if let Some(before) = skip_back_over(wb_of, p, &SKIP) {
            if wb_of[before] == Wb::Numeric {
                cursor.set_if_unknown(i, Decision::DoNotBreak);
                return;
            }
        }
    }
    // WB12: Numeric x (MidNum|MidNumLetQ) Numeric
    if prev == Wb::Numeric && (curr == Wb::MidNum || MIDNUMLETQ.contains(&curr)) {
        if let Some(after) = skip_fwd_over(wb_of, i, &SKIP) {
            if wb_of[after] == Wb::Numeric {
                cursor.set_if_unknown(i, Decision::DoNotBreak);
                return;
            }
        }
    }
    // WB13: Katakana x Katakana
    if prev == Wb::Katakana && curr == Wb::Katakana {
        cursor.set_if_unknown(i, Decision::DoNotBreak);
        return;
    }
    // WB13a: (AHLetter|Numeric|Katakana|ExtendNumLet) x ExtendNumLet
    if matches!(prev, Wb::ALetter | Wb::HebrewLetter | Wb::Numeric | Wb::Katakana | Wb::ExtendNumLet)
        && curr == Wb::ExtendNumLet
    {
        cursor.set_if_unknown(i, Decision::DoNotBreak);
        return;
    }
    // WB13b: ExtendNumLet x (AHLetter|Numeric|Katakana)
    if prev == Wb::ExtendNumLet && matches!(curr, Wb::ALetter | Wb::HebrewLetter | Wb::Numeric | Wb::Katakana) {
        cursor.set_if_unknown(i, Decision::DoNotBreak);
    }
}

fn ri_pairing_pass(wb_of: &[Wb], cursor: &mut RunCursor<Wb>) {
    let n = wb_of.len();
    let mut i = 0;
    while i < n {
        if wb_of[i] != Wb::RegionalIndicator {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < n && wb_of[i] == Wb::RegionalIndicator {
            i += 1;
        }
        trace!(target: "seg_core.word", run_start, run_end = i, "ri pairing run");
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

    fn words(s: &str) -> Vec<String> {
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
    fn simple_sentence_tokenizes() {
        let got = words("The quick (\u{201C}brown\u{201D}) fox can\u{2019}t jump 32.3 feet, right?");
        let expected = vec![
            "The", " ", "quick", " ", "(", "\u{201C}", "brown", "\u{201D}", ")", " ", "fox", " ",
            "can\u{2019}t", " ", "jump", " ", "32.3", " ", "feet", ",", " ", "right", "?",
        ];
        assert_eq!(got, expected);
    }

    #[test]
    fn empty_is_empty() {
        assert!(breakables(&[]).is_empty());
    }
}
