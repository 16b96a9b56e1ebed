//! Segmentation Façade: the four public entry points per boundary kind
//! (spec.md §4.8, §6). Each `K` in `{grapheme_cluster, word, sentence,
//! line}` gets a `K_breakables` (decision vector), `K_boundaries` (index
//! stream), and `K_units` (slice stream), built from the same underlying
//! decision vector so the three views never disagree with each other.

use crate::{grapheme, line, sentence, word};

/// A caller-supplied tailoring hook: given the text and the engine's raw
/// breakable vector, return a (possibly) modified vector of the same
/// length. Used to implement application-specific overrides without
/// forking an engine (spec.md §4.8, "Tailoring").
pub type Tailoring<'a> = dyn Fn(&[char], Vec<u8>) -> Vec<u8> + 'a;

/// Turns a per-position decision vector into a boundary index stream.
/// End-of-text is always a boundary (GB2/WB2/SB2/LB3), independent of
/// whatever decision the engine wrote for the last code point.
fn boundaries_from(breakable: &[u8]) -> Vec<usize> {
    if breakable.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<usize> = breakable
        .iter()
        .enumerate()
        .filter(|(_, &b)| b == 1)
        .map(|(i, _)| i)
        .collect();
    out.push(breakable.len());
    out
}

fn units_from<'a>(text: &'a [char], boundaries: &[usize]) -> Vec<&'a [char]> {
    boundaries
        .windows(2)
        .map(|w| &text[w[0]..w[1]])
        .collect()
}

macro_rules! engine_facade {
    ($breakables_fn:ident, $boundaries_fn:ident, $units_fn:ident, $engine:path $(, $extra:ident : $extra_ty:ty)*) => {
        pub fn $breakables_fn(text: &[char] $(, $extra: $extra_ty)*, tailoring: Option<&Tailoring<'_>>) -> Vec<u8> {
            let raw = $engine(text $(, $extra)*);
            match tailoring {
                Some(f) => f(text, raw),
                None => raw,
            }
        }

        pub fn $boundaries_fn(text: &[char] $(, $extra: $extra_ty)*, tailoring: Option<&Tailoring<'_>>) -> Vec<usize> {
            boundaries_from(&$breakables_fn(text $(, $extra)*, tailoring))
        }

        pub fn $units_fn<'a>(text: &'a [char] $(, $extra: $extra_ty)*, tailoring: Option<&Tailoring<'_>>) -> Vec<&'a [char]> {
            let boundaries = $boundaries_fn(text $(, $extra)*, tailoring);
            units_from(text, &boundaries)
        }
    };
}

engine_facade!(grapheme_cluster_breakables, grapheme_cluster_boundaries, grapheme_cluster_units, grapheme::breakables);
engine_facade!(word_breakables, word_boundaries, word_units, word::breakables);
engine_facade!(sentence_breakables, sentence_boundaries, sentence_units, sentence::breakables);
engine_facade!(line_breakables, line_boundaries, line_units, line::breakables, legacy: bool);

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn grapheme_boundaries_and_units_agree_with_breakables() {
        let text = chars("a\u{0308}b");
        let bv = grapheme_cluster_breakables(&text, None);
        assert_eq!(bv, vec![1, 0, 1]);
        let boundaries = grapheme_cluster_boundaries(&text, None);
        assert_eq!(boundaries, vec![0, 2, 3]);
        let units: Vec<String> = grapheme_cluster_units(&text, None)
            .into_iter()
            .map(|u| u.iter().collect())
            .collect();
        assert_eq!(units, vec!["a\u{0308}", "b"]);
    }

    #[test]
    fn word_tailoring_hook_can_force_a_boundary() {
        let text = chars("ab");
        let force_split_after_first: &Tailoring<'_> = &|_text, mut v| {
            v[1] = 1;
            v
        };
        let bv = word_breakables(&text, Some(force_split_after_first));
        assert_eq!(bv, vec![1, 1]);
    }

    #[test]
    fn line_facade_threads_the_legacy_flag() {
        let text = chars("\u{03B1}\u{03B1}");
        let standard = line_breakables(&text, false, None);
        let legacy = line_breakables(&text, true, None);
        assert_eq!(standard[1], 0);
        assert_eq!(legacy[1], 1);
    }

    #[test]
    fn sentence_units_cover_the_whole_input() {
        let text = chars("Hi. Bye.");
        let units = sentence_units(&text, None);
        let rejoined: Vec<char> = units.into_iter().flatten().copied().collect();
        assert_eq!(rejoined, text);
    }

    #[test]
    fn empty_input_yields_no_boundaries_for_every_engine() {
        let text: Vec<char> = Vec::new();
        assert!(grapheme_cluster_boundaries(&text, None).is_empty());
        assert!(word_boundaries(&text, None).is_empty());
        assert!(sentence_boundaries(&text, None).is_empty());
        assert!(line_boundaries(&text, false, None).is_empty());
    }

    #[test]
    fn empty_input_yields_no_units_for_every_engine() {
        let text: Vec<char> = Vec::new();
        assert!(grapheme_cluster_units(&text, None).is_empty());
        assert!(word_units(&text, None).is_empty());
        assert!(sentence_units(&text, None).is_empty());
        assert!(line_units(&text, false, None).is_empty());
    }
}
