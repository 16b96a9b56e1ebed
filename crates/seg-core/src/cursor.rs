//! The Run Cursor: a reusable lookaround abstraction over a string's
//! per-position properties and decisions (spec.md §4.2).
//!
//! Every UAX rule of the form "`ATerm Close* Sp* × Lower`" becomes a
//! predicate chain over this cursor: a handful of `value`/`is_following`
//! reads plus one write-once decision, instead of hand-rolled index
//! arithmetic (spec.md §9, "Cursor design vs direct indexing").

use crate::decision::Decision;

/// Ephemeral, single-call, never shared across threads (spec.md §3, §5).
pub struct RunCursor<T> {
    properties: Vec<T>,
    decisions: Vec<Decision>,
    position: usize,
    valid: bool,
    skip_set: Vec<T>,
}

/// A read-only lookaround view produced by [`RunCursor::is_following`] /
/// [`RunCursor::is_leading`]. Rather than deep-cloning the whole cursor
/// (properties + decisions) on every predicate chain, this borrows the
/// same property slice and only carries its own `position`/`valid` — the
/// "shallow copy" spec.md §4.2 describes, sized to what lookaround
/// actually needs.
#[derive(Clone, Copy)]
pub struct CursorProbe<'a, T> {
    properties: &'a [T],
    position: i64,
    valid: bool,
}

impl<T: Copy + PartialEq> RunCursor<T> {
    /// `new(text, prop_fn)`. `prop_fn` is applied once per code point to
    /// precompute the property vector; decisions start `Unknown`.
    pub fn new<C>(text: &[C], prop_fn: impl Fn(&C) -> T) -> Self {
        let properties: Vec<T> = text.iter().map(|c| prop_fn(c)).collect();
        let len = properties.len();
        RunCursor {
            properties,
            decisions: vec![Decision::Unknown; len],
            position: 0,
            valid: len != 0,
            skip_set: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// `skip(set)`: sets the skip set used by subsequent `walk`/`value`
    /// stepping.
    pub fn skip(&mut self, set: Vec<T>) {
        self.skip_set = set;
    }

    /// `head()`: reset to the start; does not clear decisions.
    pub fn head(&mut self) {
        self.position = 0;
        self.valid = !self.properties.is_empty();
    }

    fn property_at(&self, idx: i64) -> Option<T> {
        if idx < 0 || idx as usize >= self.properties.len() {
            None
        } else {
            Some(self.properties[idx as usize])
        }
    }

    fn in_skip_set(&self, value: T) -> bool {
        self.skip_set.iter().any(|v| *v == value)
    }

    /// One raw step in `dir` (±1), optionally skipping over positions whose
    /// property is in the skip set. Returns the landing index, which may be
    /// out of `[0, len)`.
    fn step_once(&self, mut pos: i64, dir: i64, use_skip: bool) -> i64 {
        loop {
            pos += dir;
            match self.property_at(pos) {
                Some(p) if use_skip && self.in_skip_set(p) => continue,
                _ => return pos,
            }
        }
    }

    fn step_n(&self, start: i64, steps: i64, use_skip: bool) -> i64 {
        let dir = if steps >= 0 { 1 } else { -1 };
        let mut pos = start;
        for _ in 0..steps.unsigned_abs() {
            pos = self.step_once(pos, dir, use_skip);
            if pos < 0 || pos as usize >= self.properties.len() {
                return pos;
            }
        }
        pos
    }

    /// `walk(offset=+1)`: advance `position` by `offset` skip-aware steps.
    /// Returns whether the new position is still in range; sticks at the
    /// boundary and sets `valid = false` on overshoot.
    pub fn walk(&mut self, offset: i64) -> bool {
        let landed = self.step_n(self.position as i64, offset, true);
        if landed < 0 {
            self.position = 0;
            self.valid = false;
            false
        } else if landed as usize >= self.properties.len() {
            self.position = self.properties.len().saturating_sub(1);
            self.valid = false;
            false
        } else {
            self.position = landed as usize;
            self.valid = true;
            true
        }
    }

    /// `value(offset, no_skip=false)`: read the property at
    /// `position + offset` after applying stepping/skip logic.
    pub fn value(&self, offset: i64, no_skip: bool) -> Option<T> {
        let landed = self.step_n(self.position as i64, offset, !no_skip);
        self.property_at(landed)
    }

    pub fn prev(&self) -> Option<T> {
        self.value(-1, false)
    }

    pub fn curr(&self) -> Option<T> {
        self.value(0, false)
    }

    pub fn next(&self) -> Option<T> {
        self.value(1, false)
    }

    fn as_probe(&self) -> CursorProbe<'_, T> {
        CursorProbe {
            properties: &self.properties,
            position: self.position as i64,
            valid: self.valid,
        }
    }

    /// `is_following(values, greedy)`: lookaround backward. The ORIGINAL
    /// cursor is unchanged; see [`CursorProbe`] for the returned view.
    pub fn is_following(&self, values: &[T], greedy: bool) -> CursorProbe<'_, T> {
        self.as_probe().is_following(values, greedy)
    }

    /// `is_leading(values, greedy)`: lookaround forward.
    pub fn is_leading(&self, values: &[T], greedy: bool) -> CursorProbe<'_, T> {
        self.as_probe().is_leading(values, greedy)
    }

    /// `break_here()`: write-once.
    pub fn break_here(&mut self) {
        self.set_if_unknown(self.position, Decision::Break);
    }

    /// `do_not_break_here()`: write-once.
    pub fn do_not_break_here(&mut self) {
        self.set_if_unknown(self.position, Decision::DoNotBreak);
    }

    /// Write-once at an arbitrary index, used by post-passes (RI pairing,
    /// InCB GB9c) that decide positions other than the cursor's current one.
    pub fn set_if_unknown(&mut self, index: usize, decision: Decision) {
        if let Some(slot) = self.decisions.get_mut(index) {
            if slot.is_unknown() {
                *slot = decision;
            }
        }
    }

    pub fn decision_at(&self, index: usize) -> Decision {
        self.decisions.get(index).copied().unwrap_or_default()
    }

    /// `set_default(d)`: replace all remaining `Unknown` decisions.
    pub fn set_default(&mut self, d: Decision) {
        for slot in &mut self.decisions {
            if slot.is_unknown() {
                *slot = d;
            }
        }
    }

    pub fn into_decisions(self) -> Vec<Decision> {
        self.decisions
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }
}

impl<'a, T: Copy + PartialEq> CursorProbe<'a, T> {
    fn in_values(value: T, values: &[T]) -> bool {
        values.iter().any(|v| *v == value)
    }

    fn at(&self, offset: i64) -> Option<T> {
        let idx = self.position + offset;
        if idx < 0 || idx as usize >= self.properties.len() {
            None
        } else {
            Some(self.properties[idx as usize])
        }
    }

    pub fn prev(&self) -> Option<T> {
        self.at(-1)
    }

    pub fn curr(&self) -> Option<T> {
        self.at(0)
    }

    pub fn next(&self) -> Option<T> {
        self.at(1)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Non-greedy: take exactly one step; valid iff it landed on a member.
    /// Greedy: walk as long as the next property is a member.
    pub fn is_following(&self, values: &[T], greedy: bool) -> CursorProbe<'a, T> {
        if greedy {
            let mut pos = self.position;
            loop {
                let prev_idx = pos - 1;
                match self.at_raw(prev_idx) {
                    Some(p) if Self::in_values(p, values) => pos = prev_idx,
                    _ => break,
                }
            }
            CursorProbe {
                properties: self.properties,
                position: pos,
                valid: self.valid,
            }
        } else {
            let prev_idx = self.position - 1;
            let matched = matches!(self.at_raw(prev_idx), Some(p) if Self::in_values(p, values));
            CursorProbe {
                properties: self.properties,
                position: prev_idx,
                valid: self.valid && matched,
            }
        }
    }

    pub fn is_leading(&self, values: &[T], greedy: bool) -> CursorProbe<'a, T> {
        if greedy {
            let mut pos = self.position;
            loop {
                let next_idx = pos + 1;
                match self.at_raw(next_idx) {
                    Some(p) if Self::in_values(p, values) => pos = next_idx,
                    _ => break,
                }
            }
            CursorProbe {
                properties: self.properties,
                position: pos,
                valid: self.valid,
            }
        } else {
            let next_idx = self.position + 1;
            let matched = matches!(self.at_raw(next_idx), Some(p) if Self::in_values(p, values));
            CursorProbe {
                properties: self.properties,
                position: next_idx,
                valid: self.valid && matched,
            }
        }
    }

    fn at_raw(&self, idx: i64) -> Option<T> {
        if idx < 0 || idx as usize >= self.properties.len() {
            None
        } else {
            Some(self.properties[idx as usize])
        }
    }
}
