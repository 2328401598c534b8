//! Mapping radii back to the original sequence.
//!
//! On the transformed sequence, center `2k - 1` sits on input symbol `k - 1`
//! and center `2k` sits on the gap between symbols `k - 1` and `k`. A radius
//! `r` there covers exactly `r` original symbols, so each center yields one
//! `(start, length)` candidate. The longest candidate wins; ties go to the
//! smallest start.

use std::ops::Range;

use crate::radius::RadiusTable;

/// Position and length of a palindrome in the original sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Longest {
    /// 0-based index of the first symbol.
    pub start: usize,
    /// Number of original symbols covered.
    pub length: usize,
}

impl Longest {
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// One past the last covered index.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Borrow the covered run out of `input`.
    ///
    /// # Panics
    /// Panics if the range does not fit `input`.
    pub fn slice<'a, T>(&self, input: &'a [T]) -> &'a [T] {
        &input[self.range()]
    }
}

/// Pick the longest palindrome described by a radius table over an input of
/// length `n`.
///
/// For `n == 0` this returns `(0, 0)`.
///
/// # Panics
/// Panics if `table.len() != 2 * n + 1`.
pub fn extract_longest(table: &RadiusTable, n: usize) -> Longest {
    assert_eq!(
        table.len(),
        2 * n + 1,
        "radius table does not describe an input of length {n}"
    );
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("extract_longest", n);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let best_at = best_length_per_start(table, n);

    let mut best = Longest::default();
    for (start, &length) in best_at.iter().enumerate() {
        if length > best.length {
            best = Longest { start, length };
        }
    }
    best
}

/// Longest candidate beginning at each start position.
fn best_length_per_start(table: &RadiusTable, n: usize) -> Vec<usize> {
    let mut best_at = vec![0usize; n];
    for k in 1..=n {
        // Centered on symbol k - 1. The radius is odd here, but clearing the
        // low bit first keeps the length odd for any table.
        let r = table[2 * k - 1];
        let start = k - 1 - r / 2;
        let length = r + 1 - (r & 1);
        best_at[start] = best_at[start].max(length);

        // Centered between symbols k - 1 and k. No candidate when r == 0,
        // which also keeps `start` in range at k == n.
        let r = table[2 * k];
        if r > 0 {
            let start = k - r / 2;
            best_at[start] = best_at[start].max(r);
        }
    }
    best_at
}
