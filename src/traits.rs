//! Core trait definitions for the center-expansion sweep.
//!
//! The radius builder never looks at symbols directly. It only asks whether
//! two positions mirror each other around some center, which is all the
//! sweep needs to grow a palindrome by one step.
//!
//! [`Transformed`](crate::transform::Transformed) is the canonical
//! implementation, but anything that can answer that question (a reverse
//! complement view of DNA, a case-folding view of text, etc.) can be fed to
//! [`RadiusTable::build`](crate::radius::RadiusTable::build).

/// A finite sequence that can be probed for mirrored equality.
///
/// Semantics:
/// - Positions are `0..len()`.
/// - `mirrors(left, right)` is only called with `left < right < len()`.
/// - For the radius table to describe palindromes, `mirrors` must be
///   symmetric and must treat every position as mirroring itself.
pub trait CenteredSequence {
    /// Number of probe positions.
    fn len(&self) -> usize;

    /// Returns true if the sequence has no positions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether position `left` equals position `right` under reflection.
    fn mirrors(&self, left: usize, right: usize) -> bool;
}

impl<T: PartialEq> CenteredSequence for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn mirrors(&self, left: usize, right: usize) -> bool {
        self[left] == self[right]
    }
}
