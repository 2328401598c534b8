//! Separator interleaving.
//!
//! Every palindrome in the input, odd or even, becomes an odd-length
//! palindrome centered on a single slot of the transformed sequence:
//!
//! ```text
//! input:        b   a   a   b
//! transformed:  | b | a | a | b |
//! index:        0 1 2 3 4 5 6 7 8
//! ```
//!
//! Slot `2k` is always a separator and slot `2k + 1` holds `input[k]`.

use std::ops::Index;

use crate::traits::CenteredSequence;

/// One position of the transformed sequence.
///
/// The separator is its own variant rather than a reserved symbol value, so it
/// can never compare equal to an input symbol.
#[derive(Debug, PartialEq, Eq)]
pub enum Slot<'a, T> {
    Separator,
    Symbol(&'a T),
}

// Manual impls: derive would require `T: Clone`/`T: Copy`.
impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

impl<'a, T> Slot<'a, T> {
    #[inline]
    pub fn is_separator(&self) -> bool {
        matches!(self, Slot::Separator)
    }

    #[inline]
    pub fn symbol(&self) -> Option<&'a T> {
        match self {
            Slot::Separator => None,
            Slot::Symbol(s) => Some(s),
        }
    }
}

/// The `2n + 1` slot sequence derived from an input of length `n`.
#[derive(Debug, Clone)]
pub struct Transformed<'a, T> {
    slots: Vec<Slot<'a, T>>,
}

/// Interleave separators around and between every symbol of `input`.
///
/// Runtime: O(n). The input is borrowed, never copied or mutated.
pub fn transform<T>(input: &[T]) -> Transformed<'_, T> {
    let mut slots = Vec::with_capacity(2 * input.len() + 1);
    for symbol in input {
        slots.push(Slot::Separator);
        slots.push(Slot::Symbol(symbol));
    }
    slots.push(Slot::Separator);
    Transformed { slots }
}

impl<'a, T> Transformed<'a, T> {
    /// Number of slots, always `2 * source_len() + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: even an empty input produces a single separator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Length of the original input.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.slots.len() / 2
    }

    pub fn slots(&self) -> &[Slot<'a, T>] {
        &self.slots
    }
}

impl<'a, T> Index<usize> for Transformed<'a, T> {
    type Output = Slot<'a, T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<T: PartialEq> CenteredSequence for Transformed<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn mirrors(&self, left: usize, right: usize) -> bool {
        self.slots[left] == self.slots[right]
    }
}
