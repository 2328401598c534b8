//! Assorted utilities and helpers.
//!
//! These are reference checks for the linear sweep; they are quadratic and
//! meant for verification on modest inputs.

use crate::extract::Longest;

/// Whether `s` reads the same forward and backward.
#[inline]
pub fn is_palindrome<T: PartialEq>(s: &[T]) -> bool {
    s.iter().eq(s.iter().rev())
}

/// Longest palindromic run by expanding around each of the `2n - 1` centers
/// independently. O(n²) time, O(1) extra space.
///
/// Uses the same tie-break as the linear sweep (earliest start) and returns
/// `(0, 0)` for empty input.
pub fn naive_longest<T: PartialEq>(s: &[T]) -> Longest {
    let n = s.len();
    let mut best = Longest::default();
    let mut consider = |start: usize, length: usize| {
        if length > best.length || (length == best.length && length > 0 && start < best.start) {
            best = Longest { start, length };
        }
    };
    for center in 0..n {
        // odd: s[center] in the middle
        let mut r = 0;
        while r < center && center + r + 1 < n && s[center - r - 1] == s[center + r + 1] {
            r += 1;
        }
        consider(center - r, 2 * r + 1);

        // even: gap between center and center + 1
        let mut r = 0;
        while r <= center && center + r + 1 < n && s[center - r] == s[center + r + 1] {
            r += 1;
        }
        if r > 0 {
            consider(center + 1 - r, 2 * r);
        }
    }
    best
}
