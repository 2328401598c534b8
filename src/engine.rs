//! Configured entry point to the transform → sweep → extract pipeline.
//!
//! [`PalindromeFinder`] adds what the pure core leaves to the caller: an
//! upper bound on input length and an optional reserved symbol that inputs
//! must not contain. The free functions [`longest_palindrome`] and
//! [`longest_palindrome_str`] skip both checks.

use std::ops::Range;

use crate::error::{PalindromeError, Result};
use crate::extract::{extract_longest, Longest};
use crate::radius::RadiusTable;
use crate::transform::transform;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default cap on input length, in symbols.
pub const DEFAULT_MAX_LEN: usize = 1_000_000;

/// What to report for an empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// `(0, 0)`: an empty input has no symbols to cover.
    #[default]
    Empty,
    /// `(0, 1)`, the historical default of the reference program. Only
    /// useful for output compatibility; the range does not fit the input.
    Legacy,
}

impl EmptyPolicy {
    fn result(self) -> Longest {
        match self {
            EmptyPolicy::Empty => Longest::new(0, 0),
            EmptyPolicy::Legacy => Longest::new(0, 1),
        }
    }
}

/// Longest-palindrome finder for inputs of symbol type `T`.
///
/// Typical usage:
/// ```
/// use palindrome_dp::{Longest, PalindromeFinder};
///
/// let finder = PalindromeFinder::new();
/// assert_eq!(finder.find(b"babad").unwrap(), Longest::new(0, 3));
/// ```
#[derive(Debug, Clone)]
pub struct PalindromeFinder<T> {
    max_len: usize,
    reserved: Option<T>,
    empty_policy: EmptyPolicy,
}

impl<T> Default for PalindromeFinder<T> {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            reserved: None,
            empty_policy: EmptyPolicy::Empty,
        }
    }
}

impl<T> PalindromeFinder<T> {
    /// Finder with [`DEFAULT_MAX_LEN`], no reserved symbol and
    /// [`EmptyPolicy::Empty`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Finder with an explicit length cap.
    ///
    /// # Panics
    /// Panics if `max_len == 0`.
    pub fn with_max_len(max_len: usize) -> Self {
        Self::from_parts(max_len, None, EmptyPolicy::default())
    }

    pub(crate) fn from_parts(max_len: usize, reserved: Option<T>, empty_policy: EmptyPolicy) -> Self {
        assert!(max_len > 0, "max_len must be positive");
        Self {
            max_len,
            reserved,
            empty_policy,
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn reserved(&self) -> Option<&T> {
        self.reserved.as_ref()
    }

    pub fn empty_policy(&self) -> EmptyPolicy {
        self.empty_policy
    }

    /// Check an input length against the cap without touching the input.
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len > self.max_len {
            #[cfg(feature = "tracing")]
            tracing::debug!(len, max = self.max_len, "input over capacity");
            return Err(PalindromeError::CapacityExceeded {
                len,
                max: self.max_len,
            });
        }
        Ok(())
    }
}

impl<T: PartialEq> PalindromeFinder<T> {
    /// Check `input` against the length cap and the reserved symbol.
    pub fn validate(&self, input: &[T]) -> Result<()> {
        self.check_len(input.len())?;
        if let Some(reserved) = &self.reserved {
            if let Some(position) = input.iter().position(|s| s == reserved) {
                #[cfg(feature = "tracing")]
                tracing::debug!(position, "reserved symbol in input");
                return Err(PalindromeError::InvalidInput { position });
            }
        }
        Ok(())
    }

    /// Validate `input` and build its radius table over the transformed
    /// sequence (length `2n + 1`).
    pub fn radius_table(&self, input: &[T]) -> Result<RadiusTable> {
        self.validate(input)?;
        Ok(RadiusTable::build(&transform(input)))
    }

    /// Find the longest palindromic run of `input`.
    ///
    /// Ties go to the smallest start. Empty input follows the configured
    /// [`EmptyPolicy`].
    pub fn find(&self, input: &[T]) -> Result<Longest> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("palindrome_find", len = input.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.validate(input)?;
        if input.is_empty() {
            return Ok(self.empty_policy.result());
        }
        let table = RadiusTable::build(&transform(input));
        let longest = extract_longest(&table, input.len());

        #[cfg(feature = "tracing")]
        tracing::debug!(start = longest.start, length = longest.length, "longest palindrome");

        Ok(longest)
    }
}

#[cfg(not(feature = "parallel"))]
impl<T: PartialEq> PalindromeFinder<T> {
    /// Run [`find`](Self::find) over independent inputs, preserving order.
    pub fn find_batch<I>(&self, inputs: &[I]) -> Vec<Result<Longest>>
    where
        I: AsRef<[T]>,
    {
        inputs.iter().map(|input| self.find(input.as_ref())).collect()
    }
}

#[cfg(feature = "parallel")]
impl<T: PartialEq + Sync> PalindromeFinder<T> {
    /// Run [`find`](Self::find) over independent inputs on the rayon pool,
    /// preserving order.
    pub fn find_batch<I>(&self, inputs: &[I]) -> Vec<Result<Longest>>
    where
        I: AsRef<[T]> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.find(input.as_ref()))
            .collect()
    }
}

impl PalindromeFinder<char> {
    /// Longest palindrome of `s` measured in Unicode scalar values, returned
    /// as a subslice of `s`.
    ///
    /// The length cap counts chars, not bytes. An empty `s` yields `""`
    /// under either [`EmptyPolicy`].
    pub fn find_str<'a>(&self, s: &'a str) -> Result<&'a str> {
        // Byte length bounds char count; only count when it could matter.
        if s.len() > self.max_len {
            self.check_len(s.chars().count())?;
        }
        let chars: Vec<char> = s.chars().collect();
        let longest = self.find(&chars)?;
        Ok(&s[char_span_to_bytes(s, longest)])
    }
}

/// Longest palindromic run of `input`, without length or symbol checks.
///
/// ```
/// use palindrome_dp::{longest_palindrome, Longest};
///
/// assert_eq!(longest_palindrome(b"cbbd"), Longest::new(1, 2));
/// assert_eq!(longest_palindrome::<u8>(&[]), Longest::new(0, 0));
/// ```
pub fn longest_palindrome<T: PartialEq>(input: &[T]) -> Longest {
    let table = RadiusTable::build(&transform(input));
    extract_longest(&table, input.len())
}

/// Longest palindromic substring of `s`, compared char by char.
///
/// ```
/// use palindrome_dp::longest_palindrome_str;
///
/// assert_eq!(longest_palindrome_str("xyzénéq"), "éné");
/// ```
pub fn longest_palindrome_str(s: &str) -> &str {
    let chars: Vec<char> = s.chars().collect();
    let longest = longest_palindrome(&chars);
    &s[char_span_to_bytes(s, longest)]
}

/// Convert a span over `s.chars()` into a byte range of `s`. Spans past the
/// end are clamped to `s.len()`.
fn char_span_to_bytes(s: &str, span: Longest) -> Range<usize> {
    let mut offsets = s
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(s.len()));
    let start = offsets.nth(span.start).unwrap_or(s.len());
    let end = if span.length == 0 {
        start
    } else {
        offsets.nth(span.length - 1).unwrap_or(s.len())
    };
    start..end
}
