//! Longest palindromic substring in linear time.
//!
//! This crate finds the longest contiguous run of a sequence that reads the
//! same forward and backward, using a center-expansion dynamic program
//! (Manacher's sweep) that runs in O(n) time and space.
//!
//! ## Core idea
//! 1. Interleave a separator around and between every symbol, so both odd
//!    and even palindromes become odd palindromes around a single center
//!    ([`transform`](transform::transform)).
//! 2. Sweep left to right, filling the maximal radius for every center and
//!    seeding each radius from its mirror inside the rightmost palindrome
//!    found so far ([`RadiusTable::build`]).
//! 3. Map the radii back to `(start, length)` in the original sequence and
//!    keep the longest, earliest on ties ([`extract_longest`]).
//!
//! ## Quick start
//! ```
//! use palindrome_dp::{longest_palindrome, Longest, PalindromeFinder};
//!
//! assert_eq!(longest_palindrome(b"babad"), Longest::new(0, 3));
//!
//! let finder = PalindromeFinder::with_max_len(1024);
//! let found = finder.find(b"forgeeksskeegfor").unwrap();
//! assert_eq!(found.slice(b"forgeeksskeegfor"), b"geeksskeeg");
//! ```
//!
//! ## Features
//! - `parallel`: [`PalindromeFinder::find_batch`] fans out over rayon.
//! - `tracing`: spans and debug events around validation, sweep and
//!   extraction.
//! - `heavy`: large stress tests.

pub mod builder;
pub mod engine;
pub mod error;
pub mod extract;
pub mod radius;
pub mod traits;
pub mod transform;
pub mod utils;

pub use crate::builder::PalindromeFinderBuilder;
pub use crate::engine::{
    longest_palindrome, longest_palindrome_str, EmptyPolicy, PalindromeFinder, DEFAULT_MAX_LEN,
};
pub use crate::error::{PalindromeError, Result};
pub use crate::extract::{extract_longest, Longest};
pub use crate::radius::RadiusTable;
pub use crate::traits::CenteredSequence;
