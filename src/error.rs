//! Error types for [`PalindromeFinder`](crate::engine::PalindromeFinder).

use thiserror::Error;

/// Errors surfaced before the sweep runs.
///
/// The sweep itself is total; these only come from input validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PalindromeError {
    /// Input is longer than the configured maximum.
    #[error("input length {len} exceeds the configured maximum of {max}")]
    CapacityExceeded { len: usize, max: usize },

    /// Input contains the configured reserved symbol.
    #[error("reserved symbol found in input at position {position}")]
    InvalidInput { position: usize },
}

pub type Result<T> = std::result::Result<T, PalindromeError>;

#[cfg(test)]
mod tests {
    use super::PalindromeError;

    #[test]
    fn messages_name_the_offending_values() {
        let err = PalindromeError::CapacityExceeded { len: 11, max: 10 };
        assert_eq!(
            err.to_string(),
            "input length 11 exceeds the configured maximum of 10"
        );
        let err = PalindromeError::InvalidInput { position: 3 };
        assert_eq!(err.to_string(), "reserved symbol found in input at position 3");
    }
}
