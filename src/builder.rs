use crate::engine::{EmptyPolicy, PalindromeFinder, DEFAULT_MAX_LEN};

/// Step-by-step configuration for a [`PalindromeFinder`].
///
/// ```
/// use palindrome_dp::{PalindromeError, PalindromeFinderBuilder};
///
/// let finder = PalindromeFinderBuilder::new()
///     .with_max_len(8)
///     .with_reserved(b'#')
///     .build();
/// assert_eq!(
///     finder.find(b"a#a"),
///     Err(PalindromeError::InvalidInput { position: 1 })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PalindromeFinderBuilder<T> {
    max_len: Option<usize>,
    reserved: Option<T>,
    empty_policy: EmptyPolicy,
}

impl<T> Default for PalindromeFinderBuilder<T> {
    fn default() -> Self {
        Self {
            max_len: None,
            reserved: None,
            empty_policy: EmptyPolicy::default(),
        }
    }
}

impl<T> PalindromeFinderBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
    pub fn with_reserved(mut self, symbol: T) -> Self {
        self.reserved = Some(symbol);
        self
    }
    pub fn with_empty_policy(mut self, policy: EmptyPolicy) -> Self {
        self.empty_policy = policy;
        self
    }
    /// # Panics
    /// Panics if a zero `max_len` was configured.
    pub fn build(self) -> PalindromeFinder<T> {
        let max_len = self.max_len.unwrap_or(DEFAULT_MAX_LEN);
        PalindromeFinder::from_parts(max_len, self.reserved, self.empty_policy)
    }
}
