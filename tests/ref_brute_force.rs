use palindrome_dp::{
    longest_palindrome, longest_palindrome_str, utils::naive_longest, Longest,
};
use proptest::prelude::*;

fn is_pal(s: &[u8]) -> bool {
    s.iter().eq(s.iter().rev())
}

/// Every substring, longest first, earliest start first.
fn brute_force(s: &[u8]) -> Longest {
    let n = s.len();
    for length in (1..=n).rev() {
        for start in 0..=n - length {
            if is_pal(&s[start..start + length]) {
                return Longest::new(start, length);
            }
        }
    }
    Longest::new(0, 0)
}

proptest! {
    #[test]
    fn matches_brute_force_on_small_alphabet(a in "[ab]{0,40}") {
        let s = a.as_bytes();
        prop_assert_eq!(longest_palindrome(s), brute_force(s));
    }

    #[test]
    fn matches_brute_force_on_dna(a in "[ACGT]{0,60}") {
        let s = a.as_bytes();
        prop_assert_eq!(longest_palindrome(s), brute_force(s));
    }

    #[test]
    fn matches_naive_center_expansion(v in proptest::collection::vec(0u8..3, 0..200)) {
        prop_assert_eq!(longest_palindrome(&v), naive_longest(&v));
    }

    #[test]
    fn result_is_in_bounds_and_palindromic(v in proptest::collection::vec(0u8..4, 0..200)) {
        let found = longest_palindrome(&v);
        prop_assert!(found.end() <= v.len());
        prop_assert!(is_pal(found.slice(&v)));
        if !v.is_empty() {
            prop_assert!(found.length >= 1);
        }
    }

    #[test]
    fn nothing_longer_is_palindromic(v in proptest::collection::vec(0u8..2, 1..60)) {
        let found = longest_palindrome(&v);
        for length in found.length + 1..=v.len() {
            for start in 0..=v.len() - length {
                prop_assert!(!is_pal(&v[start..start + length]));
            }
        }
        // And no equal-length palindrome starts earlier.
        for start in 0..found.start {
            prop_assert!(!is_pal(&v[start..start + found.length]));
        }
    }

    #[test]
    fn str_result_is_a_palindromic_substring(a in "[aé日]{0,30}") {
        let found = longest_palindrome_str(&a);
        let chars: Vec<char> = found.chars().collect();
        prop_assert!(chars.iter().eq(chars.iter().rev()));
        prop_assert!(a.contains(found));
        if !a.is_empty() {
            prop_assert!(!found.is_empty());
        }
    }
}
