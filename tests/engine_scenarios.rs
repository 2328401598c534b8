use palindrome_dp::{longest_palindrome, Longest, PalindromeFinder};

fn find(s: &[u8]) -> Longest {
    PalindromeFinder::new().find(s).unwrap()
}

#[test]
fn single_symbol() {
    assert_eq!(find(b"a"), Longest::new(0, 1));
}

#[test]
fn babad_prefers_earlier_of_equal_length() {
    // "bab" at 0 and "aba" at 1 are both length 3.
    let found = find(b"babad");
    assert_eq!(found, Longest::new(0, 3));
    assert_eq!(found.slice(b"babad"), b"bab");
}

#[test]
fn even_length_center() {
    assert_eq!(find(b"cbbd"), Longest::new(1, 2));
}

#[test]
fn whole_input_of_equal_symbols() {
    assert_eq!(find(b"aaaa"), Longest::new(0, 4));
}

#[test]
fn empty_input_covers_nothing() {
    assert_eq!(find(b""), Longest::new(0, 0));
    assert_eq!(longest_palindrome::<u8>(&[]), Longest::new(0, 0));
}

#[test]
fn no_repeats_yields_first_symbol() {
    assert_eq!(find(b"abcde"), Longest::new(0, 1));
}

#[test]
fn separator_like_symbols_are_ordinary() {
    // '#' is the conventional separator; here it is plain input.
    assert_eq!(find(b"a#b#a"), Longest::new(0, 5));
    assert_eq!(find(b"##"), Longest::new(0, 2));
}

#[test]
fn palindrome_at_the_end() {
    assert_eq!(find(b"abcxyzzyx"), Longest::new(3, 6));
}

#[test]
fn generic_symbols() {
    let words = ["to", "be", "or", "not", "or", "be", "x"];
    assert_eq!(longest_palindrome(&words), Longest::new(1, 5));
    let numbers = [1u32, 2, 3, 3, 2, 1, 9, 9];
    assert_eq!(longest_palindrome(&numbers), Longest::new(0, 6));
}
