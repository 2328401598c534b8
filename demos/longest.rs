//! Example: longest palindromic substring on bytes, words and Unicode text.
//!
//! Run with:
//! `cargo run --example longest`

use palindrome_dp::{
    longest_palindrome, longest_palindrome_str, PalindromeError, PalindromeFinderBuilder,
};

fn main() {
    let dna = b"GATTACATTAGGCCTAAT";
    let found = longest_palindrome(dna);
    println!(
        "DNA: start={} length={} -> {}",
        found.start,
        found.length,
        String::from_utf8_lossy(found.slice(dna))
    );

    let words: Vec<&str> = "fall leaves after leaves fall".split(' ').collect();
    let found = longest_palindrome(&words);
    println!("Words: {:?}", found.slice(&words));

    println!("Unicode: {}", longest_palindrome_str("¡la anilina!"));

    // Inputs that must not contain a reserved marker can opt into validation.
    let finder = PalindromeFinderBuilder::new()
        .with_max_len(64)
        .with_reserved(b'#')
        .build();
    match finder.find(b"ab#ba") {
        Ok(found) => println!("unexpected: {found:?}"),
        Err(PalindromeError::InvalidInput { position }) => {
            println!("Rejected: reserved symbol at {position}")
        }
        Err(err) => println!("Rejected: {err}"),
    }
}
