#![cfg(feature = "parallel")]

use palindrome_dp::{longest_palindrome, PalindromeError, PalindromeFinderBuilder};
use proptest::prelude::*;

proptest! {
    #[test]
    fn batch_matches_sequential(inputs in proptest::collection::vec(
        proptest::collection::vec(0u8..3, 0..64),
        0..32,
    )) {
        let finder = PalindromeFinderBuilder::<u8>::new().with_max_len(64).build();
        let batch = finder.find_batch(&inputs);
        prop_assert_eq!(batch.len(), inputs.len());
        for (input, result) in inputs.iter().zip(batch) {
            prop_assert_eq!(result, Ok(longest_palindrome(input)));
        }
    }
}

#[test]
fn batch_keeps_errors_in_place() {
    let finder = PalindromeFinderBuilder::new()
        .with_max_len(8)
        .with_reserved(0u8)
        .build();
    let inputs: Vec<Vec<u8>> = vec![vec![1, 2, 1], vec![1; 9], vec![3, 0, 3], vec![]];
    let results = finder.find_batch(&inputs);
    assert!(results[0].is_ok());
    assert_eq!(
        results[1],
        Err(PalindromeError::CapacityExceeded { len: 9, max: 8 })
    );
    assert_eq!(results[2], Err(PalindromeError::InvalidInput { position: 1 }));
    assert!(results[3].is_ok());
}
