//! Hamming distance between strings of unequal length.
//!
//! The shorter string is right-padded with a pad character before comparing,
//! so this is not the textbook definition, which rejects unequal lengths.
//! Padded positions count as mismatches against any other character and as
//! matches against the same character.

use crate::types::ComparisonPair;

pub const DEFAULT_PAD_CHAR: char = '_';

/// Case-insensitive distance using the default pad character `_`.
pub fn hamming_distance(a: &str, b: &str) -> usize {
    hamming_distance_with_pad(a, b, DEFAULT_PAD_CHAR)
}

/// Case-insensitive distance padding the shorter string with `pad`.
///
/// Both strings are lowercased first. Lengths are counted in characters, not
/// bytes. Two empty strings have distance 0.
pub fn hamming_distance_with_pad(a: &str, b: &str, pad: char) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let max_len = a.len().max(b.len());

    (0..max_len)
        .filter(|&i| a.get(i).unwrap_or(&pad) != b.get(i).unwrap_or(&pad))
        .count()
}

impl ComparisonPair {
    pub fn distance(&self) -> usize {
        hamming_distance_with_pad(&self.a, &self.b, self.pad)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn symmetric(a in "\\PC{0,20}", b in "\\PC{0,20}") {
            prop_assert_eq!(hamming_distance(&a, &b), hamming_distance(&b, &a));
        }

        #[test]
        fn identical_is_zero(a in "[a-zA-Z]{0,30}") {
            prop_assert_eq!(hamming_distance(&a, &a.to_uppercase()), 0);
        }

        #[test]
        fn pad_irrelevant_for_equal_lengths(
            (a, b) in (1usize..20).prop_flat_map(|n| {
                (
                    proptest::collection::vec(proptest::char::range('a', 'z'), n),
                    proptest::collection::vec(proptest::char::range('a', 'z'), n),
                )
            }),
        ) {
            let a: String = a.into_iter().collect();
            let b: String = b.into_iter().collect();
            prop_assert_eq!(
                hamming_distance_with_pad(&a, &b, 'x'),
                hamming_distance_with_pad(&a, &b, '_')
            );
        }

        #[test]
        fn bounded_by_longer_length(a in "[acgt]{0,20}", b in "[acgt]{0,20}") {
            let d = hamming_distance(&a, &b);
            prop_assert!(d <= a.len().max(b.len()));
            prop_assert!(d >= a.len().abs_diff(b.len()));
        }
    }
}
