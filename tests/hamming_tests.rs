use dna_protein_rs::{hamming_distance, hamming_distance_with_pad, ComparisonPair};

#[test]
fn test_hamming_padding() {
    assert_eq!(hamming_distance("abc", "ab"), 1);
    assert_eq!(hamming_distance("abc", "ab_"), 1);
    assert_eq!(hamming_distance("ab", "abc"), 1);
}

#[test]
fn test_hamming_empty() {
    assert_eq!(hamming_distance("", ""), 0);
    assert_eq!(hamming_distance("", "abc"), 3);
}

#[test]
fn test_hamming_case_insensitive() {
    assert_eq!(hamming_distance("GATTACA", "gattaca"), 0);
    assert_eq!(hamming_distance("ACGT", "acga"), 1);
}

#[test]
fn test_pad_irrelevant_without_padding() {
    assert_eq!(
        hamming_distance_with_pad("ab", "ba", 'x'),
        hamming_distance_with_pad("ab", "ba", '_')
    );
    assert_eq!(hamming_distance_with_pad("ab", "ba", 'x'), 2);
}

#[test]
fn test_hamming_unicode() {
    // lengths are counted in characters: 13 vs 8
    assert_eq!(hamming_distance("Ayşenur Akcan", "aysenura"), 7);
}

#[test]
fn test_comparison_pair() {
    let pair = ComparisonPair::new("Slack", "slacker");
    assert_eq!(pair.pad, '_');
    assert_eq!(pair.distance(), 2);
    assert_eq!(pair.with_pad('e').distance(), 1);
}
