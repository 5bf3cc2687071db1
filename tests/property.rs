//! Property-based tests for the comparator using proptest.

use bitcmp::{compare, SymbolSequence};
use proptest::prelude::*;

/// Bit strings of up to 200 symbols.
fn bits_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[01]{0,200}").unwrap()
}

/// Two bit strings of the same length.
fn equal_length_pair() -> impl Strategy<Value = (String, String)> {
    (0usize..200).prop_flat_map(|len| {
        let side = prop::collection::vec(prop::bool::ANY, len)
            .prop_map(|v| v.iter().map(|&b| if b { '1' } else { '0' }).collect::<String>());
        (side.clone(), side)
    })
}

fn hamming(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

proptest! {
    #[test]
    fn mismatch_count_is_hamming_distance((a, b) in equal_length_pair()) {
        let (ra, rb) = (SymbolSequence::from(a.as_str()), SymbolSequence::from(b.as_str()));
        prop_assert_eq!(compare(&ra, &rb).count(), hamming(&a, &b));
    }

    #[test]
    fn self_comparison_is_clean(a in bits_strategy()) {
        let seq = SymbolSequence::from(a.as_str());
        prop_assert_eq!(compare(&seq, &seq).count(), 0);
    }

    #[test]
    fn only_shared_prefix_is_examined(a in bits_strategy(), b in bits_strategy()) {
        let (ra, rb) = (SymbolSequence::from(a.as_str()), SymbolSequence::from(b.as_str()));
        let shared = ra.len().min(rb.len());
        let records: Vec<_> = compare(&ra, &rb).collect();
        prop_assert!(records.iter().all(|r| r.index < shared));
        prop_assert_eq!(records.len(), hamming(&a[..shared], &b[..shared]));
    }

    #[test]
    fn records_are_strictly_increasing(a in bits_strategy(), b in bits_strategy()) {
        let (ra, rb) = (SymbolSequence::from(a.as_str()), SymbolSequence::from(b.as_str()));
        let indices: Vec<usize> = compare(&ra, &rb).map(|r| r.index).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn records_carry_both_symbols(a in bits_strategy(), b in bits_strategy()) {
        let (ra, rb) = (SymbolSequence::from(a.as_str()), SymbolSequence::from(b.as_str()));
        for r in compare(&ra, &rb) {
            prop_assert_eq!(r.expected, ra[r.index]);
            prop_assert_eq!(r.actual, rb[r.index]);
            prop_assert_ne!(r.expected, r.actual);
        }
    }
}
