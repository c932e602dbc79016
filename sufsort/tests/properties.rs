// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use proptest::{collection::vec, prelude::*};
use sufsort::{SuffixArray, Symbol};

const UNARY: std::ops::Range<u8> = 1..2;
const BINARY: std::ops::Range<u8> = 1..3;

fn is_suffix_array_of<S: Symbol>(sa: &[u32], text: &[S]) -> bool {
    let mut seen = vec![false; text.len()];
    for &offset in sa {
        match seen.get_mut(offset as usize) {
            Some(seen) if !*seen => *seen = true,
            _ => return false,
        }
    }

    sa.len() == text.len()
        && sa
            .windows(2)
            .all(|w| text[w[0] as usize..] < text[w[1] as usize..])
}

fn naive_lcp<S: Symbol>(sa: &[u32], text: &[S]) -> Vec<i64> {
    let mut lcp = vec![-1; sa.len()];
    for i in 1..sa.len() {
        let a = &text[sa[i - 1] as usize..];
        let b = &text[sa[i] as usize..];
        lcp[i] = a.iter().zip(b).take_while(|(x, y)| x == y).count() as i64;
    }

    lcp
}

fn sorted<S: Symbol>(symbols: &[S]) -> Vec<S> {
    let mut symbols = symbols.to_vec();
    symbols.sort();
    symbols
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn suffix_array_unary(s in vec(UNARY, 0..256)) {
        let sa = sufsort::suffix_array(&s, 3).unwrap();
        prop_assert!(is_suffix_array_of(&sa, &s));
    }

    #[test]
    fn suffix_array_binary(s in vec(BINARY, 0..256)) {
        let sa = sufsort::suffix_array(&s, 3).unwrap();
        prop_assert!(is_suffix_array_of(&sa, &s));
    }

    #[test]
    fn suffix_array_binary_with_terminator(mut s in vec(BINARY, 0..256)) {
        s.push(0);
        let sa = sufsort::suffix_array(&s, 3).unwrap();
        prop_assert!(is_suffix_array_of(&sa, &s));
        prop_assert_eq!(sa[0] as usize, s.len() - 1);
    }

    #[test]
    fn suffix_array_bytes(s in vec(any::<u8>(), 0..512)) {
        let sa = sufsort::suffix_array(&s, 256).unwrap();
        prop_assert!(is_suffix_array_of(&sa, &s));
    }

    #[test]
    fn lcp_matches_naive(s in vec(BINARY, 0..256)) {
        let sa = sufsort::suffix_array(&s, 3).unwrap();
        let lcp = sufsort::lcp_array(&s, &sa).unwrap();
        prop_assert_eq!(lcp, naive_lcp(&sa, &s));
    }

    #[test]
    fn bwt_is_a_rearrangement(s in vec(any::<u8>(), 1..256)) {
        let sa = sufsort::suffix_array(&s, 256).unwrap();
        let bwt = sufsort::bwt(&s, &sa).unwrap();
        prop_assert_eq!(sorted(&bwt), sorted(&s));
    }

    #[test]
    fn inverse_bwt_round_trip(mut s in vec(1u8..=u8::MAX, 0..256)) {
        s.push(0);
        let sa = sufsort::suffix_array(&s, 256).unwrap();
        let (bwt, primary) = sufsort::bwt_with_primary(&s, &sa).unwrap();
        prop_assert_eq!(sufsort::inverse_bwt(&bwt, primary, 256).unwrap(), s);
    }

    #[test]
    fn deterministic(s in vec(BINARY, 0..256)) {
        let first = sufsort::suffix_array(&s, 3).unwrap();
        let second = sufsort::suffix_array(&s, 3).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn find_all_matches_naive(s in vec(BINARY, 0..128), pattern in vec(BINARY, 1..4)) {
        let sa = SuffixArray::new(&s, 3).unwrap();
        let mut found = sa.find_all(&pattern).to_vec();
        found.sort();

        let expected: Vec<u32> = (0..s.len())
            .filter(|&i| s[i..].starts_with(&pattern))
            .map(|i| i as u32)
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn verify_accepts_built_array(s in vec(BINARY, 0..256)) {
        let sa = sufsort::suffix_array(&s, 3).unwrap();
        prop_assert_eq!(sufsort::verify_suffix_array(&s, &sa), Ok(()));
    }

    #[test]
    fn verify_rejects_swapped_neighbors(
        s in vec(BINARY, 2..256),
        i in any::<prop::sample::Index>()
    ) {
        let mut sa = sufsort::suffix_array(&s, 3).unwrap();
        let rank = i.index(sa.len() - 1) + 1;
        sa.swap(rank - 1, rank);

        prop_assert!(sufsort::verify_suffix_array(&s, &sa).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn suffix_array_bytes_long(s in vec(any::<u8>(), 0..(u16::MAX as usize))) {
        let sa = sufsort::suffix_array(&s, 256).unwrap();
        prop_assert!(is_suffix_array_of(&sa, &s));
    }

    #[test]
    fn suffix_array_large_alphabet(s in vec(0u32..1_000_000, 0..1024)) {
        let sa = sufsort::suffix_array(&s, 1_000_000).unwrap();
        prop_assert!(is_suffix_array_of(&sa, &s));
    }

    #[test]
    fn suffix_array_wide_symbols(s in vec(0u16..4, 0..1024)) {
        let sa = sufsort::suffix_array(&s, 4).unwrap();
        let lcp = sufsort::lcp_array(&s, &sa).unwrap();
        prop_assert!(is_suffix_array_of(&sa, &s));
        prop_assert_eq!(lcp, naive_lcp(&sa, &s));
    }
}

#[test]
fn out_of_range_symbol_is_rejected() {
    assert!(matches!(
        sufsort::suffix_array(&[0u32, 5, 1], 5),
        Err(sufsort::InvalidInput::SymbolOutOfRange { position: 1, .. }),
    ));
}

#[test]
fn empty_alphabet_with_input_is_rejected() {
    assert_eq!(
        sufsort::suffix_array(&[0u8], 0),
        Err(sufsort::InvalidInput::EmptyAlphabet { len: 1 }),
    );
}

#[test]
fn empty_alphabet_with_empty_input() {
    assert_eq!(sufsort::suffix_array::<u8>(&[], 0), Ok(Vec::new()));
}
