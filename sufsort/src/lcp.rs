// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use alloc::{vec, vec::Vec};

use crate::{InvalidInput, Symbol, error};

/// Computes the longest common prefix array of `symbols` from its suffix array.
///
/// Entry `i > 0` of the result is the length of the longest common prefix of the suffixes at
/// ranks `i - 1` and `i`. Entry 0 has no predecessor and is always -1.
///
/// The array is built with Kasai's algorithm: suffixes are visited in text order rather than rank
/// order, so the common prefix found for one offset carries over, shortened by one, to the next.
/// This operation is *O*(*n*).
///
/// # Errors
///
/// Returns an error if `suffix_array` is not a permutation of the offsets of `symbols`.
///
/// # Examples
///
/// ```
/// let text = b"banana$";
/// let sa = sufsort::suffix_array(text, 256)?;
///
/// assert_eq!(sufsort::lcp_array(text, &sa)?, [-1, 0, 1, 3, 0, 0, 2]);
/// # Ok::<(), sufsort::InvalidInput>(())
/// ```
pub fn lcp_array<S: Symbol>(
    symbols: &[S],
    suffix_array: &[u32],
) -> Result<Vec<i64>, InvalidInput> {
    error::validate_suffix_array(symbols.len(), suffix_array)?;

    Ok(kasai_unchecked(symbols, suffix_array))
}

/// Computes the LCP array from a suffix array that is known to be a permutation.
pub(crate) fn kasai_unchecked<S: Symbol>(symbols: &[S], suffix_array: &[u32]) -> Vec<i64> {
    kasai(symbols, suffix_array, &error::inverse(suffix_array))
}

fn kasai<S: Symbol>(symbols: &[S], suffix_array: &[u32], rank: &[u32]) -> Vec<i64> {
    let n = symbols.len();
    let mut lcp = vec![0; n];
    let mut h = 0;

    for (i, &r) in rank.iter().enumerate() {
        let r = r as usize;
        if r == 0 {
            lcp[r] = -1;
        } else {
            let j = suffix_array[r - 1] as usize;
            while i + h < n && j + h < n && symbols[i + h] == symbols[j + h] {
                h += 1;
            }
            lcp[r] = h as i64;
        }

        h = h.saturating_sub(1);
    }

    lcp
}
