// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use alloc::{vec, vec::Vec};

use crate::{InvalidInput, Symbol, error, symbol};

/// Computes the Burrows-Wheeler transform of `symbols` from its suffix array.
///
/// Entry `i` of the result is the symbol preceding the suffix at rank `i`, where the suffix
/// starting at offset 0 is preceded by the last symbol. The result is a rearrangement of
/// `symbols`. This operation is *O*(*n*).
///
/// If `symbols` ends with a unique smallest terminator, the terminator appears in the result
/// exactly once, at the rank of the whole text. See [`bwt_with_primary()`] to obtain that rank.
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
/// assert_eq!(sufsort::bwt(text, &sa)?, b"annb$aa");
/// # Ok::<(), sufsort::InvalidInput>(())
/// ```
pub fn bwt<S: Symbol>(symbols: &[S], suffix_array: &[u32]) -> Result<Vec<S>, InvalidInput> {
    bwt_with_primary(symbols, suffix_array).map(|(bwt, _)| bwt)
}

/// Computes the Burrows-Wheeler transform of `symbols` together with its primary index.
///
/// The primary index is the rank of the suffix starting at offset 0, i.e., the row of the
/// transform holding the last symbol of the text. It is 0 for empty input.
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
/// assert_eq!(sufsort::bwt_with_primary(text, &sa)?, (b"annb$aa".to_vec(), 4));
/// # Ok::<(), sufsort::InvalidInput>(())
/// ```
pub fn bwt_with_primary<S: Symbol>(
    symbols: &[S],
    suffix_array: &[u32],
) -> Result<(Vec<S>, usize), InvalidInput> {
    error::validate_suffix_array(symbols.len(), suffix_array)?;

    let n = symbols.len();
    let mut primary = 0;
    let bwt = suffix_array
        .iter()
        .enumerate()
        .map(|(rank, &offset)| {
            if offset == 0 {
                primary = rank;
                symbols[n - 1]
            } else {
                symbols[offset as usize - 1]
            }
        })
        .collect();

    Ok((bwt, primary))
}

/// Reconstructs a text from its Burrows-Wheeler transform and primary index.
///
/// The reconstruction follows the last-to-first mapping backwards from the primary row. It is
/// exact for texts whose last symbol is a unique smallest terminator, which is the case in which
/// suffix order and rotation order agree. For other texts the result is some rotation-consistent
/// text of the same length rather than an error. This operation is *O*(*n* + *k*).
///
/// # Errors
///
/// Returns an error if a symbol is not less than `alphabet_size` or if `primary` is not a row of
/// the transform.
///
/// # Examples
///
/// ```
/// let text = b"banana$";
/// let sa = sufsort::suffix_array(text, 256)?;
/// let (bwt, primary) = sufsort::bwt_with_primary(text, &sa)?;
///
/// assert_eq!(sufsort::inverse_bwt(&bwt, primary, 256)?, text);
/// # Ok::<(), sufsort::InvalidInput>(())
/// ```
pub fn inverse_bwt<S: Symbol>(
    bwt: &[S],
    primary: usize,
    alphabet_size: usize,
) -> Result<Vec<S>, InvalidInput> {
    error::validate_symbols(bwt, alphabet_size)?;
    if bwt.is_empty() {
        return Ok(Vec::new());
    }
    if primary >= bwt.len() {
        return Err(InvalidInput::PrimaryOutOfRange {
            primary,
            len: bwt.len(),
        });
    }

    // Start of each symbol's block in the first column
    let mut starts = vec![0usize; symbol::bucket_count(bwt, alphabet_size)];
    for symbol in bwt {
        starts[symbol.index()] += 1;
    }
    let mut sum = 0;
    for x in starts.iter_mut() {
        let count = *x;
        *x = sum;
        sum += count;
    }

    // Last-to-first mapping: the row whose first symbol is the occurrence of `bwt[i]` in row `i`
    let mut last_to_first = vec![0u32; bwt.len()];
    for (i, symbol) in bwt.iter().enumerate() {
        let start = &mut starts[symbol.index()];
        last_to_first[i] = *start as u32;
        *start += 1;
    }

    let mut text = vec![bwt[0]; bwt.len()];
    let mut row = primary;
    for slot in text.iter_mut().rev() {
        *slot = bwt[row];
        row = last_to_first[row] as usize;
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suffix_array;

    #[test]
    fn banana() {
        let text = b"banana$";
        let sa = suffix_array(text, 256).unwrap();

        assert_eq!(bwt(text, &sa).unwrap(), b"annb$aa");
    }

    #[test]
    fn terminator_appears_once_at_primary() {
        let text = [3u16, 1, 2, 1, 2, 1, 0];
        let sa = suffix_array(&text, 4).unwrap();
        let (bwt, primary) = bwt_with_primary(&text, &sa).unwrap();

        assert_eq!(bwt.iter().filter(|&&s| s == 0).count(), 1);
        assert_eq!(bwt[primary], 0);
        assert_eq!(sa[primary], 0);
    }

    #[test]
    fn empty() {
        assert_eq!(bwt_with_primary::<u8>(&[], &[]).unwrap(), (Vec::new(), 0));
    }

    #[test]
    fn single_symbol() {
        assert_eq!(bwt(b"a", &[0]).unwrap(), b"a");
    }

    #[test]
    fn wraps_without_terminator() {
        let text = b"banana";
        let sa = suffix_array(text, 256).unwrap();

        // Suffixes a, ana, anana, banana, na, nana
        assert_eq!(bwt(text, &sa).unwrap(), b"nnbaaa");
    }

    #[test]
    fn invalid_suffix_array() {
        assert_eq!(
            bwt(b"ab", &[0, 2]),
            Err(InvalidInput::NotAPermutation { rank: 1, offset: 2 }),
        );
    }

    #[test]
    fn inverse_round_trip() {
        let text = b"mmiissiissiippii\0";
        let sa = suffix_array(text, 256).unwrap();
        let (bwt, primary) = bwt_with_primary(text, &sa).unwrap();

        assert_eq!(inverse_bwt(&bwt, primary, 256).unwrap(), text);
    }

    #[test]
    fn inverse_with_huge_alphabet_size() {
        let text = b"banana$";
        let sa = suffix_array(text, usize::MAX).unwrap();
        let (bwt, primary) = bwt_with_primary(text, &sa).unwrap();

        assert_eq!(inverse_bwt(&bwt, primary, usize::MAX).unwrap(), text);
    }

    #[test]
    fn inverse_of_empty() {
        assert!(inverse_bwt::<u8>(&[], 0, 256).unwrap().is_empty());
    }

    #[test]
    fn inverse_primary_out_of_range() {
        assert_eq!(
            inverse_bwt(b"a$", 2, 256),
            Err(InvalidInput::PrimaryOutOfRange { primary: 2, len: 2 }),
        );
    }
}
