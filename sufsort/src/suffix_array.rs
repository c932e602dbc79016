// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use alloc::vec::Vec;
use core::ops::Deref;

use crate::{InvalidInput, Symbol, error, lcp, sais, search};

/// A suffix array for a sequence of symbols.
///
/// The suffix array borrows the sequence it was built for, which lets it answer substring queries
/// and derive the LCP array and Burrows-Wheeler transform without being handed the data again.
#[derive(Clone, Debug)]
pub struct SuffixArray<'a, S: Symbol> {
    data: &'a [S],
    inner: Vec<u32>,
}

impl<'a, S: Symbol> SuffixArray<'a, S> {
    /// Creates a new `SuffixArray` for `data` over an alphabet of `alphabet_size` symbols.
    ///
    /// `data` does not need to end with a terminator.
    ///
    /// This operation is *O*(*n* + *k*), where `k` is `alphabet_size`.
    ///
    /// # Errors
    ///
    /// Returns an error if any symbol in `data` is not less than `alphabet_size`.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() > u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// let data = b"Hello, world!";
    /// let sa = SuffixArray::new(data, 256)?;
    /// # Ok::<(), sufsort::InvalidInput>(())
    /// ```
    pub fn new(data: &'a [S], alphabet_size: usize) -> Result<Self, InvalidInput> {
        error::validate_symbols(data, alphabet_size)?;

        let inner = sais::sais(data, alphabet_size);

        Ok(Self { data, inner })
    }

    /// Returns the data this suffix array was built for.
    #[must_use]
    pub fn data(&self) -> &'a [S] {
        self.data
    }

    /// Returns the suffix offsets in ascending suffix order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.inner
    }

    /// Consumes the suffix array, returning the suffix offsets.
    #[must_use]
    pub fn into_inner(self) -> Vec<u32> {
        self.inner
    }

    /// Returns `true` if and only if `pattern` is contained in the associated data.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// let data = b"Hello, world!";
    /// let sa = SuffixArray::new(data, 256)?;
    /// assert!(sa.contains(b"world"));
    /// # Ok::<(), sufsort::InvalidInput>(())
    /// ```
    #[must_use]
    pub fn contains(&self, pattern: &[S]) -> bool {
        self.inner
            .binary_search_by(|&suffix| search::compare_prefix(self.data, suffix, pattern))
            .is_ok()
    }

    /// Returns the offsets of every occurrence of `pattern`, in suffix order.
    ///
    /// The occurrences form a contiguous range of the suffix array, which is located with
    /// [`suffix_range()`](crate::suffix_range). An empty pattern occurs at every offset. This
    /// operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// let data = b"banana$";
    /// let sa = SuffixArray::new(data, 256)?;
    /// let mut matches = sa.find_all(b"na").to_vec();
    /// matches.sort();
    ///
    /// assert_eq!(matches, [2, 4]);
    /// # Ok::<(), sufsort::InvalidInput>(())
    /// ```
    #[must_use]
    pub fn find_all(&self, pattern: &[S]) -> &[u32] {
        &self.inner[search::suffix_range(self.data, &self.inner, pattern)]
    }

    /// Computes the longest common prefix array of the associated data.
    ///
    /// See [`lcp_array()`](crate::lcp_array) for details.
    #[must_use]
    pub fn lcp(&self) -> Vec<i64> {
        lcp::kasai_unchecked(self.data, &self.inner)
    }

    /// Computes the Burrows-Wheeler transform of the associated data.
    ///
    /// See [`bwt()`](crate::bwt) for details.
    #[must_use]
    pub fn bwt(&self) -> Vec<S> {
        self.inner
            .iter()
            .map(|&offset| match offset {
                0 => self.data[self.data.len() - 1],
                _ => self.data[offset as usize - 1],
            })
            .collect()
    }

    /// Computes the inverse suffix array, i.e., the rank of the suffix at each offset.
    #[must_use]
    pub fn inverse(&self) -> Vec<u32> {
        error::inverse(&self.inner)
    }
}

impl<S: Symbol> Deref for SuffixArray<'_, S> {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<S: Symbol> AsRef<[u32]> for SuffixArray<'_, S> {
    fn as_ref(&self) -> &[u32] {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::{bwt, lcp_array};

    #[test]
    fn contains_one_match() {
        let data = b"Hello, world!";
        let sa = SuffixArray::new(data, 256).unwrap();

        assert!(sa.contains(b"world"));
    }

    #[test]
    fn contains_two_matches() {
        let data = b"The quick brown fox jumped over the lazy dog because the fox was quick";
        let sa = SuffixArray::new(data, 256).unwrap();

        assert!(sa.contains(b"fox"));
        assert!(sa.contains(b"quick"));
    }

    #[test]
    fn contains_no_matches() {
        let data = b"Now is the time for all good men to come to the aid of the party";
        let sa = SuffixArray::new(data, 256).unwrap();

        assert!(!sa.contains(b"times"));
    }

    #[test]
    fn pattern_longer_than_suffix() {
        let data = b"abc";
        let sa = SuffixArray::new(data, 256).unwrap();

        assert!(!sa.contains(b"bcd"));
        assert!(sa.find_all(b"bcd").is_empty());
    }

    #[test]
    fn find_all_na_in_banana() {
        let data = b"banana$";
        let sa = SuffixArray::new(data, 256).unwrap();

        // "na$" sorts before "nana$"
        assert_eq!(sa.find_all(b"na"), [4, 2]);
    }

    #[test]
    fn find_all_empty_pattern() {
        let data = b"abc";
        let sa = SuffixArray::new(data, 256).unwrap();

        assert_eq!(sa.find_all(b""), [0, 1, 2]);
    }

    #[test]
    fn find_all_in_empty_data() {
        let sa = SuffixArray::<u8>::new(&[], 256).unwrap();

        assert!(sa.is_empty());
        assert!(sa.find_all(b"a").is_empty());
    }

    #[test]
    fn out_of_range_symbol() {
        let data = [0u16, 1, 2];
        let err = SuffixArray::new(&data, 2).unwrap_err();

        assert_eq!(
            err,
            InvalidInput::SymbolOutOfRange {
                position: 2,
                symbol: 2,
                alphabet_size: 2,
            },
        );
    }

    #[test]
    fn derived_arrays_match_free_functions() {
        let data = b"mississippi$";
        let sa = SuffixArray::new(data, 256).unwrap();

        assert_eq!(sa.lcp(), lcp_array(data, &sa).unwrap());
        assert_eq!(sa.bwt(), bwt::bwt(data, &sa).unwrap());
    }

    #[test]
    fn inverse_is_inverse_permutation() {
        let data = b"abracadabra";
        let sa = SuffixArray::new(data, 256).unwrap();
        let rank = sa.inverse();

        let mut seen = vec![false; data.len()];
        for (i, &offset) in sa.iter().enumerate() {
            assert_eq!(rank[offset as usize] as usize, i, "rank of offset {offset}");
            seen[offset as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every offset appears in the suffix array");
    }
}
