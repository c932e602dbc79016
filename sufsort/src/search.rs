// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use core::{cmp::Ordering, ops::Range};

use crate::Symbol;

/// Returns the range of ranks whose suffixes start with `pattern`.
///
/// `suffix_array` must be the suffix array of `symbols`; the range is located with two binary
/// searches and is empty if `pattern` does not occur. An empty pattern matches every suffix. This
/// operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
///
/// # Panics
///
/// May panic if `suffix_array` contains offsets past the end of `symbols`.
///
/// # Examples
///
/// ```
/// let text = b"banana$";
/// let sa = sufsort::suffix_array(text, 256)?;
/// let range = sufsort::suffix_range(text, &sa, b"an");
///
/// assert_eq!(&sa[range], [3, 1]);
/// # Ok::<(), sufsort::InvalidInput>(())
/// ```
#[must_use]
pub fn suffix_range<S: Symbol>(symbols: &[S], suffix_array: &[u32], pattern: &[S]) -> Range<usize> {
    let start = suffix_array
        .partition_point(|&suffix| compare_prefix(symbols, suffix, pattern) == Ordering::Less);
    let len = suffix_array[start..]
        .partition_point(|&suffix| compare_prefix(symbols, suffix, pattern) == Ordering::Equal);

    start..start + len
}

/// Compares the first `pattern.len()` symbols of the suffix at `suffix` with `pattern`.
pub(crate) fn compare_prefix<S: Symbol>(symbols: &[S], suffix: u32, pattern: &[S]) -> Ordering {
    symbols[suffix as usize..]
        .iter()
        .take(pattern.len())
        .cmp(pattern.iter())
}
