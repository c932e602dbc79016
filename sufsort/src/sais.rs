// Copyright 2023-2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use alloc::{vec, vec::Vec};
use core::cmp::Ordering;

use tracing::{debug, trace};

use crate::{Symbol, symbol};

/// The representation of an empty slot in the suffix array workspace
///
/// Offsets never reach this value because inputs are at most `u32::MAX` symbols long.
const EMPTY: u32 = u32::MAX;

/// Computes the suffix array of `data` using the SA-IS algorithm.
///
/// The algorithm is implemented as described in the [article] Two Efficient Algorithms for Linear
/// Time Suffix Array Construction by Ge Nong, Sen Zhang and Wai Hong Chan. It runs in *O*(*n*)
/// time and space.
///
/// Unlike the presentation in the article, `data` does not need to end with a unique smallest
/// symbol. The algorithm instead acts as if a virtual sentinel smaller than every symbol followed
/// the last element, which gives proper prefixes their expected place before their extensions.
///
/// The caller must have checked that every symbol is less than `alphabet_size`.
///
/// # Panics
///
/// Panics if `data.len() > u32::MAX`.
///
/// [article]: https://doi.org/10.1109/TC.2010.188
pub(crate) fn sais<S: Symbol>(data: &[S], alphabet_size: usize) -> Vec<u32> {
    assert!(
        u32::try_from(data.len()).is_ok(),
        "input length {} exceeds u32::MAX",
        data.len(),
    );

    let mut suffix_array = vec![0; data.len()];

    if data.len() > 1 {
        let alphabet_size = symbol::bucket_count(data, alphabet_size);
        sais_level(data, alphabet_size, &mut suffix_array, 0);
    }

    suffix_array
}

fn sais_level<S: Symbol>(data: &[S], alphabet_size: usize, suffix_array: &mut [u32], depth: u32) {
    let types = classify(data);
    let counts = bucket_sizes(data, alphabet_size);
    let mut bucket = vec![0; alphabet_size];

    // Stage 1: Sort all the LMS-substrings
    put_substrings(suffix_array, data, &types, &counts, &mut bucket);
    induce_suffix_array_l(suffix_array, data, &types, &counts, &mut bucket);
    induce_suffix_array_s(suffix_array, data, &types, &counts, &mut bucket);

    // Compact the sorted LMS-substrings into the first n1 items of the suffix array space
    let mut n1 = 0;
    for i in 0..data.len() {
        let pos = suffix_array[i];
        if pos != EMPTY && is_lms(&types, pos as usize) {
            suffix_array[n1] = pos;
            n1 += 1;
        }
    }

    // With no LMS position other than the virtual sentinel, the sentinel alone seeded a complete
    // induced sort
    if n1 == 0 {
        trace!(depth, len = data.len(), "no LMS positions, suffix array complete");
        return;
    }

    let name_count = name_substrings(suffix_array, data, &types, n1);

    debug!(
        depth,
        len = data.len(),
        alphabet_size,
        lms = n1,
        names = name_count,
        "sorted LMS-substrings"
    );

    // Stage 2: Solve the reduced problem

    // Recurse if the names are not yet unique. Otherwise the LMS-substring order is already the
    // LMS-suffix order.
    if name_count < n1 {
        let reduced: Vec<u32> = suffix_array[n1..]
            .iter()
            .copied()
            .filter(|&name| name != EMPTY)
            .collect();
        let lms_positions: Vec<u32> = (1..data.len())
            .filter(|&i| is_lms(&types, i))
            .map(|i| i as u32)
            .collect();

        let mut reduced_suffix_array = vec![0; n1];
        sais_level(&reduced, name_count, &mut reduced_suffix_array, depth + 1);

        for (slot, &rank) in suffix_array.iter_mut().zip(&reduced_suffix_array) {
            *slot = lms_positions[rank as usize];
        }
    }

    // Stage 3: Induce SA(S) from the sorted LMS-suffixes
    put_suffixes(suffix_array, data, &counts, &mut bucket, n1);
    induce_suffix_array_l(suffix_array, data, &types, &counts, &mut bucket);
    induce_suffix_array_s(suffix_array, data, &types, &counts, &mut bucket);
}

/// Names the sorted LMS-substrings in `suffix_array[..n1]`.
///
/// Equal substrings share a name and names increase with the substring order. The name of the
/// substring starting at `pos` is stored at `suffix_array[n1 + pos / 2]`, which is collision-free
/// because LMS positions are at least two apart. All other slots past `n1` are left `EMPTY`.
///
/// Returns the number of distinct names.
fn name_substrings<S: Symbol>(
    suffix_array: &mut [u32],
    data: &[S],
    types: &[CharType],
    n1: usize,
) -> usize {
    let (sorted, names) = suffix_array.split_at_mut(n1);
    names.fill(EMPTY);

    let mut name_count = 0;
    let mut previous: Option<(usize, usize)> = None;
    for &pos in sorted.iter() {
        let pos = pos as usize;
        let end = lms_substring_end(types, pos);

        let same = previous.is_some_and(|(pre_pos, pre_end)| {
            lms_substrings_equal(data, pre_pos, pre_end, pos, end)
        });
        if !same {
            name_count += 1;
        }

        names[pos / 2] = (name_count - 1) as u32;
        previous = Some((pos, end));
    }

    name_count
}

/// Returns the position of the LMS position following `pos`, or the length of the data if the
/// substring runs into the virtual sentinel.
fn lms_substring_end(types: &[CharType], pos: usize) -> usize {
    (pos + 1..types.len())
        .find(|&i| is_lms(types, i))
        .unwrap_or(types.len())
}

fn lms_substrings_equal<S: Symbol>(
    data: &[S],
    a: usize,
    a_end: usize,
    b: usize,
    b_end: usize,
) -> bool {
    // The substring ending in the virtual sentinel is unique
    if a_end == data.len() || b_end == data.len() {
        return false;
    }

    a_end - a == b_end - b && data[a..=a_end] == data[b..=b_end]
}

/// Places the sorted LMS-suffixes in `suffix_array[..n1]` at the ends of their buckets.
fn put_suffixes<S: Symbol>(
    suffix_array: &mut [u32],
    data: &[S],
    counts: &[u32],
    bucket: &mut [u32],
    n1: usize,
) {
    // Find the end of each bucket
    get_buckets(counts, bucket, true);

    suffix_array[n1..].fill(EMPTY);

    // Put the suffixes into their buckets from largest to smallest. The i-th smallest suffix lands
    // at or after slot i, so no unread suffix is overwritten.
    for i in (0..n1).rev() {
        let pos = suffix_array[i];
        suffix_array[i] = EMPTY;

        let c = data[pos as usize].index();
        bucket[c] -= 1;
        suffix_array[bucket[c] as usize] = pos;
    }
}

/// Places every LMS position at the end of its bucket, scanning right to left.
fn put_substrings<S: Symbol>(
    suffix_array: &mut [u32],
    data: &[S],
    types: &[CharType],
    counts: &[u32],
    bucket: &mut [u32],
) {
    get_buckets(counts, bucket, true);

    suffix_array.fill(EMPTY);

    for i in (1..data.len()).rev() {
        if is_lms(types, i) {
            let c = data[i].index();
            bucket[c] -= 1;
            suffix_array[bucket[c] as usize] = i as u32;
        }
    }
}

fn induce_suffix_array_l<S: Symbol>(
    suffix_array: &mut [u32],
    data: &[S],
    types: &[CharType],
    counts: &[u32],
    bucket: &mut [u32],
) {
    get_buckets(counts, bucket, false);

    // The virtual sentinel is the smallest suffix, so the suffix it induces comes first
    let last = data.len() - 1;
    let c = data[last].index();
    suffix_array[bucket[c] as usize] = last as u32;
    bucket[c] += 1;

    for i in 0..data.len() {
        let j = suffix_array[i];
        if j == EMPTY || j == 0 {
            continue;
        }

        let pred = j as usize - 1;
        if types[pred] == CharType::L {
            let c = data[pred].index();
            suffix_array[bucket[c] as usize] = pred as u32;
            bucket[c] += 1;
        }
    }
}

fn induce_suffix_array_s<S: Symbol>(
    suffix_array: &mut [u32],
    data: &[S],
    types: &[CharType],
    counts: &[u32],
    bucket: &mut [u32],
) {
    get_buckets(counts, bucket, true);

    for i in (0..data.len()).rev() {
        let j = suffix_array[i];
        if j == EMPTY || j == 0 {
            continue;
        }

        let pred = j as usize - 1;
        if types[pred] == CharType::S {
            let c = data[pred].index();
            bucket[c] -= 1;
            suffix_array[bucket[c] as usize] = pred as u32;
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CharType {
    L,
    S,
}

/// Classifies every position of `data` as L-type or S-type.
///
/// The virtual sentinel past the end is S-type and smaller than everything, so the last position
/// is always L-type.
fn classify<S: Symbol>(data: &[S]) -> Vec<CharType> {
    let mut types = vec![CharType::L; data.len()];

    for i in (0..data.len().saturating_sub(1)).rev() {
        types[i] = match data[i].cmp(&data[i + 1]) {
            Ordering::Less => CharType::S,
            Ordering::Greater => CharType::L,
            Ordering::Equal => types[i + 1],
        };
    }

    types
}

#[inline]
fn is_lms(types: &[CharType], i: usize) -> bool {
    i > 0 && i < types.len() && types[i] == CharType::S && types[i - 1] == CharType::L
}

fn bucket_sizes<S: Symbol>(data: &[S], alphabet_size: usize) -> Vec<u32> {
    let mut counts = vec![0; alphabet_size];
    for x in data {
        counts[x.index()] += 1;
    }

    counts
}

/// Calculates bucket ends (exclusive) or bucket starts into `bucket` if `end` is true or false
/// respectively
fn get_buckets(counts: &[u32], bucket: &mut [u32], end: bool) {
    let mut sum: u32 = 0;
    for (x, &count) in bucket.iter_mut().zip(counts) {
        sum += count;
        *x = if end { sum } else { sum - count };
    }
}
