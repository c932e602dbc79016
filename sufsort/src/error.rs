// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use alloc::{vec, vec::Vec};
use core::{
    cmp::Ordering,
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::Symbol;

/// An error indicating that the arguments to a builder violate its preconditions.
///
/// Builders check their preconditions before producing any output, so an error never comes with a
/// partial result. Malformed input is never repaired, e.g., out-of-range symbols are not clamped.
///
/// # Examples
///
/// ```
/// use sufsort::InvalidInput;
///
/// let err = sufsort::suffix_array(&[0u8, 7, 1], 4).unwrap_err();
///
/// assert_eq!(
///     err,
///     InvalidInput::SymbolOutOfRange { position: 1, symbol: 7, alphabet_size: 4 },
/// );
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum InvalidInput {
    /// The alphabet is empty but the input is not
    EmptyAlphabet {
        /// The length of the input
        len: usize,
    },
    /// A symbol is not less than the alphabet size
    SymbolOutOfRange {
        /// The offset of the offending symbol
        position: usize,
        /// The offending symbol
        symbol: usize,
        /// The alphabet size the symbol was checked against
        alphabet_size: usize,
    },
    /// The suffix array and the input have different lengths
    LengthMismatch {
        /// The length of the input
        expected: usize,
        /// The length of the suffix array
        found: usize,
    },
    /// The suffix array is not a permutation of the offsets of the input
    NotAPermutation {
        /// The rank at which an out-of-range or repeated offset was found
        rank: usize,
        /// The offending offset
        offset: u32,
    },
    /// Two adjacent suffixes of the suffix array are out of order
    NotSorted {
        /// The rank of the second suffix of the offending pair
        rank: usize,
    },
    /// The primary index of a Burrows-Wheeler transform does not name one of its rows
    PrimaryOutOfRange {
        /// The offending primary index
        primary: usize,
        /// The length of the transform
        len: usize,
    },
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            InvalidInput::EmptyAlphabet { len } => {
                write!(f, "alphabet is empty but input has {len} symbols")
            }
            InvalidInput::SymbolOutOfRange {
                position,
                symbol,
                alphabet_size,
            } => write!(
                f,
                "symbol {symbol} at position {position} is outside of alphabet of size \
                 {alphabet_size}",
            ),
            InvalidInput::LengthMismatch { expected, found } => write!(
                f,
                "suffix array has length {found} but input has length {expected}",
            ),
            InvalidInput::NotAPermutation { rank, offset } => write!(
                f,
                "suffix array is not a permutation: offset {offset} at rank {rank} is out of \
                 range or repeated",
            ),
            InvalidInput::NotSorted { rank } => {
                write!(f, "suffixes at ranks {} and {rank} are out of order", rank - 1)
            }
            InvalidInput::PrimaryOutOfRange { primary, len } => write!(
                f,
                "primary index {primary} is out of range for a transform of length {len}",
            ),
        }
    }
}

impl Error for InvalidInput {}

/// Checks that every symbol is less than `alphabet_size`.
pub(crate) fn validate_symbols<S: Symbol>(
    symbols: &[S],
    alphabet_size: usize,
) -> Result<(), InvalidInput> {
    if alphabet_size == 0 && !symbols.is_empty() {
        return Err(InvalidInput::EmptyAlphabet { len: symbols.len() });
    }

    match symbols
        .iter()
        .position(|symbol| symbol.index() >= alphabet_size)
    {
        Some(position) => Err(InvalidInput::SymbolOutOfRange {
            position,
            symbol: symbols[position].index(),
            alphabet_size,
        }),
        None => Ok(()),
    }
}

/// Checks that `suffix_array` is a permutation of `0..len`.
///
/// This only checks the shape of the array, not that it actually sorts the suffixes of any
/// particular input. It runs in *O*(*n*) time.
///
/// # Errors
///
/// Returns an error if the lengths differ or if an entry is out of range or repeated.
///
/// # Examples
///
/// ```
/// use sufsort::InvalidInput;
///
/// assert!(sufsort::validate_suffix_array(3, &[2, 0, 1]).is_ok());
/// assert_eq!(
///     sufsort::validate_suffix_array(3, &[2, 0, 2]),
///     Err(InvalidInput::NotAPermutation { rank: 2, offset: 2 }),
/// );
/// ```
pub fn validate_suffix_array(len: usize, suffix_array: &[u32]) -> Result<(), InvalidInput> {
    if suffix_array.len() != len {
        return Err(InvalidInput::LengthMismatch {
            expected: len,
            found: suffix_array.len(),
        });
    }

    let mut seen = vec![false; len];
    for (rank, &offset) in suffix_array.iter().enumerate() {
        match seen.get_mut(offset as usize) {
            Some(seen) if !*seen => *seen = true,
            _ => return Err(InvalidInput::NotAPermutation { rank, offset }),
        }
    }

    Ok(())
}

/// Checks that `suffix_array` is the suffix array of `symbols`.
///
/// Beyond [`validate_suffix_array()`], this checks that every pair of adjacent suffixes is in
/// order. The pair at ranks `i - 1` and `i` is in order if its first symbols are ordered, or if
/// they are equal and the suffixes following them are ranked in the same order. This operation is
/// *O*(*n*).
///
/// # Errors
///
/// Returns an error if `suffix_array` is not a permutation of the offsets of `symbols` or if it
/// does not sort them.
///
/// # Examples
///
/// ```
/// use sufsort::InvalidInput;
///
/// let text = b"banana";
///
/// assert!(sufsort::verify_suffix_array(text, &[5, 3, 1, 0, 4, 2]).is_ok());
/// assert_eq!(
///     sufsort::verify_suffix_array(text, &[5, 1, 3, 0, 4, 2]),
///     Err(InvalidInput::NotSorted { rank: 2 }),
/// );
/// ```
pub fn verify_suffix_array<S: Symbol>(
    symbols: &[S],
    suffix_array: &[u32],
) -> Result<(), InvalidInput> {
    validate_suffix_array(symbols.len(), suffix_array)?;

    let n = symbols.len();
    let rank = inverse(suffix_array);
    for (i, pair) in suffix_array.windows(2).enumerate() {
        let (a, b) = (pair[0] as usize, pair[1] as usize);
        let in_order = match symbols[a].cmp(&symbols[b]) {
            Ordering::Less => true,
            Ordering::Greater => false,
            // The empty suffix sorts first
            Ordering::Equal if a + 1 == n => true,
            Ordering::Equal if b + 1 == n => false,
            Ordering::Equal => rank[a + 1] < rank[b + 1],
        };
        if !in_order {
            return Err(InvalidInput::NotSorted { rank: i + 1 });
        }
    }

    Ok(())
}

/// Builds the inverse of a suffix array that has already been validated.
pub(crate) fn inverse(suffix_array: &[u32]) -> Vec<u32> {
    let mut rank = vec![0; suffix_array.len()];
    for (i, &offset) in suffix_array.iter().enumerate() {
        rank[offset as usize] = i as u32;
    }

    rank
}
