// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Linear-time construction of suffix arrays, LCP arrays and Burrows-Wheeler transforms.
//!
//! Inputs are sequences of integer symbols over a known alphabet size. Every builder validates its
//! input up front and returns [`InvalidInput`] instead of producing a wrong answer.
//!
//! # Examples
//!
//! ```
//! // "banana$" with `$` as the smallest symbol
//! let text = [2u8, 1, 3, 1, 3, 1, 0];
//!
//! let sa = sufsort::suffix_array(&text, 4)?;
//! assert_eq!(sa, [6, 5, 3, 1, 0, 4, 2]);
//!
//! let lcp = sufsort::lcp_array(&text, &sa)?;
//! assert_eq!(lcp, [-1, 0, 1, 3, 0, 0, 2]);
//!
//! let bwt = sufsort::bwt(&text, &sa)?;
//! assert_eq!(bwt, [1, 3, 3, 2, 0, 1, 1]);
//! # Ok::<(), sufsort::InvalidInput>(())
//! ```

#![no_std]

extern crate alloc;

mod bwt;
mod error;
mod lcp;
mod sais;
mod search;
mod suffix_array;
mod symbol;

use alloc::vec::Vec;

pub use bwt::{bwt, bwt_with_primary, inverse_bwt};
pub use error::{InvalidInput, validate_suffix_array, verify_suffix_array};
pub use lcp::lcp_array;
pub use search::suffix_range;
pub use suffix_array::SuffixArray;
pub use symbol::Symbol;

/// Computes the suffix array of `symbols` over an alphabet of `alphabet_size` symbols.
///
/// Entry `i` of the result is the starting offset of the `i`-th smallest suffix of `symbols`. A
/// suffix that is a proper prefix of another suffix sorts before it, so no terminator is required.
///
/// This operation is *O*(*n* + *k*) in time and space, where `k` is `alphabet_size`.
///
/// # Errors
///
/// Returns an error if `alphabet_size` is 0 while `symbols` is non-empty or if any symbol is not
/// less than `alphabet_size`.
///
/// # Panics
///
/// Panics if `symbols.len() > u32::MAX`.
///
/// # Examples
///
/// ```
/// let sa = sufsort::suffix_array(b"abracadabra", 256)?;
/// assert_eq!(sa, [10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
/// # Ok::<(), sufsort::InvalidInput>(())
/// ```
pub fn suffix_array<S: Symbol>(
    symbols: &[S],
    alphabet_size: usize,
) -> Result<Vec<u32>, InvalidInput> {
    error::validate_symbols(symbols, alphabet_size)?;

    Ok(sais::sais(symbols, alphabet_size))
}
