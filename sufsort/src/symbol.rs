// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

// Symbols are converted to usizes for the purpose of indexing buckets. Any target where a usize is
// narrower than a u32 would silently truncate them, so refuse to build on such targets.
#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("Target pointer width must be at least 32 bits");

mod private {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// An unsigned integer type usable as a symbol of an input sequence.
///
/// The ordering of symbols is the ordering of their integer values. This trait is sealed and
/// implemented for [`u8`], [`u16`] and [`u32`].
pub trait Symbol: Copy + Ord + private::Sealed {
    /// Returns the value of this symbol as a bucket index.
    fn index(self) -> usize;
}

impl Symbol for u8 {
    #[inline]
    fn index(self) -> usize {
        self.into()
    }
}

impl Symbol for u16 {
    #[inline]
    fn index(self) -> usize {
        self.into()
    }
}

impl Symbol for u32 {
    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Returns the number of buckets needed for `symbols`, which is at most `alphabet_size`.
///
/// Bucket arrays only need to reach the largest symbol present, so oversized alphabets do not
/// cost memory.
pub(crate) fn bucket_count<S: Symbol>(symbols: &[S], alphabet_size: usize) -> usize {
    symbols
        .iter()
        .map(|symbol| symbol.index() + 1)
        .max()
        .map_or(0, |count| count.min(alphabet_size))
}
