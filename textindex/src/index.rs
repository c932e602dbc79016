// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use tracing::{debug, trace};

use crate::{Alphabet, IndexConfig, IndexError, SymbolText};

/// A suffix array index over a text.
///
/// The index owns the text it was built for. Offsets reported by the index are in the unit the
/// text was split into: bytes for [`Encoding::Bytes`](crate::Encoding::Bytes) and characters for
/// [`Encoding::Utf8`](crate::Encoding::Utf8). Use [`byte_offset()`](Self::byte_offset) to map them
/// back into the text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextIndex {
    text: Vec<u8>,
    config: IndexConfig,
    symbols: SymbolText,
    suffix_array: Vec<u32>,
}

impl TextIndex {
    /// Builds an index over `text`.
    ///
    /// This operation is *O*(*n*) for byte texts and *O*(*n* \* log(*n*)) for character texts,
    /// which need to sort their alphabet first.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid UTF-8 and `config` splits it into characters.
    ///
    /// # Panics
    ///
    /// Panics if the text has more than `u32::MAX` units, including the terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use textindex::{IndexConfig, TextIndex};
    ///
    /// let index = TextIndex::build("banana", &IndexConfig::new())?;
    ///
    /// assert_eq!(index.suffix_array(), [6, 5, 3, 1, 0, 4, 2]);
    /// # Ok::<(), textindex::IndexError>(())
    /// ```
    pub fn build(text: impl Into<Vec<u8>>, config: &IndexConfig) -> Result<Self, IndexError> {
        let text = text.into();
        let symbols = SymbolText::map(&text, config)?;
        let alphabet_size = symbols.alphabet().size();

        debug!(
            len = symbols.symbols().len(),
            alphabet_size,
            encoding = ?config.encoding,
            "building suffix array"
        );
        let suffix_array = sufsort::suffix_array(symbols.symbols(), alphabet_size)?;

        Ok(Self {
            text,
            config: *config,
            symbols,
            suffix_array,
        })
    }

    /// Reassembles an index from a text and a stored suffix array, checking that they agree.
    pub(crate) fn from_parts(
        text: Vec<u8>,
        config: &IndexConfig,
        suffix_array: Vec<u32>,
    ) -> Result<Self, IndexError> {
        let symbols = SymbolText::map(&text, config)?;
        sufsort::verify_suffix_array(symbols.symbols(), &suffix_array)?;

        Ok(Self {
            text,
            config: *config,
            symbols,
            suffix_array,
        })
    }

    /// Returns the indexed text.
    #[must_use]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Returns the configuration the index was built with.
    #[must_use]
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Returns the alphabet the text was mapped with.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        self.symbols.alphabet()
    }

    /// Returns the symbols the text was mapped to, ending with the terminator if one was appended.
    #[must_use]
    pub fn symbols(&self) -> &[u32] {
        self.symbols.symbols()
    }

    /// Returns the suffix array.
    #[must_use]
    pub fn suffix_array(&self) -> &[u32] {
        &self.suffix_array
    }

    /// Returns the number of suffixes, which counts the terminator if one was appended.
    #[must_use]
    pub fn len(&self) -> usize {
        self.suffix_array.len()
    }

    /// Returns `true` if and only if the index holds no suffixes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suffix_array.is_empty()
    }

    /// Computes the longest common prefix array.
    ///
    /// See [`sufsort::lcp_array()`] for details.
    ///
    /// # Errors
    ///
    /// Returns an error if the suffix array is not a permutation of the symbol offsets. Building
    /// and reading an index both check this, so the error is not expected in practice.
    pub fn lcp(&self) -> Result<Vec<i64>, IndexError> {
        Ok(sufsort::lcp_array(self.symbols(), &self.suffix_array)?)
    }

    /// Computes the Burrows-Wheeler transform together with its primary index.
    ///
    /// Use [`Alphabet::decode()`] to turn the symbols of the transform back into text. See
    /// [`sufsort::bwt_with_primary()`] for details.
    ///
    /// # Errors
    ///
    /// Returns an error if the suffix array is not a permutation of the symbol offsets. Building
    /// and reading an index both check this, so the error is not expected in practice.
    pub fn bwt(&self) -> Result<(Vec<u32>, usize), IndexError> {
        Ok(sufsort::bwt_with_primary(self.symbols(), &self.suffix_array)?)
    }

    /// Returns `true` if and only if `pattern` occurs in the text.
    ///
    /// This agrees with [`find_all()`](Self::find_all) returning a non-empty result.
    #[must_use]
    pub fn contains(&self, pattern: impl AsRef<[u8]>) -> bool {
        let Some(pattern) = self.alphabet().encode_pattern(pattern.as_ref()) else {
            return false;
        };

        let units = self.symbols.units();
        self.suffix_array[self.matching_ranks(&pattern)]
            .iter()
            .any(|&offset| (offset as usize) < units)
    }

    /// Returns the offset of every occurrence of `pattern` in ascending order.
    ///
    /// The pattern is interpreted the same way as the text. An empty pattern occurs at every
    /// offset of the text. This operation is *O*(*m* \* log(*n*) + *k* \* log(*k*)), where `m` is
    /// the length of the pattern and `k` is the number of occurrences.
    ///
    /// # Examples
    ///
    /// ```
    /// use textindex::{Encoding, IndexConfig, TextIndex};
    ///
    /// let text = "此数据结构被运用于全文索引、数据压缩算法、以及生物信息学。";
    /// let index = TextIndex::build(text, IndexConfig::new().encoding(Encoding::Utf8))?;
    ///
    /// assert_eq!(index.find_all("数"), [1, 14]);
    /// assert_eq!(index.byte_offset(14), Some(42));
    /// # Ok::<(), textindex::IndexError>(())
    /// ```
    #[must_use]
    pub fn find_all(&self, pattern: impl AsRef<[u8]>) -> Vec<usize> {
        let Some(pattern) = self.alphabet().encode_pattern(pattern.as_ref()) else {
            return Vec::new();
        };

        let units = self.symbols.units();
        let mut offsets: Vec<usize> = self.suffix_array[self.matching_ranks(&pattern)]
            .iter()
            .map(|&offset| offset as usize)
            // The terminator suffix only matches the empty pattern
            .filter(|&offset| offset < units)
            .collect();
        offsets.sort_unstable();

        trace!(pattern_len = pattern.len(), matches = offsets.len(), "searched index");

        offsets
    }

    /// Maps an offset reported by this index to a byte offset into the text.
    ///
    /// The offset one past the last unit maps to the length of the text. Returns `None` for
    /// offsets past that.
    #[must_use]
    pub fn byte_offset(&self, offset: usize) -> Option<usize> {
        self.symbols.byte_offset(offset)
    }

    fn matching_ranks(&self, pattern: &[u32]) -> std::ops::Range<usize> {
        sufsort::suffix_range(self.symbols(), &self.suffix_array, pattern)
    }
}
