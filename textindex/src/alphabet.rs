// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    ascii,
    fmt::{self, Display, Formatter},
    str,
};

use crate::{Encoding, IndexConfig, IndexError};

/// A symbol of an indexed text, decoded back to the unit it stands for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Unit {
    /// A byte of a text indexed with [`Encoding::Bytes`]
    Byte(u8),
    /// A character of a text indexed with [`Encoding::Utf8`]
    Char(char),
}

impl Display for Unit {
    /// Formats the unit as text, escaping bytes that are not printable ASCII.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Unit::Byte(byte) => write!(f, "{}", ascii::escape_default(*byte)),
            Unit::Char(c) => write!(f, "{c}"),
        }
    }
}

/// The mapping between the units of a text and the integer symbols it is indexed as.
///
/// Symbols preserve the order of the units they stand for, so suffixes of the symbols sort the
/// same way as suffixes of the text. If a terminator is appended, it is symbol 0 and every unit is
/// shifted up by one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet {
    encoding: Encoding,
    terminator: bool,
    /// The distinct characters of the text in ascending order. Empty for [`Encoding::Bytes`].
    chars: Vec<char>,
}

impl Alphabet {
    /// Returns the unit the text is split into.
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Returns `true` if and only if the indexed symbols end with a terminator.
    #[must_use]
    pub fn has_terminator(&self) -> bool {
        self.terminator
    }

    /// Returns the number of symbols, including the terminator.
    ///
    /// Byte alphabets always hold all 256 bytes. Character alphabets hold only the characters that
    /// occur in the text.
    #[must_use]
    pub fn size(&self) -> usize {
        let units = match self.encoding {
            Encoding::Bytes => 256,
            Encoding::Utf8 => self.chars.len(),
        };

        units + self.shift() as usize
    }

    /// Maps a query through this alphabet.
    ///
    /// Returns `None` if the pattern cannot occur in the text, i.e., it contains a character that
    /// is not in the alphabet, or it is not valid UTF-8 and the alphabet holds characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use textindex::{Encoding, IndexConfig, TextIndex};
    ///
    /// let index = TextIndex::build("banana", IndexConfig::new().encoding(Encoding::Utf8))?;
    /// let alphabet = index.alphabet();
    ///
    /// // The terminator is 0, then a, b and n in order
    /// assert_eq!(alphabet.encode_pattern(b"nab"), Some(vec![3, 1, 2]));
    /// assert_eq!(alphabet.encode_pattern(b"bandana"), None);
    /// # Ok::<(), textindex::IndexError>(())
    /// ```
    #[must_use]
    pub fn encode_pattern(&self, pattern: &[u8]) -> Option<Vec<u32>> {
        let shift = self.shift();

        match self.encoding {
            Encoding::Bytes => Some(pattern.iter().map(|&b| u32::from(b) + shift).collect()),
            Encoding::Utf8 => str::from_utf8(pattern)
                .ok()?
                .chars()
                .map(|c| self.rank(c).map(|rank| rank + shift))
                .collect(),
        }
    }

    /// Decodes a symbol back to the unit it stands for.
    ///
    /// Returns `None` for the terminator and for symbols outside of the alphabet.
    #[must_use]
    pub fn decode(&self, symbol: u32) -> Option<Unit> {
        let unit = symbol.checked_sub(self.shift())? as usize;

        match self.encoding {
            Encoding::Bytes => u8::try_from(unit).ok().map(Unit::Byte),
            Encoding::Utf8 => self.chars.get(unit).copied().map(Unit::Char),
        }
    }

    fn shift(&self) -> u32 {
        u32::from(self.terminator)
    }

    fn rank(&self, c: char) -> Option<u32> {
        self.chars.binary_search(&c).ok().map(|rank| rank as u32)
    }
}

/// A text mapped to integer symbols, ready to be indexed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SymbolText {
    alphabet: Alphabet,
    symbols: Vec<u32>,
    /// The byte offset of every character. Empty for [`Encoding::Bytes`].
    char_offsets: Vec<usize>,
    byte_len: usize,
}

impl SymbolText {
    /// Maps `text` to symbols according to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid UTF-8 and `config` splits it into characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use textindex::{IndexConfig, SymbolText};
    ///
    /// let text = SymbolText::map(b"ab", &IndexConfig::new())?;
    ///
    /// assert_eq!(text.symbols(), [98, 99, 0]);
    /// assert_eq!(text.alphabet().size(), 257);
    /// # Ok::<(), textindex::IndexError>(())
    /// ```
    pub fn map(text: &[u8], config: &IndexConfig) -> Result<Self, IndexError> {
        let shift = u32::from(config.append_terminator);

        let (chars, mut symbols, char_offsets) = match config.encoding {
            Encoding::Bytes => {
                let symbols: Vec<u32> = text.iter().map(|&b| u32::from(b) + shift).collect();
                (Vec::new(), symbols, Vec::new())
            }
            Encoding::Utf8 => {
                let text = str::from_utf8(text)?;

                let mut chars: Vec<char> = text.chars().collect();
                chars.sort_unstable();
                chars.dedup();

                let symbols = text
                    .chars()
                    .map(|c| match chars.binary_search(&c) {
                        Ok(rank) | Err(rank) => rank as u32 + shift,
                    })
                    .collect();
                let char_offsets = text.char_indices().map(|(offset, _)| offset).collect();

                (chars, symbols, char_offsets)
            }
        };
        if config.append_terminator {
            symbols.push(0);
        }

        Ok(Self {
            alphabet: Alphabet {
                encoding: config.encoding,
                terminator: config.append_terminator,
                chars,
            },
            symbols,
            char_offsets,
            byte_len: text.len(),
        })
    }

    /// Returns the alphabet the text was mapped with.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the symbols, ending with the terminator if one was appended.
    #[must_use]
    pub fn symbols(&self) -> &[u32] {
        &self.symbols
    }

    /// Returns the number of units of the text, not counting the terminator.
    #[must_use]
    pub fn units(&self) -> usize {
        self.symbols.len() - self.alphabet.shift() as usize
    }

    /// Maps an offset in units to a byte offset into the text.
    ///
    /// The offset one past the last unit maps to the length of the text. Returns `None` for
    /// offsets past that.
    #[must_use]
    pub fn byte_offset(&self, offset: usize) -> Option<usize> {
        match self.alphabet.encoding {
            Encoding::Bytes => (offset <= self.byte_len).then_some(offset),
            Encoding::Utf8 if offset == self.char_offsets.len() => Some(self.byte_len),
            Encoding::Utf8 => self.char_offsets.get(offset).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8() -> IndexConfig {
        *IndexConfig::new().encoding(Encoding::Utf8)
    }

    #[test]
    fn bytes_without_terminator() {
        let text = SymbolText::map(b"\0az", IndexConfig::new().append_terminator(false)).unwrap();

        assert_eq!(text.symbols(), [0, 97, 122]);
        assert_eq!(text.alphabet().size(), 256);
        assert_eq!(text.units(), 3);
    }

    #[test]
    fn bytes_with_terminator() {
        let text = SymbolText::map(b"\0az", &IndexConfig::new()).unwrap();

        assert_eq!(text.symbols(), [1, 98, 123, 0]);
        assert_eq!(text.alphabet().size(), 257);
        assert_eq!(text.units(), 3);
    }

    #[test]
    fn chars_are_compacted_in_order() {
        let text = SymbolText::map("bänänä".as_bytes(), &utf8()).unwrap();

        // b < n < ä
        assert_eq!(text.symbols(), [1, 3, 2, 3, 2, 3, 0]);
        assert_eq!(text.alphabet().size(), 4);
        assert_eq!(text.units(), 6);
    }

    #[test]
    fn invalid_utf8() {
        let err = SymbolText::map(b"ab\xff", &utf8()).unwrap_err();

        assert!(matches!(err, IndexError::InvalidUtf8(_)));
    }

    #[test]
    fn invalid_utf8_is_fine_as_bytes() {
        assert!(SymbolText::map(b"ab\xff", &IndexConfig::new()).is_ok());
    }

    #[test]
    fn empty_text() {
        let text = SymbolText::map(b"", &utf8()).unwrap();

        assert_eq!(text.symbols(), [0]);
        assert_eq!(text.alphabet().size(), 1);
        assert_eq!(text.units(), 0);
        assert_eq!(text.byte_offset(0), Some(0));
    }

    #[test]
    fn encode_unknown_char() {
        let text = SymbolText::map("bänänä".as_bytes(), &utf8()).unwrap();

        assert_eq!(text.alphabet().encode_pattern("nä".as_bytes()), Some(vec![2, 3]));
        assert_eq!(text.alphabet().encode_pattern(b"na"), None);
        assert_eq!(text.alphabet().encode_pattern(b"\xc3"), None);
    }

    #[test]
    fn encode_bytes_shifts_past_terminator() {
        let text = SymbolText::map(b"", &IndexConfig::new()).unwrap();

        assert_eq!(text.alphabet().encode_pattern(b"\0\xff"), Some(vec![1, 256]));
    }

    #[test]
    fn decode() {
        let text = SymbolText::map("bänänä".as_bytes(), &utf8()).unwrap();
        let alphabet = text.alphabet();

        assert_eq!(alphabet.decode(0), None);
        assert_eq!(alphabet.decode(3), Some(Unit::Char('ä')));
        assert_eq!(alphabet.decode(4), None);

        let text = SymbolText::map(b"a", IndexConfig::new().append_terminator(false)).unwrap();
        assert_eq!(text.alphabet().decode(0), Some(Unit::Byte(0)));
        assert_eq!(text.alphabet().decode(256), None);
    }

    #[test]
    fn display_escapes_bytes() {
        assert_eq!(Unit::Byte(b'a').to_string(), "a");
        assert_eq!(Unit::Byte(b'\n').to_string(), "\\n");
        assert_eq!(Unit::Byte(0xff).to_string(), "\\xff");
        assert_eq!(Unit::Char('数').to_string(), "数");
    }

    #[test]
    fn byte_offsets_of_chars() {
        let text = SymbolText::map("此数a".as_bytes(), &utf8()).unwrap();

        assert_eq!(text.byte_offset(0), Some(0));
        assert_eq!(text.byte_offset(1), Some(3));
        assert_eq!(text.byte_offset(2), Some(6));
        assert_eq!(text.byte_offset(3), Some(7));
        assert_eq!(text.byte_offset(4), None);
    }

    #[test]
    fn byte_offsets_of_bytes() {
        let text = SymbolText::map(b"ab", &IndexConfig::new()).unwrap();

        assert_eq!(text.byte_offset(2), Some(2));
        assert_eq!(text.byte_offset(3), None);
    }
}
