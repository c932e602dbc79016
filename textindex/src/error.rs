// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
    str::Utf8Error,
};

use sufsort::InvalidInput;

use crate::header::{MAGIC, VERSION};

/// An error indicating that building, reading or writing an index failed.
///
/// # Examples
///
/// ```
/// use textindex::IndexError;
///
/// // Garbage data
/// let file = &[0, 0, 0, 0, 0, 0, 0, 0];
/// let index = textindex::read_index(file.as_ref());
///
/// assert!(matches!(index, Err(IndexError::BadMagic(_))));
/// ```
#[derive(Debug)]
pub enum IndexError {
    /// An I/O error occurred
    Io(io::Error),
    /// The text is not valid UTF-8 but the index splits it into codepoints
    InvalidUtf8(Utf8Error),
    /// The symbols or suffix array handed to the builders are invalid
    InvalidInput(InvalidInput),
    /// The index file magic is invalid
    BadMagic(u32),
    /// The index file version is unsupported
    UnsupportedVersion(u32),
    /// The index file is well-formed but describes an impossible index
    Corrupt(&'static str),
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            IndexError::Io(e) => write!(f, "I/O error: {e}"),
            IndexError::InvalidUtf8(e) => write!(f, "invalid UTF-8: {e}"),
            IndexError::InvalidInput(e) => write!(f, "invalid input: {e}"),
            IndexError::BadMagic(magic) => {
                write!(f, "bad magic: expected {MAGIC:x}, found {magic:x}")
            }
            IndexError::UnsupportedVersion(version) => {
                write!(
                    f,
                    "unsupported version: found {version:x}, supported versions are [{VERSION:x}]",
                )
            }
            IndexError::Corrupt(reason) => write!(f, "corrupt index: {reason}"),
        }
    }
}

impl Error for IndexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IndexError::Io(e) => Some(e),
            IndexError::InvalidUtf8(e) => Some(e),
            IndexError::InvalidInput(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for IndexError {
    fn from(value: io::Error) -> Self {
        IndexError::Io(value)
    }
}

impl From<Utf8Error> for IndexError {
    fn from(value: Utf8Error) -> Self {
        IndexError::InvalidUtf8(value)
    }
}

impl From<InvalidInput> for IndexError {
    fn from(value: InvalidInput) -> Self {
        IndexError::InvalidInput(value)
    }
}
