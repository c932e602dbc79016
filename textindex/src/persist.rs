// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use integer_encoding::{VarIntReader, VarIntWriter};
use tracing::debug;
use zstd::{Decoder, Encoder};

use crate::{
    Encoding, IndexConfig, IndexError, TextIndex, WriteConfig,
    header::{FLAG_TERMINATOR, FLAG_UTF8, MAGIC, VERSION},
};

/// Writes an index file with default options
///
/// The file holds the text and its suffix array, so it can later be loaded with [`read_index()`]
/// without sorting the suffixes again.
///
/// This function is a shorthand for [`write_index_with_config()`] called with the default options.
/// If you want to tune compression, see that function instead.
///
/// # Errors
///
/// Returns an error if an I/O error occurs while writing the index.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use textindex::{IndexConfig, TextIndex};
///
/// let index = TextIndex::build("banana", &IndexConfig::new())?;
/// let mut file = Vec::new();
///
/// textindex::write_index(&index, &mut file)?;
///
/// # Ok(())
/// # }
/// ```
pub fn write_index<W>(index: &TextIndex, out: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write_index_with_config(index, out, &WriteConfig::default())
}

/// Writes an index file
///
/// The file starts with a fixed header followed by a zstd stream. The stream holds the index
/// configuration, the text and the suffix array, with every number encoded as a varint.
///
/// # Errors
///
/// Returns an error if an I/O error occurs while writing the index.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use textindex::{IndexConfig, TextIndex, WriteConfig};
///
/// let index = TextIndex::build("banana", &IndexConfig::new())?;
/// let mut file = Vec::new();
///
/// textindex::write_index_with_config(&index, &mut file, WriteConfig::new().compression_level(3))?;
///
/// # Ok(())
/// # }
/// ```
pub fn write_index_with_config<W>(
    index: &TextIndex,
    out: &mut W,
    options: &WriteConfig,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    // Write the header
    out.write_u32::<LittleEndian>(MAGIC)?;
    out.write_u32::<LittleEndian>(VERSION)?;

    // Create a compressor for the index body
    let mut encoder = Encoder::new(out, options.compression_level)?;
    #[cfg(feature = "zstdmt")]
    encoder.multithread(options.compression_threads)?;

    let config = index.config();
    let mut flags = 0;
    if config.encoding == Encoding::Utf8 {
        flags |= FLAG_UTF8;
    }
    if config.append_terminator {
        flags |= FLAG_TERMINATOR;
    }
    encoder.write_varint(flags)?;

    encoder.write_varint(index.text().len() as u64)?;
    encoder.write_all(index.text())?;

    encoder.write_varint(index.suffix_array().len() as u64)?;
    for &offset in index.suffix_array() {
        encoder.write_varint(offset)?;
    }

    encoder.finish()?;

    debug!(
        text_len = index.text().len(),
        suffixes = index.len(),
        "wrote index"
    );

    Ok(())
}

/// Reads an index file written by [`write_index()`] or [`write_index_with_config()`].
///
/// The stored suffix array is checked against the stored text in *O*(*n*) time, so a file that
/// loads successfully always answers queries correctly.
///
/// # Errors
///
/// Returns an error if an I/O error occurs while reading the index, if the header is invalid, or
/// if the stored suffix array does not sort the stored text.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use textindex::{IndexConfig, TextIndex};
///
/// let index = TextIndex::build("banana", &IndexConfig::new())?;
/// let mut file = Vec::new();
/// textindex::write_index(&index, &mut file)?;
///
/// let loaded = textindex::read_index(file.as_slice())?;
/// assert_eq!(loaded.find_all("na"), [2, 4]);
///
/// # Ok(())
/// # }
/// ```
pub fn read_index<R: Read>(mut reader: R) -> Result<TextIndex, IndexError> {
    let magic = reader.read_u32::<LittleEndian>()?;
    if magic != MAGIC {
        return Err(IndexError::BadMagic(magic));
    }

    let version = reader.read_u32::<LittleEndian>()?;
    if version != VERSION {
        return Err(IndexError::UnsupportedVersion(version));
    }

    let mut decoder = Decoder::new(reader)?;

    let flags: u64 = decoder.read_varint()?;
    if flags & !(FLAG_UTF8 | FLAG_TERMINATOR) != 0 {
        return Err(IndexError::Corrupt("unknown flags are set"));
    }
    let mut config = IndexConfig::new();
    config.append_terminator(flags & FLAG_TERMINATOR != 0);
    if flags & FLAG_UTF8 != 0 {
        config.encoding(Encoding::Utf8);
    }

    // Read through `take` so a bogus length cannot trigger a huge allocation up front
    let text_len: u64 = decoder.read_varint()?;
    let mut text = Vec::new();
    (&mut decoder).take(text_len).read_to_end(&mut text)?;
    if text.len() as u64 != text_len {
        return Err(IndexError::Corrupt("text is truncated"));
    }

    // A text has at most one suffix per byte, plus the terminator
    let suffixes: u64 = decoder.read_varint()?;
    if suffixes > text_len + 1 {
        return Err(IndexError::Corrupt("suffix array is longer than the text"));
    }
    let mut suffix_array = Vec::with_capacity(suffixes as usize);
    for _ in 0..suffixes {
        suffix_array.push(decoder.read_varint::<u32>()?);
    }

    debug!(text_len, suffixes, "read index");

    TextIndex::from_parts(text, &config, suffix_array)
}
