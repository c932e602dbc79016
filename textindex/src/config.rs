// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// The unit a text is split into before indexing.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Encoding {
    /// Every byte is one symbol. Offsets are byte offsets.
    #[default]
    Bytes,
    /// The text is decoded as UTF-8 and every codepoint is one symbol. Offsets are character
    /// offsets.
    Utf8,
}

/// Configuration for building a [`TextIndex`](crate::TextIndex).
///
/// The same configuration must be used to interpret every query against an index, which is why
/// the index keeps a copy of it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct IndexConfig {
    pub(crate) encoding: Encoding,
    pub(crate) append_terminator: bool,
}

impl IndexConfig {
    /// Creates a new configuration for building indexes
    ///
    /// This configuration can be reused across builds.
    pub const fn new() -> Self {
        Self {
            encoding: Self::DEFAULT_ENCODING,
            append_terminator: Self::DEFAULT_APPEND_TERMINATOR,
        }
    }

    /// Sets the unit the text is split into.
    pub fn encoding(&mut self, encoding: Encoding) -> &mut Self {
        self.encoding = encoding;
        self
    }

    /// Sets whether a terminator is appended to the text before indexing.
    ///
    /// The terminator is a symbol smaller than every symbol of the text, so the index holds one
    /// more suffix than the text has units. It is never reported as part of a match and makes the
    /// Burrows-Wheeler transform of the text invertible.
    pub fn append_terminator(&mut self, append: bool) -> &mut Self {
        self.append_terminator = append;
        self
    }

    /// The default encoding
    pub const DEFAULT_ENCODING: Encoding = Encoding::Bytes;

    /// Whether a terminator is appended by default
    pub const DEFAULT_APPEND_TERMINATOR: bool = true;
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for writing an index file.
///
/// This struct can be used to fine-tune how the index file is compressed. The defaults should be
/// optimal for most use cases, but you may wish to change them in especially resource-constrained
/// or powerful computing environments for better performance.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct WriteConfig {
    pub(crate) compression_threads: u32,
    pub(crate) compression_level: i32,
}

impl WriteConfig {
    /// Creates a new configuration for writing index files
    ///
    /// This configuration can be reused across writes.
    pub const fn new() -> Self {
        Self {
            compression_threads: Self::DEFAULT_COMPRESSION_THREADS,
            compression_level: Self::DEFAULT_COMPRESSION_LEVEL,
        }
    }

    /// Sets the number of threads to use for compressing the index file.
    ///
    /// Setting this to a value more than 0 allows compression to run on a separate thread than
    /// I/O. A value of 0 means that compression will run on the same thread as I/O.
    ///
    /// This setting has no effect unless the `zstdmt` feature is enabled.
    pub fn compression_threads(&mut self, threads: u32) -> &mut Self {
        self.compression_threads = threads;
        self
    }

    /// Sets the compression level to use for compressing the index file.
    ///
    /// The compression level can be set to any value between -7 and 22 inclusive. Any value
    /// outside of this range will be clamped to fit inside the range. Levels 20-22 result in
    /// significantly higher memory usage.
    pub fn compression_level(&mut self, level: i32) -> &mut Self {
        self.compression_level = level;
        self
    }

    /// The default number of compression threads to create
    pub const DEFAULT_COMPRESSION_THREADS: u32 = 1;

    /// The default compression level to use
    ///
    /// Suffix offsets compress poorly, so levels above this one cost memory without shrinking
    /// the file much.
    pub const DEFAULT_COMPRESSION_LEVEL: i32 = 19;
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self::new()
    }
}
