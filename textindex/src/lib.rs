// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Full-text indexes over bytes or Unicode text, backed by suffix arrays.
//!
//! This crate maps a text to integer symbols, sorts its suffixes with [`sufsort`], and answers
//! substring queries against the result. Indexes can be written to compressed files and loaded
//! again without sorting the suffixes a second time.
//!
//! # Examples
//!
//! Searching a text by characters:
//!
//! ```
//! use textindex::{Encoding, IndexConfig, TextIndex};
//!
//! let index = TextIndex::build("bänänä", IndexConfig::new().encoding(Encoding::Utf8))?;
//!
//! assert_eq!(index.find_all("nä"), [2, 4]);
//! # Ok::<(), textindex::IndexError>(())
//! ```
//!
//! Creating an index file and searching it later:
//!
//! ```no_run
//! use std::fs::{self, File};
//! use textindex::{IndexConfig, TextIndex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = fs::read("corpus.txt")?;
//! let index = TextIndex::build(text, &IndexConfig::new())?;
//! let mut file = File::create("corpus.idx")?;
//!
//! textindex::write_index(&index, &mut file)?;
//!
//! let index = textindex::read_index(File::open("corpus.idx")?)?;
//! for offset in index.find_all("needle") {
//!     println!("{offset}");
//! }
//! # Ok(())
//! # }
//! ```

mod alphabet;
mod config;
mod error;
mod header;
mod index;
mod persist;

pub use alphabet::{Alphabet, SymbolText, Unit};
pub use config::{Encoding, IndexConfig, WriteConfig};
pub use error::IndexError;
pub use index::TextIndex;
pub use persist::{read_index, write_index, write_index_with_config};
pub use sufsort::InvalidInput;
