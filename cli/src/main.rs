// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    ffi::{OsStr, OsString},
    fmt::Display,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use textindex::{Encoding, IndexConfig, TextIndex, WriteConfig};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Build and query suffix array indexes
#[derive(Parser)]
#[command(name = "textindex", version, about)]
struct Args {
    /// Log every construction stage
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct TextOptions {
    /// Split the input into UTF-8 characters instead of bytes
    #[arg(long)]
    utf8: bool,

    /// Do not append a terminator to the input
    #[arg(long)]
    no_terminator: bool,
}

impl TextOptions {
    fn config(&self) -> IndexConfig {
        let mut config = IndexConfig::new();
        config.append_terminator(!self.no_terminator);
        if self.utf8 {
            config.encoding(Encoding::Utf8);
        }

        config
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the suffix array of a file, one offset per line
    Sa {
        input: PathBuf,
        #[command(flatten)]
        options: TextOptions,
    },
    /// Print the LCP array of a file, one entry per line
    Lcp {
        input: PathBuf,
        #[command(flatten)]
        options: TextOptions,
    },
    /// Print the Burrows-Wheeler transform of a file, one unit per line
    ///
    /// The terminator is printed as `$`.
    Bwt {
        input: PathBuf,
        #[command(flatten)]
        options: TextOptions,
    },
    /// Build an index file
    Build {
        input: PathBuf,
        index: PathBuf,
        #[command(flatten)]
        options: TextOptions,

        /// zstd compression level of the index file
        #[arg(long, default_value_t = WriteConfig::DEFAULT_COMPRESSION_LEVEL)]
        level: i32,

        /// Number of compression worker threads
        #[arg(long, default_value_t = WriteConfig::DEFAULT_COMPRESSION_THREADS)]
        threads: u32,
    },
    /// Print the offset of every occurrence of a pattern in an index file
    Search {
        index: PathBuf,

        /// Pattern to search for, taken byte for byte from the command line
        pattern: OsString,

        /// Print byte offsets instead of offsets in the unit of the index
        #[arg(long)]
        bytes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Sa { input, options } => {
            let index = build(&input, &options)?;
            print_lines(index.suffix_array())?;
        }
        Command::Lcp { input, options } => {
            let index = build(&input, &options)?;
            let lcp = index.lcp().context("Failed to compute LCP array")?;
            print_lines(&lcp)?;
        }
        Command::Bwt { input, options } => {
            let index = build(&input, &options)?;
            let (bwt, primary) = index.bwt().context("Failed to compute BWT")?;
            info!(primary, "computed Burrows-Wheeler transform");

            let alphabet = index.alphabet();
            let units: Vec<String> = bwt
                .iter()
                .map(|&symbol| match alphabet.decode(symbol) {
                    Some(unit) => unit.to_string(),
                    None => "$".to_owned(),
                })
                .collect();
            print_lines(&units)?;
        }
        Command::Build {
            input,
            index: index_path,
            options,
            level,
            threads,
        } => {
            let index = build(&input, &options)?;

            let mut index_file = File::create(&index_path).with_context(|| {
                format!("Failed to create index file '{}'", index_path.display())
            })?;
            textindex::write_index_with_config(
                &index,
                &mut index_file,
                WriteConfig::new()
                    .compression_level(level)
                    .compression_threads(threads),
            )
            .context("I/O error occurred while writing index file")?;

            info!(suffixes = index.len(), path = %index_path.display(), "wrote index");
        }
        Command::Search {
            index: index_path,
            pattern,
            bytes,
        } => {
            let index_file = File::open(&index_path).with_context(|| {
                format!("Failed to open index file '{}'", index_path.display())
            })?;
            let index = textindex::read_index(io::BufReader::new(index_file))
                .with_context(|| format!("Failed to read index file '{}'", index_path.display()))?;

            let mut offsets = index.find_all(pattern_bytes(&pattern));
            if bytes {
                offsets = offsets
                    .into_iter()
                    .filter_map(|offset| index.byte_offset(offset))
                    .collect();
            }
            info!(matches = offsets.len(), "searched index");

            print_lines(&offsets)?;
        }
    }

    Ok(())
}

fn build(input: &Path, options: &TextOptions) -> anyhow::Result<TextIndex> {
    let text = fs::read(input)
        .with_context(|| format!("Failed to read input file '{}'", input.display()))?;

    TextIndex::build(text, &options.config())
        .with_context(|| format!("Failed to index input file '{}'", input.display()))
}

/// Returns the raw bytes of a command line pattern, which need not be valid UTF-8.
fn pattern_bytes(pattern: &OsStr) -> &[u8] {
    pattern.as_encoded_bytes()
}

fn print_lines<T: Display>(items: &[T]) -> anyhow::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for item in items {
        writeln!(out, "{item}")?;
    }
    out.flush().context("Failed to write to standard output")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_pattern_is_kept_verbatim() {
        let args = Args::try_parse_from(["textindex", "search", "corpus.idx", "数据"]).unwrap();

        let Command::Search { pattern, .. } = args.command else {
            panic!("parsed a different subcommand");
        };
        assert_eq!(pattern_bytes(&pattern), "数据".as_bytes());
    }

    #[cfg(unix)]
    #[test]
    fn search_pattern_may_be_invalid_utf8() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"a\xff\0");
        let args = Args::try_parse_from([
            OsStr::new("textindex"),
            OsStr::new("search"),
            OsStr::new("corpus.idx"),
            raw,
        ])
        .unwrap();

        let Command::Search { pattern, .. } = args.command else {
            panic!("parsed a different subcommand");
        };
        assert_eq!(pattern_bytes(&pattern), b"a\xff\0");

        let index = TextIndex::build(b"ba\xff\0a\xff".to_vec(), &IndexConfig::new()).unwrap();
        assert_eq!(index.find_all(pattern_bytes(&pattern)), [1]);
    }
}
