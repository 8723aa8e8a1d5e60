use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use motif::{data::fasta, prelude::*, search::Alphabet};

/// Search a motif in a FASTA or plain-text sequence file.
///
/// Header lines (starting with `>`) are skipped and the remaining lines are
/// concatenated into a single sequence before searching. Every match offset
/// is reported, overlapping occurrences included.
#[derive(Parser)]
#[command(name = "motif", version, about)]
struct Cli {
    /// Search algorithm to use.
    #[arg(long, value_enum, ignore_case = true)]
    algo: Algorithm,

    /// Motif to search for, e.g. 'ATG'. Uppercased before searching.
    #[arg(long)]
    pattern: String,

    /// FASTA or plain-text file holding the sequence to search.
    #[arg(long)]
    file: PathBuf,
}

#[derive(Copy, Clone, ValueEnum)]
enum Algorithm {
    /// Direct comparison at every candidate offset.
    Naive,
    /// Morris-Pratt, using the pattern's prefix function.
    Mp,
    /// Boyer-Moore, using the bad-character and good-suffix rules.
    Bm,
}

fn main() {
    let cli = Cli::parse();

    let sequence = fasta::flat_sequence_from_filename(&cli.file).unwrap_or_fail();
    let pattern = cli.pattern.to_uppercase().into_bytes();

    let matches = match cli.algo {
        Algorithm::Naive => naive_search(&pattern, &sequence),
        Algorithm::Mp => {
            build_prefix_table(&pattern).and_then(|table| morris_pratt_search(&pattern, &sequence, &table))
        }
        Algorithm::Bm => {
            let alphabet = Alphabet::from_sequence(&sequence);
            build_bad_char_table(&pattern, &alphabet).and_then(|bad_char| {
                let suffixes = build_suffix_table(&pattern)?;
                let good_suffix = build_good_suffix_table(&pattern, &suffixes)?;
                boyer_moore_search(&pattern, &sequence, &bad_char, &good_suffix)
            })
        }
    }
    .unwrap_or_fail();

    println!("{matches}");
}
