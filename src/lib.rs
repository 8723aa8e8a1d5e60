#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

/// Data import and manipulation functions.
pub mod data;
/// Exact motif search over byte sequences.
pub mod search;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::{err::OrFail, fasta::FastaReader};
    pub use crate::search::{
        ByteMotif, Matches, SearchError, boyer_moore_search, build_bad_char_table, build_good_suffix_table,
        build_prefix_table, build_suffix_table, morris_pratt_search, naive_search,
    };
}
