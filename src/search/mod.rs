//! ## Exact motif search.
//!
//! Three classical matchers over byte sequences, each reporting every
//! occurrence of a pattern (overlaps included) as ascending start offsets:
//!
//! - [`naive_search`]: candidate-by-candidate comparison, `O(n·m)`.
//! - [`morris_pratt_search`]: prefix-function matcher, `O(n + m)`. Requires a
//!   [`PrefixTable`] built once per pattern.
//! - [`boyer_moore_search`]: right-to-left matcher combining the
//!   bad-character and good-suffix rules, sub-linear on typical inputs.
//!   Requires a [`BadCharTable`] and a [`GoodSuffixTable`].
//!
//! All matchers are pure functions of their arguments: inputs are borrowed
//! immutably, results are freshly allocated, and concurrent calls need no
//! coordination. Tables only depend on the pattern (and, for the
//! bad-character rule, the alphabet of the sequence being searched), so
//! callers reusing a pattern may build them once and search many sequences.

/// Boyer-Moore matcher and its shift tables.
mod boyer_moore;
/// Error types for pattern validation.
mod errors;
/// The shared match-offset result type.
mod matches;
/// Morris-Pratt matcher and the prefix function.
mod morris_pratt;
/// Naive scanning matcher.
mod naive;

pub use boyer_moore::*;
pub use errors::*;
pub use matches::*;
pub use morris_pratt::*;
pub use naive::*;

/// Trait for searching motifs in byte substrings.
///
/// Implemented for anything viewable as bytes, so plain byte strings and
/// FASTA sequence buffers can be searched directly. Uses the Boyer-Moore
/// matcher underneath.
pub trait ByteMotif {
    /// Returns all start offsets of `needle`, overlapping ones included.
    ///
    /// ## Errors
    ///
    /// Returns [`SearchError::EmptyPattern`] if `needle` is empty.
    fn find_motif(&self, needle: impl AsRef<[u8]>) -> Result<Matches, SearchError>;

    /// Returns `true` if `needle` occurs at least once.
    ///
    /// ## Errors
    ///
    /// Returns [`SearchError::EmptyPattern`] if `needle` is empty.
    fn contains_motif(&self, needle: impl AsRef<[u8]>) -> Result<bool, SearchError>;
}

impl<T: AsRef<[u8]> + ?Sized> ByteMotif for T {
    #[inline]
    fn find_motif(&self, needle: impl AsRef<[u8]>) -> Result<Matches, SearchError> {
        let haystack = self.as_ref();
        let needle = needle.as_ref();

        let alphabet = Alphabet::from_sequence(haystack);
        let bad_char = build_bad_char_table(needle, &alphabet)?;
        let suffixes = build_suffix_table(needle)?;
        let good_suffix = build_good_suffix_table(needle, &suffixes)?;
        boyer_moore_search(needle, haystack, &bad_char, &good_suffix)
    }

    #[inline]
    fn contains_motif(&self, needle: impl AsRef<[u8]>) -> Result<bool, SearchError> {
        Ok(!self.find_motif(needle)?.is_empty())
    }
}
