use super::{Matches, SearchError};

/// Finds every occurrence of `pattern` in `sequence` by direct comparison at
/// each candidate offset.
///
/// Overlapping occurrences are all reported. Worst-case `O(n·m)` time with
/// constant auxiliary space; preferable for very short patterns where table
/// construction is not worth amortizing.
///
/// ## Errors
///
/// Returns [`SearchError::EmptyPattern`] if `pattern` is empty. A pattern
/// longer than the sequence is not an error and yields no matches.
#[inline]
pub fn naive_search(pattern: &[u8], sequence: &[u8]) -> Result<Matches, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }

    let mut matches = Matches::new();
    if pattern.len() > sequence.len() {
        return Ok(matches);
    }

    for (i, window) in sequence.windows(pattern.len()).enumerate() {
        if window == pattern {
            matches.record(i);
        }
    }

    Ok(matches)
}
