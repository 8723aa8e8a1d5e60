use super::{Matches, SearchError};

/// The Morris-Pratt failure function of a pattern of length `m`.
///
/// Holds `m + 1` entries: entry `k` is the length of the longest proper
/// border (prefix that is also a suffix) of the length-`k` prefix of the
/// pattern, with the sentinel `-1` at entry 0. The final entry is the border
/// of the whole pattern, which the search uses to restart after a full match
/// so that overlapping occurrences are found.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PrefixTable {
    entries: Vec<isize>,
}

impl PrefixTable {
    /// The table entries, `pattern.len() + 1` of them.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[isize] {
        &self.entries
    }
}

/// Builds the [`PrefixTable`] for `pattern` in amortized `O(m)` time.
///
/// ## Errors
///
/// Returns [`SearchError::EmptyPattern`] if `pattern` is empty.
#[allow(clippy::cast_sign_loss)]
pub fn build_prefix_table(pattern: &[u8]) -> Result<PrefixTable, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }

    let m = pattern.len();
    let mut entries = vec![0isize; m + 1];
    entries[0] = -1;

    // j is the border length of the prefix ending before i, or the sentinel.
    let mut j: isize = -1;
    for i in 0..m {
        while j > -1 && pattern[i] != pattern[j as usize] {
            j = entries[j as usize];
        }
        j += 1;
        entries[i + 1] = j;
    }

    Ok(PrefixTable { entries })
}

/// Finds every occurrence of `pattern` in `sequence` with the Morris-Pratt
/// algorithm, in `O(n + m)` time.
///
/// The `table` must have been built from the same `pattern` with
/// [`build_prefix_table`]. After each full match the matched length falls
/// back to the border of the whole pattern, so overlapping occurrences are
/// all reported.
///
/// ## Errors
///
/// Returns [`SearchError::EmptyPattern`] if `pattern` is empty. A pattern
/// longer than the sequence is not an error and yields no matches.
#[allow(clippy::cast_sign_loss)]
pub fn morris_pratt_search(pattern: &[u8], sequence: &[u8], table: &PrefixTable) -> Result<Matches, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }

    let m = pattern.len();
    let t = table.as_slice();
    let mut matches = Matches::new();

    // j is the number of pattern symbols matched so far, or -1 after falling
    // back past the first symbol.
    let mut j: isize = 0;
    for (i, &symbol) in sequence.iter().enumerate() {
        while j > -1 && symbol != pattern[j as usize] {
            j = t[j as usize];
        }
        j += 1;

        if j as usize == m {
            matches.record(i + 1 - m);
            j = t[m];
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod test {
    use super::*;

    fn search(pattern: &[u8], sequence: &[u8]) -> Vec<usize> {
        let table = build_prefix_table(pattern).unwrap();
        morris_pratt_search(pattern, sequence, &table).unwrap().into()
    }

    #[test]
    fn prefix_table_abab() {
        let table = build_prefix_table(b"ABAB").unwrap();
        // Borders of the prefixes "", "A", "AB", "ABA" (sentinel first)...
        assert_eq!(&table.as_slice()[..4], &[-1, 0, 0, 1]);
        // ...and of the full pattern.
        assert_eq!(table.as_slice()[4], 2);
    }

    #[test]
    fn prefix_table_repeated_symbol() {
        let table = build_prefix_table(b"AAA").unwrap();
        assert_eq!(table.as_slice(), &[-1, 0, 1, 2]);
    }

    #[test]
    fn finds_all_occurrences() {
        assert_eq!(search(b"ATG", b"CATGATGCATG"), vec![1, 4, 8]);
    }

    #[test]
    fn overlapping_occurrences() {
        assert_eq!(search(b"AA", b"AAAA"), vec![0, 1, 2]);
        assert_eq!(search(b"ABAB", b"ABABABAB"), vec![0, 2, 4]);
    }

    #[test]
    fn absent_pattern() {
        assert!(search(b"GGG", b"ATATAT").is_empty());
    }

    #[test]
    fn oversized_pattern() {
        assert!(search(b"ACGTACGT", b"ACGT").is_empty());
    }

    #[test]
    fn empty_pattern_rejected() {
        assert_eq!(build_prefix_table(b""), Err(SearchError::EmptyPattern));

        let table = build_prefix_table(b"A").unwrap();
        assert_eq!(morris_pratt_search(b"", b"ACGT", &table), Err(SearchError::EmptyPattern));
    }
}
