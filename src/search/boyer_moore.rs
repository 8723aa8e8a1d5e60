use super::{Matches, SearchError};

/// The set of distinct symbols occurring in a sequence.
///
/// Membership-only: discovery order is irrelevant. Used to size the
/// bad-character rule to the sequence actually being searched, so that every
/// symbol the Boyer-Moore loop can encounter has a defined shift.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Alphabet {
    present: [bool; 256],
}

impl Alphabet {
    /// Collects the distinct symbols of `sequence`.
    #[must_use]
    pub fn from_sequence(sequence: &[u8]) -> Self {
        let mut present = [false; 256];
        for &symbol in sequence {
            present[symbol as usize] = true;
        }
        Alphabet { present }
    }

    /// Returns `true` if `symbol` occurs in the originating sequence.
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        self.present[symbol as usize]
    }

    /// The number of distinct symbols.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.present.iter().filter(|&&p| p).count()
    }

    /// Returns `true` if the originating sequence was empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.present.iter().any(|&p| p)
    }

    /// Iterates over the member symbols in ascending byte order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = u8> {
        self.present
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p)
            .map(|(symbol, _)| symbol as u8)
    }
}

/// The bad-character shift table of a (pattern, alphabet) pair.
///
/// Total over `u8`: symbols absent from both pattern and alphabet fall back
/// to the full pattern length, which is always a safe shift, so lookups
/// cannot fail mid-search even on symbols the alphabet never saw.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BadCharTable {
    shifts: Box<[usize; 256]>,
}

impl BadCharTable {
    /// The shift for a mismatching sequence symbol.
    #[inline]
    #[must_use]
    pub fn shift(&self, symbol: u8) -> usize {
        self.shifts[symbol as usize]
    }
}

/// Builds the [`BadCharTable`] for `pattern` over `alphabet`.
///
/// A symbol absent from the pattern shifts by the full pattern length `m`;
/// otherwise by the distance from its rightmost occurrence to the pattern
/// end, `m - 1 - rightmost(c)`. One pass over the pattern records rightmost
/// occurrences, one pass over the alphabet fills the shifts, so construction
/// is `O(m + |alphabet|)`.
///
/// ## Errors
///
/// Returns [`SearchError::EmptyPattern`] if `pattern` is empty.
pub fn build_bad_char_table(pattern: &[u8], alphabet: &Alphabet) -> Result<BadCharTable, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }

    let m = pattern.len();
    let mut rightmost = [None; 256];
    for (i, &symbol) in pattern.iter().enumerate() {
        rightmost[symbol as usize] = Some(i);
    }

    let mut shifts = Box::new([m; 256]);
    for symbol in alphabet.iter() {
        if let Some(i) = rightmost[symbol as usize] {
            shifts[symbol as usize] = m - 1 - i;
        }
    }

    Ok(BadCharTable { shifts })
}

/// The good-suffix shift table of a pattern of length `m`.
///
/// Entry `j` is the shift to apply after a mismatch at pattern position `j`;
/// entry 0 doubles as the shift after a full match. Every entry lies in
/// `[1, m]`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GoodSuffixTable {
    shifts: Vec<usize>,
}

impl GoodSuffixTable {
    /// The table entries, one per pattern position.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.shifts
    }
}

/// The suffix-match table of a pattern of length `m`.
///
/// Entry `i` is the length of the longest substring ending at `i` that is
/// also a suffix of the whole pattern, with `suffix[m - 1] = m`. An
/// intermediate table: its only consumer is [`build_good_suffix_table`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SuffixTable {
    lengths: Vec<usize>,
}

impl SuffixTable {
    /// The table entries, one per pattern position.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.lengths
    }
}

/// Computes the [`SuffixTable`] of `pattern`.
///
/// Scans from `m - 2` down to `0` with two pointers, reusing previously
/// computed entries whenever the current position falls strictly inside the
/// most recently matched suffix window.
///
/// ## Errors
///
/// Returns [`SearchError::EmptyPattern`] if `pattern` is empty.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn build_suffix_table(pattern: &[u8]) -> Result<SuffixTable, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }

    let m = pattern.len();
    let mut suffixes = vec![0usize; m];
    suffixes[m - 1] = m;

    // g is the left end of the current matched window (may run past the
    // pattern start, hence signed); f is the right end from the previous
    // iteration.
    let mut g = (m - 1) as isize;
    let mut f = 0usize;
    for i in (0..m - 1).rev() {
        if (i as isize) > g && suffixes[i + m - 1 - f] < (i as isize - g) as usize {
            suffixes[i] = suffixes[i + m - 1 - f];
        } else {
            if (i as isize) < g {
                g = i as isize;
            }
            f = i;
            while g >= 0 && pattern[g as usize] == pattern[g as usize + m - 1 - f] {
                g -= 1;
            }
            suffixes[i] = (f as isize - g) as usize;
        }
    }

    Ok(SuffixTable { lengths: suffixes })
}

/// Builds the [`GoodSuffixTable`] for `pattern` from its suffix-match table.
///
/// Slots start at the full pattern length `m`. Positions whose matched
/// substring is itself a complete pattern prefix (`suffixes[i] == i + 1`)
/// fill the still-unset slots first; the partial-overlap pass then assigns
/// `shifts[m - 1 - suffixes[i]] = m - 1 - i` for each earlier position. Run
/// in this order the table reproduces the published reference shifts.
///
/// ## Errors
///
/// Returns [`SearchError::EmptyPattern`] if `pattern` is empty.
pub fn build_good_suffix_table(pattern: &[u8], suffixes: &SuffixTable) -> Result<GoodSuffixTable, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }

    let m = pattern.len();
    let suffixes = suffixes.as_slice();
    let mut shifts = vec![m; m];

    for i in (0..m).rev() {
        if suffixes[i] == i + 1 {
            for shift in shifts.iter_mut().take(m - 1 - i) {
                if *shift == m {
                    *shift = m - 1 - i;
                }
            }
        }
    }

    for i in 0..m - 1 {
        shifts[m - 1 - suffixes[i]] = m - 1 - i;
    }

    Ok(GoodSuffixTable { shifts })
}

/// Finds every occurrence of `pattern` in `sequence` with the Boyer-Moore
/// algorithm.
///
/// Symbols are compared right-to-left at each alignment; on a mismatch the
/// alignment advances by the larger of the good-suffix and bad-character
/// shifts, and after a full match by the good-suffix shift for position 0.
/// Both rules are safe lower bounds on the true shift, so overlapping
/// occurrences are all reported. Worst-case `O(n·m)`, typically sub-linear.
///
/// The tables must have been built from the same `pattern`, and `bad_char`
/// from an [`Alphabet`] covering this `sequence`.
///
/// ## Errors
///
/// Returns [`SearchError::EmptyPattern`] if `pattern` is empty. A pattern
/// longer than the sequence is not an error and yields no matches.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn boyer_moore_search(
    pattern: &[u8], sequence: &[u8], bad_char: &BadCharTable, good_suffix: &GoodSuffixTable,
) -> Result<Matches, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }

    let (m, n) = (pattern.len(), sequence.len());
    let mut matches = Matches::new();
    if m > n {
        return Ok(matches);
    }

    let shifts = good_suffix.as_slice();
    let mut i = 0usize;
    while i <= n - m {
        let mut j = (m - 1) as isize;
        while j >= 0 && sequence[i + j as usize] == pattern[j as usize] {
            j -= 1;
        }

        if j < 0 {
            matches.record(i);
            i += shifts[0];
        } else {
            let j = j as usize;
            let bad_char_shift = bad_char.shift(sequence[i + j]) as isize - (m - 1 - j) as isize;
            // The good-suffix shift is at least 1, flooring the net advance.
            i += shifts[j].max(bad_char_shift.max(1) as usize);
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod test {
    use super::*;

    fn search(pattern: &[u8], sequence: &[u8]) -> Vec<usize> {
        let alphabet = Alphabet::from_sequence(sequence);
        let bad_char = build_bad_char_table(pattern, &alphabet).unwrap();
        let suffixes = build_suffix_table(pattern).unwrap();
        let good_suffix = build_good_suffix_table(pattern, &suffixes).unwrap();
        boyer_moore_search(pattern, sequence, &bad_char, &good_suffix)
            .unwrap()
            .into()
    }

    #[test]
    fn alphabet_membership() {
        let alphabet = Alphabet::from_sequence(b"CATGATGCATG");
        assert_eq!(alphabet.len(), 4);
        for symbol in b"ACGT" {
            assert!(alphabet.contains(*symbol));
        }
        assert!(!alphabet.contains(b'N'));
        assert_eq!(alphabet.iter().collect::<Vec<_>>(), b"ACGT");
    }

    // Reference values from the classic Boyer-Moore literature example.
    #[test]
    fn bad_char_table_anpanman() {
        let alphabet = Alphabet::from_sequence(b"ANPANMANXYZ");
        let table = build_bad_char_table(b"ANPANMAN", &alphabet).unwrap();
        assert_eq!(table.shift(b'A'), 1);
        assert_eq!(table.shift(b'M'), 2);
        assert_eq!(table.shift(b'N'), 0);
        assert_eq!(table.shift(b'P'), 5);
        assert_eq!(table.shift(b'X'), 8);
        // Pattern-absent, alphabet-absent symbols fall back to m.
        assert_eq!(table.shift(b'Q'), 8);
    }

    #[test]
    fn suffix_table_anpanman() {
        let suffixes = build_suffix_table(b"ANPANMAN").unwrap();
        assert_eq!(suffixes.as_slice(), &[0, 2, 0, 0, 2, 0, 0, 8]);
    }

    // Slot 6 keeps the full-length shift: the lone matched suffix there is
    // "N", and every other "N" in the pattern is also preceded by 'A', so no
    // shorter realignment can succeed.
    #[test]
    fn good_suffix_table_anpanman() {
        let suffixes = build_suffix_table(b"ANPANMAN").unwrap();
        let table = build_good_suffix_table(b"ANPANMAN", &suffixes).unwrap();
        assert_eq!(table.as_slice(), &[6, 6, 6, 6, 6, 3, 8, 1]);
    }

    #[test]
    fn good_suffix_shifts_in_range() {
        for pattern in [b"A".as_slice(), b"AA", b"ABAB", b"ANPANMAN", b"GCAGAGAG"] {
            let suffixes = build_suffix_table(pattern).unwrap();
            let table = build_good_suffix_table(pattern, &suffixes).unwrap();
            assert!(
                table.as_slice().iter().all(|&s| s >= 1 && s <= pattern.len()),
                "shift out of range for {pattern:?}"
            );
        }
    }

    #[test]
    fn finds_all_occurrences() {
        assert_eq!(search(b"ATG", b"CATGATGCATG"), vec![1, 4, 8]);
    }

    #[test]
    fn overlapping_occurrences() {
        assert_eq!(search(b"AA", b"AAAA"), vec![0, 1, 2]);
        assert_eq!(search(b"ANA", b"BANANA"), vec![1, 3]);
    }

    #[test]
    fn absent_pattern() {
        assert!(search(b"GGG", b"ATATAT").is_empty());
    }

    #[test]
    fn mismatching_symbol_absent_from_pattern() {
        // The mismatch lands on 'N', which the pattern never contains.
        assert_eq!(search(b"ATG", b"ATNATG"), vec![3]);
    }

    #[test]
    fn oversized_pattern() {
        assert!(search(b"ACGTACGT", b"ACGT").is_empty());
    }

    #[test]
    fn single_symbol_pattern() {
        assert_eq!(search(b"A", b"BANANA"), vec![1, 3, 5]);
    }

    #[test]
    fn empty_pattern_rejected() {
        let alphabet = Alphabet::from_sequence(b"ACGT");
        let suffixes = build_suffix_table(b"A").unwrap();
        assert_eq!(build_bad_char_table(b"", &alphabet), Err(SearchError::EmptyPattern));
        assert_eq!(build_suffix_table(b""), Err(SearchError::EmptyPattern));
        assert_eq!(build_good_suffix_table(b"", &suffixes), Err(SearchError::EmptyPattern));

        let bad_char = build_bad_char_table(b"A", &alphabet).unwrap();
        let good_suffix = build_good_suffix_table(b"A", &suffixes).unwrap();
        assert_eq!(
            boyer_moore_search(b"", b"ACGT", &bad_char, &good_suffix),
            Err(SearchError::EmptyPattern)
        );
    }
}
