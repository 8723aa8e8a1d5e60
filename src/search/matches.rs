use std::fmt;

/// The start offsets of every occurrence of a pattern within a sequence.
///
/// Offsets are 0-based, ascending, and include overlapping occurrences. All
/// three matchers produce this type, so their outputs can be compared
/// directly.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Matches {
    offsets: Vec<usize>,
}

impl Matches {
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Matches { offsets: Vec::new() }
    }

    #[inline]
    pub(crate) fn record(&mut self, offset: usize) {
        self.offsets.push(offset);
    }

    /// The match start offsets in ascending order.
    #[inline]
    #[must_use]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// The number of occurrences found.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if the pattern was not found.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterates over the match start offsets.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.offsets.iter()
    }
}

impl<'a> IntoIterator for &'a Matches {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter()
    }
}

impl From<Matches> for Vec<usize> {
    #[inline]
    fn from(matches: Matches) -> Self {
        matches.offsets
    }
}

/// One `Match at: {offset}` line per occurrence followed by a
/// `Total: {count}` footer.
impl fmt::Display for Matches {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buff = itoa::Buffer::new();
        for &offset in &self.offsets {
            f.write_str("Match at: ")?;
            f.write_str(buff.format(offset))?;
            f.write_str("\n")?;
        }
        f.write_str("Total: ")?;
        f.write_str(buff.format(self.count()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_report() {
        let mut matches = Matches::new();
        matches.record(1);
        matches.record(4);
        matches.record(8);
        assert_eq!(matches.to_string(), "Match at: 1\nMatch at: 4\nMatch at: 8\nTotal: 3");
    }

    #[test]
    fn display_empty() {
        assert_eq!(Matches::new().to_string(), "Total: 0");
    }
}
