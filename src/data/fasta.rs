use std::{
    fs::File,
    io::{BufRead, BufReader, Error as IOError, Read},
    path::Path,
};

/// A single record from a [FASTA](https://en.wikipedia.org/wiki/FASTA_format)
/// file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FastaSeq {
    pub name:     String,
    pub sequence: Vec<u8>,
}

/// Structure for buffered reading of FASTA files, one record at a time.
#[derive(Debug)]
pub struct FastaReader<R: Read> {
    reader: BufReader<R>,
    buffer: Vec<u8>,
}

impl<R: Read> FastaReader<R> {
    pub fn new(inner: R) -> Self {
        FastaReader {
            reader: BufReader::new(inner),
            buffer: Vec::new(),
        }
    }
}

impl FastaReader<File> {
    /// Opens a FASTA file for buffered reading.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if the file cannot be opened; the path is included
    /// in the error message.
    pub fn from_filename<P>(filename: P) -> Result<FastaReader<File>, IOError>
    where
        P: AsRef<Path>, {
        let file = File::open(&filename).map_err(|e| {
            IOError::new(
                e.kind(),
                format!("couldn't open FASTA file '{}': {e}", filename.as_ref().display()),
            )
        })?;
        Ok(FastaReader::new(file))
    }
}

impl<R: Read> Iterator for FastaReader<R> {
    type Item = Result<FastaSeq, IOError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();

            let bytes = match self.reader.read_until(b'>', &mut self.buffer) {
                Ok(b) => b,
                Err(e) => return Some(Err(e)),
            };

            match bytes {
                0 => return None,
                // Record delimiter only, e.g. the very start of the file.
                1 if self.buffer == b">" => {}
                _ => {
                    if self.buffer.ends_with(b">") {
                        self.buffer.pop();
                    }

                    let mut lines = self.buffer.split(|&b| b == b'\n' || b == b'\r');
                    let name = match lines.next() {
                        Some(h) => String::from_utf8_lossy(h).into_owned(),
                        None => String::from("UNKNOWN"),
                    };
                    let sequence: Vec<u8> = lines.flatten().copied().collect();

                    if sequence.is_empty() {
                        return None;
                    }
                    return Some(Ok(FastaSeq { name, sequence }));
                }
            }
        }
    }
}

impl std::fmt::Display for FastaSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ">{}\n{}\n", self.name, String::from_utf8_lossy(&self.sequence))
    }
}

/// Reads `source` as FASTA or plain text and returns the single flattened
/// sequence: every line not starting with the `>` header marker is stripped
/// of its line terminators and concatenated in order, preserving symbol case
/// exactly as read.
///
/// ## Errors
///
/// Will return `Err` if reading from `source` fails.
pub fn read_flat_sequence<R: Read>(source: R) -> Result<Vec<u8>, IOError> {
    let mut reader = BufReader::new(source);
    let mut sequence = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.first() == Some(&b'>') {
            continue;
        }
        while line.last().is_some_and(|&b| b == b'\n' || b == b'\r') {
            line.pop();
        }
        sequence.extend_from_slice(&line);
    }

    Ok(sequence)
}

/// Like [`read_flat_sequence`] but opens `filename` first.
///
/// ## Errors
///
/// Will return `Err` if the file cannot be opened or read; the path is
/// included in the error message for the former.
pub fn flat_sequence_from_filename<P>(filename: P) -> Result<Vec<u8>, IOError>
where
    P: AsRef<Path>, {
    let file = File::open(&filename).map_err(|e| {
        IOError::new(
            e.kind(),
            format!("couldn't open sequence file '{}': {e}", filename.as_ref().display()),
        )
    })?;
    read_flat_sequence(file)
}
