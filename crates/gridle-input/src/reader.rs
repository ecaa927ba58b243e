//! Resettable line reading over input files.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use log::{debug, trace};

/// A resettable reader over the lines of a text file.
///
/// The reader owns the file handle for its whole life; dropping it releases
/// the handle. [`reset`](LineReader::reset) rewinds to the start so the same
/// input can be walked more than once, which multi-pass puzzle solutions
/// rely on.
#[derive(Debug)]
pub struct LineReader {
    reader: BufReader<File>,
}

impl LineReader {
    /// Open `path` for line reading.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!("reading lines from {}", path.display());
        Ok(Self { reader: BufReader::new(file) })
    }

    /// Rewind to the start of the input, discarding buffered data.
    pub fn reset(&mut self) -> io::Result<()> {
        trace!("rewinding line reader");
        self.reader.seek(SeekFrom::Start(0))?;
        Ok(())
    }

    /// Iterate over the remaining lines, without terminators.
    ///
    /// With `skip_blank`, empty lines are dropped; otherwise every line is
    /// yielded verbatim.
    pub fn lines(&mut self, skip_blank: bool) -> Lines<'_> {
        Lines { reader: &mut self.reader, skip_blank }
    }

    /// Read all remaining lines into a vector.
    pub fn read_all(&mut self, skip_blank: bool) -> io::Result<Vec<String>> {
        self.lines(skip_blank).collect()
    }
}

/// Borrowing iterator over a [`LineReader`]'s lines.
#[derive(Debug)]
pub struct Lines<'a> {
    reader: &'a mut BufReader<File>,
    skip_blank: bool,
}

impl Iterator for Lines<'_> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<io::Result<String>> {
        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    if line.ends_with('\n') {
                        line.pop();
                        if line.ends_with('\r') {
                            line.pop();
                        }
                    }
                    if self.skip_blank && line.is_empty() {
                        continue;
                    }
                    return Some(Ok(line));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// A reusable parser over some input resource.
///
/// Implementations pair a line source, usually a [`LineReader`], with the
/// format of one puzzle input and produce a typed value on demand.
/// [`reset`](Parser::reset) rewinds the source so [`parse`](Parser::parse)
/// can run again on the same input.
pub trait Parser {
    /// The parsed value.
    type Output;

    /// Parse the input from the current point.
    fn parse(&mut self) -> Result<Self::Output, Box<dyn std::error::Error>>;

    /// Rewind the underlying source.
    fn reset(&mut self) -> io::Result<()>;
}
