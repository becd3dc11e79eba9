use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use crate::utils::PathSubset;

pub type Result<T> = std::io::Result<T>;

/// Reads one bitstring per line. Empty lines and lines starting with `c` are skipped,
/// surrounding whitespace is ignored.
pub struct SubsetReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> SubsetReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

impl SubsetReader<BufReader<File>> {
    pub fn try_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        Ok(Self::new(BufReader::new(reader)))
    }
}

impl<R: BufRead> SubsetReader<R> {
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            self.line_number += 1;
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with('c') {
                        continue;
                    }
                    return Ok(Some(line));
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for SubsetReader<R> {
    type Item = Result<PathSubset>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.next_non_comment_line() {
            Ok(line) => line?,
            Err(e) => return Some(Err(e)),
        };

        let line_number = self.line_number;
        Some(line.trim().parse::<PathSubset>().map_err(|e| {
            std::io::Error::new(ErrorKind::InvalidData, format!("Line {line_number}: {e}"))
        }))
    }
}
