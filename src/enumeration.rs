//! Lazy enumeration of all subsets of a path graph.

use crate::{
    encoding::{check_width, encode_unchecked},
    errors::Result,
    utils::dominating_set::is_dominating_set_unchecked,
};
use log::debug;

/// Iterator over all bitstrings of a fixed width in ascending numeric order.
/// Each bitstring is produced on demand; the iterator itself only stores two counters.
#[derive(Clone, Debug)]
pub struct Subsets {
    width: u32,
    next_value: u64,
    end: u64,
}

impl Subsets {
    pub fn new(width: u32) -> Result<Self> {
        check_width(width)?;
        debug!("Enumerate all {} subsets of the path on {width} nodes", 1u64 << width);
        Ok(Self {
            width,
            next_value: 0,
            end: 1u64 << width,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the number of bitstrings not produced yet.
    pub fn remaining(&self) -> u64 {
        self.end - self.next_value
    }
}

impl Iterator for Subsets {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_value == self.end {
            return None;
        }

        let bits = encode_unchecked(self.next_value, self.width);
        self.next_value += 1;
        Some(bits)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(x) => (x, Some(x)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next_value = self
            .next_value
            .saturating_add(n as u64)
            .min(self.end);
        self.next()
    }
}

impl DoubleEndedIterator for Subsets {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next_value == self.end {
            return None;
        }

        self.end -= 1;
        Some(encode_unchecked(self.end, self.width))
    }
}

impl std::iter::FusedIterator for Subsets {}

/// Returns a lazy iterator over every bitstring of length `n`, i.e. `encode(i, n)` for
/// `i in 0..2^n`. Calling it again restarts the enumeration.
///
/// # Example
/// ```
/// use pathdom::enumeration::enumerate_subsets;
/// let all: Vec<_> = enumerate_subsets(2).unwrap().collect();
/// assert_eq!(all, vec!["00", "01", "10", "11"]);
/// ```
pub fn enumerate_subsets(n: u32) -> Result<Subsets> {
    Subsets::new(n)
}

/// Returns a lazy iterator over all bitstrings of length `n` that encode a dominating set
/// of the path on `n` nodes, in ascending numeric order.
pub fn dominating_subsets(n: u32) -> Result<impl Iterator<Item = String>> {
    Ok(enumerate_subsets(n)?.filter(|bits| is_dominating_set_unchecked(bits)))
}
