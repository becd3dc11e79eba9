use crate::{
    encoding::{check_width, decode, encode, validate_bitstring},
    errors::{InvariantCheck, PathSetError, Result},
    graph::*,
};
use log::trace;
use std::{fmt, io::Write, str::FromStr};

/// Returns true iff the `'1'` positions of `bits` form a dominating set of the path graph
/// on `bits.len()` nodes, i.e. every vertex is selected or adjacent to a selected vertex.
///
/// # Example
/// ```
/// use pathdom::utils::is_dominating_set;
/// assert!(is_dominating_set("10010").unwrap());
/// assert!(!is_dominating_set("10001").unwrap());
/// assert!(is_dominating_set("10a01").is_err());
/// ```
pub fn is_dominating_set(bits: &str) -> Result<bool> {
    validate_bitstring(bits)?;
    let result = is_dominating_set_unchecked(bits);
    trace!("{bits} is dominating: {result}");
    Ok(result)
}

/// Same as [`is_dominating_set`] without validating the input; every byte other than `b'1'`
/// is treated as an unselected vertex.
///
/// Single linear scan over the maximal runs of zeros: a run before the first one may have
/// length at most 1, a run between two ones at most 2, and a run after the last one at
/// most 1. At least one vertex has to be selected.
pub(crate) fn is_dominating_set_unchecked(bits: &str) -> bool {
    let mut zeros = 0usize;
    let mut seen_one = false;

    for &b in bits.as_bytes() {
        if b != b'1' {
            zeros += 1;
            continue;
        }

        let max_run = if seen_one { 2 } else { 1 };
        if zeros > max_run {
            return false;
        }

        zeros = 0;
        seen_one = true;
    }

    seen_one && zeros <= 1
}

/// Counts the dominating sets of the path on `n` nodes without enumerating them.
///
/// The automaton accepting dominating bitstrings has five live states: no one read yet with
/// zero or one pending zeros, and a one read with zero, one, or two trailing zeros.
///
/// # Example
/// ```
/// use pathdom::utils::count_dominating_sets;
/// assert_eq!(count_dominating_sets(5).unwrap(), 17);
/// ```
pub fn count_dominating_sets(n: u32) -> Result<u64> {
    check_width(n)?;

    // [leading_0, leading_1, trailing_0, trailing_1, trailing_2]
    let mut states = [1u64, 0, 0, 0, 0];
    for _ in 0..n {
        let [l0, l1, t0, t1, t2] = states;
        states = [0, l0, l0 + l1 + t0 + t1 + t2, t0, t1];
    }

    Ok(states[2] + states[3])
}

/// A subset of the vertices of a path graph, stored as its canonical bitstring.
/// The bitstring is validated on construction; its length is the number of nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathSubset {
    bits: String,
}

impl PathSubset {
    /// Builds the subset whose bitstring is `encode(value, width)`.
    pub fn from_value(value: u64, width: u32) -> Result<Self> {
        Ok(Self {
            bits: encode(value, width)?,
        })
    }

    /// Builds the subset of the path on `number_of_nodes` nodes selecting exactly `nodes`.
    ///
    /// # Example
    /// ```
    /// use pathdom::utils::PathSubset;
    /// let subset = PathSubset::from_nodes(5, [0, 3]).unwrap();
    /// assert_eq!(subset.as_str(), "10010");
    /// ```
    pub fn from_nodes(
        number_of_nodes: NumNodes,
        nodes: impl IntoIterator<Item = Node>,
    ) -> Result<Self> {
        if number_of_nodes == 0 {
            return Err(PathSetError::InvalidArgument(
                "a path needs at least one node".to_string(),
            ));
        }

        let mut bytes = vec![b'0'; number_of_nodes as usize];
        for u in nodes {
            if u >= number_of_nodes {
                return Err(PathSetError::InvalidArgument(format!(
                    "node {u} is not part of a path with {number_of_nodes} nodes"
                )));
            }
            bytes[u as usize] = b'1';
        }

        Ok(Self {
            bits: bytes.into_iter().map(char::from).collect(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.bits
    }

    /// Returns the base-2 value of the bitstring.
    pub fn value(&self) -> Result<u64> {
        decode(&self.bits)
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.bits.len() as NumNodes
    }

    pub fn graph(&self) -> PathGraph {
        PathGraph::new(self.number_of_nodes())
    }

    /// ** Panics if `u >= n` **
    pub fn is_selected(&self, u: Node) -> bool {
        self.bits.as_bytes()[u as usize] == b'1'
    }

    /// Returns an iterator over the selected nodes in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.bits
            .bytes()
            .enumerate()
            .filter_map(|(u, b)| (b == b'1').then_some(u as Node))
    }

    /// Returns the number of selected nodes.
    pub fn len(&self) -> usize {
        self.bits.bytes().filter(|&b| b == b'1').count()
    }

    /// Returns true if no node is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Computes for every node whether it is selected or has a selected neighbor.
    pub fn compute_covered(&self) -> Vec<bool> {
        let graph = self.graph();
        let mut covered = vec![false; graph.len()];

        for u in self.iter() {
            for v in graph.closed_neighborhood_of(u) {
                covered[v as usize] = true;
            }
        }

        covered
    }

    /// Returns true if the subset covers all nodes, computed from the neighborhoods of the
    /// selected nodes.
    pub fn is_valid(&self) -> bool {
        self.compute_covered().into_iter().all(|c| c)
    }

    /// Returns true if the subset is a dominating set; agrees with [`PathSubset::is_valid`].
    pub fn is_dominating(&self) -> bool {
        is_dominating_set_unchecked(&self.bits)
    }

    /// Writes the bitstring followed by a newline.
    ///
    /// ```
    /// use pathdom::utils::PathSubset;
    /// let subset: PathSubset = "0110".parse().unwrap();
    ///
    /// let mut buffer: Vec<u8> = Vec::new(); // implements Write
    /// subset.write(&mut buffer).unwrap();
    /// assert_eq!(buffer, b"0110\n");
    /// ```
    pub fn write<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        writeln!(&mut writer, "{}", self.bits)?;
        Ok(())
    }
}

impl InvariantCheck<PathSetError> for PathSubset {
    fn is_correct(&self) -> Result<()> {
        validate_bitstring(&self.bits)
    }
}

impl FromStr for PathSubset {
    type Err = PathSetError;

    fn from_str(s: &str) -> Result<Self> {
        validate_bitstring(s)?;
        Ok(Self {
            bits: s.to_string(),
        })
    }
}

impl TryFrom<&str> for PathSubset {
    type Error = PathSetError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<String> for PathSubset {
    type Error = PathSetError;

    fn try_from(value: String) -> Result<Self> {
        validate_bitstring(&value)?;
        Ok(Self { bits: value })
    }
}

impl AsRef<str> for PathSubset {
    fn as_ref(&self) -> &str {
        &self.bits
    }
}

impl fmt::Display for PathSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{enumeration::enumerate_subsets, testing::generate_random_bitstrings};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use rayon::prelude::*;
    use regex::Regex;

    fn dominated_by_neighbor_check(bits: &str) -> bool {
        let b = bits.as_bytes();
        (0..b.len()).all(|i| {
            b[i] == b'1' || (i > 0 && b[i - 1] == b'1') || b.get(i + 1) == Some(&b'1')
        })
    }

    #[test]
    fn concrete_cases() {
        for (bits, expected) in [
            ("10010", true),
            ("0", false),
            ("1", true),
            ("00", false),
            ("01", true),
            ("10", true),
            ("11", true),
            ("10101", true),
            ("10001", false),
            ("00101", false),
            ("01000", false),
            ("1001", true),
            ("0100", false),
        ] {
            assert_eq!(is_dominating_set(bits).unwrap(), expected, "bits: {bits}");
        }
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(
            is_dominating_set("10x"),
            Err(PathSetError::InvalidFormat {
                position: 2,
                found: Some('x')
            })
        );
        assert_eq!(is_dominating_set(""), Err(PathSetError::empty_input()));
    }

    #[test]
    fn matches_neighbor_check_exhaustively() {
        (1..=16u32).into_par_iter().for_each(|n| {
            for bits in enumerate_subsets(n).unwrap() {
                assert_eq!(
                    is_dominating_set(&bits).unwrap(),
                    dominated_by_neighbor_check(&bits),
                    "bits: {bits}"
                );
            }
        });
    }

    #[test]
    fn matches_regex() {
        let pattern = Regex::new(r"^0?1(0{0,2}1)*0?$").unwrap();
        for n in 1..=12 {
            for bits in enumerate_subsets(n).unwrap() {
                assert_eq!(
                    is_dominating_set(&bits).unwrap(),
                    pattern.is_match(&bits),
                    "bits: {bits}"
                );
            }
        }
    }

    #[test]
    fn long_random_bitstrings() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x1234);
        for bits in generate_random_bitstrings(&mut rng, 200).take(500) {
            let subset: PathSubset = bits.parse().unwrap();
            assert_eq!(subset.is_dominating(), subset.is_valid(), "bits: {bits}");
            assert_eq!(subset.is_dominating(), dominated_by_neighbor_check(&bits));
            assert_eq!(
                is_dominating_set(&bits).unwrap(),
                is_dominating_set(&bits).unwrap()
            );
        }
    }

    #[test]
    fn count_agrees_with_enumeration() {
        for n in 1..=14 {
            let enumerated = enumerate_subsets(n)
                .unwrap()
                .filter(|bits| is_dominating_set(bits).unwrap())
                .count() as u64;
            assert_eq!(count_dominating_sets(n).unwrap(), enumerated, "n: {n}");
        }
    }

    #[test]
    fn count_small_paths() {
        let counts = (1..=10).map(|n| count_dominating_sets(n).unwrap()).collect_vec();
        assert_eq!(counts, vec![1, 3, 5, 9, 17, 31, 57, 105, 193, 355]);
        assert!(count_dominating_sets(0).is_err());
        assert!(count_dominating_sets(63).unwrap() < 1 << 63);
    }

    #[test]
    fn subset_from_value_and_nodes() {
        let subset = PathSubset::from_value(18, 5).unwrap();
        assert_eq!(subset.as_str(), "10010");
        assert_eq!(subset.value().unwrap(), 18);
        assert_eq!(subset.iter().collect_vec(), vec![0, 3]);
        assert_eq!(subset.len(), 2);
        assert_eq!(subset.number_of_nodes(), 5);
        assert!(subset.is_selected(3));
        assert!(!subset.is_selected(4));
        assert_eq!(PathSubset::from_nodes(5, [3, 0]).unwrap(), subset);

        assert!(PathSubset::from_nodes(5, [5]).is_err());
        assert!(PathSubset::from_nodes(0, std::iter::empty()).is_err());
        assert!(PathSubset::from_value(32, 5).is_err());
    }

    #[test]
    fn subset_parsing() {
        let subset: PathSubset = "0100".parse().unwrap();
        assert!(subset.is_correct().is_ok());
        assert_eq!(subset.to_string(), "0100");
        assert_eq!(
            subset.compute_covered(),
            vec![true, true, true, false]
        );
        assert!(!subset.is_valid());
        assert!(!subset.is_dominating());

        assert!(PathSubset::try_from("01-0").is_err());
        assert!(PathSubset::try_from(String::new()).is_err());
        assert!(PathSubset::try_from("0000").unwrap().is_empty());
    }
}
