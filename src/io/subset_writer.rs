use std::io::Write;

use crate::{
    enumeration::enumerate_subsets,
    utils::{PathSubset, dominating_set::is_dominating_set_unchecked, signal_handling},
};
use log::{info, warn};

/// Selects what [`SubsetWriter`] emits for every candidate bitstring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One dominating bitstring per line
    #[default]
    DominatingOnly,
    /// Every bitstring followed by ` 1` if it is dominating and ` 0` otherwise
    Classified,
    /// Only the number of dominating bitstrings
    CountOnly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub candidates: u64,
    pub dominating: u64,
    pub interrupted: bool,
}

/// Classifies candidate bitstrings and writes the result according to the [`OutputMode`].
/// Candidates either come from enumerating all subsets of a path or from a
/// [`SubsetReader`](super::SubsetReader).
pub struct SubsetWriter {
    mode: OutputMode,
    interrupted: fn() -> bool,
}

impl SubsetWriter {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            interrupted: signal_handling::received_ctrl_c,
        }
    }

    /// Replaces the Ctrl-C flag as the condition to stop between two candidates.
    pub fn with_interrupt(mut self, interrupted: fn() -> bool) -> Self {
        self.interrupted = interrupted;
        self
    }

    /// Enumerates all subsets of the path on `number_of_nodes` nodes in ascending order.
    pub fn try_write_path<W: Write>(
        &self,
        number_of_nodes: u32,
        writer: W,
    ) -> anyhow::Result<WriteSummary> {
        let subsets = enumerate_subsets(number_of_nodes)?;
        let width = subsets.width();

        let summary = self.write_candidates(subsets.map(Ok), writer)?;
        info!(
            "Path with {width} nodes: {} candidates, {} dominating sets",
            summary.candidates, summary.dominating
        );
        Ok(summary)
    }

    /// Classifies already parsed subsets, e.g. the entries of a [`SubsetReader`](super::SubsetReader).
    /// The first read error aborts; everything before it has been written.
    pub fn try_write_subsets<I, W>(&self, subsets: I, writer: W) -> anyhow::Result<WriteSummary>
    where
        I: IntoIterator<Item = std::io::Result<PathSubset>>,
        W: Write,
    {
        let summary = self.write_candidates(
            subsets.into_iter().map(|s| s.map_err(anyhow::Error::from)),
            writer,
        )?;
        info!(
            "Read {} bitstrings; {} are dominating",
            summary.candidates, summary.dominating
        );
        Ok(summary)
    }

    /// Stops early (and reports `interrupted`) if the interrupt condition holds; everything
    /// written up to that point is flushed.
    fn write_candidates<S, W>(
        &self,
        candidates: impl Iterator<Item = anyhow::Result<S>>,
        mut writer: W,
    ) -> anyhow::Result<WriteSummary>
    where
        S: AsRef<str>,
        W: Write,
    {
        let mut summary = WriteSummary::default();

        for candidate in candidates {
            if (self.interrupted)() {
                warn!("Interrupted after {} candidates", summary.candidates);
                summary.interrupted = true;
                break;
            }

            let candidate = match candidate {
                Ok(candidate) => candidate,
                Err(e) => {
                    writer.flush()?;
                    return Err(e);
                }
            };
            let bits = candidate.as_ref();

            let is_dominating = is_dominating_set_unchecked(bits);
            summary.candidates += 1;
            summary.dominating += is_dominating as u64;

            match self.mode {
                OutputMode::DominatingOnly if is_dominating => writeln!(writer, "{bits}")?,
                OutputMode::Classified => writeln!(writer, "{bits} {}", is_dominating as u8)?,
                _ => {}
            }
        }

        if self.mode == OutputMode::CountOnly {
            writeln!(writer, "{}", summary.dominating)?;
        }

        writer.flush()?;
        Ok(summary)
    }
}
