use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use log::{info, warn};
use pathdom::{
    io::{OutputMode, SubsetReader, SubsetWriter},
    log::build_pace_logger_for_verbosity,
    utils::{count_dominating_sets, signal_handling},
};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(about = "Lists the dominating sets of a path graph as bitstrings")]
struct Opts {
    /// Number of nodes of the path graph
    #[structopt(short, long, default_value = "5")]
    nodes: u32,

    /// Classify the bitstrings of this file (one per line) instead of enumerating
    #[structopt(short, long)]
    input: Option<PathBuf>,

    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Only print the number of dominating sets
    #[structopt(short, long)]
    count_only: bool,

    /// Print every candidate followed by its classification (0 or 1)
    #[structopt(long)]
    print_all: bool,

    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

impl Opts {
    fn output_mode(&self) -> OutputMode {
        if self.count_only {
            OutputMode::CountOnly
        } else if self.print_all {
            OutputMode::Classified
        } else {
            OutputMode::DominatingOnly
        }
    }
}

fn open_writer(path: &Option<PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    if let Some(path) = path {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    } else {
        Ok(Box::new(BufWriter::new(std::io::stdout().lock())))
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_pace_logger_for_verbosity(opts.verbose);
    signal_handling::initialize()?;

    let writer = open_writer(&opts.output)?;
    let subset_writer = SubsetWriter::new(opts.output_mode());

    let summary = if let Some(path) = &opts.input {
        info!("Classify bitstrings of {path:?}");
        subset_writer.try_write_subsets(SubsetReader::try_from_file(path)?, writer)?
    } else {
        info!(
            "Path with {} nodes has {} dominating sets",
            opts.nodes,
            count_dominating_sets(opts.nodes)?
        );
        subset_writer.try_write_path(opts.nodes, writer)?
    };
    if summary.interrupted {
        warn!("Output is incomplete");
    }

    Ok(())
}
