pub mod subset_reader;
pub use subset_reader::SubsetReader;
pub mod subset_writer;
pub use subset_writer::*;
