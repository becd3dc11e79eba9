pub mod encoding;
pub mod enumeration;
pub mod errors;
pub mod graph;
pub mod io;
pub mod log;
pub mod utils;

pub mod prelude {
    pub use super::encoding::*;
    pub use super::enumeration::*;
    pub use super::errors::{InvariantCheck, PathSetError};
    pub use super::graph::*;
    pub use super::io::*;
    pub use super::utils::*;
}

#[cfg(test)]
mod testing;
