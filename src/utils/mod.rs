pub mod dominating_set;
pub mod signal_handling;

pub use dominating_set::*;
