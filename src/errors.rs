use std::error::Error;

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> std::result::Result<(), E>;
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum PathSetError {
    #[error(
        "invalid bitstring: expected '0' or '1' at position {position}, found {}",
        describe_found(.found)
    )]
    InvalidFormat { position: usize, found: Option<char> },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("value {value} does not fit into {width} bits")]
    OutOfRange { value: u64, width: u32 },
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{c}'"),
        None => "end of input".to_string(),
    }
}

impl PathSetError {
    /// Error for an empty bitstring; there is no character to report.
    pub fn empty_input() -> Self {
        Self::InvalidFormat {
            position: 0,
            found: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PathSetError>;
