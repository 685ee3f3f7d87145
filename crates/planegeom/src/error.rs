use std::result::Result as StdResult;

use thiserror::Error;

/// Geometry error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A value that cannot stand in for a coordinate, factor or point was
    /// supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for geometry operations.
pub type Result<T> = StdResult<T, Error>;
