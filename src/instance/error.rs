use std::path::PathBuf;

use crate::cdt::CdtError;
use crate::search::UnknownMethod;

/// Errors raised while reading, validating or writing instance files.
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} has {actual} entries but {expected} were declared")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field} references point {index}, but only {len} points exist")]
    IndexOutOfRange {
        field: &'static str,
        index: usize,
        len: usize,
    },

    #[error("region boundary needs at least 3 vertices, got {0}")]
    RegionTooSmall(usize),

    #[error("points {first} and {second} coincide")]
    DuplicatePoint { first: usize, second: usize },

    #[error("cannot triangulate instance: {0}")]
    Triangulation(#[from] CdtError),

    #[error(transparent)]
    Method(#[from] UnknownMethod),
}
