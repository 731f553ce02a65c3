//! Error types

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the fallible graph mutations.
///
/// Lookups and removals never fail; they report absence with `None` or do
/// nothing. Both variants are raised before any state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("vertex id {0} is already in use")]
    IndexAlreadyInUse(VertexId),

    #[error("vertex {0} does not exist")]
    VertexDoesNotExist(VertexId),
}
