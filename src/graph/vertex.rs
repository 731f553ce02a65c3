//! Vertex identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex ID, unique within one graph instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub u64);

impl VertexId {
    /// Wrap a raw id
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id directly after this one, used by the allocator scan.
    /// Wraps from `u64::MAX` back to 0.
    pub(crate) fn successor(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
