use std::fmt;
use std::hash::Hash;

/// Compact node identifier within a single graph view.
///
/// Views number their nodes `0..node_count()`, so an index doubles as the
/// position in per-node arrays and as the tie-break key ("smallest
/// identifier") used by the candidate generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx {
    /// The underlying raw integer index.
    inner: u32,
}

impl NodeIdx {
    /// Creates a node index from a raw integer.
    pub const fn new(id: u32) -> Self {
        Self { inner: id }
    }

    /// Returns the index as a usize for array access.
    pub const fn as_usize(self) -> usize {
        self.inner as usize
    }
}

impl fmt::Display for NodeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.inner)
    }
}

impl From<usize> for NodeIdx {
    /// # Panics
    ///
    /// Panics if `id` does not fit in a `u32`.
    #[inline]
    fn from(id: usize) -> Self {
        let inner = u32::try_from(id).expect("node index exceeds u32::MAX");
        Self { inner }
    }
}

impl From<u32> for NodeIdx {
    #[inline]
    fn from(id: u32) -> Self {
        Self { inner: id }
    }
}

impl From<NodeIdx> for usize {
    #[inline]
    fn from(id: NodeIdx) -> Self {
        id.inner as Self
    }
}

impl From<NodeIdx> for u32 {
    #[inline]
    fn from(id: NodeIdx) -> Self {
        id.inner
    }
}
