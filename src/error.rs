//! Error types for cdn-mcmf

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or solving a flow network
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A node index was outside `[0, num_nodes)`
    #[error("invalid node: {0}")]
    InvalidNode(usize),

    /// An arc's tail and head were the same node
    #[error("self loop at node {0}")]
    SelfLoop(usize),

    /// A negative capacity was supplied
    #[error("invalid capacity: {0}")]
    InvalidCapacity(i64),

    /// `solve` was called with `source == sink`
    #[error("source and sink must differ, both are {0}")]
    SameEndpoints(usize),

    /// `solve` was called with a negative demand
    #[error("negative demand: {0}")]
    NegativeDemand(i64),

    /// An arc index was outside `[0, arc_count)`
    #[error("invalid arc index: {0}")]
    InvalidArc(usize),
}

impl Error {
    /// Construct an [`Error::InvalidNode`]
    pub fn invalid_node(node: usize) -> Self {
        Self::InvalidNode(node)
    }

    /// Construct an [`Error::SelfLoop`]
    pub fn self_loop(node: usize) -> Self {
        Self::SelfLoop(node)
    }

    /// Construct an [`Error::InvalidCapacity`]
    pub fn invalid_capacity(capacity: i64) -> Self {
        Self::InvalidCapacity(capacity)
    }

    /// Construct an [`Error::SameEndpoints`]
    pub fn same_endpoints(node: usize) -> Self {
        Self::SameEndpoints(node)
    }

    /// Construct an [`Error::NegativeDemand`]
    pub fn negative_demand(demand: i64) -> Self {
        Self::NegativeDemand(demand)
    }

    /// Construct an [`Error::InvalidArc`]
    pub fn invalid_arc(arc: usize) -> Self {
        Self::InvalidArc(arc)
    }
}
