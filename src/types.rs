//! Common types shared across the flow solver and its hosts

use serde::{Deserialize, Serialize};

/// Cost type for the solver (signed to allow negative residual costs)
pub type Cost = i64;

/// Node identifier: a dense index in `[0, num_nodes)`
pub type NodeId = usize;

/// Arc identifier: the insertion index returned by `ResidualGraph::add_arc`
pub type ArcId = usize;

/// Outcome of a single `Graph::solve` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowResult {
    /// Total flow actually routed from source to sink
    pub total_flow: u64,
    /// Total cost of the routed flow (`Σ arc.flow * arc.unit_cost`)
    pub total_cost: Cost,
    /// True iff `total_flow == demand`
    pub satisfied: bool,
    /// Wall-clock time spent inside `solve`, in milliseconds
    pub elapsed_time_ms: u64,
}

impl FlowResult {
    /// The trivial result for `demand == 0`: zero flow, zero cost, satisfied
    pub fn zero_demand() -> Self {
        Self {
            total_flow: 0,
            total_cost: 0,
            satisfied: true,
            elapsed_time_ms: 0,
        }
    }
}
