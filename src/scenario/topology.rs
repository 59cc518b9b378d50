//! Synthetic CDN topology generation
//!
//! Builds a layered super-source -> origins -> caches -> edge-servers ->
//! super-sink graph with randomised (but seeded, reproducible) capacities
//! and costs, for exercising the solver the way a real CDN's routing
//! problem is shaped: a handful of origins feeding a wider layer of
//! caches, fanning out further to edge servers closest to end users.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;
use crate::types::NodeId;

/// Knobs for generating one synthetic CDN topology
#[derive(Debug, Clone, Copy)]
pub struct ScenarioParams {
    /// Number of origin nodes fed directly by the super-source
    pub num_origins: usize,
    /// Number of cache nodes between origins and edge servers
    pub num_caches: usize,
    /// Number of edge-server nodes feeding the super-sink
    pub num_edge_servers: usize,
    /// Capacity range for origin -> cache and cache -> edge-server arcs
    pub capacity_range: (i64, i64),
    /// Unit-cost range for origin -> cache and cache -> edge-server arcs
    pub cost_range: (i64, i64),
    /// RNG seed, for reproducible benchmark runs
    pub seed: u64,
}

impl ScenarioParams {
    /// Number of nodes the resulting graph will have:
    /// source + origins + caches + edge servers + sink
    pub fn num_nodes(&self) -> usize {
        2 + self.num_origins + self.num_caches + self.num_edge_servers
    }
}

/// A generated topology plus its designated source and sink nodes
pub struct Topology {
    /// The underlying flow network
    pub graph: Graph,
    /// The super-source node
    pub source: NodeId,
    /// The super-sink node
    pub sink: NodeId,
}

/// Build a random layered CDN topology from `params`
pub fn build(params: &ScenarioParams) -> Topology {
    let mut rng = StdRng::seed_from_u64(params.seed);

    let source: NodeId = 0;
    let origins: Vec<NodeId> = (0..params.num_origins).map(|i| 1 + i).collect();
    let caches_start = 1 + params.num_origins;
    let caches: Vec<NodeId> = (0..params.num_caches).map(|i| caches_start + i).collect();
    let edge_start = caches_start + params.num_caches;
    let edge_servers: Vec<NodeId> = (0..params.num_edge_servers)
        .map(|i| edge_start + i)
        .collect();
    let sink: NodeId = edge_start + params.num_edge_servers;

    let mut graph = Graph::new(params.num_nodes());

    // Super-source feeds every origin at zero cost, generously capacitated
    // so the bottleneck always sits further downstream.
    let source_capacity = (params.num_origins as i64) * params.capacity_range.1;
    for &origin in &origins {
        graph
            .add_arc(source, origin, source_capacity, 0)
            .expect("source -> origin arc is well-formed");
    }

    for &origin in &origins {
        for &cache in &caches {
            let capacity = rng.gen_range(params.capacity_range.0..=params.capacity_range.1);
            let cost = rng.gen_range(params.cost_range.0..=params.cost_range.1);
            graph
                .add_arc(origin, cache, capacity, cost)
                .expect("origin -> cache arc is well-formed");
        }
    }

    for &cache in &caches {
        for &edge in &edge_servers {
            let capacity = rng.gen_range(params.capacity_range.0..=params.capacity_range.1);
            let cost = rng.gen_range(params.cost_range.0..=params.cost_range.1);
            graph
                .add_arc(cache, edge, capacity, cost)
                .expect("cache -> edge-server arc is well-formed");
        }
    }

    let sink_capacity = (params.num_edge_servers as i64) * params.capacity_range.1;
    for &edge in &edge_servers {
        graph
            .add_arc(edge, sink, sink_capacity, 0)
            .expect("edge-server -> sink arc is well-formed");
    }

    Topology {
        graph,
        source,
        sink,
    }
}
