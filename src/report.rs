//! JSON emission for scenario runs
//!
//! Not part of the solver's core contract — a host-side convenience for
//! persisting timing/cost results from the scenario harness, in the shape
//! downstream tooling already expects: a single object with four
//! top-level keys (`small_scale`, `medium_scale`, `large_scale`,
//! `scalability`), each an array of per-run records.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::scenario::{self, Scale, ScenarioParams};
use crate::types::Cost;

/// One run's record for the three preset scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleRecord {
    /// Wall-clock time spent inside `solve`, in milliseconds
    pub elapsed_ms: u64,
    /// Total flow realised
    pub flow: u64,
    /// Total cost of the realised flow
    pub cost: Cost,
    /// Number of nodes in the generated topology
    pub total_nodes: usize,
    /// Number of arcs in the generated topology
    pub num_edges: usize,
}

/// One run's record for the scalability sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalabilityRecord {
    /// Wall-clock time spent inside `solve`, in milliseconds
    pub elapsed_time_ms: u64,
    /// Total flow realised
    pub flow: u64,
    /// Total cost of the realised flow
    pub cost: Cost,
    /// Number of nodes in the generated topology
    pub total_nodes: usize,
    /// Index of this run within the sweep, starting at 1
    pub scale: usize,
    /// Number of origin nodes in this run's topology
    pub num_origins: usize,
    /// Number of cache nodes in this run's topology
    pub num_caches: usize,
    /// Number of arcs in this run's topology
    pub num_edges: usize,
}

/// The full scenario report, serialised as a single JSON object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    /// Runs at [`Scale::Small`]
    pub small_scale: Vec<ScaleRecord>,
    /// Runs at [`Scale::Medium`]
    pub medium_scale: Vec<ScaleRecord>,
    /// Runs at [`Scale::Large`]
    pub large_scale: Vec<ScaleRecord>,
    /// The increasing-size scalability sweep
    pub scalability: Vec<ScalabilityRecord>,
}

/// Run one scenario at a preset [`Scale`] end-to-end (build, solve) and
/// record the outcome
fn run_scale(scale: Scale, seed: u64, demand: i64) -> Result<ScaleRecord> {
    let params = scale.params(seed);
    let mut topology = scenario::build(&params);
    let result = topology.graph.solve(topology.source, topology.sink, demand)?;
    Ok(ScaleRecord {
        elapsed_ms: result.elapsed_time_ms,
        flow: result.total_flow,
        cost: result.total_cost,
        total_nodes: topology.graph.num_nodes(),
        num_edges: topology.graph.arc_count(),
    })
}

fn run_scalability_step(
    step: usize,
    params: &ScenarioParams,
    demand: i64,
) -> Result<ScalabilityRecord> {
    let mut topology = scenario::build(params);
    let result = topology.graph.solve(topology.source, topology.sink, demand)?;
    Ok(ScalabilityRecord {
        elapsed_time_ms: result.elapsed_time_ms,
        flow: result.total_flow,
        cost: result.total_cost,
        total_nodes: topology.graph.num_nodes(),
        scale: step,
        num_origins: params.num_origins,
        num_caches: params.num_caches,
        num_edges: topology.graph.arc_count(),
    })
}

/// Build and solve scenarios at every scale, plus a `sweep_steps`-long
/// scalability sweep, and collect the results into a [`Report`]
pub fn run_all(seed: u64, demand: i64, sweep_steps: usize) -> Result<Report> {
    let mut report = Report::default();

    for scale in Scale::all() {
        let record = run_scale(scale, seed, demand)?;
        info!(scale = scale.name(), ?record, "scenario run complete");
        match scale {
            Scale::Small => report.small_scale.push(record),
            Scale::Medium => report.medium_scale.push(record),
            Scale::Large => report.large_scale.push(record),
        }
    }

    for (index, params) in scenario::scalability_sweep(sweep_steps, seed).iter().enumerate() {
        let record = run_scalability_step(index + 1, params, demand)?;
        info!(step = index + 1, ?record, "scalability sweep step complete");
        report.scalability.push(record);
    }

    Ok(report)
}
