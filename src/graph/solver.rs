//! Augmentation driver: Successive Shortest Paths over the residual graph
//!
//! `Graph` is the public entry point: it owns a [`ResidualGraph`] and
//! drives the [`spfa::probe`] probe until `demand` is met or no augmenting
//! path remains.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::arc::Arc;
use crate::graph::residual::ResidualGraph;
use crate::graph::spfa;
use crate::types::{ArcId, Cost, FlowResult, NodeId};

/// A directed, capacitated, cost-weighted flow network with a min-cost
/// max-flow solver
#[derive(Debug, Clone)]
pub struct Graph {
    residual: ResidualGraph,
}

impl Graph {
    /// Allocate a graph with `num_nodes` nodes and no arcs
    pub fn new(num_nodes: usize) -> Self {
        Self {
            residual: ResidualGraph::new(num_nodes),
        }
    }

    /// Number of nodes in the graph
    pub fn num_nodes(&self) -> usize {
        self.residual.num_nodes()
    }

    /// Number of arcs currently in the graph
    pub fn arc_count(&self) -> usize {
        self.residual.arc_count()
    }

    /// Append an arc `tail -> head` with the given capacity and unit cost
    pub fn add_arc(
        &mut self,
        tail: NodeId,
        head: NodeId,
        capacity: i64,
        unit_cost: Cost,
    ) -> Result<ArcId> {
        self.residual.add_arc(tail, head, capacity, unit_cost)
    }

    /// Read-only access to an arc by index
    pub fn arc_at(&self, id: ArcId) -> Result<&Arc> {
        self.residual.arc_at(id)
    }

    /// Current flow carried by an arc
    pub fn arc_flow(&self, id: ArcId) -> Result<i64> {
        self.residual.arc_flow(id)
    }

    /// Compute a minimum-cost flow of value `min(demand, max-flow)` from
    /// `source` to `sink` using Successive Shortest Paths.
    ///
    /// Precondition failures ([`Error::InvalidNode`], [`Error::SameEndpoints`],
    /// [`Error::NegativeDemand`]) are raised before any arc is mutated.
    /// Running out of augmenting paths before `demand` is met is not an
    /// error: the call returns normally with `satisfied = false` and a
    /// valid partial flow.
    pub fn solve(&mut self, source: NodeId, sink: NodeId, demand: i64) -> Result<FlowResult> {
        let num_nodes = self.residual.num_nodes();
        if source >= num_nodes {
            return Err(Error::invalid_node(source));
        }
        if sink >= num_nodes {
            return Err(Error::invalid_node(sink));
        }
        if source == sink {
            return Err(Error::same_endpoints(source));
        }
        if demand < 0 {
            return Err(Error::negative_demand(demand));
        }
        if demand == 0 {
            return Ok(FlowResult::zero_demand());
        }

        let start = Instant::now();
        let mut total_flow: i64 = 0;
        let mut total_cost: Cost = 0;

        while total_flow < demand {
            let remaining = demand - total_flow;
            let result = spfa::probe(&mut self.residual, source, sink, remaining);
            if result.amount == 0 {
                break;
            }
            total_flow += result.amount;
            total_cost += result.amount * result.unit_path_cost;
            debug!(
                amount = result.amount,
                unit_cost = result.unit_path_cost,
                running_total = total_flow,
                "augmented flow along a cheapest residual path"
            );
        }

        let elapsed_time_ms = start.elapsed().as_millis() as u64;
        let satisfied = total_flow == demand;
        let flow_result = FlowResult {
            total_flow: total_flow as u64,
            total_cost,
            satisfied,
            elapsed_time_ms,
        };

        info!(
            num_nodes,
            num_arcs = self.residual.arc_count(),
            total_flow = flow_result.total_flow,
            total_cost = flow_result.total_cost,
            satisfied = flow_result.satisfied,
            elapsed_ms = flow_result.elapsed_time_ms,
            "min-cost flow solve complete"
        );

        Ok(flow_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_demand_is_trivially_satisfied_without_mutation() {
        let mut g = Graph::new(2);
        let arc = g.add_arc(0, 1, 5, 1).unwrap();
        let result = g.solve(0, 1, 0).unwrap();
        assert_eq!(result, FlowResult::zero_demand());
        assert_eq!(g.arc_flow(arc).unwrap(), 0);
    }

    #[test]
    fn same_source_and_sink_is_rejected() {
        let mut g = Graph::new(2);
        assert_eq!(g.solve(0, 0, 1).unwrap_err(), Error::same_endpoints(0));
    }

    #[test]
    fn negative_demand_is_rejected() {
        let mut g = Graph::new(2);
        assert_eq!(g.solve(0, 1, -5).unwrap_err(), Error::negative_demand(-5));
    }

    #[test]
    fn out_of_range_endpoints_are_rejected() {
        let mut g = Graph::new(2);
        assert_eq!(g.solve(5, 1, 1).unwrap_err(), Error::invalid_node(5));
        assert_eq!(g.solve(0, 5, 1).unwrap_err(), Error::invalid_node(5));
    }

    #[test]
    fn disconnected_endpoints_leave_zero_flow() {
        let mut g = Graph::new(3);
        g.add_arc(0, 1, 5, 1).unwrap();
        let result = g.solve(0, 2, 5).unwrap();
        assert_eq!(result.total_flow, 0);
        assert_eq!(result.total_cost, 0);
        assert!(!result.satisfied);
    }

    #[test]
    fn zero_capacity_arcs_never_carry_flow() {
        let mut g = Graph::new(3);
        let blocked = g.add_arc(0, 1, 0, 1).unwrap();
        g.add_arc(0, 2, 5, 1).unwrap();
        g.add_arc(2, 1, 5, 1).unwrap();
        g.solve(0, 1, 5).unwrap();
        assert_eq!(g.arc_flow(blocked).unwrap(), 0);
    }

    #[test]
    fn linear_chain_is_bottlenecked_by_the_narrower_arc() {
        let mut g = Graph::new(3);
        g.add_arc(0, 1, 5, 1).unwrap();
        g.add_arc(1, 2, 3, 1).unwrap();

        let result = g.solve(0, 2, 10).unwrap();
        assert_eq!(result.total_flow, 3);
        assert_eq!(result.total_cost, 6);
        assert!(!result.satisfied);
    }

    #[test]
    fn cheaper_path_is_saturated_before_the_expensive_one() {
        let mut g = Graph::new(4);
        g.add_arc(0, 1, 10, 1).unwrap();
        g.add_arc(0, 2, 10, 5).unwrap();
        g.add_arc(1, 3, 10, 1).unwrap();
        g.add_arc(2, 3, 10, 1).unwrap();

        let result = g.solve(0, 3, 15).unwrap();
        assert_eq!(result.total_flow, 15);
        // 10 units at unit cost 2 (0-1-3) + 5 units at unit cost 6 (0-2-3)
        assert_eq!(result.total_cost, 10 * 2 + 5 * 6);
        assert!(result.satisfied);
    }

    #[test]
    fn cdn_fan_out_routes_the_full_demand_at_minimum_cost() {
        let mut g = Graph::new(8);
        g.add_arc(0, 1, 100, 0).unwrap();
        g.add_arc(1, 2, 50, 5).unwrap();
        g.add_arc(1, 3, 50, 3).unwrap();
        g.add_arc(2, 4, 30, 2).unwrap();
        g.add_arc(2, 5, 30, 3).unwrap();
        g.add_arc(3, 5, 30, 1).unwrap();
        g.add_arc(3, 6, 30, 4).unwrap();
        g.add_arc(4, 7, 20, 0).unwrap();
        g.add_arc(5, 7, 30, 0).unwrap();
        g.add_arc(6, 7, 20, 0).unwrap();

        let result = g.solve(0, 7, 70).unwrap();
        assert_eq!(result.total_flow, 70);
        assert!(result.satisfied);
        // 30 units via 1-3-5-7 (cost 4) + 20 via 1-2-4-7 (cost 7)
        // + 20 via 1-3-6-7 (cost 7), all tied for the remaining demand
        assert_eq!(result.total_cost, 30 * 4 + 20 * 7 + 20 * 7);
    }

    #[test]
    fn infeasible_bottleneck_reports_unsatisfied() {
        let mut g = Graph::new(3);
        g.add_arc(0, 1, 5, 1).unwrap();
        g.add_arc(1, 2, 3, 1).unwrap();

        let result = g.solve(0, 2, 10).unwrap();
        assert_eq!(result.total_flow, 3);
        assert_eq!(result.total_cost, 6);
        assert!(!result.satisfied);
    }

    #[test]
    fn conservation_and_capacity_hold_after_solving() {
        let mut g = Graph::new(8);
        g.add_arc(0, 1, 100, 0).unwrap();
        g.add_arc(1, 2, 50, 5).unwrap();
        g.add_arc(1, 3, 50, 3).unwrap();
        g.add_arc(2, 4, 30, 2).unwrap();
        g.add_arc(2, 5, 30, 3).unwrap();
        g.add_arc(3, 5, 30, 1).unwrap();
        g.add_arc(3, 6, 30, 4).unwrap();
        g.add_arc(4, 7, 20, 0).unwrap();
        g.add_arc(5, 7, 30, 0).unwrap();
        g.add_arc(6, 7, 20, 0).unwrap();

        g.solve(0, 7, 70).unwrap();

        let mut inflow = vec![0i64; 8];
        let mut outflow = vec![0i64; 8];
        for id in 0..g.arc_count() {
            let arc = g.arc_at(id).unwrap();
            assert!(arc.flow() >= 0 && arc.flow() <= arc.capacity());
            outflow[arc.tail()] += arc.flow();
            inflow[arc.head()] += arc.flow();
        }
        for node in 0..8 {
            if node != 0 && node != 7 {
                assert_eq!(inflow[node], outflow[node], "conservation failed at node {node}");
            }
        }
    }
}
