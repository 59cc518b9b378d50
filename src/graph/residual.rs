//! Residual graph: owns all arcs and the node-to-arc adjacency indices
//!
//! Node identifiers are dense integers in `[0, num_nodes)` fixed at
//! construction. The graph is append-only for arcs; `flow` fields mutate
//! during solving but the arc list itself never shrinks or reorders.

use crate::error::{Error, Result};
use crate::graph::arc::Arc;
use crate::types::{ArcId, Cost, NodeId};

/// A mutable residual graph over a fixed node set
#[derive(Debug, Clone)]
pub struct ResidualGraph {
    num_nodes: usize,
    arcs: Vec<Arc>,
    /// `out[n]`: arc indices whose tail is `n`
    out: Vec<Vec<ArcId>>,
    /// `in[n]`: arc indices whose head is `n`
    incoming: Vec<Vec<ArcId>>,
}

impl ResidualGraph {
    /// Allocate a node set of size `num_nodes` with an empty arc list
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            arcs: Vec::new(),
            out: vec![Vec::new(); num_nodes],
            incoming: vec![Vec::new(); num_nodes],
        }
    }

    /// Number of nodes in the graph
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of arcs currently in the graph
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if node >= self.num_nodes {
            return Err(Error::invalid_node(node));
        }
        Ok(())
    }

    /// Append a new arc `tail -> head` with the given capacity and unit
    /// cost, returning its arc index. Fails with [`Error::InvalidNode`] if
    /// `tail` or `head` is out of range, [`Error::SelfLoop`] if
    /// `tail == head`, or [`Error::InvalidCapacity`] if `capacity < 0`.
    pub fn add_arc(
        &mut self,
        tail: NodeId,
        head: NodeId,
        capacity: i64,
        unit_cost: Cost,
    ) -> Result<ArcId> {
        self.check_node(tail)?;
        self.check_node(head)?;
        if tail == head {
            return Err(Error::self_loop(tail));
        }
        let arc = Arc::new(tail, head, capacity, unit_cost)?;
        let id = self.arcs.len();
        self.arcs.push(arc);
        self.out[tail].push(id);
        self.incoming[head].push(id);
        Ok(id)
    }

    /// Read-only access to an arc by index
    pub fn arc_at(&self, id: ArcId) -> Result<&Arc> {
        self.arcs.get(id).ok_or_else(|| Error::invalid_arc(id))
    }

    /// Current flow on an arc, by index
    pub fn arc_flow(&self, id: ArcId) -> Result<i64> {
        self.arc_at(id).map(Arc::flow)
    }

    /// Mutable access to an arc by index, for the probe's augmentation step
    pub(crate) fn arc_mut(&mut self, id: ArcId) -> &mut Arc {
        &mut self.arcs[id]
    }

    /// Arc indices whose tail is `node`
    pub fn forward_arcs(&self, node: NodeId) -> &[ArcId] {
        &self.out[node]
    }

    /// Arc indices whose head is `node`
    pub fn incoming_arcs(&self, node: NodeId) -> &[ArcId] {
        &self.incoming[node]
    }

    /// Iterate over all arcs in insertion order
    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.arcs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_arc_rejects_out_of_range_nodes() {
        let mut g = ResidualGraph::new(3);
        assert_eq!(g.add_arc(0, 5, 1, 1).unwrap_err(), Error::invalid_node(5));
        assert_eq!(g.add_arc(5, 0, 1, 1).unwrap_err(), Error::invalid_node(5));
    }

    #[test]
    fn add_arc_rejects_self_loops() {
        let mut g = ResidualGraph::new(3);
        assert_eq!(g.add_arc(1, 1, 1, 1).unwrap_err(), Error::self_loop(1));
    }

    #[test]
    fn add_arc_rejects_negative_capacity() {
        let mut g = ResidualGraph::new(3);
        assert_eq!(
            g.add_arc(0, 1, -2, 1).unwrap_err(),
            Error::invalid_capacity(-2)
        );
    }

    #[test]
    fn add_arc_updates_adjacency() {
        let mut g = ResidualGraph::new(3);
        let a = g.add_arc(0, 1, 5, 2).unwrap();
        let b = g.add_arc(0, 2, 3, 1).unwrap();
        assert_eq!(g.forward_arcs(0), &[a, b]);
        assert_eq!(g.incoming_arcs(1), &[a]);
        assert_eq!(g.incoming_arcs(2), &[b]);
        assert_eq!(g.arc_count(), 2);
    }

    #[test]
    fn arc_at_out_of_range_is_invalid_arc() {
        let g = ResidualGraph::new(2);
        assert_eq!(g.arc_at(0).unwrap_err(), Error::invalid_arc(0));
    }
}
