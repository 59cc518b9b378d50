//! Shortest-path probe: one SPFA run over the current residual graph
//!
//! SPFA (a queue-based Bellman-Ford refinement) is mandatory rather than
//! Dijkstra because flow cancellation introduces negative-cost reverse
//! arcs into the residual graph once any flow has been pushed.

use std::collections::VecDeque;
use tracing::warn;

use crate::graph::residual::ResidualGraph;
use crate::types::{ArcId, Cost, NodeId};

/// `(max signed integer) / 2` — large enough that `d[u] + arc_cost` cannot
/// wrap even when both addends sit near the sentinel.
const INFINITY: i64 = i64::MAX / 2;

/// Outcome of one probe: the bottleneck capacity pushed and the per-unit
/// cost of the path it was pushed along. `(0, 0)` means no augmenting path
/// was found (or the probe aborted on an internal invariant violation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    /// Flow pushed by this probe
    pub amount: i64,
    /// Sum of residual unit costs along the path that carried it
    pub unit_path_cost: Cost,
}

impl ProbeResult {
    fn none() -> Self {
        Self {
            amount: 0,
            unit_path_cost: 0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Parent {
    arc: ArcId,
    /// Whether this arc was traversed against its stored (tail -> head)
    /// direction, i.e. via its reverse residual capacity
    reversed: bool,
}

/// Find a minimum-unit-cost `source -> sink` path in the current residual
/// graph, capped at `cap` and at the path's own bottleneck, and replay it
/// as an augmentation (forward arcs via `augment`, reverse arcs via
/// `cancel`). Returns `(0, 0)` if no path exists.
pub fn probe(graph: &mut ResidualGraph, source: NodeId, sink: NodeId, cap: i64) -> ProbeResult {
    let n = graph.num_nodes();
    let mut dist = vec![INFINITY; n];
    let mut parent: Vec<Option<Parent>> = vec![None; n];
    let mut in_queue = vec![false; n];
    let mut queue = VecDeque::new();

    dist[source] = 0;
    queue.push_back(source);
    in_queue[source] = true;

    // Defensive belt: a correctly used solver never starves no negative
    // cycle should ever survive in the residual graph, so this never trips.
    let relax_budget = 10 * n * n;
    let mut relax_pops = 0usize;

    while let Some(u) = queue.pop_front() {
        in_queue[u] = false;
        relax_pops += 1;
        if relax_pops > relax_budget {
            warn!(
                budget = relax_budget,
                "SPFA relaxation budget exceeded, residual graph likely has a negative-cost cycle"
            );
            return ProbeResult::none();
        }

        let du = dist[u];

        for &arc_id in graph.forward_arcs(u) {
            let arc = graph.arc_at(arc_id).expect("forward arc index from adjacency is valid");
            if arc.forward_residual_capacity() <= 0 {
                continue;
            }
            let v = arc.head();
            let candidate = du + arc.forward_residual_cost();
            if candidate < dist[v] {
                dist[v] = candidate;
                parent[v] = Some(Parent {
                    arc: arc_id,
                    reversed: false,
                });
                if !in_queue[v] {
                    in_queue[v] = true;
                    queue.push_back(v);
                }
            }
        }

        for &arc_id in graph.incoming_arcs(u) {
            let arc = graph.arc_at(arc_id).expect("incoming arc index from adjacency is valid");
            if arc.reverse_residual_capacity() <= 0 {
                continue;
            }
            let v = arc.tail();
            let candidate = du + arc.reverse_residual_cost();
            if candidate < dist[v] {
                dist[v] = candidate;
                parent[v] = Some(Parent {
                    arc: arc_id,
                    reversed: true,
                });
                if !in_queue[v] {
                    in_queue[v] = true;
                    queue.push_back(v);
                }
            }
        }
    }

    if dist[sink] >= INFINITY {
        return ProbeResult::none();
    }

    let mut bottleneck = cap;
    let mut path = Vec::new();
    let mut node = sink;
    let mut steps = 0usize;

    while node != source {
        steps += 1;
        if steps > n + 1 {
            warn!("SPFA path-walk step bound exceeded, parent chain looks corrupted");
            return ProbeResult::none();
        }
        let Some(p) = parent[node] else {
            warn!(node, "SPFA path walk hit a node with no parent before reaching source");
            return ProbeResult::none();
        };
        let arc = graph.arc_at(p.arc).expect("parent arc index is valid");
        let residual = if p.reversed {
            arc.reverse_residual_capacity()
        } else {
            arc.forward_residual_capacity()
        };
        bottleneck = bottleneck.min(residual);
        node = if p.reversed { arc.head() } else { arc.tail() };
        path.push(p);
    }

    path.reverse();
    for p in &path {
        let arc = graph.arc_mut(p.arc);
        if p.reversed {
            arc.cancel(bottleneck);
        } else {
            arc.augment(bottleneck);
        }
    }

    ProbeResult {
        amount: bottleneck,
        unit_path_cost: dist[sink],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_returns_zero() {
        let mut g = ResidualGraph::new(2);
        let result = probe(&mut g, 0, 1, 10);
        assert_eq!(result, ProbeResult::none());
    }

    #[test]
    fn picks_the_cheaper_of_two_parallel_paths() {
        let mut g = ResidualGraph::new(4);
        g.add_arc(0, 1, 10, 1).unwrap();
        g.add_arc(0, 2, 10, 5).unwrap();
        g.add_arc(1, 3, 10, 1).unwrap();
        g.add_arc(2, 3, 10, 1).unwrap();

        let result = probe(&mut g, 0, 3, 100);
        assert_eq!(result.amount, 10);
        assert_eq!(result.unit_path_cost, 2);
    }

    #[test]
    fn caps_at_the_supplied_bound() {
        let mut g = ResidualGraph::new(3);
        g.add_arc(0, 1, 10, 1).unwrap();
        g.add_arc(1, 2, 10, 1).unwrap();

        let result = probe(&mut g, 0, 2, 4);
        assert_eq!(result.amount, 4);
    }

    #[test]
    fn successive_probes_exhaust_the_cheap_path_before_the_expensive_one() {
        // 0->1 (1,1), 0->2 (1,100), 1->2 (1,1), 1->3 (1,1), 2->3 (1,1)
        let mut g = ResidualGraph::new(4);
        g.add_arc(0, 1, 1, 1).unwrap();
        g.add_arc(0, 2, 1, 100).unwrap();
        g.add_arc(1, 2, 1, 1).unwrap();
        g.add_arc(1, 3, 1, 1).unwrap();
        g.add_arc(2, 3, 1, 1).unwrap();

        let first = probe(&mut g, 0, 3, 10);
        assert_eq!(first.amount, 1);
        assert_eq!(first.unit_path_cost, 2); // 0->1->3

        let second = probe(&mut g, 0, 3, 10);
        assert_eq!(second.amount, 1);
        assert_eq!(second.unit_path_cost, 101); // 0->2->3, the only remaining path
    }

    #[test]
    fn cancellation_reroutes_flow_when_a_cheaper_combined_path_exists() {
        // 0->1 (1,1), 1->2 (1,1), 0->2 (1,3): sending 0->1->2 first, then a
        // second unit from 0 can only reach 2 via the expensive direct arc,
        // but a third party who wants to reach node 1 from 2 can cancel the
        // first unit's 1->2 leg via its reverse residual arc.
        let mut g = ResidualGraph::new(3);
        g.add_arc(0, 1, 1, 1).unwrap();
        g.add_arc(1, 2, 1, 1).unwrap();
        g.add_arc(0, 2, 1, 3).unwrap();

        let first = probe(&mut g, 0, 2, 10);
        assert_eq!(first.amount, 1);
        assert_eq!(first.unit_path_cost, 2); // 0->1->2
        assert_eq!(g.arc_at(0).unwrap().flow(), 1);
        assert_eq!(g.arc_at(1).unwrap().flow(), 1);

        // Now probe 2 -> 1: the only way there is cancelling 1->2's flow.
        let second = probe(&mut g, 2, 1, 10);
        assert_eq!(second.amount, 1);
        assert_eq!(second.unit_path_cost, -1);
        assert_eq!(g.arc_at(1).unwrap().flow(), 0);
    }
}
