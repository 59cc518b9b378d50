//! Arc record: one directed, capacitated, cost-weighted connection
//!
//! An arc is an immutable `(tail, head, capacity, unit_cost)` tuple paired
//! with a single mutable `flow` field. The residual graph is the only
//! caller allowed to mutate `flow`, via [`Arc::augment`] and [`Arc::cancel`].

use crate::error::Error;
use crate::types::{Cost, NodeId};

/// A directed arc in the flow network, with its current flow
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    tail: NodeId,
    head: NodeId,
    capacity: i64,
    unit_cost: Cost,
    flow: i64,
}

impl Arc {
    /// Construct a new arc. Fails with [`Error::InvalidCapacity`] if
    /// `capacity < 0`. Self-loops are rejected by the residual graph, not
    /// here, since the arc record alone has no node-count context.
    pub fn new(tail: NodeId, head: NodeId, capacity: i64, unit_cost: Cost) -> Result<Self, Error> {
        if capacity < 0 {
            return Err(Error::invalid_capacity(capacity));
        }
        Ok(Self {
            tail,
            head,
            capacity,
            unit_cost,
            flow: 0,
        })
    }

    /// The tail (origin) node
    pub fn tail(&self) -> NodeId {
        self.tail
    }

    /// The head (destination) node
    pub fn head(&self) -> NodeId {
        self.head
    }

    /// The arc's capacity, as given at construction
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// The arc's unit cost, as given at construction
    pub fn unit_cost(&self) -> Cost {
        self.unit_cost
    }

    /// Current flow on this arc, in `[0, capacity]`
    pub fn flow(&self) -> i64 {
        self.flow
    }

    /// Residual capacity in the forward direction: `capacity - flow`
    pub fn forward_residual_capacity(&self) -> i64 {
        self.capacity - self.flow
    }

    /// Residual capacity in the reverse direction: `flow`
    pub fn reverse_residual_capacity(&self) -> i64 {
        self.flow
    }

    /// Residual unit cost in the forward direction: `unit_cost`
    pub fn forward_residual_cost(&self) -> Cost {
        self.unit_cost
    }

    /// Residual unit cost in the reverse direction: `-unit_cost`
    pub fn reverse_residual_cost(&self) -> Cost {
        -self.unit_cost
    }

    /// Push `delta` units of additional flow onto this arc
    pub fn augment(&mut self, delta: i64) {
        self.flow += delta;
    }

    /// Retract `delta` units of flow from this arc (used when an
    /// augmenting path traverses the arc in reverse)
    pub fn cancel(&mut self, delta: i64) {
        self.flow -= delta;
    }
}
