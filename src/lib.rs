//! # cdn-mcmf
//!
//! A minimum-cost maximum-flow solver specialised for multi-layer CDN
//! routing: given a directed, capacitated, cost-weighted graph with a
//! single super-source and super-sink plus a target demand, compute an
//! integer flow that is maximal up to the demand cap and has the least
//! total cost among all such flows.
//!
//! ## Modules
//!
//! - [`graph`] - the solver itself: arc record, residual graph, SPFA
//!   shortest-path probe, Successive Shortest Paths augmentation driver
//! - [`scenario`] - synthetic CDN topology generation, used by benches,
//!   tests, and the `cdn-mcmf-bench` CLI host
//! - [`report`] - JSON record shapes for persisting scenario runs
//!
//! ## Quick Start
//!
//! ```rust
//! use cdn_mcmf::graph::Graph;
//!
//! let mut g = Graph::new(3);
//! g.add_arc(0, 1, 5, 1).unwrap();
//! g.add_arc(1, 2, 3, 1).unwrap();
//!
//! let result = g.solve(0, 2, 10).unwrap();
//! assert_eq!(result.total_flow, 3);
//! assert!(!result.satisfied); // demand of 10 exceeds the 1->2 bottleneck
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod graph;
pub mod report;
pub mod scenario;

mod error;
mod types;

pub use error::{Error, Result};
pub use types::*;

/// Prelude for common imports
pub mod prelude {
    pub use crate::graph::{Arc, Graph, ResidualGraph};
    pub use crate::report::{Report, ScaleRecord, ScalabilityRecord};
    pub use crate::scenario::{Scale, ScenarioParams, Topology};
    pub use crate::Error;
    pub use crate::Result;
    pub use crate::{ArcId, Cost, FlowResult, NodeId};
}
