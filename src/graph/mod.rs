//! Minimum-cost maximum-flow solver for CDN routing
//!
//! The solver decomposes into four pieces, leaves first:
//!
//! - [`arc`] — one directed, capacitated, cost-weighted arc and its flow
//! - [`residual`] — the mutable residual graph that owns all arcs
//! - [`spfa`] — the shortest-path probe (SPFA, tolerant of negative
//!   residual costs introduced by cancellation)
//! - [`solver`] — the Successive Shortest Paths augmentation driver,
//!   exposed as [`Graph::solve`]
//!
//! ## Example
//!
//! ```rust
//! use cdn_mcmf::graph::Graph;
//!
//! let mut g = Graph::new(4);
//! g.add_arc(0, 1, 10, 1).unwrap();
//! g.add_arc(0, 2, 10, 5).unwrap();
//! g.add_arc(1, 3, 10, 1).unwrap();
//! g.add_arc(2, 3, 10, 1).unwrap();
//!
//! let result = g.solve(0, 3, 15).unwrap();
//! assert_eq!(result.total_flow, 15);
//! assert!(result.satisfied);
//! ```

pub mod arc;
pub mod residual;
pub mod solver;
pub mod spfa;

pub use arc::Arc;
pub use residual::ResidualGraph;
pub use solver::Graph;
pub use spfa::ProbeResult;
