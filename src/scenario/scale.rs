//! Preset scenario scales and the scalability sweep
//!
//! Mirrors the three fixed benchmark sizes used by this repository's
//! timing harness (`small_scale`, `medium_scale`, `large_scale`) plus an
//! increasing sweep (`scalability`) used to show how solve time grows
//! with topology size.

use super::topology::ScenarioParams;

/// A named preset scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// A handful of origins/caches/edge-servers
    Small,
    /// Tens of nodes per layer
    Medium,
    /// Hundreds of nodes per layer
    Large,
}

impl Scale {
    /// Human-readable name, used as the JSON report key prefix
    pub fn name(self) -> &'static str {
        match self {
            Scale::Small => "small_scale",
            Scale::Medium => "medium_scale",
            Scale::Large => "large_scale",
        }
    }

    /// Default generation parameters for this scale
    pub fn params(self, seed: u64) -> ScenarioParams {
        let (num_origins, num_caches, num_edge_servers) = match self {
            Scale::Small => (2, 4, 6),
            Scale::Medium => (5, 15, 25),
            Scale::Large => (10, 40, 80),
        };
        ScenarioParams {
            num_origins,
            num_caches,
            num_edge_servers,
            capacity_range: (5, 50),
            cost_range: (1, 20),
            seed,
        }
    }

    /// All three preset scales, in ascending order
    pub fn all() -> [Scale; 3] {
        [Scale::Small, Scale::Medium, Scale::Large]
    }
}

/// Build the sequence of scenario parameters for the scalability sweep:
/// origin/cache counts grow linearly while edge-server count grows with
/// them, so the topology's width (and therefore arc count) increases
/// roughly quadratically across the sweep.
pub fn scalability_sweep(steps: usize, seed: u64) -> Vec<ScenarioParams> {
    (1..=steps)
        .map(|step| ScenarioParams {
            num_origins: step * 2,
            num_caches: step * 5,
            num_edge_servers: step * 8,
            capacity_range: (5, 50),
            cost_range: (1, 20),
            seed: seed.wrapping_add(step as u64),
        })
        .collect()
}
