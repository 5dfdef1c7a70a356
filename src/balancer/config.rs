//! Engine configuration.
//!
//! The machine-group vocabulary and the tuning constants of the reference
//! behavior live here rather than in the algorithm code. Defaults
//! reproduce the factory's standard line setup.

use serde::{Deserialize, Serialize};

/// Default machine-group vocabulary of the line.
pub(crate) const DEFAULT_MACHINE_GROUPS: [&str; 6] = [
    "Single Needle",
    "Double Needle",
    "Overlock",
    "Coverstitch",
    "Special Machine",
    "Finishing/Ironing",
];

/// Machine groups exempt from the adjacency rule and excluded from
/// scarcity ordering (auxiliary/finishing categories, staffed last).
pub(crate) const DEFAULT_SPECIAL_MACHINES: [&str; 2] = ["Special Machine", "Finishing/Ironing"];

/// Tuning parameters for a balancing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancerConfig {
    /// Known machine-group tags.
    pub machine_groups: Vec<String>,
    /// Subset of `machine_groups` exempt from adjacency and scarcity.
    pub special_machines: Vec<String>,
    /// Maximum concurrent assignments per worker.
    pub max_assignments_per_worker: usize,
    /// Cap on each operation's initial worker requirement; later passes
    /// may still add workers subject to the per-worker cap.
    pub max_initial_requirement: usize,
    /// Excess threshold as a multiple of target output.
    pub excess_ratio: f64,
    /// Bottleneck threshold as a multiple of target output.
    pub bottleneck_ratio: f64,
    /// Iteration budget for the capacity rebalancer.
    pub max_rebalance_iterations: usize,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            machine_groups: DEFAULT_MACHINE_GROUPS.iter().map(|s| s.to_string()).collect(),
            special_machines: DEFAULT_SPECIAL_MACHINES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_assignments_per_worker: 3,
            max_initial_requirement: 3,
            excess_ratio: 1.10,
            bottleneck_ratio: 0.90,
            max_rebalance_iterations: 100,
        }
    }
}

impl BalancerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the machine-group vocabulary.
    pub fn with_machine_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.machine_groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the special (adjacency-exempt) machine subset.
    pub fn with_special_machines<I, S>(mut self, machines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_machines = machines.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the output band around target as (bottleneck, excess) ratios.
    pub fn with_output_band(mut self, bottleneck_ratio: f64, excess_ratio: f64) -> Self {
        self.bottleneck_ratio = bottleneck_ratio;
        self.excess_ratio = excess_ratio;
        self
    }

    /// Sets the per-worker assignment cap.
    pub fn with_max_assignments_per_worker(mut self, cap: usize) -> Self {
        self.max_assignments_per_worker = cap;
        self
    }

    /// Sets the rebalancer iteration budget.
    pub fn with_max_rebalance_iterations(mut self, iterations: usize) -> Self {
        self.max_rebalance_iterations = iterations;
        self
    }

    /// Whether a machine group is in the special (exempt) subset.
    pub fn is_special(&self, machine: &str) -> bool {
        self.special_machines.iter().any(|m| m == machine)
    }
}
