//! Output calculation and line KPIs.
//!
//! A worker performing several operations contributes to each
//! proportionally: their hourly throughput (3600 / actual_time) and
//! their time load are both divided by the number of operations they
//! hold. Balance efficiency is the ratio of the least- to most-loaded
//! worker, the line's headline evenness metric.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Assignment;

/// Hourly output per operation, computed from an assignment set.
///
/// `output(op) = Σ (3600 / actual_time) / operations_held(worker)` over
/// the operation's assignments. Infeasible records contribute nothing.
/// Operations without assignments are absent from the map.
pub fn hourly_outputs(assignments: &[Assignment]) -> HashMap<String, f64> {
    let mut held: HashMap<&str, usize> = HashMap::new();
    for a in assignments {
        *held.entry(a.worker.as_str()).or_insert(0) += 1;
    }

    let mut outputs: HashMap<String, f64> = HashMap::new();
    for a in assignments {
        let entry = outputs.entry(a.operation.clone()).or_insert(0.0);
        if a.is_feasible() {
            *entry += (3600.0 / a.actual_time) / held[a.worker.as_str()] as f64;
        }
    }
    outputs
}

/// Aggregate workload statistics for one balancing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyStats {
    /// Number of operations in the run.
    pub total_operations: usize,
    /// Number of workers in the pool.
    pub total_workers: usize,
    /// Workers holding at least one assignment.
    pub assigned_workers: usize,
    /// Largest per-worker workload, in seconds.
    pub max_workload: f64,
    /// Smallest per-worker workload, in seconds.
    pub min_workload: f64,
    /// Mean per-worker workload, in seconds.
    pub avg_workload: f64,
    /// Population standard deviation of workloads.
    pub std_deviation: f64,
    /// min_workload / max_workload × 100 (0 with no assigned workers).
    pub balance_efficiency: f64,
}

impl EfficiencyStats {
    /// Computes statistics from the final assignment set.
    ///
    /// Workload per worker is `Σ actual_time / operations_held`, the
    /// proportional-division rule applied to time instead of output.
    pub fn calculate(
        assignments: &[Assignment],
        total_operations: usize,
        total_workers: usize,
    ) -> Self {
        let mut held: HashMap<&str, usize> = HashMap::new();
        for a in assignments {
            *held.entry(a.worker.as_str()).or_insert(0) += 1;
        }

        // Accumulate in first-appearance order so float sums are
        // reproducible across runs.
        let mut order: Vec<&str> = Vec::new();
        let mut loads: HashMap<&str, f64> = HashMap::new();
        for a in assignments {
            if !a.actual_time.is_finite() {
                continue;
            }
            let share = a.actual_time / held[a.worker.as_str()] as f64;
            if !loads.contains_key(a.worker.as_str()) {
                order.push(&a.worker);
            }
            *loads.entry(a.worker.as_str()).or_insert(0.0) += share;
        }
        let workloads: Vec<f64> = order.iter().map(|w| loads[w]).collect();

        if workloads.is_empty() {
            return Self {
                total_operations,
                total_workers,
                assigned_workers: 0,
                max_workload: 0.0,
                min_workload: 0.0,
                avg_workload: 0.0,
                std_deviation: 0.0,
                balance_efficiency: 0.0,
            };
        }

        let max = workloads.iter().cloned().fold(f64::MIN, f64::max);
        let min = workloads.iter().cloned().fold(f64::MAX, f64::min);
        let avg = workloads.iter().sum::<f64>() / workloads.len() as f64;
        let variance =
            workloads.iter().map(|l| (l - avg).powi(2)).sum::<f64>() / workloads.len() as f64;
        let balance_efficiency = if max > 0.0 { min / max * 100.0 } else { 0.0 };

        Self {
            total_operations,
            total_workers,
            assigned_workers: workloads.len(),
            max_workload: max,
            min_workload: min,
            avg_workload: avg,
            std_deviation: variance.sqrt(),
            balance_efficiency,
        }
    }
}
