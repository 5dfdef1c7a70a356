//! Line targets and worker requirements.
//!
//! Takt time and target hourly output are derived once per run from the
//! full operation and worker sets, independent of pinning. Worker
//! requirements give each operation a share of the workforce proportional
//! to its share of total SAM.
//!
//! # Reference
//! Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 2

use crate::models::Operation;

/// Takt time and target hourly output for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTargets {
    /// Total SAM / worker count, in seconds.
    pub takt_time: f64,
    /// 3600 / takt time (0 when takt time is 0).
    pub hourly_output: f64,
}

impl LineTargets {
    /// Computes targets from the operation set and total worker count.
    pub fn calculate(operations: &[Operation], worker_count: usize) -> Self {
        if worker_count == 0 {
            return Self {
                takt_time: 0.0,
                hourly_output: 0.0,
            };
        }
        let takt_time = total_sam(operations) / worker_count as f64;
        let hourly_output = if takt_time > 0.0 {
            3600.0 / takt_time
        } else {
            0.0
        };
        Self {
            takt_time,
            hourly_output,
        }
    }
}

/// Sum of standard times over all operations, in seconds.
pub fn total_sam(operations: &[Operation]) -> f64 {
    operations.iter().map(|op| op.sam).sum()
}

/// Estimates how many workers each operation needs for the primary
/// allocation pass, aligned with `operations`.
///
/// `required(op) = worker_count × op.sam / total_sam`, rounded to the
/// nearest integer (ties to even) except that values below 0.5 round to
/// 0, then capped at `requirement_cap`. Falls back to a uniform 1 per
/// operation when total SAM or the worker count is 0.
pub fn estimate_requirements(
    operations: &[Operation],
    worker_count: usize,
    requirement_cap: usize,
) -> Vec<usize> {
    let total = total_sam(operations);
    if total <= 0.0 || worker_count == 0 {
        return vec![1; operations.len()];
    }

    operations
        .iter()
        .map(|op| {
            let required = worker_count as f64 * op.sam / total;
            if required < 0.5 {
                0
            } else {
                (required.round_ties_even() as usize).min(requirement_cap)
            }
        })
        .collect()
}
