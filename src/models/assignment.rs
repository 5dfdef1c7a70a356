//! Assignment model.
//!
//! A worker→operation pairing produced by a balancing run. The full
//! assignment set is discarded and rebuilt from scratch on every run;
//! there is no incremental update.

use serde::{Deserialize, Serialize};

/// A worker→operation assignment.
///
/// `actual_time` is the seconds this worker needs for one unit of the
/// operation: `sam / (efficiency / 100)`. It is infinite while a pairing
/// is infeasible (rating 0); the engine never publishes such a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned worker name.
    pub worker: String,
    /// Operation name.
    pub operation: String,
    /// Standard time copied from the operation at assignment time.
    pub sam: f64,
    /// Per-unit execution time in seconds for this worker.
    pub actual_time: f64,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        worker: impl Into<String>,
        operation: impl Into<String>,
        sam: f64,
        actual_time: f64,
    ) -> Self {
        Self {
            worker: worker.into(),
            operation: operation.into(),
            sam,
            actual_time,
        }
    }

    /// Whether the assignment is executable (finite, positive time).
    pub fn is_feasible(&self) -> bool {
        self.actual_time.is_finite() && self.actual_time > 0.0
    }

    /// Display efficiency in percent, dividing the worker's time evenly
    /// across the `operations_held` operations they perform.
    ///
    /// `sam / (actual_time / operations_held) × 100`; 0 when infeasible.
    pub fn efficiency_percent(&self, operations_held: usize) -> f64 {
        if !self.is_feasible() || operations_held == 0 {
            return 0.0;
        }
        let adjusted = self.actual_time / operations_held as f64;
        self.sam / adjusted * 100.0
    }
}
