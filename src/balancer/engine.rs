//! Engine entry point.
//!
//! One call to [`LineBalancer::balance`] is one transactional run: the
//! assignment set is rebuilt from scratch in a run-local buffer and
//! published only on success, so a guard failure leaves the caller's
//! state untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::allocate;
use super::config::BalancerConfig;
use super::context::RunContext;
use super::diagnostics::Diagnostic;
use super::pins;
use super::rebalance;
use super::stats::EfficiencyStats;
use super::targets::{self, LineTargets};
use crate::models::{Assignment, Operation, Worker};

/// Fatal guard conditions; the run is aborted with no state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// The operation set is empty.
    #[error("no operations to balance")]
    NoOperations,
    /// The worker pool is empty.
    #[error("no workers available")]
    NoWorkers,
    /// Line balancing distributes load across multiple workers.
    #[error("line balancing needs at least 2 workers, found {found}")]
    NotEnoughWorkers {
        /// Workers actually present.
        found: usize,
    },
}

/// The published result of one balancing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceOutcome {
    /// Final assignment set, in commit order (pins first).
    pub assignments: Vec<Assignment>,
    /// Aggregate workload statistics.
    pub stats: EfficiencyStats,
    /// Total SAM / worker count, in seconds.
    pub takt_time: f64,
    /// 3600 / takt time; the output every operation should approach.
    pub target_hourly_output: f64,
    /// Skip conditions encountered during the run.
    pub diagnostics: Vec<Diagnostic>,
}

/// The line-balancing engine.
///
/// # Example
///
/// ```
/// use line_balance::balancer::LineBalancer;
/// use line_balance::models::{Operation, Worker};
///
/// let operations = vec![
///     Operation::new(1, "OP-010", "Hem sleeve")
///         .with_sam(30.0)
///         .with_machine("Single Needle"),
///     Operation::new(2, "OP-020", "Close side seam")
///         .with_sam(60.0)
///         .with_machine("Single Needle"),
/// ];
/// let workers = vec![
///     Worker::new("Lan").with_skill("Single Needle", 5),
///     Worker::new("Mai").with_skill("Single Needle", 5),
/// ];
///
/// let outcome = LineBalancer::new().balance(&operations, &workers).unwrap();
/// assert_eq!(outcome.assignments.len(), 2);
/// assert!((outcome.takt_time - 45.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineBalancer {
    config: BalancerConfig,
}

impl LineBalancer {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom configuration.
    pub fn with_config(config: BalancerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &BalancerConfig {
        &self.config
    }

    /// Runs one full balancing pass over the caller's collections.
    ///
    /// The input collections are read-only; the returned outcome is the
    /// only product of the run.
    pub fn balance(
        &self,
        operations: &[Operation],
        workers: &[Worker],
    ) -> Result<BalanceOutcome, BalanceError> {
        if operations.is_empty() {
            return Err(BalanceError::NoOperations);
        }
        if workers.is_empty() {
            return Err(BalanceError::NoWorkers);
        }
        if workers.len() < 2 {
            return Err(BalanceError::NotEnoughWorkers {
                found: workers.len(),
            });
        }

        let mut ctx = RunContext::new(operations, workers);
        let mut diagnostics = Vec::new();

        pins::lock_pinned(&mut ctx, &mut diagnostics);

        let line = LineTargets::calculate(ctx.operations(), workers.len());
        let requirements = targets::estimate_requirements(
            ctx.operations(),
            workers.len(),
            self.config.max_initial_requirement,
        );
        debug!(
            takt_time = line.takt_time,
            target_hourly_output = line.hourly_output,
            "targets computed"
        );

        allocate::run_primary(&mut ctx, &self.config, &requirements);
        allocate::assign_idle(&mut ctx, &self.config);
        rebalance::rebalance(&mut ctx, &self.config, line.hourly_output);

        let stats = EfficiencyStats::calculate(ctx.assignments(), operations.len(), workers.len());
        Ok(BalanceOutcome {
            assignments: ctx.into_assignments(),
            stats,
            takt_time: line.takt_time,
            target_hourly_output: line.hourly_output,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balancer::hourly_outputs;
    use crate::models::Difficulty;

    fn op(seq: u32, name: &str, sam: f64, machine: &str) -> Operation {
        Operation::new(seq, format!("C{seq}"), name)
            .with_sam(sam)
            .with_machine(machine)
    }

    #[test]
    fn test_guard_errors() {
        let engine = LineBalancer::new();
        let workers = vec![
            Worker::new("Lan").with_skill("Single Needle", 5),
            Worker::new("Mai").with_skill("Single Needle", 5),
        ];
        let ops = vec![op(1, "Hem", 30.0, "Single Needle")];

        assert_eq!(
            engine.balance(&[], &workers).unwrap_err(),
            BalanceError::NoOperations
        );
        assert_eq!(
            engine.balance(&ops, &[]).unwrap_err(),
            BalanceError::NoWorkers
        );
        assert_eq!(
            engine.balance(&ops, &workers[..1]).unwrap_err(),
            BalanceError::NotEnoughWorkers { found: 1 }
        );
    }

    #[test]
    fn test_reference_scenario() {
        // 2 workers at rating 5, operations of SAM 30 and 60: takt 45,
        // target 80/h, one worker per operation at standard time.
        let ops = vec![
            op(1, "Hem", 30.0, "Single Needle"),
            op(2, "Seam", 60.0, "Single Needle"),
        ];
        let workers = vec![
            Worker::new("Lan").with_skill("Single Needle", 5),
            Worker::new("Mai").with_skill("Single Needle", 5),
        ];

        let outcome = LineBalancer::new().balance(&ops, &workers).unwrap();
        assert!((outcome.takt_time - 45.0).abs() < 1e-10);
        assert!((outcome.target_hourly_output - 80.0).abs() < 1e-10);
        assert_eq!(outcome.assignments.len(), 2);
        assert!(outcome.diagnostics.is_empty());

        let hem: Vec<_> = outcome
            .assignments
            .iter()
            .filter(|a| a.operation == "Hem")
            .collect();
        let seam: Vec<_> = outcome
            .assignments
            .iter()
            .filter(|a| a.operation == "Seam")
            .collect();
        assert_eq!(hem.len(), 1);
        assert_eq!(seam.len(), 1);
        assert!((hem[0].actual_time - 30.0).abs() < 1e-10);
        assert!((seam[0].actual_time - 60.0).abs() < 1e-10);
    }

    #[test]
    fn test_worker_cap_holds_after_full_run() {
        let ops: Vec<Operation> = (1..=8)
            .map(|i| op(i, &format!("Op{i}"), 15.0 + i as f64, "Overlock"))
            .collect();
        let workers: Vec<Worker> = (0..3)
            .map(|i| Worker::new(format!("W{i}")).with_skill("Overlock", 3 + (i % 3) as u8))
            .collect();

        let outcome = LineBalancer::new().balance(&ops, &workers).unwrap();
        for w in &workers {
            let count = outcome
                .assignments
                .iter()
                .filter(|a| a.worker == w.name)
                .count();
            assert!(count <= 3, "worker {} holds {count} assignments", w.name);
        }
    }

    #[test]
    fn test_no_infinite_time_published() {
        let ops = vec![
            op(1, "Hem", 30.0, "Single Needle"),
            op(2, "Emb", 45.0, "Embroidery"),
        ];
        let workers = vec![
            Worker::new("Lan").with_skill("Single Needle", 5),
            Worker::new("Mai").with_skill("Single Needle", 2),
        ];

        let outcome = LineBalancer::new().balance(&ops, &workers).unwrap();
        assert!(outcome.assignments.iter().all(|a| a.is_feasible()));
    }

    #[test]
    fn test_deterministic_runs() {
        let ops = vec![
            op(1, "A", 25.0, "Single Needle"),
            op(2, "B", 40.0, "Overlock"),
            op(3, "C", 35.0, "Single Needle"),
            op(4, "D", 20.0, "Finishing/Ironing"),
        ];
        let workers = vec![
            Worker::new("W1")
                .with_skill("Single Needle", 4)
                .with_skill("Overlock", 2),
            Worker::new("W2")
                .with_skill("Overlock", 5)
                .with_skill("Finishing/Ironing", 3),
            Worker::new("W3")
                .with_skill("Single Needle", 3)
                .with_skill("Finishing/Ironing", 5),
        ];

        let engine = LineBalancer::new();
        let first = engine.balance(&ops, &workers).unwrap();
        let second = engine.balance(&ops, &workers).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pin_failure_reported_not_fatal() {
        let ops = vec![
            op(1, "Hem", 30.0, "Single Needle").with_pinned_worker("Ghost"),
            op(2, "Seam", 60.0, "Single Needle"),
        ];
        let workers = vec![
            Worker::new("Lan").with_skill("Single Needle", 5),
            Worker::new("Mai").with_skill("Single Needle", 5),
        ];

        let outcome = LineBalancer::new().balance(&ops, &workers).unwrap();
        assert_eq!(outcome.diagnostics.len(), 1);
        // The failed pin does not lock the operation; it is still staffed.
        assert!(outcome.assignments.iter().any(|a| a.operation == "Hem"));
    }

    #[test]
    fn test_adjacency_holds_in_published_assignments() {
        let ops: Vec<Operation> = (1..=6)
            .map(|i| op(i, &format!("Op{i}"), 30.0, "Single Needle"))
            .collect();
        let workers: Vec<Worker> = (0..4)
            .map(|i| Worker::new(format!("W{i}")).with_skill("Single Needle", 5))
            .collect();

        let outcome = LineBalancer::new().balance(&ops, &workers).unwrap();
        let position = |name: &str| ops.iter().position(|o| o.name == name).unwrap();
        for w in &workers {
            let positions: Vec<usize> = outcome
                .assignments
                .iter()
                .filter(|a| a.worker == w.name)
                .map(|a| position(&a.operation))
                .collect();
            for &p in &positions {
                assert!(
                    positions.len() == 1 || positions.iter().any(|&q| q != p && q.abs_diff(p) <= 1),
                    "worker {} holds non-adjacent operations {positions:?}",
                    w.name
                );
            }
        }
    }

    #[test]
    fn test_outcome_outputs_reconstructable() {
        // External collaborators recompute per-operation output from the
        // published assignment set alone.
        let ops = vec![
            op(1, "Hem", 30.0, "Single Needle"),
            op(2, "Seam", 60.0, "Single Needle"),
        ];
        let workers = vec![
            Worker::new("Lan").with_skill("Single Needle", 5),
            Worker::new("Mai").with_skill("Single Needle", 5),
        ];

        let outcome = LineBalancer::new().balance(&ops, &workers).unwrap();
        let outputs = hourly_outputs(&outcome.assignments);
        assert!((outputs["Hem"] - 120.0).abs() < 1e-10);
        assert!((outputs["Seam"] - 60.0).abs() < 1e-10);
    }

    #[test]
    fn test_difficulty_gate_across_run() {
        let ops = vec![
            op(1, "Plain", 30.0, "Single Needle"),
            op(2, "Tricky", 30.0, "Single Needle").with_difficulty(Difficulty::High),
        ];
        let workers = vec![
            Worker::new("Green").with_skill("Single Needle", 5),
            Worker::new("Expert")
                .with_difficulty_handling(Difficulty::High)
                .with_skill("Single Needle", 5),
        ];

        let outcome = LineBalancer::new().balance(&ops, &workers).unwrap();
        assert!(outcome
            .assignments
            .iter()
            .filter(|a| a.operation == "Tricky")
            .all(|a| a.worker == "Expert"));
    }
}
