//! Per-run engine state.
//!
//! One `RunContext` is built at the start of each balancing run and owns
//! the assignment buffer exclusively until the run completes. The
//! operation ordering is pinned here once, by ascending `sequence`, so
//! adjacency positions cannot drift if the caller's collection is
//! reordered mid-run.

use std::collections::{HashMap, HashSet};

use super::config::BalancerConfig;
use super::stats;
use crate::models::{Assignment, Operation, Worker};

/// Mutable state of one balancing run.
pub(crate) struct RunContext<'a> {
    /// Operations in run order (ascending `sequence`, stable on ties).
    operations: Vec<Operation>,
    workers: &'a [Worker],
    /// Operation name → run position, for the adjacency rule.
    positions: HashMap<String, usize>,
    assignments: Vec<Assignment>,
    /// Workers locked by a successful pin.
    pinned_workers: HashSet<String>,
    /// Operations covered by a successful pin.
    pinned_operations: HashSet<String>,
}

impl<'a> RunContext<'a> {
    pub fn new(operations: &[Operation], workers: &'a [Worker]) -> Self {
        let mut run_order = operations.to_vec();
        run_order.sort_by_key(|op| op.sequence);
        let positions = run_order
            .iter()
            .enumerate()
            .map(|(i, op)| (op.name.clone(), i))
            .collect();
        Self {
            operations: run_order,
            workers,
            positions,
            assignments: Vec::new(),
            pinned_workers: HashSet::new(),
            pinned_operations: HashSet::new(),
        }
    }

    /// Operations in run order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn workers(&self) -> &'a [Worker] {
        self.workers
    }

    /// Resolves a worker by name.
    pub fn worker(&self, name: &str) -> Option<&'a Worker> {
        self.workers.iter().find(|w| w.name == name)
    }

    /// Run position of an operation.
    pub fn position(&self, operation: &str) -> Option<usize> {
        self.positions.get(operation).copied()
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn commit(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    pub fn remove(&mut self, index: usize) -> Assignment {
        self.assignments.remove(index)
    }

    /// Locks a successful pin: both names are excluded from every later
    /// automatic phase.
    pub fn mark_pinned(&mut self, worker: &str, operation: &str) {
        self.pinned_workers.insert(worker.to_string());
        self.pinned_operations.insert(operation.to_string());
    }

    pub fn is_pinned_worker(&self, name: &str) -> bool {
        self.pinned_workers.contains(name)
    }

    pub fn is_pinned_operation(&self, name: &str) -> bool {
        self.pinned_operations.contains(name)
    }

    /// Number of assignments a worker currently holds.
    pub fn assignment_count(&self, worker: &str) -> usize {
        self.assignments.iter().filter(|a| a.worker == worker).count()
    }

    /// Indices into the assignment buffer for one operation.
    pub fn assignment_indices_for(&self, operation: &str) -> Vec<usize> {
        self.assignments
            .iter()
            .enumerate()
            .filter(|(_, a)| a.operation == operation)
            .map(|(i, _)| i)
            .collect()
    }

    /// Adjacency rule: a new assignment is valid if the worker holds no
    /// assignments yet, or the candidate operation's run position is
    /// within 1 of some operation they already hold. Special machine
    /// groups bypass the rule entirely.
    pub fn is_adjacent(&self, config: &BalancerConfig, worker: &str, operation: &Operation) -> bool {
        if config.is_special(&operation.machine) {
            return true;
        }
        let held: Vec<usize> = self
            .assignments
            .iter()
            .filter(|a| a.worker == worker)
            .filter_map(|a| self.position(&a.operation))
            .collect();
        if held.is_empty() {
            return true;
        }
        let Some(target) = self.position(&operation.name) else {
            return false;
        };
        held.iter().any(|&p| p.abs_diff(target) <= 1)
    }

    /// Hourly output per operation in run order; 0.0 for unstaffed
    /// operations so they stay visible as bottlenecks.
    pub fn hourly_outputs(&self) -> Vec<f64> {
        let by_name = stats::hourly_outputs(&self.assignments);
        self.operations
            .iter()
            .map(|op| by_name.get(&op.name).copied().unwrap_or(0.0))
            .collect()
    }

    /// Publishes the finished assignment buffer.
    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }
}
