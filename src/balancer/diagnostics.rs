//! Structured skip diagnostics.
//!
//! Per-candidate infeasibility (an unknown pin name, a difficulty
//! mismatch, a missing machine skill) is a local skip, not an error. Each
//! skip is recorded here and returned with the result so callers can
//! surface it however they like; the engine has no UI dependency.

use serde::{Deserialize, Serialize};

/// Category of a skip condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A pin slot names a worker that does not exist.
    UnknownWorker,
    /// The worker's capability tier is below the operation's difficulty.
    DifficultyMismatch,
    /// The worker has rating 0 on the operation's machine group.
    MissingSkill,
}

/// A recoverable skip condition reported alongside the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Skip category.
    pub kind: DiagnosticKind,
    /// Operation involved, if any.
    pub operation: Option<String>,
    /// Worker involved, if any.
    pub worker: Option<String>,
    /// Human-readable description.
    pub reason: String,
}

impl Diagnostic {
    /// A pin slot referencing a worker that was not found.
    pub fn unknown_worker(operation: &str, worker: &str) -> Self {
        Self {
            kind: DiagnosticKind::UnknownWorker,
            operation: Some(operation.to_string()),
            worker: Some(worker.to_string()),
            reason: format!("operation '{operation}' pins unknown worker '{worker}'"),
        }
    }

    /// A worker that cannot handle the operation's difficulty tier.
    pub fn difficulty_mismatch(operation: &str, worker: &str) -> Self {
        Self {
            kind: DiagnosticKind::DifficultyMismatch,
            operation: Some(operation.to_string()),
            worker: Some(worker.to_string()),
            reason: format!("worker '{worker}' cannot handle the difficulty of operation '{operation}'"),
        }
    }

    /// A worker with no skill on the operation's machine group.
    pub fn missing_skill(operation: &str, worker: &str, machine: &str) -> Self {
        Self {
            kind: DiagnosticKind::MissingSkill,
            operation: Some(operation.to_string()),
            worker: Some(worker.to_string()),
            reason: format!(
                "worker '{worker}' has no skill for machine '{machine}' on operation '{operation}'"
            ),
        }
    }
}
