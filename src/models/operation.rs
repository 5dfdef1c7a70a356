//! Operation model.
//!
//! An operation is one step of the garment assembly line: a standard time
//! (SAM), a machine group, a difficulty tier, and a position on the line
//! given by its sequence number. Up to four worker names may be pinned to
//! an operation; the engine locks those pairs before automatic allocation.

use serde::{Deserialize, Serialize};

use super::Difficulty;

/// Maximum number of manual pin slots per operation.
pub(crate) const PIN_SLOTS: usize = 4;

/// A production-line operation.
///
/// Created and edited by the data-entry/import collaborator; the engine
/// only reads it (including `pinned_workers` to resolve manual pins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Position on the line (positive, unique across operations).
    pub sequence: u32,
    /// Unique operation code.
    pub code: String,
    /// Unique operation name; the join key for assignments.
    pub name: String,
    /// Standard Allowed Time in seconds at 100% efficiency (>0).
    pub sam: f64,
    /// Machine-group tag (see `BalancerConfig::machine_groups`).
    pub machine: String,
    /// Difficulty tier (default `Easy`).
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Manually pinned worker names, at most four.
    #[serde(default)]
    pub pinned_workers: Vec<String>,
}

impl Operation {
    /// Creates an operation with the given sequence, code, and name.
    pub fn new(sequence: u32, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            sequence,
            code: code.into(),
            name: name.into(),
            sam: 0.0,
            machine: String::new(),
            difficulty: Difficulty::Easy,
            pinned_workers: Vec::new(),
        }
    }

    /// Sets the standard time in seconds.
    pub fn with_sam(mut self, sam: f64) -> Self {
        self.sam = sam;
        self
    }

    /// Sets the machine-group tag.
    pub fn with_machine(mut self, machine: impl Into<String>) -> Self {
        self.machine = machine.into();
        self
    }

    /// Sets the difficulty tier.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Pins a worker to this operation.
    ///
    /// Slots beyond the fourth are kept in the record (validation flags
    /// them) but ignored by the pin handler.
    pub fn with_pinned_worker(mut self, worker: impl Into<String>) -> Self {
        self.pinned_workers.push(worker.into());
        self
    }

    /// Whether any pin slot names a worker.
    pub fn has_pin_requests(&self) -> bool {
        self.pinned_workers.iter().any(|w| !w.is_empty())
    }
}
