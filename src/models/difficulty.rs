//! Difficulty tiers for operations and worker capability.

use serde::{Deserialize, Serialize};

/// Difficulty tier of an operation, or the maximum tier a worker can handle.
///
/// Tiers are ordered `Easy < Medium < High`. A worker may perform an
/// operation iff the worker's tier is at least the operation's tier.
///
/// Deserialization accepts any label and falls back to `Easy` for empty
/// or unrecognized ones, so imported records never fail on this field.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "String")]
pub enum Difficulty {
    /// Baseline tier; also the default for unrecognized labels.
    #[default]
    Easy,
    Medium,
    High,
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        Difficulty::from_label(&label)
    }
}

impl Difficulty {
    /// Numeric tier: Easy=1, Medium=2, High=3.
    pub fn tier(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::High => 3,
        }
    }

    /// Whether a worker with this capability tier may perform an
    /// operation of the given difficulty.
    pub fn allows(self, operation: Difficulty) -> bool {
        self.tier() >= operation.tier()
    }

    /// Parses a free-form label. Unrecognized or empty labels fall back
    /// to `Easy`, matching how imported records are interpreted.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Medium" => Difficulty::Medium,
            "High" => Difficulty::High,
            _ => Difficulty::Easy,
        }
    }
}
