//! Worker model.
//!
//! A cross-trained sewing-line worker: a maximum difficulty tier and a
//! rating from 0 to 5 per machine group. Rating 0 means the worker cannot
//! operate that machine at all.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Difficulty;

/// Highest skill rating on the discrete 0–5 scale.
pub const MAX_SKILL_RATING: u8 = 5;

/// A line worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker name; the join key for assignments and pins.
    pub name: String,
    /// Maximum difficulty tier this worker can handle.
    #[serde(default)]
    pub difficulty_handling: Difficulty,
    /// Machine-group tag → rating in 0..=5 (0 = cannot operate).
    #[serde(default)]
    pub skills: HashMap<String, u8>,
}

impl Worker {
    /// Creates a worker with no skills and `Easy` difficulty handling.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            difficulty_handling: Difficulty::Easy,
            skills: HashMap::new(),
        }
    }

    /// Sets the maximum difficulty tier.
    pub fn with_difficulty_handling(mut self, difficulty: Difficulty) -> Self {
        self.difficulty_handling = difficulty;
        self
    }

    /// Sets the rating for a machine group, clamped to the 0–5 scale.
    pub fn with_skill(mut self, machine: impl Into<String>, rating: u8) -> Self {
        self.skills
            .insert(machine.into(), rating.min(MAX_SKILL_RATING));
        self
    }

    /// Returns the rating for a machine group (0 if unrated).
    pub fn skill_level(&self, machine: &str) -> u8 {
        self.skills.get(machine).copied().unwrap_or(0)
    }

    /// Whether this worker can operate the given machine group at all.
    pub fn can_operate(&self, machine: &str) -> bool {
        self.skill_level(machine) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_builder() {
        let w = Worker::new("Lan")
            .with_difficulty_handling(Difficulty::High)
            .with_skill("Single Needle", 5)
            .with_skill("Overlock", 2);

        assert_eq!(w.name, "Lan");
        assert_eq!(w.difficulty_handling, Difficulty::High);
        assert_eq!(w.skill_level("Single Needle"), 5);
        assert_eq!(w.skill_level("Overlock"), 2);
        assert_eq!(w.skill_level("Buttonhole"), 0);
    }

    #[test]
    fn test_can_operate() {
        let w = Worker::new("Mai")
            .with_skill("Overlock", 1)
            .with_skill("Coverstitch", 0);

        assert!(w.can_operate("Overlock"));
        assert!(!w.can_operate("Coverstitch"));
        assert!(!w.can_operate("Single Needle"));
    }

    #[test]
    fn test_skill_clamping() {
        let w = Worker::new("Hoa").with_skill("Overlock", 9);
        assert_eq!(w.skill_level("Overlock"), MAX_SKILL_RATING);
    }
}
