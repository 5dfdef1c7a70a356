//! Input validation for balancing problems.
//!
//! Structural integrity checks for the caller-owned operation and worker
//! collections, run by the data-entry/import collaborator before records
//! reach the engine. Detects:
//! - Duplicate sequences, codes, and names
//! - Non-positive SAM values
//! - Skill ratings outside the 0–5 scale
//! - Over-long pin lists and pins naming unknown workers
//!
//! The engine itself only enforces its fatal guards (empty sets, too few
//! workers); everything here is advisory and reported in bulk.

use std::collections::HashSet;

use crate::models::{Operation, Worker, MAX_SKILL_RATING, PIN_SLOTS};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two operations share a sequence number.
    DuplicateSequence,
    /// Two entities share a code or name.
    DuplicateId,
    /// An operation's standard time is zero or negative.
    InvalidSam,
    /// A skill rating is outside 0..=5.
    SkillOutOfRange,
    /// An operation carries more pin slots than the engine honors.
    TooManyPins,
    /// A pin slot names a worker that does not exist.
    UnknownPinnedWorker,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a balancing problem.
///
/// Checks:
/// 1. No duplicate operation sequences, codes, or names
/// 2. No duplicate worker names
/// 3. Every SAM is positive
/// 4. Every skill rating is within the 0–5 scale
/// 5. No operation pins more than four workers
/// 6. Every non-empty pin slot names an existing worker
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(operations: &[Operation], workers: &[Worker]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut worker_names = HashSet::new();
    for w in workers {
        if !worker_names.insert(w.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker name: {}", w.name),
            ));
        }
        for (machine, &rating) in &w.skills {
            if rating > MAX_SKILL_RATING {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SkillOutOfRange,
                    format!(
                        "Worker '{}' has rating {rating} on '{machine}' (scale is 0-{MAX_SKILL_RATING})",
                        w.name
                    ),
                ));
            }
        }
    }

    let mut sequences = HashSet::new();
    let mut codes = HashSet::new();
    let mut names = HashSet::new();
    for op in operations {
        if !sequences.insert(op.sequence) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSequence,
                format!("Duplicate operation sequence: {}", op.sequence),
            ));
        }
        if !codes.insert(op.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate operation code: {}", op.code),
            ));
        }
        if !names.insert(op.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate operation name: {}", op.name),
            ));
        }
        if op.sam <= 0.0 || op.sam.is_nan() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSam,
                format!("Operation '{}' has non-positive SAM {}", op.name, op.sam),
            ));
        }
        if op.pinned_workers.len() > PIN_SLOTS {
            errors.push(ValidationError::new(
                ValidationErrorKind::TooManyPins,
                format!(
                    "Operation '{}' pins {} workers (at most {PIN_SLOTS})",
                    op.name,
                    op.pinned_workers.len()
                ),
            ));
        }
        for pinned in op.pinned_workers.iter().filter(|p| !p.is_empty()) {
            if !worker_names.contains(pinned.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPinnedWorker,
                    format!("Operation '{}' pins unknown worker '{pinned}'", op.name),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_operations() -> Vec<Operation> {
        vec![
            Operation::new(1, "OP-010", "Hem sleeve")
                .with_sam(30.0)
                .with_machine("Single Needle"),
            Operation::new(2, "OP-020", "Close side seam")
                .with_sam(60.0)
                .with_machine("Overlock"),
        ]
    }

    fn sample_workers() -> Vec<Worker> {
        vec![
            Worker::new("Lan").with_skill("Single Needle", 5),
            Worker::new("Mai").with_skill("Overlock", 3),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_operations(), &sample_workers()).is_ok());
    }

    #[test]
    fn test_duplicate_sequence() {
        let ops = vec![
            Operation::new(1, "A", "First").with_sam(10.0),
            Operation::new(1, "B", "Second").with_sam(10.0),
        ];
        let errors = validate_input(&ops, &sample_workers()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSequence));
    }

    #[test]
    fn test_duplicate_code_and_name() {
        let ops = vec![
            Operation::new(1, "A", "Same").with_sam(10.0),
            Operation::new(2, "A", "Same").with_sam(10.0),
        ];
        let errors = validate_input(&ops, &sample_workers()).unwrap_err();
        let duplicates = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::DuplicateId)
            .count();
        assert_eq!(duplicates, 2); // code and name
    }

    #[test]
    fn test_duplicate_worker_name() {
        let workers = vec![Worker::new("Lan"), Worker::new("Lan")];
        let errors = validate_input(&sample_operations(), &workers).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("worker")));
    }

    #[test]
    fn test_non_positive_sam() {
        let ops = vec![Operation::new(1, "A", "Bad").with_sam(0.0)];
        let errors = validate_input(&ops, &sample_workers()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidSam));
    }

    #[test]
    fn test_skill_out_of_range() {
        let mut w = Worker::new("Lan");
        w.skills.insert("Overlock".into(), 6); // bypasses the clamping builder
        let errors = validate_input(&sample_operations(), &[w]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SkillOutOfRange));
    }

    #[test]
    fn test_too_many_pins() {
        let mut op = Operation::new(1, "A", "Pinned").with_sam(10.0);
        for w in ["A", "B", "C", "D", "E"] {
            op = op.with_pinned_worker(w);
        }
        let errors = validate_input(&[op], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TooManyPins));
    }

    #[test]
    fn test_unknown_pinned_worker() {
        let ops = vec![Operation::new(1, "A", "Pinned")
            .with_sam(10.0)
            .with_pinned_worker("Ghost")];
        let errors = validate_input(&ops, &sample_workers()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownPinnedWorker));
    }

    #[test]
    fn test_empty_pin_slot_allowed() {
        let ops = vec![Operation::new(1, "A", "Pinned")
            .with_sam(10.0)
            .with_pinned_worker("")];
        assert!(validate_input(&ops, &sample_workers()).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let ops = vec![
            Operation::new(1, "A", "Bad").with_sam(-1.0),
            Operation::new(1, "B", "Pinned")
                .with_sam(10.0)
                .with_pinned_worker("Ghost"),
        ];
        let errors = validate_input(&ops, &sample_workers()).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
