//! Line-balancing domain models.
//!
//! Core data types exchanged with the engine. `Operation` and `Worker`
//! records are owned by the caller (data entry, spreadsheet import) and
//! are never mutated by the engine; `Assignment` records are produced
//! exclusively by a balancing run.

mod assignment;
mod difficulty;
mod operation;
mod worker;

pub use assignment::Assignment;
pub use difficulty::Difficulty;
pub use operation::Operation;
pub use worker::{Worker, MAX_SKILL_RATING};

pub(crate) use operation::PIN_SLOTS;
