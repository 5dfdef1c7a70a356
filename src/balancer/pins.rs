//! Pin handler.
//!
//! Realizes manually pre-assigned worker/operation pairs as locked
//! assignments before any automatic allocation. A slot that fails a
//! feasibility check is skipped with a warning and does not lock its
//! worker or operation.

use tracing::warn;

use super::context::RunContext;
use super::diagnostics::Diagnostic;
use super::efficiency;
use crate::models::{Assignment, PIN_SLOTS};

/// Locks every feasible pin slot, in run order.
///
/// For each named slot: resolve the worker, check the difficulty gate,
/// check the machine skill, then commit a locked assignment and record
/// both names as pinned. Each failed check yields one diagnostic.
pub(crate) fn lock_pinned(ctx: &mut RunContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
    for index in 0..ctx.operations().len() {
        let op = ctx.operations()[index].clone();
        for name in op.pinned_workers.iter().take(PIN_SLOTS) {
            if name.is_empty() {
                continue;
            }
            let Some(worker) = ctx.worker(name) else {
                warn!(operation = %op.name, worker = %name, "pin slot names unknown worker");
                diagnostics.push(Diagnostic::unknown_worker(&op.name, name));
                continue;
            };
            if !worker.difficulty_handling.allows(op.difficulty) {
                warn!(operation = %op.name, worker = %name, "pinned worker cannot handle difficulty");
                diagnostics.push(Diagnostic::difficulty_mismatch(&op.name, name));
                continue;
            }
            let rating = worker.skill_level(&op.machine);
            if rating == 0 {
                warn!(
                    operation = %op.name,
                    worker = %name,
                    machine = %op.machine,
                    "pinned worker has no skill for machine"
                );
                diagnostics.push(Diagnostic::missing_skill(&op.name, name, &op.machine));
                continue;
            }
            let time = efficiency::actual_time(op.sam, rating);
            ctx.commit(Assignment::new(name, &op.name, op.sam, time));
            ctx.mark_pinned(name, &op.name);
        }
    }
}
