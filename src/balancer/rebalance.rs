//! Capacity rebalancer.
//!
//! # Algorithm
//!
//! Each iteration recomputes per-operation hourly output, partitions
//! operations into excess (>110% of target) and bottleneck (<90%) sets,
//! and attempts exactly one whole-worker move from the highest-output
//! excess operation toward the lowest-output bottleneck that accepts it.
//! A move is committed only if the source stays at or above target and
//! the destination does not overshoot it. The loop ends when either set
//! is empty, no move succeeds in a full scan, or the iteration budget
//! runs out — whole workers only, no partial-capacity transfer.

use tracing::debug;

use super::config::BalancerConfig;
use super::context::RunContext;
use super::efficiency;
use crate::models::Assignment;

/// Runs the rebalancing loop against the given target hourly output.
pub(crate) fn rebalance(ctx: &mut RunContext<'_>, config: &BalancerConfig, target: f64) {
    for iteration in 0..config.max_rebalance_iterations {
        let outputs = ctx.hourly_outputs();

        let mut excess: Vec<usize> = (0..outputs.len())
            .filter(|&i| outputs[i] > config.excess_ratio * target)
            .collect();
        let mut bottleneck: Vec<usize> = (0..outputs.len())
            .filter(|&i| outputs[i] < config.bottleneck_ratio * target)
            .collect();
        if excess.is_empty() || bottleneck.is_empty() {
            debug!(iteration, "rebalance converged");
            return;
        }

        excess.sort_by(|&a, &b| {
            outputs[b]
                .partial_cmp(&outputs[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        bottleneck.sort_by(|&a, &b| {
            outputs[a]
                .partial_cmp(&outputs[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut moved = false;
        'scan: for &from in &excess {
            for &to in &bottleneck {
                if try_move(ctx, config, from, to, target, &outputs) {
                    moved = true;
                    break 'scan;
                }
            }
        }
        if !moved {
            debug!(iteration, "rebalance stalled, no feasible move");
            return;
        }
    }
}

/// Attempts to move one worker from `from` to `to`. Returns whether a
/// move was committed.
fn try_move(
    ctx: &mut RunContext<'_>,
    config: &BalancerConfig,
    from: usize,
    to: usize,
    target: f64,
    outputs: &[f64],
) -> bool {
    let from_op = ctx.operations()[from].clone();
    let to_op = ctx.operations()[to].clone();

    // Never touch operations carrying manual pin requests.
    if from_op.has_pin_requests() || to_op.has_pin_requests() {
        return false;
    }

    let from_indices = ctx.assignment_indices_for(&from_op.name);
    // Never drain an operation to zero via rebalancing.
    if from_indices.len() < 2 {
        return false;
    }

    let from_output = outputs[from];
    let to_output = outputs[to];
    if from_output <= target || to_output >= target {
        return false;
    }

    // Candidate: the least efficient worker on the source operation.
    let Some(candidate_index) = from_indices.into_iter().max_by(|&a, &b| {
        ctx.assignments()[a]
            .actual_time
            .partial_cmp(&ctx.assignments()[b].actual_time)
            .unwrap_or(std::cmp::Ordering::Equal)
    }) else {
        return false;
    };
    let candidate = ctx.assignments()[candidate_index].clone();

    let Some(worker) = ctx.worker(&candidate.worker) else {
        return false;
    };
    if !worker.difficulty_handling.allows(to_op.difficulty) {
        return false;
    }
    let rating = worker.skill_level(&to_op.machine);
    if rating == 0 {
        return false;
    }
    if ctx.assignment_count(&worker.name) >= config.max_assignments_per_worker {
        return false;
    }
    if !ctx.is_adjacent(config, &worker.name, &to_op) {
        return false;
    }
    if !candidate.actual_time.is_finite() {
        return false;
    }

    // Full, undivided contribution the worker would carry across. The
    // move must not drop the source below target nor push the
    // destination above it; otherwise no transfer is attempted.
    let moved_output = 3600.0 / candidate.actual_time;
    if from_output - moved_output < target {
        return false;
    }
    if to_output + moved_output > target {
        return false;
    }

    let new_time = efficiency::actual_time(to_op.sam, rating);
    if !new_time.is_finite() {
        return false;
    }

    ctx.remove(candidate_index);
    ctx.commit(Assignment::new(
        &candidate.worker,
        &to_op.name,
        to_op.sam,
        new_time,
    ));
    debug!(
        worker = %candidate.worker,
        from = %from_op.name,
        to = %to_op.name,
        "rebalance move committed"
    );
    true
}
