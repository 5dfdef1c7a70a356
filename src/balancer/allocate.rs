//! Greedy worker allocation.
//!
//! # Algorithm
//!
//! The primary pass staffs operations in order of machine-skill scarcity:
//! operations whose machine few workers can run are staffed first, while
//! the special auxiliary/finishing groups always go last. Within an
//! operation, candidates are taken by descending skill with a
//! fewest-assignments tie-break, so load spreads as the pass progresses.
//!
//! The fallback pass then places every worker still idle onto the first
//! feasible operation among those with the lowest current hourly output.

use std::cmp::Reverse;
use std::collections::HashMap;

use super::config::BalancerConfig;
use super::context::RunContext;
use super::efficiency;
use crate::models::{Assignment, Worker};

/// Primary scarcity-ordered pass.
///
/// `requirements` is aligned with the run ordering. Pinned operations and
/// pinned workers are skipped entirely; each committed assignment updates
/// the load counts seen by later ordering decisions in the same pass.
pub(crate) fn run_primary(
    ctx: &mut RunContext<'_>,
    config: &BalancerConfig,
    requirements: &[usize],
) {
    let scarcity = machine_scarcity(ctx, config);

    for index in priority_order(ctx, config, &scarcity) {
        let op = ctx.operations()[index].clone();
        if ctx.is_pinned_operation(&op.name) {
            continue;
        }
        let required = requirements[index];
        if required == 0 {
            continue;
        }

        // Machine-skilled and difficulty-eligible first; if nobody
        // qualifies, relax the machine-skill requirement.
        let mut eligible: Vec<&Worker> = ctx
            .workers()
            .iter()
            .filter(|w| {
                !ctx.is_pinned_worker(&w.name)
                    && w.can_operate(&op.machine)
                    && w.difficulty_handling.allows(op.difficulty)
            })
            .collect();
        if eligible.is_empty() {
            eligible = ctx
                .workers()
                .iter()
                .filter(|w| {
                    !ctx.is_pinned_worker(&w.name)
                        && w.difficulty_handling.allows(op.difficulty)
                })
                .collect();
        }
        eligible.sort_by_key(|w| {
            (
                Reverse(w.skill_level(&op.machine)),
                ctx.assignment_count(&w.name),
            )
        });

        let mut placed = 0;
        for worker in eligible {
            if placed >= required {
                break;
            }
            if ctx.assignment_count(&worker.name) >= config.max_assignments_per_worker {
                continue;
            }
            if !ctx.is_adjacent(config, &worker.name, &op) {
                continue;
            }
            let time = efficiency::actual_time(op.sam, worker.skill_level(&op.machine));
            if !time.is_finite() {
                continue;
            }
            ctx.commit(Assignment::new(&worker.name, &op.name, op.sam, time));
            placed += 1;
        }
    }
}

/// Fallback pass: one assignment for every worker left idle.
///
/// Operations are scanned from lowest current output upward; the first
/// one passing the difficulty gate, skill, cap, adjacency, and finiteness
/// checks gets the worker.
pub(crate) fn assign_idle(ctx: &mut RunContext<'_>, config: &BalancerConfig) {
    let idle: Vec<&Worker> = ctx
        .workers()
        .iter()
        .filter(|w| !ctx.is_pinned_worker(&w.name) && ctx.assignment_count(&w.name) == 0)
        .collect();
    if idle.is_empty() {
        return;
    }

    let outputs = ctx.hourly_outputs();
    let mut order: Vec<usize> = (0..outputs.len()).collect();
    order.sort_by(|&a, &b| {
        outputs[a]
            .partial_cmp(&outputs[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for worker in idle {
        for &index in &order {
            let op = ctx.operations()[index].clone();
            if !worker.difficulty_handling.allows(op.difficulty) {
                continue;
            }
            let rating = worker.skill_level(&op.machine);
            if rating == 0 {
                continue;
            }
            if ctx.assignment_count(&worker.name) >= config.max_assignments_per_worker {
                continue;
            }
            if !ctx.is_adjacent(config, &worker.name, &op) {
                continue;
            }
            let time = efficiency::actual_time(op.sam, rating);
            if !time.is_finite() {
                continue;
            }
            ctx.commit(Assignment::new(&worker.name, &op.name, op.sam, time));
            break;
        }
    }
}

/// Non-pinned workers with any skill per non-special machine group.
fn machine_scarcity(ctx: &RunContext<'_>, config: &BalancerConfig) -> HashMap<String, usize> {
    let mut scarcity = HashMap::new();
    for op in ctx.operations() {
        if op.machine.is_empty() || config.is_special(&op.machine) {
            continue;
        }
        if scarcity.contains_key(&op.machine) {
            continue;
        }
        let skilled = ctx
            .workers()
            .iter()
            .filter(|w| !ctx.is_pinned_worker(&w.name) && w.can_operate(&op.machine))
            .count();
        scarcity.insert(op.machine.clone(), skilled);
    }
    scarcity
}

/// Run positions ordered by ascending scarcity then descending SAM;
/// special machine groups always last, tie-broken by descending SAM.
fn priority_order(
    ctx: &RunContext<'_>,
    config: &BalancerConfig,
    scarcity: &HashMap<String, usize>,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..ctx.operations().len()).collect();
    order.sort_by(|&a, &b| {
        let key = |i: usize| {
            let op = &ctx.operations()[i];
            if config.is_special(&op.machine) {
                (usize::MAX, op.sam)
            } else {
                (scarcity.get(&op.machine).copied().unwrap_or(0), op.sam)
            }
        };
        let (scarcity_a, sam_a) = key(a);
        let (scarcity_b, sam_b) = key(b);
        scarcity_a.cmp(&scarcity_b).then_with(|| {
            sam_b
                .partial_cmp(&sam_a)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });
    order
}
