//! The line-balancing engine.
//!
//! A single synchronous computation: one call to [`LineBalancer::balance`]
//! rebuilds the full assignment set from the caller's operation and worker
//! collections. The run is transactional — assignments are built in a
//! run-local buffer and published only on success.
//!
//! # Phases
//!
//! 1. **Pins** — lock manually pinned worker/operation pairs ([`pins`]).
//! 2. **Targets** — takt time, target hourly output, and per-operation
//!    worker requirements ([`targets`]).
//! 3. **Primary allocation** — scarcity-ordered greedy assignment
//!    ([`allocate`]).
//! 4. **Fallback** — place idle workers on the lowest-output operations.
//! 5. **Rebalance** — whole-worker moves from excess operations to
//!    bottlenecks under non-regression guards ([`rebalance`]).
//! 6. **Stats** — per-worker workload and balance efficiency ([`stats`]).

mod allocate;
mod config;
mod context;
mod diagnostics;
mod efficiency;
mod engine;
mod pins;
mod rebalance;
mod stats;
mod targets;

pub use config::BalancerConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use efficiency::{actual_time, efficiency_percent, EFFICIENCY_BY_RATING};
pub use engine::{BalanceError, BalanceOutcome, LineBalancer};
pub use stats::{hourly_outputs, EfficiencyStats};
pub use targets::{estimate_requirements, total_sam, LineTargets};
