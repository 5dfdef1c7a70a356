//! Production-line balancing for garment assembly.
//!
//! Converts per-worker machine-skill ratings and per-operation standard
//! times (SAM) into a feasible worker→operation assignment whose hourly
//! output is balanced across operations, then redistributes capacity from
//! over-producing operations to bottlenecks.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Operation`, `Worker`, `Assignment`, `Difficulty`
//! - **`validation`**: Input integrity checks (duplicate codes, SAM ranges, pin references)
//! - **`balancer`**: The allocation engine — pin handling, scarcity-ordered
//!   greedy assignment, fallback placement, capacity rebalancing, line KPIs
//!
//! # Algorithm
//!
//! The engine is a multi-pass heuristic, not an exact optimizer:
//!
//! 1. Lock manually pinned worker/operation pairs.
//! 2. Estimate per-operation worker requirements from each operation's
//!    share of total SAM; derive takt time and target hourly output.
//! 3. Greedily staff operations in order of machine-skill scarcity,
//!    honoring difficulty tiers, a per-worker task cap, and line adjacency.
//! 4. Place workers left idle onto the lowest-output operations.
//! 5. Move single workers from excess operations (>110% of target) to
//!    bottlenecks (<90%) under non-regression guards, up to a fixed
//!    iteration budget.
//!
//! # References
//!
//! - Scholl (1999), "Balancing and Sequencing of Assembly Lines"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod balancer;
pub mod models;
pub mod validation;
