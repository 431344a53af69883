//! Deterministic constrained selection engine for Commander-style deck
//! lists.
//!
//! `decklist-core` assembles exactly 99 unique cards around a leader under
//! simultaneous category quotas, a price budget, a banned-content policy,
//! a capped high-impact allowance and functional-role quotas, with staged
//! relaxation when the pool is too thin and optional reconciliation against
//! an external re-ranking signal. All selection is deterministic —
//! identical pool, configuration and signal always produce the identical
//! ordered list.

pub mod catalog;
pub mod export;
pub mod policy;
pub mod rerank;
pub mod selection;
pub mod types;
