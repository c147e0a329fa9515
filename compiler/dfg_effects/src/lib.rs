//! GC effects and flow value storage for the DFG optimizing tiers.
//!
//! This crate provides:
//!
//! - **GC classification** ([`may_gc`], [`GcClassifier`]): whether the code
//!   generated for a node can trigger a garbage collection. Every opcode is
//!   placed in a [`GcBucket`] by an exhaustive table, so adding an opcode to
//!   `dfg_ir` fails to compile until it is classified. Conditional opcodes
//!   are answered from operand use kinds, side data, the plan tier, and the
//!   [`GcConfig`].
//!
//! - **Flow maps** ([`FlowMap`], [`NodeFlowProjection`]): dense per-node
//!   storage for flow-sensitive analyses, with a parallel shadow slot that
//!   carries the incoming value of SSA `Phi`s.
//!
//! - **Whole-graph maps** ([`compute_gc_map`], [`summarize`]): the classifier
//!   run over every live node, stored in a `FlowMap<bool>`.
//!
//! # Soundness
//!
//! Answers are conservative. `false` is a proof that the node cannot GC;
//! `true` only means it might. A node that clobbers the world, according to
//! the caller's [`ClobberOracle`], is always reported as possibly GCing.
//!
//! # Crate Dependencies
//!
//! `dfg_effects` depends on `dfg_ir` for the graph, nodes, and opcodes. It
//! has no code generation dependency.

mod classify;
mod clobber;
mod config;
mod flow_map;
mod gap;
mod gc_map;

#[cfg(test)]
mod test_helpers;

use std::sync::Once;

pub use classify::{
    classify_conditional, gc_bucket, may_gc, GcBucket, GcClassification, GcClassifier,
    MAX_SINGLE_CHARACTER_STRING,
};
pub use clobber::{ClobberOracle, ClobberSet, NeverClobbers};
pub use config::{GapPolicy, GcConfig};
pub use flow_map::{FlowMap, FlowMapDump, NodeFlowProjection, ProjectionKind};
pub use gap::{ClassificationGap, GapReason};
pub use gc_map::{compute_gc_map, summarize, GcSummary};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for classification diagnostics.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=dfg_effects=debug` or `RUST_LOG=dfg_effects=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
