//! Whole-graph GC classification.

use std::fmt;

use dfg_ir::Graph;
use tracing::{debug, trace};

use crate::{may_gc, ClobberOracle, FlowMap, GcConfig};

/// Classify every live node of `graph`, storing the answers in a flow map.
///
/// Removed nodes keep the default `false`; only live entries are meaningful.
pub fn compute_gc_map(graph: &Graph, clobber: &dyn ClobberOracle, config: &GcConfig) -> FlowMap<bool> {
    let mut map = FlowMap::new(graph);
    for node in graph.nodes() {
        let answer = may_gc(graph, node, clobber, config);
        trace!(node = %node.id(), op = %node.op(), may_gc = answer, "classified");
        map[node.id()] = answer;
    }

    let summary = summarize(graph, &map);
    debug!(
        nodes = summary.nodes,
        may_gc = summary.may_gc,
        gc_free = summary.gc_free(),
        "GC map computed"
    );
    map
}

/// Node counts for a computed GC map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GcSummary {
    /// Live nodes classified.
    pub nodes: usize,
    /// Live nodes that may GC.
    pub may_gc: usize,
}

impl GcSummary {
    pub fn gc_free(&self) -> usize {
        self.nodes - self.may_gc
    }
}

impl fmt::Display for GcSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} may GC, {} GC-free",
            self.nodes,
            self.may_gc,
            self.gc_free()
        )
    }
}

/// Count the live nodes of `graph` and how many of them `map` marks as GC.
pub fn summarize(graph: &Graph, map: &FlowMap<bool>) -> GcSummary {
    graph
        .nodes()
        .filter(|node| node.id().index() < map.capacity())
        .fold(GcSummary::default(), |mut summary, node| {
            summary.nodes += 1;
            if map[node.id()] {
                summary.may_gc += 1;
            }
            summary
        })
}
