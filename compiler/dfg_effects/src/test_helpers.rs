//! Shared test utilities for classifier and flow map tests.
//!
//! Only compiled in test builds.

use dfg_ir::{Edge, Graph, NodeData, NodeId, Opcode, Plan, PlanTier, UseKind};

use crate::{may_gc, GcConfig, NeverClobbers};

/// Empty graph for the lower optimizing tier.
pub(crate) fn lower_tier() -> Graph {
    Graph::new(Plan::new(PlanTier::Optimizing))
}

/// Empty graph for the highest tier.
pub(crate) fn top_tier() -> Graph {
    Graph::new(Plan::new(PlanTier::FullyOptimizing))
}

/// An operand producer with no interesting properties.
pub(crate) fn local(g: &mut Graph) -> NodeId {
    g.add_simple(Opcode::GetLocal)
}

/// Node with one operand of the given use kind.
pub(crate) fn unary(g: &mut Graph, op: Opcode, kind: UseKind) -> NodeId {
    let x = local(g);
    g.add_node(op, [Edge::new(x, kind)], NodeData::None)
}

/// Node with two operands of the given use kinds.
pub(crate) fn binary(g: &mut Graph, op: Opcode, left: UseKind, right: UseKind) -> NodeId {
    let x = local(g);
    let y = local(g);
    g.add_node(
        op,
        [Edge::new(x, left), Edge::new(y, right)],
        NodeData::None,
    )
}

/// Node with `arity` untyped operands and the given side data.
pub(crate) fn with_data(g: &mut Graph, op: Opcode, arity: usize, data: NodeData) -> NodeId {
    let operands: Vec<Edge> = (0..arity).map(|_| Edge::untyped(local(g))).collect();
    g.add_node(op, operands, data)
}

/// Classify `id` with no clobbering nodes and gaps turned into panics.
pub(crate) fn gc(g: &Graph, id: NodeId) -> bool {
    gc_with(g, id, &GcConfig::strict())
}

/// Classify `id` with no clobbering nodes under `config`.
pub(crate) fn gc_with(g: &Graph, id: NodeId, config: &GcConfig) -> bool {
    let Some(node) = g.node(id) else {
        panic!("{id} is not a live node");
    };
    may_gc(g, node, &NeverClobbers, config)
}
