//! End-to-end classification over small graphs.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use dfg_effects::{
    compute_gc_map, init_tracing, summarize, ClobberSet, FlowMap, GcClassification, GcClassifier,
    GcConfig, GcSummary, NeverClobbers, NodeFlowProjection,
};
use dfg_ir::{
    ArrayMode, ArrayType, ConstantValue, Edge, Graph, GraphForm, NodeData, NodeId, Opcode, Plan,
    PlanTier, UseKind,
};
use pretty_assertions::assert_eq;

/// `k = 1; x = local; s = k + x; a = [s]; return a`
fn straight_line() -> (Graph, [NodeId; 5]) {
    let mut g = Graph::new(Plan::new(PlanTier::Optimizing));
    let k = g.add_constant(ConstantValue::Int32(1));
    let x = g.add_simple(Opcode::GetLocal);
    let s = g.add_node(
        Opcode::ArithAdd,
        [Edge::new(k, UseKind::Int32), Edge::new(x, UseKind::Int32)],
        NodeData::None,
    );
    let a = g.add_node(Opcode::NewArray, [Edge::untyped(s)], NodeData::None);
    let r = g.add_node(Opcode::Return, [Edge::untyped(a)], NodeData::None);
    (g, [k, x, s, a, r])
}

#[test]
fn straight_line_graph() {
    let (g, ids) = straight_line();

    let map = compute_gc_map(&g, &NeverClobbers, &GcConfig::strict());

    assert_eq!(ids.map(|id| map[id]), [false, false, false, true, true]);
    assert_eq!(
        summarize(&g, &map),
        GcSummary {
            nodes: 5,
            may_gc: 2
        }
    );
    assert_eq!(map.dump(&g).to_string(), "@3=>true, @4=>true");
}

#[test]
fn classifier_agrees_with_map() {
    let (g, _) = straight_line();
    let clobber: ClobberSet = [NodeId::new(2)].into_iter().collect();
    let classifier = GcClassifier::new(&g, &clobber, GcConfig::strict());

    let map = compute_gc_map(&g, &clobber, &GcConfig::strict());

    for node in g.nodes() {
        assert_eq!(classifier.may_gc(node), map[node.id()], "{node}");
    }
    assert!(map[NodeId::new(2)]);
}

#[test]
fn tier_changes_typed_array_stores() {
    let store = |tier| {
        let mut g = Graph::new(Plan::new(tier));
        let base = g.add_simple(Opcode::GetLocal);
        let index = g.add_simple(Opcode::GetLocal);
        let value = g.add_simple(Opcode::GetLocal);
        let put = g.add_node(
            Opcode::PutByVal,
            [base, index, value].map(Edge::untyped),
            NodeData::ArrayMode(ArrayMode::write(ArrayType::Int16Array)),
        );
        compute_gc_map(&g, &NeverClobbers, &GcConfig::strict())[put]
    };

    assert!(store(PlanTier::Optimizing));
    assert!(!store(PlanTier::FullyOptimizing));
}

/// A flow analysis that records, per projection, whether any value flowing
/// into it may have been produced by a GCing node.
#[test]
fn shadow_values_track_phi_inputs() {
    let mut g = Graph::new(Plan::new(PlanTier::Optimizing));
    let obj = g.add_simple(Opcode::NewObject);
    let upsilon = g.add_node(Opcode::Upsilon, [Edge::untyped(obj)], NodeData::None);
    let phi = g.add_simple(Opcode::Phi);
    g.set_form(GraphForm::Ssa);

    let gc = compute_gc_map(&g, &NeverClobbers, &GcConfig::strict());
    let mut tainted: FlowMap<bool> = FlowMap::new(&g);
    for node in g.nodes() {
        let from_operands = node.children().iter().any(|edge| gc[edge.node()]);
        NodeFlowProjection::for_each(&g, node, |projection| {
            tainted[projection] = gc[node.id()] || from_operands;
        });
    }
    *tainted.at_shadow_mut(phi) = tainted[upsilon];

    assert_eq!(
        (tainted[obj], tainted[upsilon], tainted[phi]),
        (true, true, false)
    );
    assert!(*tainted.at_shadow(phi));
    assert_eq!(
        tainted.dump(&g).to_string(),
        "@0=>true, @1=>true, shadow(@2)=>true"
    );
}

#[test]
fn map_follows_graph_growth() {
    let (mut g, _) = straight_line();
    let mut map = compute_gc_map(&g, &NeverClobbers, &GcConfig::strict());

    let call = g.add_simple(Opcode::Call);
    map.resize(&g);
    assert!(!map[call]);

    let fresh = compute_gc_map(&g, &NeverClobbers, &GcConfig::strict());
    assert!(fresh[call]);
    assert_eq!(summarize(&g, &fresh).may_gc, 3);
}

#[test]
fn tracing_setup_is_idempotent() {
    init_tracing();
    init_tracing();

    let (g, _) = straight_line();
    let map = compute_gc_map(&g, &NeverClobbers, &GcConfig::default());
    assert_eq!(summarize(&g, &map).may_gc, 2);
}
