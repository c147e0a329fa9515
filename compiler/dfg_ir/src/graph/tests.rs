use pretty_assertions::assert_eq;

use crate::{
    ArrayAction, ArrayMode, ArrayType, ConstantValue, Edge, Graph, GraphForm, MultiPutByOffsetData,
    NodeData, NodeFlags, NodeId, Opcode, Plan, PlanTier, PutByOffsetVariant, StructureId, UseKind,
};

fn graph() -> Graph {
    Graph::new(Plan::new(PlanTier::Optimizing))
}

// ── Arena ───────────────────────────────────────────────────────────

#[test]
fn ids_are_dense_and_sequential() {
    let mut g = graph();
    let a = g.add_simple(Opcode::GetLocal);
    let b = g.add_simple(Opcode::GetLocal);
    let c = g.add_simple(Opcode::Jump);

    assert_eq!((a.raw(), b.raw(), c.raw()), (0, 1, 2));
    assert_eq!(g.max_node_count(), 3);
    assert_eq!(g.live_node_count(), 3);
}

#[test]
fn removal_leaves_a_hole() {
    let mut g = graph();
    let a = g.add_simple(Opcode::GetLocal);
    let b = g.add_simple(Opcode::Phantom);
    let removed = g.remove_node(b);

    assert_eq!(removed.map(|n| n.op()), Some(Opcode::Phantom));
    assert!(g.node(b).is_none());
    assert!(g.node(a).is_some());
    assert_eq!(g.max_node_count(), 2);
    assert_eq!(g.live_node_count(), 1);

    // Slots are never reused.
    let c = g.add_simple(Opcode::Return);
    assert_eq!(c, NodeId::new(2));
    assert_eq!(g.max_node_count(), 3);
}

#[test]
fn removing_twice_or_out_of_range_is_none() {
    let mut g = graph();
    let a = g.add_simple(Opcode::GetLocal);
    assert!(g.remove_node(a).is_some());
    assert!(g.remove_node(a).is_none());
    assert!(g.remove_node(NodeId::new(40)).is_none());
}

#[test]
fn nodes_iterates_live_nodes_in_order() {
    let mut g = graph();
    let a = g.add_simple(Opcode::GetLocal);
    let b = g.add_simple(Opcode::SetLocal);
    let c = g.add_simple(Opcode::Return);
    g.remove_node(b);

    let ids: Vec<NodeId> = g.nodes().map(|n| n.id()).collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn form_and_plan() {
    let mut g = Graph::new(Plan::unlinked());
    assert_eq!(g.form(), GraphForm::LoadStore);
    assert!(g.plan().is_unlinked());
    assert!(!g.plan().is_fully_optimizing());

    g.set_form(GraphForm::Ssa);
    assert_eq!(g.form(), GraphForm::Ssa);

    let top = Graph::new(Plan::new(PlanTier::FullyOptimizing));
    assert!(top.plan().is_fully_optimizing());
}

// ── Nodes and edges ─────────────────────────────────────────────────

#[test]
fn use_kind_queries() {
    let mut g = graph();
    let x = g.add_simple(Opcode::GetLocal);
    let y = g.add_simple(Opcode::GetLocal);
    let eq = g.add_node(
        Opcode::CompareStrictEq,
        [Edge::new(x, UseKind::Symbol), Edge::untyped(y)],
        NodeData::None,
    );
    let node = g.node(eq).cloned();
    let Some(node) = node else {
        panic!("compare node missing");
    };

    assert!(!node.is_binary_use_kind(UseKind::Symbol));
    assert!(node.is_binary_use_kind_pair(UseKind::Symbol, UseKind::Untyped));
    assert!(!node.is_binary_use_kind_pair(UseKind::Untyped, UseKind::Symbol));
    assert!(node.is_symmetric_binary_use_kind(UseKind::Untyped, UseKind::Symbol));
    assert_eq!(node.child3(), None);
}

#[test]
fn unary_node_is_never_binary() {
    let mut g = graph();
    let x = g.add_simple(Opcode::GetLocal);
    let neg = g.add_node(
        Opcode::ArithNegate,
        [Edge::new(x, UseKind::Int32)],
        NodeData::None,
    );
    let node = g.node(neg).map(|n| n.is_binary_use_kind(UseKind::Int32));
    assert_eq!(node, Some(false));
}

#[test]
fn flags_follow_opcode() {
    let mut g = graph();
    let phi = g.add_simple(Opcode::Phi);
    let k = g.add_constant(ConstantValue::Int32(7));
    let put = g.add_node(
        Opcode::PutByVal,
        [],
        NodeData::ArrayMode(ArrayMode::write(ArrayType::Int32)),
    );

    let flags = |id| g.node(id).map(|n| n.flags()).unwrap_or_default();
    assert_eq!(flags(phi), NodeFlags::IS_PHI);
    assert_eq!(flags(k), NodeFlags::IS_CONSTANT);
    assert_eq!(flags(put), NodeFlags::HAS_VAR_ARGS);
}

#[test]
fn int32_constants_resolve_through_edges() {
    let mut g = graph();
    let small = g.add_constant(ConstantValue::Int32(65));
    let dbl = g.add_constant(ConstantValue::double(65.0));
    let local = g.add_simple(Opcode::GetLocal);

    assert_eq!(g.int32_constant(Edge::new(small, UseKind::Int32)), Some(65));
    assert_eq!(g.int32_constant(Edge::untyped(dbl)), None);
    assert_eq!(g.int32_constant(Edge::untyped(local)), None);
    assert_eq!(g.int32_constant(Edge::untyped(NodeId::new(99))), None);
}

#[test]
fn child_and_var_arg_child() {
    let mut g = graph();
    let map = g.add_simple(Opcode::GetLocal);
    let key = g.add_simple(Opcode::GetLocal);
    let value = g.add_simple(Opcode::GetLocal);
    let set = g.add_node(
        Opcode::WeakMapSet,
        [
            Edge::new(map, UseKind::WeakMapObject),
            Edge::new(key, UseKind::Object),
            Edge::untyped(value),
        ],
        NodeData::None,
    );
    let Some(node) = g.node(set) else {
        panic!("set node missing");
    };

    assert_eq!(g.child(node, 2).map(|n| n.id()), Some(value));
    assert_eq!(
        g.var_arg_child(node, 1),
        Some(Edge::new(key, UseKind::Object))
    );
    assert_eq!(g.var_arg_child(node, 3), None);
}

#[test]
fn node_display() {
    let mut g = graph();
    let a = g.add_simple(Opcode::GetLocal);
    let b = g.add_simple(Opcode::GetLocal);
    let add = g.add_node(
        Opcode::ArithAdd,
        [Edge::new(a, UseKind::Int32), Edge::new(b, UseKind::DoubleRep)],
        NodeData::None,
    );
    let text = g.node(add).map(ToString::to_string);
    assert_eq!(
        text.as_deref(),
        Some("@2 = ArithAdd(Int32Use:@0, DoubleRepUse:@1)")
    );
}

// ── Side data ───────────────────────────────────────────────────────

#[test]
fn mode_for_put_generalizes_arguments_objects() {
    let direct = ArrayMode::write(ArrayType::DirectArguments);
    assert_eq!(direct.mode_for_put().array_type(), ArrayType::Generic);
    assert_eq!(direct.mode_for_put().action(), ArrayAction::Write);

    let typed = ArrayMode::write(ArrayType::Uint8Array);
    assert_eq!(typed.mode_for_put(), typed);
    assert!(typed.array_type().is_typed_array());
    assert!(!ArrayType::Contiguous.is_typed_array());
}

#[test]
fn integer_typed_arrays() {
    for ty in [
        ArrayType::Int8Array,
        ArrayType::Uint8ClampedArray,
        ArrayType::Uint32Array,
    ] {
        assert!(ty.is_int_typed_array(), "{ty:?}");
    }
    for ty in [
        ArrayType::Float32Array,
        ArrayType::Float64Array,
        ArrayType::BigInt64Array,
        ArrayType::AnyTypedArray,
        ArrayType::Int32,
        ArrayType::Contiguous,
    ] {
        assert!(!ty.is_int_typed_array(), "{ty:?}");
    }
}

#[test]
fn multi_put_reallocates_only_on_capacity_change() {
    let s = StructureId::new;
    let replace = PutByOffsetVariant::Replace {
        structure: s(1),
        offset: 0,
    };
    let in_place = PutByOffsetVariant::Transition {
        from: s(1),
        to: s(2),
        offset: 1,
        old_capacity: 4,
        new_capacity: 4,
    };
    let growing = PutByOffsetVariant::Transition {
        from: s(2),
        to: s(3),
        offset: 4,
        old_capacity: 4,
        new_capacity: 8,
    };

    assert!(!MultiPutByOffsetData::new(vec![replace, in_place]).reallocates_storage());
    assert!(MultiPutByOffsetData::new(vec![replace, growing]).reallocates_storage());
    assert!(!MultiPutByOffsetData::default().reallocates_storage());
}
