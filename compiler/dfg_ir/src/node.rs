//! Nodes and operand edges.

use std::fmt;

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::{NodeData, NodeId, Opcode, UseKind};

// ── Edges ───────────────────────────────────────────────────────────

/// A typed operand: the node producing the value plus the representation
/// this use has been proven to see.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    node: NodeId,
    use_kind: UseKind,
}

impl Edge {
    #[inline]
    pub const fn new(node: NodeId, use_kind: UseKind) -> Self {
        Self { node, use_kind }
    }

    /// An edge with no proven representation.
    #[inline]
    pub const fn untyped(node: NodeId) -> Self {
        Self::new(node, UseKind::Untyped)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.node
    }

    #[inline]
    pub fn use_kind(self) -> UseKind {
        self.use_kind
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.use_kind, self.node)
    }
}

// ── Flags ───────────────────────────────────────────────────────────

bitflags! {
    /// Per-node bookkeeping bits, set when the node is created.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct NodeFlags: u8 {
        /// Operands live in the var-arg child list; address them with
        /// [`Graph::var_arg_child`](crate::Graph::var_arg_child).
        const HAS_VAR_ARGS = 1 << 0;
        /// The node merges values from several predecessors (`Phi`).
        const IS_PHI = 1 << 1;
        /// The node produces a compile-time constant.
        const IS_CONSTANT = 1 << 2;
    }
}

/// Edges are stored inline for the common case of at most three operands.
pub type EdgeList = SmallVec<[Edge; 3]>;

// ── Nodes ───────────────────────────────────────────────────────────

/// A single DFG node.
///
/// Nodes are plain data owned by their [`Graph`](crate::Graph) and
/// addressed by [`NodeId`]. Analyses borrow them; they never mutate them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    id: NodeId,
    op: Opcode,
    flags: NodeFlags,
    children: EdgeList,
    data: NodeData,
}

impl Node {
    pub(crate) fn new(id: NodeId, op: Opcode, children: EdgeList, data: NodeData) -> Self {
        let mut flags = NodeFlags::empty();
        if op.has_var_args() {
            flags |= NodeFlags::HAS_VAR_ARGS;
        }
        if op == Opcode::Phi {
            flags |= NodeFlags::IS_PHI;
        }
        if matches!(
            op,
            Opcode::JSConstant | Opcode::DoubleConstant | Opcode::Int52Constant
        ) {
            flags |= NodeFlags::IS_CONSTANT;
        }
        Self {
            id,
            op,
            flags,
            children,
            data,
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn op(&self) -> Opcode {
        self.op
    }

    #[inline]
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    #[inline]
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    /// All operand edges, in order.
    #[inline]
    pub fn children(&self) -> &[Edge] {
        &self.children
    }

    #[inline]
    pub fn child1(&self) -> Option<Edge> {
        self.children.first().copied()
    }

    #[inline]
    pub fn child2(&self) -> Option<Edge> {
        self.children.get(1).copied()
    }

    #[inline]
    pub fn child3(&self) -> Option<Edge> {
        self.children.get(2).copied()
    }

    pub fn is_phi(&self) -> bool {
        self.flags.contains(NodeFlags::IS_PHI)
    }

    pub fn has_var_args(&self) -> bool {
        self.flags.contains(NodeFlags::HAS_VAR_ARGS)
    }

    /// Returns `true` if the first two operands both have use kind `kind`.
    pub fn is_binary_use_kind(&self, kind: UseKind) -> bool {
        self.is_binary_use_kind_pair(kind, kind)
    }

    /// Returns `true` if the first operand has use kind `left` and the
    /// second has `right`.
    pub fn is_binary_use_kind_pair(&self, left: UseKind, right: UseKind) -> bool {
        match (self.child1(), self.child2()) {
            (Some(a), Some(b)) => a.use_kind() == left && b.use_kind() == right,
            _ => false,
        }
    }

    /// Returns `true` if the first two operands are `{a, b}` in either order.
    pub fn is_symmetric_binary_use_kind(&self, a: UseKind, b: UseKind) -> bool {
        self.is_binary_use_kind_pair(a, b) || self.is_binary_use_kind_pair(b, a)
    }

    /// The int32 value, if this is an int32 constant node.
    pub fn as_int32_constant(&self) -> Option<i32> {
        if !self.flags.contains(NodeFlags::IS_CONSTANT) {
            return None;
        }
        self.data.constant().and_then(|value| value.as_int32())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}(", self.id, self.op)?;
        for (i, edge) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{edge}")?;
        }
        f.write_str(")")
    }
}
