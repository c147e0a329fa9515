//! The node graph of one compilation plan.
//!
//! A [`Graph`] is an arena of node slots. Slots are allocated in order and
//! never reused: removing a node leaves a hole, so [`Graph::max_node_count`]
//! is an upper bound on live nodes rather than their count. Side tables
//! sized by `max_node_count()` therefore stay valid across removals and only
//! need to grow when nodes are added.

use crate::{ConstantValue, Edge, EdgeList, Node, NodeData, NodeId, Opcode};

/// Which optimizing tier a plan compiles for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanTier {
    /// The lower optimizing tier. Code is produced quickly and some
    /// specializations still go through runtime helpers.
    Optimizing,
    /// The highest tier. Representations and bounds are proven strongly
    /// enough that more operations are emitted inline.
    FullyOptimizing,
}

/// Plan-level facts an analysis may depend on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    pub tier: PlanTier,
    /// Unlinked plans produce code that is not bound to one global object
    /// and can be shared.
    pub unlinked: bool,
}

impl Plan {
    pub const fn new(tier: PlanTier) -> Self {
        Self {
            tier,
            unlinked: false,
        }
    }

    /// An unlinked plan for the lower tier.
    pub const fn unlinked() -> Self {
        Self {
            tier: PlanTier::Optimizing,
            unlinked: true,
        }
    }

    #[inline]
    pub fn is_fully_optimizing(self) -> bool {
        self.tier == PlanTier::FullyOptimizing
    }

    #[inline]
    pub fn is_unlinked(self) -> bool {
        self.unlinked
    }
}

/// The graph's representation form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphForm {
    /// Locals are accessed through `GetLocal`/`SetLocal` per block.
    #[default]
    LoadStore,
    /// Locals are threaded between blocks through `Phi`s of locals.
    ThreadedCps,
    /// Static single assignment with `Upsilon`/`Phi` pairs. `Phi` nodes have
    /// a shadow value in flow-sensitive analyses.
    Ssa,
}

/// The node graph of one compilation plan.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    nodes: Vec<Option<Node>>,
    form: GraphForm,
    plan: Plan,
}

impl Graph {
    /// Create an empty graph in load/store form.
    pub fn new(plan: Plan) -> Self {
        Self {
            nodes: Vec::new(),
            form: GraphForm::default(),
            plan,
        }
    }

    #[inline]
    pub fn plan(&self) -> Plan {
        self.plan
    }

    #[inline]
    pub fn form(&self) -> GraphForm {
        self.form
    }

    /// Change the graph's form (done by the SSA conversion phase).
    pub fn set_form(&mut self, form: GraphForm) {
        self.form = form;
    }

    /// Upper bound on node indices: every live node has
    /// `id.index() < max_node_count()`.
    #[inline]
    pub fn max_node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes that have not been removed.
    pub fn live_node_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    /// Append a node and return its ID.
    pub fn add_node(
        &mut self,
        op: Opcode,
        children: impl IntoIterator<Item = Edge>,
        data: NodeData,
    ) -> NodeId {
        let id = self.next_id();
        let children: EdgeList = children.into_iter().collect();
        self.nodes.push(Some(Node::new(id, op, children, data)));
        id
    }

    /// Append an operand-less node with no side data.
    pub fn add_simple(&mut self, op: Opcode) -> NodeId {
        self.add_node(op, [], NodeData::None)
    }

    /// Append a `JSConstant` node holding `value`.
    pub fn add_constant(&mut self, value: ConstantValue) -> NodeId {
        self.add_node(Opcode::JSConstant, [], NodeData::Constant(value))
    }

    /// Remove a node, leaving its slot empty. Returns the removed node.
    ///
    /// The slot is never reused, so `max_node_count()` does not shrink.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        self.nodes.get_mut(id.index()).and_then(Option::take)
    }

    /// Look up a live node.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.node_at(id.index())
    }

    /// Look up a live node by raw index.
    #[inline]
    pub fn node_at(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index).and_then(Option::as_ref)
    }

    /// Live nodes in index order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter_map(Option::as_ref)
    }

    /// The `index`th fixed operand of `node`, resolved to the node it reads.
    pub fn child(&self, node: &Node, index: usize) -> Option<&Node> {
        node.children()
            .get(index)
            .and_then(|edge| self.node(edge.node()))
    }

    /// The `index`th var-arg operand edge of `node`.
    pub fn var_arg_child(&self, node: &Node, index: usize) -> Option<Edge> {
        debug_assert!(
            node.has_var_args(),
            "{} does not take var-arg children",
            node.op()
        );
        node.children().get(index).copied()
    }

    /// The int32 value of `edge`'s producer, if it is an int32 constant.
    pub fn int32_constant(&self, edge: Edge) -> Option<i32> {
        self.node(edge.node()).and_then(Node::as_int32_constant)
    }

    #[allow(clippy::cast_possible_truncation)] // node counts always fit u32
    fn next_id(&self) -> NodeId {
        NodeId::new(self.nodes.len() as u32)
    }
}

#[cfg(test)]
mod tests;
