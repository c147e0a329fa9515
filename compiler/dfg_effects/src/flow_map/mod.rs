//! Node-indexed value storage for flow-sensitive analyses.
//!
//! At every program point a flow-sensitive analysis tracks a value for each
//! node, plus, in SSA form, a *shadow* value for each `Phi`: the value that
//! arrives through the `Upsilon`s on the incoming edges before the `Phi`
//! itself executes. [`FlowMap`] keeps both in two dense arrays indexed by
//! [`NodeId`], and [`NodeFlowProjection`] names one slot of either array so
//! passes can treat primary and shadow values uniformly.
//!
//! # Sizing
//!
//! A flow map does not borrow its graph; it is sized from it. After adding
//! nodes to the graph, call [`FlowMap::resize`] before touching the new
//! indices. Resizing never shrinks and never disturbs existing entries.

use std::fmt;
use std::ops::{Index, IndexMut};

use dfg_ir::{Graph, GraphForm, Node, NodeId};

/// Which of a node's two flow values a projection selects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    Primary,
    Shadow,
}

/// A node together with a choice of its primary or shadow value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeFlowProjection {
    node: NodeId,
    kind: ProjectionKind,
}

impl NodeFlowProjection {
    pub fn new(node: NodeId, kind: ProjectionKind) -> Self {
        Self { node, kind }
    }

    pub fn primary(node: NodeId) -> Self {
        Self::new(node, ProjectionKind::Primary)
    }

    pub fn shadow(node: NodeId) -> Self {
        Self::new(node, ProjectionKind::Shadow)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.node
    }

    #[inline]
    pub fn kind(self) -> ProjectionKind {
        self.kind
    }

    /// Visit every projection of `node` that carries a value: the primary
    /// one always, and the shadow one for a `Phi` in SSA form.
    pub fn for_each(graph: &Graph, node: &Node, mut f: impl FnMut(NodeFlowProjection)) {
        f(Self::primary(node.id()));
        if graph.form() == GraphForm::Ssa && node.is_phi() {
            f(Self::shadow(node.id()));
        }
    }
}

impl fmt::Display for NodeFlowProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ProjectionKind::Primary => write!(f, "{}", self.node),
            ProjectionKind::Shadow => write!(f, "shadow({})", self.node),
        }
    }
}

/// Per-node analysis values with a parallel shadow array.
///
/// Both arrays always cover every index below the graph's
/// `max_node_count()` as of the last [`resize`](Self::resize) or
/// [`clear`](Self::clear). Unwritten slots hold `T::default()`. Shadow
/// slots exist for every node regardless of form; outside SSA they are
/// simply never written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowMap<T> {
    map: Vec<T>,
    shadow_map: Vec<T>,
}

impl<T: Default> FlowMap<T> {
    /// Create a map sized for `graph`, every slot defaulted.
    pub fn new(graph: &Graph) -> Self {
        let mut map = Self {
            map: Vec::new(),
            shadow_map: Vec::new(),
        };
        map.resize(graph);
        map
    }

    /// Grow both arrays to `graph.max_node_count()`. Existing entries keep
    /// their indices; new slots are `T::default()`. Never shrinks.
    pub fn resize(&mut self, graph: &Graph) {
        let len = graph.max_node_count();
        if self.map.len() < len {
            self.map.resize_with(len, T::default);
        }
        if self.shadow_map.len() < len {
            self.shadow_map.resize_with(len, T::default);
        }
    }

    /// Reset every slot to `T::default()` and resize for `graph`.
    pub fn clear(&mut self, graph: &Graph) {
        self.map.clear();
        self.shadow_map.clear();
        self.resize(graph);
    }
}

impl<T> FlowMap<T> {
    /// Number of addressable slots in each array.
    pub fn capacity(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn at_index(&self, index: usize) -> &T {
        &self.map[index]
    }

    #[inline]
    pub fn at_index_mut(&mut self, index: usize) -> &mut T {
        &mut self.map[index]
    }

    #[inline]
    pub fn at(&self, node: NodeId) -> &T {
        self.at_index(node.index())
    }

    #[inline]
    pub fn at_mut(&mut self, node: NodeId) -> &mut T {
        self.at_index_mut(node.index())
    }

    #[inline]
    pub fn at_shadow_index(&self, index: usize) -> &T {
        &self.shadow_map[index]
    }

    #[inline]
    pub fn at_shadow_index_mut(&mut self, index: usize) -> &mut T {
        &mut self.shadow_map[index]
    }

    #[inline]
    pub fn at_shadow(&self, node: NodeId) -> &T {
        self.at_shadow_index(node.index())
    }

    #[inline]
    pub fn at_shadow_mut(&mut self, node: NodeId) -> &mut T {
        self.at_shadow_index_mut(node.index())
    }

    #[inline]
    pub fn at_kind(&self, node: NodeId, kind: ProjectionKind) -> &T {
        match kind {
            ProjectionKind::Primary => self.at(node),
            ProjectionKind::Shadow => self.at_shadow(node),
        }
    }

    #[inline]
    pub fn at_kind_mut(&mut self, node: NodeId, kind: ProjectionKind) -> &mut T {
        match kind {
            ProjectionKind::Primary => self.at_mut(node),
            ProjectionKind::Shadow => self.at_shadow_mut(node),
        }
    }

    #[inline]
    pub fn at_projection(&self, projection: NodeFlowProjection) -> &T {
        self.at_kind(projection.node(), projection.kind())
    }

    #[inline]
    pub fn at_projection_mut(&mut self, projection: NodeFlowProjection) -> &mut T {
        self.at_kind_mut(projection.node(), projection.kind())
    }
}

impl<T: Default + PartialEq + fmt::Display> FlowMap<T> {
    /// Printable view of every non-default entry of a live node: primary
    /// entries as `@i=>value`, then shadow entries as `shadow(@i)=>value`.
    pub fn dump<'a>(&'a self, graph: &'a Graph) -> FlowMapDump<'a, T> {
        FlowMapDump { map: self, graph }
    }
}

impl<T> Index<NodeId> for FlowMap<T> {
    type Output = T;

    fn index(&self, node: NodeId) -> &T {
        self.at(node)
    }
}

impl<T> IndexMut<NodeId> for FlowMap<T> {
    fn index_mut(&mut self, node: NodeId) -> &mut T {
        self.at_mut(node)
    }
}

impl<T> Index<NodeFlowProjection> for FlowMap<T> {
    type Output = T;

    fn index(&self, projection: NodeFlowProjection) -> &T {
        self.at_projection(projection)
    }
}

impl<T> IndexMut<NodeFlowProjection> for FlowMap<T> {
    fn index_mut(&mut self, projection: NodeFlowProjection) -> &mut T {
        self.at_projection_mut(projection)
    }
}

/// Display adapter returned by [`FlowMap::dump`].
pub struct FlowMapDump<'a, T> {
    map: &'a FlowMap<T>,
    graph: &'a Graph,
}

impl<T: Default + PartialEq + fmt::Display> fmt::Display for FlowMapDump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let empty = T::default();
        let mut first = true;
        let live = || {
            self.graph
                .nodes()
                .map(Node::id)
                .filter(|id| id.index() < self.map.capacity())
        };

        let entries = live()
            .map(NodeFlowProjection::primary)
            .chain(live().map(NodeFlowProjection::shadow));
        for projection in entries {
            let value = self.map.at_projection(projection);
            if *value == empty {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{projection}=>{value}")?;
        }
        Ok(())
    }
}
