//! The heap-clobber predicate.
//!
//! Whether a node may write arbitrary heap state is computed by a separate
//! analysis. The classifier only consumes its verdict through
//! [`ClobberOracle`], and treats every world-clobbering node as GC-capable
//! without trying to disprove allocation for it.

use rustc_hash::FxHashSet;

use dfg_ir::{Graph, Node, NodeId};

/// Verdict source for "does this node clobber the world?".
pub trait ClobberOracle {
    fn clobbers_world(&self, graph: &Graph, node: &Node) -> bool;
}

/// Any `Fn(&Graph, &Node) -> bool` closure is an oracle.
impl<F> ClobberOracle for F
where
    F: Fn(&Graph, &Node) -> bool,
{
    fn clobbers_world(&self, graph: &Graph, node: &Node) -> bool {
        self(graph, node)
    }
}

/// Oracle for graphs known to contain no world-clobbering nodes.
#[derive(Copy, Clone, Debug, Default)]
pub struct NeverClobbers;

impl ClobberOracle for NeverClobbers {
    fn clobbers_world(&self, _graph: &Graph, _node: &Node) -> bool {
        false
    }
}

/// Precomputed verdicts: the set of nodes that clobber the world.
#[derive(Clone, Debug, Default)]
pub struct ClobberSet {
    nodes: FxHashSet<NodeId>,
}

impl ClobberSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `node` as clobbering the world.
    pub fn insert(&mut self, node: NodeId) -> bool {
        self.nodes.insert(node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<NodeId> for ClobberSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl ClobberOracle for ClobberSet {
    fn clobbers_world(&self, _graph: &Graph, node: &Node) -> bool {
        self.contains(node.id())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use dfg_ir::{Graph, Opcode, Plan, PlanTier};

    use super::*;

    #[test]
    fn set_answers_by_node_id() {
        let mut g = Graph::new(Plan::new(PlanTier::Optimizing));
        let a = g.add_simple(Opcode::Call);
        let b = g.add_simple(Opcode::GetLocal);
        let set: ClobberSet = [a].into_iter().collect();

        let verdicts: Vec<bool> = g.nodes().map(|n| set.clobbers_world(&g, n)).collect();
        assert_eq!(verdicts, vec![true, false]);
        assert!(!set.contains(b));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn closures_are_oracles() {
        let mut g = Graph::new(Plan::new(PlanTier::Optimizing));
        g.add_simple(Opcode::Call);
        g.add_simple(Opcode::ArithAdd);
        let calls_clobber = |_: &Graph, n: &Node| n.op() == Opcode::Call;

        let verdicts: Vec<bool> = g
            .nodes()
            .map(|n| calls_clobber.clobbers_world(&g, n))
            .collect();
        assert_eq!(verdicts, vec![true, false]);
    }

    #[test]
    fn never_clobbers() {
        let mut g = Graph::new(Plan::new(PlanTier::Optimizing));
        g.add_simple(Opcode::Call);
        assert!(g.nodes().all(|n| !NeverClobbers.clobbers_world(&g, n)));
        assert!(ClobberSet::new().is_empty());
    }
}
