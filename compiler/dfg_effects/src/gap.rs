//! Classification gaps.
//!
//! A gap is an opcode the classification table routes to a conditional rule
//! that cannot produce an answer: either no rule exists for it, or the node
//! lacks the operand or side data the rule inspects. Gaps are defects in the
//! compiler, never conditions of the program being compiled, so they are
//! not returned to callers of [`may_gc`](crate::may_gc). The configured
//! [`GapPolicy`](crate::GapPolicy) decides whether a gap aborts or degrades
//! to "may GC".

use dfg_ir::Opcode;

/// Why a conditional rule could not classify a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GapReason {
    /// The table marks the opcode conditional but no rule handles it.
    #[error("no conditional rule")]
    NoRule,
    /// The rule reads an operand the node does not have.
    #[error("missing operand {0}")]
    MissingOperand(usize),
    /// The rule reads side data the node does not carry.
    #[error("missing {0}")]
    MissingSideData(&'static str),
}

/// A node the classifier could not place in a bucket.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("GC classification gap for {op}: {reason}")]
pub struct ClassificationGap {
    op: Opcode,
    reason: GapReason,
}

impl ClassificationGap {
    pub fn new(op: Opcode, reason: GapReason) -> Self {
        Self { op, reason }
    }

    pub fn op(&self) -> Opcode {
        self.op
    }

    pub fn reason(&self) -> GapReason {
        self.reason
    }
}
