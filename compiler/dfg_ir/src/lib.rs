//! DFG IR - data-flow graph for the optimizing JIT middle end.
//!
//! This crate contains the data model shared by every middle-end analysis:
//!
//! - **[`Opcode`]** — the closed set of node operations
//! - **[`UseKind`]** — the proven representation of each operand edge
//! - **[`Node`]** / **[`Edge`]** — plain-data nodes with typed operands and
//!   opcode-specific side data ([`NodeData`])
//! - **[`Graph`]** — the arena owning every node of one compilation plan,
//!   plus the plan's tier and the graph's form
//!
//! # Design Philosophy
//!
//! - **Index, don't point**: nodes are addressed by [`NodeId`] into the
//!   graph's arena; analyses borrow nodes and keep side tables by index.
//! - **Never reuse slots**: removal leaves a hole, so
//!   [`Graph::max_node_count`] bounds every index ever handed out.
//! - **Close the opcode set**: [`Opcode`] is generated from one list, and
//!   analyses match it exhaustively.

mod array_mode;
mod graph;
mod node;
mod node_data;
mod node_id;
mod opcode;
mod use_kind;

pub use array_mode::{ArrayAction, ArrayMode, ArrayType};
pub use graph::{Graph, GraphForm, Plan, PlanTier};
pub use node::{Edge, EdgeList, Node, NodeFlags};
pub use node_data::{
    ConstantValue, MultiPutByOffsetData, NodeData, PutByOffsetVariant, StructureId, SwitchData,
    SwitchKind,
};
pub use node_id::NodeId;
pub use opcode::{Opcode, UnknownOpcode};
pub use use_kind::UseKind;
