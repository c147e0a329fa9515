//! GC-effect classifier.
//!
//! Answers, per node, whether the machine code generated for it can trigger
//! a garbage collection. The answer gates safepoint placement, deferred-GC
//! scope elision, OSR exit validity, and store barrier elision, so it must
//! never under-report: any doubt resolves to "may GC".
//!
//! # Algorithm
//!
//! 1. A node that clobbers the world may GC.
//! 2. Otherwise the opcode's [`GcBucket`] decides: `Never` and `Always` are
//!    fixed answers, `Conditional` defers to [`classify_conditional`], which
//!    inspects operand use kinds, side data, the plan tier, and the
//!    [`GcConfig`].
//! 3. A conditional opcode that cannot be answered is a
//!    [`ClassificationGap`], resolved by [`GcConfig::gap_policy`].

mod table;

use dfg_ir::{ArrayMode, ArrayType, Edge, Graph, Node, Opcode, SwitchKind, UseKind};

use crate::{ClassificationGap, ClobberOracle, GapReason, GcConfig};

pub use table::{gc_bucket, GcBucket};

/// Largest character code with a preallocated single-character string.
pub const MAX_SINGLE_CHARACTER_STRING: u32 = 0xFF;

/// Can the code generated for `node` trigger a garbage collection?
///
/// Pure: reads the node, its operands' producers, the graph's plan, and
/// `config`. Never fails; a classification gap is resolved by the
/// configured [`GapPolicy`](crate::GapPolicy).
pub fn may_gc(graph: &Graph, node: &Node, clobber: &dyn ClobberOracle, config: &GcConfig) -> bool {
    // Clobbering and GC are not proven independent: a node that may write
    // anything may also allocate.
    if clobber.clobbers_world(graph, node) {
        return true;
    }

    match gc_bucket(node.op()) {
        GcBucket::Never => false,
        GcBucket::Always => true,
        GcBucket::Conditional => match classify_conditional(graph, node, config) {
            Ok(answer) => answer,
            Err(gap) => config.gap_policy.resolve(&gap),
        },
    }
}

/// Classification trait for GC effects.
///
/// Provides the core `may_gc` query plus a convenience predicate.
/// Implemented by [`GcClassifier`], which binds a graph, clobber oracle, and
/// configuration.
pub trait GcClassification {
    /// Can `node` trigger a garbage collection?
    fn may_gc(&self, node: &Node) -> bool;

    /// Returns `true` if `node` is proven unable to GC.
    fn is_gc_free(&self, node: &Node) -> bool {
        !self.may_gc(node)
    }
}

/// GC-effect classifier bound to one graph.
pub struct GcClassifier<'a> {
    graph: &'a Graph,
    clobber: &'a dyn ClobberOracle,
    config: GcConfig,
}

impl<'a> GcClassifier<'a> {
    pub fn new(graph: &'a Graph, clobber: &'a dyn ClobberOracle, config: GcConfig) -> Self {
        Self {
            graph,
            clobber,
            config,
        }
    }

    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    pub fn config(&self) -> &GcConfig {
        &self.config
    }
}

impl GcClassification for GcClassifier<'_> {
    fn may_gc(&self, node: &Node) -> bool {
        may_gc(self.graph, node, self.clobber, &self.config)
    }
}

/// Answer a [`GcBucket::Conditional`] opcode.
///
/// Returns a gap if `node`'s opcode has no conditional rule, or if the node
/// lacks an operand or side data its rule reads.
pub fn classify_conditional(
    graph: &Graph,
    node: &Node,
    config: &GcConfig,
) -> Result<bool, ClassificationGap> {
    let op = node.op();
    match op {
        // Coercing an untyped value may call a user `valueOf`.
        Opcode::ToIntegerOrInfinity
        | Opcode::ToLength
        | Opcode::GlobalIsFinite
        | Opcode::GlobalIsNaN => Ok(operand(node, 0)?.use_kind() == UseKind::Untyped),

        Opcode::CallNumberConstructor => Ok(operand(node, 0)?.use_kind() != UseKind::BigInt32),

        Opcode::CallStringConstructor | Opcode::ToString => Ok(!matches!(
            operand(node, 0)?.use_kind(),
            UseKind::StringObject | UseKind::StringOrStringObject | UseKind::StringOrOther
        )),

        Opcode::CheckTraps => {
            debug_assert!(
                config.use_polling_traps || graph.plan().is_unlinked(),
                "CheckTraps emitted without polling traps in a linked plan"
            );
            Ok(true)
        }

        Opcode::CompareEq
        | Opcode::CompareLess
        | Opcode::CompareLessEq
        | Opcode::CompareGreater
        | Opcode::CompareGreaterEq => {
            require_binary(node)?;
            Ok(!compare_is_gc_free(node, config))
        }

        Opcode::CompareStrictEq => {
            require_binary(node)?;
            Ok(!strict_eq_is_gc_free(node, config))
        }

        // Indexing a string may resolve a rope.
        Opcode::GetByVal | Opcode::GetByValMegamorphic | Opcode::EnumeratorGetByVal => {
            Ok(array_mode(node)?.array_type() == ArrayType::String)
        }

        Opcode::PutByValDirect
        | Opcode::PutByVal
        | Opcode::PutByValAlias
        | Opcode::PutByValMegamorphic => {
            // The highest tier stores inline whatever the array mode.
            if graph.plan().is_fully_optimizing() {
                return Ok(false);
            }
            // The lower tier converts the stored value through a runtime
            // helper for integer typed arrays.
            Ok(array_mode(node)?
                .mode_for_put()
                .array_type()
                .is_int_typed_array())
        }

        Opcode::MapHash => Ok(match operand(node, 0)?.use_kind() {
            UseKind::Boolean
            | UseKind::Int32
            | UseKind::Symbol
            | UseKind::Object
            | UseKind::HeapBigInt => false,
            UseKind::BigInt32 => !config.bigint32_representation,
            // Hashing anything else may resolve a rope.
            _ => true,
        }),

        Opcode::MultiPutByOffset => node
            .data()
            .multi_put_by_offset_data()
            .map(dfg_ir::MultiPutByOffsetData::reallocates_storage)
            .ok_or(ClassificationGap::new(
                op,
                GapReason::MissingSideData("put-by-offset variants"),
            )),

        Opcode::SameValue => {
            require_binary(node)?;
            Ok(!node.is_binary_use_kind(UseKind::DoubleRep))
        }

        // Codes up to the single-character limit come from a preallocated
        // table; anything else allocates a fresh string.
        Opcode::StringFromCharCode => {
            let code = graph
                .int32_constant(operand(node, 0)?)
                .and_then(|value| u32::try_from(value).ok());
            Ok(!code.is_some_and(|code| code <= MAX_SINGLE_CHARACTER_STRING))
        }

        Opcode::Switch => {
            let data = node.data().switch_data().ok_or(ClassificationGap::new(
                op,
                GapReason::MissingSideData("switch data"),
            ))?;
            match data.kind {
                SwitchKind::Cell => {
                    debug_assert!(
                        graph.plan().is_fully_optimizing(),
                        "cell switches are only formed by the highest tier"
                    );
                    Ok(false)
                }
                SwitchKind::Imm => Ok(false),
                SwitchKind::Char => Ok(true),
                SwitchKind::String => {
                    let kind = operand(node, 0)?.use_kind();
                    if kind == UseKind::StringIdent {
                        return Ok(false);
                    }
                    debug_assert!(
                        matches!(kind, UseKind::String | UseKind::Untyped),
                        "string switch on {kind}"
                    );
                    Ok(true)
                }
            }
        }

        Opcode::Inc | Opcode::Dec => Ok(!operand(node, 0)?.use_kind().is_unboxed_number()),

        // Weak collection storage is not GC-managed, so insertion only
        // allocates when it throws a TypeError for a bad key. Even a symbol
        // key can throw if it is a registered symbol.
        Opcode::WeakSetAdd => Ok(operand(node, 1)?.use_kind() != UseKind::Object),
        Opcode::WeakMapSet => {
            let key = graph
                .var_arg_child(node, 1)
                .ok_or(ClassificationGap::new(op, GapReason::MissingOperand(1)))?;
            Ok(key.use_kind() != UseKind::Object)
        }

        _ => Err(ClassificationGap::new(op, GapReason::NoRule)),
    }
}

/// `CompareEq` and the relational compares: GC-free when both sides are
/// compared without conversion.
fn compare_is_gc_free(node: &Node, config: &GcConfig) -> bool {
    // TODO: HeapBigInt and AnyBigInt compares are emitted as calls; prove
    // them GC-free once codegen stops allocating for them.
    if node.is_binary_use_kind(UseKind::Int32)
        || (config.int52_representation && node.is_binary_use_kind(UseKind::Int52Rep))
        || node.is_binary_use_kind(UseKind::DoubleRep)
        || node.is_binary_use_kind(UseKind::BigInt32)
        || node.is_binary_use_kind(UseKind::StringIdent)
    {
        return true;
    }
    node.op() == Opcode::CompareEq
        && (node.is_binary_use_kind(UseKind::Boolean)
            || node.is_binary_use_kind(UseKind::Symbol)
            || node.is_binary_use_kind(UseKind::Object)
            || node.is_symmetric_binary_use_kind(UseKind::Object, UseKind::ObjectOrOther))
}

/// `CompareStrictEq`: GC-free for the pairings compared by value or by
/// identity without resolving strings.
fn strict_eq_is_gc_free(node: &Node, config: &GcConfig) -> bool {
    node.is_binary_use_kind(UseKind::Boolean)
        || node.is_symmetric_binary_use_kind(UseKind::Boolean, UseKind::Untyped)
        || node.is_binary_use_kind(UseKind::Int32)
        || (config.int52_representation && node.is_binary_use_kind(UseKind::Int52Rep))
        || node.is_binary_use_kind(UseKind::DoubleRep)
        || node.is_binary_use_kind(UseKind::Symbol)
        || node.is_symmetric_binary_use_kind(UseKind::Symbol, UseKind::Untyped)
        || node.is_binary_use_kind(UseKind::StringIdent)
        || node.is_symmetric_binary_use_kind(UseKind::Object, UseKind::Untyped)
        || node.is_binary_use_kind(UseKind::Object)
        || node.is_binary_use_kind(UseKind::Other)
        || node.is_symmetric_binary_use_kind(UseKind::Other, UseKind::Untyped)
        || node.is_binary_use_kind(UseKind::Misc)
        || node.is_symmetric_binary_use_kind(UseKind::Misc, UseKind::Untyped)
        || node.is_symmetric_binary_use_kind(UseKind::StringIdent, UseKind::NotStringVar)
        || node.is_symmetric_binary_use_kind(
            UseKind::NotDouble,
            UseKind::NeitherDoubleNorHeapBigIntNorString,
        )
}

fn operand(node: &Node, index: usize) -> Result<Edge, ClassificationGap> {
    node.children()
        .get(index)
        .copied()
        .ok_or(ClassificationGap::new(node.op(), GapReason::MissingOperand(index)))
}

fn require_binary(node: &Node) -> Result<(), ClassificationGap> {
    operand(node, 1).map(|_| ())
}

fn array_mode(node: &Node) -> Result<ArrayMode, ClassificationGap> {
    node.data().array_mode().ok_or(ClassificationGap::new(
        node.op(),
        GapReason::MissingSideData("array mode"),
    ))
}
