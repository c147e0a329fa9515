//! Opcode-specific side data carried by nodes.

use crate::ArrayMode;

/// Per-node payload whose meaning depends on the opcode.
///
/// Indexed accesses carry an [`ArrayMode`], `Switch` carries [`SwitchData`],
/// `MultiPutByOffset` carries its variant list, and constants carry their
/// value. Everything else carries [`NodeData::None`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeData {
    #[default]
    None,
    ArrayMode(ArrayMode),
    Switch(SwitchData),
    MultiPutByOffset(MultiPutByOffsetData),
    Constant(ConstantValue),
}

impl NodeData {
    pub fn array_mode(&self) -> Option<ArrayMode> {
        match self {
            NodeData::ArrayMode(mode) => Some(*mode),
            _ => None,
        }
    }

    pub fn switch_data(&self) -> Option<&SwitchData> {
        match self {
            NodeData::Switch(data) => Some(data),
            _ => None,
        }
    }

    pub fn multi_put_by_offset_data(&self) -> Option<&MultiPutByOffsetData> {
        match self {
            NodeData::MultiPutByOffset(data) => Some(data),
            _ => None,
        }
    }

    pub fn constant(&self) -> Option<ConstantValue> {
        match self {
            NodeData::Constant(value) => Some(*value),
            _ => None,
        }
    }
}

// ── Constants ───────────────────────────────────────────────────────

/// A compile-time constant value.
///
/// Doubles are stored as raw bits so the type stays `Eq`/`Hash`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstantValue {
    Int32(i32),
    Double(u64),
    Boolean(bool),
    Undefined,
    Null,
    /// Handle of a heap cell frozen by the compiler.
    Cell(u64),
}

impl ConstantValue {
    /// Create a double constant.
    pub fn double(value: f64) -> Self {
        ConstantValue::Double(value.to_bits())
    }

    /// The constant as an `i32`, if it is an int32.
    pub fn as_int32(self) -> Option<i32> {
        match self {
            ConstantValue::Int32(value) => Some(value),
            _ => None,
        }
    }
}

// ── Switch ──────────────────────────────────────────────────────────

/// What a `Switch` node dispatches on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum SwitchKind {
    /// Int32 immediates, lowered to a jump table.
    Imm,
    /// Single characters of a string scrutinee.
    Char,
    /// Whole strings.
    String,
    /// Cell pointer identity.
    Cell,
}

/// Side data of a `Switch` node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SwitchData {
    pub kind: SwitchKind,
}

impl SwitchData {
    pub fn new(kind: SwitchKind) -> Self {
        Self { kind }
    }
}

// ── MultiPutByOffset ────────────────────────────────────────────────

/// Identifier of an object structure (hidden class).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct StructureId(u32);

impl StructureId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// One case of a polymorphic put-by-offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PutByOffsetVariant {
    /// Overwrite an existing property slot; the structure is unchanged.
    Replace { structure: StructureId, offset: u32 },
    /// Add a property, transitioning `from` to `to`.
    Transition {
        from: StructureId,
        to: StructureId,
        offset: u32,
        /// Out-of-line property capacity of `from`.
        old_capacity: u32,
        /// Out-of-line property capacity of `to`.
        new_capacity: u32,
    },
}

impl PutByOffsetVariant {
    /// Returns `true` if executing this variant grows the out-of-line
    /// property storage, which allocates a new butterfly.
    pub fn reallocates_storage(self) -> bool {
        match self {
            PutByOffsetVariant::Replace { .. } => false,
            PutByOffsetVariant::Transition {
                old_capacity,
                new_capacity,
                ..
            } => old_capacity != new_capacity,
        }
    }
}

/// Side data of a `MultiPutByOffset` node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPutByOffsetData {
    pub variants: Vec<PutByOffsetVariant>,
}

impl MultiPutByOffsetData {
    pub fn new(variants: Vec<PutByOffsetVariant>) -> Self {
        Self { variants }
    }

    /// Returns `true` if any variant reallocates property storage.
    pub fn reallocates_storage(&self) -> bool {
        self.variants
            .iter()
            .any(|variant| variant.reallocates_storage())
    }
}
