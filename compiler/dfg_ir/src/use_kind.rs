//! Operand use kinds.
//!
//! A use kind records the representation the optimizer has proven (or
//! speculated and guarded) for one operand edge. The same opcode generates
//! very different code depending on its use kinds: `CompareEq` on two
//! `Int32` edges is a register compare, while on `Untyped` edges it may call
//! `valueOf` on an object.

use std::fmt;

/// Proven representation of an operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum UseKind {
    /// Any boxed value. Nothing is known.
    #[default]
    Untyped,

    // Numbers
    Int32,
    KnownInt32,
    Int52Rep,
    AnyInt,
    Number,
    RealNumber,
    DoubleRep,
    DoubleRepReal,
    DoubleRepAnyInt,

    // Booleans
    Boolean,
    KnownBoolean,

    // Cells and objects
    Cell,
    KnownCell,
    CellOrOther,
    Object,
    Array,
    Function,
    FinalObject,
    RegExpObject,
    PromiseObject,
    ProxyObject,
    GlobalProxy,
    DerivedArray,
    ObjectOrOther,
    DateObject,
    MapObject,
    SetObject,
    MapIteratorObject,
    SetIteratorObject,
    WeakMapObject,
    WeakSetObject,
    DataViewObject,
    StringObject,
    StringOrStringObject,

    // Strings
    /// An atomized string, comparable by pointer identity.
    StringIdent,
    String,
    StringOrOther,
    KnownString,
    KnownPrimitive,
    NotStringVar,

    // Symbols and BigInts
    Symbol,
    NotSymbol,
    AnyBigInt,
    HeapBigInt,
    BigInt32,

    // Negative and mixed speculations
    NotCell,
    NotCellNorBigInt,
    NotDouble,
    NeitherDoubleNorHeapBigInt,
    NeitherDoubleNorHeapBigIntNorString,
    KnownOther,
    /// `undefined` or `null`.
    Other,
    /// Boolean, `undefined`, or `null`.
    Misc,
}

impl UseKind {
    /// Returns `true` if the operand is known to be an unboxed number in a
    /// machine register (no boxing needed to produce or consume it).
    pub fn is_unboxed_number(self) -> bool {
        matches!(self, UseKind::Int32 | UseKind::Int52Rep | UseKind::DoubleRep)
    }
}

impl fmt::Display for UseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}Use")
    }
}
