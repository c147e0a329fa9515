//! Node opcodes.
//!
//! The opcode set is declared once, through [`define_opcodes!`], which
//! produces the [`Opcode`] enum together with its [`Opcode::ALL`] table,
//! printable names, and raw-value round-tripping. Analyses that must account
//! for every opcode (GC-effect classification in particular) match on
//! `Opcode` without a wildcard arm, so adding a variant here is a compile
//! error at every such site until it has been classified.

use std::fmt;

use thiserror::Error;

/// Declares the opcode enum and its lookup tables from a single list.
///
/// Each generated enum has:
/// - `ALL` and `COUNT` constants, in declaration order
/// - `name()` returning the variant name
/// - `raw()` / `from_raw()` for compact storage (`u16`), which is also
///   the serialized form under the `cache` feature
macro_rules! define_opcodes {
    ($($name:ident),* $(,)?) => {
        /// Operation performed by a DFG node.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "cache",
            derive(serde::Serialize, serde::Deserialize),
            serde(into = "u16", try_from = "u16")
        )]
        #[repr(u16)]
        pub enum Opcode {
            $($name),*
        }

        impl Opcode {
            /// Every opcode, in declaration (and raw value) order.
            pub const ALL: &'static [Opcode] = &[$(Opcode::$name),*];

            /// Number of opcodes.
            pub const COUNT: usize = Self::ALL.len();

            /// The opcode's name as written in dumps.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Opcode::$name => stringify!($name)),*
                }
            }
        }
    };
}

define_opcodes!(
    AllocatePropertyStorage,
    ArithAbs,
    ArithAdd,
    ArithBitAnd,
    ArithBitLShift,
    ArithBitNot,
    ArithBitOr,
    ArithBitRShift,
    ArithBitURShift,
    ArithBitXor,
    ArithCeil,
    ArithClz32,
    ArithDiv,
    ArithF16Round,
    ArithFRound,
    ArithFloor,
    ArithIMul,
    ArithMax,
    ArithMin,
    ArithMod,
    ArithMul,
    ArithNegate,
    ArithPow,
    ArithRandom,
    ArithRound,
    ArithSqrt,
    ArithSub,
    ArithTrunc,
    ArithUnary,
    ArrayIncludes,
    ArrayIndexOf,
    ArrayPop,
    ArrayPush,
    ArraySlice,
    ArraySplice,
    Arrayify,
    ArrayifyToStructure,
    AssertInBounds,
    AssertNotEmpty,
    AtomicsAdd,
    AtomicsAnd,
    AtomicsCompareExchange,
    AtomicsExchange,
    AtomicsIsLockFree,
    AtomicsLoad,
    AtomicsOr,
    AtomicsStore,
    AtomicsSub,
    AtomicsXor,
    BooleanToNumber,
    BottomValue,
    Branch,
    CPUIntrinsic,
    Call,
    CallCustomAccessorGetter,
    CallCustomAccessorSetter,
    CallDOM,
    CallDOMGetter,
    CallDirectEval,
    CallForwardVarargs,
    CallNumberConstructor,
    CallObjectConstructor,
    CallStringConstructor,
    CallVarargs,
    CallWasm,
    Check,
    CheckArray,
    CheckArrayOrEmpty,
    CheckBadValue,
    CheckDetached,
    CheckIdent,
    CheckInBounds,
    CheckInBoundsInt52,
    CheckIsConstant,
    CheckJSCast,
    CheckNotEmpty,
    CheckNotJSCast,
    CheckPrivateBrand,
    CheckStructure,
    CheckStructureImmediate,
    CheckStructureOrEmpty,
    CheckTierUpAndOSREnter,
    CheckTierUpAtReturn,
    CheckTierUpInLoop,
    CheckTraps,
    CheckTypeInfoFlags,
    CheckVarargs,
    ClearCatchLocals,
    CompareBelow,
    CompareBelowEq,
    CompareEq,
    CompareEqPtr,
    CompareGreater,
    CompareGreaterEq,
    CompareLess,
    CompareLessEq,
    CompareStrictEq,
    ConstantStoragePointer,
    Construct,
    ConstructForwardVarargs,
    ConstructVarargs,
    CountExecution,
    CreateActivation,
    CreateAsyncGenerator,
    CreateClonedArguments,
    CreateDirectArguments,
    CreateGenerator,
    CreatePromise,
    CreateRest,
    CreateScopedArguments,
    CreateThis,
    DataViewGetByteLength,
    DataViewGetByteLengthAsInt52,
    DataViewGetFloat,
    DataViewGetInt,
    DataViewSet,
    DateGetInt32OrNaN,
    DateGetTime,
    DateSetTime,
    Dec,
    DefineAccessorProperty,
    DefineDataProperty,
    DeleteById,
    DeleteByVal,
    DirectCall,
    DirectConstruct,
    DirectTailCall,
    DirectTailCallInlinedCaller,
    DoubleAsInt32,
    DoubleConstant,
    DoubleRep,
    EntrySwitch,
    EnumeratorGetByVal,
    EnumeratorHasOwnProperty,
    EnumeratorInByVal,
    EnumeratorNextUpdateIndexAndMode,
    EnumeratorNextUpdatePropertyName,
    EnumeratorPutByVal,
    ExitOK,
    ExtractCatchLocal,
    ExtractFromTuple,
    ExtractOSREntryLocal,
    ExtractValueFromWeakMapGet,
    FencedStoreBarrier,
    FiatInt52,
    FilterCallLinkStatus,
    FilterCheckPrivateBrandStatus,
    FilterDeleteByStatus,
    FilterGetByStatus,
    FilterInByStatus,
    FilterPutByStatus,
    FilterSetPrivateBrandStatus,
    Flush,
    ForceOSRExit,
    ForwardVarargs,
    FunctionBind,
    FunctionToString,
    GetArgument,
    GetArgumentCountIncludingThis,
    GetArrayLength,
    GetButterfly,
    GetById,
    GetByIdDirect,
    GetByIdDirectFlush,
    GetByIdFlush,
    GetByIdMegamorphic,
    GetByIdWithThis,
    GetByIdWithThisMegamorphic,
    GetByOffset,
    GetByVal,
    GetByValMegamorphic,
    GetByValWithThis,
    GetByValWithThisMegamorphic,
    GetCallee,
    GetClosureVar,
    GetDynamicVar,
    GetEvalScope,
    GetExecutable,
    GetFromArguments,
    GetGetter,
    GetGetterSetterByOffset,
    GetGlobalLexicalVariable,
    GetGlobalObject,
    GetGlobalThis,
    GetGlobalVar,
    GetIndexedPropertyStorage,
    GetInternalField,
    GetLocal,
    GetMyArgumentByVal,
    GetMyArgumentByValOutOfBounds,
    GetPrivateName,
    GetPrivateNameById,
    GetPropertyEnumerator,
    GetPrototypeOf,
    GetRegExpObjectLastIndex,
    GetRestLength,
    GetScope,
    GetSetter,
    GetStack,
    GetTypedArrayByteOffset,
    GetTypedArrayByteOffsetAsInt52,
    GetTypedArrayLengthAsInt52,
    GetUndetachedTypeArrayLength,
    GetVectorLength,
    GetWebAssemblyInstanceExports,
    GlobalIsFinite,
    GlobalIsNaN,
    HasIndexedProperty,
    HasOwnProperty,
    HasPrivateBrand,
    HasPrivateName,
    HasStructureWithFlags,
    Identity,
    IdentityWithProfile,
    InById,
    InByIdMegamorphic,
    InByVal,
    InByValMegamorphic,
    Inc,
    InitializeEntrypointArguments,
    InstanceOf,
    InstanceOfCustom,
    InstanceOfMegamorphic,
    Int52Constant,
    Int52Rep,
    InvalidationPoint,
    IsBigInt,
    IsBoolean,
    IsCallable,
    IsCellWithType,
    IsConstructor,
    IsEmpty,
    IsEmptyStorage,
    IsNumber,
    IsObject,
    IsTypedArrayView,
    IsUndefinedOrNull,
    JSConstant,
    Jump,
    KillStack,
    LazyJSConstant,
    LoadMapValue,
    LoadVarargs,
    LogShadowChickenPrologue,
    LogShadowChickenTail,
    LogicalNot,
    LoopHint,
    MakeAtomString,
    MakeRope,
    MapGet,
    MapHash,
    MapIterationEntry,
    MapIterationEntryKey,
    MapIterationEntryValue,
    MapIterationNext,
    MapIteratorKey,
    MapIteratorNext,
    MapIteratorValue,
    MapOrSetDelete,
    MapSet,
    MapStorage,
    MapStorageOrSentinel,
    MatchStructure,
    MaterializeCreateActivation,
    MaterializeNewArrayWithConstantSize,
    MaterializeNewInternalFieldObject,
    MaterializeNewObject,
    MovHint,
    MultiDeleteByOffset,
    MultiGetByOffset,
    MultiGetByVal,
    MultiPutByOffset,
    MultiPutByVal,
    NewArray,
    NewArrayBuffer,
    NewArrayWithConstantSize,
    NewArrayWithSize,
    NewArrayWithSizeAndStructure,
    NewArrayWithSpecies,
    NewArrayWithSpread,
    NewAsyncFunction,
    NewAsyncGenerator,
    NewAsyncGeneratorFunction,
    NewBoundFunction,
    NewFunction,
    NewGenerator,
    NewGeneratorFunction,
    NewInternalFieldObject,
    NewMap,
    NewObject,
    NewRegExp,
    NewRegExpUntyped,
    NewSet,
    NewStringObject,
    NewSymbol,
    NewTypedArray,
    NewTypedArrayBuffer,
    NormalizeMapKey,
    NotifyWrite,
    NukeStructureAndSetButterfly,
    NumberIsFinite,
    NumberIsInteger,
    NumberIsNaN,
    NumberIsSafeInteger,
    NumberToStringWithRadix,
    NumberToStringWithValidRadixConstant,
    ObjectAssign,
    ObjectCreate,
    ObjectGetOwnPropertyNames,
    ObjectGetOwnPropertySymbols,
    ObjectKeys,
    ObjectToString,
    OverridesHasInstance,
    ParseInt,
    Phantom,
    PhantomClonedArguments,
    PhantomCreateActivation,
    PhantomCreateRest,
    PhantomDirectArguments,
    PhantomLocal,
    PhantomNewArrayBuffer,
    PhantomNewArrayWithConstantSize,
    PhantomNewArrayWithSpread,
    PhantomNewAsyncFunction,
    PhantomNewAsyncGeneratorFunction,
    PhantomNewFunction,
    PhantomNewGeneratorFunction,
    PhantomNewInternalFieldObject,
    PhantomNewObject,
    PhantomNewRegExp,
    PhantomSpread,
    Phi,
    ProfileControlFlow,
    ProfileType,
    PurifyNaN,
    PushWithScope,
    PutById,
    PutByIdDirect,
    PutByIdFlush,
    PutByIdMegamorphic,
    PutByIdWithThis,
    PutByOffset,
    PutByVal,
    PutByValAlias,
    PutByValDirect,
    PutByValMegamorphic,
    PutByValWithThis,
    PutClosureVar,
    PutDynamicVar,
    PutGetterById,
    PutGetterByVal,
    PutGetterSetterById,
    PutGlobalVariable,
    PutHint,
    PutInternalField,
    PutPrivateName,
    PutPrivateNameById,
    PutSetterById,
    PutSetterByVal,
    PutStack,
    PutStructure,
    PutToArguments,
    ReallocatePropertyStorage,
    RecordRegExpCachedResult,
    ReflectOwnKeys,
    RegExpExec,
    RegExpExecNonGlobalOrSticky,
    RegExpMatchFast,
    RegExpMatchFastGlobal,
    RegExpSearch,
    RegExpTest,
    RegExpTestInline,
    ResolveRope,
    ResolveScope,
    ResolveScopeForHoistingFuncDeclInEval,
    Return,
    SameValue,
    SetAdd,
    SetArgumentCountIncludingThis,
    SetArgumentDefinitely,
    SetArgumentMaybe,
    SetCallee,
    SetFunctionName,
    SetLocal,
    SetPrivateBrand,
    SetRegExpObjectLastIndex,
    SkipScope,
    Spread,
    StoreBarrier,
    StrCat,
    StringAt,
    StringCharAt,
    StringCharCodeAt,
    StringCodePointAt,
    StringFromCharCode,
    StringIndexOf,
    StringLocaleCompare,
    StringReplace,
    StringReplaceAll,
    StringReplaceRegExp,
    StringReplaceString,
    StringSlice,
    StringSubstring,
    StringValueOf,
    SuperSamplerBegin,
    SuperSamplerEnd,
    Switch,
    TailCall,
    TailCallForwardVarargs,
    TailCallForwardVarargsInlinedCaller,
    TailCallInlinedCaller,
    TailCallVarargs,
    TailCallVarargsInlinedCaller,
    Throw,
    ThrowStaticError,
    ToBoolean,
    ToIntegerOrInfinity,
    ToLength,
    ToLowerCase,
    ToNumber,
    ToNumeric,
    ToObject,
    ToPrimitive,
    ToPropertyKey,
    ToPropertyKeyOrNumber,
    ToString,
    ToThis,
    TryGetById,
    TypeOf,
    TypeOfIsFunction,
    TypeOfIsObject,
    TypeOfIsUndefined,
    UInt32ToNumber,
    Unreachable,
    UnwrapGlobalProxy,
    Upsilon,
    ValueAdd,
    ValueBitAnd,
    ValueBitLShift,
    ValueBitNot,
    ValueBitOr,
    ValueBitRShift,
    ValueBitURShift,
    ValueBitXor,
    ValueDiv,
    ValueMod,
    ValueMul,
    ValueNegate,
    ValuePow,
    ValueRep,
    ValueSub,
    ValueToInt32,
    VarargsLength,
    WeakMapGet,
    WeakMapSet,
    WeakSetAdd,
    ZombieHint,
);

impl Opcode {
    /// Raw discriminant, used by compact encodings.
    #[inline]
    pub const fn raw(self) -> u16 {
        self as u16
    }

    /// Decode a raw discriminant. Returns `None` for values outside the
    /// opcode set (e.g. a plan cached by a build with more opcodes).
    #[inline]
    pub fn from_raw(raw: u16) -> Option<Self> {
        Self::ALL.get(usize::from(raw)).copied()
    }

    /// Returns `true` if nodes with this opcode address their operands
    /// through the var-arg child list rather than fixed child slots.
    pub fn has_var_args(self) -> bool {
        matches!(
            self,
            Opcode::PutByVal
                | Opcode::PutByValDirect
                | Opcode::PutByValAlias
                | Opcode::PutByValMegamorphic
                | Opcode::PutByValWithThis
                | Opcode::GetByVal
                | Opcode::GetByValMegamorphic
                | Opcode::GetByValWithThis
                | Opcode::GetByValWithThisMegamorphic
                | Opcode::EnumeratorGetByVal
                | Opcode::EnumeratorPutByVal
                | Opcode::MultiGetByVal
                | Opcode::MultiPutByVal
                | Opcode::WeakMapSet
                | Opcode::MapSet
                | Opcode::NewArray
                | Opcode::NewArrayWithSpread
                | Opcode::StrCat
                | Opcode::Call
                | Opcode::Construct
                | Opcode::TailCall
                | Opcode::TailCallInlinedCaller
                | Opcode::DirectCall
                | Opcode::DirectConstruct
                | Opcode::DirectTailCall
                | Opcode::DirectTailCallInlinedCaller
                | Opcode::CallDirectEval
                | Opcode::CallWasm
                | Opcode::CallDOM
                | Opcode::ArrayPush
                | Opcode::ArraySlice
                | Opcode::ArraySplice
                | Opcode::ArrayIncludes
                | Opcode::ArrayIndexOf
                | Opcode::AtomicsAdd
                | Opcode::AtomicsAnd
                | Opcode::AtomicsCompareExchange
                | Opcode::AtomicsExchange
                | Opcode::AtomicsLoad
                | Opcode::AtomicsOr
                | Opcode::AtomicsStore
                | Opcode::AtomicsSub
                | Opcode::AtomicsXor
                | Opcode::DataViewSet
                | Opcode::MaterializeNewObject
                | Opcode::MaterializeNewArrayWithConstantSize
                | Opcode::MaterializeNewInternalFieldObject
                | Opcode::MaterializeCreateActivation
                | Opcode::DefineDataProperty
                | Opcode::DefineAccessorProperty
        )
    }
}

/// A raw value outside the opcode set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown opcode {0}")]
pub struct UnknownOpcode(pub u16);

impl From<Opcode> for u16 {
    fn from(op: Opcode) -> u16 {
        op.raw()
    }
}

impl TryFrom<u16> for Opcode {
    type Error = UnknownOpcode;

    fn try_from(raw: u16) -> Result<Self, UnknownOpcode> {
        Opcode::from_raw(raw).ok_or(UnknownOpcode(raw))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
