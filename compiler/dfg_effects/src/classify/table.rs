//! The GC-effect classification table.
//!
//! [`gc_bucket`] places every opcode in exactly one [`GcBucket`]. The match
//! has no wildcard arm: a new opcode does not compile until it has been
//! placed here.
//!
//! A node can GC if the code emitted for it may do any of the following:
//!
//! 1. Allocate an object.
//! 2. Resolve a rope string (which allocates the flattened string).
//! 3. Produce a string, unless it is always one of the preallocated
//!    single-character strings.
//! 4. Trigger a structure transition that may allocate a new structure.
//!    Known transitions between existing structures (e.g. array indexing
//!    type changes) do not.
//! 5. Call a JS function, which can run arbitrary code.
//! 6. Call a runtime operation that defers GC, since it may collect when
//!    the deferral ends.
//!
//! Only opcodes proven free of all six belong in [`GcBucket::Never`].

use dfg_ir::Opcode;

/// Where the classification of an opcode comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GcBucket {
    /// The emitted code never GCs, whatever the operands.
    Never,
    /// The emitted code may GC, whatever the operands.
    Always,
    /// The answer depends on use kinds, side data, plan tier, or
    /// configuration. See `classify_conditional`.
    Conditional,
}

/// Look up the bucket for `op`.
pub fn gc_bucket(op: Opcode) -> GcBucket {
    match op {
        Opcode::JSConstant
        | Opcode::DoubleConstant
        | Opcode::Int52Constant
        | Opcode::LazyJSConstant
        | Opcode::Identity
        | Opcode::IdentityWithProfile
        | Opcode::ExtractFromTuple
        | Opcode::GetCallee
        | Opcode::SetCallee
        | Opcode::GetArgumentCountIncludingThis
        | Opcode::SetArgumentCountIncludingThis
        | Opcode::GetRestLength
        | Opcode::GetLocal
        | Opcode::SetLocal
        | Opcode::MovHint
        | Opcode::InitializeEntrypointArguments
        | Opcode::ZombieHint
        | Opcode::ExitOK
        | Opcode::Phantom
        | Opcode::Upsilon
        | Opcode::Phi
        | Opcode::Flush
        | Opcode::PhantomLocal
        | Opcode::SetArgumentDefinitely
        | Opcode::SetArgumentMaybe
        | Opcode::ArithBitNot
        | Opcode::ArithBitAnd
        | Opcode::ArithBitOr
        | Opcode::ArithBitXor
        | Opcode::ArithBitLShift
        | Opcode::ArithBitRShift
        | Opcode::ArithBitURShift
        | Opcode::ValueToInt32
        | Opcode::UInt32ToNumber
        | Opcode::DoubleAsInt32
        | Opcode::ArithAdd
        | Opcode::ArithClz32
        | Opcode::ArithSub
        | Opcode::ArithNegate
        | Opcode::ArithMul
        | Opcode::ArithIMul
        | Opcode::ArithDiv
        | Opcode::ArithMod
        | Opcode::ArithAbs
        | Opcode::ArithMin
        | Opcode::ArithMax
        | Opcode::ArithPow
        | Opcode::ArithSqrt
        | Opcode::ArithRandom
        | Opcode::ArithRound
        | Opcode::ArithFloor
        | Opcode::ArithCeil
        | Opcode::ArithTrunc
        | Opcode::ArithFRound
        | Opcode::ArithF16Round
        | Opcode::ArithUnary
        | Opcode::CheckStructure
        | Opcode::CheckStructureOrEmpty
        | Opcode::CheckStructureImmediate
        | Opcode::GetExecutable
        | Opcode::GetButterfly
        | Opcode::GetIndexedPropertyStorage
        | Opcode::CheckJSCast
        | Opcode::CheckNotJSCast
        | Opcode::CheckArray
        | Opcode::CheckArrayOrEmpty
        | Opcode::CheckDetached
        | Opcode::GetScope
        | Opcode::GetEvalScope
        | Opcode::SkipScope
        | Opcode::GetGlobalObject
        | Opcode::GetGlobalThis
        | Opcode::UnwrapGlobalProxy
        | Opcode::GetClosureVar
        | Opcode::PutClosureVar
        | Opcode::GetInternalField
        | Opcode::PutInternalField
        | Opcode::GetRegExpObjectLastIndex
        | Opcode::SetRegExpObjectLastIndex
        | Opcode::RecordRegExpCachedResult
        | Opcode::GetGlobalVar
        | Opcode::GetGlobalLexicalVariable
        | Opcode::PutGlobalVariable
        | Opcode::CheckIsConstant
        | Opcode::CheckNotEmpty
        | Opcode::AssertNotEmpty
        | Opcode::CheckIdent
        | Opcode::CompareBelow
        | Opcode::CompareBelowEq
        | Opcode::CompareEqPtr
        | Opcode::ProfileControlFlow
        | Opcode::OverridesHasInstance
        | Opcode::IsEmpty
        | Opcode::IsEmptyStorage
        | Opcode::TypeOfIsUndefined
        | Opcode::TypeOfIsObject
        | Opcode::TypeOfIsFunction
        | Opcode::IsUndefinedOrNull
        | Opcode::IsBoolean
        | Opcode::IsNumber
        | Opcode::IsBigInt
        | Opcode::NumberIsInteger
        | Opcode::IsObject
        | Opcode::IsCallable
        | Opcode::IsConstructor
        | Opcode::IsCellWithType
        | Opcode::IsTypedArrayView
        | Opcode::TypeOf
        | Opcode::ToBoolean
        | Opcode::LogicalNot
        | Opcode::Jump
        | Opcode::Branch
        | Opcode::EntrySwitch
        | Opcode::CountExecution
        | Opcode::SuperSamplerBegin
        | Opcode::SuperSamplerEnd
        | Opcode::CPUIntrinsic
        // HeapBigInt to BigInt32 normalization does not allocate.
        | Opcode::NormalizeMapKey
        | Opcode::MapGet
        | Opcode::LoadMapValue
        | Opcode::MapIteratorNext
        | Opcode::MapIteratorKey
        | Opcode::MapIteratorValue
        | Opcode::MapStorageOrSentinel
        | Opcode::MapIterationNext
        | Opcode::MapIterationEntry
        | Opcode::MapIterationEntryKey
        | Opcode::MapIterationEntryValue
        | Opcode::ExtractValueFromWeakMapGet
        | Opcode::Unreachable
        | Opcode::ExtractOSREntryLocal
        | Opcode::ExtractCatchLocal
        | Opcode::ClearCatchLocals
        | Opcode::LoopHint
        | Opcode::StoreBarrier
        | Opcode::FencedStoreBarrier
        | Opcode::InvalidationPoint
        | Opcode::NotifyWrite
        | Opcode::AssertInBounds
        | Opcode::CheckInBounds
        | Opcode::CheckInBoundsInt52
        | Opcode::ConstantStoragePointer
        | Opcode::Check
        | Opcode::CheckVarargs
        | Opcode::CheckTypeInfoFlags
        | Opcode::HasStructureWithFlags
        | Opcode::MultiGetByOffset
        | Opcode::MultiDeleteByOffset
        | Opcode::ValueRep
        | Opcode::DoubleRep
        | Opcode::PurifyNaN
        | Opcode::Int52Rep
        | Opcode::GetGetter
        | Opcode::GetSetter
        | Opcode::GetArrayLength
        | Opcode::GetUndetachedTypeArrayLength
        | Opcode::GetTypedArrayLengthAsInt52
        | Opcode::GetVectorLength
        | Opcode::StringCharCodeAt
        | Opcode::StringCodePointAt
        | Opcode::GetTypedArrayByteOffset
        | Opcode::GetTypedArrayByteOffsetAsInt52
        | Opcode::GetPrototypeOf
        | Opcode::GetWebAssemblyInstanceExports
        | Opcode::PutStructure
        | Opcode::GetByOffset
        | Opcode::GetGetterSetterByOffset
        | Opcode::FiatInt52
        | Opcode::BooleanToNumber
        | Opcode::CheckBadValue
        | Opcode::BottomValue
        | Opcode::PhantomNewObject
        | Opcode::PhantomNewArrayWithConstantSize
        | Opcode::PhantomNewFunction
        | Opcode::PhantomNewGeneratorFunction
        | Opcode::PhantomNewAsyncFunction
        | Opcode::PhantomNewAsyncGeneratorFunction
        | Opcode::PhantomNewInternalFieldObject
        | Opcode::PhantomCreateActivation
        | Opcode::PhantomDirectArguments
        | Opcode::PhantomCreateRest
        | Opcode::PhantomNewArrayWithSpread
        | Opcode::PhantomNewArrayBuffer
        | Opcode::PhantomSpread
        | Opcode::PhantomClonedArguments
        | Opcode::PhantomNewRegExp
        | Opcode::GetMyArgumentByVal
        | Opcode::GetMyArgumentByValOutOfBounds
        | Opcode::ForwardVarargs
        | Opcode::PutHint
        | Opcode::KillStack
        | Opcode::GetStack
        | Opcode::GetFromArguments
        | Opcode::GetArgument
        | Opcode::LogShadowChickenPrologue
        | Opcode::LogShadowChickenTail
        | Opcode::NukeStructureAndSetButterfly
        | Opcode::AtomicsAdd
        | Opcode::AtomicsAnd
        | Opcode::AtomicsCompareExchange
        | Opcode::AtomicsExchange
        | Opcode::AtomicsLoad
        | Opcode::AtomicsOr
        | Opcode::AtomicsStore
        | Opcode::AtomicsSub
        | Opcode::AtomicsXor
        | Opcode::AtomicsIsLockFree
        | Opcode::MatchStructure
        | Opcode::FilterCallLinkStatus
        | Opcode::FilterGetByStatus
        | Opcode::FilterPutByStatus
        | Opcode::FilterInByStatus
        | Opcode::FilterDeleteByStatus
        | Opcode::FilterCheckPrivateBrandStatus
        | Opcode::FilterSetPrivateBrandStatus
        | Opcode::DateGetInt32OrNaN
        | Opcode::DateGetTime
        | Opcode::DataViewGetInt
        | Opcode::DataViewGetFloat
        | Opcode::DataViewSet
        | Opcode::PutByOffset
        | Opcode::WeakMapGet
        | Opcode::NumberIsNaN
        | Opcode::NumberIsFinite
        | Opcode::NumberIsSafeInteger => GcBucket::Never,

        Opcode::ArrayPush
        | Opcode::ArrayPop
        | Opcode::ArraySplice
        | Opcode::PushWithScope
        | Opcode::CreateActivation
        | Opcode::CreateDirectArguments
        | Opcode::CreateScopedArguments
        | Opcode::CreateClonedArguments
        | Opcode::Call
        | Opcode::CallDirectEval
        | Opcode::CallForwardVarargs
        | Opcode::CallObjectConstructor
        | Opcode::CallVarargs
        | Opcode::CheckTierUpAndOSREnter
        | Opcode::CheckTierUpAtReturn
        | Opcode::CheckTierUpInLoop
        | Opcode::Construct
        | Opcode::ConstructForwardVarargs
        | Opcode::ConstructVarargs
        | Opcode::DataViewGetByteLength
        | Opcode::DataViewGetByteLengthAsInt52
        | Opcode::DefineDataProperty
        | Opcode::DefineAccessorProperty
        | Opcode::DeleteById
        | Opcode::DeleteByVal
        | Opcode::DirectCall
        | Opcode::DirectConstruct
        | Opcode::DirectTailCall
        | Opcode::DirectTailCallInlinedCaller
        | Opcode::CallWasm
        | Opcode::CallCustomAccessorGetter
        | Opcode::CallCustomAccessorSetter
        | Opcode::ForceOSRExit
        | Opcode::FunctionToString
        | Opcode::FunctionBind
        | Opcode::GetById
        | Opcode::GetByIdDirect
        | Opcode::GetByIdDirectFlush
        | Opcode::GetByIdFlush
        | Opcode::GetByIdMegamorphic
        | Opcode::GetByIdWithThis
        | Opcode::GetByIdWithThisMegamorphic
        | Opcode::GetByValWithThis
        | Opcode::GetByValWithThisMegamorphic
        | Opcode::MultiGetByVal
        | Opcode::GetDynamicVar
        | Opcode::HasIndexedProperty
        | Opcode::HasOwnProperty
        | Opcode::InById
        | Opcode::InByIdMegamorphic
        | Opcode::InByVal
        | Opcode::InByValMegamorphic
        | Opcode::HasPrivateName
        | Opcode::HasPrivateBrand
        | Opcode::InstanceOf
        | Opcode::InstanceOfMegamorphic
        | Opcode::InstanceOfCustom
        | Opcode::VarargsLength
        | Opcode::LoadVarargs
        | Opcode::NumberToStringWithRadix
        | Opcode::NumberToStringWithValidRadixConstant
        | Opcode::ProfileType
        | Opcode::PutById
        | Opcode::PutByIdDirect
        | Opcode::PutByIdFlush
        | Opcode::PutByIdMegamorphic
        | Opcode::PutByIdWithThis
        | Opcode::PutByValWithThis
        | Opcode::MultiPutByVal
        | Opcode::EnumeratorPutByVal
        | Opcode::PutDynamicVar
        | Opcode::PutGetterById
        | Opcode::PutGetterByVal
        | Opcode::PutGetterSetterById
        | Opcode::PutSetterById
        | Opcode::PutSetterByVal
        | Opcode::PutPrivateName
        | Opcode::PutPrivateNameById
        | Opcode::GetPrivateName
        | Opcode::GetPrivateNameById
        | Opcode::SetPrivateBrand
        | Opcode::CheckPrivateBrand
        | Opcode::PutStack
        | Opcode::PutToArguments
        | Opcode::RegExpExec
        | Opcode::RegExpExecNonGlobalOrSticky
        | Opcode::RegExpMatchFast
        | Opcode::RegExpMatchFastGlobal
        | Opcode::RegExpTest
        | Opcode::RegExpTestInline
        | Opcode::RegExpSearch
        | Opcode::ResolveScope
        | Opcode::ResolveScopeForHoistingFuncDeclInEval
        | Opcode::Return
        | Opcode::StringAt
        | Opcode::StringCharAt
        | Opcode::StringLocaleCompare
        | Opcode::TailCall
        | Opcode::TailCallForwardVarargs
        | Opcode::TailCallForwardVarargsInlinedCaller
        | Opcode::TailCallInlinedCaller
        | Opcode::TailCallVarargs
        | Opcode::TailCallVarargsInlinedCaller
        | Opcode::Throw
        | Opcode::ToNumber
        | Opcode::ToNumeric
        | Opcode::ToObject
        | Opcode::ToPrimitive
        | Opcode::ToPropertyKey
        | Opcode::ToPropertyKeyOrNumber
        | Opcode::ToThis
        | Opcode::TryGetById
        | Opcode::CreateThis
        | Opcode::CreatePromise
        | Opcode::CreateGenerator
        | Opcode::CreateAsyncGenerator
        | Opcode::ObjectAssign
        | Opcode::ObjectCreate
        | Opcode::ObjectKeys
        | Opcode::ObjectGetOwnPropertyNames
        | Opcode::ObjectGetOwnPropertySymbols
        | Opcode::ObjectToString
        | Opcode::ReflectOwnKeys
        | Opcode::AllocatePropertyStorage
        | Opcode::ReallocatePropertyStorage
        | Opcode::Arrayify
        | Opcode::ArrayifyToStructure
        | Opcode::NewObject
        | Opcode::NewGenerator
        | Opcode::NewAsyncGenerator
        | Opcode::NewArray
        | Opcode::NewArrayWithSpread
        | Opcode::NewInternalFieldObject
        | Opcode::Spread
        | Opcode::NewArrayWithSize
        | Opcode::NewArrayWithConstantSize
        | Opcode::NewArrayWithSpecies
        | Opcode::NewArrayWithSizeAndStructure
        | Opcode::NewArrayBuffer
        | Opcode::NewRegExp
        | Opcode::NewRegExpUntyped
        | Opcode::NewStringObject
        | Opcode::NewMap
        | Opcode::NewSet
        | Opcode::NewSymbol
        | Opcode::MakeRope
        | Opcode::MakeAtomString
        | Opcode::ResolveRope
        | Opcode::NewFunction
        | Opcode::NewGeneratorFunction
        | Opcode::NewAsyncGeneratorFunction
        | Opcode::NewAsyncFunction
        | Opcode::NewBoundFunction
        | Opcode::NewTypedArray
        | Opcode::NewTypedArrayBuffer
        | Opcode::ThrowStaticError
        | Opcode::GetPropertyEnumerator
        | Opcode::EnumeratorInByVal
        | Opcode::EnumeratorHasOwnProperty
        | Opcode::EnumeratorNextUpdatePropertyName
        | Opcode::EnumeratorNextUpdateIndexAndMode
        | Opcode::MaterializeNewObject
        | Opcode::MaterializeNewArrayWithConstantSize
        | Opcode::MaterializeNewInternalFieldObject
        | Opcode::MaterializeCreateActivation
        | Opcode::SetFunctionName
        | Opcode::StrCat
        | Opcode::StringReplace
        | Opcode::StringReplaceAll
        | Opcode::StringReplaceRegExp
        | Opcode::StringReplaceString
        | Opcode::StringSlice
        | Opcode::StringSubstring
        | Opcode::StringValueOf
        | Opcode::CreateRest
        | Opcode::ToLowerCase
        | Opcode::CallDOMGetter
        | Opcode::CallDOM
        | Opcode::ArraySlice
        | Opcode::ArrayIncludes
        | Opcode::ArrayIndexOf
        // May resolve a rope even though it clobbers nothing.
        | Opcode::ParseInt
        | Opcode::SetAdd
        | Opcode::MapSet
        | Opcode::MapOrSetDelete
        | Opcode::MapStorage
        | Opcode::ValueBitAnd
        | Opcode::ValueBitOr
        | Opcode::ValueBitXor
        | Opcode::ValueBitLShift
        | Opcode::ValueBitRShift
        | Opcode::ValueBitURShift
        | Opcode::ValueAdd
        | Opcode::ValueSub
        | Opcode::ValueMul
        | Opcode::ValueDiv
        | Opcode::ValueMod
        | Opcode::ValuePow
        | Opcode::ValueBitNot
        | Opcode::ValueNegate
        | Opcode::DateSetTime
        | Opcode::StringIndexOf => GcBucket::Always,

        Opcode::ToIntegerOrInfinity
        | Opcode::ToLength
        | Opcode::GlobalIsFinite
        | Opcode::GlobalIsNaN
        | Opcode::CallNumberConstructor
        | Opcode::CallStringConstructor
        | Opcode::ToString
        | Opcode::CheckTraps
        | Opcode::CompareEq
        | Opcode::CompareLess
        | Opcode::CompareLessEq
        | Opcode::CompareGreater
        | Opcode::CompareGreaterEq
        | Opcode::CompareStrictEq
        | Opcode::GetByVal
        | Opcode::GetByValMegamorphic
        | Opcode::EnumeratorGetByVal
        | Opcode::PutByValDirect
        | Opcode::PutByVal
        | Opcode::PutByValAlias
        | Opcode::PutByValMegamorphic
        | Opcode::MapHash
        | Opcode::MultiPutByOffset
        | Opcode::SameValue
        | Opcode::StringFromCharCode
        | Opcode::Switch
        | Opcode::Inc
        | Opcode::Dec
        | Opcode::WeakSetAdd
        | Opcode::WeakMapSet => GcBucket::Conditional,
    }
}
