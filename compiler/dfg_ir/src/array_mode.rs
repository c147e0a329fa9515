//! Array modes for indexed property access.
//!
//! An [`ArrayMode`] is the speculation the optimizer made about the object an
//! indexed access (`GetByVal`, `PutByVal`, ...) operates on. It selects the
//! code the backend emits: a contiguous-storage load, a typed-array element
//! store, a character load from a string, or the fully generic path.

/// Shape of the indexed storage being accessed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrayType {
    SelectUsingPredictions,
    SelectUsingArguments,
    Unprofiled,
    ForceExit,
    Generic,
    /// Character access on a string primitive.
    String,
    Undecided,
    Int32,
    Double,
    Contiguous,
    ArrayStorage,
    SlowPutArrayStorage,
    DirectArguments,
    ScopedArguments,
    Int8Array,
    Int16Array,
    Int32Array,
    Uint8Array,
    Uint8ClampedArray,
    Uint16Array,
    Uint32Array,
    Float16Array,
    Float32Array,
    Float64Array,
    BigInt64Array,
    BigUint64Array,
    AnyTypedArray,
}

impl ArrayType {
    /// Returns `true` for the typed-array element types (including the
    /// polymorphic `AnyTypedArray`).
    pub fn is_typed_array(self) -> bool {
        matches!(
            self,
            ArrayType::Int8Array
                | ArrayType::Int16Array
                | ArrayType::Int32Array
                | ArrayType::Uint8Array
                | ArrayType::Uint8ClampedArray
                | ArrayType::Uint16Array
                | ArrayType::Uint32Array
                | ArrayType::Float16Array
                | ArrayType::Float32Array
                | ArrayType::Float64Array
                | ArrayType::BigInt64Array
                | ArrayType::BigUint64Array
                | ArrayType::AnyTypedArray
        )
    }

    /// Returns `true` for the typed arrays with integer elements. Stores into
    /// these clamp or truncate the value rather than keeping a double.
    pub fn is_int_typed_array(self) -> bool {
        self.is_typed_array()
            && !matches!(
                self,
                ArrayType::Float16Array
                    | ArrayType::Float32Array
                    | ArrayType::Float64Array
                    | ArrayType::BigInt64Array
                    | ArrayType::BigUint64Array
                    | ArrayType::AnyTypedArray
            )
    }
}

/// Whether the access reads or writes the indexed storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrayAction {
    #[default]
    Read,
    Write,
}

/// Array speculation attached to an indexed access node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayMode {
    array_type: ArrayType,
    action: ArrayAction,
}

impl ArrayMode {
    /// Create an array mode.
    pub const fn new(array_type: ArrayType, action: ArrayAction) -> Self {
        Self { array_type, action }
    }

    /// Array mode for a read of the given storage shape.
    pub const fn read(array_type: ArrayType) -> Self {
        Self::new(array_type, ArrayAction::Read)
    }

    /// Array mode for a write to the given storage shape.
    pub const fn write(array_type: ArrayType) -> Self {
        Self::new(array_type, ArrayAction::Write)
    }

    #[inline]
    pub fn array_type(self) -> ArrayType {
        self.array_type
    }

    #[inline]
    pub fn action(self) -> ArrayAction {
        self.action
    }

    /// The mode a store actually uses.
    ///
    /// Arguments objects are never stored into in place; stores to them take
    /// the generic path.
    pub fn mode_for_put(self) -> Self {
        match self.array_type {
            ArrayType::DirectArguments | ArrayType::ScopedArguments => {
                Self::new(ArrayType::Generic, self.action)
            }
            _ => self,
        }
    }
}
