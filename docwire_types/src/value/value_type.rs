use crate::value::{TaggedValue, ValueRef};
use crate::CodecError;
use derive_more::{Deref, From};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct ValueTypeInt(i32);
impl From<ValueType> for ValueTypeInt {
    fn from(vtype: ValueType) -> Self {
        Self(vtype as i32)
    }
}

/// Discriminants are part of the wire format shared with the rest of the engine,
/// so they are spelled out rather than left to the compiler.
#[repr(i32)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum ValueType {
    Int32 = 0,
    Int64 = 1,
    Double = 2,
    String = 3,
}
impl TryFrom<ValueTypeInt> for ValueType {
    type Error = CodecError;
    fn try_from(int: ValueTypeInt) -> Result<Self, CodecError> {
        ValueType::from_i32(int.0).ok_or(CodecError::UnknownTag(int.0))
    }
}
impl From<&TaggedValue> for ValueType {
    fn from(val: &TaggedValue) -> Self {
        match val {
            TaggedValue::Int32(_) => ValueType::Int32,
            TaggedValue::Int64(_) => ValueType::Int64,
            TaggedValue::Double(_) => ValueType::Double,
            TaggedValue::String(_) => ValueType::String,
        }
    }
}
impl From<&ValueRef<'_>> for ValueType {
    fn from(val: &ValueRef<'_>) -> Self {
        match val {
            ValueRef::Int32(_) => ValueType::Int32,
            ValueRef::Int64(_) => ValueType::Int64,
            ValueRef::Double(_) => ValueType::Double,
            ValueRef::String(_) => ValueType::String,
        }
    }
}
