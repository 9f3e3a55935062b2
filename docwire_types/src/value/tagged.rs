use crate::value::ValueType;
use std::borrow::Cow;
use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::str::{self, Utf8Error};

/// An owning tagged value. Safe to keep after the buffer it was decoded from is gone.
///
/// `String` holds raw bytes: the engine does not require its strings to be UTF-8.
#[derive(Clone, Debug)]
pub enum TaggedValue {
    Int32(i32),
    Int64(i64),
    Double(f64),
    String(Vec<u8>),
}

/// A tagged value whose string body borrows from the buffer it was decoded from.
///
/// The lifetime ties it to that buffer; converting to [`TaggedValue`] copies the body once.
#[derive(Clone, Copy, Debug)]
pub enum ValueRef<'a> {
    Int32(i32),
    Int64(i64),
    Double(f64),
    String(&'a [u8]),
}

impl TaggedValue {
    pub fn value_type(&self) -> ValueType {
        ValueType::from(self)
    }

    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            Self::Int32(i) => ValueRef::Int32(*i),
            Self::Int64(i) => ValueRef::Int64(*i),
            Self::Double(d) => ValueRef::Double(*d),
            Self::String(s) => ValueRef::String(s),
        }
    }
}

impl<'a> ValueRef<'a> {
    pub fn value_type(&self) -> ValueType {
        ValueType::from(self)
    }

    pub fn to_owned_value(&self) -> TaggedValue {
        match *self {
            Self::Int32(i) => TaggedValue::Int32(i),
            Self::Int64(i) => TaggedValue::Int64(i),
            Self::Double(d) => TaggedValue::Double(d),
            Self::String(s) => TaggedValue::String(s.to_vec()),
        }
    }

    /// `None` unless this is a `String`.
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<Result<&'a str, Utf8Error>> {
        self.as_bytes().map(str::from_utf8)
    }

    pub fn to_string_lossy(&self) -> Option<Cow<'a, str>> {
        self.as_bytes().map(String::from_utf8_lossy)
    }

    /// Values of the same type compare by value; doubles use IEEE 754 `totalOrder`,
    /// so NaN equals itself and `-0.0 < 0.0`.
    /// Values of different types compare by [`ValueType`].
    fn total_cmp(&self, other: &ValueRef<'_>) -> Ordering {
        match (self, other) {
            (Self::Int32(slf), ValueRef::Int32(oth)) => slf.cmp(oth),
            (Self::Int64(slf), ValueRef::Int64(oth)) => slf.cmp(oth),
            (Self::Double(slf), ValueRef::Double(oth)) => slf.total_cmp(oth),
            (Self::String(slf), ValueRef::String(oth)) => slf.cmp(oth),
            _ => self.value_type().cmp(&other.value_type()),
        }
    }
}

/* Ordering */
impl PartialEq<ValueRef<'_>> for ValueRef<'_> {
    fn eq(&self, other: &ValueRef<'_>) -> bool {
        self.total_cmp(other) == Ordering::Equal
    }
}
impl Eq for ValueRef<'_> {}
impl PartialOrd for ValueRef<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for ValueRef<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl PartialEq for TaggedValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_value_ref() == other.as_value_ref()
    }
}
impl Eq for TaggedValue {}
impl PartialOrd for TaggedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for TaggedValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_value_ref().total_cmp(&other.as_value_ref())
    }
}

/* ValueRef is comparable against TaggedValue, and vice versa. */
impl PartialEq<TaggedValue> for ValueRef<'_> {
    fn eq(&self, other: &TaggedValue) -> bool {
        *self == other.as_value_ref()
    }
}
impl PartialEq<ValueRef<'_>> for TaggedValue {
    fn eq(&self, other: &ValueRef<'_>) -> bool {
        self.as_value_ref() == *other
    }
}

/* Conversions */
impl From<i32> for TaggedValue {
    fn from(i: i32) -> Self {
        Self::Int32(i)
    }
}
impl From<i64> for TaggedValue {
    fn from(i: i64) -> Self {
        Self::Int64(i)
    }
}
impl From<f64> for TaggedValue {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}
impl From<&str> for TaggedValue {
    fn from(s: &str) -> Self {
        Self::String(s.as_bytes().to_vec())
    }
}
impl From<String> for TaggedValue {
    fn from(s: String) -> Self {
        Self::String(s.into_bytes())
    }
}
impl From<Vec<u8>> for TaggedValue {
    fn from(b: Vec<u8>) -> Self {
        Self::String(b)
    }
}
impl From<ValueRef<'_>> for TaggedValue {
    fn from(val: ValueRef<'_>) -> Self {
        val.to_owned_value()
    }
}
impl<'a> From<&'a TaggedValue> for ValueRef<'a> {
    fn from(val: &'a TaggedValue) -> Self {
        val.as_value_ref()
    }
}
impl<'a> From<&'a str> for ValueRef<'a> {
    fn from(s: &'a str) -> Self {
        Self::String(s.as_bytes())
    }
}
