use crate::value::{TaggedValue, ValueRef, ValueType, ValueTypeInt};
use crate::varint;
use crate::{CodecError, Result};


/// A cursor over a byte buffer that the reader does not own.
///
/// Every `read_*` either returns a value and advances past exactly the bytes it
/// consumed, or returns an error and leaves the position where it was.
#[derive(Clone, Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> From<&'a [u8]> for Reader<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self::new(buf)
    }
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.buf.len()
    }
    pub fn position(&self) -> usize {
        self.pos
    }
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /* Fixed width */

    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.take_array::<1>()?;
        Ok(b)
    }
    pub fn read_i32(&mut self) -> Result<i32> {
        self.take_array().map(i32::from_ne_bytes)
    }
    pub fn read_i64(&mut self) -> Result<i64> {
        self.take_array().map(i64::from_ne_bytes)
    }
    pub fn read_u64(&mut self) -> Result<u64> {
        self.take_array().map(u64::from_ne_bytes)
    }
    pub fn read_f64(&mut self) -> Result<f64> {
        self.take_array().map(f64::from_ne_bytes)
    }

    /* Fixed-width length prefix */

    pub fn read_fixed_string(&mut self) -> Result<Vec<u8>> {
        self.read_fixed_string_view().map(<[u8]>::to_vec)
    }

    /// The body of a fixed-width-length-prefixed string, still inside the source buffer.
    pub fn read_fixed_string_view(&mut self) -> Result<&'a [u8]> {
        self.atomically(|r| {
            let len = r.read_i32()?;
            /* A negative length reinterprets to more than any i32-framed buffer holds. */
            let len = usize::try_from(len).unwrap_or(len as u32 as usize);
            r.take(len)
        })
    }

    /* Varints */

    pub fn read_var_uint(&mut self) -> Result<u64> {
        let (v, r_len) = varint::decode_var_uint(&self.buf[self.pos..])?;
        self.pos += r_len;
        Ok(v)
    }
    pub fn read_varint(&mut self) -> Result<i64> {
        let (v, r_len) = varint::decode_varint(&self.buf[self.pos..])?;
        self.pos += r_len;
        Ok(v)
    }
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read_var_uint().map(|v| v != 0)
    }

    /* Varint length prefix */

    pub fn read_var_string(&mut self) -> Result<Vec<u8>> {
        self.read_var_string_view().map(<[u8]>::to_vec)
    }

    /// The body of a varint-length-prefixed string, still inside the source buffer.
    pub fn read_var_string_view(&mut self) -> Result<&'a [u8]> {
        self.atomically(|r| {
            let len = r.read_var_uint()?;
            let len = usize::try_from(len).unwrap_or(usize::MAX);
            r.take(len)
        })
    }

    /* Tagged values */

    pub fn read_tagged_value(&mut self) -> Result<TaggedValue> {
        self.atomically(|r| {
            let val = match r.read_value_type()? {
                ValueType::Int32 => TaggedValue::Int32(r.read_i32()?),
                ValueType::Int64 => TaggedValue::Int64(r.read_i64()?),
                ValueType::Double => TaggedValue::Double(r.read_f64()?),
                ValueType::String => TaggedValue::String(r.read_fixed_string()?),
            };
            Ok(val)
        })
    }

    pub fn read_tagged_value_view(&mut self) -> Result<ValueRef<'a>> {
        self.atomically(|r| {
            let val = match r.read_value_type()? {
                ValueType::Int32 => ValueRef::Int32(r.read_i32()?),
                ValueType::Int64 => ValueRef::Int64(r.read_i64()?),
                ValueType::Double => ValueRef::Double(r.read_f64()?),
                ValueType::String => ValueRef::String(r.read_fixed_string_view()?),
            };
            Ok(val)
        })
    }

    fn read_value_type(&mut self) -> Result<ValueType> {
        self.atomically(|r| {
            let int = ValueTypeInt::from(r.read_i32()?);
            ValueType::try_from(int)
        })
    }

    /// Iterates over the remaining bytes as a sequence of tagged values.
    pub fn into_tagged_values(self) -> TaggedValues<'a> {
        TaggedValues {
            r: self,
            failed: false,
        }
    }

    /* Bounds */

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(CodecError::truncated(len, remaining));
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn take_array<const LEN: usize>(&mut self) -> Result<[u8; LEN]> {
        let mut arr = [0u8; LEN];
        arr.copy_from_slice(self.take(LEN)?);
        Ok(arr)
    }

    fn atomically<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let pos = self.pos;
        let res = f(self);
        if res.is_err() {
            self.pos = pos;
        }
        res
    }
}

/// Yields borrowed tagged values until the buffer is exhausted.
/// After the first error, yields nothing more.
pub struct TaggedValues<'a> {
    r: Reader<'a>,
    failed: bool,
}

impl<'a> TaggedValues<'a> {
    pub fn reader(&self) -> &Reader<'a> {
        &self.r
    }
}

impl<'a> Iterator for TaggedValues<'a> {
    type Item = Result<ValueRef<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.r.at_end() {
            return None;
        }
        let res = self.r.read_tagged_value_view();
        self.failed = res.is_err();
        Some(res)
    }
}
