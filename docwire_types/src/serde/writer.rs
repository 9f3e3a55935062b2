use crate::value::{ValueRef, ValueType, ValueTypeInt};
use crate::varint;
use std::mem;

mod storage;
mod text;

use storage::Storage;
pub use storage::{GROWTH_SLACK, INLINE_CAPACITY};

/// An append-only, growable byte buffer.
///
/// Small payloads stay in an inline region of [`INLINE_CAPACITY`] bytes; larger ones
/// move to the heap. Appending never fails; allocation failure aborts the process.
#[derive(Clone, Debug)]
pub struct Writer {
    storage: Storage,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    pub fn new() -> Self {
        Self {
            storage: Storage::new_inline(),
        }
    }

    /// A writer without an inline region. The first append allocates on the heap.
    pub fn heap_only() -> Self {
        Self {
            storage: Storage::Empty,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            storage: Storage::new_heap(cap),
        }
    }

    /// Content written so far. Any later append may move it.
    pub fn bytes(&self) -> &[u8] {
        self.storage.as_slice()
    }
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    pub fn is_inline(&self) -> bool {
        matches!(self.storage, Storage::Inline { .. })
    }

    /// Ensures the next `additional` bytes can be appended without reallocating.
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional);
    }

    /// Drops the content but keeps the storage for reuse.
    pub fn reset(&mut self) {
        self.storage.clear();
    }

    /// Hands the content over to the caller.
    ///
    /// The writer is left holding nothing; the next append allocates a fresh heap buffer.
    /// Inline content is copied into a new allocation.
    pub fn detach(&mut self) -> Vec<u8> {
        mem::replace(&mut self.storage, Storage::Empty).into_vec()
    }

    /* Raw */

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.storage.reserve(bytes.len());
        self.storage.append_reserved(bytes);
    }

    /* Fixed width */

    pub fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }
    pub fn write_i8(&mut self, v: i8) {
        self.write_bytes(&v.to_ne_bytes());
    }
    pub fn write_i16(&mut self, v: i16) {
        self.write_bytes(&v.to_ne_bytes());
    }
    pub fn write_i32(&mut self, v: i32) {
        self.write_bytes(&v.to_ne_bytes());
    }
    pub fn write_i64(&mut self, v: i64) {
        self.write_bytes(&v.to_ne_bytes());
    }
    pub fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_ne_bytes());
    }
    pub fn write_f64(&mut self, v: f64) {
        self.write_bytes(&v.to_ne_bytes());
    }

    /* Fixed-width length prefix */

    /// # Panics
    ///
    /// If `s` is longer than `i32::MAX` bytes, which the length prefix cannot express.
    pub fn write_fixed_string(&mut self, s: impl AsRef<[u8]>) {
        let s = s.as_ref();
        let len = match i32::try_from(s.len()) {
            Err(_) => panic!("String of {} bytes exceeds the i32 length prefix.", s.len()),
            Ok(len) => len,
        };
        self.reserve(mem::size_of::<i32>() + s.len());
        self.write_i32(len);
        self.write_bytes(s);
    }

    /* Varints */

    pub fn write_var_uint(&mut self, v: u64) {
        self.write_bytes(&varint::encode_var_uint(v));
    }
    pub fn write_varint(&mut self, v: i64) {
        self.write_bytes(&varint::encode_varint(v));
    }
    pub fn write_bool(&mut self, b: bool) {
        self.write_var_uint(b as u64);
    }

    /* Varint length prefix */

    pub fn write_var_string(&mut self, s: impl AsRef<[u8]>) {
        let s = s.as_ref();
        let len = varint::encode_var_uint(s.len() as u64);
        self.reserve(len.len() + s.len());
        self.write_bytes(&len);
        self.write_bytes(s);
    }

    /* Tagged values */

    /// Accepts `&TaggedValue`, `ValueRef` or `&str`.
    pub fn write_tagged_value<'v>(&mut self, val: impl Into<ValueRef<'v>>) {
        let val = val.into();
        self.write_i32(*ValueTypeInt::from(ValueType::from(&val)));
        match val {
            ValueRef::Int32(i) => self.write_i32(i),
            ValueRef::Int64(i) => self.write_i64(i),
            ValueRef::Double(d) => self.write_f64(d),
            ValueRef::String(s) => self.write_fixed_string(s),
        }
    }
}
