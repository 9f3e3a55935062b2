use crate::error::ParamsError;
use anyhow::Result;
use std::ptr;
use std::slice;

/// A byte buffer as it crosses the boundary.
///
/// Buffers built by [`WireBuffer::from_vec`] own their allocation until they are passed
/// back to [`crate::docwire_free_buffer`]. Buffers received from callers are only borrowed.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct WireBuffer {
    pub data: *mut u8,
    pub len: usize,
}

impl WireBuffer {
    pub fn null() -> Self {
        Self {
            data: ptr::null_mut(),
            len: 0,
        }
    }

    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }

    /// Gives up ownership of `buf`. Reclaim it with [`WireBuffer::into_vec`].
    pub fn from_vec(buf: Vec<u8>) -> Self {
        let buf = buf.into_boxed_slice();
        let len = buf.len();
        let data = Box::into_raw(buf) as *mut u8;
        Self { data, len }
    }

    /// A null buffer is accepted as empty only if its length is zero.
    ///
    /// # Safety
    ///
    /// Unless null, `data` must point to `len` initialized bytes which stay alive
    /// and unmodified for `'a`.
    pub unsafe fn as_slice<'a>(&self) -> Result<&'a [u8]> {
        if self.data.is_null() {
            if self.len == 0 {
                return Ok(&[]);
            }
            return Err(ParamsError("null buffer with nonzero length").into());
        }
        Ok(slice::from_raw_parts(self.data, self.len))
    }

    /// # Safety
    ///
    /// `self` must have been built by [`WireBuffer::from_vec`] and not reclaimed since.
    pub unsafe fn into_vec(self) -> Vec<u8> {
        let buf = Box::from_raw(ptr::slice_from_raw_parts_mut(self.data, self.len));
        buf.into_vec()
    }
}
