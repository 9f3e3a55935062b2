//! # Varint format
//!
//! Unsigned integers are encoded LEB128-style: each byte carries 7 payload bits,
//! least significant group first, and the high bit is set on every byte except the last.
//!
//! Signed integers are zigzag-mapped onto unsigned ones first, so that values of
//! small magnitude stay short regardless of sign.
//!
//! ```text
//! 0           => 00
//! 1           => 01
//! 300         => ac 02
//! u64::MAX    => ff ff ff ff ff ff ff ff ff 01
//! ```
//!
//! A `u64` never needs more than [`MAX_VARINT_LEN`] bytes. Decoding rejects longer chains.

use crate::{CodecError, Result};
use std::ops::Deref;


pub const MAX_VARINT_LEN: usize = 10;

/// An encoded varint, held on the stack.
#[derive(Clone, Copy, Debug)]
pub struct VarintBuf {
    bytes: [u8; MAX_VARINT_LEN],
    len: u8,
}
impl Deref for VarintBuf {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

pub fn encode_var_uint(mut v: u64) -> VarintBuf {
    let mut bytes = [0u8; MAX_VARINT_LEN];
    let mut len = 0;
    loop {
        let group = (v & 0x7F) as u8;
        v >>= 7;
        if v == 0 {
            bytes[len] = group;
            len += 1;
            break;
        }
        bytes[len] = group | 0x80;
        len += 1;
    }
    VarintBuf {
        bytes,
        len: len as u8,
    }
}

pub fn encode_varint(v: i64) -> VarintBuf {
    encode_var_uint(zigzag(v))
}

/// Returns the value and the count of bytes consumed from the front of `buf`.
///
/// Fails with [`CodecError::TruncatedInput`] if `buf` ends mid-chain, and with
/// [`CodecError::MalformedVarint`] if the chain is longer than [`MAX_VARINT_LEN`]
/// or its last group overflows 64 bits.
pub fn decode_var_uint(buf: &[u8]) -> Result<(u64, usize)> {
    let mut v = 0u64;
    for i in 0..MAX_VARINT_LEN {
        let byte = match buf.get(i) {
            None => return Err(CodecError::truncated(i + 1, buf.len())),
            Some(byte) => *byte,
        };
        let group = (byte & 0x7F) as u64;

        /* The 10th group only has room for the top bit of a u64. */
        if i == MAX_VARINT_LEN - 1 && (group > 1 || byte & 0x80 != 0) {
            return Err(CodecError::MalformedVarint);
        }

        v |= group << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((v, i + 1));
        }
    }
    Err(CodecError::MalformedVarint)
}

pub fn decode_varint(buf: &[u8]) -> Result<(i64, usize)> {
    let (v, len) = decode_var_uint(buf)?;
    Ok((unzigzag(v), len))
}

#[inline]
pub fn zigzag(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

#[inline]
pub fn unzigzag(v: u64) -> i64 {
    ((v >> 1) as i64) ^ -((v & 1) as i64)
}
