//! Whole-buffer primitives over tagged-value streams.
//!
//! A stream is tagged values laid end to end with nothing in between, ending exactly
//! at the end of the buffer.

use docwire_types::serde::{Reader, TaggedValues, Writer};
use docwire_types::value::{TaggedValue, ValueRef};
use docwire_types::Result;


/// Values borrow from `buf`. Stops after the first error.
pub fn decode_values(buf: &[u8]) -> TaggedValues<'_> {
    Reader::new(buf).into_tagged_values()
}

pub fn decode_values_owned(buf: &[u8]) -> Result<Vec<TaggedValue>> {
    decode_values(buf)
        .map(|res| res.map(|val| val.to_owned_value()))
        .collect()
}

pub fn encode_values<'v, I>(vals: I) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: Into<ValueRef<'v>>,
{
    let mut w = Writer::new();
    for val in vals {
        w.write_tagged_value(val);
    }
    w.detach()
}

/// Renders a stream as a JSON array.
///
/// Strings are emitted byte for byte between quotes, with only the escapes of
/// [`Writer::write_json_string`]. Non-finite doubles, which JSON cannot express, become `null`.
pub fn values_to_json(buf: &[u8]) -> Result<Vec<u8>> {
    let mut w = Writer::new();
    w.write_u8(b'[');
    for (val_i, val) in decode_values(buf).enumerate() {
        let val = val?;
        if val_i > 0 {
            w.write_u8(b',');
        }
        match val {
            ValueRef::Int32(i) => w.write_decimal(i),
            ValueRef::Int64(i) => w.write_decimal(i),
            ValueRef::Double(d) if d.is_finite() => {
                let mut fmt_buf = ryu::Buffer::new();
                w.write_bytes(fmt_buf.format_finite(d).as_bytes());
            }
            ValueRef::Double(_) => w.write_bytes(b"null"),
            ValueRef::String(s) => w.write_json_string(s),
        }
    }
    w.write_u8(b']');
    Ok(w.detach())
}
