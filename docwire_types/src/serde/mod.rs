//! # Serialization format
//!
//! The [`Reader`] and [`Writer`] are mirror images of each other: every `write_*`
//! method has a `read_*` counterpart that decodes what it wrote.
//!
//! ```text
//! fixed int32/int64/double:   [u8; 4 | 8 | 8], native byte order
//!
//! struct FixedString {
//!     len:        i32,
//!     body:       [u8; len],
//! }
//!
//! varuint:                    see [`crate::varint`]
//! varint:                     zigzag, then varuint
//!
//! struct VarString {
//!     len:        varuint,
//!     body:       [u8; len],
//! }
//!
//! bool:                       varuint, 0 = false, nonzero = true
//!
//! tagged value:               see [`crate::value`]
//! ```
//!
//! Neither form carries a terminator or an alignment pad.
//! Strings are raw bytes; nothing here requires them to be UTF-8.

mod reader;
mod writer;

pub use reader::*;
pub use writer::*;
