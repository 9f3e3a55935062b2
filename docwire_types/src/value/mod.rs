//! # Tagged values
//!
//! A [`TaggedValue`] is one dynamically typed scalar: a query argument, a result column,
//! or one component of a secondary index key.
//! A [`ValueRef`] is the same thing with its string body still inside the decoded buffer.
//!
//! On the wire, a tagged value is its [`ValueType`] as a fixed-width `i32`, followed by
//! the body that type implies.
//!
//! ```text
//! struct TaggedValue::Int32 {
//!     value_type:     i32,
//!     body:           i32,
//! }
//!
//! struct TaggedValue::Int64 {
//!     value_type:     i32,
//!     body:           i64,
//! }
//!
//! struct TaggedValue::Double {
//!     value_type:     i32,
//!     body:           f64,
//! }
//!
//! struct TaggedValue::String {
//!     value_type:     i32,
//!     body_len:       i32,
//!     body:           [u8; body_len],
//! }
//! ```
//!
//! All fixed-width fields are in native byte order.

mod tagged;
mod value_type;

pub use tagged::*;
pub use value_type::*;
