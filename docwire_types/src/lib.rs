//! Binary wire encoding shared by the engine and its callers.
//!
//! - [`varint`] holds the variable-length integer codec.
//! - [`serde`] holds the cursor-based [`serde::Reader`] and the growable [`serde::Writer`].
//! - [`value`] holds the dynamically typed scalar passed as query arguments and results.

mod error;

pub mod serde;
pub mod value;
pub mod varint;

pub use error::*;
