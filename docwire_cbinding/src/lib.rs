//! The boundary between the engine and its foreign callers.
//!
//! Callers hand in `(pointer, length)` buffers and receive buffers back, together with
//! an integer [`ErrorCode`]. Every buffer handed out here must be released exactly once
//! through [`docwire_free_buffer`]. Buffers handed in stay owned by the caller.

mod binding;
mod buffer;
mod codec;
mod error;
mod logger;

pub use binding::*;
pub use buffer::*;
pub use codec::*;
pub use error::*;
pub use logger::*;
