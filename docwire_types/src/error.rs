use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

/// Recoverable decoding failures.
///
/// Allocation failure is not represented here: the writer aborts the process instead.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum CodecError {
    /// Fewer bytes remain than a field declares.
    /// A negative fixed-width length prefix is reported with `needed` set to its
    /// unsigned reinterpretation, which no real buffer satisfies.
    #[error("Truncated input: {needed} bytes needed, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("Malformed varint: continuation chain exceeds {} bytes", crate::varint::MAX_VARINT_LEN)]
    MalformedVarint,

    #[error("Unknown value tag {0}")]
    UnknownTag(i32),
}

impl CodecError {
    pub(crate) fn truncated(needed: usize, remaining: usize) -> Self {
        Self::TruncatedInput { needed, remaining }
    }
}
