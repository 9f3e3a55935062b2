use crate::buffer::WireBuffer;
use docwire_types::CodecError;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::os::raw::c_int;
use thiserror::Error;

/// A caller passed a pointer or handle the binding cannot use.
#[derive(Error, Debug)]
#[error("Invalid parameter: {0}")]
pub struct ParamsError(pub &'static str);

#[repr(i32)]
#[derive(PartialEq, Eq, Clone, Copy, FromPrimitive, Debug)]
pub enum ErrorCode {
    Ok = 0,
    TruncatedInput = 1,
    MalformedVarint = 2,
    UnknownTag = 3,
    Params = 4,
    Logic = 5,
}
impl From<&CodecError> for ErrorCode {
    fn from(err: &CodecError) -> Self {
        match err {
            CodecError::TruncatedInput { .. } => Self::TruncatedInput,
            CodecError::MalformedVarint => Self::MalformedVarint,
            CodecError::UnknownTag(_) => Self::UnknownTag,
        }
    }
}
impl From<&anyhow::Error> for ErrorCode {
    fn from(err: &anyhow::Error) -> Self {
        if let Some(err) = err.downcast_ref::<CodecError>() {
            Self::from(err)
        } else if err.is::<ParamsError>() {
            Self::Params
        } else {
            Self::Logic
        }
    }
}

#[repr(C)]
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct WireError {
    pub code: c_int,
}
impl From<ErrorCode> for WireError {
    fn from(code: ErrorCode) -> Self {
        Self {
            code: code as c_int,
        }
    }
}
impl WireError {
    pub fn ok() -> Self {
        Self::from(ErrorCode::Ok)
    }

    /// `None` for codes this binding never produces.
    pub fn error_code(&self) -> Option<ErrorCode> {
        ErrorCode::from_i32(self.code)
    }
}

/// On error, `out` is null and must not be released.
#[repr(C)]
#[derive(Debug)]
pub struct WireRet {
    pub err: WireError,
    pub out: WireBuffer,
}
impl From<anyhow::Result<Vec<u8>>> for WireRet {
    fn from(res: anyhow::Result<Vec<u8>>) -> Self {
        match res {
            Ok(buf) => Self {
                err: WireError::ok(),
                out: WireBuffer::from_vec(buf),
            },
            Err(e) => Self {
                err: WireError::from(ErrorCode::from(&e)),
                out: WireBuffer::null(),
            },
        }
    }
}
