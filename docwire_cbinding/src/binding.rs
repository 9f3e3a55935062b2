use crate::buffer::WireBuffer;
use crate::codec;
use crate::error::{ErrorCode, ParamsError, WireError, WireRet};
use crate::logger::{LogLevel, LogWriter, Logger};
use anyhow::{Context, Result};


/// Per-caller state. Capabilities such as logging are injected here at init,
/// never registered globally.
#[derive(Default, Debug)]
pub struct Binding {
    logger: Logger,
}

impl Binding {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Decodes a tagged-value stream and encodes it again,
    /// so that only a well-formed stream is ever passed on.
    pub fn normalize_values(&self, input: &[u8]) -> Result<Vec<u8>> {
        let res = codec::decode_values_owned(input)
            .map(|vals| codec::encode_values(vals.iter()))
            .context("Normalizing values");
        self.log_failure(res)
    }

    pub fn values_to_json(&self, input: &[u8]) -> Result<Vec<u8>> {
        let res = codec::values_to_json(input).context("Rendering values as JSON");
        self.log_failure(res)
    }

    fn log_failure<T>(&self, res: Result<T>) -> Result<T> {
        if let Err(e) = &res {
            self.logger.log(LogLevel::Error, &format!("{e:#}"));
        }
        res
    }

    /// # Safety
    ///
    /// See [`WireBuffer::as_slice`].
    unsafe fn call(
        &self,
        input: WireBuffer,
        f: impl FnOnce(&Self, &[u8]) -> Result<Vec<u8>>,
    ) -> WireRet {
        let res = input.as_slice().and_then(|input| f(self, input));
        WireRet::from(res)
    }
}

/// Returns a handle to release with [`docwire_destroy`].
#[no_mangle]
pub extern "C" fn docwire_init(log_writer: Option<LogWriter>) -> *mut Binding {
    let binding = Binding::new(Logger::new(log_writer));
    Box::into_raw(Box::new(binding))
}

/// # Safety
///
/// `binding` must be null or a handle from [`docwire_init`] not yet destroyed.
#[no_mangle]
pub unsafe extern "C" fn docwire_destroy(binding: *mut Binding) {
    if !binding.is_null() {
        drop(Box::from_raw(binding));
    }
}

/// Releases a buffer returned by any other `docwire_*` function.
///
/// # Safety
///
/// `buf` must be null or returned by this library and not released before.
#[no_mangle]
pub unsafe extern "C" fn docwire_free_buffer(buf: WireBuffer) -> WireError {
    if buf.is_null() {
        if buf.len == 0 {
            return WireError::ok();
        }
        return WireError::from(ErrorCode::Params);
    }
    drop(buf.into_vec());
    WireError::ok()
}

/// # Safety
///
/// `binding` must be null or a live handle from [`docwire_init`].
/// `input` must be null with zero length, or describe readable memory for the whole call.
#[no_mangle]
pub unsafe extern "C" fn docwire_normalize_values(
    binding: *const Binding,
    input: WireBuffer,
) -> WireRet {
    match binding.as_ref() {
        None => WireRet::from(Err(ParamsError("null binding").into())),
        Some(binding) => binding.call(input, Binding::normalize_values),
    }
}

/// # Safety
///
/// Same as [`docwire_normalize_values`].
#[no_mangle]
pub unsafe extern "C" fn docwire_values_to_json(
    binding: *const Binding,
    input: WireBuffer,
) -> WireRet {
    match binding.as_ref() {
        None => WireRet::from(Err(ParamsError("null binding").into())),
        Some(binding) => binding.call(input, Binding::values_to_json),
    }
}
