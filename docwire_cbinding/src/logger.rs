use std::ffi::CString;
use std::os::raw::{c_char, c_int};

/// Receives a level and a NUL-terminated message that is only valid during the call.
pub type LogWriter = extern "C" fn(level: c_int, msg: *const c_char);

#[repr(i32)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum LogLevel {
    Error = 1,
    Warning = 2,
    Info = 3,
    Trace = 4,
}

/// Forwards diagnostics to the caller's [`LogWriter`], if one was given at init,
/// and to `tracing`.
#[derive(Clone, Copy, Default, Debug)]
pub struct Logger {
    writer: Option<LogWriter>,
}

impl Logger {
    pub fn new(writer: Option<LogWriter>) -> Self {
        Self { writer }
    }

    pub fn log(&self, level: LogLevel, msg: &str) {
        match level {
            LogLevel::Error => tracing::error!("{msg}"),
            LogLevel::Warning => tracing::warn!("{msg}"),
            LogLevel::Info => tracing::info!("{msg}"),
            LogLevel::Trace => tracing::trace!("{msg}"),
        }

        if let Some(writer) = self.writer {
            /* Interior NULs would cut the message short on the C side. */
            let msg = CString::new(msg.replace('\0', " ")).unwrap_or_default();
            writer(level as c_int, msg.as_ptr());
        }
    }
}
