//! Error handling for the FFI boundary
//!
//! Resolver failures become status codes, and panics are caught before
//! they can unwind into foreign frames.

use std::any::Any;
use std::panic;

use slang_abi::ErrCode;

use crate::memory::set_last_error;

/// Why a language code could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Nothing matched the code
    #[error("no language matches {code:?}")]
    NotFound {
        /// The code that was looked up
        code: String,
    },

    /// The resolver could not do its job at all
    #[error("language database unavailable: {0}")]
    Backend(String),
}

/// Convert a resolver error to a status code, recording its message
pub fn map_resolve_error(error: &ResolveError) -> ErrCode {
    set_last_error(error.to_string());
    match error {
        ResolveError::NotFound { .. } => ErrCode::NoSuchLang,
        ResolveError::Backend(_) => ErrCode::Parse,
    }
}

/// Safely execute a closure that might panic
///
/// A panic is reported as [`ErrCode::Parse`] with its message recorded as
/// the last error.
pub fn catch_panic<F, R>(f: F) -> Result<R, ErrCode>
where
    F: FnOnce() -> Result<R, ErrCode> + panic::UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(result) => result,
        Err(panic_info) => {
            let msg = get_panic_message(&panic_info);
            tracing::error!(panic = %msg, "panic caught at FFI boundary");
            set_last_error(format!("Panic occurred: {}", msg));
            Err(ErrCode::Parse)
        }
    }
}

/// Extract a message from panic info
fn get_panic_message(panic_info: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Run an FFI body, turning an error code into `$on_error(code)`
#[macro_export]
macro_rules! ffi_boundary {
    ($on_error:expr, $body:expr) => {{
        match $crate::error::catch_panic(|| $body) {
            Ok(result) => result,
            Err(code) => return $on_error(code),
        }
    }};
}
