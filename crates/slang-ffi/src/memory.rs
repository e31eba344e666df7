//! Memory management utilities for FFI
//!
//! Every payload handed to a caller is allocated here and must come back
//! through [`SlangFreeString`]. Error messages live in thread-local storage
//! and are owned by the library.

use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use slang_abi::{ErrCode, SlangString, StringView};

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message for the current thread
pub fn set_last_error<S: Into<String>>(err: S) {
    let message = CString::new(err.into()).unwrap_or_else(|e| {
        // keep everything up to the first NUL
        let end = e.nul_position();
        let mut bytes = e.into_vec();
        bytes.truncate(end);
        CString::new(bytes).unwrap_or_default()
    });
    tracing::debug!(message = ?message, "setting last error");

    LAST_ERROR.with(|e| {
        *e.borrow_mut() = Some(message);
    });
}

/// Clear the last error message
pub fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Allocate a NUL-terminated copy of `s` for the caller
///
/// Returns null if `s` contains a NUL byte. The caller must free the result
/// with [`SlangFreeString`].
pub fn allocate_string(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => {
            set_last_error("String contains null byte");
            ptr::null_mut()
        }
    }
}

/// Validate a view received from a caller
///
/// # Safety
/// When `raw.n > 0`, `raw.p` must point at `raw.n` readable bytes for `'a`.
pub unsafe fn borrow_view<'a>(raw: SlangString) -> Result<StringView<'a>, ErrCode> {
    StringView::from_raw(raw).map_err(|e| {
        set_last_error(format!("Invalid string view: {}", e));
        ErrCode::InvalidArgument
    })
}

/// Free a payload returned by this library
///
/// Passing null is a no-op.
///
/// # Safety
/// `s` must be null or a payload returned by this library that has not been
/// freed yet.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn SlangFreeString(s: *mut c_char) {
    if s.is_null() {
        return;
    }

    // Reconstruct the CString and let it drop
    drop(CString::from_raw(s));
}

/// Get the last error message for the calling thread
///
/// Returns null when the last call succeeded.
///
/// # Safety
/// The returned pointer must NOT be freed and is only valid until the next
/// call into this library on the same thread.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn SlangGetLastError() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(err) => err.as_ptr(),
        None => ptr::null(),
    })
}

/// Clear the last error message for the calling thread
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn SlangClearError() {
    clear_last_error();
}
