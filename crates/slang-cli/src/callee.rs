//! The linked `slang-ffi` library seen through the [`Callee`] seam

use std::ffi::CStr;
use std::os::raw::c_char;

use slang_abi::{Callee, ErrCode, SlangLayout, SlangParseLangResult, StringView};

use crate::error::{Error, Result};

/// Calls the C exports of the `slang-ffi` library linked into this binary
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkedCallee;

impl LinkedCallee {
    /// Handle on the library linked into this binary
    pub fn new() -> Self {
        Self
    }

    /// Fail if the library was built with a different layout
    pub fn check_layout(&self) -> Result<()> {
        let theirs = slang_ffi::SlangAbiLayout();
        SlangLayout::current().ensure_compatible(&theirs)?;
        Ok(())
    }

    /// Register a custom record given in payload form
    pub fn register(&self, tabstr: &str) -> Result<()> {
        let view = StringView::from_str(tabstr);
        // SAFETY: the view borrows `tabstr`, which outlives the call
        let code = unsafe { slang_ffi::SlangAddCustom(view.into_raw()) };
        if ErrCode::from_raw(code).is_some_and(ErrCode::is_success) {
            tracing::debug!(tabstr, "custom record registered");
            return Ok(());
        }

        Err(Error::Register {
            code,
            message: last_error().unwrap_or_default(),
        })
    }
}

impl Callee for LinkedCallee {
    fn parse_lang(&self, view: StringView<'_>) -> SlangParseLangResult {
        // SAFETY: the view borrows live bytes for the whole call and the
        // library does not keep the pointer
        unsafe { slang_ffi::SlangParseLang(view.into_raw()) }
    }

    unsafe fn release(&self, payload: *mut c_char) {
        slang_ffi::SlangFreeString(payload)
    }
}

/// Message left by the last failing call on this thread
fn last_error() -> Option<String> {
    // SAFETY: the pointer is null or a NUL-terminated string the library owns
    // until the next call on this thread; we copy it out immediately
    unsafe {
        let error = slang_ffi::SlangGetLastError();
        if error.is_null() {
            None
        } else {
            Some(CStr::from_ptr(error).to_string_lossy().into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_linked_layout_is_compatible() {
        LinkedCallee::new().check_layout().unwrap();
    }

    #[test]
    #[serial]
    fn test_register_and_invoke() {
        slang_ffi::SlangClearCustom();
        let callee = LinkedCallee::new();
        let tabstr = "Klingon\tStar Trek Universe\t0x0000\tkg-SU\tKLI\tkg\ttlh\ttlh";
        callee.register(tabstr).unwrap();

        let outcome = callee.invoke(StringView::from_str("KLI"));
        assert_eq!(outcome.code(), 0);
        assert_eq!(outcome.payload_bytes(), tabstr.as_bytes());
        drop(outcome);
        slang_ffi::SlangClearCustom();
    }

    #[test]
    #[serial]
    fn test_register_reports_callee_message() {
        let err = LinkedCallee::new().register("not a record").unwrap_err();
        match err {
            Error::Register { code, message } => {
                assert_eq!(code, ErrCode::InvalidArgument.as_raw());
                assert!(message.contains("Invalid record"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
