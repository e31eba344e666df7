//! FFI API function definitions
//!
//! These `extern "C"` functions form the public surface of the library.
//! Names follow the published `slang.h` header rather than Rust casing.

#![allow(non_snake_case)]

use slang_abi::{
    ErrCode, LangRecord, SlangInt8, SlangLayout, SlangParseLangResult, SlangString, ABI_VERSION,
};

use crate::error::{map_resolve_error, ResolveError};
use crate::memory::{allocate_string, borrow_view, clear_last_error, set_last_error};
use crate::registry::{resolve_global, with_global_mut};

/// Parse a language code
///
/// # Parameters
/// - `langCode`: borrowed view over the code; not NUL-terminated, and only
///   read for the duration of the call
///
/// # Returns
/// `errcode` is one of `0x00` (success), `0x01` (database failure),
/// `0x02` (no such language) or `0x03` (invalid view). `tabstr` is always a
/// fresh NUL-terminated string: the tab-separated record on success, empty
/// otherwise.
///
/// # Safety
/// - `langCode.p` must point at `langCode.n` readable bytes (or be null with
///   `n == 0`)
/// - A non-null `tabstr` must be freed exactly once with `SlangFreeString`
#[no_mangle]
pub unsafe extern "C" fn SlangParseLang(langCode: SlangString) -> SlangParseLangResult {
    ffi_boundary!(failed, {
        clear_last_error();

        let view = borrow_view(langCode)?;
        let code = match view.to_str() {
            Ok(code) => code,
            Err(e) => {
                set_last_error(format!("Language code is not UTF-8: {}", e));
                return Ok(failed(ErrCode::NoSuchLang));
            }
        };

        match parse_lang(code) {
            Ok(record) => Ok(respond(ErrCode::Success, &record.to_tabstr())),
            Err(e) => Ok(failed(map_resolve_error(&e))),
        }
    })
}

/// Register a custom language record
///
/// # Parameters
/// - `tabstr`: the record in payload form (eight tab-separated fields)
///
/// # Returns
/// `0x00` on success, `0x03` if the record is malformed, `0x01` if the
/// registry is unavailable.
///
/// # Safety
/// `tabstr.p` must point at `tabstr.n` readable bytes (or be null with `n == 0`)
#[no_mangle]
pub unsafe extern "C" fn SlangAddCustom(tabstr: SlangString) -> SlangInt8 {
    ffi_boundary!(SlangInt8::from, {
        clear_last_error();

        let view = borrow_view(tabstr)?;
        let record = view
            .to_str()
            .and_then(LangRecord::from_tabstr)
            .map_err(|e| {
                set_last_error(format!("Invalid record: {}", e));
                ErrCode::InvalidArgument
            })?;

        add_custom(record).map_err(|e| {
            set_last_error(e.to_string());
            match e {
                AddError::Invalid(_) => ErrCode::InvalidArgument,
                AddError::Registry(_) => ErrCode::Parse,
            }
        })?;
        Ok(ErrCode::Success.as_raw())
    })
}

/// Remove every custom language record
#[no_mangle]
pub extern "C" fn SlangClearCustom() {
    clear_last_error();
    if let Err(e) = with_global_mut(|registry| registry.clear()) {
        set_last_error(e.to_string());
    }
}

/// Layout version the library was built with
#[no_mangle]
pub extern "C" fn SlangAbiVersion() -> u32 {
    ABI_VERSION
}

/// Full layout descriptor the library was built with
#[no_mangle]
pub extern "C" fn SlangAbiLayout() -> SlangLayout {
    SlangLayout::current()
}

/// Get version information
///
/// # Safety
/// The returned string is static and must NOT be freed
#[no_mangle]
pub unsafe extern "C" fn SlangVersion() -> *const std::os::raw::c_char {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"), "\0").as_ptr()
        as *const std::os::raw::c_char
}

/// Resolve a language code from Rust without crossing the C ABI
pub fn parse_lang(code: &str) -> Result<LangRecord, ResolveError> {
    let resolved = resolve_global(code);
    match &resolved {
        Ok(record) => tracing::debug!(code, bcp47 = %record.bcp47, "language resolved"),
        Err(e) => tracing::debug!(code, error = %e, "language not resolved"),
    }
    resolved
}

/// Why a custom record was refused
#[derive(Debug, thiserror::Error)]
pub enum AddError {
    /// The record cannot travel in a payload
    #[error("invalid record: {0}")]
    Invalid(#[from] slang_abi::AbiError),

    /// The registry could not be updated
    #[error(transparent)]
    Registry(#[from] ResolveError),
}

/// Register a custom language record from Rust
pub fn add_custom(record: LangRecord) -> Result<(), AddError> {
    with_global_mut(|registry| registry.add(record))??;
    Ok(())
}

fn respond(code: ErrCode, payload: &str) -> SlangParseLangResult {
    SlangParseLangResult {
        errcode: code.as_raw(),
        tabstr: allocate_string(payload),
    }
}

fn failed(code: ErrCode) -> SlangParseLangResult {
    respond(code, "")
}
