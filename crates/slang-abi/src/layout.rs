//! FFI-safe type definitions
//!
//! Every type here crosses the C ABI by value. Field order and sizes are part
//! of the external contract and are frozen under [`ABI_VERSION`].

use std::mem::{align_of, offset_of, size_of};
use std::os::raw::c_char;
use std::ptr;

use crate::error::{AbiError, Result};

/// Version of the frozen layout. Bump on any field change.
pub const ABI_VERSION: u32 = 1;

/// Byte-sized signed status code (`signed char` on the C side)
pub type SlangInt8 = i8;

/// Borrowed view over a byte sequence: `{ const char *p; ptrdiff_t n; }`
///
/// `n` counts bytes, not characters, and the bytes are not NUL-terminated.
/// The view never owns what it points at.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SlangString {
    /// First byte of the view; may be null only when `n == 0`
    pub p: *const c_char,
    /// Length in bytes
    pub n: isize,
}

/// Tagged result of `SlangParseLang`: `{ signed char errcode; char *tabstr; }`
///
/// A non-null `tabstr` belongs to the caller once the call returns and must be
/// released through the callee's release entry point exactly once.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SlangParseLangResult {
    /// Status code, see [`crate::ErrCode`]
    pub errcode: SlangInt8,
    /// Callee-allocated NUL-terminated payload, or null
    pub tabstr: *mut c_char,
}

impl SlangString {
    /// The empty view
    pub const fn empty() -> Self {
        Self {
            p: ptr::null(),
            n: 0,
        }
    }
}

impl SlangParseLangResult {
    /// A result carrying no payload
    pub const fn without_payload(errcode: SlangInt8) -> Self {
        Self {
            errcode,
            tabstr: ptr::null_mut(),
        }
    }
}

const PTR: usize = size_of::<*const c_char>();

const _: () = assert!(size_of::<isize>() == PTR);
const _: () = assert!(size_of::<SlangString>() == 2 * PTR);
const _: () = assert!(align_of::<SlangString>() == align_of::<*const c_char>());
const _: () = assert!(offset_of!(SlangString, p) == 0);
const _: () = assert!(offset_of!(SlangString, n) == PTR);
const _: () = assert!(size_of::<SlangInt8>() == 1);
const _: () = assert!(size_of::<SlangParseLangResult>() == 2 * PTR);
const _: () = assert!(offset_of!(SlangParseLangResult, errcode) == 0);
const _: () = assert!(offset_of!(SlangParseLangResult, tabstr) == align_of::<*mut c_char>());

/// Runtime description of the frozen layout
///
/// Exported by the callee so a foreign caller built from a different header
/// can check it agrees before exchanging data.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlangLayout {
    /// [`ABI_VERSION`] of the side that produced this descriptor
    pub version: u32,
    /// `sizeof(SlangString)`
    pub string_size: u32,
    /// `alignof(SlangString)`
    pub string_align: u32,
    /// `offsetof(SlangString, n)`
    pub string_len_offset: u32,
    /// `sizeof(SlangParseLangResult)`
    pub result_size: u32,
    /// `alignof(SlangParseLangResult)`
    pub result_align: u32,
    /// `offsetof(SlangParseLangResult, tabstr)`
    pub result_payload_offset: u32,
}

/// Name used by the Rust API for [`SlangLayout`]
pub type LayoutDescriptor = SlangLayout;

impl SlangLayout {
    /// Describe the layout this crate was compiled with
    pub const fn current() -> Self {
        Self {
            version: ABI_VERSION,
            string_size: size_of::<SlangString>() as u32,
            string_align: align_of::<SlangString>() as u32,
            string_len_offset: offset_of!(SlangString, n) as u32,
            result_size: size_of::<SlangParseLangResult>() as u32,
            result_align: align_of::<SlangParseLangResult>() as u32,
            result_payload_offset: offset_of!(SlangParseLangResult, tabstr) as u32,
        }
    }

    /// Fail on the first field where `other` disagrees with `self`
    pub fn ensure_compatible(&self, other: &SlangLayout) -> Result<()> {
        let fields = [
            ("version", self.version, other.version),
            ("string_size", self.string_size, other.string_size),
            ("string_align", self.string_align, other.string_align),
            ("string_len_offset", self.string_len_offset, other.string_len_offset),
            ("result_size", self.result_size, other.result_size),
            ("result_align", self.result_align, other.result_align),
            (
                "result_payload_offset",
                self.result_payload_offset,
                other.result_payload_offset,
            ),
        ];

        for (field, expected, found) in fields {
            if expected != found {
                return Err(AbiError::LayoutMismatch {
                    field,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}
