//! Ownership of payloads returned across the boundary
//!
//! A payload is released through the callee that produced it, exactly once:
//! either when its [`OwnedTabStr`] drops, or by whoever takes the pointer
//! back with [`OwnedTabStr::into_raw`].

use std::ffi::CStr;
use std::fmt;
use std::mem;
use std::os::raw::c_char;
use std::ptr::NonNull;

use crate::callee::Callee;
use crate::errcode::ErrCode;
use crate::error::Result;
use crate::layout::{SlangInt8, SlangParseLangResult};

/// A callee-allocated, NUL-terminated payload now owned by the caller
pub struct OwnedTabStr<'c, C: Callee> {
    ptr: NonNull<c_char>,
    callee: &'c C,
}

impl<'c, C: Callee> OwnedTabStr<'c, C> {
    /// Take ownership of `ptr`; returns `None` for null
    ///
    /// # Safety
    /// A non-null `ptr` must be a NUL-terminated payload returned by `callee`
    /// and not owned by anything else.
    pub unsafe fn from_raw(ptr: *mut c_char, callee: &'c C) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr, callee })
    }

    /// Payload bytes, without the terminator
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: the payload is NUL-terminated and alive until we release it
        unsafe { CStr::from_ptr(self.ptr.as_ptr()) }.to_bytes()
    }

    /// Payload as UTF-8
    pub fn to_str(&self) -> Result<&str> {
        Ok(std::str::from_utf8(self.as_bytes())?)
    }

    /// Give up ownership without releasing
    ///
    /// The returned pointer must still be released through the callee.
    pub fn into_raw(self) -> *mut c_char {
        let ptr = self.ptr.as_ptr();
        mem::forget(self);
        ptr
    }
}

impl<C: Callee> Drop for OwnedTabStr<'_, C> {
    fn drop(&mut self) {
        tracing::trace!(payload = ?self.ptr, "releasing payload");
        // SAFETY: we own the payload and forget ourselves in `into_raw`, so
        // this runs at most once per pointer
        unsafe { self.callee.release(self.ptr.as_ptr()) }
    }
}

impl<C: Callee> fmt::Debug for OwnedTabStr<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedTabStr")
            .field("ptr", &self.ptr)
            .field("bytes", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

/// A `SlangParseLangResult` whose payload has been taken over by the caller
#[derive(Debug)]
pub struct ParseOutcome<'c, C: Callee> {
    code: SlangInt8,
    payload: Option<OwnedTabStr<'c, C>>,
}

impl<'c, C: Callee> ParseOutcome<'c, C> {
    /// Take ownership of a raw result
    ///
    /// # Safety
    /// `result` must have just been returned by `callee` and its payload must
    /// not be owned by anything else.
    pub unsafe fn from_raw(result: SlangParseLangResult, callee: &'c C) -> Self {
        Self {
            code: result.errcode,
            payload: OwnedTabStr::from_raw(result.tabstr, callee),
        }
    }

    /// Raw status code as reported by the callee
    pub fn code(&self) -> SlangInt8 {
        self.code
    }

    /// Status code, when it belongs to the known set
    pub fn err_code(&self) -> Option<ErrCode> {
        ErrCode::from_raw(self.code)
    }

    /// The owned payload, if the callee returned one
    pub fn payload(&self) -> Option<&OwnedTabStr<'c, C>> {
        self.payload.as_ref()
    }

    /// Payload bytes; a missing payload reads as empty
    pub fn payload_bytes(&self) -> &[u8] {
        match &self.payload {
            Some(payload) => payload.as_bytes(),
            None => &[],
        }
    }

    /// Split into code and payload
    pub fn into_parts(self) -> (SlangInt8, Option<OwnedTabStr<'c, C>>) {
        (self.code, self.payload)
    }
}
