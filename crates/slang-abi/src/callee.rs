//! The seam between a caller and whatever implements `SlangParseLang`

use std::os::raw::c_char;

use crate::layout::SlangParseLangResult;
use crate::owned::ParseOutcome;
use crate::view::StringView;

/// Something that answers `SlangParseLang` and takes its payloads back
///
/// Implemented by the linked FFI library in production and by recording
/// mocks in tests.
pub trait Callee {
    /// Run one parse; the view is only borrowed for the duration of the call
    fn parse_lang(&self, view: StringView<'_>) -> SlangParseLangResult;

    /// Release a payload previously returned by [`Callee::parse_lang`]
    ///
    /// # Safety
    /// `payload` must be a non-null `tabstr` returned by this callee that has
    /// not been released yet.
    unsafe fn release(&self, payload: *mut c_char);

    /// Run one parse and take ownership of its payload
    fn invoke(&self, view: StringView<'_>) -> ParseOutcome<'_, Self>
    where
        Self: Sized,
    {
        let result = self.parse_lang(view);
        tracing::debug!(
            errcode = result.errcode,
            has_payload = !result.tabstr.is_null(),
            "SlangParseLang returned"
        );
        // SAFETY: the result came straight from this callee and nothing else
        // has seen its payload
        unsafe { ParseOutcome::from_raw(result, self) }
    }
}
