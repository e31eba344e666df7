//! Borrowed string views

use std::marker::PhantomData;
use std::os::raw::c_char;
use std::slice;

use crate::error::{AbiError, Result};
use crate::layout::SlangString;

/// A [`SlangString`] tied to the lifetime of the bytes it borrows
///
/// Has the same layout as the raw view, so it can be handed across the
/// boundary with [`StringView::into_raw`] without copying.
#[repr(transparent)]
#[derive(Debug, Clone, Copy)]
pub struct StringView<'a> {
    raw: SlangString,
    _bytes: PhantomData<&'a [u8]>,
}

impl<'a> StringView<'a> {
    /// View `bytes` without copying; the length is preserved exactly
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            raw: SlangString {
                p: bytes.as_ptr() as *const c_char,
                // slice lengths never exceed isize::MAX
                n: bytes.len() as isize,
            },
            _bytes: PhantomData,
        }
    }

    /// View the UTF-8 bytes of `s`
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }

    /// Validate a raw view received across the boundary
    ///
    /// # Safety
    /// When `raw.n > 0`, `raw.p` must point at `raw.n` readable bytes that
    /// stay valid and unmodified for `'a`.
    pub unsafe fn from_raw(raw: SlangString) -> Result<Self> {
        if raw.n < 0 {
            return Err(AbiError::NegativeLength { len: raw.n });
        }
        if raw.p.is_null() && raw.n != 0 {
            return Err(AbiError::NullPointer { len: raw.n });
        }
        Ok(Self {
            raw,
            _bytes: PhantomData,
        })
    }

    /// The viewed bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        if self.raw.n == 0 {
            return &[];
        }
        // SAFETY: non-empty views are only built from a live slice or from a
        // raw view whose validity the caller of `from_raw` vouched for
        unsafe { slice::from_raw_parts(self.raw.p as *const u8, self.raw.n as usize) }
    }

    /// The viewed bytes as UTF-8
    pub fn to_str(&self) -> Result<&'a str> {
        Ok(std::str::from_utf8(self.as_bytes())?)
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.raw.n as usize
    }

    /// Check if the view covers no bytes
    pub fn is_empty(&self) -> bool {
        self.raw.n == 0
    }

    /// The raw view to pass across the boundary
    pub fn into_raw(self) -> SlangString {
        self.raw
    }
}

impl<'a> From<&'a [u8]> for StringView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for StringView<'a> {
    fn from(s: &'a str) -> Self {
        Self::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::ptr;

    #[test]
    fn test_view_does_not_copy() {
        let code = b"en-US";
        let view = StringView::new(code);
        let raw = view.into_raw();

        assert_eq!(raw.p as *const u8, code.as_ptr());
        assert_eq!(raw.n, 5);
    }

    #[test]
    fn test_empty_view() {
        let view = StringView::from_str("");
        assert!(view.is_empty());
        assert_eq!(view.as_bytes(), b"");

        let raw = unsafe { StringView::from_raw(SlangString::empty()) }.unwrap();
        assert_eq!(raw.len(), 0);
        assert_eq!(raw.as_bytes(), b"");
    }

    #[test]
    fn test_embedded_nul_is_counted() {
        let view = StringView::new(b"zh\0CN");
        assert_eq!(view.len(), 5);
        assert_eq!(view.as_bytes(), b"zh\0CN");
    }

    #[test]
    fn test_from_raw_rejects_broken_views() {
        let negative = SlangString { p: ptr::null(), n: -3 };
        assert_eq!(
            unsafe { StringView::from_raw(negative) }.unwrap_err(),
            AbiError::NegativeLength { len: -3 }
        );

        let dangling = SlangString { p: ptr::null(), n: 2 };
        assert_eq!(
            unsafe { StringView::from_raw(dangling) }.unwrap_err(),
            AbiError::NullPointer { len: 2 }
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let view = StringView::new(&[b'e', 0xFF]);
        assert_eq!(
            view.to_str().unwrap_err(),
            AbiError::InvalidUtf8 { valid_up_to: 1 }
        );
    }

    proptest! {
        #[test]
        fn prop_length_is_preserved(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let view = StringView::new(&bytes);
            prop_assert_eq!(view.len(), bytes.len());
            prop_assert_eq!(view.into_raw().n as usize, bytes.len());
            prop_assert_eq!(view.as_bytes(), &bytes[..]);
        }

        #[test]
        fn prop_raw_round_trip_keeps_bytes(s in ".*") {
            let raw = StringView::from_str(&s).into_raw();
            let back = unsafe { StringView::from_raw(raw) }.unwrap();
            prop_assert_eq!(back.to_str().unwrap(), s.as_str());
        }
    }
}
