//! FFI boundary tests
//!
//! These exercise the exported C functions the way a foreign caller would:
//! raw views in, raw results out, every payload freed through the library.

use serial_test::serial;
use slang_abi::{ErrCode, LangRecord, StringView};
use slang_ffi::*;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;

/// Copy a payload out and free it
unsafe fn take_payload(tabstr: *mut c_char) -> String {
    assert!(!tabstr.is_null(), "callee returned a null payload");
    let text = CStr::from_ptr(tabstr).to_string_lossy().into_owned();
    SlangFreeString(tabstr);
    text
}

unsafe fn last_error() -> Option<String> {
    let error = SlangGetLastError();
    if error.is_null() {
        None
    } else {
        Some(CStr::from_ptr(error).to_string_lossy().into_owned())
    }
}

fn view(s: &str) -> SlangString {
    StringView::from_str(s).into_raw()
}

fn klingon() -> LangRecord {
    LangRecord {
        name: "Klingon".into(),
        location: "Star Trek Universe".into(),
        lcid: 0x0000,
        bcp47: "kg-SU".into(),
        win_id: "KLI".into(),
        iso639_1: "kg".into(),
        iso639_2: "tlh".into(),
        iso639_3: "tlh".into(),
    }
}

fn english_us() -> LangRecord {
    LangRecord {
        name: "English".into(),
        location: "United States".into(),
        lcid: 0x0409,
        bcp47: "en-US".into(),
        win_id: "ENU".into(),
        iso639_1: "en".into(),
        iso639_2: "eng".into(),
        iso639_3: "eng".into(),
    }
}

fn register(record: &LangRecord) {
    let tabstr = record.to_tabstr();
    let code = unsafe { SlangAddCustom(view(&tabstr)) };
    assert_eq!(code, ErrCode::Success.as_raw());
}

#[test]
#[serial]
fn test_unknown_code_returns_empty_payload() {
    SlangClearCustom();
    unsafe {
        let result = SlangParseLang(view("en"));
        assert_eq!(result.errcode, ErrCode::NoSuchLang.as_raw());
        assert_eq!(take_payload(result.tabstr), "");
        assert!(last_error().unwrap().contains("en"));
    }
}

#[test]
#[serial]
fn test_registered_record_round_trips_through_payload() {
    SlangClearCustom();
    register(&klingon());

    for code in ["kg-SU", "kg_su", "KLI", "tlh", "kg"] {
        unsafe {
            let result = SlangParseLang(view(code));
            assert_eq!(result.errcode, 0, "lookup of {code}");
            let payload = take_payload(result.tabstr);
            assert_eq!(payload, klingon().to_tabstr());
            assert_eq!(LangRecord::from_tabstr(&payload).unwrap(), klingon());
            assert!(last_error().is_none());
        }
    }
    SlangClearCustom();
}

#[test]
#[serial]
fn test_view_length_is_honoured_without_terminator() {
    SlangClearCustom();
    register(&english_us());

    // only the first five bytes belong to the view
    let buffer = b"en-USxyz";
    let raw = SlangString {
        p: buffer.as_ptr() as *const c_char,
        n: 5,
    };
    unsafe {
        let result = SlangParseLang(raw);
        assert_eq!(result.errcode, 0);
        assert_eq!(take_payload(result.tabstr), english_us().to_tabstr());
    }
    SlangClearCustom();
}

#[test]
#[serial]
fn test_clear_custom_forgets_records() {
    SlangClearCustom();
    register(&klingon());
    SlangClearCustom();

    unsafe {
        let result = SlangParseLang(view("kg-SU"));
        assert_eq!(result.errcode, ErrCode::NoSuchLang.as_raw());
        take_payload(result.tabstr);
    }
}

#[test]
fn test_invalid_views_are_rejected() {
    unsafe {
        let negative = SlangString { p: ptr::null(), n: -4 };
        let result = SlangParseLang(negative);
        assert_eq!(result.errcode, ErrCode::InvalidArgument.as_raw());
        assert_eq!(take_payload(result.tabstr), "");
        assert!(last_error().unwrap().contains("negative"));

        let dangling = SlangString { p: ptr::null(), n: 3 };
        let result = SlangParseLang(dangling);
        assert_eq!(result.errcode, ErrCode::InvalidArgument.as_raw());
        take_payload(result.tabstr);

        SlangClearError();
        assert!(last_error().is_none());
    }
}

#[test]
fn test_empty_view_with_null_pointer_is_valid() {
    unsafe {
        let result = SlangParseLang(SlangString::empty());
        assert_eq!(result.errcode, ErrCode::NoSuchLang.as_raw());
        assert_eq!(take_payload(result.tabstr), "");
    }
}

#[test]
fn test_invalid_utf8_is_no_such_lang() {
    let bytes = [b'e', 0xFF, b'n'];
    unsafe {
        let result = SlangParseLang(StringView::new(&bytes).into_raw());
        assert_eq!(result.errcode, ErrCode::NoSuchLang.as_raw());
        take_payload(result.tabstr);
        assert!(last_error().unwrap().contains("UTF-8"));
    }
}

#[test]
#[serial]
fn test_add_custom_rejects_malformed_records() {
    SlangClearCustom();
    unsafe {
        assert_eq!(
            SlangAddCustom(view("only\tthree\tfields")),
            ErrCode::InvalidArgument.as_raw()
        );
        assert!(last_error().unwrap().contains("Invalid record"));

        let negative = SlangString { p: ptr::null(), n: -1 };
        assert_eq!(SlangAddCustom(negative), ErrCode::InvalidArgument.as_raw());
    }
}

#[test]
fn test_abi_descriptor() {
    assert_eq!(SlangAbiVersion(), slang_abi::ABI_VERSION);
    let layout = SlangAbiLayout();
    assert_eq!(
        layout.string_size as usize,
        std::mem::size_of::<SlangString>()
    );
    assert_eq!(
        layout.result_payload_offset as usize,
        std::mem::size_of::<usize>()
    );
}

#[test]
#[serial]
fn test_concurrent_access() {
    use std::thread;

    SlangClearCustom();
    register(&english_us());

    let threads: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let code = if i % 2 == 0 { "en-US" } else { "zz" };
                unsafe {
                    let result = SlangParseLang(view(code));
                    let payload = take_payload(result.tabstr);
                    if i % 2 == 0 {
                        assert_eq!(result.errcode, 0);
                        assert_eq!(payload, english_us().to_tabstr());
                        assert!(last_error().is_none());
                    } else {
                        assert_eq!(result.errcode, ErrCode::NoSuchLang.as_raw());
                        assert_eq!(payload, "");
                        // thread-local error state
                        assert!(last_error().is_some());
                    }
                }
            })
        })
        .collect();

    for t in threads {
        t.join().unwrap();
    }
    SlangClearCustom();
}
