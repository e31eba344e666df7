//! Slang FFI - the C ABI of the slang language-code parser
//!
//! This crate exports `SlangParseLang` and its companions with the layout
//! described by `slang-abi`, and generates `include/slang.h` at build time.
//!
//! # Safety
//!
//! All FFI functions deal with raw pointers and cross-language boundaries.
//! Callers must ensure:
//! - Views point at readable bytes for their whole declared length
//! - Every returned `tabstr` is freed exactly once with `SlangFreeString`
//! - Strings from `SlangGetLastError` and `SlangVersion` are never freed

#![warn(missing_docs)]

#[macro_use]
mod error;
mod api;
mod memory;
mod registry;

// Re-export public API
pub use api::*;
pub use error::ResolveError;
pub use memory::{SlangClearError, SlangFreeString, SlangGetLastError};
pub use registry::{LangResolver, Registry};
pub use slang_abi::{SlangInt8, SlangLayout, SlangParseLangResult, SlangString};
