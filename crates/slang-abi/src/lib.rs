//! Slang ABI - the binary contract between the language-code parser and its callers
//!
//! This crate defines the `#[repr(C)]` shapes exchanged across the
//! `SlangParseLang` boundary and the safe wrappers both sides use to
//! build and consume them.
//!
//! # Ownership
//!
//! - A [`StringView`] borrows caller-owned bytes for the duration of one call.
//!   Nothing crosses with it.
//! - A non-null `tabstr` in a [`SlangParseLangResult`] is owned by the caller
//!   once the call returns. It must go back through the callee's release entry
//!   point exactly once; [`OwnedTabStr`] does that on drop.
//!
//! # Layout
//!
//! Field order and sizes are frozen under [`ABI_VERSION`]. See
//! [`LayoutDescriptor`] for the runtime description of the layout.

#![warn(missing_docs)]

mod callee;
mod errcode;
mod error;
mod layout;
mod owned;
mod record;
mod view;

pub use callee::Callee;
pub use errcode::{hex_code, ErrCode};
pub use error::{AbiError, Result};
pub use layout::{
    LayoutDescriptor, SlangInt8, SlangLayout, SlangParseLangResult, SlangString, ABI_VERSION,
};
pub use owned::{OwnedTabStr, ParseOutcome};
pub use record::{LangRecord, RECORD_FIELDS};
pub use view::StringView;
