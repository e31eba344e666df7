//! Slang CLI - harnesses that call `SlangParseLang` across the C ABI
//!
//! - `slang-demo` prints the raw `(errcode, tabstr)` pair and always exits 0
//! - `slang-inspect` decodes the payload and prints it as JSON

pub mod callee;
pub mod cli;
pub mod demo;
pub mod error;
pub mod inspect;
pub mod logging;

pub use callee::LinkedCallee;
pub use error::{Error, Result};
