//! The `slang-inspect` harness
//!
//! Unlike `slang-demo`, this one interprets the result: a non-zero code is
//! printed as `error code: 0x..` and fails the process, a successful payload
//! is decoded into a record and printed as JSON.

use std::ffi::OsStr;
use std::io::Write;

use slang_abi::{hex_code, Callee, ErrCode, LangRecord, StringView};

use crate::callee::LinkedCallee;
use crate::cli::InspectCli;
use crate::demo::os_bytes;
use crate::error::{Error, Result};

/// Run the harness against the linked library
pub fn execute<W: Write>(cli: &InspectCli, program: &OsStr, out: &mut W) -> Result<()> {
    let Some(lang_code) = cli.lang_code.as_deref() else {
        out.write_all(b"Usage: ")?;
        out.write_all(&os_bytes(program))?;
        out.write_all(b" <lang>\n")?;
        return Err(Error::Usage);
    };

    let callee = LinkedCallee::new();
    callee.check_layout()?;
    for tabstr in &cli.add {
        callee.register(tabstr)?;
    }

    lookup(lang_code, cli.pretty, &callee, out)?;
    Ok(())
}

/// Resolve one code through `callee` and print the decoded record
pub fn lookup<C, W>(lang_code: &str, pretty: bool, callee: &C, out: &mut W) -> Result<LangRecord>
where
    C: Callee,
    W: Write,
{
    let outcome = callee.invoke(StringView::from_str(lang_code));
    let code = outcome.code();
    if !ErrCode::from_raw(code).is_some_and(ErrCode::is_success) {
        tracing::info!(lang_code, code, "lookup failed");
        writeln!(out, "error code: {}", hex_code(code))?;
        return Err(Error::Callee { code });
    }

    let tabstr = match outcome.payload() {
        Some(payload) => payload.to_str()?,
        None => "",
    };
    let record = LangRecord::from_tabstr(tabstr)?;

    if pretty {
        serde_json::to_writer_pretty(&mut *out, &record)?;
    } else {
        serde_json::to_writer(&mut *out, &record)?;
    }
    writeln!(out)?;
    out.flush()?;

    Ok(record)
}
