//! The `slang-demo` harness
//!
//! One argument in, one call across the boundary, two lines out:
//!
//! ```text
//! SlangParseLang('<code>'): code = <errcode>
//! <tabstr>
//! ```
//!
//! The exit status is 0 whatever the callee reports; the code is printed,
//! never interpreted.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::io::Write;

use slang_abi::{Callee, StringView};

use crate::error::Result;
use crate::logging::timing::Timer;

/// Run the harness against `callee`, writing to `out`
///
/// With no `lang_code` only the usage line is written and the callee is
/// never touched. The payload, if any, is released before this returns.
pub fn run<C, W>(program: &OsStr, lang_code: Option<&OsStr>, callee: &C, out: &mut W) -> Result<()>
where
    C: Callee,
    W: Write,
{
    let Some(lang_code) = lang_code else {
        tracing::debug!("no language code given");
        write_usage(program, out)?;
        return Ok(());
    };

    let code_bytes = os_bytes(lang_code);
    let view = StringView::new(&code_bytes);
    tracing::info!(len = view.len(), "calling SlangParseLang");

    let outcome = {
        let _timer = Timer::new("SlangParseLang");
        callee.invoke(view)
    };

    out.write_all(b"SlangParseLang('")?;
    out.write_all(&code_bytes)?;
    writeln!(out, "'): code = {}", outcome.code())?;
    out.write_all(outcome.payload_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;

    Ok(())
}

/// `Usage: <program> <lang-code>`
pub fn write_usage<W: Write>(program: &OsStr, out: &mut W) -> Result<()> {
    out.write_all(b"Usage: ")?;
    out.write_all(&os_bytes(program))?;
    out.write_all(b" <lang-code>\n")?;
    out.flush()?;
    Ok(())
}

/// Raw bytes of an OS string, as the C harness would see them
pub(crate) fn os_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Cow::Borrowed(s.as_bytes())
    }
    #[cfg(not(unix))]
    {
        match s.to_string_lossy() {
            Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
            Cow::Owned(text) => Cow::Owned(text.into_bytes()),
        }
    }
}
