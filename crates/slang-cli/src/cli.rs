//! Command-line argument definitions
//!
//! `slang-inspect` uses clap's derive API. `slang-demo` reads `argv` by
//! position instead: the first argument is the language code whatever it
//! looks like (including `--`), and anything after it is ignored.

use clap::{ArgAction, Parser};
use std::ffi::OsString;

/// Arguments of `slang-demo`, taken by position from `argv`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoCli {
    /// `argv[0]`, used in the usage line
    pub program: Option<OsString>,

    /// `argv[1]`, handed to SlangParseLang byte for byte
    pub lang_code: Option<OsString>,

    /// Extra arguments, ignored
    pub ignored: Vec<OsString>,
}

impl DemoCli {
    /// Split `args` (including the program name) by position
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next();
        let lang_code = args.next();
        Self {
            program,
            lang_code,
            ignored: args.collect(),
        }
    }
}

/// Look up a language code and print the decoded record as JSON
#[derive(Parser, Debug)]
#[command(name = "slang-inspect", version, about, long_about = None)]
pub struct InspectCli {
    /// Enable verbose logging on stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Pretty-print the JSON record
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored error output
    #[arg(long)]
    pub no_color: bool,

    /// Register a record (eight tab-separated fields) before the lookup
    #[arg(long = "add", value_name = "TABSTR")]
    pub add: Vec<String>,

    /// Language code to look up
    #[arg(value_name = "LANG")]
    pub lang_code: Option<String>,
}

impl InspectCli {
    /// Check if colors should be used on stderr
    pub fn use_color(&self) -> bool {
        use is_terminal::IsTerminal;
        !self.no_color && std::io::stderr().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_demo_takes_first_argument_verbatim() {
        let cli = DemoCli::from_args(["slang-demo", "-x", "extra", "more"]);
        assert_eq!(cli.program.as_deref(), Some(OsStr::new("slang-demo")));
        assert_eq!(cli.lang_code.as_deref(), Some(OsStr::new("-x")));
        assert_eq!(cli.ignored.len(), 2);
    }

    #[test]
    fn test_demo_double_dash_is_the_code() {
        let cli = DemoCli::from_args(["slang-demo", "--"]);
        assert_eq!(cli.lang_code.as_deref(), Some(OsStr::new("--")));
        assert!(cli.ignored.is_empty());

        let cli = DemoCli::from_args(["slang-demo", "--", "en"]);
        assert_eq!(cli.lang_code.as_deref(), Some(OsStr::new("--")));
        assert_eq!(cli.ignored, vec![OsString::from("en")]);

        let cli = DemoCli::from_args(["slang-demo", "--help"]);
        assert_eq!(cli.lang_code.as_deref(), Some(OsStr::new("--help")));
    }

    #[test]
    fn test_demo_accepts_empty_and_missing_code() {
        let cli = DemoCli::from_args(["slang-demo", ""]);
        assert_eq!(cli.lang_code.as_deref(), Some(OsStr::new("")));

        let cli = DemoCli::from_args(["slang-demo"]);
        assert!(cli.lang_code.is_none());

        let cli = DemoCli::from_args(Vec::<OsString>::new());
        assert_eq!(cli, DemoCli::default());
    }

    #[test]
    fn test_inspect_parsing() {
        let cli = InspectCli::parse_from([
            "slang-inspect",
            "-vv",
            "--pretty",
            "--add",
            "a\tb\t0x0001\tc\td\te\tf\tg",
            "en",
        ]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.pretty);
        assert_eq!(cli.add.len(), 1);
        assert_eq!(cli.lang_code.as_deref(), Some("en"));
    }
}
