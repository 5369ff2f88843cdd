//! Command-line overrides for formatter options
//!
//! [`FormatterArgs`] is the formatter's argument grammar. Hosts hand the
//! explicitly-set values to the resolver as a [`CliOverlay`].

use std::ffi::OsString;

use clap::{Args, Parser};
use tracing::debug;

use crate::config::{EndOfLine, OptionValue, Options, WrapMode};

/// Formatter command-line arguments
#[derive(Debug, Clone, Default, Args)]
pub struct FormatterArgs {
    /// Markdown files or directories ('-' reads from stdin)
    pub paths: Vec<String>,

    /// Do not apply changes to files
    #[arg(long)]
    pub check: bool,

    /// Apply consecutive numbering to ordered lists
    #[arg(long)]
    pub number: bool,

    /// Paragraph word wrap mode
    #[arg(long, value_name = "{keep,no,INTEGER}")]
    pub wrap: Option<WrapMode>,

    /// Output file line ending mode
    #[arg(long, value_name = "{lf,crlf,keep}")]
    pub end_of_line: Option<EndOfLine>,

    /// Exclude files that match the glob pattern (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Require and enable an extension plugin (repeatable)
    #[arg(long, value_name = "EXTENSION")]
    pub extensions: Vec<String>,

    /// Require and enable a code formatter plugin (repeatable)
    #[arg(long, value_name = "LANGUAGE")]
    pub codeformatters: Vec<String>,

    /// Do not validate that the rendered HTML is consistent
    #[arg(long)]
    pub no_validate: bool,
}

/// Grammar used when re-parsing a raw argv
#[derive(Parser)]
#[command(name = "mdformat")]
struct FormatterCommand {
    #[command(flatten)]
    args: FormatterArgs,
}

/// Option values set explicitly on the command line.
///
/// Keys left at their unset sentinel are absent, so merging an overlay never
/// clobbers a file value the user did not override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverlay {
    options: Options,
}

impl CliOverlay {
    /// Collect the explicitly-set options of pre-parsed arguments.
    ///
    /// `paths` and `check` drive the run, not the formatting, and are left out.
    pub fn from_args(args: &FormatterArgs) -> Self {
        let mut overlay = Self::default();
        if args.number {
            overlay = overlay.with_number(true);
        }
        if let Some(wrap) = args.wrap {
            overlay = overlay.with_wrap(wrap);
        }
        if let Some(eol) = args.end_of_line {
            overlay = overlay.with_end_of_line(eol);
        }
        if !args.exclude.is_empty() {
            overlay = overlay.with_list("exclude", args.exclude.clone());
        }
        if !args.extensions.is_empty() {
            overlay = overlay.with_list("extensions", args.extensions.clone());
        }
        if !args.codeformatters.is_empty() {
            overlay = overlay.with_list("codeformatters", args.codeformatters.clone());
        }
        if args.no_validate {
            overlay = overlay.with_validate(false);
        }
        overlay
    }

    /// Re-parse a raw argv against the formatter grammar.
    ///
    /// This is a heuristic: when the argv carries anything the grammar does
    /// not recognize, the invocation is assumed to belong to some other
    /// program and the overlay is empty.
    pub fn parse_from<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match FormatterCommand::try_parse_from(argv) {
            Ok(command) => Self::from_args(&command.args),
            Err(e) => {
                debug!(kind = ?e.kind(), "argv does not match formatter grammar, ignoring it");
                Self::default()
            }
        }
    }

    pub fn with_number(self, number: bool) -> Self {
        self.with_value("number", number.into())
    }

    pub fn with_wrap(self, wrap: WrapMode) -> Self {
        self.with_value("wrap", wrap.into())
    }

    pub fn with_end_of_line(self, eol: EndOfLine) -> Self {
        self.with_value("end_of_line", eol.into())
    }

    pub fn with_validate(self, validate: bool) -> Self {
        self.with_value("validate", validate.into())
    }

    pub fn with_list(self, key: &str, items: Vec<String>) -> Self {
        self.with_value(key, OptionValue::List(items))
    }

    fn with_value(mut self, key: &str, value: OptionValue) -> Self {
        self.options.insert(key.to_string(), value);
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
