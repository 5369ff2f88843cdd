//! Typed view over a merged options mapping

use std::fmt;
use std::str::FromStr;

use toml::Table;

use super::options::{default_options, OptionValue, Options};

/// Paragraph wrapping mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Keep line breaks as written
    Keep,
    /// Unwrap paragraphs onto a single line
    No,
    /// Wrap at the given column
    Width(i64),
}

impl FromStr for WrapMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(WrapMode::Keep),
            "no" => Ok(WrapMode::No),
            _ => match s.parse::<i64>() {
                Ok(width) if width > 1 => Ok(WrapMode::Width(width)),
                _ => Err(format!(
                    "invalid wrap mode '{s}': expected 'keep', 'no' or an integer greater than 1"
                )),
            },
        }
    }
}

impl From<WrapMode> for OptionValue {
    fn from(mode: WrapMode) -> Self {
        match mode {
            WrapMode::Keep => OptionValue::from("keep"),
            WrapMode::No => OptionValue::from("no"),
            WrapMode::Width(width) => OptionValue::Integer(width),
        }
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrapMode::Keep => write!(f, "keep"),
            WrapMode::No => write!(f, "no"),
            WrapMode::Width(width) => write!(f, "{width}"),
        }
    }
}

/// Line ending written to formatted files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOfLine {
    Lf,
    Crlf,
    /// Reuse the first line ending found in the source
    Keep,
}

impl FromStr for EndOfLine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lf" => Ok(EndOfLine::Lf),
            "crlf" => Ok(EndOfLine::Crlf),
            "keep" => Ok(EndOfLine::Keep),
            _ => Err(format!(
                "invalid end of line '{s}': expected 'lf', 'crlf' or 'keep'"
            )),
        }
    }
}

impl fmt::Display for EndOfLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EndOfLine::Lf => "lf",
            EndOfLine::Crlf => "crlf",
            EndOfLine::Keep => "keep",
        };
        f.write_str(name)
    }
}

impl From<EndOfLine> for OptionValue {
    fn from(eol: EndOfLine) -> Self {
        OptionValue::String(eol.to_string())
    }
}

/// Effective formatter options
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    pub wrap: WrapMode,
    pub number: bool,
    pub end_of_line: EndOfLine,
    pub validate: bool,
    pub exclude: Vec<String>,
    /// `None` enables every installed extension
    pub extensions: Option<Vec<String>>,
    /// `None` enables every installed code formatter
    pub codeformatters: Option<Vec<String>>,
    pub plugin: Table,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::from_options(&default_options())
    }
}

impl FormatOptions {
    /// Build the typed view from a validated mapping.
    ///
    /// Keys that are missing or carry an unexpected shape fall back to the
    /// built-in default.
    pub fn from_options(options: &Options) -> Self {
        let wrap = match options.get("wrap") {
            Some(OptionValue::Integer(width)) if *width > 1 => WrapMode::Width(*width),
            Some(OptionValue::String(mode)) => mode.parse().unwrap_or(WrapMode::Keep),
            _ => WrapMode::Keep,
        };

        let end_of_line = options
            .get("end_of_line")
            .and_then(OptionValue::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or(EndOfLine::Lf);

        let list = |key: &str| {
            options
                .get(key)
                .and_then(OptionValue::as_list)
                .map(<[String]>::to_vec)
        };

        let plugin = match options.get("plugin") {
            Some(OptionValue::Table(table)) => table.clone(),
            _ => Table::new(),
        };

        Self {
            wrap,
            number: options
                .get("number")
                .and_then(OptionValue::as_bool)
                .unwrap_or(false),
            end_of_line,
            validate: options
                .get("validate")
                .and_then(OptionValue::as_bool)
                .unwrap_or(true),
            exclude: list("exclude").unwrap_or_default(),
            extensions: list("extensions"),
            codeformatters: list("codeformatters"),
            plugin,
        }
    }
}
