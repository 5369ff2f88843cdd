//! Formatter configuration discovery.
//!
//! This module provides:
//! - Finding `.mdformat.toml` and `pyproject.toml` by searching upward
//! - Reading the `[tool.mdformat]` section of `pyproject.toml`
//! - Validating option keys and values
//! - Resolving which file applies, with memoization
//! - Merging command line, config file, and defaults
//! - Template generation with `--init`

mod error;
mod file;
mod format;
mod init;
mod manifest;
mod merge;
mod options;
mod resolver;

pub use error::{ConfigError, Result};
pub use file::{
    find_file_upward, find_mdformat_toml, find_pyproject_toml, load_mdformat_toml, search_dir,
    MDFORMAT_TOML, PYPROJECT_TOML,
};
pub use format::{EndOfLine, FormatOptions, WrapMode};
pub use init::{generate_init_file, generate_init_file_in, MDFORMAT_TOML_TEMPLATE};
pub use manifest::parse_pyproject;
pub use merge::{merge_format_options, overlay_options};
pub use options::{
    default_options, options_from_table, MdformatRules, OptionValidator, OptionValue, Options,
    OPTION_KEYS,
};
pub use resolver::{ConfigResolver, ConfigSource, Resolution, SourceStrategy};
