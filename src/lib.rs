//! Markdown formatter configuration discovery.
//!
//! Options come from the nearest `.mdformat.toml` or from the
//! `[tool.mdformat]` section of the nearest `pyproject.toml`, and the
//! command line overrides both. Formatter hosts plug a [`ConfigSource`]
//! into their configuration phase and call [`update_options`] once per
//! document.

pub mod cli;
pub mod colors;
pub mod config;
pub mod hook;
pub mod logging;
mod output;
pub mod walker;

pub use cli::{CliOverlay, FormatterArgs};
pub use colors::{should_use_colors, Colors};
pub use config::{
    default_options, find_file_upward, find_mdformat_toml, find_pyproject_toml,
    generate_init_file, load_mdformat_toml, merge_format_options, parse_pyproject,
    ConfigError, ConfigResolver, ConfigSource, EndOfLine, FormatOptions, MdformatRules,
    OptionValidator, OptionValue, Options, Resolution, SourceStrategy, WrapMode,
    MDFORMAT_TOML_TEMPLATE,
};
pub use hook::{update_options, FormatRequest};
pub use output::{FileReport, OutputContext, OutputMode, RunResult};
pub use walker::walk_markdown;

use std::io;
use std::path::Path;

/// Main entry point: resolve and print options for every markdown file
/// under the given paths.
///
/// Configuration errors are reported per file and counted; only IO errors
/// from walking abort the run.
pub fn run(
    paths: &[String],
    cli: &CliOverlay,
    strategy: SourceStrategy,
    ctx: &OutputContext,
) -> io::Result<RunResult> {
    let mut resolver = ConfigResolver::new(strategy);
    let mut result = RunResult::default();
    let mut reports = vec![];

    // What the formatter would use with no config file at all
    let base_options = merge_format_options(&default_options(), None, cli);

    for path in walk_markdown(paths) {
        let path = path?;

        match process_file(&mut resolver, &path, &base_options, cli) {
            Ok(report) => {
                result.files_resolved += 1;
                output::print_report(&report, ctx);
                reports.push(report);
            }
            Err(e) => {
                result.errors += 1;
                output::print_error(&path, &e, ctx);
            }
        }
    }

    result.warnings = resolver.warnings().len();

    if ctx.mode == OutputMode::Json {
        output::print_json(&reports)?;
    }
    output::print_summary(&result, ctx);

    Ok(result)
}

fn process_file(
    resolver: &mut ConfigResolver,
    path: &Path,
    base_options: &Options,
    cli: &CliOverlay,
) -> config::Result<FileReport> {
    let mut request = FormatRequest::new(path, base_options.clone());

    // Memoized, so the hook below reuses this lookup
    let config = resolver.resolve(&request.search_path()?)?.path;
    update_options(resolver, &mut request, cli)?;

    Ok(FileReport {
        file: path.to_path_buf(),
        config,
        options: request.options,
    })
}
