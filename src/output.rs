use crate::colors::Colors;
use crate::config::{ConfigError, FormatOptions, OptionValue, Options};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Normal,
    Quiet,
    Json,
}

pub struct OutputContext {
    pub mode: OutputMode,
    pub colors: Colors,
}

impl OutputContext {
    pub fn new(mode: OutputMode, use_colors: bool) -> Self {
        Self {
            mode,
            colors: Colors::new(use_colors),
        }
    }
}

/// Effective options for one document
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    /// Config file the options came from, `None` for defaults only
    pub config: Option<PathBuf>,
    pub options: Options,
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub files_resolved: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

pub fn print_report(report: &FileReport, ctx: &OutputContext) {
    match ctx.mode {
        OutputMode::Quiet => {
            let config = report
                .config
                .as_ref()
                .map_or_else(|| "-".to_string(), |p| p.display().to_string());
            println!("{}\t{}", report.file.display(), config);
        }
        OutputMode::Normal => print_options(report, ctx),
        // Collected and printed once by print_json
        OutputMode::Json => {}
    }
}

fn print_options(report: &FileReport, ctx: &OutputContext) {
    println!(
        "{}{}{}",
        ctx.colors.info,
        report.file.display(),
        ctx.colors.reset()
    );
    match &report.config {
        Some(path) => println!("  config: {}", path.display()),
        None => println!("  config: (defaults)"),
    }

    let typed = FormatOptions::from_options(&report.options);
    println!("  wrap = {}", typed.wrap);
    println!("  number = {}", typed.number);
    println!("  end_of_line = {}", typed.end_of_line);
    println!("  validate = {}", typed.validate);
    println!("  exclude = {}", OptionValue::List(typed.exclude));
    println!("  extensions = {}", plugin_list(typed.extensions));
    println!("  codeformatters = {}", plugin_list(typed.codeformatters));
    for (name, options) in &typed.plugin {
        println!("  plugin.{name} = {options}");
    }
}

fn plugin_list(items: Option<Vec<String>>) -> String {
    items.map_or_else(
        || "(all installed)".to_string(),
        |items| OptionValue::List(items).to_string(),
    )
}

pub fn print_error(path: &Path, error: &ConfigError, ctx: &OutputContext) {
    eprintln!(
        "{}Error:{} {}: {}",
        ctx.colors.error,
        ctx.colors.reset(),
        path.display(),
        error
    );
}

pub fn print_json(reports: &[FileReport]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(reports).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

pub fn print_summary(result: &RunResult, ctx: &OutputContext) {
    if ctx.mode != OutputMode::Normal {
        return;
    }

    println!();
    let mut parts = vec![format!(
        "{}{} files resolved{}",
        ctx.colors.success,
        result.files_resolved,
        ctx.colors.reset()
    )];
    if result.warnings > 0 {
        parts.push(format!(
            "{}{} warnings{}",
            ctx.colors.warning,
            result.warnings,
            ctx.colors.reset()
        ));
    }
    if result.errors > 0 {
        parts.push(format!(
            "{}{} errors{}",
            ctx.colors.error,
            result.errors,
            ctx.colors.reset()
        ));
    }
    println!("{}", parts.join(", "));
}
