//! Integration point called by the formatter once per document

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::CliOverlay;
use crate::config::{overlay_options, ConfigError, ConfigSource, Options, Result};

/// Options container the formatter keeps for one document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatRequest {
    /// Document being formatted; `None` or `-` means stdin
    pub filename: Option<PathBuf>,
    pub options: Options,
}

impl FormatRequest {
    pub fn new(filename: impl Into<PathBuf>, options: Options) -> Self {
        Self {
            filename: Some(filename.into()),
            options,
        }
    }

    /// Request for a document read from stdin
    pub fn stdin(options: Options) -> Self {
        Self {
            filename: None,
            options,
        }
    }

    /// Where the config search starts: the document's path, or the current
    /// directory for stdin.
    pub fn search_path(&self) -> Result<PathBuf> {
        match self.filename.as_deref() {
            Some(path) if path != Path::new("-") => Ok(path.to_path_buf()),
            _ => env::current_dir().map_err(|source| ConfigError::Io {
                path: PathBuf::from("."),
                source,
            }),
        }
    }
}

/// Update `request.options` in place with the file options that apply to
/// its document, overridden by the command line.
///
/// When no file options apply the request is left untouched.
pub fn update_options(
    source: &mut dyn ConfigSource,
    request: &mut FormatRequest,
    cli: &CliOverlay,
) -> Result<()> {
    let search_path = request.search_path()?;
    let resolution = source.resolve(&search_path)?;

    if resolution.options.is_empty() {
        debug!(search_path = %search_path.display(), "no file options, leaving request untouched");
        return Ok(());
    }

    overlay_options(&mut request.options, &[&resolution.options, cli.options()]);
    Ok(())
}
