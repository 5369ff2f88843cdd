//! Config file discovery and loading

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use toml::Table;

use super::error::{ConfigError, Result};
use super::options::{options_from_table, OptionValidator, Options};

/// File name of the formatter's own config file
pub const MDFORMAT_TOML: &str = ".mdformat.toml";

/// File name of the project manifest
pub const PYPROJECT_TOML: &str = "pyproject.toml";

/// Directory a search starting at `path` begins in.
///
/// Files resolve to their parent; anything else, including paths that do
/// not exist, is taken as a directory. Relative paths are anchored at the
/// current directory so the search can climb above it.
pub fn search_dir(path: &Path) -> PathBuf {
    let dir = if path.is_file() {
        path.parent().unwrap_or(path)
    } else {
        path
    };
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(dir),
        Err(_) => dir.to_path_buf(),
    }
}

/// Search upward from `start` for a regular file with the given name.
///
/// Every ancestor is checked, the starting directory first, up to the
/// filesystem root. Returns `None` if the file is not found.
pub fn find_file_upward(start: &Path, filename: &str) -> Option<PathBuf> {
    search_dir(start)
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
}

/// Find the `pyproject.toml` that applies to `start`.
pub fn find_pyproject_toml(start: &Path) -> Option<PathBuf> {
    find_file_upward(start, PYPROJECT_TOML)
}

/// Find the `.mdformat.toml` that applies to `start`.
pub fn find_mdformat_toml(start: &Path) -> Option<PathBuf> {
    find_file_upward(start, MDFORMAT_TOML)
}

/// Read and parse a TOML document, attaching `path` to any error.
pub(crate) fn read_toml_table(path: &Path) -> Result<Table> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate `.mdformat.toml` from the given path.
///
/// The whole document is the options table; an empty file yields empty
/// options.
pub fn load_mdformat_toml(path: &Path, validator: &dyn OptionValidator) -> Result<Options> {
    let table = read_toml_table(path)?;
    options_from_table(&table, path, validator)
}
