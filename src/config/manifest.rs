//! `[tool.mdformat]` extraction from `pyproject.toml`

use std::path::Path;

use toml::Value;

use super::error::{ConfigError, Result};
use super::file::read_toml_table;
use super::options::{options_from_table, OptionValidator, Options};

/// Extract and validate the formatter options from a `pyproject.toml` file.
///
/// Returns `Ok(None)` when the document has no `[tool.mdformat]` section.
/// An unreadable file or malformed TOML is an error, never an empty result.
pub fn parse_pyproject(path: &Path, validator: &dyn OptionValidator) -> Result<Option<Options>> {
    let document = read_toml_table(path)?;

    let section = match document.get("tool").and_then(|tool| tool.get("mdformat")) {
        None => return Ok(None),
        Some(Value::Table(section)) => section,
        Some(_) => {
            return Err(ConfigError::InvalidValue {
                key: "tool.mdformat".to_string(),
                path: path.to_path_buf(),
            })
        }
    };

    options_from_table(section, path, validator).map(Some)
}
