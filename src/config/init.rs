//! Template generation for `--init` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::file::MDFORMAT_TOML;

/// Template .mdformat.toml with documentation
pub const MDFORMAT_TOML_TEMPLATE: &str = r#"# .mdformat.toml - Markdown formatter configuration
#
# Options apply to every markdown file in this directory and below.
# A [tool.mdformat] section in pyproject.toml accepts the same keys;
# when both files sit in one directory, this file wins.
#
# Command-line flags override anything set here.

# Paragraph wrapping: "keep", "no", or a column number greater than 1.
# Default: "keep"
wrap = "keep"

# Number ordered lists consecutively instead of repeating "1.".
# Default: false
# number = false

# Line ending for formatted files: "lf", "crlf", or "keep".
# Default: "lf"
# end_of_line = "lf"

# Check that formatting does not change the rendered HTML.
# Default: true
# validate = true

# Glob patterns of files to leave alone.
# exclude = [".tox/**", ".venv/**"]

# Restrict which installed plugins run. Unset means all of them.
# extensions = ["gfm", "tables"]
# codeformatters = ["python"]

# Per-plugin options
# [plugin.tables]
# wrap = true
"#;

/// Generate .mdformat.toml in the specified directory (or current directory if None).
///
/// Returns an error if .mdformat.toml already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(|| PathBuf::from(MDFORMAT_TOML), |d| d.join(MDFORMAT_TOML));

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{MDFORMAT_TOML} already exists"),
        ));
    }

    fs::write(&path, MDFORMAT_TOML_TEMPLATE)?;
    Ok(path)
}

/// Generate .mdformat.toml in the current directory.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}
