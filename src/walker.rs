use ignore::WalkBuilder;
use std::io;
use std::path::{Path, PathBuf};

/// Extensions treated as markdown when walking directories
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Stand-in path for stdin
pub const STDIN_PATH: &str = "-";

pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|md| ext.eq_ignore_ascii_case(md))
        })
}

/// Walk paths and yield markdown file paths, respecting gitignore.
///
/// Files named explicitly are yielded whatever their extension, and `-`
/// is passed through for stdin.
pub fn walk_markdown(paths: &[String]) -> impl Iterator<Item = io::Result<PathBuf>> {
    let mut all_files = vec![];

    for path in paths {
        if path == STDIN_PATH || Path::new(path).is_file() {
            all_files.push(Ok(PathBuf::from(path)));
            continue;
        }

        let walker = WalkBuilder::new(path)
            .hidden(true) // Skip hidden files
            .git_ignore(true) // Respect .gitignore
            .git_global(true)
            .git_exclude(true)
            .build();

        for entry in walker {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
                    if is_file && is_markdown(entry.path()) {
                        all_files.push(Ok(entry.into_path()));
                    }
                }
                Err(e) => {
                    all_files.push(Err(io::Error::other(e.to_string())));
                }
            }
        }
    }

    all_files.into_iter()
}
