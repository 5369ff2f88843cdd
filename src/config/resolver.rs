//! Option resolution across `.mdformat.toml` and `pyproject.toml`
//!
//! [`ConfigResolver`] decides which file applies to a path and memoizes every
//! lookup for the lifetime of the resolver. Files are assumed not to change
//! while it is alive; [`ConfigResolver::clear_cache`] starts over.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use super::error::Result;
use super::file::{
    find_mdformat_toml, find_pyproject_toml, load_mdformat_toml, search_dir, MDFORMAT_TOML,
    PYPROJECT_TOML,
};
use super::manifest::parse_pyproject;
use super::options::{MdformatRules, OptionValidator, Options};

/// Which files are consulted when resolving options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceStrategy {
    /// `.mdformat.toml` wins over `pyproject.toml` in the same directory
    #[default]
    Precedence,
    /// Only `pyproject.toml`; `.mdformat.toml` is ignored
    #[value(name = "manifest")]
    ManifestOnly,
    /// Only `.mdformat.toml`
    #[value(name = "native")]
    NativeOnly,
}

/// Options that apply to a path and the file they were read from.
///
/// `path` is `None` when no config file applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Resolution {
    pub options: Options,
    pub path: Option<PathBuf>,
}

/// Pluggable source of file-based options.
///
/// Formatter hosts call this during their configuration phase instead of
/// their built-in loader.
pub trait ConfigSource {
    fn resolve(&mut self, search_path: &Path) -> Result<Resolution>;
}

/// Memoizing resolver for formatter options
pub struct ConfigResolver {
    strategy: SourceStrategy,
    validator: Box<dyn OptionValidator>,
    manifests: HashMap<PathBuf, Option<Options>>,
    natives: HashMap<PathBuf, Options>,
    levels: HashMap<PathBuf, Option<Resolution>>,
    resolved: HashMap<PathBuf, Resolution>,
    warnings: Vec<String>,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new(SourceStrategy::default())
    }
}

impl ConfigResolver {
    /// Create a resolver validating with the stock formatter rules
    pub fn new(strategy: SourceStrategy) -> Self {
        Self::with_validator(strategy, MdformatRules)
    }

    /// Create a resolver with host-supplied validation rules
    pub fn with_validator(strategy: SourceStrategy, validator: impl OptionValidator + 'static) -> Self {
        Self {
            strategy,
            validator: Box::new(validator),
            manifests: HashMap::new(),
            natives: HashMap::new(),
            levels: HashMap::new(),
            resolved: HashMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Warnings emitted so far, oldest first
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Forget every memoized lookup and recorded warning
    pub fn clear_cache(&mut self) {
        self.manifests.clear();
        self.natives.clear();
        self.levels.clear();
        self.resolved.clear();
        self.warnings.clear();
    }

    /// Resolve the options that apply to `search_path`.
    ///
    /// Finding no config file is not an error: the result is empty options
    /// and no path. Errors are not memoized.
    pub fn resolve(&mut self, search_path: &Path) -> Result<Resolution> {
        if let Some(cached) = self.resolved.get(search_path) {
            return Ok(cached.clone());
        }

        let resolution = match self.strategy {
            SourceStrategy::Precedence => self.resolve_precedence(search_path)?,
            SourceStrategy::ManifestOnly => self.resolve_manifest_only(search_path)?,
            SourceStrategy::NativeOnly => self.resolve_native_only(search_path)?,
        };

        match &resolution.path {
            Some(path) => debug!(search_path = %search_path.display(), config = %path.display(), "resolved config"),
            None => debug!(search_path = %search_path.display(), "no config file applies"),
        }

        self.resolved
            .insert(search_path.to_path_buf(), resolution.clone());
        Ok(resolution)
    }

    /// Options of `pyproject.toml` at `path`, `None` without a section
    pub fn manifest_options(&mut self, path: &Path) -> Result<Option<Options>> {
        if let Some(cached) = self.manifests.get(path) {
            return Ok(cached.clone());
        }
        let options = parse_pyproject(path, self.validator.as_ref())?;
        self.manifests.insert(path.to_path_buf(), options.clone());
        Ok(options)
    }

    /// Options of `.mdformat.toml` at `path`
    pub fn native_options(&mut self, path: &Path) -> Result<Options> {
        if let Some(cached) = self.natives.get(path) {
            return Ok(cached.clone());
        }
        let options = load_mdformat_toml(path, self.validator.as_ref())?;
        self.natives.insert(path.to_path_buf(), options.clone());
        Ok(options)
    }

    fn resolve_manifest_only(&mut self, search_path: &Path) -> Result<Resolution> {
        let Some(path) = find_pyproject_toml(search_path) else {
            return Ok(Resolution::default());
        };
        let options = self.manifest_options(&path)?.unwrap_or_default();
        Ok(Resolution {
            options,
            path: Some(path),
        })
    }

    fn resolve_native_only(&mut self, search_path: &Path) -> Result<Resolution> {
        let Some(path) = find_mdformat_toml(search_path) else {
            return Ok(Resolution::default());
        };
        let options = self.native_options(&path)?;
        Ok(Resolution {
            options,
            path: Some(path),
        })
    }

    fn resolve_precedence(&mut self, search_path: &Path) -> Result<Resolution> {
        let start = search_dir(search_path);
        for level in start.ancestors() {
            if let Some(decision) = self.decide_level(level)? {
                return Ok(decision);
            }
        }
        Ok(Resolution::default())
    }

    /// Decide whether `dir` settles the search, memoized per directory so
    /// the ignored-manifest warning is emitted once.
    fn decide_level(&mut self, dir: &Path) -> Result<Option<Resolution>> {
        if let Some(cached) = self.levels.get(dir) {
            return Ok(cached.clone());
        }

        let manifest = dir.join(PYPROJECT_TOML);
        let native = dir.join(MDFORMAT_TOML);

        let manifest_options = if manifest.is_file() {
            self.manifest_options(&manifest)?
        } else {
            None
        };

        let decision = if native.is_file() {
            if manifest_options.as_ref().is_some_and(|o| !o.is_empty()) {
                self.warn_ignored_manifest(&manifest, &native);
            }
            Some(Resolution {
                options: self.native_options(&native)?,
                path: Some(native),
            })
        } else {
            match manifest_options {
                Some(options) if !options.is_empty() => Some(Resolution {
                    options,
                    path: Some(manifest),
                }),
                _ => None,
            }
        };

        self.levels.insert(dir.to_path_buf(), decision.clone());
        Ok(decision)
    }

    fn warn_ignored_manifest(&mut self, manifest: &Path, native: &Path) {
        let message = format!(
            "ignoring [tool.mdformat] in {}: {} takes precedence",
            manifest.display(),
            native.display()
        );
        warn!("{message}");
        self.warnings.push(message);
    }
}

impl ConfigSource for ConfigResolver {
    fn resolve(&mut self, search_path: &Path) -> Result<Resolution> {
        ConfigResolver::resolve(self, search_path)
    }
}
