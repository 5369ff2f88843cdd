//! Configuration merging logic
//!
//! Priority: command line > config file > defaults

use crate::cli::CliOverlay;

use super::options::Options;

/// Overlay `layers` onto `base`, later layers winning key by key.
pub fn overlay_options(base: &mut Options, layers: &[&Options]) {
    for layer in layers {
        base.extend(layer.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

/// Merge configurations from the command line, a config file, and defaults.
///
/// Priority: command line > file > defaults
pub fn merge_format_options(
    defaults: &Options,
    file: Option<&Options>,
    cli: &CliOverlay,
) -> Options {
    let mut merged = defaults.clone();
    if let Some(file) = file {
        overlay_options(&mut merged, &[file]);
    }
    overlay_options(&mut merged, &[cli.options()]);
    merged
}
