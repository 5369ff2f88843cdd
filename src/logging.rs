use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug`
/// when `verbose` is set.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if verbose { "debug" } else { "warn" };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, warn};

    #[test]
    fn test_logging_init() {
        // Only one subscriber per process; later calls fail harmlessly
        let _ = init(false);

        debug!("This is a debug message");
        warn!("This is a warning message");
    }
}
