//! Logging setup for the binary

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Pick the filter directive: flags win, then `RUST_LOG`, then the
/// configured level
pub fn filter_directive(verbose: bool, debug: bool, quiet: bool, configured: &str) -> String {
    let level = if quiet {
        Some(Level::ERROR)
    } else if debug {
        Some(Level::DEBUG)
    } else if verbose {
        Some(Level::TRACE)
    } else {
        None
    };

    match level {
        Some(level) => format!("hyper=warn,reqwest=warn,{level}"),
        None => std::env::var("RUST_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| format!("hyper=warn,reqwest=warn,{}", configured.to_lowercase())),
    }
}

/// Install the stderr subscriber. Stdout stays free for command output.
pub fn configure_logging(verbose: bool, debug: bool, quiet: bool, configured: &str) {
    let filter = EnvFilter::new(filter_directive(verbose, debug, quiet, configured));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_configured_level() {
        assert!(filter_directive(false, false, true, "info").ends_with("ERROR"));
        assert!(filter_directive(false, true, false, "info").ends_with("DEBUG"));
        assert!(filter_directive(true, false, false, "info").ends_with("TRACE"));
        // quiet wins over everything
        assert!(filter_directive(true, true, true, "trace").ends_with("ERROR"));
    }
}
