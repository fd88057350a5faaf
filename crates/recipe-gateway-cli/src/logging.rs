use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::output::OutputContext;

/// Install the global `tracing` subscriber.
///
/// Precedence: `--log-level`, then `RUST_LOG`, then the `-v`/`-q` flags.
/// Logs go to stderr.
pub fn init(output: &OutputContext, log_level: Option<&str>) -> Result<(), CliError> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level).map_err(|e| CliError::Config {
            message: format!("invalid log level '{level}': {e}"),
        })?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(output.verbose, output.quiet))),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(output.use_color)
        .try_init()
        .map_err(|e| CliError::Other(format!("failed to initialise logging: {e}")))
}

/// Filter directive implied by the verbosity flags.
fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "recipe_gateway=debug,tower_http=debug,info",
        2 => "recipe_gateway=trace,tower_http=debug,async_graphql=debug,info",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbosity() {
        assert_eq!(default_directive(0, true), "error");
    }

    #[test]
    fn verbosity_raises_gateway_level() {
        assert_eq!(default_directive(0, false), "info");
        assert!(default_directive(1, false).starts_with("recipe_gateway=debug"));
        assert!(default_directive(2, false).starts_with("recipe_gateway=trace"));
        assert_eq!(default_directive(5, false), "trace");
    }

    #[test]
    fn every_default_directive_parses() {
        for verbose in 0..4 {
            assert!(EnvFilter::try_new(default_directive(verbose, false)).is_ok());
        }
    }
}
