use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "card_image_fetcher=debug,info"
    } else {
        "card_image_fetcher=info"
    }
}

/// `RUST_LOG` wins over the built-in directives.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Compact, target-less console output for the CLI. Does nothing if a
/// subscriber is already installed.
pub fn init_cli_logger(verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    if tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logger already initialised");
    }
}
