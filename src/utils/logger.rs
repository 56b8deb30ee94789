use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins over the built-in default directive.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Stdout carries the roll itself, so CLI diagnostics go to stderr and stay
/// quiet unless `--verbose` is set.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "dice_roller=debug"
    } else {
        "dice_roller=warn"
    };

    tracing_subscriber::registry()
        .with(env_filter(default))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

/// One JSON object per line for CloudWatch. The runtime stamps each line
/// already, and the roll fields are flattened to the top level so they can be
/// queried directly.
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter("dice_roller=info"))
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false)
                .with_target(false)
                .without_time(),
        )
        .init();
}
