use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter for the CLI. `RUST_LOG` wins over everything else.
fn cli_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { level.unwrap_or("info") };
        EnvFilter::new(format!("phone_extract={}", level))
    })
}

// Results go to stdout, so every log line is written to stderr.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(cli_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(cli_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init();
}
