//! Logging initialization for the CLI.
//!
//! Logs go to stderr so that stdout carries only the JSON the commands print.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the default filter; `verbose` raises the crate
/// levels from `warn` to `debug`.
pub fn init_logging(json: bool, verbose: bool) {
    let subscriber = tracing_subscriber::registry().with(build_env_filter(verbose));

    if json {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn build_env_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "fhir_sdk={level},fhir_sdk_format={level},fhir_sdk_models={level}"
        ))
    })
}
