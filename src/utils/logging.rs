use std::fs;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    filter::Targets, fmt, fmt::time::UtcTime, prelude::*, EnvFilter,
};

/// Installs the global subscriber: a daily-rolling JSON file for service
/// logs, a second file for `target: "perf"` request-timing events, and a
/// compact console layer. The returned guards must stay alive for the
/// non-blocking writers to flush.
pub fn setup_logging(log_dir: &str, svc: &str) -> (WorkerGuard, WorkerGuard) {
    let svc_dir = format!("{}/{}", log_dir, svc);
    let perf_dir = format!("{}/perf", log_dir);
    fs::create_dir_all(&svc_dir).expect("Failed to create log directory");
    fs::create_dir_all(&perf_dir).expect("Failed to create perf log directory");

    let (svc_writer, svc_guard) =
        tracing_appender::non_blocking(rolling::daily(svc_dir, format!("{}.log", svc)));
    let (perf_writer, perf_guard) =
        tracing_appender::non_blocking(rolling::daily(perf_dir, format!("{}_perf.log", svc)));

    let svc_layer = fmt::layer()
        .with_writer(svc_writer)
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_target(true)
        .with_filter(env_filter());

    let perf_layer = fmt::layer()
        .with_writer(perf_writer)
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_target(true)
        .with_filter(Targets::new().with_target("perf", tracing::Level::INFO));

    let console_layer = fmt::layer()
        .compact()
        .with_timer(UtcTime::rfc_3339())
        .with_target(true)
        .with_filter(env_filter());

    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(svc_layer)
            .with(perf_layer)
            .with(console_layer),
    )
    .expect("Failed to set global subscriber");

    (svc_guard, perf_guard)
}

fn env_filter() -> EnvFilter {
    // RUST_LOG wins; default to info
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
