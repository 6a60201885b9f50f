/// Initialize structured logging with tracing.
/// Call once at startup; later calls are ignored with a warning.
///
/// `RUST_LOG` sets the filter (default `info`). `OJREC_LOG_FORMAT=pretty`
/// switches from JSON lines to human-readable output.
pub fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let pretty = std::env::var("OJREC_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("pretty"))
        .unwrap_or(false);

    // Logs go to stderr so stdout stays clean for JSON command output
    let result = if pretty {
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr));
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr)
                    .json()
            );
        tracing::subscriber::set_global_default(subscriber)
    };

    match result {
        Ok(()) => tracing::info!(pretty = pretty, "Structured logging initialized"),
        Err(e) => tracing::warn!(error = %e, "Global tracing subscriber already set"),
    }
}

/// Log the outcome of one recommendation with the fields dashboards key on.
pub fn log_recommendation(user_id: u64, weak_field: Option<&str>, sampled: usize) {
    if sampled == 0 {
        tracing::info!(user_id = user_id, weak_field = ?weak_field, "No unresolved problem to recommend");
    } else {
        tracing::info!(
            user_id = user_id,
            weak_field = ?weak_field,
            sampled = sampled,
            "Recommendation served"
        );
    }
}
