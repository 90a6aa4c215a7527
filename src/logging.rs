use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log destination.
pub const LOG_ENV: &str = "SCHEDULER_STATE_LOG";

/// Initialize tracing.
///
/// Logging is off unless `SCHEDULER_STATE_LOG` is set: `stderr` logs to
/// standard error, anything else is taken as a file path. Stdout is left
/// alone so snapshot output stays machine-readable.
pub fn init_tracing() {
    let Some(target) = std::env::var(LOG_ENV).ok() else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if target == "stderr" {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(UtcTime::rfc_3339())
            .with_target(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return;
    }

    let Ok(file) = std::fs::File::create(&target) else {
        eprintln!("Warning: Failed to create log file: {}", target);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
