//! Log subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,api_server=debug,bloglist_infra=debug";

#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryConfig {
    /// One JSON object per line instead of the pretty formatter.
    pub json_logs: bool,
}

impl TelemetryConfig {
    /// `LOG_FORMAT=json` selects JSON output.
    pub fn from_env() -> Self {
        Self {
            json_logs: std::env::var("LOG_FORMAT")
                .is_ok_and(|v| v.eq_ignore_ascii_case("json")),
        }
    }
}

/// Install the global tracing subscriber.
pub fn init_telemetry(config: TelemetryConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = config.json_logs.then(|| fmt::layer().json());
    let pretty = (!config.json_logs).then(|| fmt::layer().pretty());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json)
        .with(pretty)
        .init();

    tracing::debug!(json_logs = config.json_logs, "Logging initialized");
}
