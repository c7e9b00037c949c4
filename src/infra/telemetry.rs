use std::sync::Once;

use metrics::{Unit, describe_counter};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use super::error::InfraError;

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Logging settings for the embedding application.
#[derive(Debug, Clone, Copy)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            format: LogFormat::Compact,
        }
    }
}

/// Install a global tracing subscriber using the provided logging settings.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            "agora_cache_hit_total",
            Unit::Count,
            "Total number of bounded-cache hits, labelled by cache."
        );
        describe_counter!(
            "agora_cache_miss_total",
            Unit::Count,
            "Total number of bounded-cache misses, labelled by cache."
        );
        describe_counter!(
            "agora_cache_evict_total",
            Unit::Count,
            "Total number of bounded-cache evictions due to capacity, labelled by cache."
        );
        describe_counter!(
            "agora_cache_side_refresh_total",
            Unit::Count,
            "Side-list refresh attempts, labelled by list and outcome."
        );
    });
}
