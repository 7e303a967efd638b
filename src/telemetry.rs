use anyhow::{Context, Result};
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Compose the bunyan JSON layers into a `tracing` subscriber. `RUST_LOG`
/// overrides `env_filter` when set.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Register a subscriber as global default to process span data.
/// `log` records from dependencies (actix, reqwest, lettre) are forwarded too.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<()> {
    LogTracer::init().with_context(|| {
        format!(
            "{}::telemetry::init_subscriber: Failed to install log forwarder",
            env!("CARGO_PKG_NAME")
        )
    })?;
    set_global_default(subscriber).with_context(|| {
        format!(
            "{}::telemetry::init_subscriber: Failed to initialize tracing subscriber",
            env!("CARGO_PKG_NAME")
        )
    })
}
