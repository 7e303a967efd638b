use anyhow::Context;
use contact_rs::{
    configuration::{get_configuration, Settings},
    startup::{build_dispatcher, run},
    telemetry::{get_subscriber, init_subscriber},
};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config_file =
        std::env::var("APP_CONFIG_FILE").unwrap_or_else(|_| "configuration.yaml".to_owned());
    let configuration: Settings = get_configuration(&config_file).with_context(|| {
        format!("Failed to read configuration file \"{}\"", config_file)
    })?;
    let subscriber = get_subscriber(
        env!("CARGO_PKG_NAME").to_owned(),
        configuration.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber)?;
    let dispatcher = build_dispatcher(&configuration)?;
    let host = configuration.application.host.as_str();
    // Raises if failed to bind address
    let listener = TcpListener::bind((host, configuration.application.port))
        .with_context(|| format!("Failed to bind {}:{}", host, configuration.application.port))?;
    let admin_listener = configuration
        .application
        .admin_port
        .map(|admin_port| TcpListener::bind((host, admin_port)))
        .transpose()
        .context("Failed to bind admin port")?;
    tracing::info!(
        "Serving contact submissions on {} with {} email provider",
        listener.local_addr()?,
        dispatcher.provider()
    );
    let (server, admin_server) = run(listener, admin_listener, dispatcher)?;
    match admin_server {
        Some(admin_server) => {
            tokio::try_join!(server, admin_server)?;
        }
        None => server.await?,
    }
    Ok(())
}
