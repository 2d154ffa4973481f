use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info, warn};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use pt_exporter::collector::structs::collector_registry::CollectorRegistry;
use pt_exporter::common::common::setup_logging;
use pt_exporter::config::structs::configuration::Configuration;
use pt_exporter::http::http::http_service;
use pt_exporter::http::structs::http_service_data::HttpServiceData;
use pt_exporter::metrics::structs::emitter_options::EmitterOptions;
use pt_exporter::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let address: SocketAddr = match config.listen_address().parse() {
        Ok(address) => address,
        Err(e) => {
            error!("[BOOT] Invalid listen address '{}': {e}", config.listen_address());
            exit(1);
        }
    };

    let options = Arc::new(EmitterOptions::from_config(&config));
    info!("[BOOT] Naming scheme {:?}, language '{}'", options.scheme, options.lang);

    let mut registries = Vec::with_capacity(config.clients.len());
    for client in &config.clients {
        match CollectorRegistry::from_config(client, options.clone()) {
            Ok(registry) => {
                info!("[BOOT] Registered {} client {} at {}", client.kind, client.name, client.url);
                registries.push(Arc::new(registry));
            }
            Err(e) => {
                error!("[BOOT] Unable to set up client {}: {e}", client.name);
                exit(1);
            }
        }
    }
    if registries.is_empty() {
        warn!("[BOOT] No clients configured, /metrics will be empty");
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to install the shutdown signal handler");
                    exit(1);
                }
            };

            let data = Arc::new(HttpServiceData { registries });
            let (handle, server) = http_service(address, data)?;
            let server_task = tokio::spawn(server);

            tokio::select! {
                _ = tokio_shutdown.handle() => {
                    info!("Shutdown request received, shutting down...");
                    handle.stop(true).await;
                }
                result = server_task => {
                    if let Ok(Err(e)) = result {
                        error!("[HTTP] Server stopped: {e}");
                        return Err(e);
                    }
                }
            }

            info!("Server shutting down completed");
            Ok::<(), std::io::Error>(())
        })
}
