//! Registration service - Entry point.

use mailchannels_client::MailChannelsClient;
use registration_api::{
    api::{create_router, AppState},
    config::Config,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting registration service");

    // Initialize mail client when delivery is enabled
    let mailer = if config.email.enabled {
        match MailChannelsClient::new(&config.email.api_url) {
            Ok(c) => Some(c),
            Err(e) => {
                error!("Failed to create MailChannels client: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        info!("Email delivery disabled, submissions will only be logged");
        None
    };

    // Create application state and router
    let state = AppState::new(config.clone(), mailer);
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
