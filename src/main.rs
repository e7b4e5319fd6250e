use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod session;
mod source;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // RUST_LOG overrides; info by default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .init();

    // 1️⃣ Load configuration
    let config_path = AppConfig::path_from_env();
    let config = match AppConfig::load_from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the row source (credentials come from the environment)
    let source = match config.source.build() {
        Ok(source) => source,
        Err(e) => {
            error!("Listing source setup failed: {e}");
            std::process::exit(1);
        }
    };
    let state = AppState::new(source);

    // 3️⃣ Start the server
    let addr = config.server.addr;
    info!(config = %config_path.display(), "Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.server.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            warn!("{err}");
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
