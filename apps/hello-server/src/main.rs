//! # Hello Server
//!
//! Stand-alone demo: an ordered middleware chain that answers every
//! request with a fixed greeting. Unrelated to the posts API.

use actix_web::HttpServer;

mod chain;

/// Fixed listening port.
const PORT: u16 = 4000;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let server = HttpServer::new(chain::app).bind(("0.0.0.0", PORT))?;
    tracing::info!("listening to port {}", PORT);

    server.run().await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
