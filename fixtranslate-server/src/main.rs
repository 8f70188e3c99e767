/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! FixTranslate HTTP boundary.
//!
//! Hosts `POST /parse`, `POST /parse/batch`, and `GET /health`. The parse
//! core is a pure function, so the handlers carry no state beyond the
//! process-wide dictionary installed before the listener starts.

use axum::{
    Router,
    routing::{get, post},
};
use dotenvy::dotenv;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

mod handlers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "fixtranslate_server=info,axum=info".to_string()),
        )
        .init();

    // The dictionary must be in place before the first request; deployments
    // with vendor tags extend the baseline here.
    fixtranslate_dictionary::install(fixtranslate_dictionary::Dictionary::base());

    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/parse", post(handlers::parse_endpoint))
        .route("/parse/batch", post(handlers::parse_batch))
        .layer(TraceLayer::new_for_http());

    let port = std::env::var("FIXTRANSLATE_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("FixTranslate listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
