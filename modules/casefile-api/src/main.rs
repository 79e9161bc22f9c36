use std::sync::Arc;

use anyhow::Result;
use axum::{routing::post, Router};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ai_client::Claude;
use casefile_common::Config;
use casefile_engine::{DialogueAgent, Expander, Publisher};
use lighthouse_client::LighthouseClient;

mod rest;

pub struct AppState {
    pub expander: Expander,
    pub publisher: Publisher,
    pub dialogue: DialogueAgent,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("casefile=info".parse()?))
        .init();

    let config = Config::from_env();

    let claude = Arc::new(Claude::new(&config.anthropic_api_key, &config.model));
    let store = Arc::new(LighthouseClient::new(config.lighthouse_api_key.as_deref()));

    let state = Arc::new(AppState {
        expander: Expander::new(claude.clone()),
        publisher: Publisher::new(store),
        dialogue: DialogueAgent::new(claude),
    });

    let app = Router::new()
        .route("/api/case", post(rest::case::generate_case))
        .route("/api/chat", post(rest::chat::interrogate))
        .with_state(state)
        // method + path + status + latency only; request bodies carry case
        // material and stay out of the logs
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Case file API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
