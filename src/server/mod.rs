pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    config::Config,
    llm::OpenAiCompatClient,
    prompt::SystemPersona,
};
use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use handlers::{AppState, ChatService};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Persona and client are built once and shared read-only by every request
    let persona = SystemPersona::load(&config.persona).await?;
    let client = OpenAiCompatClient::new(config.llm.clone());

    let app_state = AppState {
        chat: ChatService::new(persona, Arc::new(client), config.llm.model.clone()),
        credential_configured: config.llm.has_credential(),
    };

    let app = router(app_state, &config.server.cors_origins)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);
    info!(
        "Completion API configured: {} (model: {})",
        if config.llm.has_credential() { "Yes" } else { "No" },
        config.llm.model
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: AppState, cors_origins: &[String]) -> Result<Router> {
    Ok(Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .fallback(handlers::not_found)
        .layer(cors_layer(cors_origins)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| Error::config(format!("Invalid CORS origin: '{}'", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]))
}
