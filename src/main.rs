//! Movie facts voice skill
//!
//! An HTTP skill server that answers one conversational turn per request,
//! carrying the conversation subject in session attributes echoed back by
//! the voice platform.

mod api;
mod config;
mod lookup;
mod router;
mod state_machine;
mod turn;
mod wire;

use api::{create_router, AppState};
use config::SkillConfig;
use lookup::{LoggingLookup, LoggingNumberFacts, NumbersApiClient, OmdbClient};
use router::ConversationRouter;
use state_machine::IntentRegistry;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skill_server=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false),
        )
        .init();

    let config = SkillConfig::from_env();

    if config.omdb_api_key.is_none() {
        tracing::warn!("No OMDb API key configured. Set OMDB_API_KEY or movie lookups will fail.");
    }

    // Content providers
    let omdb = OmdbClient::new(
        config.omdb_api_key.clone(),
        &config.omdb_base_url,
        config.lookup_timeout,
    )?;
    let numbers = NumbersApiClient::new(&config.numbers_base_url, config.lookup_timeout)?;

    let intents = Arc::new(IntentRegistry::standard());
    tracing::info!(intents = ?intents.names(), "Intent registry initialized");

    let router = ConversationRouter::new(
        intents,
        Arc::new(LoggingLookup::new(Arc::new(omdb))),
        Arc::new(LoggingNumberFacts::new(Arc::new(numbers))),
        config.lookup_timeout,
    );

    let state = AppState::new(router);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Skill server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
