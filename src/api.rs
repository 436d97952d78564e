//! HTTP API for the skill
//!
//! A single `POST /` endpoint accepting the platform's request envelope.

mod handlers;
mod types;

pub use handlers::create_router;

use crate::router::ConversationRouter;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ConversationRouter>,
}

impl AppState {
    pub fn new(router: ConversationRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}
