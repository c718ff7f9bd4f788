//! Root path handler.

use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;

/// Greeting handler. Responds with the configured greeting as `text/plain`.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> String {
    state.config.service.greeting.clone()
}
