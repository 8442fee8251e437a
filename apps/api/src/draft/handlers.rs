//! JSON access to the stored draft, alongside the HTML flow.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::draft::PortfolioDraft;
use crate::errors::AppError;
use crate::render::{resolve_portfolio, ResolvedPortfolio};
use crate::state::AppState;
use crate::storage::legacy::{load_draft, save_draft, DraftSource};

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub draft: PortfolioDraft,
    pub source: DraftSource,
}

/// GET /api/v1/draft
pub async fn handle_get_draft(State(state): State<AppState>) -> Json<DraftResponse> {
    let loaded = load_draft(&state.slots).await;
    Json(DraftResponse {
        draft: loaded.draft.into_editable(),
        source: loaded.source,
    })
}

/// PUT /api/v1/draft
///
/// Overwrites the stored draft wholesale. No field is validated; empty lists
/// are stored with one blank element, as the form would.
pub async fn handle_put_draft(
    State(state): State<AppState>,
    Json(draft): Json<PortfolioDraft>,
) -> Result<StatusCode, AppError> {
    let draft = draft.into_editable();
    save_draft(&state.slots, &draft, state.config.mirror_legacy_slots).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/portfolio
pub async fn handle_get_portfolio(State(state): State<AppState>) -> Json<ResolvedPortfolio> {
    Json(resolve_portfolio(&state.slots).await)
}
