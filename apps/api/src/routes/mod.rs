pub mod health;

use axum::{
    routing::{get, put},
    Router,
};

use crate::draft::handlers as draft_api;
use crate::state::AppState;
use crate::wizard::handlers;
use crate::wizard::ROUTE_ALIASES;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        // Step forms and the read-only view
        .route(
            "/form/:step",
            get(handlers::handle_show_step).post(handlers::handle_submit_step),
        )
        .route("/portfolio", get(handlers::handle_portfolio))
        // JSON API
        .route(
            "/api/v1/draft",
            get(draft_api::handle_get_draft).put(draft_api::handle_put_draft),
        )
        .route("/api/v1/portfolio", get(draft_api::handle_get_portfolio));

    for (from, _) in ROUTE_ALIASES {
        router = router.route(from, get(handlers::handle_alias));
    }

    router.with_state(state)
}
