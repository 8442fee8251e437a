//! Axum route handlers for the step forms and the portfolio page.

use axum::{
    extract::{OriginalUri, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::info;

use crate::errors::AppError;
use crate::render::{render_portfolio, render_step_form, resolve_portfolio};
use crate::state::AppState;
use crate::storage::legacy::{load_draft, save_draft};
use crate::wizard::form::{FormAction, Submission};
use crate::wizard::steps::resolve_alias;
use crate::wizard::Step;

fn form_step(slug: &str) -> Result<Step, AppError> {
    Step::from_slug(slug).ok_or_else(|| AppError::NotFound(format!("No form step '{slug}'")))
}

/// GET /form/:step
pub async fn handle_show_step(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let step = form_step(&slug)?;
    let loaded = load_draft(&state.slots).await;
    let draft = loaded.draft.into_editable();
    Ok(Html(render_step_form(step, &draft)))
}

/// POST /form/:step
///
/// `add-*` actions re-render the step with one more blank row and persist
/// nothing. `save` overwrites the stored draft and redirects to the next step.
pub async fn handle_submit_step(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let step = form_step(&slug)?;
    let submission = Submission::from_pairs(pairs)?;
    if let FormAction::Add(list) = submission.action {
        if !step.has_list(list) {
            return Err(AppError::BadRequest(format!(
                "{} step has no {list:?} list",
                step.title()
            )));
        }
    }

    let loaded = load_draft(&state.slots).await;
    let draft = submission.apply(loaded.draft.into_editable());

    match submission.action {
        FormAction::Add(_) => Ok(Html(render_step_form(step, &draft)).into_response()),
        FormAction::Save => {
            save_draft(&state.slots, &draft, state.config.mirror_legacy_slots).await?;
            let next = step.next();
            info!("Saved draft at step {:?}; continuing to {:?}", step, next);
            Ok(Redirect::to(next.path()).into_response())
        }
    }
}

/// GET /portfolio
pub async fn handle_portfolio(State(state): State<AppState>) -> Html<String> {
    let resolved = resolve_portfolio(&state.slots).await;
    Html(render_portfolio(&resolved.draft))
}

/// GET on any alias route; forwards to its target.
pub async fn handle_alias(OriginalUri(uri): OriginalUri) -> Result<Redirect, AppError> {
    resolve_alias(uri.path())
        .map(Redirect::temporary)
        .ok_or_else(|| AppError::NotFound(format!("No route '{}'", uri.path())))
}
