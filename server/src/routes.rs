//! HTTP handlers.

use crate::commands::submit::{submit_feedback, SubmissionReport};
use crate::error::{codes, CommandError};
use crate::form::FeedbackForm;
use crate::page::render_form;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use std::sync::Arc;
use tracing::{error, info};

pub async fn health_check() -> &'static str {
    info!("Health check called");
    "ok"
}

/// Wrap a rendered page, turning a template failure into a JSON 500.
fn html_page(status: StatusCode, page: Result<String, askama::Error>) -> Response {
    match page {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render form: {}", e);
            CommandError::new(codes::RENDER_ERROR, format!("Failed to render the form: {e}"))
                .into_response()
        }
    }
}

pub async fn index() -> Response {
    html_page(StatusCode::OK, render_form(&FeedbackForm::default(), None, &[]))
}

/// Browser form post. Validation failures re-render the form inline.
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FeedbackForm>,
) -> Response {
    match submit_feedback(&state, &form).await {
        Ok(report) => html_page(StatusCode::OK, render_form(&form, None, &report.notices)),
        Err(e) => html_page(
            StatusCode::UNPROCESSABLE_ENTITY,
            render_form(&form, Some(&e.message), &[]),
        ),
    }
}

pub async fn create_submission(
    State(state): State<Arc<AppState>>,
    Json(form): Json<FeedbackForm>,
) -> Result<Json<SubmissionReport>, CommandError> {
    submit_feedback(&state, &form).await.map(Json)
}
