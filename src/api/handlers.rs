use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};

use crate::render::render_page;
use crate::shell::SubmitRejection;
use crate::AppState;

use super::models::{
    CaptionRequest, CaptionResponse, ErrorResponse, GenerateForm, HealthResponse,
};

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state.shell.snapshot().await))
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GenerateForm>,
) -> Response {
    match state.shell.submit(form.prompt).await {
        Ok(page) => Html(render_page(&page)).into_response(),
        Err(rejection) => {
            tracing::debug!(%rejection, "submission rejected");
            let status = match rejection {
                SubmitRejection::InFlight => StatusCode::CONFLICT,
                SubmitRejection::EmptyPrompt => StatusCode::BAD_REQUEST,
            };
            let page = state.shell.snapshot().await;
            (status, Html(render_page(&page))).into_response()
        }
    }
}

pub async fn generate_caption(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CaptionRequest>,
) -> Result<Json<CaptionResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.gemini.generate_caption(&payload.prompt).await {
        Ok(caption) => Ok(Json(CaptionResponse { caption })),
        Err(err) => {
            tracing::error!(error = %err, "caption generation failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            ))
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
