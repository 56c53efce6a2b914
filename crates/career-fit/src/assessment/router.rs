use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::Answer;
use super::service::AssessmentService;

/// Body accepted by the scoring endpoint.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<Answer>,
    /// Reject answers that do not fit their question instead of scoring leniently.
    #[serde(default)]
    pub validate: bool,
}

/// Router builder exposing the questionnaire and scoring over HTTP.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/score", post(score_handler))
        .with_state(service)
}

pub(crate) async fn questions_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    let questions = service.questions();
    (StatusCode::OK, axum::Json(questions)).into_response()
}

pub(crate) async fn score_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    let ScoreRequest { answers, validate } = request;

    if !validate {
        let outcome = service.evaluate(answers);
        return (StatusCode::OK, axum::Json(outcome)).into_response();
    }

    match service.evaluate_checked(answers) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
