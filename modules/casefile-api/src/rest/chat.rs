use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use casefile_common::{CaseFileError, ChatMessage, PublicCase};
use casefile_engine::dialogue::REFUSAL_LINE;

use super::error_response;
use crate::AppState;

/// The interrogation request carries the client-held public case alongside
/// the identifiers. Transcripts and cases live with the client, not here.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterrogateRequest {
    pub case_id: Option<String>,
    pub suspect_id: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub case: Option<PublicCase>,
}

#[derive(Serialize)]
pub struct InterrogateResponse {
    pub response: String,
}

pub async fn interrogate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InterrogateRequest>,
) -> Response {
    let (Some(case_id), Some(suspect_id)) = (request.case_id, request.suspect_id) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing required fields: caseId, suspectId, messages",
        )
        .into_response();
    };
    if request.messages.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing required fields: caseId, suspectId, messages",
        )
        .into_response();
    }

    let Some(case_file) = request.case else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid caseId").into_response();
    };
    let Some(suspect) = case_file.suspect(&suspect_id) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid suspectId").into_response();
    };

    match state
        .dialogue
        .respond(&case_file, suspect, &request.messages)
        .await
    {
        Ok(text) => Json(InterrogateResponse { response: text }).into_response(),
        Err(CaseFileError::InvalidRequest(message)) => {
            error_response(StatusCode::BAD_REQUEST, &message).into_response()
        }
        Err(e) => {
            // never break character: the transcript gets a canned line, the
            // error stays in the logs
            warn!(case = %case_id, suspect = %suspect_id, error = %e, "Dialogue generation failed");
            Json(InterrogateResponse {
                response: REFUSAL_LINE.to_string(),
            })
            .into_response()
        }
    }
}
