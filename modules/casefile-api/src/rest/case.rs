use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use casefile_common::{CaseFileError, CaseSeed, Result};
use casefile_engine::seed;

use super::error_response;
use crate::AppState;

/// Either a pre-derived seed or raw beacon entropy to derive one from.
#[derive(Deserialize)]
pub struct GenerateCaseRequest {
    pub seed: Option<CaseSeed>,
    pub entropy: Option<Vec<u8>>,
}

/// The public slice of a generated case: enough to list and open it.
#[derive(Serialize)]
pub struct CaseSummary {
    pub id: String,
    pub cid: String,
    pub title: String,
    pub excerpt: String,
}

/// Guilt fields ride alongside the summary for the caller to hand to the
/// commitment mechanism; they are never part of the summary itself.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCaseResponse {
    pub case: CaseSummary,
    pub guilty_suspect_id: String,
    pub crimestory: String,
}

pub async fn generate_case(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateCaseRequest>,
) -> Response {
    let seed = match (request.seed, request.entropy) {
        (Some(seed), _) => seed,
        (None, Some(entropy)) => match seed::derive(&entropy) {
            Ok(seed) => seed,
            Err(_) => {
                return error_response(StatusCode::BAD_REQUEST, "Invalid entropy").into_response()
            }
        },
        (None, None) => {
            return error_response(StatusCode::BAD_REQUEST, "Missing seed").into_response()
        }
    };

    match run_pipeline(&state, &seed).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!(error = %e, "Case generation failed");
            let message = match e {
                CaseFileError::PublicationFailed(_) => "Failed to publish case",
                _ => "Failed to generate case",
            };
            error_response(StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
        }
    }
}

async fn run_pipeline(state: &AppState, seed: &CaseSeed) -> Result<GenerateCaseResponse> {
    let narrative = state.expander.expand(seed).await?;
    let (public_case, guilt) = state.publisher.publish(narrative).await?;

    Ok(GenerateCaseResponse {
        case: CaseSummary {
            id: public_case.id.clone(),
            cid: public_case.id,
            title: public_case.title,
            excerpt: public_case.excerpt,
        },
        guilty_suspect_id: guilt.guilty_suspect_id,
        crimestory: guilt.crimestory,
    })
}
