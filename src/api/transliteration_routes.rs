//! Transliteration API endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::types::{
    HealthResponse, ScriptDetailResponse, ScriptsResponse, TransliterateBody,
    TransliterateResponse,
};
use crate::error::GatewayError;
use crate::gateway::TransliterationGateway;

/// GET /health
async fn health(State(gateway): State<TransliterationGateway>) -> Json<HealthResponse> {
    let health = gateway.health();
    Json(HealthResponse {
        status: health.status.to_string(),
        vidyut_available: health.engine_available,
        supported_scripts: health
            .supported_scripts
            .iter()
            .map(|s| s.name().to_string())
            .collect(),
    })
}

/// GET /scripts
async fn list_scripts(State(gateway): State<TransliterationGateway>) -> Json<ScriptsResponse> {
    let listing = gateway.supported_scripts();
    Json(ScriptsResponse {
        scripts: listing.scripts.into_iter().map(str::to_string).collect(),
        count: listing.count,
    })
}

/// GET /scripts/:name
async fn get_script(
    State(gateway): State<TransliterationGateway>,
    Path(name): Path<String>,
) -> Result<Json<ScriptDetailResponse>, GatewayError> {
    let script = gateway.script(&name)?;
    Ok(Json(ScriptDetailResponse {
        name: script.name().to_string(),
        label: script.label().to_string(),
        scheme: format!("{:?}", script.scheme()),
    }))
}

/// POST /transliterate
async fn transliterate(
    State(gateway): State<TransliterationGateway>,
    payload: Result<Json<TransliterateBody>, JsonRejection>,
) -> Result<Json<TransliterateResponse>, GatewayError> {
    let Json(body) = payload.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let request = gateway.request(body.text, body.source, body.target);
    let out = gateway.transliterate(&request)?;
    Ok(Json(TransliterateResponse { result: out.result }))
}

/// Create router for transliteration endpoints
pub fn create_transliteration_router(gateway: TransliterationGateway) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/scripts", get(list_scripts))
        .route("/scripts/:name", get(get_script))
        .route("/transliterate", post(transliterate))
        .with_state(gateway)
}
