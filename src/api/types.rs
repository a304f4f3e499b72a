//! Wire types for the HTTP API.

use serde::{Deserialize, Serialize};

/// POST /transliterate body. Omitted scripts fall back to the configured defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransliterateBody {
    pub text: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TransliterateResponse {
    pub result: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub vidyut_available: bool,
    pub supported_scripts: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScriptsResponse {
    pub scripts: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScriptDetailResponse {
    pub name: String,
    pub label: String,
    /// Debug name of the engine's scheme token, e.g. `BarahaSouth`.
    pub scheme: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
