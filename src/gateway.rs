//! Request validation and routing to the engine.
//!
//! [`TransliterationGateway`] is cheap to clone and holds only immutable
//! state, so one instance is shared by every request handler.

use std::sync::Arc;

use crate::config::RequestDefaults;
use crate::engine::TransliterationEngine;
use crate::error::{GatewayError, ScriptRole};
use crate::scripts::{ScriptId, ScriptTable};

/// A conversion request with script names still unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransliterationRequest {
    pub text: String,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransliterationResult {
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub engine_available: bool,
    pub supported_scripts: Vec<ScriptId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedScripts {
    pub scripts: Vec<&'static str>,
    pub count: usize,
}

#[derive(Clone)]
pub struct TransliterationGateway {
    scripts: Arc<ScriptTable>,
    /// `None` when the engine failed to load at startup.
    engine: Option<Arc<dyn TransliterationEngine>>,
    defaults: RequestDefaults,
}

impl TransliterationGateway {
    pub fn new(
        scripts: Arc<ScriptTable>,
        engine: Option<Arc<dyn TransliterationEngine>>,
        defaults: RequestDefaults,
    ) -> Self {
        Self {
            scripts,
            engine,
            defaults,
        }
    }

    pub fn engine_available(&self) -> bool {
        self.engine.is_some()
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok",
            engine_available: self.engine_available(),
            supported_scripts: self.scripts.iter().collect(),
        }
    }

    pub fn supported_scripts(&self) -> SupportedScripts {
        let scripts = self.scripts.names();
        SupportedScripts {
            count: scripts.len(),
            scripts,
        }
    }

    pub fn script(&self, name: &str) -> Result<ScriptId, GatewayError> {
        self.scripts
            .resolve(name)
            .ok_or_else(|| GatewayError::ScriptNotFound(name.to_string()))
    }

    /// Fill omitted script names from the configured defaults.
    pub fn request(
        &self,
        text: String,
        source: Option<String>,
        target: Option<String>,
    ) -> TransliterationRequest {
        TransliterationRequest {
            text,
            source: source.unwrap_or_else(|| self.defaults.source.clone()),
            target: target.unwrap_or_else(|| self.defaults.target.clone()),
        }
    }

    pub fn transliterate(
        &self,
        request: &TransliterationRequest,
    ) -> Result<TransliterationResult, GatewayError> {
        let engine = self.engine.as_ref().ok_or(GatewayError::EngineUnavailable)?;

        let text = request.text.trim();
        if text.is_empty() {
            return Ok(TransliterationResult {
                result: String::new(),
            });
        }

        let source = self.resolve(ScriptRole::Source, &request.source)?;
        let target = self.resolve(ScriptRole::Target, &request.target)?;

        if source == target {
            tracing::debug!(script = %source, "identity conversion, engine skipped");
            return Ok(TransliterationResult {
                result: text.to_string(),
            });
        }

        tracing::debug!(
            source = %source,
            target = %target,
            chars = text.chars().count(),
            "invoking engine"
        );
        let result = engine
            .transliterate(text, source.scheme(), target.scheme())
            .map_err(|e| {
                tracing::warn!(source = %source, target = %target, error = %e, "engine failed");
                GatewayError::ConversionFailed(e.to_string())
            })?;

        Ok(TransliterationResult { result })
    }

    fn resolve(&self, role: ScriptRole, name: &str) -> Result<ScriptId, GatewayError> {
        self.scripts
            .resolve(name)
            .ok_or_else(|| GatewayError::UnknownScript {
                role,
                name: name.to_string(),
            })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingEngine;
    use super::*;
    use proptest::prelude::*;
    use vidyut_lipi::Scheme;

    fn gateway_with(engine: Arc<RecordingEngine>) -> TransliterationGateway {
        TransliterationGateway::new(
            Arc::new(ScriptTable::standard()),
            Some(engine),
            RequestDefaults::default(),
        )
    }

    fn req(text: &str, source: &str, target: &str) -> TransliterationRequest {
        TransliterationRequest {
            text: text.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    #[test]
    fn test_engine_called_once_with_trimmed_text() {
        let engine = Arc::new(RecordingEngine::default());
        let gateway = gateway_with(engine.clone());

        let out = gateway
            .transliterate(&req("  rAma \n", "harvard-kyoto", "devanagari"))
            .unwrap();

        assert_eq!(out.result, "<HarvardKyoto->Devanagari>rAma");
        assert_eq!(engine.call_count(), 1);
        assert_eq!(
            engine.last.lock().unwrap().clone(),
            Some(("rAma".to_string(), Scheme::HarvardKyoto, Scheme::Devanagari))
        );
    }

    #[test]
    fn test_engine_unavailable_checked_first() {
        let gateway = TransliterationGateway::new(
            Arc::new(ScriptTable::standard()),
            None,
            RequestDefaults::default(),
        );
        assert_eq!(
            gateway.transliterate(&req("", "klingon", "iast")),
            Err(GatewayError::EngineUnavailable)
        );
        assert!(!gateway.health().engine_available);
    }

    #[test]
    fn test_empty_text_short_circuits_before_validation() {
        let engine = Arc::new(RecordingEngine::default());
        let gateway = gateway_with(engine.clone());

        let out = gateway.transliterate(&req("   \t", "klingon", "elvish")).unwrap();
        assert_eq!(out.result, "");
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_unknown_source_reported_before_target() {
        let gateway = gateway_with(Arc::new(RecordingEngine::default()));
        let err = gateway
            .transliterate(&req("a", "Klingon", "elvish"))
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::UnknownScript {
                role: ScriptRole::Source,
                name: "Klingon".into()
            }
        );
        assert_eq!(err.to_string(), "Unsupported source script: Klingon");
    }

    #[test]
    fn test_unknown_target() {
        let gateway = gateway_with(Arc::new(RecordingEngine::default()));
        let err = gateway.transliterate(&req("a", "iast", "elvish")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported target script: elvish");
    }

    #[test]
    fn test_same_script_with_different_case_is_identity() {
        let engine = Arc::new(RecordingEngine::default());
        let gateway = gateway_with(engine.clone());

        let out = gateway.transliterate(&req(" rAma ", "IAST", "iast")).unwrap();
        assert_eq!(out.result, "rAma");
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_engine_failure_wrapped() {
        let engine = Arc::new(RecordingEngine::failing("unmappable input"));
        let gateway = gateway_with(engine.clone());

        let err = gateway
            .transliterate(&req("x", "slp1", "tamil"))
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::ConversionFailed("unmappable input".into())
        );
        assert_eq!(err.to_string(), "Transliteration failed: unmappable input");
        assert_eq!(engine.call_count(), 1);
    }

    #[test]
    fn test_request_uses_defaults_for_missing_scripts() {
        let gateway = gateway_with(Arc::new(RecordingEngine::default()));
        let request = gateway.request("namaH".into(), None, Some("iast".into()));
        assert_eq!(request, req("namaH", "baraha", "iast"));
    }

    #[test]
    fn test_health_and_scripts_listing() {
        let gateway = gateway_with(Arc::new(RecordingEngine::default()));

        let health = gateway.health();
        assert_eq!(health.status, "ok");
        assert!(health.engine_available);
        assert_eq!(health.supported_scripts, ScriptId::ALL.to_vec());

        let listing = gateway.supported_scripts();
        assert_eq!(listing.count, listing.scripts.len());
        assert_eq!(listing.count, 13);
    }

    #[test]
    fn test_script_lookup() {
        let gateway = gateway_with(Arc::new(RecordingEngine::default()));
        assert_eq!(gateway.script("WX"), Ok(ScriptId::Wx));
        assert_eq!(
            gateway.script("runes"),
            Err(GatewayError::ScriptNotFound("runes".into()))
        );
    }

    fn any_script() -> impl Strategy<Value = ScriptId> {
        prop::sample::select(ScriptId::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn identity_never_reaches_engine(script in any_script(), text in "[a-zA-Z ]{0,24}") {
            let engine = Arc::new(RecordingEngine::default());
            let gateway = gateway_with(engine.clone());

            let out = gateway
                .transliterate(&req(&text, script.name(), script.name()))
                .unwrap();
            prop_assert_eq!(out.result, text.trim());
            prop_assert_eq!(engine.call_count(), 0);
        }

        #[test]
        fn unknown_source_names_echo_back(name in "[a-z]{3,12}") {
            prop_assume!(ScriptTable::standard().resolve(&name).is_none());
            let gateway = gateway_with(Arc::new(RecordingEngine::default()));

            let err = gateway.transliterate(&req("a", &name, "devanagari")).unwrap_err();
            prop_assert!(err.to_string().contains(&name));
        }
    }
}
