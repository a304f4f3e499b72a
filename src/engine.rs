//! The transliteration engine seam.
//!
//! The gateway only knows the [`TransliterationEngine`] trait. Production
//! uses [`VidyutEngine`], a thin wrapper over `vidyut-lipi`; tests plug in
//! their own implementations.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use vidyut_lipi::{Mapping, Scheme};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The engine could not be brought up at startup.
    #[error("engine failed to load: {0}")]
    Load(String),

    /// The engine rejected or crashed on a particular input.
    #[error("{0}")]
    Conversion(String),
}

/// Converts text between two scheme tokens.
pub trait TransliterationEngine: Send + Sync {
    fn transliterate(&self, text: &str, from: Scheme, to: Scheme) -> Result<String, EngineError>;
}

/// `vidyut-lipi` backed engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct VidyutEngine {
    _private: (),
}

impl VidyutEngine {
    /// Probe text and its expected Devanagari rendering.
    const PROBE: (&'static str, &'static str) = ("a", "अ");

    /// Bring the engine up and check it converts a known input.
    pub fn load() -> Result<Self, EngineError> {
        let engine = Self { _private: () };
        let (input, expected) = Self::PROBE;
        let output = engine
            .transliterate(input, Scheme::Slp1, Scheme::Devanagari)
            .map_err(|e| EngineError::Load(e.to_string()))?;
        if output != expected {
            return Err(EngineError::Load(format!(
                "probe conversion of {input:?} produced {output:?}, expected {expected:?}"
            )));
        }
        tracing::debug!("vidyut-lipi probe conversion succeeded");
        Ok(engine)
    }
}

impl TransliterationEngine for VidyutEngine {
    fn transliterate(&self, text: &str, from: Scheme, to: Scheme) -> Result<String, EngineError> {
        let mapping = Mapping::new(from, to);
        run_guarded(|| vidyut_lipi::transliterate(text, &mapping))
    }
}

/// Runs one engine call, turning a panic into [`EngineError::Conversion`].
fn run_guarded<F>(convert: F) -> Result<String, EngineError>
where
    F: FnOnce() -> String,
{
    panic::catch_unwind(AssertUnwindSafe(convert))
        .map_err(|payload| EngineError::Conversion(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "engine panicked".to_string()
    }
}
