//! VedaVid transliteration gateway.
//!
//! A small HTTP service that validates script names, skips identity
//! conversions, and hands everything else to `vidyut-lipi`.
//!
//! ```text
//! client ──► api (axum) ──► TransliterationGateway ──► TransliterationEngine
//!                               │                         (vidyut-lipi)
//!                               └── ScriptTable (immutable, built at startup)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use vedavid_transliteration::{
//!     api::build_router, RequestDefaults, ScriptTable, TransliterationGateway, VidyutEngine,
//! };
//!
//! let engine = VidyutEngine::load()?;
//! let gateway = TransliterationGateway::new(
//!     Arc::new(ScriptTable::standard()),
//!     Some(Arc::new(engine)),
//!     RequestDefaults::default(),
//! );
//! let app = build_router(gateway);
//! ```

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod scripts;

pub use config::{RequestDefaults, ServerConfig};
pub use engine::{EngineError, TransliterationEngine, VidyutEngine};
pub use error::{GatewayError, ScriptRole};
pub use gateway::{
    HealthStatus, SupportedScripts, TransliterationGateway, TransliterationRequest,
    TransliterationResult,
};
pub use scripts::{ScriptId, ScriptTable};
