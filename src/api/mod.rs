//! HTTP surface.
//!
//! ```text
//! GET  /health          engine status + supported scripts
//! GET  /scripts         supported script names
//! GET  /scripts/:name   label and scheme token of one script
//! POST /transliterate   convert text between two scripts
//! ```

pub mod transliteration_routes;
pub mod types;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use transliteration_routes::create_transliteration_router;

use crate::gateway::TransliterationGateway;

/// Full application router: endpoints plus tracing and permissive CORS.
pub fn build_router(gateway: TransliterationGateway) -> axum::Router {
    create_transliteration_router(gateway).layer(
        ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        ),
    )
}
