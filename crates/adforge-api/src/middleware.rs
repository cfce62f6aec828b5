//! Middleware for the API surface. Request logging is handled by
//! tower-http's TraceLayer in the router; this module holds what remains.

use tower_http::cors::CorsLayer;

/// The tool is a single-user local service; any origin may call it.
pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}
