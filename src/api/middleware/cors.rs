//! Cross-origin request policy.

use tower_http::cors::{Any, CorsLayer};

/// Allows any origin, method and header.
///
/// The browser forms that talk to this API are served from arbitrary hosts
/// and never send credentials.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
