pub mod system;
pub mod users;

use crate::error::panic_response;
use crate::AppState;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Path segment every user route is mounted under.
pub const API_PREFIX: &str = "/api/v1";

// api router, where features are composed
pub fn app(state: AppState) -> Router {
    let api_router = Router::new().merge(users::users_router());

    let router = Router::new()
        .nest(API_PREFIX, api_router)
        .merge(system::system_router())
        .with_state(state);

    with_middleware(router)
}

// applied after all routes are registered: the method fallback only covers
// routes that already exist
pub fn with_middleware(router: Router) -> Router {
    router
        .fallback(system::not_found_handler)
        .method_not_allowed_fallback(system::not_found_handler)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
