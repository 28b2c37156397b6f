use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::dispatcher;
use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const ITEMS: &str = "/items";
pub const ITEM: &str = "/items/{id}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Turn away verbs the dispatcher does not serve before any handler runs
///
/// axum answers HEAD through every `get` route, which would reach the store.
async fn dispatched_methods_only(request: Request, next: Next) -> Response {
    if dispatcher::route(request.method(), None).is_none() {
        return ApiError::MethodNotAllowed.into_response();
    }
    next.run(request).await
}

/// Router for running the item operations as a standalone HTTP service
///
/// Item routes accept exactly the verbs the Lambda dispatcher routes; any
/// other verb gets 405 with an empty body and no store call.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            ITEMS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler)
                .post(handlers::create_handler),
        )
        .route_layer(middleware::from_fn(dispatched_methods_only))
        .route(HEALTH, get(handlers::health_handler))
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
